use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::catalog::KeywordCatalog;
use super::normalize::normalize_text;
use super::types::{CatalogError, CrisisLevel};

/// How a catalog phrase must appear in the normalized text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Raw substring containment: `"gun"` matches inside `"begun"`.
    #[default]
    Substring,
    /// Phrase must start and end on a word boundary.
    WordBoundary,
}

/// Catalog phrases found in one utterance, each tier in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalMatches {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
    pub protective: Vec<String>,
}

impl SignalMatches {
    /// Highest tier with at least one match, or `None`.
    pub fn base_level(&self) -> CrisisLevel {
        if !self.high.is_empty() {
            CrisisLevel::High
        } else if !self.medium.is_empty() {
            CrisisLevel::Medium
        } else if !self.low.is_empty() {
            CrisisLevel::Low
        } else {
            CrisisLevel::None
        }
    }

    /// All risk matches, high tier first.
    pub fn triggers(&self) -> Vec<String> {
        self.high
            .iter()
            .chain(&self.medium)
            .chain(&self.low)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.high.is_empty()
            && self.medium.is_empty()
            && self.low.is_empty()
            && self.protective.is_empty()
    }
}

/// Word-boundary patterns, one per phrase, index-aligned with the catalog.
#[derive(Debug, Clone)]
struct BoundaryPatterns {
    high: Vec<Regex>,
    medium: Vec<Regex>,
    low: Vec<Regex>,
    protective: Vec<Regex>,
}

impl BoundaryPatterns {
    fn compile(catalog: &KeywordCatalog) -> Result<Self, CatalogError> {
        Ok(Self {
            high: compile_tier(catalog.tier(CrisisLevel::High))?,
            medium: compile_tier(catalog.tier(CrisisLevel::Medium))?,
            low: compile_tier(catalog.tier(CrisisLevel::Low))?,
            protective: compile_tier(catalog.protective())?,
        })
    }
}

fn compile_tier(phrases: &[String]) -> Result<Vec<Regex>, CatalogError> {
    phrases
        .iter()
        .map(|p| {
            Regex::new(&format!(r"\b{}\b", regex::escape(p)))
                .map_err(|e| CatalogError::Pattern(p.clone(), e))
        })
        .collect()
}

/// Scans text against the catalog. Pure: no state beyond the shared catalog.
#[derive(Debug, Clone)]
pub struct SignalExtractor {
    catalog: Arc<KeywordCatalog>,
    boundaries: Option<Arc<BoundaryPatterns>>,
}

impl SignalExtractor {
    /// Substring-mode extractor. Infallible.
    pub fn new(catalog: Arc<KeywordCatalog>) -> Self {
        Self {
            catalog,
            boundaries: None,
        }
    }

    /// Extractor for an explicit mode. Word-boundary mode compiles one
    /// pattern per phrase up front.
    pub fn with_mode(catalog: Arc<KeywordCatalog>, mode: MatchMode) -> Result<Self, CatalogError> {
        let boundaries = match mode {
            MatchMode::Substring => None,
            MatchMode::WordBoundary => Some(Arc::new(BoundaryPatterns::compile(&catalog)?)),
        };
        Ok(Self { catalog, boundaries })
    }

    pub fn mode(&self) -> MatchMode {
        if self.boundaries.is_some() {
            MatchMode::WordBoundary
        } else {
            MatchMode::Substring
        }
    }

    pub fn catalog(&self) -> &KeywordCatalog {
        &self.catalog
    }

    pub(crate) fn shared_catalog(&self) -> Arc<KeywordCatalog> {
        Arc::clone(&self.catalog)
    }

    pub fn extract(&self, text: &str) -> SignalMatches {
        let normalized = normalize_text(text);
        if normalized.is_empty() {
            return SignalMatches::default();
        }

        let catalog = &self.catalog;
        match &self.boundaries {
            None => SignalMatches {
                high: substring_matches(catalog.tier(CrisisLevel::High), &normalized),
                medium: substring_matches(catalog.tier(CrisisLevel::Medium), &normalized),
                low: substring_matches(catalog.tier(CrisisLevel::Low), &normalized),
                protective: substring_matches(catalog.protective(), &normalized),
            },
            Some(b) => SignalMatches {
                high: boundary_matches(catalog.tier(CrisisLevel::High), &b.high, &normalized),
                medium: boundary_matches(catalog.tier(CrisisLevel::Medium), &b.medium, &normalized),
                low: boundary_matches(catalog.tier(CrisisLevel::Low), &b.low, &normalized),
                protective: boundary_matches(catalog.protective(), &b.protective, &normalized),
            },
        }
    }
}

fn substring_matches(phrases: &[String], text: &str) -> Vec<String> {
    phrases
        .iter()
        .filter(|p| text.contains(p.as_str()))
        .cloned()
        .collect()
}

fn boundary_matches(phrases: &[String], patterns: &[Regex], text: &str) -> Vec<String> {
    phrases
        .iter()
        .zip(patterns)
        .filter(|(_, re)| re.is_match(text))
        .map(|(p, _)| p.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> SignalExtractor {
        SignalExtractor::new(Arc::new(KeywordCatalog::builtin()))
    }

    fn boundary_extractor() -> SignalExtractor {
        SignalExtractor::with_mode(Arc::new(KeywordCatalog::builtin()), MatchMode::WordBoundary)
            .unwrap()
    }

    #[test]
    fn empty_text_yields_nothing() {
        let m = extractor().extract("");
        assert!(m.is_empty());
        assert_eq!(m.base_level(), CrisisLevel::None);
    }

    #[test]
    fn case_insensitive() {
        for text in ["I want to KILL MYSELF", "i want to kill myself", "Kill Myself"] {
            let m = extractor().extract(text);
            assert_eq!(m.high, ["kill myself"], "missed in: {text}");
        }
    }

    #[test]
    fn catalog_order_not_text_order() {
        // "overdose" precedes "suicide" in the text; catalog lists suicide first.
        let m = extractor().extract("overdose, suicide");
        assert_eq!(m.high, ["suicide", "overdose"]);
    }

    #[test]
    fn repeated_phrase_reported_once() {
        let m = extractor().extract("overwhelmed, so overwhelmed, overwhelmed again");
        assert_eq!(m.low, ["overwhelmed"]);
    }

    #[test]
    fn overlapping_phrases_all_reported() {
        // "cut myself deep" contains "cut myself" (medium) and "cutting" does not apply.
        let m = extractor().extract("I cut myself deep last night");
        assert_eq!(m.high, ["cut myself deep"]);
        assert_eq!(m.medium, ["cut myself"]);
    }

    #[test]
    fn triggers_ordered_high_medium_low() {
        let m = extractor().extract("I feel overwhelmed, no hope, thinking about suicide");
        assert_eq!(m.triggers(), ["suicide", "no hope", "overwhelmed"]);
        assert_eq!(m.base_level(), CrisisLevel::High);
    }

    #[test]
    fn protective_matches() {
        let m = extractor().extract("My therapy is going well and I have future plans");
        assert_eq!(m.protective, ["therapy", "future plans"]);
        assert!(m.triggers().is_empty());
    }

    #[test]
    fn invisible_characters_do_not_hide_phrases() {
        let m = extractor().extract("I want to k\u{200B}ill my\u{200C}self");
        assert_eq!(m.high, ["kill myself"]);
    }

    #[test]
    fn deterministic() {
        let e = extractor();
        let text = "Breaking down, cutting, hope";
        assert_eq!(e.extract(text), e.extract(text));
    }

    #[test]
    fn mode_reported() {
        assert_eq!(extractor().mode(), MatchMode::Substring);
        assert_eq!(boundary_extractor().mode(), MatchMode::WordBoundary);
    }

    // =================================================================
    // SUBSTRING vs WORD-BOUNDARY
    // =================================================================

    #[test]
    fn substring_mode_matches_inside_words() {
        let m = extractor().extract("the lesson has begun");
        assert_eq!(m.high, ["gun"]);
        let m = extractor().extract("I feel hopeless");
        assert_eq!(m.protective, ["hope"]);
    }

    #[test]
    fn word_boundary_mode_requires_whole_words() {
        let m = boundary_extractor().extract("the lesson has begun");
        assert!(m.high.is_empty());
        let m = boundary_extractor().extract("I feel hopeless");
        assert!(m.protective.is_empty());
    }

    #[test]
    fn word_boundary_mode_still_matches_phrases() {
        let m = boundary_extractor().extract("I want to kill myself.");
        assert_eq!(m.high, ["kill myself"]);
        let m = boundary_extractor().extract("there is no hope");
        assert_eq!(m.medium, ["no hope"]);
        assert_eq!(m.protective, ["hope"]);
    }

    #[test]
    fn adversarial_high_phrases_detected() {
        let texts = [
            "I've decided to end my life tonight",
            "Everyone would be better off dead without me, me better off dead",
            "I bought rope to hang myself",
            "I have pills to overdose",
            "I keep having violent thoughts about my boss",
            "Thinking about the bridge to jump from",
        ];
        for text in texts {
            let m = extractor().extract(text);
            assert_eq!(m.base_level(), CrisisLevel::High, "Should be high: {text}");
        }
    }

    #[test]
    fn benign_texts_not_flagged() {
        let texts = [
            "Today was fine, just a bit tired",
            "I had a great lunch with my sister",
            "Work was busy but manageable",
            "Can you recommend a good book?",
        ];
        for text in texts {
            let m = extractor().extract(text);
            assert!(m.is_empty(), "False positive on: {text} -> {m:?}");
        }
    }
}
