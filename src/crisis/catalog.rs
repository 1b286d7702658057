//! Keyword catalog: three ranked risk tiers plus protective factors.
//!
//! Built once at startup and shared read-only. Phrases are normalized at
//! construction so matching never re-normalizes catalog data.

use std::path::Path;

use serde::Deserialize;

use super::normalize::normalize_phrase;
use super::types::{CatalogError, CrisisLevel};

// ── Built-in phrase sets ────────────────────────────────────

static HIGH_PHRASES: &[&str] = &[
    // Suicide
    "suicide", "kill myself", "end my life", "take my life", "want to die",
    "ending it all", "no point living", "better off dead", "suicide plan",
    "overdose", "hanging", "jump off", "cut myself deep", "razor blade",
    // Serious self-harm
    "hurt myself badly", "cut deep", "burn myself", "harm myself seriously",
    // Violence to others
    "kill someone", "hurt others", "violent thoughts", "homicidal",
    // Means / immediate danger
    "gun", "pills to overdose", "rope to hang", "bridge to jump",
];

static MEDIUM_PHRASES: &[&str] = &[
    // Self-harm
    "self harm", "cut myself", "scratch myself", "hurt myself", "self injury",
    "cutting", "burning myself", "hitting myself", "self mutilation",
    // Less immediate ideation
    "thoughts of death", "wish i was dead", "life not worth living",
    "everyone better without me", "disappear forever", "escape everything",
    "tired of living", "give up on life",
    // Severe depression
    "cant go on", "no hope", "everything is pointless", "nothing matters",
    "too much pain", "unbearable", "overwhelming sadness",
];

static LOW_PHRASES: &[&str] = &[
    "feeling hopeless", "very depressed", "extremely sad", "deeply troubled",
    "crisis", "breaking down", "falling apart", "cant cope", "overwhelmed",
    "desperate", "panic attack", "severe anxiety", "mental breakdown",
];

static PROTECTIVE_PHRASES: &[&str] = &[
    "getting help", "therapy", "therapist", "counseling", "support system",
    "family support", "friends care", "seeking treatment", "medication helping",
    "feeling better", "things improving", "hope", "future plans", "goals",
    "looking forward",
];

// ── Catalog ─────────────────────────────────────────────────

/// Immutable phrase catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCatalog {
    high: Vec<String>,
    medium: Vec<String>,
    low: Vec<String>,
    protective: Vec<String>,
}

/// On-disk catalog layout. Missing tiers are empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CatalogFile {
    high: Vec<String>,
    medium: Vec<String>,
    low: Vec<String>,
    protective: Vec<String>,
}

impl KeywordCatalog {
    /// Build a catalog from raw phrase lists.
    ///
    /// Fails with [`CatalogError::Empty`] when no risk tier has a phrase:
    /// such a catalog would silently detect nothing.
    pub fn new<S: AsRef<str>>(
        high: &[S],
        medium: &[S],
        low: &[S],
        protective: &[S],
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            high: normalize_tier(high),
            medium: normalize_tier(medium),
            low: normalize_tier(low),
            protective: normalize_tier(protective),
        };
        if catalog.high.is_empty() && catalog.medium.is_empty() && catalog.low.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    /// The production phrase lists.
    pub fn builtin() -> Self {
        Self {
            high: normalize_tier(HIGH_PHRASES),
            medium: normalize_tier(MEDIUM_PHRASES),
            low: normalize_tier(LOW_PHRASES),
            protective: normalize_tier(PROTECTIVE_PHRASES),
        }
    }

    /// Parse a JSON catalog: `{"high": [..], "medium": [..], "low": [..], "protective": [..]}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(
            file.high.as_slice(),
            file.medium.as_slice(),
            file.low.as_slice(),
            file.protective.as_slice(),
        )
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(path.display().to_string(), e))?;
        Self::from_json(&json)
    }

    /// Load the override catalog when one is configured, falling back to the
    /// built-in lists on any error. A bad override never disables detection.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        match Self::load(path) {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    high = catalog.high.len(),
                    medium = catalog.medium.len(),
                    low = catalog.low.len(),
                    protective = catalog.protective.len(),
                    "Crisis catalog: loaded override"
                );
                catalog
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Crisis catalog: override unusable, using built-in phrases"
                );
                Self::builtin()
            }
        }
    }

    /// Phrases of one risk tier. `CrisisLevel::None` has no phrases.
    pub fn tier(&self, level: CrisisLevel) -> &[String] {
        match level {
            CrisisLevel::High => &self.high,
            CrisisLevel::Medium => &self.medium,
            CrisisLevel::Low => &self.low,
            CrisisLevel::None => &[],
        }
    }

    pub fn protective(&self) -> &[String] {
        &self.protective
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Normalize, drop empties, and keep the first occurrence of repeated phrases.
fn normalize_tier<S: AsRef<str>>(phrases: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(phrases.len());
    for phrase in phrases {
        let normalized = normalize_phrase(phrase.as_ref());
        if !normalized.is_empty() && !out.contains(&normalized) {
            out.push(normalized);
        }
    }
    out
}
