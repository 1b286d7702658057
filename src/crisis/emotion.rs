//! Emotion classification seam.
//!
//! The crisis core only consumes `EmotionSignal`s. Where they come from (a
//! remote sentiment service, a local model, the rule-based classifier below)
//! is the caller's choice.

use std::sync::LazyLock;

use regex::Regex;

use super::normalize::normalize_text;
use super::types::{EmotionError, EmotionSignal, Sentiment};

/// Produces an emotion signal for one utterance.
pub trait EmotionClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<EmotionSignal, EmotionError>;
}

/// One rule: any keyword present as a whole word -> this emotion.
struct EmotionRule {
    emotion: &'static str,
    sentiment: Sentiment,
    keywords: &'static [&'static str],
}

/// Checked in order; first match wins.
static EMOTION_RULES: &[EmotionRule] = &[
    EmotionRule {
        emotion: "sad",
        sentiment: Sentiment::Negative,
        keywords: &[
            "sad", "sadness", "depressed", "feeling down", "feel down", "upset", "cry",
            "crying", "cried",
        ],
    },
    EmotionRule {
        emotion: "anxious",
        sentiment: Sentiment::Negative,
        keywords: &[
            "anxious", "anxiety", "worried", "worrying", "stress", "stressed", "nervous",
        ],
    },
    EmotionRule {
        emotion: "angry",
        sentiment: Sentiment::Negative,
        keywords: &["angry", "mad", "furious", "irritated"],
    },
    EmotionRule {
        emotion: "happy",
        sentiment: Sentiment::Positive,
        keywords: &["happy", "joy", "excited", "great", "wonderful"],
    },
    EmotionRule {
        emotion: "scared",
        sentiment: Sentiment::Negative,
        keywords: &["scared", "afraid", "fear", "terrified"],
    },
];

/// Confidence reported when a keyword rule fires.
pub const KEYWORD_MATCH_CONFIDENCE: f32 = 0.85;
/// Confidence reported for the neutral fallback.
pub const NEUTRAL_CONFIDENCE: f32 = 0.5;

/// One `\b(?:kw|kw..)\b` pattern per rule, index-aligned with `EMOTION_RULES`.
static RULE_PATTERNS: LazyLock<Vec<Option<Regex>>> = LazyLock::new(|| {
    EMOTION_RULES
        .iter()
        .map(|rule| {
            let alternatives: Vec<String> =
                rule.keywords.iter().map(|kw| regex::escape(kw)).collect();
            match Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|"))) {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::warn!(emotion = rule.emotion, error = %e, "Emotion rule skipped");
                    None
                }
            }
        })
        .collect()
});

/// Rule-based classifier. Keywords match on word boundaries: the
/// `sad`/`anxious` labels feed crisis escalation, so "download" or
/// "crystal" must not register.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordEmotionClassifier;

impl EmotionClassifier for KeywordEmotionClassifier {
    fn classify(&self, text: &str) -> Result<EmotionSignal, EmotionError> {
        let normalized = normalize_text(text);

        let signal = EMOTION_RULES
            .iter()
            .zip(RULE_PATTERNS.iter())
            .find(|(_, pattern)| pattern.as_ref().is_some_and(|re| re.is_match(&normalized)))
            .map(|(rule, _)| rule)
            .map(|rule| EmotionSignal::new(rule.sentiment, KEYWORD_MATCH_CONFIDENCE, rule.emotion))
            .unwrap_or_else(|| EmotionSignal::new(Sentiment::Neutral, NEUTRAL_CONFIDENCE, "neutral"));

        Ok(signal)
    }
}
