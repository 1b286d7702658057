use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// CrisisLevel
// ---------------------------------------------------------------------------

/// Ordinal crisis severity assigned to a single utterance.
///
/// Variant order is the severity order: `None < Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CrisisLevel {
    /// No evidence of crisis.
    #[default]
    None,
    /// Mild distress: support-line resources, no emergency escalation.
    Low,
    /// Self-harm or less immediate ideation: urgent support.
    Medium,
    /// Suicide, serious self-harm or harm to others: immediate intervention.
    High,
}

impl CrisisLevel {
    /// All levels in ascending severity.
    pub const ALL: [CrisisLevel; 4] = [Self::None, Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Soften by exactly one tier. `Low` never drops to `None`: protective
    /// factors soften a detected risk but do not cancel it.
    pub fn step_down(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::Low,
            Self::None => Self::None,
        }
    }

    pub fn recommended_action(self) -> RecommendedAction {
        match self {
            Self::High => RecommendedAction::ImmediateIntervention,
            Self::Medium => RecommendedAction::UrgentSupport,
            Self::Low => RecommendedAction::SupportiveResources,
            Self::None => RecommendedAction::ContinueConversation,
        }
    }
}

impl std::fmt::Display for CrisisLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RecommendedAction
// ---------------------------------------------------------------------------

/// Coarse directive for the collaborator UI, derived solely from the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    /// Blocking crisis overlay with emergency resources.
    ImmediateIntervention,
    UrgentSupport,
    SupportiveResources,
    ContinueConversation,
}

impl RecommendedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImmediateIntervention => "immediate_intervention",
            Self::UrgentSupport => "urgent_support",
            Self::SupportiveResources => "supportive_resources",
            Self::ContinueConversation => "continue_conversation",
        }
    }
}

impl std::fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EmotionSignal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// Externally computed sentiment/emotion classification.
///
/// Every field defaults, so a partially populated signal deserializes fine
/// and simply never qualifies for escalation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionSignal {
    pub sentiment: Sentiment,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: f32,
    #[serde(alias = "primaryEmotion")]
    pub primary_emotion: String,
}

impl EmotionSignal {
    pub fn new(sentiment: Sentiment, confidence: f32, primary_emotion: impl Into<String>) -> Self {
        Self {
            sentiment,
            confidence,
            primary_emotion: primary_emotion.into(),
        }
    }

    /// A confidence outside `[0, 1]` (or NaN) marks the signal as malformed.
    pub fn is_well_formed(&self) -> bool {
        (0.0..=1.0).contains(&self.confidence)
    }
}

// ---------------------------------------------------------------------------
// DetectionResult
// ---------------------------------------------------------------------------

/// Outcome of one `detect` call. Produced fresh per call, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub crisis_detected: bool,
    pub crisis_level: CrisisLevel,
    /// Matched risk phrases: high tier first, then medium, then low.
    pub triggers: Vec<String>,
    pub protective_factors: Vec<String>,
    pub immediate_risk: bool,
    pub recommended_action: RecommendedAction,
}

impl DetectionResult {
    /// Build a result whose derived fields agree with `level`.
    pub fn from_level(
        level: CrisisLevel,
        triggers: Vec<String>,
        protective_factors: Vec<String>,
    ) -> Self {
        Self {
            crisis_detected: level != CrisisLevel::None,
            crisis_level: level,
            triggers,
            protective_factors,
            immediate_risk: level == CrisisLevel::High,
            recommended_action: level.recommended_action(),
        }
    }
}

// ---------------------------------------------------------------------------
// SupportResponse
// ---------------------------------------------------------------------------

/// Supportive text plus resource lines for one crisis level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportResponse {
    pub message: String,
    /// Rendered as `"{name}: {contact}"`.
    pub resources: Vec<String>,
}

/// Detection and response produced together by `CrisisEngine::assess`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub detection: DetectionResult,
    pub response: SupportResponse,
    /// Signal the classifier produced, if it succeeded.
    pub emotion: Option<EmotionSignal>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Keyword catalog configuration errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog read failed ({0}): {1}")]
    Io(String, #[source] std::io::Error),

    #[error("Catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no risk phrases")]
    Empty,

    #[error("Phrase pattern compilation failed ({0}): {1}")]
    Pattern(String, #[source] regex::Error),
}

/// Emotion classifier backend errors. Never fatal to detection.
#[derive(Error, Debug)]
pub enum EmotionError {
    #[error("Emotion classifier unavailable: {0}")]
    Unavailable(String),

    #[error("Emotion classifier returned an invalid response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ordering() {
        assert!(CrisisLevel::None < CrisisLevel::Low);
        assert!(CrisisLevel::Low < CrisisLevel::Medium);
        assert!(CrisisLevel::Medium < CrisisLevel::High);
        assert_eq!(CrisisLevel::ALL.iter().max(), Some(&CrisisLevel::High));
    }

    #[test]
    fn step_down_is_one_tier() {
        assert_eq!(CrisisLevel::High.step_down(), CrisisLevel::Medium);
        assert_eq!(CrisisLevel::Medium.step_down(), CrisisLevel::Low);
        assert_eq!(CrisisLevel::Low.step_down(), CrisisLevel::Low);
        assert_eq!(CrisisLevel::None.step_down(), CrisisLevel::None);
    }

    #[test]
    fn action_table() {
        assert_eq!(
            CrisisLevel::High.recommended_action().as_str(),
            "immediate_intervention"
        );
        assert_eq!(
            CrisisLevel::Medium.recommended_action().as_str(),
            "urgent_support"
        );
        assert_eq!(
            CrisisLevel::Low.recommended_action().as_str(),
            "supportive_resources"
        );
        assert_eq!(
            CrisisLevel::None.recommended_action().as_str(),
            "continue_conversation"
        );
    }

    #[test]
    fn serde_names_match_display() {
        for level in CrisisLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level));
            let action = level.recommended_action();
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action));
        }
    }

    #[test]
    fn from_level_keeps_invariants() {
        for level in CrisisLevel::ALL {
            let r = DetectionResult::from_level(level, vec![], vec![]);
            assert_eq!(r.crisis_detected, level != CrisisLevel::None);
            assert_eq!(r.immediate_risk, level == CrisisLevel::High);
            assert_eq!(r.recommended_action, level.recommended_action());
        }
    }

    #[test]
    fn emotion_signal_accepts_camel_case() {
        let signal: EmotionSignal = serde_json::from_str(
            r#"{"sentiment":"negative","confidence":0.95,"primaryEmotion":"anxious"}"#,
        )
        .unwrap();
        assert_eq!(signal.sentiment, Sentiment::Negative);
        assert_eq!(signal.primary_emotion, "anxious");
    }

    #[test]
    fn partial_emotion_signal_defaults() {
        let signal: EmotionSignal = serde_json::from_str(r#"{"confidence":0.9}"#).unwrap();
        assert_eq!(signal.sentiment, Sentiment::Neutral);
        assert!(signal.primary_emotion.is_empty());
    }

    #[test]
    fn malformed_confidence_detected() {
        assert!(EmotionSignal::new(Sentiment::Negative, 0.9, "sad").is_well_formed());
        assert!(!EmotionSignal::new(Sentiment::Negative, 1.5, "sad").is_well_formed());
        assert!(!EmotionSignal::new(Sentiment::Negative, -0.1, "sad").is_well_formed());
        assert!(!EmotionSignal::new(Sentiment::Negative, f32::NAN, "sad").is_well_formed());
    }
}
