//! Severity resolution: tiered matches + optional emotion signal -> one level.
//!
//! Order of evaluation:
//! 1. Base level from the highest matched tier.
//! 2. Emotion escalation `None -> Low`, only when no keyword matched.
//! 3. Protective downgrade by one tier, applied once.

use serde::{Deserialize, Serialize};

use super::extractor::SignalMatches;
use super::types::{CrisisLevel, DetectionResult, EmotionSignal, Sentiment};

/// Emotion escalation policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverPolicy {
    /// Confidence must be strictly greater than this.
    pub escalation_confidence: f32,
    /// Primary emotions that qualify, compared lower-cased.
    pub escalation_emotions: Vec<String>,
}

impl Default for ResolverPolicy {
    fn default() -> Self {
        Self {
            escalation_confidence: 0.8,
            escalation_emotions: vec!["sad".into(), "anxious".into()],
        }
    }
}

impl ResolverPolicy {
    /// Whether `signal` alone justifies raising `None` to `Low`.
    pub fn qualifies(&self, signal: &EmotionSignal) -> bool {
        if !signal.is_well_formed() || signal.sentiment != Sentiment::Negative {
            return false;
        }
        if signal.confidence <= self.escalation_confidence {
            return false;
        }
        let emotion = signal.primary_emotion.trim();
        self.escalation_emotions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(emotion))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeverityResolver {
    policy: ResolverPolicy,
}

impl SeverityResolver {
    pub fn new(policy: ResolverPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ResolverPolicy {
        &self.policy
    }

    pub fn resolve(&self, matches: &SignalMatches, emotion: Option<&EmotionSignal>) -> DetectionResult {
        let base = matches.base_level();
        let mut level = base;

        if level == CrisisLevel::None {
            if let Some(signal) = emotion.filter(|s| self.policy.qualifies(s)) {
                tracing::debug!(
                    confidence = signal.confidence,
                    "Crisis resolver: emotion signal escalated none -> low"
                );
                level = CrisisLevel::Low;
            }
        }

        if level != CrisisLevel::None && !matches.protective.is_empty() {
            let softened = level.step_down();
            tracing::debug!(
                from = level.as_str(),
                to = softened.as_str(),
                protective = matches.protective.len(),
                "Crisis resolver: protective factors applied"
            );
            level = softened;
        }

        DetectionResult::from_level(level, matches.triggers(), matches.protective.clone())
    }
}
