use std::sync::{Arc, LazyLock};

use rand::Rng;

use super::catalog::KeywordCatalog;
use super::emotion::EmotionClassifier;
use super::extractor::{MatchMode, SignalExtractor, SignalMatches};
use super::resolver::{ResolverPolicy, SeverityResolver};
use super::responder;
use super::types::{
    Assessment, CatalogError, CrisisLevel, DetectionResult, EmotionSignal, SupportResponse,
};

/// Crisis detection and response, wired once at startup.
///
/// Immutable after construction; clone freely and share across threads.
#[derive(Debug, Clone)]
pub struct CrisisEngine {
    extractor: SignalExtractor,
    resolver: SeverityResolver,
}

impl CrisisEngine {
    pub fn new(catalog: Arc<KeywordCatalog>) -> Self {
        Self {
            extractor: SignalExtractor::new(catalog),
            resolver: SeverityResolver::default(),
        }
    }

    /// Engine over the built-in catalog, substring matching, default policy.
    pub fn builtin() -> Self {
        Self::new(Arc::new(KeywordCatalog::builtin()))
    }

    pub fn with_policy(mut self, policy: ResolverPolicy) -> Self {
        self.resolver = SeverityResolver::new(policy);
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Result<Self, CatalogError> {
        self.extractor = SignalExtractor::with_mode(self.extractor.shared_catalog(), mode)?;
        Ok(self)
    }

    pub fn match_mode(&self) -> MatchMode {
        self.extractor.mode()
    }

    pub fn policy(&self) -> &ResolverPolicy {
        self.resolver.policy()
    }

    /// Raw tiered matches, before resolution.
    pub fn extract(&self, text: &str) -> SignalMatches {
        self.extractor.extract(text)
    }

    /// Classify one utterance. Total: never fails, never logs the text.
    pub fn detect(&self, text: &str, emotion: Option<&EmotionSignal>) -> DetectionResult {
        let matches = self.extractor.extract(text);
        let result = self.resolver.resolve(&matches, emotion);
        log_detection(&result);
        result
    }

    pub fn respond(&self, level: CrisisLevel) -> SupportResponse {
        responder::respond(level)
    }

    pub fn respond_with<R: Rng + ?Sized>(&self, level: CrisisLevel, rng: &mut R) -> SupportResponse {
        responder::respond_with(level, rng)
    }

    pub fn respond_indexed(&self, level: CrisisLevel, index: usize) -> SupportResponse {
        responder::respond_indexed(level, index)
    }

    /// Classify emotion, detect, and pick a response in one pass.
    ///
    /// A failing classifier is logged and treated as "no signal"; it can
    /// never suppress keyword detection.
    pub fn assess(&self, text: &str, classifier: &dyn EmotionClassifier) -> Assessment {
        let emotion = match classifier.classify(text) {
            Ok(signal) => Some(signal),
            Err(e) => {
                tracing::warn!(error = %e, "Crisis engine: emotion classifier failed, continuing without signal");
                None
            }
        };
        let detection = self.detect(text, emotion.as_ref());
        let response = self.respond(detection.crisis_level);
        Assessment {
            detection,
            response,
            emotion,
        }
    }
}

impl Default for CrisisEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Log a detection outcome WITHOUT user text.
fn log_detection(result: &DetectionResult) {
    match result.crisis_level {
        CrisisLevel::High | CrisisLevel::Medium => {
            tracing::warn!(
                level = result.crisis_level.as_str(),
                action = result.recommended_action.as_str(),
                triggers = result.triggers.len(),
                protective = result.protective_factors.len(),
                "Crisis indicators detected"
            );
        }
        CrisisLevel::Low => {
            tracing::info!(
                level = "low",
                triggers = result.triggers.len(),
                protective = result.protective_factors.len(),
                "Mild distress indicators detected"
            );
        }
        CrisisLevel::None => {
            tracing::debug!(
                protective = result.protective_factors.len(),
                "No crisis indicators"
            );
        }
    }
}

static DEFAULT_ENGINE: LazyLock<CrisisEngine> = LazyLock::new(CrisisEngine::builtin);

/// Detect with the built-in engine.
pub fn detect_crisis(text: &str, emotion: Option<&EmotionSignal>) -> DetectionResult {
    DEFAULT_ENGINE.detect(text, emotion)
}

/// Respond with the built-in engine.
pub fn crisis_response(level: CrisisLevel) -> SupportResponse {
    DEFAULT_ENGINE.respond(level)
}
