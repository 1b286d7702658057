//! Crisis detection and response.
//!
//! Signal extraction (tiered phrase matching), severity resolution
//! (emotion escalation + protective downgrade), and response/resource
//! selection. Every call is pure over immutable catalog data.

pub mod catalog;
pub mod emotion;
pub mod engine;
pub mod extractor;
pub mod normalize;
pub mod resolver;
pub mod resources;
pub mod responder;
pub mod types;

pub use catalog::KeywordCatalog;
pub use emotion::{EmotionClassifier, KeywordEmotionClassifier};
pub use engine::{crisis_response, detect_crisis, CrisisEngine};
pub use extractor::{MatchMode, SignalExtractor, SignalMatches};
pub use resolver::{ResolverPolicy, SeverityResolver};
pub use resources::{resources_for, ResourceKind, SupportResource};
pub use types::{
    Assessment, CatalogError, CrisisLevel, DetectionResult, EmotionError, EmotionSignal,
    RecommendedAction, Sentiment, SupportResponse,
};
