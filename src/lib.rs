pub mod config;
pub mod crisis; // Crisis detection, severity resolution, support responses

pub use crisis::{
    crisis_response, detect_crisis, CrisisEngine, CrisisLevel, DetectionResult, EmotionSignal,
    KeywordCatalog, RecommendedAction, SupportResponse,
};

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber for host applications that have none.
///
/// Honors `RUST_LOG`, falling back to [`config::default_log_filter`]. Safe to
/// call more than once; later calls are no-ops.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} crisis core v{}", config::APP_NAME, config::APP_VERSION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn root_reexports_cover_the_contract() {
        let result: DetectionResult = detect_crisis("I want to die", None);
        assert_eq!(result.crisis_level, CrisisLevel::High);
        let response: SupportResponse = crisis_response(result.crisis_level);
        assert_eq!(response.resources.len(), 3);
    }
}
