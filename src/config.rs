use std::path::{Path, PathBuf};

use crate::crisis::{CatalogError, CrisisEngine, KeywordCatalog, MatchMode};

/// Application-level constants
pub const APP_NAME: &str = "Solace";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Env var naming an override keyword catalog (JSON).
pub const CATALOG_ENV: &str = "SOLACE_CATALOG";
/// Env var selecting phrase matching: `substring` (default) or `word_boundary`.
pub const MATCH_MODE_ENV: &str = "SOLACE_MATCH_MODE";

const CATALOG_FILE: &str = "catalog.json";

/// Default `tracing` filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info,solace_lib=info"
}

/// Per-user configuration directory, e.g. `~/.config/solace/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("solace"))
}

/// Resolve the override catalog path.
///
/// Priority:
/// 1. `SOLACE_CATALOG` env var (explicit override)
/// 2. `<config_dir>/catalog.json` if it exists
/// 3. `None`: use the built-in catalog
pub fn catalog_path() -> Option<PathBuf> {
    resolve_catalog_path(std::env::var(CATALOG_ENV).ok(), config_dir().as_deref())
}

fn resolve_catalog_path(env_value: Option<String>, config_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = env_value.filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(path));
    }
    config_dir
        .map(|d| d.join(CATALOG_FILE))
        .filter(|p| p.is_file())
}

/// Match mode from `SOLACE_MATCH_MODE`; unknown values fall back to substring.
pub fn match_mode() -> MatchMode {
    parse_match_mode(std::env::var(MATCH_MODE_ENV).ok().as_deref())
}

fn parse_match_mode(value: Option<&str>) -> MatchMode {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("word_boundary") | Some("word-boundary") | Some("word") => MatchMode::WordBoundary,
        Some("substring") | None => MatchMode::Substring,
        Some(other) => {
            tracing::warn!(value = other, "Unknown match mode, using substring");
            MatchMode::Substring
        }
    }
}

/// Build the process-wide engine from the environment.
pub fn engine_from_env() -> Result<CrisisEngine, CatalogError> {
    let path = catalog_path();
    let catalog = KeywordCatalog::load_or_builtin(path.as_deref());
    CrisisEngine::new(std::sync::Arc::new(catalog)).with_match_mode(match_mode())
}
