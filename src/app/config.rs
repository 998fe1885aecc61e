//! Application configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Banned term must not be blank")]
    BlankTerm,
}

/// Settings consumed by `build_store`.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Terms that may not appear in new todo or goal names
    pub banned_terms: Vec<String>,
    /// Install the logging interceptor
    pub log_dispatches: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            banned_terms: vec!["bitcoin".to_string()],
            log_dispatches: true,
        }
    }
}

impl AppConfig {
    /// Parse a JSON document.
    ///
    /// A blank banned term would match every name, so it is refused.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        if config.banned_terms.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::BlankTerm);
        }
        Ok(config)
    }
}
