//! Configuration errors.

use crate::validate::ValidationErrors;

/// Errors that can occur when loading or exporting a site configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Invalid site configuration:\n{0}")]
    Invalid(#[from] ValidationErrors),
}
