//! JSON export for the documentation renderer.

use crate::config::SiteConfig;
use crate::error::ConfigError;

impl SiteConfig {
    /// The configuration as a JSON value in the renderer's shape.
    pub fn to_json_value(&self) -> Result<serde_json::Value, ConfigError> {
        serde_json::to_value(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Pretty-printed JSON in the renderer's shape.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}
