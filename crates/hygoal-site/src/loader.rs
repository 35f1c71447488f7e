//! Loading `site.toml`.

use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::error::ConfigError;
use crate::validate::validate;

impl SiteConfig {
    /// Parse and validate a configuration from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        validate(&config)?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a configuration file, falling back to [`SiteConfig::hygoal`] when it does not exist.
    /// Returns an error if the file exists but is malformed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => {
                tracing::info!("No {} found, using built-in config", path.display());
                Ok(Self::hygoal())
            }
            other => other,
        }
    }

    /// Serialize as TOML, the format read by [`SiteConfig::load`].
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}
