//! Adapter configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Fullscreen adapter settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AdapterConfig {
    /// Tag of the throwaway element created for the WebKit request-method probe.
    #[serde(default = "default_probe_tag", alias = "probeTag")]
    pub probe_tag: String,
}

impl AdapterConfig {
    /// Parse configuration from TOML text. Missing fields use defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        debug!(probe_tag = %config.probe_tag, "Loaded adapter config");
        Ok(config)
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            probe_tag: default_probe_tag(),
        }
    }
}

fn default_probe_tag() -> String {
    "video".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_probe_tag() {
        assert_eq!(AdapterConfig::default().probe_tag, "video");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AdapterConfig::from_toml_str("").unwrap();
        assert_eq!(config, AdapterConfig::default());
    }

    #[test]
    fn test_toml_overrides_probe_tag() {
        let config = AdapterConfig::from_toml_str("probe_tag = \"canvas\"").unwrap();
        assert_eq!(config.probe_tag, "canvas");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = AdapterConfig::from_toml_str("probe_tag = 42").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
