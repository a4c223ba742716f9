use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Storage key used when `config.toml` does not name one.
pub const DEFAULT_STORAGE_KEY: &str = "user";

/// Session persistence and sign-in pacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Durable storage key holding the serialized identity.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Artificial latency of the local placeholder credential check.
    #[serde(default = "default_sign_in_delay_ms")]
    pub sign_in_delay_ms: u64,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_sign_in_delay_ms() -> u64 {
    1000
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            sign_in_delay_ms: default_sign_in_delay_ms(),
        }
    }
}

impl SessionConfig {
    pub fn sign_in_delay(&self) -> Duration {
        Duration::from_millis(self.sign_in_delay_ms)
    }
}

/// Feature flags controlling optional UI surfaces.
///
/// Both default to on so a missing config file still shows the full shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    #[serde(default = "default_true")]
    pub demo_accounts: bool,
    #[serde(default = "default_true")]
    pub notifications: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            demo_accounts: true,
            notifications: true,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Parse and validate a config document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        if config.session.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "session.storage_key must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Parse a config document, falling back to defaults on any error.
    pub fn load_or_default(contents: &str) -> Self {
        match Self::from_toml_str(contents) {
            Ok(config) => {
                tracing::debug!(?config, "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!("{e}; using default config");
                AppConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.storage_key, "user");
        assert_eq!(config.session.sign_in_delay(), Duration::from_millis(1000));
        assert!(config.features.demo_accounts);
        assert!(config.features.notifications);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config = AppConfig::from_toml_str(
            r#"
            [session]
            sign_in_delay_ms = 0

            [features]
            notifications = false
            "#,
        )
        .unwrap();
        assert_eq!(config.session.storage_key, "user");
        assert_eq!(config.session.sign_in_delay_ms, 0);
        assert!(config.features.demo_accounts);
        assert!(!config.features.notifications);
    }

    #[test]
    fn empty_storage_key_is_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [session]
            storage_key = "  "
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn load_or_default_recovers_from_garbage() {
        let config = AppConfig::load_or_default("[session\nstorage_key = ");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn workspace_config_file_parses() {
        let config = AppConfig::from_toml_str(include_str!("../../../config.toml")).unwrap();
        assert_eq!(config.session.storage_key, DEFAULT_STORAGE_KEY);
    }
}
