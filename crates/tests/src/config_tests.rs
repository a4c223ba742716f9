use pretty_assertions::assert_eq;
use shared_types::{AppConfig, DEFAULT_STORAGE_KEY};
use std::time::Duration;

const WORKSPACE_CONFIG: &str = include_str!("../../../config.toml");

#[test]
fn test_workspace_config_parses() {
    let config = AppConfig::from_toml_str(WORKSPACE_CONFIG).unwrap();
    assert_eq!(config.session.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(config.session.sign_in_delay(), Duration::from_secs(1));
    assert!(config.features.demo_accounts);
    assert!(config.features.notifications);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = AppConfig::from_toml_str("[features]\nnotifications = false\n").unwrap();
    assert_eq!(config.session.storage_key, DEFAULT_STORAGE_KEY);
    assert!(config.features.demo_accounts);
    assert!(!config.features.notifications);
}

#[test]
fn test_broken_config_falls_back() {
    assert_eq!(AppConfig::load_or_default("[session\nstorage_key ="), AppConfig::default());
    assert_eq!(
        AppConfig::load_or_default("[session]\nstorage_key = \"  \"\n"),
        AppConfig::default()
    );
}
