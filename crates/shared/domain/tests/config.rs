use ordum_domain::config::{LoggingConfig, OrdumConfig, RegistryConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.directory.is_none());
    assert!(!logging.json);

    let registry = RegistryConfig::default();
    assert!(registry.catalogs.is_empty());
    assert!(registry.preload);
}

#[test]
fn ordum_config_deserializes() {
    let raw = json!({
        "logging": { "level": "debug", "directory": "/tmp/logs" },
        "registry": { "catalogs": ["enums/cards.toml"], "preload": false }
    });

    let cfg: OrdumConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.console, "unspecified fields fall back to defaults");
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/logs")));
    assert_eq!(cfg.registry.catalogs, vec![std::path::PathBuf::from("enums/cards.toml")]);
    assert!(!cfg.registry.preload);
}

#[test]
fn empty_config_uses_defaults() {
    let cfg: OrdumConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.logging.level, "info");
    assert!(cfg.registry.preload);
}
