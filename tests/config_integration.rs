//! Integration tests for the habitflow-config crate.

use std::fs;
use std::path::PathBuf;

use habitflow_config::{
    ApiConfig, Config, ConfigError, LoggingConfig, ThemeMode, ThemeState,
    config::{ENV_API_URL, ENV_LOG, ENV_OFFLINE},
    theme::{ambient_mode_from, load_preference, save_preference},
};
use tempfile::TempDir;

#[tokio::test]
async fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("habitflow.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Configuration for habitflow
            api: {
                base_url: "https://habits.example.com",
                timeout_secs: 5,
            },
            logging: { level: "debug", file: "/tmp/habitflow-test.log" },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.api.base_url, "https://habits.example.com");
    assert_eq!(config.api.timeout_secs, 5);
    assert!(config.persistence_enabled());
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.resolved_file().unwrap(),
        PathBuf::from("/tmp/habitflow-test.log")
    );
}

#[tokio::test]
async fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("config.json");

    let original = Config {
        api: ApiConfig::disabled(),
        logging: LoggingConfig {
            level: "warn".to_string(),
            file: None,
        },
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(original, loaded);
    assert!(!loaded.persistence_enabled());

    // the writer produces plain JSON
    let raw = fs::read_to_string(&config_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["api"]["enabled"], serde_json::Value::Bool(false));
}

#[test]
fn empty_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("habitflow.json");
    fs::write(&config_path, "{}").unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.api.base_url, "http://localhost:3000");
    assert_eq!(config.api.timeout_secs, 10);
}

#[test]
fn invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();

    let url_path = dir.path().join("url.json");
    fs::write(&url_path, r#"{ "api": { "base_url": "ftp://habits" } }"#).unwrap();
    assert!(matches!(
        Config::load_from(&url_path),
        Err(ConfigError::InvalidApiUrl(_))
    ));

    let timeout_path = dir.path().join("timeout.json");
    fs::write(&timeout_path, r#"{ "api": { "timeout_secs": 0 } }"#).unwrap();
    assert!(matches!(
        Config::load_from(&timeout_path),
        Err(ConfigError::InvalidTimeout { .. })
    ));

    let level_path = dir.path().join("level.json");
    fs::write(&level_path, r#"{ "logging": { "level": "loud" } }"#).unwrap();
    assert!(matches!(
        Config::load_from(&level_path),
        Err(ConfigError::InvalidLogLevel(_))
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load_from(dir.path().join("absent.json5"));
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn env_overrides() {
    let mut config = Config::default();
    config.apply_env_overrides(|key| match key {
        k if k == ENV_API_URL => Some(" https://api.example.com ".to_string()),
        k if k == ENV_OFFLINE => Some("TRUE".to_string()),
        k if k == ENV_LOG => Some("trace".to_string()),
        _ => None,
    });

    assert_eq!(config.api.base_url, "https://api.example.com");
    assert!(!config.persistence_enabled());
    assert_eq!(config.logging.level, "trace");
    assert!(config.validate().is_ok());
}

#[test]
fn offline_requires_explicit_value() {
    let mut config = Config::default();
    config.apply_env_overrides(|key| (key == ENV_OFFLINE).then(|| "no".to_string()));
    assert!(config.persistence_enabled());
}

#[test]
fn theme_preference_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("habitflow").join("theme.json");

    assert_eq!(load_preference(&path).unwrap(), None);

    save_preference(&path, ThemeMode::Light).unwrap();
    assert_eq!(load_preference(&path).unwrap(), Some(ThemeMode::Light));
    assert_eq!(
        fs::read_to_string(&path).unwrap().trim(),
        "{\n  \"theme\": \"light\"\n}"
    );
}

#[test]
fn saved_theme_beats_ambient() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.json");
    save_preference(&path, ThemeMode::Light).unwrap();

    let saved = load_preference(&path).unwrap();
    let mut theme = ThemeState::initialize(saved, ambient_mode_from(Some("15;0")));
    assert_eq!(theme.mode(), ThemeMode::Light);
    assert!(theme.is_manual());
    assert!(!theme.ambient_changed(ThemeMode::Dark));
}
