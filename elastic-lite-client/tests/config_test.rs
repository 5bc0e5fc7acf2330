//! Tests for config module

use elastic_lite_client::{ClientConfig, HttpTransport};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = ClientConfig::default();

    assert_eq!(config.connection.base_url, "http://127.0.0.1:9200");
    assert_eq!(config.connection.timeout(), Duration::from_secs(30));
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
    assert!(config.logging.file.is_none());
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config = ClientConfig::from_toml_str(
        r#"
[connection]
base_url = "https://search.internal:9243"
"#,
    )
    .unwrap();

    assert_eq!(config.connection.base_url, "https://search.internal:9243");
    assert_eq!(config.connection.timeout_secs, 30);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_values_rejected() {
    assert!(ClientConfig::from_toml_str("[connection]\nbase_url = \"not a url\"").is_err());
    assert!(ClientConfig::from_toml_str("[connection]\ntimeout_secs = 0").is_err());
}

#[test]
fn test_missing_file_gives_defaults() {
    let temp = tempdir().unwrap();
    let config = ClientConfig::load(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config.connection.base_url, "http://127.0.0.1:9200");
}

#[test]
fn test_save_and_load() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("nested").join("client.toml");

    let mut config = ClientConfig::default();
    config.connection.base_url = "http://10.0.0.5:9200/".to_string();
    config.connection.timeout_secs = 5;
    config.logging.level = "debug".to_string();
    config.logging.json = true;

    config.save(&config_path).unwrap();
    let loaded = ClientConfig::load(&config_path).unwrap();

    assert_eq!(loaded.connection.base_url, "http://10.0.0.5:9200/");
    assert_eq!(loaded.connection.timeout_secs, 5);
    assert_eq!(loaded.logging.level, "debug");
    assert!(loaded.logging.json);
}

#[test]
fn test_transport_from_config() {
    let config = ClientConfig::default();
    assert!(HttpTransport::new(&config.connection).is_ok());
}
