//! Integration tests for Settings config loading.
//!
//! Environment variables are supplied as an explicit map so tests never
//! depend on (or mutate) the process environment.

use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;

use pigeon::application::ApplicationError;
use pigeon::config::Settings;
use pigeon::domain::FeatureKind;
use pigeon::infrastructure::http::VISION_API_URL;

fn no_env() -> Option<HashMap<String, String>> {
    Some(HashMap::new())
}

#[test]
fn given_config_file_when_load_then_values_override_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pigeon.toml");
    fs::write(
        &path,
        r#"
api_key = "file-key"
default_feature = "label"
max_results = 25
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_with_env(Some(&path), no_env()).expect("load settings");

    // Assert
    assert_eq!(settings.api_key.as_deref(), Some("file-key"));
    assert_eq!(settings.default_feature, FeatureKind::Label);
    assert_eq!(settings.max_results, Some(25));
    assert_eq!(settings.endpoint, VISION_API_URL, "unset keys keep defaults");
}

#[test]
fn given_config_file_and_env_when_load_then_env_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pigeon.toml");
    fs::write(&path, "api_key = \"file-key\"\ndefault_feature = \"TEXT_DETECTION\"\n").unwrap();

    let env: HashMap<String, String> = [
        ("PIGEON_API_KEY".to_string(), "env-key".to_string()),
        ("UNRELATED_API_KEY".to_string(), "ignored".to_string()),
    ]
    .into_iter()
    .collect();

    let settings = Settings::load_with_env(Some(&path), Some(env)).expect("load settings");

    assert_eq!(settings.api_key.as_deref(), Some("env-key"));
    assert_eq!(settings.default_feature, FeatureKind::Text);
}

#[test]
fn given_missing_explicit_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let err = Settings::load_with_env(Some(&path), no_env()).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("does-not-exist.toml"));
}

#[test]
fn given_unknown_key_in_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pigeon.toml");
    fs::write(&path, "api_kye = \"typo\"\n").unwrap();

    let err = Settings::load_with_env(Some(&path), no_env()).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_unknown_default_feature_in_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pigeon.toml");
    fs::write(&path, "default_feature = \"web\"\n").unwrap();

    let err = Settings::load_with_env(Some(&path), no_env()).unwrap_err();

    assert!(err.to_string().contains("unknown feature: web"));
}
