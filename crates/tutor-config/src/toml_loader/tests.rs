//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{InstructionVariant, ProviderKind};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_tutor_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, tutor_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[model]
provider = "claude"
max_tokens = 2048

[logging]
verbose_errors = true
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.provider, ProviderKind::Claude);
    assert_eq!(config.model.max_tokens, 2048);
    assert!(config.logging.verbose_errors);
    // Defaults preserved
    assert_eq!(config.tutor.variant, InstructionVariant::Template);
    assert_eq!(config.tutor.image_media_type, "image/png");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, tutor_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[model]\nmax_tokens = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.max_tokens, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tutor").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.model, "gpt-4o-mini");
    assert_eq!(config.tutor.template_path, "templates/math_tutor.yaml");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::AppConfig;

    let content = default_config_toml();
    let config: AppConfig = toml::from_str(&content).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("tutor"));
        assert!(path_str.ends_with("config.toml"));
    }
}
