//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use ctprix_core::config::{
    CliConfigOverrides, ConfigSource, LayeredConfig, DEFAULT_EXPORT_URL, DEFAULT_RESULT_LIMIT,
};
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_default_configuration() {
    let config = LayeredConfig::with_defaults();

    assert_eq!(config.dataset_path.source, ConfigSource::Default);
    assert_eq!(config.export_url.value, DEFAULT_EXPORT_URL);
    assert_eq!(config.result_limit.value, DEFAULT_RESULT_LIMIT);
}

#[test]
fn test_partial_file_configuration() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"result_limit = 100"#).unwrap();

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert_eq!(config.result_limit.value, 100);
    assert_eq!(config.result_limit.source, ConfigSource::File);
    // Untouched keys keep their defaults
    assert_eq!(config.dataset_path.source, ConfigSource::Default);
    assert_eq!(config.export_url.source, ConfigSource::Default);
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "not = [valid").unwrap();

    assert!(LayeredConfig::with_defaults().load_from_file(file.path()).is_err());
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
dataset_path = "from-file.json"
result_limit = 100
"#
    )
    .unwrap();

    env::set_var("CTPRIX_DATASET", "from-env.json");
    env::set_var("CTPRIX_LIMIT", "7");

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    env::remove_var("CTPRIX_DATASET");
    env::remove_var("CTPRIX_LIMIT");

    assert_eq!(config.dataset_path.value, PathBuf::from("from-env.json"));
    assert_eq!(config.dataset_path.source, ConfigSource::Environment);
    assert_eq!(config.result_limit.value, 7);
    assert_eq!(config.result_limit.source, ConfigSource::Environment);
}

#[test]
#[serial]
fn test_invalid_env_limit_is_ignored() {
    env::set_var("CTPRIX_LIMIT", "many");

    let config = LayeredConfig::with_defaults().load_from_env();

    env::remove_var("CTPRIX_LIMIT");

    assert_eq!(config.result_limit.value, DEFAULT_RESULT_LIMIT);
    assert_eq!(config.result_limit.source, ConfigSource::Default);
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    env::set_var("CTPRIX_LIMIT", "7");

    let mut config = LayeredConfig::with_defaults().load_from_env();
    config.update_from_cli(CliConfigOverrides {
        dataset_path: None,
        export_url: None,
        result_limit: Some(3),
    });

    env::remove_var("CTPRIX_LIMIT");

    assert_eq!(config.result_limit.value, 3);
    assert_eq!(config.result_limit.source, ConfigSource::Cli);
}
