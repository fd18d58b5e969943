use crate::error::{CtprixError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default URL of the full `prix-controle-technique` JSON export.
pub const DEFAULT_EXPORT_URL: &str = "https://data.economie.gouv.fr/api/explore/v2.1/catalog/datasets/prix-controle-technique/exports/json?lang=fr&timezone=Europe%2FBerlin";

/// Default location of the aggregated dataset artifact.
pub const DEFAULT_DATASET_PATH: &str = "data/centres.json";

/// Default number of rows shown by the query command.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for ctprix
///
/// Precedence: CLI arguments > environment variables > config file > defaults.
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub dataset_path: ConfigValue<PathBuf>,
    pub export_url: ConfigValue<String>,
    pub result_limit: ConfigValue<usize>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            dataset_path: ConfigValue::new(
                PathBuf::from(DEFAULT_DATASET_PATH),
                ConfigSource::Default,
            ),
            export_url: ConfigValue::new(DEFAULT_EXPORT_URL.to_string(), ConfigSource::Default),
            result_limit: ConfigValue::new(DEFAULT_RESULT_LIMIT, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| CtprixError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| CtprixError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(dataset_path) = file_config.dataset_path {
            self.dataset_path.update(dataset_path, ConfigSource::File);
        }

        if let Some(export_url) = file_config.export_url {
            self.export_url.update(export_url, ConfigSource::File);
        }

        if let Some(result_limit) = file_config.result_limit {
            self.result_limit.update(result_limit, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Ok(path) = env::var("CTPRIX_DATASET") {
            self.dataset_path.update(PathBuf::from(path), ConfigSource::Environment);
        }

        if let Ok(url) = env::var("CTPRIX_EXPORT_URL") {
            self.export_url.update(url, ConfigSource::Environment);
        }

        if let Ok(limit_str) = env::var("CTPRIX_LIMIT") {
            match limit_str.parse::<usize>() {
                Ok(limit) => self.result_limit.update(limit, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid CTPRIX_LIMIT value '{}': expected a positive integer",
                    limit_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(dataset_path) = overrides.dataset_path {
            self.dataset_path.update(dataset_path, ConfigSource::Cli);
        }

        if let Some(export_url) = overrides.export_url {
            self.export_url.update(export_url, ConfigSource::Cli);
        }

        if let Some(result_limit) = overrides.result_limit {
            self.result_limit.update(result_limit, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "dataset_path".to_string(),
            (self.dataset_path.value.display().to_string(), self.dataset_path.source),
        );

        map.insert(
            "export_url".to_string(),
            (self.export_url.value.clone(), self.export_url.source),
        );

        map.insert(
            "result_limit".to_string(),
            (self.result_limit.value.to_string(), self.result_limit.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    dataset_path: Option<PathBuf>,
    export_url: Option<String>,
    result_limit: Option<usize>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub dataset_path: Option<PathBuf>,
    pub export_url: Option<String>,
    pub result_limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.dataset_path.value, PathBuf::from(DEFAULT_DATASET_PATH));
        assert_eq!(config.dataset_path.source, ConfigSource::Default);
        assert_eq!(config.export_url.value, DEFAULT_EXPORT_URL);
        assert_eq!(config.result_limit.value, DEFAULT_RESULT_LIMIT);
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // CLI should override environment
        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400); // Still CLI value
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
dataset_path = "/tmp/centres.json"
export_url = "https://example.test/export.json"
result_limit = 50
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.dataset_path.value, PathBuf::from("/tmp/centres.json"));
        assert_eq!(config.dataset_path.source, ConfigSource::File);
        assert_eq!(config.export_url.value, "https://example.test/export.json");
        assert_eq!(config.result_limit.value, 50);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            dataset_path: Some(PathBuf::from("elsewhere.json")),
            export_url: None,
            result_limit: Some(5),
        };

        config.update_from_cli(overrides);

        assert_eq!(config.dataset_path.value, PathBuf::from("elsewhere.json"));
        assert_eq!(config.dataset_path.source, ConfigSource::Cli);
        assert_eq!(config.result_limit.value, 5);
        assert_eq!(config.result_limit.source, ConfigSource::Cli);
        // This should still be the default
        assert_eq!(config.export_url.source, ConfigSource::Default);
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert!(map.contains_key("dataset_path"));
        assert!(map.contains_key("export_url"));
        assert!(map.contains_key("result_limit"));

        let (limit_value, limit_source) = &map["result_limit"];
        assert_eq!(limit_value, &DEFAULT_RESULT_LIMIT.to_string());
        assert_eq!(*limit_source, ConfigSource::Default);
    }
}
