use crate::error::{ImageDbError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SAVE_LATENCY_MS: u64 = 1000;
const DEFAULT_DELETE_LATENCY_MS: u64 = 500;
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Configuration for imagedb, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageDbConfig {
    /// Simulated latency of a save call, in milliseconds
    #[serde(default = "default_save_latency")]
    pub save_latency_ms: u64,

    /// Simulated latency of a delete call, in milliseconds
    #[serde(default = "default_delete_latency")]
    pub delete_latency_ms: u64,

    /// Default log level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_save_latency() -> u64 {
    DEFAULT_SAVE_LATENCY_MS
}

fn default_delete_latency() -> u64 {
    DEFAULT_DELETE_LATENCY_MS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ImageDbConfig {
    fn default() -> Self {
        Self {
            save_latency_ms: DEFAULT_SAVE_LATENCY_MS,
            delete_latency_ms: DEFAULT_DELETE_LATENCY_MS,
            log_level: default_log_level(),
        }
    }
}

impl ImageDbConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ImageDbConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn save_latency(&self) -> Duration {
        Duration::from_millis(self.save_latency_ms)
    }

    pub fn delete_latency(&self) -> Duration {
        Duration::from_millis(self.delete_latency_ms)
    }

    fn validate(&self) -> Result<()> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ImageDbError::Config(format!(
                "unknown log level '{}' (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ImageDbConfig::default();
        assert_eq!(config.save_latency(), Duration::from_millis(1000));
        assert_eq!(config.delete_latency(), Duration::from_millis(500));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = ImageDbConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, ImageDbConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_dir = temp_dir.path().join("nested");

        let config = ImageDbConfig {
            save_latency_ms: 10,
            delete_latency_ms: 0,
            log_level: "debug".to_string(),
        };
        config.save(&config_dir).unwrap();

        let loaded = ImageDbConfig::load(&config_dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"save_latency_ms": 5}"#,
        )
        .unwrap();

        let loaded = ImageDbConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.save_latency_ms, 5);
        assert_eq!(loaded.delete_latency_ms, 500);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{not json").unwrap();

        let err = ImageDbConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ImageDbError::Serialization(_)));
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"log_level": "loud"}"#,
        )
        .unwrap();

        let err = ImageDbConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ImageDbError::Config(_)));
    }
}
