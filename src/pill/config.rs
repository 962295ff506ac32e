use crate::error::{PillError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RESTOCK_THRESHOLD: i64 = 10;

pub const RESTOCK_THRESHOLD_KEY: &str = "restock-threshold";

/// Configuration for pill, stored in .pill/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PillConfig {
    /// Threshold used by `restock` when none is given on the command line
    #[serde(default = "default_restock_threshold")]
    pub restock_threshold: i64,
}

fn default_restock_threshold() -> i64 {
    DEFAULT_RESTOCK_THRESHOLD
}

impl Default for PillConfig {
    fn default() -> Self {
        Self {
            restock_threshold: DEFAULT_RESTOCK_THRESHOLD,
        }
    }
}

impl PillConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PillError::Io)?;
        let config: PillConfig =
            serde_json::from_str(&content).map_err(PillError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PillError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PillError::Serialization)?;
        fs::write(config_path, content).map_err(PillError::Io)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[RESTOCK_THRESHOLD_KEY]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            RESTOCK_THRESHOLD_KEY => Some(self.restock_threshold.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            RESTOCK_THRESHOLD_KEY => {
                let threshold: i64 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("{} must be a whole number, got '{}'", key, value))?;
                if threshold < 0 {
                    return Err(format!("{} cannot be negative", key));
                }
                self.restock_threshold = threshold;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PillConfig::default();
        assert_eq!(config.restock_threshold, 10);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = PillConfig::default();
        assert!(config.set(RESTOCK_THRESHOLD_KEY, "ten").is_err());
        assert!(config.set(RESTOCK_THRESHOLD_KEY, "-1").is_err());
        assert!(config.set("unknown", "1").is_err());
        assert_eq!(config, PillConfig::default());

        config.set(RESTOCK_THRESHOLD_KEY, " 0 ").unwrap();
        assert_eq!(config.restock_threshold, 0);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = PillConfig::load(temp.path().join("missing")).unwrap();
        assert_eq!(config, PillConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".pill");

        let mut config = PillConfig::default();
        config.set(RESTOCK_THRESHOLD_KEY, "42").unwrap();
        config.save(&dir).unwrap();

        let loaded = PillConfig::load(&dir).unwrap();
        assert_eq!(loaded.restock_threshold, 42);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: PillConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, PillConfig::default());
    }
}
