use crate::error::{NumlistError, Result};
use crate::model::DEFAULT_SEED;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_FILE: &str = "numbers.txt";

/// Configuration for numlist, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NumlistConfig {
    /// Numbers the list holds when a session starts
    #[serde(default = "default_seed")]
    pub seed: Vec<i64>,

    /// Where the export operation writes; relative paths resolve against the working directory
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_seed() -> Vec<i64> {
    DEFAULT_SEED.to_vec()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for NumlistConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            export_file: default_export_file(),
        }
    }
}

impl NumlistConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NumlistError::Io)?;
        let config: NumlistConfig =
            serde_json::from_str(&content).map_err(NumlistError::Serialization)?;
        config.validate()?;
        tracing::debug!(path = %config_path.display(), "config loaded");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NumlistError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NumlistError::Serialization)?;
        fs::write(config_path, content).map_err(NumlistError::Io)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.export_file.trim().is_empty() {
            return Err(NumlistError::Config(
                "export_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_session() {
        let config = NumlistConfig::default();
        assert_eq!(config.seed, vec![15, 80, 46, 35, 71, 13, 22, 98]);
        assert_eq!(config.export_file, "numbers.txt");
    }

    #[test]
    fn load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = NumlistConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, NumlistConfig::default());
    }

    #[test]
    fn save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("numlist");

        let config = NumlistConfig {
            seed: vec![1, 2, 3],
            export_file: "out.txt".to_string(),
        };
        config.save(&nested).unwrap();

        let loaded = NumlistConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"seed": []}"#).unwrap();

        let loaded = NumlistConfig::load(temp_dir.path()).unwrap();
        assert!(loaded.seed.is_empty());
        assert_eq!(loaded.export_file, "numbers.txt");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        assert!(matches!(
            NumlistConfig::load(temp_dir.path()),
            Err(NumlistError::Serialization(_))
        ));
    }

    #[test]
    fn blank_export_file_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"export_file": "  "}"#,
        )
        .unwrap();

        assert!(matches!(
            NumlistConfig::load(temp_dir.path()),
            Err(NumlistError::Config(_))
        ));
    }
}
