use crate::catalog::Catalog;
use crate::commands::recommend::DEFAULT_LIMIT;
use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "anime_data.json";

/// Configuration for anitrack, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Data file; relative paths are resolved against the tracker home
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// How many titles `recommend` returns when no limit is given
    #[serde(default = "default_recommend_limit")]
    pub recommend_limit: usize,

    /// Genre to candidate titles table used by `recommend`
    #[serde(default = "Catalog::builtin")]
    pub catalog: Catalog,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_recommend_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            recommend_limit: default_recommend_limit(),
            catalog: Catalog::builtin(),
        }
    }
}

impl TrackerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TrackerError::Io)?;
        let config: TrackerConfig =
            serde_json::from_str(&content).map_err(TrackerError::Serialization)?;
        Ok(config)
    }

    /// Like [`TrackerConfig::load`], but an unreadable or corrupt file falls
    /// back to the defaults. The load error is handed back for reporting.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> (Self, Option<TrackerError>) {
        match Self::load(config_dir) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TrackerError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TrackerError::Serialization)?;
        fs::write(config_path, content).map_err(TrackerError::Io)?;
        Ok(())
    }

    /// Absolute location of the data file for the given home directory.
    pub fn data_path(&self, home: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            home.join(&self.data_file)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.display().to_string()),
            "recommend-limit" => Some(self.recommend_limit.to_string()),
            "catalog" => Some(self.catalog.genres().collect::<Vec<_>>().join(", ")),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = PathBuf::from(trimmed);
                Ok(())
            }
            "recommend-limit" => {
                self.recommend_limit = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("recommend-limit must be a whole number, got {}", value))?;
                Ok(())
            }
            "catalog" => Err(format!(
                "catalog is edited in {} directly",
                CONFIG_FILENAME
            )),
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        ["data-file", "recommend-limit", "catalog"]
            .iter()
            .filter_map(|key| self.get(key).map(|v| (key.to_string(), v)))
            .collect()
    }
}
