use crate::error::{LibrisError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "libros.json";

/// Configuration for libris, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibrisConfig {
    /// Catalog file, relative to the data directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Load the sample catalog when the store starts out empty
    #[serde(default = "default_seed_on_empty")]
    pub seed_on_empty: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_seed_on_empty() -> bool {
    true
}

impl Default for LibrisConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            seed_on_empty: default_seed_on_empty(),
        }
    }
}

impl LibrisConfig {
    pub const KEYS: [&'static str; 2] = ["data-file", "seed-on-empty"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibrisError::Io)?;
        let config: LibrisConfig =
            serde_json::from_str(&content).map_err(LibrisError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LibrisError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LibrisError::Serialization)?;
        fs::write(config_path, content).map_err(LibrisError::Io)?;
        Ok(())
    }

    /// Resolve the catalog file against the data directory
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        let file = Path::new(&self.data_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.join(file)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "seed-on-empty" => Some(self.seed_on_empty.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = value.to_string();
                Ok(())
            }
            "seed-on-empty" => {
                self.seed_on_empty = match value {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => return Err(format!("Invalid boolean value: {}", other)),
                };
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
