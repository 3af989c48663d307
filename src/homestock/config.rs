use crate::error::{HomestockError, Result};
use crate::model::Room;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_FILE: &str = "mon-inventaire.json";

/// Configuration for homestock, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomestockConfig {
    /// Room used by `add` when none is given
    #[serde(default = "default_room")]
    pub default_room: Room,

    /// File written by `export` when no path is given
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_room() -> Room {
    Room::Cuisine
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for HomestockConfig {
    fn default() -> Self {
        Self {
            default_room: default_room(),
            export_file: default_export_file(),
        }
    }
}

impl HomestockConfig {
    pub const KEYS: [&'static str; 2] = ["default-room", "export-file"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HomestockError::Io)?;
        let config: HomestockConfig =
            serde_json::from_str(&content).map_err(HomestockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HomestockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HomestockError::Serialization)?;
        fs::write(config_path, content).map_err(HomestockError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-room" => Some(self.default_room.key().to_string()),
            "export-file" => Some(self.export_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "default-room" => {
                self.default_room = value.parse()?;
                Ok(())
            }
            "export-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("export-file cannot be empty".to_string());
                }
                self.export_file = value.to_string();
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
