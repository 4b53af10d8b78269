//! TodoList configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::TaskStore;

/// Main TodoList configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prompt shown before each command
    pub prompt: String,

    /// Number of lines kept in the in-session history
    #[serde(rename = "history-size")]
    pub history_size: usize,

    /// Terminal output settings
    pub display: DisplayConfig,

    /// Task the list starts with; `null` starts empty
    pub seed: Option<SeedConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: crate::DEFAULT_PROMPT.to_string(),
            history_size: 100,
            display: DisplayConfig::default(),
            seed: Some(SeedConfig::default()),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, it must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .todolist.yml
        let local_config = PathBuf::from(".todolist.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/todolist/todolist.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("todolist").join("todolist.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Build the initial store described by `seed`
    pub fn initial_store(&self) -> TaskStore {
        match &self.seed {
            Some(seed) => TaskStore::seeded(seed.description.as_str(), seed.priority.as_str()),
            None => TaskStore::new(),
        }
    }
}

/// Terminal output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Clear the terminal before redrawing
    #[serde(rename = "clear-screen")]
    pub clear_screen: bool,

    /// Color the done column, errors and help formats
    pub color: bool,

    /// Show the "write 'info'" line under the table
    #[serde(rename = "show-hint")]
    pub show_hint: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            color: true,
            show_hint: true,
        }
    }
}

/// Initial task placed in the list at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub description: String,
    pub priority: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            description: "Finish this app".to_string(),
            priority: "high".to_string(),
        }
    }
}
