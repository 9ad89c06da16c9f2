use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User settings. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number a line turned into an ordered item from the line above it.
    #[serde(alias = "auto_increment_numbered_list")]
    pub auto_increment_ordered_list: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_increment_ordered_list: true,
        }
    }
}

impl Config {
    /// Help text shown next to the auto-increment toggle.
    pub const AUTO_INCREMENT_HELP: &'static str = "\
Automatically increment ordered lists.

When enabled, a line turned into an ordered list item continues the
numbering of the line above it (same indentation):

  1. Dog
  2. Cat

When disabled, every new ordered item starts at 1:

  1. Dog
  1. Cat

If items are still renumbered with this disabled, check whether the
editor's own \"smart lists\" setting is renumbering them.";

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        log::info!("Loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        log::info!("Saved config to {}", config_path.display());
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/cycle-line");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Flips auto-increment and returns the new value.
    pub fn toggle_auto_increment(&mut self) -> bool {
        self.auto_increment_ordered_list = !self.auto_increment_ordered_list;
        self.auto_increment_ordered_list
    }
}
