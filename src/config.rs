//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use crate::parser::SaveMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Log levels accepted in `[logging] level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Board file used when no `--board` argument is given
    #[serde(default)]
    pub board_file: Option<PathBuf>,
}

/// Board display and persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Label shown for the home screen (the home screen itself has no name)
    #[serde(default = "default_home_label")]
    pub home_label: String,
    /// Replace board files with temp file + rename instead of writing in place
    #[serde(default = "default_atomic_save")]
    pub atomic_save: bool,
}

fn default_home_label() -> String {
    "Home".to_string()
}

const fn default_atomic_save() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            home_label: default_home_label(),
            atomic_save: default_atomic_save(),
        }
    }
}

impl BoardConfig {
    /// Save mode matching `atomic_save`.
    pub const fn save_mode(&self) -> SaveMode {
        if self.atomic_save {
            SaveMode::Atomic
        } else {
            SaveMode::InPlace
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - `$AACBOARD_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/aacboard/config.toml`
/// - macOS: `~/Library/Application Support/aacboard/config.toml`
/// - Windows: `%APPDATA%\aacboard\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Board settings
    #[serde(default)]
    pub board: BoardConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path, honoring `AACBOARD_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using temp file + rename.
    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `logging.level` is one of [`LOG_LEVELS`]
    /// - `board.home_label` has no line breaks
    /// - `paths.board_file`, if set, is not an existing directory
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        if self.board.home_label.contains(['\n', '\r']) {
            anyhow::bail!("Home label cannot contain line breaks");
        }

        if let Some(board_file) = &self.paths.board_file {
            if board_file.is_dir() {
                anyhow::bail!(
                    "Board file path is a directory: {}",
                    board_file.display()
                );
            }
        }

        Ok(())
    }
}
