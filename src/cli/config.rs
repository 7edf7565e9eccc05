//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, LOG_LEVELS};
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Board file used when --board is not given
    #[arg(long, value_name = "FILE")]
    board_file: Option<PathBuf>,

    /// Label shown for the home screen
    #[arg(long, value_name = "LABEL")]
    home_label: Option<String>,

    /// Default log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Save boards through a temp file and rename
    #[arg(long, value_name = "BOOL")]
    atomic_save: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    board: BoardOutput,
    logging: LoggingOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    board_file: Option<String>,
}

#[derive(Serialize, Debug)]
struct BoardOutput {
    home_label: String,
    atomic_save: bool,
}

#[derive(Serialize, Debug)]
struct LoggingOutput {
    level: String,
}

impl From<&Config> for ConfigOutput {
    fn from(config: &Config) -> Self {
        Self {
            paths: PathsOutput {
                board_file: config
                    .paths
                    .board_file
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
            },
            board: BoardOutput {
                home_label: config.board.home_label.clone(),
                atomic_save: config.board.atomic_save,
            },
            logging: LoggingOutput {
                level: config.logging.level.clone(),
            },
        }
    }
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&ConfigOutput::from(&config)).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    const fn is_empty(&self) -> bool {
        self.board_file.is_none()
            && self.home_label.is_none()
            && self.log_level.is_none()
            && self.atomic_save.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --board-file, --home-label, --log-level, or --atomic-save",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(path) = &self.board_file {
            if path.is_dir() {
                return Err(CliError::validation(format!(
                    "Board file path is a directory: {}",
                    path.display()
                )));
            }
            config.paths.board_file = Some(path.clone());
        }

        if let Some(label) = &self.home_label {
            config.board.home_label.clone_from(label);
        }

        if let Some(level) = &self.log_level {
            let level = level.to_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(CliError::validation(format!(
                    "Invalid log level. Must be one of: {}",
                    LOG_LEVELS.join(", ")
                )));
            }
            config.logging.level = level;
        }

        if let Some(atomic) = self.atomic_save {
            config.board.atomic_save = atomic;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{APP_NAME} Configuration");
    println!("====================");
    println!();

    println!("Paths:");
    if let Some(board_file) = &config.paths.board_file {
        println!("  Board File: {}", board_file.display());
    } else {
        println!("  Board File: (not configured)");
    }
    println!();

    println!("Board:");
    println!("  Home Label: {}", config.board.home_label);
    println!("  Atomic Save: {}", config.board.atomic_save);
    println!();

    println!("Logging:");
    println!("  Level: {}", config.logging.level);
    println!();
}
