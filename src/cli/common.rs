//! Shared CLI plumbing: error type, exit codes and board path resolution.

use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::models::{Board, BoardError};
use crate::services::BoardService;
use std::fmt;
use std::path::{Path, PathBuf};

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: unknown image, invalid argument, malformed value
    ValidationError = 1,
    /// File could not be read, parsed or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Invalid input from the user.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// File system or parse failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<BoardError> for CliError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::Io(_) => Self::io(err.to_string()),
            _ => Self::validation(err.to_string()),
        }
    }
}

/// Resolves the board file: explicit argument first, then `paths.board_file`.
pub fn resolve_board_path(explicit: Option<&Path>, config: &Config) -> CliResult<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| config.paths.board_file.clone())
        .ok_or_else(|| {
            CliError::validation(format!(
                "No board file given. Pass --board FILE or run: {APP_BINARY_NAME} config set --board-file FILE"
            ))
        })
}

/// Loads the config, falling back to defaults when it cannot be read.
pub fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {e:#}");
        Config::default()
    })
}

/// Loads an existing board file.
pub fn load_board(path: &Path) -> CliResult<Board> {
    BoardService::load(path).map_err(|e| CliError::io(format!("Failed to load board: {e:#}")))
}

/// Loads a board file, starting empty if it does not exist yet.
pub fn load_board_or_empty(path: &Path) -> CliResult<Board> {
    BoardService::load_or_empty(path)
        .map_err(|e| CliError::io(format!("Failed to load board: {e:#}")))
}

/// Saves a board file with the configured save mode.
pub fn save_board(board: &Board, path: &Path, config: &Config) -> CliResult<()> {
    BoardService::save(board, path, config.board.save_mode())
        .map_err(|e| CliError::io(format!("Failed to save board: {e:#}")))
}
