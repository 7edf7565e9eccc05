//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use aacboard::models::Board;
use aacboard::parser::parse_board_str;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Two categories, three items.
pub const SAMPLE_BOARD: &str = "\
img/food/plate.png food
>img/food/fries.png french fries
>img/food/melon.png watermelon
img/clothing/hanger.png clothing
>img/clothing/shirt.png collared shirt
";

/// Path to the aacboard binary (set by cargo at compile time)
pub fn aacboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_aacboard")
}

/// Parses [`SAMPLE_BOARD`].
pub fn sample_board() -> Board {
    parse_board_str(SAMPLE_BOARD).unwrap()
}

/// Writes board text into a fresh temp directory.
///
/// # Returns
/// The board file path and the `TempDir` that must outlive it.
pub fn create_temp_board_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("board.txt");
    fs::write(&path, content).unwrap();
    (path, temp_dir)
}

/// Creates a Command whose config lives in `config_dir`, so the user's
/// real configuration never leaks into a test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(aacboard_bin());
    cmd.env("AACBOARD_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command with an isolated, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().unwrap();
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Standard assertion on an exit code, printing stderr on mismatch.
pub fn assert_exit(output: &Output, code: i32, what: &str) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "{what}. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Captured stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
