//! Board file generation (serialization).
//!
//! This module writes boards back to the line format read by
//! [`parse_board_str`](crate::parser::parse_board_str), with atomic file
//! writes by default.

use crate::models::Board;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

/// How a board file is replaced on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SaveMode {
    /// Write a sibling temp file, then rename it over the destination
    #[default]
    Atomic,
    /// Truncate and write the destination directly
    InPlace,
}

/// Saves a board to `path`, replacing any existing file.
///
/// The in-memory board is never modified. With [`SaveMode::Atomic`] a failed
/// save leaves the previous file untouched; with [`SaveMode::InPlace`] the
/// destination may be left partially written.
///
/// # Errors
///
/// Returns errors for:
/// - File I/O failures
/// - Permission issues
/// - Atomic rename failures
pub fn save_board(board: &Board, path: &Path, mode: SaveMode) -> Result<()> {
    match mode {
        SaveMode::Atomic => {
            let text = generate_board_text(board)?;
            atomic_write(path, &text)?;
        }
        SaveMode::InPlace => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create board file: {}", path.display()))?;
            board
                .write_to(BufWriter::new(file))
                .with_context(|| format!("Failed to write board file: {}", path.display()))?;
        }
    }

    info!(
        path = %path.display(),
        categories = board.category_count(),
        "saved board"
    );
    Ok(())
}

/// Generates board file content.
pub fn generate_board_text(board: &Board) -> Result<String> {
    let mut buffer = Vec::new();
    board
        .write_to(&mut buffer)
        .context("Failed to serialize board")?;
    String::from_utf8(buffer).context("Board text is not valid UTF-8")
}

/// Temp file used while atomically replacing `path`.
fn temp_path_for(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) => path.with_extension(format!("{}.tmp", ext.to_string_lossy())),
        None => path.with_extension("tmp"),
    }
}

/// Writes content to a file atomically using temp file + rename.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = temp_path_for(path);

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
