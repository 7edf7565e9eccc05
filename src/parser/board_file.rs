//! Board file parsing.
//!
//! A board file lists every category followed by its items, one per line:
//!
//! ```text
//! img/food/plate.png food
//! >img/food/icons8-french-fries-96.png french fries
//! >img/food/icons8-watermelon-96.png watermelon
//! img/clothing/hanger.png clothing
//! >img/clothing/collaredshirt.png collared shirt
//! ```
//!
//! Header lines open a category; lines starting with `>` add an item to the
//! most recent header. The image path ends at the first space and the rest of
//! the line is the text.

use crate::constants::APP_BINARY_NAME;
pub use crate::models::board::ITEM_MARKER;
use crate::models::Board;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// One parsed line of a board file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardLine<'a> {
    /// `<image> <name>`: opens a category
    Header {
        /// Image that opens the category
        image: &'a str,
        /// Category display name
        name: &'a str,
    },
    /// `><image> <text>`: an item of the most recent category
    Item {
        /// Item image
        image: &'a str,
        /// Text spoken when the item is selected
        text: &'a str,
    },
}

/// Parses a board file from disk.
///
/// # Errors
///
/// Returns errors for:
/// - File not found or not a regular file
/// - Unreadable content
/// - Any malformed line (see [`parse_board_str`])
pub fn parse_board_file(path: &Path) -> Result<Board> {
    if !path.exists() {
        anyhow::bail!(
            "Board file not found: {}\n\n\
             Please check the file path and try again.\n\
             To start a new board, run: {} category add --image <IMAGE> --name <NAME>",
            path.display(),
            APP_BINARY_NAME
        );
    }

    if !path.is_file() {
        anyhow::bail!("Path is not a file: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file: {}", path.display()))?;

    let board = parse_board_str(&content)
        .with_context(|| format!("Failed to parse board file: {}", path.display()))?;

    info!(
        path = %path.display(),
        categories = board.category_count(),
        "loaded board"
    );
    Ok(board)
}

/// Parses board file content into a [`Board`] positioned on its home screen.
///
/// Blank lines are skipped. Errors name the 1-based line number.
///
/// # Errors
///
/// - An item line before the first category header
/// - A line without a space between image and text, or with an empty image
/// - A category header repeated for the same image
/// - Images containing whitespace (impossible by construction) or similar
///   values rejected by the board model
pub fn parse_board_str(content: &str) -> Result<Board> {
    let mut board = Board::new();
    let mut section: Option<&str> = None;

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;

        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line).with_context(|| format!("Error parsing line {line_num}"))? {
            BoardLine::Header { image, name } => {
                board
                    .add_category(image, name)
                    .with_context(|| format!("Invalid category at line {line_num}"))?;
                section = Some(image);
            }
            BoardLine::Item { image, text } => {
                let Some(category) = section else {
                    anyhow::bail!(
                        "Item '{image}' at line {line_num} appears before any category header"
                    );
                };
                board
                    .add_item_to(category, image, text)
                    .with_context(|| format!("Invalid item at line {line_num}"))?;
            }
        }
    }

    Ok(board)
}

/// Splits one non-blank line into its parts.
pub fn parse_line(line: &str) -> Result<BoardLine<'_>> {
    let (is_item, body) = match line.strip_prefix(ITEM_MARKER) {
        Some(rest) => (true, rest),
        None => (false, line),
    };

    let (image, text) = body
        .split_once(' ')
        .ok_or_else(|| anyhow::anyhow!("Missing space between image and text in '{line}'"))?;

    if image.is_empty() {
        anyhow::bail!("Missing image path in '{line}'");
    }

    Ok(if is_item {
        BoardLine::Item { image, text }
    } else {
        BoardLine::Header { image, name: text }
    })
}
