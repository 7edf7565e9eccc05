//! Board file I/O service.
//!
//! This module centralizes all board file operations, providing a consistent
//! interface for loading and saving board files.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::{
    models::Board,
    parser::{self, SaveMode},
};

/// Service for managing board file I/O operations.
pub struct BoardService;

impl BoardService {
    /// Loads a board from a board file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use aacboard::services::BoardService;
    ///
    /// let board = BoardService::load(Path::new("board.txt"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<Board> {
        parser::parse_board_file(path)
            .with_context(|| format!("Failed to load board from {}", path.display()))
    }

    /// Loads a board, or returns an empty one if the file does not exist yet.
    ///
    /// Used by commands that create a board on first write.
    pub fn load_or_empty(path: &Path) -> Result<Board> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "board file missing, starting empty");
            Ok(Board::new())
        }
    }

    /// Saves a board to a board file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use aacboard::{models::Board, parser::SaveMode, services::BoardService};
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let mut board = Board::new();
    /// board.add_category("img/food/plate.png", "food")?;
    /// BoardService::save(&board, Path::new("board.txt"), SaveMode::Atomic)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(board: &Board, path: &Path, mode: SaveMode) -> Result<()> {
        parser::save_board(board, path, mode)
            .with_context(|| format!("Failed to save board to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Page;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_empty_missing_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let board = BoardService::load_or_empty(&temp_dir.path().join("board.txt"))?;
        assert_eq!(board.category_count(), 0);
        assert!(board.is_home());
        Ok(())
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = BoardService::load(&temp_dir.path().join("board.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_save_then_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("board.txt");

        let mut board = Board::new();
        board.add_category("img/food/plate.png", "food")?;
        board.add_item_to("img/food/plate.png", "img/fries.png", "french fries")?;
        BoardService::save(&board, &path, SaveMode::Atomic)?;

        let mut loaded = BoardService::load_or_empty(&path)?;
        loaded.select("img/food/plate.png")?;
        assert_eq!(loaded.select("img/fries.png")?, "french fries");
        Ok(())
    }

    #[test]
    fn test_load_malformed_file_names_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("board.txt");
        std::fs::write(&path, ">img/fries.png fries\n")?;

        let err = BoardService::load(&path).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("board.txt"));
        assert!(message.contains("line 1"));
        Ok(())
    }
}
