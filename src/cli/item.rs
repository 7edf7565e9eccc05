//! Item management commands.

use crate::cli::common::{
    load_board, load_config, resolve_board_path, save_board, CliError, CliResult,
};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Manage items inside categories
#[derive(Debug, Clone, Args)]
pub struct ItemArgs {
    /// Item subcommand
    #[command(subcommand)]
    pub command: ItemCommand,
}

/// Item management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ItemCommand {
    /// Add an item to a category (replaces the text of an existing image)
    Add(AddItemArgs),
    /// Remove an item from a category
    Remove(RemoveItemArgs),
}

/// Add an item to a category
#[derive(Debug, Clone, Args)]
pub struct AddItemArgs {
    /// Path to board file
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Image of the category receiving the item
    #[arg(long, value_name = "IMAGE")]
    pub category: String,

    /// Item image
    #[arg(long, value_name = "IMAGE")]
    pub image: String,

    /// Text spoken when the item is selected
    #[arg(long, value_name = "TEXT")]
    pub text: String,
}

/// Remove an item from a category
#[derive(Debug, Clone, Args)]
pub struct RemoveItemArgs {
    /// Path to board file
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Image of the category holding the item
    #[arg(long, value_name = "IMAGE")]
    pub category: String,

    /// Item image
    #[arg(long, value_name = "IMAGE")]
    pub image: String,
}

impl ItemArgs {
    /// Execute the item command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ItemCommand::Add(args) => args.execute(),
            ItemCommand::Remove(args) => args.execute(),
        }
    }
}

impl AddItemArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let path = resolve_board_path(self.board.as_deref(), &config)?;
        let mut board = load_board(&path)?;

        board.add_item_to(&self.category, &self.image, &self.text)?;
        save_board(&board, &path, &config)?;

        println!("Item '{}' added to '{}'.", self.image, self.category);
        Ok(())
    }
}

impl RemoveItemArgs {
    /// Execute the remove command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let path = resolve_board_path(self.board.as_deref(), &config)?;
        let mut board = load_board(&path)?;

        let removed = board.remove_item_from(&self.category, &self.image)?;
        if removed.is_none() {
            return Err(CliError::validation(format!(
                "Item '{}' not found in category '{}'",
                self.image, self.category
            )));
        }

        save_board(&board, &path, &config)?;
        println!("Item '{}' removed from '{}'.", self.image, self.category);
        Ok(())
    }
}
