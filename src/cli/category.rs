//! Category management commands for boards.
//!
//! Provides commands to list, add, and remove categories in a board file.

use crate::cli::common::{
    load_board, load_board_or_empty, load_config, resolve_board_path, save_board, CliError,
    CliResult,
};
use crate::models::Category;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Manage categories in a board
#[derive(Debug, Clone, Args)]
pub struct CategoryArgs {
    /// Category subcommand
    #[command(subcommand)]
    pub command: CategoryCommand,
}

/// Category management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum CategoryCommand {
    /// List all categories in a board
    List(ListCategoriesArgs),
    /// Add a new category to a board
    Add(AddCategoryArgs),
    /// Remove a category from a board
    Remove(RemoveCategoryArgs),
}

/// List all categories in a board
#[derive(Debug, Clone, Args)]
pub struct ListCategoriesArgs {
    /// Path to board file
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a new category to a board
#[derive(Debug, Clone, Args)]
pub struct AddCategoryArgs {
    /// Path to board file (created if missing)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Image that opens the category
    #[arg(long, value_name = "IMAGE")]
    pub image: String,

    /// Category name
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

/// Remove a category from a board
#[derive(Debug, Clone, Args)]
pub struct RemoveCategoryArgs {
    /// Path to board file
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Image of the category to remove
    #[arg(long, value_name = "IMAGE")]
    pub image: String,

    /// Remove the category even if it still holds items
    #[arg(long)]
    pub force: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct CategoryEntry {
    image: String,
    name: String,
    items: usize,
}

#[derive(Debug, Serialize)]
struct ListCategoriesResponse {
    categories: Vec<CategoryEntry>,
    count: usize,
}

impl CategoryArgs {
    /// Execute the category command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            CategoryCommand::List(args) => args.execute(),
            CategoryCommand::Add(args) => args.execute(),
            CategoryCommand::Remove(args) => args.execute(),
        }
    }
}

impl ListCategoriesArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let path = resolve_board_path(self.board.as_deref(), &config)?;
        let board = load_board(&path)?;

        let categories: Vec<CategoryEntry> = board
            .categories()
            .map(|(image, category)| CategoryEntry {
                image: image.to_string(),
                name: category.name().to_string(),
                items: category.len(),
            })
            .collect();

        let response = ListCategoriesResponse {
            count: categories.len(),
            categories,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("No categories defined.");
        } else {
            println!("Categories ({}):", response.count);
            println!();
            for cat in response.categories {
                println!("  {:<40} {:<20} {} items", cat.image, cat.name, cat.items);
            }
        }

        Ok(())
    }
}

impl AddCategoryArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let path = resolve_board_path(self.board.as_deref(), &config)?;
        let mut board = load_board_or_empty(&path)?;

        board.add_category(&self.image, &self.name)?;
        save_board(&board, &path, &config)?;

        println!("Category '{}' added successfully.", self.name);
        Ok(())
    }
}

impl RemoveCategoryArgs {
    /// Execute the remove command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let path = resolve_board_path(self.board.as_deref(), &config)?;
        let mut board = load_board(&path)?;

        let item_count = board
            .category(&self.image)
            .map(Category::len)
            .ok_or_else(|| CliError::validation(format!("Category '{}' not found", self.image)))?;

        if item_count > 0 && !self.force {
            return Err(CliError::validation(format!(
                "Category '{}' still holds {item_count} items. Use --force to remove it anyway.",
                self.image
            )));
        }

        if let Some(removed) = board.remove_category(&self.image) {
            save_board(&board, &path, &config)?;
            println!("Category '{}' removed successfully.", removed.name());
        }

        Ok(())
    }
}
