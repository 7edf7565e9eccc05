//! Show one screen of a board.

use crate::cli::common::{load_board, load_config, resolve_board_path, CliError, CliResult};
use crate::models::{Board, Category};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Show the home screen or a category screen
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Path to board file
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Image of the category to show (defaults to the home screen)
    #[arg(long, value_name = "IMAGE")]
    pub category: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ScreenItem {
    image: String,
    text: String,
    is_category: bool,
}

#[derive(Debug, Serialize)]
struct ScreenResponse {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    items: Vec<ScreenItem>,
    count: usize,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let path = resolve_board_path(self.board.as_deref(), &config)?;
        let board = load_board(&path)?;

        let response = match &self.category {
            Some(image) => {
                let category = board.category(image).ok_or_else(|| {
                    CliError::validation(format!("Category not found: {image}"))
                })?;
                screen(&board, category, category.name(), Some(image.clone()))
            }
            None => screen(&board, board.home(), &config.board.home_label, None),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("{}: no images.", response.name);
        } else {
            println!("{} ({} images):", response.name, response.count);
            println!();
            for item in response.items {
                let marker = if item.is_category { "  [category]" } else { "" };
                println!("  {:<40} {}{}", item.image, item.text, marker);
            }
        }

        Ok(())
    }
}

fn screen(board: &Board, page: &Category, name: &str, image: Option<String>) -> ScreenResponse {
    let items: Vec<ScreenItem> = page
        .items()
        .map(|(image, text)| ScreenItem {
            image: image.clone(),
            text: text.clone(),
            is_category: board.has_category(image),
        })
        .collect();

    ScreenResponse {
        name: name.to_string(),
        image,
        count: items.len(),
        items,
    }
}
