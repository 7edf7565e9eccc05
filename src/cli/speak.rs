//! Replay a sequence of selections against a board.

use crate::cli::common::{load_board, load_config, resolve_board_path, CliError, CliResult};
use crate::models::Page;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Select images in order, starting from the home screen, and print what
/// would be spoken
#[derive(Debug, Clone, Args)]
pub struct SpeakArgs {
    /// Path to board file
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Images to select, in order
    #[arg(value_name = "IMAGE", required = true)]
    pub images: Vec<String>,

    /// Return to the home screen after each spoken item
    #[arg(long)]
    pub reset_after_speech: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum SpeakEvent {
    Navigate { image: String, category: String },
    Speak { image: String, text: String },
}

impl SpeakArgs {
    /// Execute the speak command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let path = resolve_board_path(self.board.as_deref(), &config)?;
        let mut board = load_board(&path)?;

        let mut events = Vec::with_capacity(self.images.len());
        for image in &self.images {
            let screen = if board.is_home() {
                config.board.home_label.clone()
            } else {
                board.category_name().to_string()
            };

            // items may speak empty text, so ask before selecting
            let opens_category = board.has_category(image);
            let text = board.select(image).map_err(|e| {
                CliError::validation(format!("Cannot select '{image}' on screen '{screen}': {e}"))
            })?;

            if opens_category {
                events.push(SpeakEvent::Navigate {
                    image: image.clone(),
                    category: board.category_name().to_string(),
                });
            } else {
                events.push(SpeakEvent::Speak {
                    image: image.clone(),
                    text,
                });
                if self.reset_after_speech {
                    board.reset();
                }
            }
        }

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&events)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for event in events {
                match event {
                    SpeakEvent::Navigate { category, .. } => println!("-> {category}"),
                    SpeakEvent::Speak { text, .. } => println!("{text}"),
                }
            }
        }

        Ok(())
    }
}
