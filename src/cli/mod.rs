//! CLI command handlers for the board tool.
//!
//! This module provides headless, scriptable access to boards: inspecting
//! screens, replaying selections and editing board files.

pub mod category;
pub mod common;
pub mod config;
pub mod item;
pub mod show;
pub mod speak;

// Re-export types used by main.rs and tests
pub use category::CategoryArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use item::ItemArgs;
pub use show::ShowArgs;
pub use speak::SpeakArgs;
