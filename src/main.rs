//! AAC Board - command-line driver for communication boards
//!
//! Inspects and edits board files and replays image selections the way a
//! board user would tap through them.

use aacboard::cli::common::load_config;
use aacboard::cli::{CategoryArgs, CliResult, ConfigArgs, ItemArgs, ShowArgs, SpeakArgs};
use aacboard::logging;
use clap::{Parser, Subcommand};

/// AAC Board - picture-based communication board tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the home screen or a category screen
    Show(ShowArgs),
    /// Select images in order and print what would be spoken
    Speak(SpeakArgs),
    /// Manage categories in a board
    Category(CategoryArgs),
    /// Manage items inside categories
    Item(ItemArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Show(args) => args.execute(),
            Self::Speak(args) => args.execute(),
            Self::Category(args) => args.execute(),
            Self::Item(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = load_config();
    logging::init(cli.verbose, &config.logging.level);
    tracing::debug!(command = ?cli.command, "starting");

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}
