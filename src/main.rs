//! Word Guess - CLI
//!
//! Hangman-style word guessing game with TUI and plain CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use word_guess::{
    catalog::Catalog,
    commands::run_simple,
    core::Game,
    interactive::{App, run_tui},
    output::print_catalog,
};

#[derive(Parser)]
#[command(
    name = "word_guess",
    about = "Guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for word selection (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write debug logs to this file (filter with RUST_LOG)
    #[arg(short, long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// List the built-in words and their descriptions
    Words,
}

/// Route tracing output to a file; a TUI can't log to the terminal
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let catalog = Catalog::builtin()?;
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(Game::new(&catalog, rng))),
        Commands::Simple => run_simple(&mut Game::new(&catalog, rng)),
        Commands::Words => {
            print_catalog(&catalog);
            Ok(())
        }
    }
}
