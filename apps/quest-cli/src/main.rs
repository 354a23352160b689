//! # quest-cli
//!
//! Interactive menu for the Quest goal tracker:
//! - view goals, create a goal, record an event, view the score
//! - load once at startup, save once on "Save and exit"
//!
//! All human I/O lives here — prompts, input parsing, retry on bad input,
//! and the 1-based goal numbering shown to users. The tracker crates
//! never read or print anything.

mod menu;

use std::path::PathBuf;

use clap::Parser;
use quest_tracker::{LogSink, SaveFile, TrackerConfig, TrackerService};
use tracing_subscriber::EnvFilter;

/// Quest — track goals, score accomplishments, level up.
#[derive(Parser)]
#[command(name = "quest", version, about)]
struct Cli {
    /// Session directory holding goals.txt and the optional quest.toml.
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("quest_tracker=info".parse()?)
                .add_directive("quest_cli=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let dir = cli.dir.canonicalize().unwrap_or(cli.dir);
    let config = TrackerConfig::load_or_default(&dir)?;
    tracing::debug!(save_file = %config.save_file.display(), "session configured");

    let mut tracker = TrackerService::new();
    tracker.add_sink(Box::new(LogSink::new(&config.events_log)));

    let save_file = SaveFile::new(&config.save_file);
    if tracker.load(&save_file)? {
        println!("Loaded saved session from {}", save_file.path().display());
    }

    menu::run(&mut tracker, &save_file)
}
