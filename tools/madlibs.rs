//! Mad Libs: play fill-in-the-blanks stories on the terminal.
//!
//! Usage: madlibs [--story <path.ron>] [-v...]

use anyhow::{Context, Result};
use clap::Parser;
use madlibs::core::console::Console;
use madlibs::core::session::run_session;
use madlibs::core::story::Story;
use madlibs::logging::{init_logging, LogConfig};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "madlibs")]
#[command(about = "Fill in the blanks, read the story, beat your best score", long_about = None)]
#[command(version)]
struct Cli {
    /// RON story file to play instead of the built-in train station story
    #[arg(short, long)]
    story: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose)).context("failed to set up logging")?;

    let story = match cli.story {
        Some(ref path) => Story::load_from_ron(path)
            .with_context(|| format!("failed to load story from {}", path.display()))?,
        None => Story::train_station().context("built-in story is invalid")?,
    };
    info!(fields = story.fields.len(), rules = story.rules.len(), "story loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let stats = run_session(&story, &mut console)?;

    info!(rounds = stats.rounds_played, best = ?stats.best_score, "session finished");
    Ok(())
}
