//! Command-line entry point
//!
//! `p2d` takes no subcommands: it opens the session, runs the interactive
//! terminal UI until the user quits, then persists everything.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::session::Session;
use crate::storage::DataStore;
use crate::ui::TerminalUi;

#[derive(Parser)]
#[command(name = "p2d")]
#[command(author, version, about = "Personal todo lists that persist between runs")]
pub struct Cli {
    /// Override the data directory
    #[arg(long, env = "P2D_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let store = match cli.data_dir {
        Some(dir) => DataStore::at(dir),
        None => DataStore::default_location()?,
    };
    if cli.verbose {
        eprintln!("[verbose] data directory: {}", store.dir().display());
    }

    let mut session = Session::open(store)?;
    if cli.verbose {
        eprintln!(
            "[verbose] loaded {} user(s), {} list(s)",
            session.users().len(),
            session.lists().len()
        );
    }

    let mut ui = TerminalUi::new();
    session.run_and_save(&mut ui)?;
    if cli.verbose {
        eprintln!("[verbose] session saved");
    }

    Ok(())
}
