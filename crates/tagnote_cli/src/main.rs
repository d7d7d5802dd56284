//! `tagnote` command line front-end.
//!
//! # Responsibility
//! - Parse arguments, start logging, open the SQLite-backed notebook.
//! - Delegate every subcommand to `commands::run`.

mod cli;
mod commands;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cli::Cli;
use tagnote_core::{default_log_level, init_logging, Notebook, SqliteSlot};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_ref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = log_dir
            .to_str()
            .ok_or_else(|| anyhow!("log directory is not valid UTF-8"))?;
        init_logging(level, log_dir).map_err(|err| anyhow!("failed to start logging: {err}"))?;
    }

    let slot = SqliteSlot::open(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let mut notebook = Notebook::open(slot).context("failed to load notebook")?;

    let stdout = std::io::stdout();
    commands::run(&mut notebook, cli.command, &mut stdout.lock())
}
