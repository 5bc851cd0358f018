//! Rock-Paper-Scissors-Plus referee
//!
//! Plays one best-of-3 game between the terminal user and a bot, using
//! the logic crate for every rule decision.

mod config;
mod session;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Args, RefereeConfig};
use session::{run_session, Transcript};

fn init_logging(verbose: bool) {
    // Silent by default so stdout stays the game dialogue; RUST_LOG wins when set
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_transcript(transcript: &Transcript, path: &std::path::Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create transcript {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, transcript).context("failed to encode transcript")?;
    writer.flush().context("failed to write transcript")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = RefereeConfig::from_args(&args);
    info!(seed = config.seed_value, strategy = ?config.strategy, "starting referee");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let transcript = run_session(stdin.lock(), &mut stdout, &config)?;

    if let Some(path) = &config.transcript {
        write_transcript(&transcript, path)?;
        info!(path = %path.display(), "transcript written");
    }

    Ok(())
}
