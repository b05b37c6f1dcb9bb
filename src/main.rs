//! `styrkehjul`: spin the wheel of strengths once a day.
//!
//! Writes the wheel as an SVG document, keeps the daily gate in a JSON file,
//! and prints the chosen strength once the spin animation has played.

mod commands;
mod config;
mod services;

use std::io;

use clap::{Parser, Subcommand};
use wheel::gate::{DailyGate, SystemClock};
use wheel::labels::default_labels;
use wheel::session::SpinSession;

use crate::commands::SpinOutcome;
use crate::config::{AppConfig, SvgOutput};
use crate::services::persistence::FileStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not format timestamp: {0}")]
    Format(#[from] time::error::Format),
}

#[derive(Parser, Debug)]
#[command(name = "styrkehjul", about = "Wheel of strengths, one spin per day")]
struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the wheel at rest.
    Render {
        #[command(flatten)]
        out: SvgOutput,
    },
    /// Spin once, write the animated wheel, and print today's strength.
    Spin {
        #[command(flatten)]
        out: SvgOutput,
    },
    /// Show whether today's spin is still available.
    Status,
}

#[tokio::main]
async fn main() {
    // Missing .env is the normal case.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }
    // Logs go to stderr; stdout carries the result text.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "styrkehjul failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Cli { config, command } = cli;
    tracing::info!(state_path = %config.state_path.display(), "daily gate storage configured");

    let gate = DailyGate::new(FileStore::new(config.state_path.clone()), SystemClock);
    let mut session = SpinSession::start(default_labels(), gate).with_reveal_delay(config.reveal_delay());
    let mut stdout = io::stdout().lock();

    match command {
        Command::Render { out } => commands::render(&session, &out.path),
        Command::Spin { out } => {
            let mut rng = rand::rng();
            match commands::spin(&mut session, &mut rng, &out.path, &mut stdout, interrupted()).await? {
                SpinOutcome::Revealed(text) | SpinOutcome::AlreadySpun(text) => {
                    tracing::debug!(%text, "spin command finished");
                }
                SpinOutcome::Unrevealed => tracing::info!("spin result left unrevealed"),
            }
            Ok(())
        }
        Command::Status => commands::status(&session, &mut stdout),
    }
}

/// Resolves on Ctrl-C; never resolves when the signal cannot be watched.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Ctrl-C handler unavailable");
        std::future::pending::<()>().await;
    }
}
