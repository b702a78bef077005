//! Interactive campus wayfinding assistant
//!
//! Loads the example campus and answers shortest path queries read from stdin.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wayfinding::assistant::{Session, DEFAULT_EXIT_WORD};
use wayfinding::campus::example_campus;

/// Find the shortest walking route between two campus locations
#[derive(Parser, Debug)]
#[command(name = "wayfinding", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Word that ends the session when entered as the current location.
    #[arg(long, default_value = DEFAULT_EXIT_WORD)]
    exit_word: String,

    /// Print the known locations before the first prompt.
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let campus = example_campus().context("failed to build the example campus")?;
    tracing::debug!(locations = campus.len(), paths = campus.path_count(), "campus loaded");

    Session::new(&campus)
        .with_exit_word(cli.exit_word.as_str())
        .with_location_list(cli.list)
        .run(io::stdin().lock(), io::stdout().lock())
        .context("wayfinding session failed")?;

    Ok(())
}
