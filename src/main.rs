use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process;

use chrono::NaiveDateTime;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rusty_ledger::{run, FixedClock, SystemClock};

/// Replays a CSV log of add/update/delete commands and prints the stored transactions.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// CSV file with columns type,id,amount,currency,date,description
    input: PathBuf,

    /// Validate dates against this time instead of the system clock (e.g. 2024-06-15T12:00:00)
    #[arg(long)]
    now: Option<NaiveDateTime>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run_app(cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run_app(cli: Cli) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    match cli.now {
        Some(now) => run(&cli.input, stdout.lock(), FixedClock(now)),
        None => run(&cli.input, stdout.lock(), SystemClock),
    }
}
