//! LayerKV CLI
//!
//! Line-oriented shell over the LayerKV transactional store.
//!
//! # Commands
//!
//! - `GET key...` - print each value, or `NULL`
//! - `SET key value` - set a key to a 64-bit integer
//! - `UNSET key...` - delete keys
//! - `NUMEQUALTO value...` - print how many keys hold each value
//! - `BEGIN` / `COMMIT` / `ROLLBACK` - nested transactions
//! - `DEBUG` - dump the transaction frames
//! - `END` - exit

mod commands;
mod error;
mod router;

use clap::Parser;
use commands::debug::DebugFormat;
use layerkv_core::{Config, Store};
use router::{Outcome, Router};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// In-memory transactional key/value shell.
#[derive(Parser)]
#[command(name = "layerkv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Push a new frame on every BEGIN, even if the open transaction is empty
    #[arg(long)]
    strict_begin: bool,

    /// Output format for DEBUG
    #[arg(long, value_enum, default_value_t = DebugFormat::Text)]
    debug_format: DebugFormat,

    /// Print operation statistics to stderr on exit
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let store = Store::with_config(Config::new().collapse_empty_begin(!cli.strict_begin));
    debug!(
        collapse_empty_begin = store.config().collapse_empty_begin,
        "store ready"
    );
    let stdout = io::stdout().lock();
    let mut router = Router::new(store, stdout).with_debug_format(cli.debug_format);

    let outcome = match &cli.input {
        Some(path) => {
            info!("Reading commands from {:?}", path);
            router.run(BufReader::new(File::open(path)?))?
        }
        None => router.run(io::stdin().lock())?,
    };

    match &outcome {
        Outcome::Halted { word } => info!(%word, "stopped at unrecognized command"),
        _ => info!(?outcome, "input finished"),
    }

    let (store, _) = router.into_parts();
    if cli.stats {
        let stats = store.stats();
        eprintln!("{}", serde_json::to_string_pretty(&stats)?);
    }

    Ok(())
}
