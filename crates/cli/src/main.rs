//! parceldb console: a menu-driven front end over the record store.
//!
//! Loads the collections at startup, drives the numbered menu over
//! stdin, and saves everything back at exit. Logging goes to stderr so
//! tables and JSON stay clean on stdout.

mod format;
mod menu;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use parceldb_engine::{Store, StoreConfig};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::format::OutputMode;

/// Menu-driven record manager for a small shipping counter.
#[derive(Debug, Parser)]
#[command(name = "parceldb", version, about)]
struct Cli {
    /// Directory holding the collection blobs.
    #[arg(long, default_value = "parceldb-data")]
    data_dir: PathBuf,

    /// Render listings as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mode = if cli.json { OutputMode::Json } else { OutputMode::Human };
    let config = StoreConfig::new(&cli.data_dir);

    let mut store = match Store::open(config.clone()) {
        Ok(store) => store,
        Err(e) => {
            warn!(error = %e, "load failed, continuing with empty collections");
            eprintln!("Could not load saved records: {}", e);
            eprintln!("Continuing with empty collections. Exiting will overwrite the saved data.");
            Store::empty(config)
        }
    };

    println!("Welcome to the shipping store record manager.");
    let stdin = io::stdin();
    let mut input = stdin.lock();
    menu::run(&mut store, &mut input, mode).context("console session failed")?;

    store.close().context("failed to save the collections")?;
    println!("All records saved. Goodbye!");
    Ok(())
}
