use std::{
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use memsim::{config::SimConfig, simulation, storage::backing_store::DEFAULT_BACKING_STORE};

/// Simulates TLB, page table and page replacement over a reference trace.
#[derive(Debug, Parser)]
#[command(name = "memsim", version)]
struct Args {
    /// File with one decimal logical address per line
    reference_file: PathBuf,

    /// Number of physical frames, 1-256. Anything else means 256.
    #[arg(allow_negative_numbers = true)]
    frames: Option<String>,

    /// Page replacement algorithm: fifo, lru or opt. Anything else means fifo.
    pra: Option<String>,

    /// Secondary storage the pages are loaded from
    #[arg(long, default_value = DEFAULT_BACKING_STORE)]
    backing_store: PathBuf,
}

impl Args {
    fn into_config(self) -> SimConfig {
        SimConfig::from_args(self.reference_file, self.frames.as_deref(), self.pra.as_deref())
            .backing_store(self.backing_store)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the translation report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Args::parse().into_config();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    simulation::run(&config, &mut out)?;

    Ok(())
}
