//! Console runner: loads a seed file and prints successive generations.
//!
//! Usage: `life-runner <seed-file> [runs]`. Both arguments fall back to
//! `LIFE_SEED_PATH` and `LIFE_RUNS`.

mod console;
mod telemetry;

use anyhow::{Context, Result};
use life_core::RunnerConfig;
use std::io;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = RunnerConfig::from_env()?;

    telemetry::init_telemetry(config.otel_endpoint.as_deref())?;

    // Errors come back here so spans are flushed before exit
    let result = run(config, std::env::args().skip(1));

    telemetry::shutdown_telemetry();

    result
}

fn run(config: RunnerConfig, mut args: impl Iterator<Item = String>) -> Result<()> {
    let seed_path = args
        .next()
        .or(config.seed_path)
        .context("usage: life-runner <seed-file> [runs]")?;

    let runs = match args.next() {
        Some(value) => value
            .parse::<u32>()
            .with_context(|| format!("invalid run count {:?}", value))?,
        None => config.runs,
    };

    info!("Running {} generations from {}", runs, seed_path);

    let board = life_board::load_seed(&seed_path)
        .with_context(|| format!("failed to load seed {}", seed_path))?;

    let last = console::print_generations(board, runs, &mut io::stdout().lock())?;

    info!(
        generation = last.generation(),
        live_cells = last.live_cells(),
        "Run finished"
    );

    Ok(())
}
