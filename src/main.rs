//! World Sim - headless runner
//!
//! Drives the scheduler with fixed-length frames, optionally playing random
//! interventions, and writes a JSON run summary.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use world_sim::actions::{load_catalog, InterventionCatalog};
use world_sim::core::error::Result;
use world_sim::core::EngineConfig;
use world_sim::runner::{run_headless, RunOptions};

/// Headless world simulation runner
#[derive(Parser, Debug)]
#[command(name = "world_sim")]
#[command(about = "Run the continent simulation without a UI and report the outcome")]
struct Args {
    /// Number of simulated days to run
    #[arg(long, default_value_t = 365)]
    days: u64,

    /// Simulated days per `ms_per_day` of frame time
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    speed: u32,

    /// Frame length in milliseconds
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    frame_ms: u64,

    /// Engine config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Intervention catalog (TOML); built-in catalog when omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Queue a random intervention on a random region every N days
    #[arg(long)]
    autoplay_every: Option<u64>,

    /// Random seed for autoplay
    #[arg(long, default_value_t = 2020)]
    seed: u64,

    /// Write the JSON run summary here
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("world_sim=info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => InterventionCatalog::with_defaults(),
    };

    tracing::info!(
        "World Sim starting: {} days at speed {}, {} interventions available",
        args.days,
        args.speed,
        catalog.len()
    );

    let summary = run_headless(
        &config,
        &catalog,
        &RunOptions {
            days: args.days,
            speed: args.speed,
            frame_ms: args.frame_ms,
            autoplay_every: args.autoplay_every,
            seed: args.seed,
        },
    );
    println!("{}", summary.summary());

    for event in summary.news.latest(5) {
        println!("  day {:>5}: {}", event.day, event.kind.headline());
    }

    if let Some(path) = &args.output {
        std::fs::write(path, summary.to_json())?;
        println!("\nFull output written to {}", path.display());
    }

    Ok(())
}
