//! Galaxy Forge - command line entry point

use std::path::PathBuf;

use clap::Parser;
use galaxy_forge::core::config::WorldConfig;
use galaxy_forge::core::error::Result;
use galaxy_forge::world::{generate_world_in_background, WorldSnapshot};
use tokio::runtime::Runtime;

/// Generate a galaxy, its factions and a starting system
#[derive(Parser, Debug)]
#[command(name = "galaxy-forge")]
#[command(about = "Procedurally generate a galaxy with factions and a player start")]
struct Args {
    /// Random seed; a fresh one is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// TOML world config (defaults apply to anything left out)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the full world snapshot as JSON
    #[arg(long)]
    output: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.quiet { tracing::Level::WARN } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let config = match &args.config {
        Some(path) => WorldConfig::load(path)?,
        None => WorldConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);

    tracing::info!("Generating world from seed {}", seed);

    let rt = Runtime::new()?;
    let world = rt.block_on(generate_world_in_background(config, seed))?;
    let snapshot = WorldSnapshot::new(world);

    println!("{}", snapshot.summary());

    if let Some(path) = &args.output {
        std::fs::write(path, snapshot.to_json()?)?;
        println!("\nFull world written to {}", path.display());
    }

    Ok(())
}
