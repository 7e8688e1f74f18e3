/*
 * Dot Field
 *
 * An animated field of dots. Every pair of dots is joined by a spring-like line:
 * close pairs push apart, farther pairs pull together, and pairs beyond the
 * force range ignore each other. Holding the left mouse button pushes dots away,
 * fast dots are slowed down, and dots leaving the window wrap around to the other side.
 *
 * Usage: dotfield [--config scenario.yaml] [--seed N] [--particles N]
 * Log level is read from RUST_LOG (default: info).
 */

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dotfield::SimulationParams;

#[derive(Parser, Debug)]
#[command(version, about = "Animated dot field with spring-like lines")]
struct Args {
    /// YAML scenario file; omitted fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible initial field
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of dots
    #[arg(short, long)]
    particles: Option<usize>,
}

fn load_params(args: &Args) -> Result<SimulationParams> {
    let mut params = match &args.config {
        Some(path) => SimulationParams::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => SimulationParams::default(),
    };

    if let Some(seed) = args.seed {
        params.seed = Some(seed);
    }
    if let Some(count) = args.particles {
        params.particle_count = count;
    }

    params.validate().context("invalid simulation parameters")?;
    Ok(params)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let params = load_params(&args)?;

    tracing::info!(
        particles = params.particle_count,
        tick_rate = params.tick_rate,
        "starting dot field"
    );

    dotfield::app::run(params);

    Ok(())
}
