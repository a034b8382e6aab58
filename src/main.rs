use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use udim_atlas::Pipeline;
use udim_atlas::config::{AtlasConfig, CliArgs};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Init tracing
    let filter = if args.verbose {
        EnvFilter::new("udim_atlas=debug")
    } else {
        EnvFilter::new("udim_atlas=info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config: AtlasConfig = args.into();

    // Configure rayon thread pool
    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure rayon thread pool")?;
    }

    match Pipeline::run(&config) {
        Ok(summary) => {
            println!(
                "Done: {} tiles from {} stacks packed into {}x{} in {:.2}s",
                summary.tile_count,
                summary.stack_count,
                summary.atlas_width,
                summary.atlas_height,
                summary.duration.as_secs_f64()
            );
            Ok(())
        }
        Err(e) => {
            error!(%e, "Packing failed");
            Err(anyhow::anyhow!(e)).context("udim-atlas packing failed")
        }
    }
}
