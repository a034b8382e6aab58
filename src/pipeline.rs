use std::fs;
use std::time::{Duration, Instant};

use tracing::info;

use crate::atlas::PackCalculation;
use crate::config::AtlasConfig;
use crate::error::{AtlasError, Result};
use crate::ingestion;
use crate::types::TileStack;

/// Summary of a completed packing run.
#[derive(Debug)]
pub struct PackingSummary {
    pub stack_count: usize,
    pub tile_count: usize,
    pub atlas_width: u32,
    pub atlas_height: u32,
    pub duration: Duration,
}

/// Pipeline orchestrator -- drives discovery, packing, and compositing.
pub struct Pipeline;

impl Pipeline {
    /// Run the full packing pipeline.
    ///
    /// The first input names the reference stack; its tile dimensions decide
    /// the layout every stack is composited with. One `<prefix>_packed.png`
    /// is written per stack, plus the layout JSON for downstream UV rewrites.
    pub fn run(config: &AtlasConfig) -> Result<PackingSummary> {
        let start = Instant::now();

        if config.inputs.is_empty() {
            return Err(AtlasError::InvalidInput("no input stacks given".into()));
        }

        info!(stacks = config.inputs.len(), "Stage 1/3: Tile discovery");
        let stacks: Vec<TileStack> = config
            .inputs
            .iter()
            .map(|path| ingestion::load_stack(path))
            .collect::<Result<_>>()?;

        info!(reference = %stacks[0].name, "Stage 2/3: Packing");
        let calculation = PackCalculation::compute(&stacks[0])?;

        info!("Stage 3/3: Compositing");
        fs::create_dir_all(&config.output)?;

        for stack in &stacks {
            let atlas = calculation.compose(stack, config.filter)?;
            let path = config.output.join(format!("{}_packed.png", stack.name));
            atlas.save(&path)?;
            info!(
                stack = %stack.name,
                output = %path.display(),
                width = atlas.width(),
                height = atlas.height(),
                "Wrote atlas"
            );
        }

        let layout_path = config.output.join(&config.layout_file);
        let json = serde_json::to_string_pretty(&calculation.layout)?;
        fs::write(&layout_path, json)?;
        info!(output = %layout_path.display(), "Wrote layout");

        let duration = start.elapsed();
        info!(elapsed = ?duration, "Packing complete");

        Ok(PackingSummary {
            stack_count: stacks.len(),
            tile_count: calculation.layout.placements.len(),
            atlas_width: calculation.layout.width,
            atlas_height: calculation.layout.height,
            duration,
        })
    }
}
