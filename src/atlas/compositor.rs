use image::RgbaImage;
use image::imageops;
use rayon::prelude::*;
use tracing::debug;

use crate::config::ResampleFilter;
use crate::error::{AtlasError, Result};
use crate::types::{PackResult, Placement, TileStack};

/// Blit every tile of a stack into a fresh atlas canvas.
///
/// A tile whose native resolution differs from its recorded placement size is
/// resampled to fit first; exact matches are copied untouched to avoid
/// needless filtering loss. Resampling runs in parallel across tiles, the
/// blits into the shared canvas are serial. Placements never overlap, so the
/// write regions are disjoint.
pub fn compose(layout: &PackResult, stack: &TileStack, filter: ResampleFilter) -> Result<RgbaImage> {
    let prepared: Vec<(&Placement, RgbaImage)> = layout
        .placements
        .par_iter()
        .map(|placement| {
            let tile = stack
                .tiles
                .get(&placement.identity)
                .ok_or_else(|| {
                    AtlasError::StackMismatch(format!(
                        "stack '{}' lacks tile {}",
                        stack.name, placement.identity
                    ))
                })?;
            Ok((placement, fit_to_placement(tile, placement, filter)))
        })
        .collect::<Result<_>>()?;

    let mut canvas = RgbaImage::new(layout.width, layout.height);
    for (placement, tile) in prepared {
        imageops::replace(&mut canvas, &tile, i64::from(placement.x), i64::from(placement.y));
    }

    Ok(canvas)
}

/// Resample a tile to its placement size, or pass it through when the
/// dimensions already match.
fn fit_to_placement(tile: &RgbaImage, placement: &Placement, filter: ResampleFilter) -> RgbaImage {
    if tile.dimensions() == (placement.width, placement.height) {
        return tile.clone();
    }

    debug!(
        tile = %placement.identity,
        from_width = tile.width(),
        from_height = tile.height(),
        to_width = placement.width,
        to_height = placement.height,
        "Resampling tile to placement size"
    );

    imageops::resize(tile, placement.width, placement.height, filter.into())
}
