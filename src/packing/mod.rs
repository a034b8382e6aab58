pub mod tree;

use tracing::debug;

use crate::error::{AtlasError, Result};
use crate::types::{PackResult, Placement, Rect};

use tree::GrowingPacker;

/// Pack a set of tile rectangles into a minimal bounding box.
///
/// Rectangles are processed in descending order of their longer side (stable,
/// so ties keep the caller's relative order) against a tree seeded at the
/// largest rectangle's size. Placements come back in that processing order;
/// look tiles up by identity via [`PackResult::placement`].
///
/// Deterministic: the same input list always yields the same layout.
pub fn pack(rects: &[Rect]) -> Result<PackResult> {
    validate(rects)?;

    let mut sorted: Vec<&Rect> = rects.iter().collect();
    sorted.sort_by(|a, b| b.max_side().cmp(&a.max_side()));

    let mut packer = GrowingPacker::new(sorted[0].width, sorted[0].height);
    let mut placements = Vec::with_capacity(sorted.len());

    for rect in sorted {
        let (x, y) = packer
            .place(rect.width, rect.height)?
            .ok_or_else(|| AtlasError::UnfitItem(rect.identity.clone()))?;

        debug!(
            tile = %rect.identity,
            width = rect.width,
            height = rect.height,
            x,
            y,
            "Placed tile"
        );

        placements.push(Placement {
            identity: rect.identity.clone(),
            x,
            y,
            width: rect.width,
            height: rect.height,
        });
    }

    let (width, height) = packer.bounds();
    Ok(PackResult {
        width,
        height,
        placements,
    })
}

fn validate(rects: &[Rect]) -> Result<()> {
    if rects.is_empty() {
        return Err(AtlasError::InvalidInput("empty rectangle list".into()));
    }

    for rect in rects {
        if rect.width == 0 || rect.height == 0 {
            return Err(AtlasError::InvalidInput(format!(
                "tile '{}' has zero dimension ({}x{})",
                rect.identity, rect.width, rect.height
            )));
        }
    }

    for (i, rect) in rects.iter().enumerate() {
        if rects[..i].iter().any(|r| r.identity == rect.identity) {
            return Err(AtlasError::InvalidInput(format!(
                "duplicate tile identity '{}'",
                rect.identity
            )));
        }
    }

    Ok(())
}
