use std::collections::BTreeSet;

use image::RgbaImage;
use tracing::info;

use crate::config::ResampleFilter;
use crate::error::{AtlasError, Result};
use crate::packing;
use crate::types::{PackResult, TileStack};

use super::compositor;

/// A computed layout shared by every parallel tile stack.
///
/// The layout is packed once from the reference stack's tile dimensions and
/// then reused verbatim for each additional stack, which keeps all channels
/// of one material pixel-aligned in their atlases.
#[derive(Debug, Clone)]
pub struct PackCalculation {
    /// Name of the stack the layout was computed from.
    pub reference: String,
    pub layout: PackResult,
}

impl PackCalculation {
    /// Pack the reference stack's tile dimensions into a layout.
    pub fn compute(reference: &TileStack) -> Result<Self> {
        if reference.is_empty() {
            return Err(AtlasError::InvalidInput(format!(
                "stack '{}' has no tiles",
                reference.name
            )));
        }

        let layout = packing::pack(&reference.rects())?;

        info!(
            stack = %reference.name,
            tiles = reference.len(),
            width = layout.width,
            height = layout.height,
            "Computed reference layout"
        );

        Ok(Self {
            reference: reference.name.clone(),
            layout,
        })
    }

    /// Check that a stack carries exactly the reference's tile identities.
    ///
    /// Secondary stacks must neither miss a tile nor bring extras; either
    /// would silently misalign the channels, so both are hard errors.
    pub fn validate_stack(&self, stack: &TileStack) -> Result<()> {
        let reference: BTreeSet<&str> = self
            .layout
            .placements
            .iter()
            .map(|p| p.identity.as_str())
            .collect();
        let candidate: BTreeSet<&str> = stack.tiles.keys().map(String::as_str).collect();

        if let Some(missing) = reference.difference(&candidate).next() {
            return Err(AtlasError::StackMismatch(format!(
                "stack '{}' lacks tile {} present in reference stack '{}'",
                stack.name, missing, self.reference
            )));
        }
        if let Some(extra) = candidate.difference(&reference).next() {
            return Err(AtlasError::StackMismatch(format!(
                "stack '{}' has tile {} absent from reference stack '{}'",
                stack.name, extra, self.reference
            )));
        }

        Ok(())
    }

    /// Composite one stack into an atlas image using the shared layout.
    pub fn compose(&self, stack: &TileStack, filter: ResampleFilter) -> Result<RgbaImage> {
        self.validate_stack(stack)?;
        compositor::compose(&self.layout, stack, filter)
    }
}
