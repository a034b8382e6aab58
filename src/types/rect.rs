use serde::{Deserialize, Serialize};

/// One rectangle to pack: the pixel dimensions of a source tile plus the
/// identity it is looked up by afterwards (the UDIM tile number as a string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rect {
    pub identity: String,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(identity: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            identity: identity.into(),
            width,
            height,
        }
    }

    /// The longer of the two sides. Sort key for the packing order.
    pub fn max_side(&self) -> u32 {
        self.width.max(self.height)
    }
}

/// Where one tile ended up inside the atlas.
///
/// `width`/`height` always equal the requested rectangle's; the packer never
/// rotates or scales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub identity: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Output of one packing run: the atlas bounding size plus one placement per
/// input rectangle.
///
/// Placements are stored in the packer's processing order (descending by max
/// side), not the caller's input order. Callers needing a specific tile use
/// [`PackResult::placement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackResult {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
}

impl PackResult {
    /// Look up the placement for a tile identity.
    pub fn placement(&self, identity: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.identity == identity)
    }
}
