use std::collections::BTreeMap;

use image::RgbaImage;

use crate::types::Rect;

/// One parallel set of UDIM tiles (e.g. the diffuse channel, or the normal
/// channel) keyed by tile identity.
///
/// A `BTreeMap` keeps tile iteration in identity order, which keeps the
/// reference rectangle list -- and therefore the whole layout -- deterministic.
#[derive(Debug, Clone, Default)]
pub struct TileStack {
    /// Stack name, e.g. the filename prefix ("diffuse").
    pub name: String,
    pub tiles: BTreeMap<String, RgbaImage>,
}

impl TileStack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tiles: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, identity: impl Into<String>, image: RgbaImage) {
        self.tiles.insert(identity.into(), image);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile dimensions as packing rectangles, in identity order.
    pub fn rects(&self) -> Vec<Rect> {
        self.tiles
            .iter()
            .map(|(identity, img)| Rect::new(identity.clone(), img.width(), img.height()))
            .collect()
    }
}
