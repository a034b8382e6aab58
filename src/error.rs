use std::io;

/// All error types for the udim-atlas library.
#[derive(thiserror::Error, Debug)]
pub enum AtlasError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Packing exhausted: no growth direction fits a {width}x{height} tile")]
    PackingExhausted { width: u32, height: u32 },
    #[error("Stack mismatch: {0}")]
    StackMismatch(String),
    #[error("Unknown tile: no placement recorded for tile {0}")]
    UnknownTile(u32),
    #[error("Unfit item: no placement produced for tile '{0}'")]
    UnfitItem(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AtlasError>;
