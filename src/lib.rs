pub mod atlas;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod packing;
pub mod pipeline;
pub mod types;

pub use atlas::{PackCalculation, remap_uv, udim_tile_id};
pub use config::{AtlasConfig, ResampleFilter};
pub use packing::pack;
pub use pipeline::Pipeline;
pub use types::{PackResult, Placement, Rect, TileStack};
