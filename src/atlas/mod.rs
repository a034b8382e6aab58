pub mod calculation;
pub mod compositor;
pub mod remap;

pub use calculation::PackCalculation;
pub use remap::{remap_uv, udim_tile_id};
