pub mod rect;
pub mod stack;

pub use rect::{PackResult, Placement, Rect};
pub use stack::TileStack;
