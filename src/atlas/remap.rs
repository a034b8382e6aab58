use crate::error::{AtlasError, Result};
use crate::types::PackResult;

/// Decode the UDIM tile number a UV sample belongs to.
///
/// The integer part of the coordinate encodes the tile by the standard
/// convention: 1001 at the origin, increasing rightward, rows of 10 upward.
pub fn udim_tile_id(uv: [f32; 2]) -> u32 {
    let column = uv[0].floor() as i64 + 1;
    let row = uv[1].floor() as i64;
    (1000 + column + row * 10) as u32
}

/// Map a tile-local UV coordinate into the packed atlas's normalized UV space.
///
/// The fractional part of `uv` is the position inside the tile; the tile's
/// placement turns it into an affine offset/scale within the atlas. No
/// rotation or flipping is ever applied. Pure per-sample transform, safe to
/// apply to every mesh loop independently.
pub fn remap_uv(layout: &PackResult, uv: [f32; 2], tile_id: u32) -> Result<[f32; 2]> {
    // rem_euclid keeps the fraction non-negative for coordinates left of
    // or below the origin.
    let u_frac = uv[0].rem_euclid(1.0);
    let v_frac = uv[1].rem_euclid(1.0);

    let identity = tile_id.to_string();
    let placement = layout
        .placement(&identity)
        .ok_or(AtlasError::UnknownTile(tile_id))?;

    let atlas_w = layout.width as f32;
    let atlas_h = layout.height as f32;

    let u_start = placement.x as f32 / atlas_w;
    let v_start = placement.y as f32 / atlas_h;
    let u_range = placement.width as f32 / atlas_w;
    let v_range = placement.height as f32 / atlas_h;

    Ok([u_start + u_frac * u_range, v_start + v_frac * v_range])
}
