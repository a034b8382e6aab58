use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::error::{AtlasError, Result};
use crate::types::TileStack;

/// UDIM tile filenames follow `<prefix>.<tilenumber>.<ext>`, e.g.
/// `diffuse.1001.png`.
static TILE_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\.(\d+)\.(\w+)$").unwrap());

/// The prefix/number/extension parts of one tile filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileName {
    pub prefix: String,
    pub number: String,
    pub extension: String,
}

/// Parse a tile path of the form `<prefix>.<tilenumber>.<ext>`.
pub fn parse_tile_name(path: &Path) -> Result<TileName> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AtlasError::InvalidInput(format!("bad path: {}", path.display())))?;

    let captures = TILE_FILENAME.captures(filename).ok_or_else(|| {
        AtlasError::InvalidInput(format!(
            "'{}' does not match the tile naming pattern, files must be in the form 'foo.1001.png'",
            path.display()
        ))
    })?;

    Ok(TileName {
        prefix: captures[1].to_string(),
        number: captures[2].to_string(),
        extension: captures[3].to_string(),
    })
}

/// Discover and load a full tile stack from one representative tile file.
///
/// Scans the file's directory for siblings sharing its prefix and extension;
/// each match is decoded and keyed by its tile number.
pub fn load_stack(representative: &Path) -> Result<TileStack> {
    let name = parse_tile_name(representative)?;
    let dir = representative.parent().unwrap_or_else(|| Path::new("."));

    let mut stack = TileStack::new(name.prefix.clone());

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(captures) = TILE_FILENAME.captures(filename) else {
            continue;
        };
        if &captures[1] != name.prefix || &captures[3] != name.extension {
            continue;
        }

        let tile_number = captures[2].to_string();
        debug!(stack = %name.prefix, tile = %tile_number, path = %path.display(), "Loading tile");

        let image = image::open(&path)?.to_rgba8();
        stack.insert(tile_number, image);
    }

    if stack.is_empty() {
        return Err(AtlasError::InvalidInput(format!(
            "no tiles found for '{}'",
            representative.display()
        )));
    }

    info!(stack = %name.prefix, tiles = stack.len(), "Loaded tile stack");
    Ok(stack)
}
