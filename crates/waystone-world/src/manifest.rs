//! The `world.json` manifest: chunk registry, spawn point, and the
//! tile-definition catalog the client renders from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use waystone_core::palette::Palette;

/// Top-level world manifest. Maps are BTreeMaps so the emitted JSON is
/// stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldManifest {
    pub chunk_size: i32,
    pub spawn_chunk: [i32; 2],
    pub spawn_local: [i32; 2],
    pub tile_definitions: BTreeMap<String, TileDef>,
    /// Keyed by `"x,y"`.
    pub chunks: BTreeMap<String, ChunkRef>,
}

/// Reference to one chunk file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRef {
    pub name: String,
    pub file: String,
}

/// How the client draws one glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDef {
    pub char: String,
    pub color: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub walkable: bool,
}

impl WorldManifest {
    pub fn chunk_key(x: i32, y: i32) -> String {
        format!("{x},{y}")
    }

    pub fn insert_chunk(&mut self, x: i32, y: i32, name: &str) {
        self.chunks.insert(
            Self::chunk_key(x, y),
            ChunkRef {
                name: name.to_string(),
                file: format!("{x}_{y}.json"),
            },
        );
    }
}

/// The full tile-definition catalog for a palette: one entry per slot,
/// keyed by glyph. Walkability matches what the generator writes for
/// each tile in its default role.
pub fn tile_definitions(palette: &Palette) -> BTreeMap<String, TileDef> {
    let entries = [
        (palette.grass, "#7cb860", "terrain", true),
        (palette.sand, "#e0cc8a", "terrain", true),
        (palette.water, "#4a90d9", "terrain", false),
        (palette.deep_water, "#2a5f9e", "terrain", false),
        (palette.snow, "#e8eef2", "terrain", false),
        (palette.mountain, "#8a8075", "terrain", false),
        (palette.peak, "#b5aa9d", "terrain", false),
        (palette.tree, "#3f7032", "vegetation", false),
        (palette.pine_tree, "#2d5c38", "vegetation", false),
        (palette.bush, "#5d8a4a", "vegetation", false),
        (palette.building, "#9a9a9a", "structure", false),
        (palette.white_building, "#d8d8d0", "structure", false),
        (palette.wood_wall, "#8a6642", "structure", false),
        (palette.door, "#c8893a", "structure", true),
        (palette.pillar, "#6e6e6e", "structure", false),
        (palette.path, "#c2a878", "infrastructure", true),
        (palette.cobblestone, "#a8a29a", "infrastructure", true),
        (palette.dock, "#9c7a50", "infrastructure", true),
        (palette.bridge, "#8a6642", "infrastructure", true),
        (palette.star, "#ffd700", "special", true),
        (palette.marker, "#e8c050", "special", true),
        (palette.empty, "#000000", "special", false),
        (palette.window, "#a8d8e8", "structure", false),
        (palette.wood_floor, "#b08a5a", "structure", true),
        (palette.chimney, "#5a5a5a", "structure", false),
    ];

    entries
        .into_iter()
        .map(|(glyph, color, kind, walkable)| {
            (
                glyph.to_string(),
                TileDef {
                    char: glyph.to_string(),
                    color: color.to_string(),
                    kind: kind.to_string(),
                    walkable,
                },
            )
        })
        .collect()
}
