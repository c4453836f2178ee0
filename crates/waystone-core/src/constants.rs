//! Single source of truth for generation constants shared across crates.

/// Side length of a chunk in tiles.
pub const CHUNK_SIZE: i32 = 50;

/// Glyph returned for out-of-bounds reads and empty random choices.
pub const EMPTY_TILE: char = ' ';

/// Interior margin keeping project placements away from chunk borders.
pub const SAFE_MARGIN: i32 = 10;

/// Wider margin applied toward any side that carries a shoreline.
pub const SHORE_MARGIN: i32 = 15;

/// Tiles of water in a shoreline band, measured from the chunk edge.
pub const SHORELINE_WATER_DEPTH: i32 = 3;

/// Tiles of sand between shoreline water and the interior.
pub const SHORELINE_SAND_DEPTH: i32 = 2;

/// How far inside an outbound side its signpost is placed.
pub const SIGNPOST_INSET: i32 = 4;

/// Half-extent of the central hub plaza.
pub const HUB_RADIUS: i32 = 3;
