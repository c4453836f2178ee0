//! Input configuration for one chunk.

use std::collections::BTreeMap;

use waystone_core::point::Direction;

use crate::biome::BiomeKind;

/// Structure a project manifests as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureKind {
    Building,
    Cabin,
    Tower,
    Shrine,
    Courtyard,
}

/// One project to place inside a chunk.
#[derive(Debug, Clone)]
pub struct ProjectPlacement {
    pub project_id: String,
    pub name: String,
    pub description: String,
    pub structure: StructureKind,
    /// Relative size, 1 to 3.
    pub size: i32,
}

/// Declarative description of everything a chunk should contain. The
/// generator is a pure function of this value; in particular `seed`
/// completely determines every random draw.
///
/// `signpost_hints` is a BTreeMap so hint iteration is ordered; unordered
/// containers must never feed generation.
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    pub chunk_x: i32,
    pub chunk_y: i32,
    pub seed: u64,
    pub biome: BiomeKind,
    /// Sides carrying water.
    pub shorelines: Vec<Direction>,
    /// Sides connecting to neighbour chunks.
    pub connections: Vec<Direction>,
    pub signpost_hints: BTreeMap<Direction, String>,
    pub projects: Vec<ProjectPlacement>,
}

impl ChunkConfig {
    /// A minimal config for the given biome and seed, with no
    /// connections, shorelines, or projects.
    pub fn new(chunk_x: i32, chunk_y: i32, seed: u64, biome: BiomeKind) -> Self {
        Self {
            chunk_x,
            chunk_y,
            seed,
            biome,
            shorelines: Vec::new(),
            connections: Vec::new(),
            signpost_hints: BTreeMap::new(),
            projects: Vec::new(),
        }
    }
}
