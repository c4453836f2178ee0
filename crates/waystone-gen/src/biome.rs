//! The biome catalog: per-terrain generation rules.

use crate::config::StructureKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiomeKind {
    Grassland,
    Mountain,
    Coastal,
    Forest,
    Urban,
    Castle,
}

impl BiomeKind {
    /// Lowercase name used in logs and manifest entries.
    pub fn name(self) -> &'static str {
        match self {
            BiomeKind::Grassland => "grassland",
            BiomeKind::Mountain => "mountain",
            BiomeKind::Coastal => "coastal",
            BiomeKind::Forest => "forest",
            BiomeKind::Urban => "urban",
            BiomeKind::Castle => "castle",
        }
    }
}

/// Generation rules for one terrain type. `tree_type` is the glyph the
/// decoration pass scatters; densities are per-cell probabilities.
#[derive(Debug, Clone)]
pub struct Biome {
    pub kind: BiomeKind,
    pub base_tile: char,
    pub base_walkable: bool,
    pub allowed_structures: &'static [StructureKind],
    pub allowed_terrain: &'static [&'static str],
    pub allowed_infra: &'static [&'static str],
    pub tree_type: char,
    pub tree_density: f64,
    pub bush_density: f64,
}

impl Biome {
    pub fn get(kind: BiomeKind) -> Biome {
        match kind {
            BiomeKind::Grassland => Biome {
                kind,
                base_tile: '^',
                base_walkable: true,
                allowed_structures: &[
                    StructureKind::Building,
                    StructureKind::Cabin,
                    StructureKind::Shrine,
                ],
                allowed_terrain: &["grove", "clearing"],
                allowed_infra: &["plaza", "bridge"],
                tree_type: 'T',
                tree_density: 0.03,
                bush_density: 0.01,
            },
            BiomeKind::Mountain => Biome {
                kind,
                base_tile: '^',
                base_walkable: true,
                allowed_structures: &[
                    StructureKind::Cabin,
                    StructureKind::Tower,
                    StructureKind::Shrine,
                ],
                allowed_terrain: &["mountain_range", "clearing"],
                allowed_infra: &["bridge"],
                tree_type: 't',
                tree_density: 0.05,
                bush_density: 0.0,
            },
            BiomeKind::Coastal => Biome {
                kind,
                base_tile: '^',
                base_walkable: true,
                allowed_structures: &[StructureKind::Building, StructureKind::Cabin],
                allowed_terrain: &["shoreline", "clearing"],
                allowed_infra: &["plaza", "dock", "bridge"],
                tree_type: 'T',
                tree_density: 0.02,
                bush_density: 0.02,
            },
            BiomeKind::Forest => Biome {
                kind,
                base_tile: '^',
                base_walkable: true,
                allowed_structures: &[StructureKind::Cabin, StructureKind::Shrine],
                allowed_terrain: &["grove", "clearing"],
                allowed_infra: &["bridge"],
                tree_type: 'T',
                tree_density: 0.15,
                bush_density: 0.05,
            },
            BiomeKind::Urban => Biome {
                kind,
                base_tile: '^',
                base_walkable: true,
                allowed_structures: &[
                    StructureKind::Building,
                    StructureKind::Tower,
                    StructureKind::Courtyard,
                ],
                allowed_terrain: &["clearing"],
                allowed_infra: &["plaza"],
                tree_type: 'T',
                tree_density: 0.01,
                bush_density: 0.02,
            },
            BiomeKind::Castle => Biome {
                kind,
                base_tile: '^',
                base_walkable: true,
                allowed_structures: &[
                    StructureKind::Building,
                    StructureKind::Tower,
                    StructureKind::Courtyard,
                    StructureKind::Shrine,
                ],
                allowed_terrain: &["clearing"],
                allowed_infra: &["plaza", "bridge"],
                tree_type: 'T',
                tree_density: 0.02,
                bush_density: 0.01,
            },
        }
    }
}
