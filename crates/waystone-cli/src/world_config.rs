//! The declarative world: seven chunks, their biomes, connections, and
//! project placements. Seeds are fixed so every run of the generator
//! reproduces the world byte for byte.

use std::collections::BTreeMap;

use waystone_core::point::Direction;
use waystone_gen::{BiomeKind, ChunkConfig, ProjectPlacement, StructureKind};

/// One chunk in the world layout, with the display name the manifest
/// registers it under.
pub struct WorldEntry {
    pub name: &'static str,
    pub config: ChunkConfig,
}

/// Chunk coordinates of the spawn chunk.
pub const SPAWN_CHUNK: [i32; 2] = [0, 0];

/// Spawn tile inside the spawn chunk, on the hub plaza.
pub const SPAWN_LOCAL: [i32; 2] = [25, 25];

fn hints(entries: &[(Direction, &str)]) -> BTreeMap<Direction, String> {
    entries
        .iter()
        .map(|&(dir, hint)| (dir, hint.to_string()))
        .collect()
}

fn project(
    project_id: &str,
    name: &str,
    description: &str,
    structure: StructureKind,
    size: i32,
) -> ProjectPlacement {
    ProjectPlacement {
        project_id: project_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        structure,
        size,
    }
}

/// The full world layout, in generation order.
pub fn default_world() -> Vec<WorldEntry> {
    vec![
        WorldEntry {
            name: "Meadow Isle",
            config: ChunkConfig {
                chunk_x: 0,
                chunk_y: 0,
                seed: 24601,
                biome: BiomeKind::Grassland,
                shorelines: vec![],
                connections: vec![Direction::South, Direction::East, Direction::West],
                signpost_hints: hints(&[
                    (Direction::South, "Castle spires glimmer in the distance."),
                    (Direction::East, "The smell of salt and sea beckons."),
                    (
                        Direction::West,
                        "Shadows dance between ancient trees, and mountains loom beyond.",
                    ),
                ]),
                projects: vec![project(
                    "portfolio",
                    "Portfolio Shrine",
                    "A mystical monument that seems to reflect your very presence. \
                     How... recursive.",
                    StructureKind::Shrine,
                    2,
                )],
            },
        },
        WorldEntry {
            name: "The High Passes",
            config: ChunkConfig {
                chunk_x: -1,
                chunk_y: -1,
                seed: 31847,
                biome: BiomeKind::Mountain,
                shorelines: vec![Direction::West, Direction::North, Direction::East],
                connections: vec![Direction::South],
                signpost_hints: hints(&[(
                    Direction::South,
                    "The forest whispers of tools and crafts below.",
                )]),
                projects: vec![
                    project(
                        "compiler-project",
                        "The Compiler Forge",
                        "Ancient runes are carved into the walls. They speak of \
                         transformations... of text becoming power.",
                        StructureKind::Tower,
                        2,
                    ),
                    project(
                        "arithmetic-rdp",
                        "Parser's Cabin",
                        "A humble dwelling where symbols are weighed and balanced. \
                         The chimney smoke forms strange equations.",
                        StructureKind::Cabin,
                        1,
                    ),
                ],
            },
        },
        WorldEntry {
            name: "Whisperwood",
            config: ChunkConfig {
                chunk_x: -1,
                chunk_y: 0,
                seed: 58203,
                biome: BiomeKind::Forest,
                shorelines: vec![Direction::West],
                connections: vec![Direction::North, Direction::South, Direction::East],
                signpost_hints: hints(&[
                    (Direction::North, "The mountains hold secrets of transformation."),
                    (Direction::South, "Scholars gather where knowledge flows freely."),
                    (Direction::East, "The central isle lies just beyond."),
                ]),
                projects: vec![
                    project(
                        "pydis",
                        "The Disassembly Workshop",
                        "Gears and mechanisms lie exposed. Here, the inner workings \
                         of serpentine magic are revealed.",
                        StructureKind::Building,
                        2,
                    ),
                    project(
                        "presentation-choreographer",
                        "The Presentation Stage",
                        "Slides materialize from thin air, arranged by an unseen \
                         conductor. The show must go on!",
                        StructureKind::Building,
                        1,
                    ),
                ],
            },
        },
        WorldEntry {
            name: "Saltmere Coast",
            config: ChunkConfig {
                chunk_x: 1,
                chunk_y: 0,
                seed: 47119,
                biome: BiomeKind::Coastal,
                shorelines: vec![Direction::East],
                connections: vec![Direction::West, Direction::South],
                signpost_hints: hints(&[
                    (Direction::West, "Return to the peaceful starting meadows."),
                    (Direction::South, "Towers of healing rise to the south."),
                ]),
                projects: vec![project(
                    "countertrak",
                    "The Statistics Bureau",
                    "Numbers float through the air like fireflies. Every action \
                     counted, every moment measured.",
                    StructureKind::Building,
                    2,
                )],
            },
        },
        WorldEntry {
            name: "Scholar's Quarter",
            config: ChunkConfig {
                chunk_x: -1,
                chunk_y: 1,
                seed: 69532,
                biome: BiomeKind::Urban,
                shorelines: vec![Direction::West, Direction::South],
                connections: vec![Direction::North, Direction::East],
                signpost_hints: hints(&[
                    (Direction::North, "Deep woods hide workshops of craft."),
                    (Direction::East, "Games and glory await at the castle!"),
                ]),
                projects: vec![project(
                    "learn-dconn-dev",
                    "The Academy",
                    "Young minds gather here, eyes bright with curiosity. The \
                     chalkboard never stays clean for long.",
                    StructureKind::Courtyard,
                    3,
                )],
            },
        },
        WorldEntry {
            name: "Castle Greenfall",
            config: ChunkConfig {
                chunk_x: 0,
                chunk_y: 1,
                seed: 83914,
                biome: BiomeKind::Castle,
                shorelines: vec![Direction::South],
                connections: vec![Direction::North, Direction::West, Direction::East],
                signpost_hints: hints(&[
                    (Direction::North, "The peaceful starting isle awaits."),
                    (Direction::West, "Seekers of knowledge head this way."),
                    (Direction::East, "Healers tend to the tower beyond."),
                ]),
                projects: vec![
                    project(
                        "javarominoes",
                        "Block Tower",
                        "Colorful shapes fall from the heavens, demanding order. A \
                         tribute to grandfathers everywhere.",
                        StructureKind::Tower,
                        2,
                    ),
                    project(
                        "seas-of-yore",
                        "Naval Quarters",
                        "Model ships line the shelves. Somewhere, cannons thunder \
                         across imaginary waters.",
                        StructureKind::Building,
                        2,
                    ),
                    project(
                        "draw-shapes",
                        "The Art Studio",
                        "Brushes hover in mid-air, leaving trails of color. Creation \
                         needs no hands here.",
                        StructureKind::Cabin,
                        1,
                    ),
                    project(
                        "site-selector",
                        "Navigator's Hut",
                        "Maps upon maps, portals to distant realms. The world wide \
                         web of roads converges here.",
                        StructureKind::Cabin,
                        1,
                    ),
                ],
            },
        },
        WorldEntry {
            name: "Harborside",
            config: ChunkConfig {
                chunk_x: 1,
                chunk_y: 1,
                seed: 90276,
                biome: BiomeKind::Urban,
                shorelines: vec![Direction::East, Direction::South],
                connections: vec![Direction::North, Direction::West],
                signpost_hints: hints(&[
                    (Direction::North, "Salty breezes drift from the harbor."),
                    (Direction::West, "The castle's games echo across the land."),
                ]),
                projects: vec![project(
                    "clinicore",
                    "The Medical Tower",
                    "White walls gleam with purpose. Within, the chronicles of \
                     health are written in meticulous detail.",
                    StructureKind::Tower,
                    3,
                )],
            },
        },
    ]
}
