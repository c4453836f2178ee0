//! The deterministic chunk generation pipeline.
//!
//! One `ChunkConfig` in, one `ChunkDefinition` out, via a fixed stage
//! order: grid init, graph init, edge terrain, projects, hub, signposts,
//! structural render, path routing, terrain features, decoration,
//! validation, emit. Everything is single-threaded and a pure function
//! of the configured seed.

pub mod biome;
pub mod components;
pub mod config;
pub mod graph;
pub mod pathfind;
pub mod pipeline;

pub use biome::{Biome, BiomeKind};
pub use config::{ChunkConfig, ProjectPlacement, StructureKind};
pub use graph::{Graph, GraphError, Node, NodeKind};
pub use pipeline::ChunkGenerator;
