//! Shared primitives for the waystone chunk generator: 2D geometry, the
//! tile grid with its drawing operations, the seeded RNG, the glyph
//! palette, and the domain error type.

pub mod bounds;
pub mod constants;
pub mod error;
pub mod grid;
pub mod palette;
pub mod point;
pub mod rng;
pub mod zone;

pub use bounds::Bounds;
pub use error::GenError;
pub use grid::Grid;
pub use palette::Palette;
pub use point::{Direction, Point};
pub use rng::ChunkRng;
pub use zone::{Anchor, Zone};
