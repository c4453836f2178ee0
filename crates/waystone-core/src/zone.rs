use crate::bounds::Bounds;
use crate::point::{Direction, Point};

/// A connection point a component exposes for path routing.
/// Sits one tile outside the entry tile and faces inward, toward it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub position: Point,
    pub facing: Direction,
}

/// A named interactive region. Zones with a `project_id` open a project
/// panel in the client; the rest are flavor (signposts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub name: String,
    pub description: String,
    pub bounds: Bounds,
    pub project_id: Option<String>,
}
