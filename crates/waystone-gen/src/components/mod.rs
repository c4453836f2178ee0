//! The closed catalog of placeable components.
//!
//! Every variant is known at compile time and dispatch is exhaustive; a
//! new component means a new variant here and nowhere else. Components
//! that draw randomly receive the generator's single RNG stream through
//! `render`, so render order fully determines their output.

mod decor;
mod infra;
mod structures;
mod terrain;

pub use decor::{Border, Garden, Ruins, ScatterDecor};
pub use infra::{Bridge, Dock, Plaza, PlazaShape, Signpost};
pub use structures::{Building, Cabin, Courtyard, Shrine, Tower, WallStyle};
pub use terrain::{Clearing, Grove, MountainRange, Pond, Shoreline};

use waystone_core::bounds::Bounds;
use waystone_core::grid::Grid;
use waystone_core::palette::Palette;
use waystone_core::rng::ChunkRng;
use waystone_core::zone::{Anchor, Zone};

#[derive(Debug, Clone)]
pub enum Component {
    Shoreline(Shoreline),
    MountainRange(MountainRange),
    Grove(Grove),
    Clearing(Clearing),
    Building(Building),
    Cabin(Cabin),
    Tower(Tower),
    Courtyard(Courtyard),
    Shrine(Shrine),
    Plaza(Plaza),
    Dock(Dock),
    Bridge(Bridge),
    ScatterDecor(ScatterDecor),
    Border(Border),
    Signpost(Signpost),
    Pond(Pond),
    Garden(Garden),
    Ruins(Ruins),
}

impl Component {
    /// Paint this component onto the grid.
    pub fn render(&self, grid: &mut Grid, palette: &Palette, rng: &mut ChunkRng) {
        match self {
            Component::Shoreline(c) => c.render(grid, palette),
            Component::MountainRange(c) => c.render(grid, palette),
            Component::Grove(c) => c.render(grid, palette, rng),
            Component::Clearing(c) => c.render(grid, palette),
            Component::Building(c) => c.render(grid, palette),
            Component::Cabin(c) => c.render(grid, palette),
            Component::Tower(c) => c.render(grid, palette),
            Component::Courtyard(c) => c.render(grid, palette),
            Component::Shrine(c) => c.render(grid, palette),
            Component::Plaza(c) => c.render(grid, palette),
            Component::Dock(c) => c.render(grid, palette),
            Component::Bridge(c) => c.render(grid, palette),
            Component::ScatterDecor(c) => c.render(grid, rng),
            Component::Border(c) => c.render(grid),
            Component::Signpost(c) => c.render(grid, palette),
            Component::Pond(c) => c.render(grid, palette),
            Component::Garden(c) => c.render(grid, palette, rng),
            Component::Ruins(c) => c.render(grid, palette, rng),
        }
    }

    /// Bounding box of the painted area.
    pub fn bounds(&self) -> Bounds {
        match self {
            Component::Shoreline(c) => c.bounds(),
            Component::MountainRange(c) => c.bounds(),
            Component::Grove(c) => c.bounds(),
            Component::Clearing(c) => c.bounds(),
            Component::Building(c) => c.bounds(),
            Component::Cabin(c) => c.bounds(),
            Component::Tower(c) => c.bounds(),
            Component::Courtyard(c) => c.bounds(),
            Component::Shrine(c) => c.bounds(),
            Component::Plaza(c) => c.bounds(),
            Component::Dock(c) => c.bounds(),
            Component::Bridge(c) => c.bounds(),
            Component::ScatterDecor(c) => c.bounds(),
            Component::Border(c) => c.bounds(),
            Component::Signpost(c) => c.bounds(),
            Component::Pond(c) => c.bounds(),
            Component::Garden(c) => c.bounds(),
            Component::Ruins(c) => c.bounds(),
        }
    }

    /// Connection points for path routing. Components without a natural
    /// entry expose none.
    pub fn anchors(&self) -> Vec<Anchor> {
        match self {
            Component::MountainRange(c) => c.anchors(),
            Component::Clearing(c) => c.anchors(),
            Component::Building(c) => c.anchors(),
            Component::Cabin(c) => c.anchors(),
            Component::Tower(c) => c.anchors(),
            Component::Courtyard(c) => c.anchors(),
            Component::Shrine(c) => c.anchors(),
            Component::Plaza(c) => c.anchors(),
            Component::Dock(c) => c.anchors(),
            Component::Bridge(c) => c.anchors(),
            Component::Shoreline(_)
            | Component::Grove(_)
            | Component::ScatterDecor(_)
            | Component::Border(_)
            | Component::Signpost(_)
            | Component::Pond(_)
            | Component::Garden(_)
            | Component::Ruins(_) => Vec::new(),
        }
    }

    /// The interactive zone this component carries, if any.
    pub fn zone(&self) -> Option<&Zone> {
        match self {
            Component::Building(c) => Some(c.zone()),
            Component::Cabin(c) => Some(c.zone()),
            Component::Tower(c) => Some(c.zone()),
            Component::Courtyard(c) => Some(c.zone()),
            Component::Shrine(c) => Some(c.zone()),
            Component::Signpost(c) => Some(c.zone()),
            Component::Dock(c) => c.zone(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waystone_core::point::{Direction, Point};

    #[test]
    fn test_anchor_positions_are_walkable_entry_points() {
        // For each anchored structure: render it on an open grid and check
        // the anchor sits on a walkable tile adjacent to its door.
        let palette = Palette::default();
        let zone = Zone {
            name: "z".into(),
            description: String::new(),
            bounds: Bounds::new(0, 0, 0, 0),
            project_id: Some("z".into()),
        };
        let components = [
            Component::Building(Building::new(
                Bounds::new(10, 10, 20, 16),
                WallStyle::Stone,
                Direction::South,
                zone.clone(),
            )),
            Component::Cabin(Cabin::new(
                Bounds::new(10, 10, 18, 14),
                Direction::East,
                zone.clone(),
            )),
            Component::Tower(Tower::new(Point::new(25, 25), 5, Direction::North, zone.clone())),
            Component::Courtyard(Courtyard::new(
                Bounds::new(15, 15, 35, 35),
                WallStyle::Stone,
                vec![Direction::South],
                zone.clone(),
            )),
        ];

        for comp in &components {
            let mut grid = Grid::new(50, 50, '^', true);
            let mut rng = ChunkRng::new(1);
            comp.render(&mut grid, &palette, &mut rng);
            for anchor in comp.anchors() {
                assert!(
                    grid.is_walkable(anchor.position),
                    "anchor at {:?} must be walkable",
                    anchor.position
                );
                let door = anchor.position + anchor.facing.delta();
                assert_eq!(grid.get(door), palette.door, "anchor faces its door");
            }
        }
    }

    #[test]
    fn test_zone_carriers() {
        let sign = Component::Signpost(Signpost::new(
            Point::new(25, 45),
            Direction::South,
            "hint".into(),
        ));
        assert!(sign.zone().is_some());
        assert!(sign.anchors().is_empty());

        let plaza = Component::Plaza(Plaza::new(Point::new(25, 25), 3, PlazaShape::Square));
        assert!(plaza.zone().is_none());
        assert_eq!(plaza.anchors().len(), 4);

        let pond = Component::Pond(Pond::new(Point::new(10, 10), 3));
        assert!(pond.zone().is_none());
        assert!(pond.anchors().is_empty());
    }
}
