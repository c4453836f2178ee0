//! Enclosed structures: buildings, cabins, towers, courtyards, shrines.
//! Each exposes a door (or gate) anchor one tile outside its entrance.

use waystone_core::bounds::Bounds;
use waystone_core::grid::Grid;
use waystone_core::palette::Palette;
use waystone_core::point::{Direction, Point};
use waystone_core::zone::{Anchor, Zone};

/// Wall finish for buildings and courtyards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallStyle {
    Stone,
    White,
    Wood,
}

impl WallStyle {
    fn glyph(self, palette: &Palette) -> char {
        match self {
            WallStyle::Stone => palette.building,
            WallStyle::White => palette.white_building,
            WallStyle::Wood => palette.wood_wall,
        }
    }
}

/// Door tile on the midpoint of a rectangle's entrance side.
fn door_position(bounds: Bounds, entrance: Direction) -> Point {
    let center = bounds.center();
    match entrance {
        Direction::North => Point::new(center.x, bounds.min_y),
        Direction::South => Point::new(center.x, bounds.max_y),
        Direction::East => Point::new(bounds.max_x, center.y),
        Direction::West => Point::new(bounds.min_x, center.y),
    }
}

/// The routing anchor for a door: one tile outside it, facing back in.
fn door_anchor(bounds: Bounds, entrance: Direction) -> Anchor {
    Anchor {
        position: door_position(bounds, entrance) + entrance.delta(),
        facing: entrance.opposite(),
    }
}

/// Rectangular structure with walls, windows, and a door.
#[derive(Debug, Clone)]
pub struct Building {
    bounds: Bounds,
    style: WallStyle,
    entrance: Direction,
    zone: Zone,
}

impl Building {
    pub fn new(bounds: Bounds, style: WallStyle, entrance: Direction, zone: Zone) -> Self {
        Self {
            bounds,
            style,
            entrance,
            zone,
        }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette) {
        let wall = self.style.glyph(palette);
        grid.rect(self.bounds.expand(-1), palette.cobblestone, true);
        grid.rect_outline(self.bounds, wall, false);

        // Windows at stride 2, skipping corners and the entrance side.
        // Narrow spans get none.
        let width = self.bounds.max_x - self.bounds.min_x;
        let height = self.bounds.max_y - self.bounds.min_y;

        if height >= 4 {
            let mut x = self.bounds.min_x + 2;
            while x <= self.bounds.max_x - 2 {
                if self.entrance != Direction::North {
                    grid.set(Point::new(x, self.bounds.min_y), palette.window, false);
                }
                if self.entrance != Direction::South {
                    grid.set(Point::new(x, self.bounds.max_y), palette.window, false);
                }
                x += 2;
            }
        }
        if width >= 4 {
            let mut y = self.bounds.min_y + 2;
            while y <= self.bounds.max_y - 2 {
                if self.entrance != Direction::West {
                    grid.set(Point::new(self.bounds.min_x, y), palette.window, false);
                }
                if self.entrance != Direction::East {
                    grid.set(Point::new(self.bounds.max_x, y), palette.window, false);
                }
                y += 2;
            }
        }

        grid.set(door_position(self.bounds, self.entrance), palette.door, true);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        vec![door_anchor(self.bounds, self.entrance)]
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }
}

/// Small wood-floored dwelling with a chimney off the top-right corner.
#[derive(Debug, Clone)]
pub struct Cabin {
    bounds: Bounds,
    entrance: Direction,
    zone: Zone,
}

impl Cabin {
    pub fn new(bounds: Bounds, entrance: Direction, zone: Zone) -> Self {
        Self {
            bounds,
            entrance,
            zone,
        }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette) {
        grid.rect(self.bounds.expand(-1), palette.wood_floor, true);
        grid.rect_outline(self.bounds, palette.wood_wall, false);
        grid.set(
            Point::new(self.bounds.max_x, self.bounds.min_y - 1),
            palette.chimney,
            false,
        );
        grid.set(door_position(self.bounds, self.entrance), palette.door, true);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        vec![door_anchor(self.bounds, self.entrance)]
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }
}

/// Square keep with corner pillars and, at radius 3 and up, an inner
/// chamber holding a star.
#[derive(Debug, Clone)]
pub struct Tower {
    center: Point,
    radius: i32,
    entrance: Direction,
    zone: Zone,
}

impl Tower {
    pub fn new(center: Point, radius: i32, entrance: Direction, zone: Zone) -> Self {
        Self {
            center,
            radius,
            entrance,
            zone,
        }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette) {
        let bounds = self.bounds();
        grid.rect(bounds, palette.cobblestone, true);
        grid.rect_outline(bounds, palette.building, false);

        grid.set(Point::new(bounds.min_x, bounds.min_y), palette.pillar, false);
        grid.set(Point::new(bounds.max_x, bounds.min_y), palette.pillar, false);
        grid.set(Point::new(bounds.min_x, bounds.max_y), palette.pillar, false);
        grid.set(Point::new(bounds.max_x, bounds.max_y), palette.pillar, false);

        if self.radius >= 3 {
            grid.rect_outline(Bounds::around(self.center, 1), palette.white_building, false);
            grid.set(self.center, palette.star, true);
        }

        grid.set(door_position(bounds, self.entrance), palette.door, true);
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.center, self.radius)
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        vec![door_anchor(self.bounds(), self.entrance)]
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }
}

/// Walled open space with a central fountain and a gate per entrance.
#[derive(Debug, Clone)]
pub struct Courtyard {
    bounds: Bounds,
    style: WallStyle,
    entrances: Vec<Direction>,
    zone: Zone,
}

impl Courtyard {
    pub fn new(bounds: Bounds, style: WallStyle, entrances: Vec<Direction>, zone: Zone) -> Self {
        Self {
            bounds,
            style,
            entrances,
            zone,
        }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette) {
        let wall = self.style.glyph(palette);
        grid.rect(self.bounds.expand(-1), palette.cobblestone, true);
        grid.rect_outline(self.bounds, wall, false);

        grid.set(Point::new(self.bounds.min_x, self.bounds.min_y), palette.pillar, false);
        grid.set(Point::new(self.bounds.max_x, self.bounds.min_y), palette.pillar, false);
        grid.set(Point::new(self.bounds.min_x, self.bounds.max_y), palette.pillar, false);
        grid.set(Point::new(self.bounds.max_x, self.bounds.max_y), palette.pillar, false);

        // Fountain: water center with a sand cross around it
        let center = self.bounds.center();
        grid.set(center, palette.water, false);
        grid.set(Point::new(center.x - 1, center.y), palette.sand, true);
        grid.set(Point::new(center.x + 1, center.y), palette.sand, true);
        grid.set(Point::new(center.x, center.y - 1), palette.sand, true);
        grid.set(Point::new(center.x, center.y + 1), palette.sand, true);

        for &dir in &self.entrances {
            grid.set(door_position(self.bounds, dir), palette.door, true);
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        self.entrances
            .iter()
            .map(|&dir| door_anchor(self.bounds, dir))
            .collect()
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }
}

/// Open cobblestone platform with a marker ring and a central star.
#[derive(Debug, Clone)]
pub struct Shrine {
    center: Point,
    size: i32,
    zone: Zone,
}

impl Shrine {
    pub fn new(center: Point, size: i32, zone: Zone) -> Self {
        Self { center, size, zone }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette) {
        let bounds = self.bounds();
        grid.rect(bounds, palette.cobblestone, true);
        grid.rect_outline(bounds, palette.marker, true);
        grid.set(self.center, palette.star, true);
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.center, self.size)
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        vec![Anchor {
            position: Point::new(self.center.x, self.center.y + self.size + 1),
            facing: Direction::North,
        }]
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(name: &str) -> Zone {
        Zone {
            name: name.to_string(),
            description: String::new(),
            bounds: Bounds::new(0, 0, 0, 0),
            project_id: Some(name.to_string()),
        }
    }

    fn grid() -> Grid {
        Grid::new(50, 50, '^', true)
    }

    #[test]
    fn test_building_walls_floor_door() {
        let bounds = Bounds::new(10, 10, 20, 16);
        let b = Building::new(bounds, WallStyle::Stone, Direction::South, zone("b"));
        let mut g = grid();
        b.render(&mut g, &Palette::default());

        assert_eq!(g.get(Point::new(10, 10)), '#');
        assert!(!g.is_walkable(Point::new(10, 13)));
        assert_eq!(g.get(Point::new(15, 13)), 'o', "interior is cobblestone");
        assert!(g.is_walkable(Point::new(15, 13)));

        // Door at the south midpoint, walkable
        assert_eq!(g.get(Point::new(15, 16)), 'D');
        assert!(g.is_walkable(Point::new(15, 16)));

        // No windows on the door side, windows on the north wall
        assert_eq!(g.get(Point::new(12, 10)), '%');
        assert_eq!(g.get(Point::new(12, 16)), '#');
    }

    #[test]
    fn test_building_anchor_outside_door_facing_in() {
        let bounds = Bounds::new(10, 10, 20, 16);
        let b = Building::new(bounds, WallStyle::Stone, Direction::South, zone("b"));
        let anchors = b.anchors();
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].position, Point::new(15, 17));
        assert_eq!(anchors[0].facing, Direction::North);
    }

    #[test]
    fn test_small_building_has_no_windows() {
        let b = Building::new(
            Bounds::new(10, 10, 13, 13),
            WallStyle::White,
            Direction::South,
            zone("b"),
        );
        let mut g = grid();
        b.render(&mut g, &Palette::default());
        let windows: usize = g
            .tiles()
            .iter()
            .map(|row| row.iter().filter(|&&t| t == '%').count())
            .sum();
        assert_eq!(windows, 0, "span below 4 leaves no room for windows");
        assert_eq!(g.get(Point::new(10, 10)), 'B', "white wall style");
    }

    #[test]
    fn test_cabin_floor_and_chimney() {
        let bounds = Bounds::new(10, 10, 18, 14);
        let c = Cabin::new(bounds, Direction::East, zone("c"));
        let mut g = grid();
        c.render(&mut g, &Palette::default());

        assert_eq!(g.get(Point::new(14, 12)), '░', "wood floor inside");
        assert_eq!(g.get(Point::new(10, 10)), 'W');
        assert_eq!(g.get(Point::new(18, 9)), 'H', "chimney above the corner");
        assert!(!g.is_walkable(Point::new(18, 9)));
        assert_eq!(g.get(Point::new(18, 12)), 'D');

        let anchors = c.anchors();
        assert_eq!(anchors[0].position, Point::new(19, 12));
        assert_eq!(anchors[0].facing, Direction::West);
    }

    #[test]
    fn test_cabin_chimney_at_top_edge_is_dropped() {
        let c = Cabin::new(Bounds::new(10, 0, 18, 4), Direction::South, zone("c"));
        let mut g = grid();
        c.render(&mut g, &Palette::default());
        // Chimney would sit at y = -1; the write is silently dropped.
        assert_eq!(g.get(Point::new(18, 0)), 'W');
    }

    #[test]
    fn test_tower_pillars_star_door() {
        let t = Tower::new(Point::new(25, 25), 5, Direction::East, zone("t"));
        let mut g = grid();
        t.render(&mut g, &Palette::default());

        assert_eq!(t.bounds(), Bounds::new(20, 20, 30, 30));
        assert_eq!(g.get(Point::new(20, 20)), '|');
        assert_eq!(g.get(Point::new(30, 30)), '|');
        assert_eq!(g.get(Point::new(25, 25)), '*', "inner chamber star");
        assert!(g.is_walkable(Point::new(25, 25)));
        assert_eq!(g.get(Point::new(24, 24)), 'B', "inner chamber outline");
        assert_eq!(g.get(Point::new(30, 25)), 'D');

        let anchors = t.anchors();
        assert_eq!(anchors[0].position, Point::new(31, 25));
        assert_eq!(anchors[0].facing, Direction::West);
    }

    #[test]
    fn test_small_tower_has_no_chamber() {
        let t = Tower::new(Point::new(25, 25), 2, Direction::South, zone("t"));
        let mut g = grid();
        t.render(&mut g, &Palette::default());
        assert_eq!(g.get(Point::new(25, 25)), 'o', "radius below 3: plain floor");
    }

    #[test]
    fn test_courtyard_fountain_and_gates() {
        let bounds = Bounds::new(15, 15, 35, 35);
        let c = Courtyard::new(
            bounds,
            WallStyle::Stone,
            vec![Direction::South, Direction::East],
            zone("c"),
        );
        let mut g = grid();
        c.render(&mut g, &Palette::default());

        assert_eq!(g.get(Point::new(25, 25)), '~', "fountain water");
        assert_eq!(g.get(Point::new(24, 25)), '.');
        assert_eq!(g.get(Point::new(25, 24)), '.');
        assert_eq!(g.get(Point::new(25, 35)), 'D', "south gate");
        assert_eq!(g.get(Point::new(35, 25)), 'D', "east gate");
        assert_eq!(g.get(Point::new(25, 15)), '#', "no north gate");

        let anchors = c.anchors();
        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors[0].position, Point::new(25, 36));
        assert_eq!(anchors[0].facing, Direction::North);
        assert_eq!(anchors[1].position, Point::new(36, 25));
        assert_eq!(anchors[1].facing, Direction::West);
    }

    #[test]
    fn test_shrine_ring_and_anchor() {
        let s = Shrine::new(Point::new(25, 25), 2, zone("s"));
        let mut g = grid();
        s.render(&mut g, &Palette::default());

        assert_eq!(s.bounds(), Bounds::new(23, 23, 27, 27));
        assert_eq!(g.get(Point::new(25, 25)), '*');
        assert_eq!(g.get(Point::new(23, 23)), '@', "marker border");
        assert!(g.is_walkable(Point::new(23, 23)), "shrine is fully walkable");
        assert_eq!(g.get(Point::new(24, 24)), 'o');

        let anchors = s.anchors();
        assert_eq!(anchors[0].position, Point::new(25, 28));
        assert_eq!(anchors[0].facing, Direction::North);
    }
}
