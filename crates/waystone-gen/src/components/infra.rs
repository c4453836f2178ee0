//! Infrastructure components: plazas, docks, bridges, signposts.

use waystone_core::bounds::Bounds;
use waystone_core::grid::Grid;
use waystone_core::palette::Palette;
use waystone_core::point::{Direction, Point};
use waystone_core::zone::{Anchor, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlazaShape {
    Square,
    Circle,
}

/// Cobblestone gathering area with one anchor per cardinal direction.
#[derive(Debug, Clone)]
pub struct Plaza {
    center: Point,
    radius: i32,
    shape: PlazaShape,
}

impl Plaza {
    pub fn new(center: Point, radius: i32, shape: PlazaShape) -> Self {
        Self {
            center,
            radius,
            shape,
        }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette) {
        match self.shape {
            PlazaShape::Circle => {
                for dy in -self.radius..=self.radius {
                    for dx in -self.radius..=self.radius {
                        if dx * dx + dy * dy <= self.radius * self.radius {
                            grid.set(
                                Point::new(self.center.x + dx, self.center.y + dy),
                                palette.cobblestone,
                                true,
                            );
                        }
                    }
                }
            }
            PlazaShape::Square => {
                grid.rect(self.bounds(), palette.cobblestone, true);
            }
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.center, self.radius)
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        vec![
            Anchor {
                position: Point::new(self.center.x, self.center.y - self.radius),
                facing: Direction::South,
            },
            Anchor {
                position: Point::new(self.center.x, self.center.y + self.radius),
                facing: Direction::North,
            },
            Anchor {
                position: Point::new(self.center.x - self.radius, self.center.y),
                facing: Direction::East,
            },
            Anchor {
                position: Point::new(self.center.x + self.radius, self.center.y),
                facing: Direction::West,
            },
        ]
    }
}

/// Walkable planking extending from the shore into water.
#[derive(Debug, Clone)]
pub struct Dock {
    origin: Point,
    direction: Direction,
    length: i32,
    width: i32,
    zone: Option<Zone>,
}

impl Dock {
    pub fn new(
        origin: Point,
        direction: Direction,
        length: i32,
        width: i32,
        zone: Option<Zone>,
    ) -> Self {
        Self {
            origin,
            direction,
            length,
            width,
            zone,
        }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette) {
        let delta = self.direction.delta();
        let half_width = self.width / 2;

        for i in 0..self.length {
            let base = self.origin + delta * i;
            for w in -half_width..=half_width {
                // Width runs perpendicular to the walking direction
                let p = if delta.x != 0 {
                    Point::new(base.x, base.y + w)
                } else {
                    Point::new(base.x + w, base.y)
                };
                grid.set(p, palette.dock, true);
            }
        }
    }

    pub fn bounds(&self) -> Bounds {
        let delta = self.direction.delta();
        let end = self.origin + delta * (self.length - 1);
        let half_width = self.width / 2;

        let mut min_x = self.origin.x.min(end.x);
        let mut max_x = self.origin.x.max(end.x);
        let mut min_y = self.origin.y.min(end.y);
        let mut max_y = self.origin.y.max(end.y);

        if delta.x != 0 {
            min_y -= half_width;
            max_y += half_width;
        } else {
            min_x -= half_width;
            max_x += half_width;
        }
        Bounds::new(min_x, min_y, max_x, max_y)
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        vec![Anchor {
            position: self.origin,
            facing: self.direction.opposite(),
        }]
    }

    pub fn zone(&self) -> Option<&Zone> {
        self.zone.as_ref()
    }
}

/// Walkable span over non-walkable terrain, drawn as a Bresenham line.
#[derive(Debug, Clone)]
pub struct Bridge {
    start: Point,
    end: Point,
}

impl Bridge {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette) {
        grid.line(self.start, self.end, palette.bridge, true);
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        vec![
            Anchor {
                position: self.start,
                facing: Direction::South,
            },
            Anchor {
                position: self.end,
                facing: Direction::North,
            },
        ]
    }
}

/// Marker tile near an outbound side, with a 3x3 interaction zone whose
/// description hints at the destination.
#[derive(Debug, Clone)]
pub struct Signpost {
    position: Point,
    pub direction: Direction,
    zone: Zone,
}

impl Signpost {
    pub fn new(position: Point, direction: Direction, hint: String) -> Self {
        Self {
            position,
            direction,
            zone: Zone {
                name: "Signpost".to_string(),
                description: hint,
                bounds: Bounds::around(position, 1),
                project_id: None,
            },
        }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette) {
        grid.set(self.position, palette.marker, true);
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::at(self.position)
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(50, 50, '^', true)
    }

    #[test]
    fn test_square_plaza() {
        let p = Plaza::new(Point::new(25, 25), 3, PlazaShape::Square);
        let mut g = grid();
        p.render(&mut g, &Palette::default());
        assert_eq!(g.get(Point::new(22, 22)), 'o', "square fills its corners");
        assert_eq!(g.get(Point::new(28, 28)), 'o');
        assert_eq!(g.get(Point::new(29, 25)), '^');
    }

    #[test]
    fn test_circle_plaza_drops_corners() {
        let p = Plaza::new(Point::new(25, 25), 3, PlazaShape::Circle);
        let mut g = grid();
        p.render(&mut g, &Palette::default());
        assert_eq!(g.get(Point::new(25, 22)), 'o', "cardinal extent included");
        assert_eq!(g.get(Point::new(22, 22)), '^', "corners outside the disk");
    }

    #[test]
    fn test_plaza_anchors_at_cardinal_rim() {
        let p = Plaza::new(Point::new(25, 25), 3, PlazaShape::Square);
        let anchors = p.anchors();
        assert_eq!(anchors.len(), 4);
        assert_eq!(anchors[0].position, Point::new(25, 22));
        assert_eq!(anchors[0].facing, Direction::South);
        assert_eq!(anchors[3].position, Point::new(28, 25));
        assert_eq!(anchors[3].facing, Direction::West);
    }

    #[test]
    fn test_dock_strip_east() {
        let d = Dock::new(Point::new(42, 25), Direction::East, 5, 3, None);
        let mut g = grid();
        d.render(&mut g, &Palette::default());
        assert_eq!(g.get(Point::new(42, 25)), '=');
        assert_eq!(g.get(Point::new(46, 25)), '=', "runs length tiles east");
        assert_eq!(g.get(Point::new(44, 24)), '=', "width is perpendicular");
        assert_eq!(g.get(Point::new(44, 26)), '=');
        assert_eq!(g.get(Point::new(47, 25)), '^');
        assert_eq!(d.bounds(), Bounds::new(42, 24, 46, 26));

        let anchors = d.anchors();
        assert_eq!(anchors[0].position, Point::new(42, 25));
        assert_eq!(anchors[0].facing, Direction::West, "anchor faces the shore");
    }

    #[test]
    fn test_bridge_spans_line() {
        let b = Bridge::new(Point::new(10, 10), Point::new(10, 20));
        let mut g = Grid::new(50, 50, '~', false);
        b.render(&mut g, &Palette::default());
        for y in 10..=20 {
            assert_eq!(g.get(Point::new(10, y)), 'n');
            assert!(g.is_walkable(Point::new(10, y)));
        }
        assert_eq!(b.bounds(), Bounds::new(10, 10, 10, 20));
    }

    #[test]
    fn test_signpost_marker_and_zone() {
        let s = Signpost::new(
            Point::new(25, 45),
            Direction::South,
            "Castle spires glimmer in the distance.".to_string(),
        );
        let mut g = grid();
        s.render(&mut g, &Palette::default());
        assert_eq!(g.get(Point::new(25, 45)), '@');
        assert!(g.is_walkable(Point::new(25, 45)));

        let zone = s.zone();
        assert_eq!(zone.name, "Signpost");
        assert_eq!(zone.bounds, Bounds::new(24, 44, 26, 46));
        assert!(zone.project_id.is_none());
    }
}
