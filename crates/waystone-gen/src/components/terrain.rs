//! Terrain-shaping components: shorelines, mountain ranges, groves,
//! clearings, ponds.

use std::collections::HashSet;

use waystone_core::bounds::Bounds;
use waystone_core::grid::Grid;
use waystone_core::palette::Palette;
use waystone_core::point::{neighbours, Direction, Point};
use waystone_core::rng::ChunkRng;
use waystone_core::zone::Anchor;

/// Water-to-sand gradient along one chunk edge. The outermost
/// `water_depth / 2` tiles are deep water, the rest of the water band is
/// shallow, and the band finishes in walkable sand.
#[derive(Debug, Clone)]
pub struct Shoreline {
    pub side: Direction,
    pub water_depth: i32,
    pub sand_depth: i32,
    bounds: Bounds,
}

impl Shoreline {
    pub fn new(side: Direction, water_depth: i32, sand_depth: i32, chunk_size: i32) -> Self {
        let band = water_depth + sand_depth;
        let bounds = match side {
            Direction::North => Bounds::new(0, 0, chunk_size - 1, band - 1),
            Direction::South => Bounds::new(0, chunk_size - band, chunk_size - 1, chunk_size - 1),
            Direction::East => Bounds::new(chunk_size - band, 0, chunk_size - 1, chunk_size - 1),
            Direction::West => Bounds::new(0, 0, band - 1, chunk_size - 1),
        };
        Self {
            side,
            water_depth,
            sand_depth,
            bounds,
        }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette) {
        for p in self.bounds.cells() {
            let depth = match self.side {
                Direction::North => p.y - self.bounds.min_y,
                Direction::South => self.bounds.max_y - p.y,
                Direction::East => self.bounds.max_x - p.x,
                Direction::West => p.x - self.bounds.min_x,
            };

            if depth < self.water_depth {
                if depth < self.water_depth / 2 {
                    grid.set(p, palette.deep_water, false);
                } else {
                    grid.set(p, palette.water, false);
                }
            } else {
                grid.set(p, palette.sand, true);
            }
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Impassable mountains with walkable passes. Rows near the top are snow,
/// the next two are peaks, the rest plain mountain. Each pass and its
/// 4-neighbours become walkable path tiles.
#[derive(Debug, Clone)]
pub struct MountainRange {
    bounds: Bounds,
    passes: Vec<Point>,
    snow_line: i32,
}

impl MountainRange {
    pub fn new(bounds: Bounds, passes: Vec<Point>, snow_line: i32) -> Self {
        Self {
            bounds,
            passes,
            snow_line,
        }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette) {
        let mut pass_set: HashSet<Point> = HashSet::new();
        for &pass in &self.passes {
            pass_set.insert(pass);
            for adj in neighbours(pass) {
                pass_set.insert(adj);
            }
        }

        for p in self.bounds.cells() {
            if pass_set.contains(&p) {
                grid.set(p, palette.path, true);
                continue;
            }
            let dist_from_top = p.y - self.bounds.min_y;
            if dist_from_top < self.snow_line {
                grid.set(p, palette.snow, false);
            } else if dist_from_top < self.snow_line + 2 {
                grid.set(p, palette.peak, false);
            } else {
                grid.set(p, palette.mountain, false);
            }
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        self.passes
            .iter()
            .map(|&pass| Anchor {
                position: pass,
                facing: Direction::South,
            })
            .collect()
    }
}

/// A cluster of trees scattered over grass.
#[derive(Debug, Clone)]
pub struct Grove {
    bounds: Bounds,
    density: f64,
    tree: char,
}

impl Grove {
    pub fn new(bounds: Bounds, density: f64, tree: char) -> Self {
        Self {
            bounds,
            density,
            tree,
        }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette, rng: &mut ChunkRng) {
        grid.scatter_on_tile(self.bounds, palette.grass, self.tree, false, self.density, rng);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// An open circular patch of walkable grass.
#[derive(Debug, Clone)]
pub struct Clearing {
    pub center: Point,
    pub radius: i32,
}

impl Clearing {
    pub fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette) {
        for dy in -self.radius..=self.radius {
            for dx in -self.radius..=self.radius {
                if dx * dx + dy * dy <= self.radius * self.radius {
                    grid.set(
                        Point::new(self.center.x + dx, self.center.y + dy),
                        palette.grass,
                        true,
                    );
                }
            }
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.center, self.radius)
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        vec![Anchor {
            position: self.center,
            facing: Direction::South,
        }]
    }
}

/// A small round water feature ringed by sand. Painted after path routing,
/// so existing water keeps precedence over the sand ring.
#[derive(Debug, Clone)]
pub struct Pond {
    pub center: Point,
    pub radius: i32,
}

impl Pond {
    pub fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette) {
        let inner = self.radius - 1;
        for dy in -inner..self.radius {
            for dx in -inner..self.radius {
                if dx * dx + dy * dy < inner * inner {
                    grid.set(
                        Point::new(self.center.x + dx, self.center.y + dy),
                        palette.water,
                        false,
                    );
                }
            }
        }
        for dy in -self.radius..=self.radius {
            for dx in -self.radius..=self.radius {
                let dist = dx * dx + dy * dy;
                if dist >= inner * inner && dist <= self.radius * self.radius {
                    let p = Point::new(self.center.x + dx, self.center.y + dy);
                    if grid.get(p) != palette.water {
                        grid.set(p, palette.sand, true);
                    }
                }
            }
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.center, self.radius)
    }
}
