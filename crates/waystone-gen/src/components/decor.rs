//! Decorative components: loose scatter, rings, gardens, ruins.

use waystone_core::bounds::Bounds;
use waystone_core::grid::Grid;
use waystone_core::palette::Palette;
use waystone_core::point::Point;
use waystone_core::rng::ChunkRng;

/// Loose non-walkable decoration over an area.
#[derive(Debug, Clone)]
pub struct ScatterDecor {
    bounds: Bounds,
    tile: char,
    density: f64,
}

impl ScatterDecor {
    pub fn new(bounds: Bounds, tile: char, density: f64) -> Self {
        Self {
            bounds,
            tile,
            density,
        }
    }

    pub fn render(&self, grid: &mut Grid, rng: &mut ChunkRng) {
        grid.scatter(self.bounds, self.tile, false, self.density, rng, None);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Decorative ring one tile outside an inner bounds.
#[derive(Debug, Clone)]
pub struct Border {
    inner: Bounds,
    tile: char,
    walkable: bool,
}

impl Border {
    pub fn new(inner: Bounds, tile: char, walkable: bool) -> Self {
        Self {
            inner,
            tile,
            walkable,
        }
    }

    pub fn render(&self, grid: &mut Grid) {
        grid.rect_outline(self.inner.expand(1), self.tile, self.walkable);
    }

    pub fn bounds(&self) -> Bounds {
        self.inner.expand(1)
    }
}

/// Cobble-edged grass plot with bushes planted on a diagonal lattice.
#[derive(Debug, Clone)]
pub struct Garden {
    bounds: Bounds,
}

impl Garden {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette, rng: &mut ChunkRng) {
        grid.rect_outline(self.bounds, palette.cobblestone, true);
        let interior = self.bounds.expand(-1);
        grid.rect(interior, palette.grass, true);
        for p in interior.cells() {
            if (p.x + p.y) % 3 == 0 && rng.next_f64() < 0.5 {
                grid.set(p, palette.bush, false);
            }
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// A crumbled structure: wall cells survive with probability `1 - decay`,
/// the rest collapse into walkable cobble.
#[derive(Debug, Clone)]
pub struct Ruins {
    bounds: Bounds,
    decay: f64,
}

impl Ruins {
    pub fn new(bounds: Bounds, decay: f64) -> Self {
        Self { bounds, decay }
    }

    pub fn render(&self, grid: &mut Grid, palette: &Palette, rng: &mut ChunkRng) {
        for x in self.bounds.min_x..=self.bounds.max_x {
            for y in self.bounds.min_y..=self.bounds.max_y {
                let p = Point::new(x, y);
                let is_edge = x == self.bounds.min_x
                    || x == self.bounds.max_x
                    || y == self.bounds.min_y
                    || y == self.bounds.max_y;
                if is_edge {
                    if rng.next_f64() > self.decay {
                        grid.set(p, palette.building, false);
                    } else {
                        grid.set(p, palette.cobblestone, true);
                    }
                } else {
                    grid.set(p, palette.cobblestone, true);
                }
            }
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(50, 50, '^', true)
    }

    #[test]
    fn test_scatter_decor_density_extremes() {
        let mut g = grid();
        let mut rng = ChunkRng::new(3);
        ScatterDecor::new(Bounds::new(0, 0, 9, 9), ';', 0.0).render(&mut g, &mut rng);
        assert!(g.tiles().iter().all(|row| row.iter().all(|&t| t != ';')));
        ScatterDecor::new(Bounds::new(0, 0, 9, 9), ';', 1.0).render(&mut g, &mut rng);
        assert_eq!(g.get(Point::new(0, 0)), ';');
        assert_eq!(g.get(Point::new(9, 9)), ';');
    }

    #[test]
    fn test_border_rings_outside() {
        let mut g = grid();
        let b = Border::new(Bounds::new(10, 10, 14, 14), '@', true);
        b.render(&mut g);
        assert_eq!(g.get(Point::new(9, 9)), '@');
        assert_eq!(g.get(Point::new(15, 15)), '@');
        assert_eq!(g.get(Point::new(10, 10)), '^', "inner area untouched");
        assert_eq!(b.bounds(), Bounds::new(9, 9, 15, 15));
    }

    #[test]
    fn test_garden_layout() {
        let mut g = grid();
        let mut rng = ChunkRng::new(11);
        Garden::new(Bounds::new(8, 38, 15, 45)).render(&mut g, &Palette::default(), &mut rng);
        assert_eq!(g.get(Point::new(8, 38)), 'o', "cobble edge");
        let interior_tiles: Vec<char> = Bounds::new(9, 39, 14, 44)
            .cells()
            .map(|p| g.get(p))
            .collect();
        assert!(interior_tiles.iter().all(|&t| t == '^' || t == ';'));
        assert!(interior_tiles.contains(&'^'));
    }

    #[test]
    fn test_ruins_decay_extremes() {
        let bounds = Bounds::new(10, 10, 16, 15);
        let palette = Palette::default();

        let mut g = grid();
        let mut rng = ChunkRng::new(5);
        Ruins::new(bounds, 0.0).render(&mut g, &palette, &mut rng);
        assert_eq!(g.get(Point::new(10, 10)), '#', "no decay keeps every wall");
        assert_eq!(g.get(Point::new(16, 15)), '#');
        assert_eq!(g.get(Point::new(12, 12)), 'o', "interior always collapses");

        let mut g = grid();
        // decay > 1.0 guarantees collapse since next_f64 < 1.0 always
        Ruins::new(bounds, 1.1).render(&mut g, &palette, &mut rng);
        assert_eq!(g.get(Point::new(10, 10)), 'o', "full decay fells every wall");
        assert!(g.is_walkable(Point::new(10, 10)));
    }
}
