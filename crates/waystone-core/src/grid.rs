//! The tile field a chunk is painted onto.
//!
//! `tiles` and `walkable` are parallel fields mutated together through
//! `set`, so they can never fall out of shape. Out-of-bounds writes are
//! dropped and out-of-bounds reads return the empty glyph, which lets
//! components paint near chunk borders without clamping.

use std::collections::{HashSet, VecDeque};

use crate::bounds::Bounds;
use crate::constants::EMPTY_TILE;
use crate::point::{neighbours, Point};
use crate::rng::ChunkRng;

pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Vec<char>>,
    walkable: Vec<Vec<bool>>,
}

impl Grid {
    /// A grid filled with one default tile and walkability.
    pub fn new(width: i32, height: i32, default_tile: char, walkable: bool) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        Self {
            width,
            height,
            tiles: vec![vec![default_tile; w]; h],
            walkable: vec![vec![walkable; w]; h],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Write a tile and its walkability in one step. No-op out of bounds.
    pub fn set(&mut self, p: Point, tile: char, walkable: bool) {
        if self.in_bounds(p) {
            self.tiles[p.y as usize][p.x as usize] = tile;
            self.walkable[p.y as usize][p.x as usize] = walkable;
        }
    }

    /// The glyph at `p`, or the empty glyph out of bounds.
    pub fn get(&self, p: Point) -> char {
        if self.in_bounds(p) {
            self.tiles[p.y as usize][p.x as usize]
        } else {
            EMPTY_TILE
        }
    }

    /// Whether `p` is walkable. Out-of-bounds cells never are.
    pub fn is_walkable(&self, p: Point) -> bool {
        self.in_bounds(p) && self.walkable[p.y as usize][p.x as usize]
    }

    /// The finished tile rows, for output serialization.
    pub fn tiles(&self) -> &[Vec<char>] {
        &self.tiles
    }

    // ---- drawing primitives ----

    /// Fill an inclusive rectangle.
    pub fn rect(&mut self, b: Bounds, tile: char, walkable: bool) {
        for p in b.cells() {
            self.set(p, tile, walkable);
        }
    }

    /// Paint only the border of an inclusive rectangle.
    pub fn rect_outline(&mut self, b: Bounds, tile: char, walkable: bool) {
        for x in b.min_x..=b.max_x {
            self.set(Point::new(x, b.min_y), tile, walkable);
            self.set(Point::new(x, b.max_y), tile, walkable);
        }
        for y in b.min_y..=b.max_y {
            self.set(Point::new(b.min_x, y), tile, walkable);
            self.set(Point::new(b.max_x, y), tile, walkable);
        }
    }

    /// Bresenham line, inclusive of both endpoints.
    pub fn line(&mut self, from: Point, to: Point, tile: char, walkable: bool) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x > to.x { -1 } else { 1 };
        let sy = if from.y > to.y { -1 } else { 1 };
        let mut err = dx + dy;

        let (mut x, mut y) = (from.x, from.y);
        loop {
            self.set(Point::new(x, y), tile, walkable);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// BFS fill replacing every 4-connected cell matching the start's glyph.
    pub fn flood_fill(&mut self, start: Point, new_tile: char, walkable: bool) {
        if !self.in_bounds(start) {
            return;
        }
        let old_tile = self.get(start);
        if old_tile == new_tile {
            return;
        }

        let mut queue = VecDeque::from([start]);
        let mut visited = HashSet::new();

        while let Some(p) = queue.pop_front() {
            if visited.contains(&p) || !self.in_bounds(p) {
                continue;
            }
            if self.get(p) != old_tile {
                continue;
            }
            visited.insert(p);
            self.set(p, new_tile, walkable);
            for adj in neighbours(p) {
                if !visited.contains(&adj) {
                    queue.push_back(adj);
                }
            }
        }
    }

    /// Place `tile` on each cell in `b` with probability `density`,
    /// skipping cells in `avoid`. Row-major, one RNG draw per visited cell.
    pub fn scatter(
        &mut self,
        b: Bounds,
        tile: char,
        walkable: bool,
        density: f64,
        rng: &mut ChunkRng,
        avoid: Option<&HashSet<Point>>,
    ) {
        for p in b.cells() {
            if avoid.is_some_and(|set| set.contains(&p)) {
                continue;
            }
            if rng.next_f64() < density {
                self.set(p, tile, walkable);
            }
        }
    }

    /// As `scatter`, but only replaces cells whose current glyph is `target`.
    pub fn scatter_on_tile(
        &mut self,
        b: Bounds,
        target: char,
        new_tile: char,
        walkable: bool,
        density: f64,
        rng: &mut ChunkRng,
    ) {
        for p in b.cells() {
            if self.get(p) == target && rng.next_f64() < density {
                self.set(p, new_tile, walkable);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grass_grid() -> Grid {
        Grid::new(10, 10, '^', true)
    }

    #[test]
    fn test_new_fills_default() {
        let g = grass_grid();
        assert_eq!(g.get(Point::new(0, 0)), '^');
        assert_eq!(g.get(Point::new(9, 9)), '^');
        assert!(g.is_walkable(Point::new(5, 5)));
    }

    #[test]
    fn test_oob_read_returns_empty_glyph() {
        let g = grass_grid();
        assert_eq!(g.get(Point::new(-1, 0)), EMPTY_TILE);
        assert_eq!(g.get(Point::new(10, 0)), EMPTY_TILE);
        assert!(!g.is_walkable(Point::new(0, -1)));
    }

    #[test]
    fn test_oob_write_is_dropped() {
        let mut g = grass_grid();
        g.set(Point::new(-1, -1), 'X', false);
        g.set(Point::new(10, 10), 'X', false);
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(g.get(Point::new(x, y)), '^');
            }
        }
    }

    #[test]
    fn test_tiles_and_walkable_stay_in_shape() {
        let mut g = grass_grid();
        g.rect(Bounds::new(-5, -5, 15, 15), '#', false);
        assert_eq!(g.tiles().len(), 10);
        for row in g.tiles() {
            assert_eq!(row.len(), 10);
        }
    }

    #[test]
    fn test_set_updates_both_fields() {
        let mut g = grass_grid();
        g.set(Point::new(3, 3), '~', false);
        assert_eq!(g.get(Point::new(3, 3)), '~');
        assert!(!g.is_walkable(Point::new(3, 3)));
    }

    #[test]
    fn test_rect_inclusive() {
        let mut g = grass_grid();
        g.rect(Bounds::new(2, 2, 4, 4), 'o', true);
        assert_eq!(g.get(Point::new(2, 2)), 'o');
        assert_eq!(g.get(Point::new(4, 4)), 'o');
        assert_eq!(g.get(Point::new(5, 4)), '^');
    }

    #[test]
    fn test_rect_outline_leaves_interior() {
        let mut g = grass_grid();
        g.rect_outline(Bounds::new(1, 1, 5, 5), '#', false);
        assert_eq!(g.get(Point::new(1, 3)), '#');
        assert_eq!(g.get(Point::new(5, 5)), '#');
        assert_eq!(g.get(Point::new(3, 3)), '^', "interior untouched");
    }

    #[test]
    fn test_line_endpoints_and_diagonal() {
        let mut g = grass_grid();
        g.line(Point::new(0, 0), Point::new(4, 2), '+', true);
        assert_eq!(g.get(Point::new(0, 0)), '+');
        assert_eq!(g.get(Point::new(4, 2)), '+');
        let count: usize = g
            .tiles()
            .iter()
            .map(|row| row.iter().filter(|&&t| t == '+').count())
            .sum();
        assert_eq!(count, 5, "8-connected line covers max(dx, dy) + 1 cells");
    }

    #[test]
    fn test_line_single_point() {
        let mut g = grass_grid();
        g.line(Point::new(3, 3), Point::new(3, 3), '+', true);
        assert_eq!(g.get(Point::new(3, 3)), '+');
    }

    #[test]
    fn test_flood_fill_respects_boundaries() {
        let mut g = grass_grid();
        // Wall off the left column
        for y in 0..10 {
            g.set(Point::new(2, y), '#', false);
        }
        g.flood_fill(Point::new(5, 5), '.', true);
        assert_eq!(g.get(Point::new(9, 9)), '.');
        assert_eq!(g.get(Point::new(0, 0)), '^', "walled-off region untouched");
        assert_eq!(g.get(Point::new(2, 5)), '#');
    }

    #[test]
    fn test_flood_fill_same_tile_is_noop() {
        let mut g = grass_grid();
        g.flood_fill(Point::new(0, 0), '^', false);
        assert!(g.is_walkable(Point::new(0, 0)), "no-op keeps walkability");
    }

    #[test]
    fn test_scatter_deterministic_and_avoids() {
        let mut avoid = HashSet::new();
        for y in 0..10 {
            avoid.insert(Point::new(0, y));
        }

        let mut a = grass_grid();
        let mut rng = ChunkRng::new(42);
        a.scatter(Bounds::new(0, 0, 9, 9), 'T', false, 0.5, &mut rng, Some(&avoid));

        let mut b = grass_grid();
        let mut rng = ChunkRng::new(42);
        b.scatter(Bounds::new(0, 0, 9, 9), 'T', false, 0.5, &mut rng, Some(&avoid));

        assert_eq!(a.tiles(), b.tiles());
        for y in 0..10 {
            assert_eq!(a.get(Point::new(0, y)), '^', "avoided column untouched");
        }
        let trees: usize = a
            .tiles()
            .iter()
            .map(|row| row.iter().filter(|&&t| t == 'T').count())
            .sum();
        assert!(trees > 0, "density 0.5 over 90 cells places something");
    }

    #[test]
    fn test_scatter_on_tile_only_replaces_target() {
        let mut g = grass_grid();
        g.rect(Bounds::new(0, 0, 9, 4), 'o', true);
        let mut rng = ChunkRng::new(7);
        g.scatter_on_tile(Bounds::new(0, 0, 9, 9), '^', 'T', false, 1.0, &mut rng);
        for y in 0..5 {
            for x in 0..10 {
                assert_eq!(g.get(Point::new(x, y)), 'o', "cobble untouched");
            }
        }
        for y in 5..10 {
            for x in 0..10 {
                assert_eq!(g.get(Point::new(x, y)), 'T');
            }
        }
    }
}
