//! A* over the tile grid: 4-connected moves, unit step cost, Manhattan
//! heuristic. The heuristic is admissible and consistent on this move set,
//! so returned paths are optimal.
//!
//! Ties on `f` break by insertion order via a monotonic sequence counter
//! in the heap key; the search is fully deterministic.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use waystone_core::grid::Grid;
use waystone_core::point::{manhattan, neighbours, Point};

/// Min-heap entry ordered by (f, seq). `BinaryHeap` is a max-heap, so the
/// comparison is reversed.
#[derive(PartialEq, Eq)]
struct OpenNode {
    f: i32,
    seq: u64,
    g: i32,
    point: Point,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a shortest walkable path from `from` to `to`, inclusive of both
/// endpoints. Cells in `walkable_override` are treated as walkable even
/// when the grid says otherwise; the goal always is, so a path can end on
/// a door. Returns `None` when no path exists or an endpoint is out of
/// bounds.
pub fn find_path(
    grid: &Grid,
    from: Point,
    to: Point,
    walkable_override: Option<&HashSet<Point>>,
) -> Option<Vec<Point>> {
    search(grid, from, to, |p| {
        walkable_override.is_some_and(|set| set.contains(&p)) || grid.is_walkable(p)
    })
}

/// As `find_path`, but a cell must be walkable on the grid *and* outside
/// `avoid`. The goal still overrides.
pub fn find_path_avoid(
    grid: &Grid,
    from: Point,
    to: Point,
    avoid: &HashSet<Point>,
) -> Option<Vec<Point>> {
    search(grid, from, to, |p| {
        !avoid.contains(&p) && grid.is_walkable(p)
    })
}

fn search(
    grid: &Grid,
    from: Point,
    to: Point,
    passable: impl Fn(Point) -> bool,
) -> Option<Vec<Point>> {
    if !grid.in_bounds(from) || !grid.in_bounds(to) {
        return None;
    }

    let mut open = BinaryHeap::new();
    let mut g_score: HashMap<Point, i32> = HashMap::new();
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut seq: u64 = 0;

    g_score.insert(from, 0);
    open.push(OpenNode {
        f: manhattan(from, to),
        seq,
        g: 0,
        point: from,
    });

    while let Some(current) = open.pop() {
        // Stale entry: a cheaper route to this cell was found after it
        // was enqueued.
        if current.g > *g_score.get(&current.point).unwrap_or(&i32::MAX) {
            continue;
        }

        if current.point == to {
            return Some(reconstruct(&came_from, from, to));
        }

        for neighbour in neighbours(current.point) {
            if !grid.in_bounds(neighbour) {
                continue;
            }
            if !passable(neighbour) && neighbour != to {
                continue;
            }

            let tentative_g = current.g + 1;
            if tentative_g < *g_score.get(&neighbour).unwrap_or(&i32::MAX) {
                came_from.insert(neighbour, current.point);
                g_score.insert(neighbour, tentative_g);
                seq += 1;
                open.push(OpenNode {
                    f: tentative_g + manhattan(neighbour, to),
                    seq,
                    g: tentative_g,
                    point: neighbour,
                });
            }
        }
    }

    None
}

fn reconstruct(came_from: &HashMap<Point, Point>, from: Point, to: Point) -> Vec<Point> {
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        current = came_from[&current];
        path.push(current);
    }
    path.reverse();
    path
}
