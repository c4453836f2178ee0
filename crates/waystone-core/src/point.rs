use glam::IVec2;

/// Tile coordinate in chunk-local space. Positive y points south.
pub type Point = IVec2;

/// The 4-connected neighbours of a point, in fixed N, E, S, W order.
/// Everything that walks the grid (flood fills, BFS, A*) uses this order,
/// which keeps traversal deterministic.
pub fn neighbours(p: Point) -> [Point; 4] {
    [
        Point::new(p.x, p.y - 1),
        Point::new(p.x + 1, p.y),
        Point::new(p.x, p.y + 1),
        Point::new(p.x - 1, p.y),
    ]
}

/// Manhattan distance between two points.
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// One of the four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

/// All four directions in fixed N, E, S, W order.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// The direction pointing the opposite way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Offset vector for one step in this direction.
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::North => IVec2::new(0, -1),
            Direction::East => IVec2::new(1, 0),
            Direction::South => IVec2::new(0, 1),
            Direction::West => IVec2::new(-1, 0),
        }
    }

    /// Lowercase name, used for node ids and log lines.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_are_involutions() {
        for dir in ALL_DIRECTIONS {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_delta_matches_opposite() {
        for dir in ALL_DIRECTIONS {
            assert_eq!(dir.delta() + dir.opposite().delta(), IVec2::ZERO);
        }
    }

    #[test]
    fn test_north_is_negative_y() {
        assert_eq!(Direction::North.delta(), IVec2::new(0, -1));
        assert_eq!(Direction::South.delta(), IVec2::new(0, 1));
    }

    #[test]
    fn test_neighbours_order() {
        let n = neighbours(Point::new(5, 5));
        assert_eq!(n[0], Point::new(5, 4)); // N
        assert_eq!(n[1], Point::new(6, 5)); // E
        assert_eq!(n[2], Point::new(5, 6)); // S
        assert_eq!(n[3], Point::new(4, 5)); // W
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan(Point::new(3, 4), Point::new(0, 0)), 7);
        assert_eq!(manhattan(Point::new(-2, 1), Point::new(2, -1)), 6);
    }
}
