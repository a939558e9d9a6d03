//! Compass directions and the directional grid transform.
//!
//! A face's grid can be entered from any of four directions, depending on how
//! the adjoining face's ring is oriented. All row/column addressing goes
//! through [`Direction::grid_index`], which maps a (row, col) pair seen from
//! that entry direction to the flat index of the physically identical cell in
//! the face's native orientation.

/// One of the four compass directions around a face.
///
/// Doubles as a grid rotation: `North` is the identity and each step
/// clockwise adds a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in compass order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Get the direction as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// The next direction going clockwise.
    pub fn clockwise(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// The next direction going counter-clockwise.
    pub fn counter_clockwise(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// The direction pointing the opposite way.
    pub fn opposite(self) -> Self {
        self.clockwise().clockwise()
    }

    /// Flat index of `(row, col)` as seen when entering an `sides`-by-`sides`
    /// grid from this direction.
    ///
    /// The four cases are the four rotations of a square grid: `North` is the
    /// identity, `East` a 90° clockwise turn, `South` 180°, `West` 270°.
    /// `South` is its own inverse; `East` and `West` invert each other.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below `sides`.
    pub fn grid_index(self, sides: u32, row: u32, col: u32) -> usize {
        assert!(
            row < sides,
            "Invalid row in grid transform. Expected 0 <= row < {sides}, but got {row}"
        );
        assert!(
            col < sides,
            "Invalid col in grid transform. Expected 0 <= col < {sides}, but got {col}"
        );

        let index = match self {
            Direction::North => sides * row + col,
            Direction::East => sides * col + (sides - 1 - row),
            Direction::South => sides * (sides - 1 - row) + (sides - 1 - col),
            Direction::West => sides * (sides - 1 - col) + row,
        };
        index as usize
    }
}
