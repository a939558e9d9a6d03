//! Static face adjacency table.
//!
//! For every color that can be the front face, the table records which face
//! lies in each compass direction and, crucially, the *back direction*: the
//! entry direction that indexes the neighbor's own grid so that its row 0
//! runs along the edge shared with the front face. The values are derived
//! from a fixed physical cube net and never recomputed.

use crate::color::{FACE_COUNT, FaceColor};
use crate::dir::Direction;

use Direction::{East, North, South, West};
use FaceColor::{Blue, Green, Orange, Red, White, Yellow};

/// For each facing color (in storage order), the neighbor color and back
/// direction per compass direction.
const NEIGHBORS: [[(FaceColor, Direction); 4]; FACE_COUNT] = [
    // White front
    [(Red, West), (Green, North), (Orange, West), (Blue, South)],
    // Red front
    [(Blue, East), (Yellow, South), (Green, East), (White, North)],
    // Blue front
    [(Yellow, West), (Red, North), (White, West), (Orange, South)],
    // Orange front
    [(Green, West), (Yellow, North), (Blue, West), (White, South)],
    // Green front
    [(White, East), (Red, South), (Yellow, East), (Orange, North)],
    // Yellow front
    [(Orange, East), (Green, South), (Red, East), (Blue, North)],
];

/// The face lying in compass direction `dir` when `facing` is the front
/// face, together with the back direction for indexing that face's grid.
pub fn neighbor(facing: FaceColor, dir: Direction) -> (FaceColor, Direction) {
    NEIGHBORS[facing.as_usize()][dir.as_usize()]
}

/// The compass direction in which `target` touches `face`.
///
/// # Panics
///
/// Panics if `target` is not a neighbor of `face` (its own color or its
/// opposite) — a physically valid cube always has exactly one match.
pub fn neighbor_direction(face: FaceColor, target: FaceColor) -> Direction {
    for dir in Direction::ALL {
        if NEIGHBORS[face.as_usize()][dir.as_usize()].0 == target {
            return dir;
        }
    }
    panic!("Face {target:?} is not adjacent to face {face:?}");
}
