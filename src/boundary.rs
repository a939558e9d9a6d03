//! Boundary-ring cube representation.
//!
//! An alternate encoding of the puzzle that tracks only the edge and corner
//! stickers of each face, keyed by compass direction, rather than a full
//! grid. Face centers are implied by the face's identity, so this models a
//! 3x3-equivalent cube. Rotations name the face directly; there is no facing
//! side or depth.
//!
//! Slot convention: `edges[d]` is the edge sticker on side `d` of the face,
//! and `corners[d]` the corner at the clockwise end of that edge. A
//! transplanted strip (counter-clockwise corner, edge, clockwise corner) is
//! carried slot-for-slot between neighbors, which makes every turn a fixed
//! permutation of slots and gives the turn order 4.

use crate::adjacency;
use crate::color::{FACE_COUNT, FaceColor};
use crate::dir::Direction;

/// The boundary ring of one face: its identity plus an edge and a corner
/// sticker per compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryFace {
    color: FaceColor,
    edges: [FaceColor; 4],
    corners: [FaceColor; 4],
}

impl BoundaryFace {
    fn solved(color: FaceColor) -> Self {
        Self {
            color,
            edges: [color; 4],
            corners: [color; 4],
        }
    }

    /// The fixed identity of this face.
    pub fn color(&self) -> FaceColor {
        self.color
    }

    /// The edge sticker on side `dir`.
    pub fn edge(&self, dir: Direction) -> FaceColor {
        self.edges[dir.as_usize()]
    }

    /// The corner sticker at the clockwise end of the `dir` edge.
    pub fn corner(&self, dir: Direction) -> FaceColor {
        self.corners[dir.as_usize()]
    }

    /// The stickers touching the neighbor in direction `dir`, in order
    /// (counter-clockwise corner, edge, clockwise corner).
    fn strip(&self, dir: Direction) -> [FaceColor; 3] {
        [
            self.corners[dir.counter_clockwise().as_usize()],
            self.edges[dir.as_usize()],
            self.corners[dir.as_usize()],
        ]
    }

    fn set_strip(&mut self, dir: Direction, strip: [FaceColor; 3]) {
        self.corners[dir.counter_clockwise().as_usize()] = strip[0];
        self.edges[dir.as_usize()] = strip[1];
        self.corners[dir.as_usize()] = strip[2];
    }

    /// Quarter-turn of this face's own ring: clockwise, each slot receives
    /// the value of its counter-clockwise neighbor.
    fn rotate(&mut self, clockwise: bool) {
        let shift = |slots: [FaceColor; 4]| {
            if clockwise {
                [slots[3], slots[0], slots[1], slots[2]]
            } else {
                [slots[1], slots[2], slots[3], slots[0]]
            }
        };
        self.edges = shift(self.edges);
        self.corners = shift(self.corners);
    }
}

/// A cube of six boundary faces, one per color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryCube {
    faces: [BoundaryFace; FACE_COUNT],
}

impl BoundaryCube {
    /// Creates a solved cube: every ring uniform in its face's color.
    pub fn new() -> Self {
        Self {
            faces: FaceColor::ALL.map(BoundaryFace::solved),
        }
    }

    /// The boundary ring of the named face.
    pub fn face(&self, color: FaceColor) -> &BoundaryFace {
        &self.faces[color.as_usize()]
    }

    /// Performs one quarter-turn of the named face.
    ///
    /// The face's own ring rotates, then the strips on the four neighboring
    /// faces cycle around it: clockwise, each neighbor receives the strip of
    /// its counter-clockwise predecessor. All strips are read before any is
    /// written.
    pub fn rotate(&mut self, face: FaceColor, clockwise: bool) {
        self.faces[face.as_usize()].rotate(clockwise);

        let ring = Direction::ALL.map(|dir| {
            let (neighbor, _) = adjacency::neighbor(face, dir);
            (neighbor, adjacency::neighbor_direction(neighbor, face))
        });

        let strips = ring.map(|(neighbor, toward)| self.faces[neighbor.as_usize()].strip(toward));
        let strips = if clockwise {
            [strips[3], strips[0], strips[1], strips[2]]
        } else {
            [strips[1], strips[2], strips[3], strips[0]]
        };
        for ((neighbor, toward), strip) in ring.into_iter().zip(strips) {
            self.faces[neighbor.as_usize()].set_strip(toward, strip);
        }
    }

    /// Whether every ring is uniform in its face's color.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|face| {
            face.edges.iter().all(|&c| c == face.color)
                && face.corners.iter().all(|&c| c == face.color)
        })
    }
}

impl Default for BoundaryCube {
    fn default() -> Self {
        Self::new()
    }
}
