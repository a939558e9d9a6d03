//! NxN cube state and the slice rotation engine.
//!
//! This module defines the grid representation of the cube: every sticker of
//! every face in one contiguous array, grouped by face and stored row-major.
//! Rotation permutes stickers in place; aside from [`Cube::checkerboard`],
//! nothing ever rewrites a color.

use rand::Rng;
use thiserror::Error;

use crate::adjacency;
use crate::color::{FACE_COUNT, FaceColor};
use crate::dir::Direction;

/// Recoverable failures when constructing a [`Cube`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CubeError {
    /// The requested grid dimension was below the 1x1 minimum.
    #[error("cube must have at least 1 square per side, got {0}")]
    InvalidSize(u32),
}

/// The complete NxN cube state.
///
/// Six faces of `sides * sides` stickers each, plus the facing side that acts
/// as the reference frame for slice rotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    /// Grid dimension per face, fixed at creation.
    sides: u32,
    /// Stored whole-cube rotation state. Set but never consumed by the
    /// rotation logic; kept for callers that track it externally.
    orientation: i32,
    /// The face currently treated as the front.
    facing_side: FaceColor,
    /// All sticker colors, grouped by face in storage order, row-major
    /// within a face.
    squares: Vec<FaceColor>,
}

/// The common 4-cycle: clockwise, each slot receives the value of its
/// counter-clockwise neighbor.
fn cycle(vals: [FaceColor; 4], clockwise: bool) -> [FaceColor; 4] {
    if clockwise {
        [vals[3], vals[0], vals[1], vals[2]]
    } else {
        [vals[1], vals[2], vals[3], vals[0]]
    }
}

impl Cube {
    /// Creates a cube in the solved state: every face a uniform color.
    ///
    /// The facing side defaults to white.
    pub fn new(sides: u32) -> Result<Self, CubeError> {
        if sides < 1 {
            return Err(CubeError::InvalidSize(sides));
        }

        let per_face = (sides * sides) as usize;
        let mut squares = Vec::with_capacity(FACE_COUNT * per_face);
        for face in FaceColor::ALL {
            squares.extend(std::iter::repeat(face).take(per_face));
        }

        Ok(Self {
            sides,
            orientation: 0,
            facing_side: FaceColor::White,
            squares,
        })
    }

    /// Grid dimension per face.
    pub fn side_count(&self) -> u32 {
        self.sides
    }

    /// The deepest slice that may be rotated.
    pub fn max_depth(&self) -> u32 {
        self.sides / 2
    }

    /// The face currently treated as the front.
    pub fn facing_side(&self) -> FaceColor {
        self.facing_side
    }

    /// Selects which face subsequent rotations treat as the front.
    pub fn set_facing_side(&mut self, facing_side: FaceColor) {
        self.facing_side = facing_side;
    }

    /// Stores a whole-cube orientation. No rotation logic consumes this.
    pub fn set_orientation(&mut self, orientation: i32) {
        self.orientation = orientation;
    }

    /// Reads the sticker at `(row, col)` on `face` in its native orientation.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below the side count.
    pub fn get(&self, face: FaceColor, row: u32, col: u32) -> FaceColor {
        self.get_at(face, row, col, Direction::North)
    }

    /// Writes the sticker at `(row, col)` on `face` in its native orientation.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below the side count.
    pub fn set(&mut self, face: FaceColor, row: u32, col: u32, color: FaceColor) {
        self.set_at(face, row, col, Direction::North, color);
    }

    /// Reads a sticker through the directional grid transform: `(row, col)`
    /// as seen when entering `face` from `dir`.
    pub fn get_at(&self, face: FaceColor, row: u32, col: u32, dir: Direction) -> FaceColor {
        self.squares[self.sticker_index(face, row, col, dir)]
    }

    /// Write dual of [`Cube::get_at`].
    pub fn set_at(
        &mut self,
        face: FaceColor,
        row: u32,
        col: u32,
        dir: Direction,
        color: FaceColor,
    ) {
        let index = self.sticker_index(face, row, col, dir);
        self.squares[index] = color;
    }

    fn sticker_index(&self, face: FaceColor, row: u32, col: u32, dir: Direction) -> usize {
        let per_face = (self.sides * self.sides) as usize;
        face.as_usize() * per_face + dir.grid_index(self.sides, row, col)
    }

    /// Performs one quarter-turn of the slice `depth` layers in from the
    /// front face.
    ///
    /// At depth 0 the front face's own grid rotates as a square matrix turn,
    /// ring by ring. At every depth the matching ring of stickers on the four
    /// adjacent faces cycles around the front face. Each 4-cycle reads all
    /// four positions before writing any of them.
    ///
    /// # Panics
    ///
    /// Panics if `depth > side_count() / 2`.
    pub fn rotate_front(&mut self, depth: u32, clockwise: bool) {
        assert!(
            depth <= self.sides / 2,
            "Invalid rotation depth. Expected 0 <= depth <= {}, but got {depth}",
            self.sides / 2
        );

        let sides = self.sides;

        // Rotate the squares on the front.
        if depth == 0 {
            let face = self.facing_side;
            for d in 0..sides / 2 {
                for c in d..(sides - 1) - d {
                    let vals = Direction::ALL.map(|dir| self.get_at(face, d, c, dir));
                    let vals = cycle(vals, clockwise);
                    for (dir, val) in Direction::ALL.into_iter().zip(vals) {
                        self.set_at(face, d, c, dir, val);
                    }
                }
            }
        }

        // Rotate the ring on the four adjacent faces. Each neighbor is read
        // and written through its own back direction, so row `depth` always
        // runs along the edge shared with the front face.
        let ring = Direction::ALL.map(|dir| adjacency::neighbor(self.facing_side, dir));
        for c in 0..sides {
            let vals = ring.map(|(face, back)| self.get_at(face, depth, c, back));
            let vals = cycle(vals, clockwise);
            for ((face, back), val) in ring.into_iter().zip(vals) {
                self.set_at(face, depth, c, back, val);
            }
        }
    }

    /// Overwrites every sticker with an alternating pattern of the face's own
    /// color and its opposite.
    ///
    /// Cosmetic, for exercising the net projection; this is the one mutation
    /// that does not preserve the color multiset.
    pub fn checkerboard(&mut self) {
        for face in FaceColor::ALL {
            for row in 0..self.sides {
                for col in 0..self.sides {
                    let color = if (row + col) % 2 == 0 {
                        face
                    } else {
                        face.opposite()
                    };
                    self.set(face, row, col, color);
                }
            }
        }
    }

    /// Whether every face is a uniform color.
    pub fn is_solved(&self) -> bool {
        let per_face = (self.sides * self.sides) as usize;
        self.squares
            .chunks_exact(per_face)
            .all(|face| face.iter().all(|&c| c == face[0]))
    }

    /// Applies `count` random legal moves.
    pub fn scramble<R: Rng>(&mut self, rng: &mut R, count: u32) {
        for _ in 0..count {
            let mv = Move {
                face: FaceColor::from_index(rng.gen_range(0..FACE_COUNT)),
                depth: rng.gen_range(0..=self.max_depth()),
                clockwise: rng.gen_bool(0.5),
            };
            log::debug!("scramble move: {mv:?}");
            mv.apply(self);
        }
    }
}

/// A single quarter-turn, naming the face to front, the slice depth and the
/// rotational sense.
///
/// The text notation is the face letter, an optional depth (default 0) and a
/// mandatory `+` (clockwise) or `-` (counter-clockwise): `W+`, `R2-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub face: FaceColor,
    pub depth: u32,
    pub clockwise: bool,
}

/// Recoverable failures when parsing the [`Move`] text notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("empty move string")]
    Empty,
    #[error("unknown face letter {0:?}")]
    UnknownFace(char),
    #[error("move {0:?} must end in '+' (clockwise) or '-' (counter-clockwise)")]
    MissingDirection(String),
    #[error("invalid depth in move {0:?}")]
    InvalidDepth(String),
}

impl Move {
    /// Fronts the named face and performs the turn.
    ///
    /// # Panics
    ///
    /// Panics if the depth exceeds the cube's maximum; callers taking moves
    /// from external input must validate against [`Cube::max_depth`] first.
    pub fn apply(self, cube: &mut Cube) {
        cube.set_facing_side(self.face);
        cube.rotate_front(self.depth, self.clockwise);
    }
}

impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face_letter = chars.next().ok_or(ParseMoveError::Empty)?;
        let face = FaceColor::ALL
            .into_iter()
            .find(|face| face.letter() == face_letter.to_ascii_uppercase())
            .ok_or(ParseMoveError::UnknownFace(face_letter))?;

        let rest = chars.as_str();
        let clockwise = match rest.chars().next_back() {
            Some('+') => true,
            Some('-') => false,
            _ => return Err(ParseMoveError::MissingDirection(s.to_string())),
        };

        let digits = &rest[..rest.len() - 1];
        let depth = if digits.is_empty() {
            0
        } else {
            digits
                .parse()
                .map_err(|_| ParseMoveError::InvalidDepth(s.to_string()))?
        };

        Ok(Move {
            face,
            depth,
            clockwise,
        })
    }
}
