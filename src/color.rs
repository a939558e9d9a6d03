//! Face colors for the six sides of the cube.
//!
//! The discriminant order doubles as the face's index into the sticker
//! storage, so it must stay in sync with the solved-state layout.

use nalgebra::Vector4;

/// Colors for the 6 faces of the cube.
///
/// Uses the standard Rubik's cube color scheme. The enum discriminant is the
/// face's storage index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceColor {
    White,
    Red,
    Blue,
    Orange,
    Green,
    Yellow,
}

/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;

impl FaceColor {
    /// All face colors in storage order.
    pub const ALL: [FaceColor; FACE_COUNT] = [
        FaceColor::White,
        FaceColor::Red,
        FaceColor::Blue,
        FaceColor::Orange,
        FaceColor::Green,
        FaceColor::Yellow,
    ];

    /// Get the face color for a storage index, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `index >= FACE_COUNT`.
    pub fn from_index(index: usize) -> Self {
        assert!(
            index < FACE_COUNT,
            "Invalid face index. Expected 0 <= index < {FACE_COUNT}, but got {index}"
        );
        Self::ALL[index]
    }

    /// Get the color as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// The color on the physically opposite face of a solved cube.
    pub fn opposite(self) -> Self {
        match self {
            FaceColor::White => FaceColor::Yellow,
            FaceColor::Yellow => FaceColor::White,
            FaceColor::Red => FaceColor::Orange,
            FaceColor::Orange => FaceColor::Red,
            FaceColor::Blue => FaceColor::Green,
            FaceColor::Green => FaceColor::Blue,
        }
    }

    /// Single-letter name used by the text renderer.
    pub fn letter(self) -> char {
        match self {
            FaceColor::White => 'W',
            FaceColor::Red => 'R',
            FaceColor::Blue => 'B',
            FaceColor::Orange => 'O',
            FaceColor::Green => 'G',
            FaceColor::Yellow => 'Y',
        }
    }
}

impl From<FaceColor> for Vector4<f32> {
    /// Converts a face color to RGBA color values for rendering.
    fn from(color: FaceColor) -> Self {
        match color {
            FaceColor::White => Vector4::new(1.0, 1.0, 1.0, 1.0),
            FaceColor::Red => Vector4::new(1.0, 0.0, 0.0, 1.0),
            FaceColor::Blue => Vector4::new(0.1, 0.1, 1.0, 1.0),
            FaceColor::Orange => Vector4::new(1.0, 0.5, 0.0, 1.0),
            FaceColor::Green => Vector4::new(0.0, 1.0, 0.0, 1.0),
            FaceColor::Yellow => Vector4::new(1.0, 1.0, 0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, color) in FaceColor::ALL.into_iter().enumerate() {
            assert_eq!(color.as_usize(), i);
            assert_eq!(FaceColor::from_index(i), color);
        }
    }

    #[test]
    #[should_panic(expected = "Invalid face index")]
    fn test_index_out_of_range() {
        FaceColor::from_index(6);
    }

    #[test]
    fn test_opposite_is_involution() {
        for color in FaceColor::ALL {
            assert_ne!(color.opposite(), color);
            assert_eq!(color.opposite().opposite(), color);
        }
    }

    #[test]
    fn test_letters_are_distinct() {
        for a in FaceColor::ALL {
            for b in FaceColor::ALL {
                assert_eq!(a.letter() == b.letter(), a == b);
            }
        }
    }
}
