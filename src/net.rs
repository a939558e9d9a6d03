//! Net-layout serialization of the cube.
//!
//! Flattens all six faces into the standard unfolded-cube cross (white on
//! top, green-red-blue-orange across the middle, yellow on the bottom). The
//! traversal computes a byte offset per sticker and hands it to a caller
//! supplied writer, so the text renderer and the RGB texture atlas share the
//! same addressing logic and differ only in item size and writer.
//!
//! Every face's grid is read through a fixed display direction so its rows
//! line up with the net's visual orientation.

use nalgebra::Vector4;

use crate::color::FaceColor;
use crate::cube::Cube;
use crate::dir::Direction;

/// Layout parameters for a net write-out, all in items (multiplied by
/// `item_size` to get byte offsets).
///
/// `vgap` separates faces along a row of the net, `hgap` separates the three
/// face rows, and `trailing_v` pads the end of every buffer row.
#[derive(Debug, Clone, Copy)]
pub struct Spacing {
    /// Bytes per sticker in the output buffer.
    pub item_size: u32,
    /// Extra rows between face rows of the net.
    pub hgap: u32,
    /// Columns between faces along a net row.
    pub vgap: u32,
    /// Padding columns at the end of every buffer row.
    pub trailing_v: u32,
}

/// Display direction per face, keeping each grid upright in the net.
fn print_dir(face: FaceColor) -> Direction {
    match face {
        FaceColor::White => Direction::South,
        FaceColor::Green => Direction::North,
        FaceColor::Red => Direction::West,
        FaceColor::Blue => Direction::South,
        FaceColor::Orange => Direction::West,
        FaceColor::Yellow => Direction::South,
    }
}

/// Net grid position of each face, as (face row, face column) in the cross.
fn net_position(face: FaceColor) -> (u32, u32) {
    match face {
        FaceColor::White => (0, 1),
        FaceColor::Green => (1, 0),
        FaceColor::Red => (1, 1),
        FaceColor::Blue => (1, 2),
        FaceColor::Orange => (1, 3),
        FaceColor::Yellow => (2, 1),
    }
}

/// Walks every sticker in net order, calling `write` with the sticker's byte
/// offset in the target buffer and its color.
pub fn write_cube<F>(cube: &Cube, spacing: Spacing, mut write: F)
where
    F: FnMut(usize, FaceColor),
{
    let sides = cube.side_count();
    let Spacing {
        item_size,
        hgap,
        vgap,
        trailing_v,
    } = spacing;

    let stride = 4 * sides + 3 * vgap + trailing_v;
    let hor = (sides + hgap) * stride;
    let ver = sides + vgap;

    for face in FaceColor::ALL {
        let (net_row, net_col) = net_position(face);
        let start = (net_row * hor + net_col * ver) * item_size;
        let dir = print_dir(face);

        for r in 0..sides {
            for c in 0..sides {
                let color = cube.get_at(face, r, c, dir);
                let offset = start + item_size * (r * stride + c);
                write(offset as usize, color);
            }
        }
    }
}

/// Renders the cube as text, one letter per sticker:
///
/// ```text
///     WWW
///
/// GGG RRR BBB OOO
///
///     YYY
/// ```
pub fn render_text(cube: &Cube) -> String {
    let sides = cube.side_count();

    // One column between faces, one blank row between face rows, and a
    // newline as the trailing pad of every buffer row.
    let spacing = Spacing {
        item_size: 1,
        hgap: 1,
        vgap: 1,
        trailing_v: 1,
    };

    let stride = (4 * sides + 3 + 1) as usize;
    let height = (3 * sides + 2) as usize;

    let mut buf = vec![b' '; stride * height];
    for row in 0..height {
        buf[stride * (row + 1) - 1] = b'\n';
    }

    write_cube(cube, spacing, |offset, color| {
        buf[offset] = color.letter() as u8;
    });

    String::from_utf8(buf).expect("net text is ASCII")
}

/// A tightly packed RGB image of the cube's net.
#[derive(Debug, Clone)]
pub struct NetAtlas {
    /// RGB triples, row-major, no padding.
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Renders the cube's net as an RGB texture atlas, gapless, with the unused
/// cross corners filled magenta.
pub fn render_atlas(cube: &Cube) -> NetAtlas {
    let sides = cube.side_count();
    let spacing = Spacing {
        item_size: 3,
        hgap: 0,
        vgap: 0,
        trailing_v: 0,
    };

    let width = 4 * sides;
    let height = 3 * sides;

    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..width * height {
        pixels.extend_from_slice(&[0xFF, 0x00, 0xFF]);
    }

    write_cube(cube, spacing, |offset, color| {
        let rgba = Vector4::<f32>::from(color);
        pixels[offset] = (rgba.x * 255.0) as u8;
        pixels[offset + 1] = (rgba.y * 255.0) as u8;
        pixels[offset + 2] = (rgba.z * 255.0) as u8;
    });

    NetAtlas {
        pixels,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_3x3_text() {
        let cube = Cube::new(3).unwrap();
        let expected = concat!(
            "    WWW        \n",
            "    WWW        \n",
            "    WWW        \n",
            "               \n",
            "GGG RRR BBB OOO\n",
            "GGG RRR BBB OOO\n",
            "GGG RRR BBB OOO\n",
            "               \n",
            "    YYY        \n",
            "    YYY        \n",
            "    YYY        \n",
        );
        assert_eq!(render_text(&cube), expected);
    }

    #[test]
    fn test_text_conserves_letters_after_rotations() {
        let mut cube = Cube::new(4).unwrap();
        cube.rotate_front(0, true);
        cube.set_facing_side(FaceColor::Blue);
        cube.rotate_front(2, false);

        let text = render_text(&cube);
        for face in FaceColor::ALL {
            let count = text.chars().filter(|&c| c == face.letter()).count();
            assert_eq!(count, 16, "expected 16 {} stickers", face.letter());
        }
    }

    #[test]
    fn test_atlas_layout() {
        let cube = Cube::new(2).unwrap();
        let atlas = render_atlas(&cube);
        assert_eq!(atlas.width, 8);
        assert_eq!(atlas.height, 6);
        assert_eq!(atlas.pixels.len(), (8 * 6 * 3) as usize);

        let pixel = |x: u32, y: u32| {
            let i = ((y * atlas.width + x) * 3) as usize;
            [
                atlas.pixels[i],
                atlas.pixels[i + 1],
                atlas.pixels[i + 2],
            ]
        };

        // Cross corners are magenta fill.
        assert_eq!(pixel(0, 0), [0xFF, 0x00, 0xFF]);
        assert_eq!(pixel(7, 5), [0xFF, 0x00, 0xFF]);
        // White on top, green leading the middle row, yellow on the bottom.
        assert_eq!(pixel(2, 0), [0xFF, 0xFF, 0xFF]);
        assert_eq!(pixel(0, 2), [0x00, 0xFF, 0x00]);
        assert_eq!(pixel(2, 4), [0xFF, 0xFF, 0x00]);
    }

    #[test]
    fn test_size_one_net() {
        let cube = Cube::new(1).unwrap();
        let expected = concat!(
            "  W    \n",
            "       \n",
            "G R B O\n",
            "       \n",
            "  Y    \n",
        );
        assert_eq!(render_text(&cube), expected);
    }
}
