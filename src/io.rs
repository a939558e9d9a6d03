//! PNG export of the net atlas.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cube::Cube;
use crate::net;

/// Renders the cube's net and writes it to `path` as an 8-bit RGB PNG.
pub fn export_net_png(path: impl AsRef<Path>, cube: &Cube) -> Result<()> {
    let atlas = net::render_atlas(cube);

    let file = File::create(path).context("Creating atlas file")?;
    let w = &mut BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, atlas.width, atlas.height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().context("Writing PNG header")?;

    writer.write_image_data(&atlas.pixels)?;

    Ok(())
}
