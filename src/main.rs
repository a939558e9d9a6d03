//! Command-line demo for the twisty-cube core.
//!
//! Builds a cube, optionally scrambles or patterns it, applies a move
//! sequence, and prints the resulting net. Can also export the net as an RGB
//! PNG atlas.

use std::path::PathBuf;

use anyhow::{Result, ensure};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use structopt::StructOpt;

use twisty::{Cube, Move, io, net};

#[derive(Debug, StructOpt)]
#[structopt(name = "twisty", about = "NxN twisty cube playground")]
struct Opt {
    /// Squares per side of the cube.
    #[structopt(short, long, default_value = "3")]
    size: u32,

    /// Apply this many random moves before anything else.
    #[structopt(long)]
    scramble: Option<u32>,

    /// Seed for the scramble.
    #[structopt(long, default_value = "0")]
    seed: u64,

    /// Overwrite the stickers with the checkerboard test pattern.
    #[structopt(long)]
    checkerboard: bool,

    /// Write the net as an RGB PNG atlas to this path.
    #[structopt(long)]
    atlas: Option<PathBuf>,

    /// Moves to apply, e.g. `W+ R2- g+` (face letter, optional depth,
    /// `+` clockwise / `-` counter-clockwise).
    moves: Vec<Move>,
}

fn main() -> Result<()> {
    env_logger::builder().format_timestamp(None).init();

    let opt = Opt::from_args();
    let mut cube = Cube::new(opt.size)?;

    if let Some(count) = opt.scramble {
        log::info!("scrambling with {count} moves, seed {}", opt.seed);
        let mut rng = SmallRng::seed_from_u64(opt.seed);
        cube.scramble(&mut rng, count);
    }

    if opt.checkerboard {
        cube.checkerboard();
    }

    for mv in &opt.moves {
        ensure!(
            mv.depth <= cube.max_depth(),
            "Move {}{}{} is too deep for a {}-cube (max depth {})",
            mv.face.letter(),
            mv.depth,
            if mv.clockwise { '+' } else { '-' },
            opt.size,
            cube.max_depth(),
        );
        mv.apply(&mut cube);
    }

    print!("{}", net::render_text(&cube));

    if let Some(path) = &opt.atlas {
        io::export_net_png(path, &cube)?;
        log::info!("wrote atlas to {}", path.display());
    }

    Ok(())
}
