//! Virtual NxN twisty-puzzle core.
//!
//! Models a generalized Rubik's cube of any side count: sticker storage,
//! slice rotation at arbitrary depth, and serialization of the state into
//! the unfolded-cube net for display or texturing.
//!
//! Two representations of the same puzzle are provided:
//!
//! - [`cube::Cube`] stores every sticker of every face in a flat row-major
//!   grid and rotates slices relative to a selectable front face. This is
//!   the general model and the one the renderers consume.
//! - [`boundary::BoundaryCube`] tracks only each face's edge and corner
//!   stickers by compass direction and rotates named faces through the
//!   face-adjacency relation. It is limited to the 3x3-equivalent puzzle.
//!
//! Recoverable failures (bad creation size, unparseable move notation) come
//! back as `Result`s; broken caller contracts (bad depth, row, column or an
//! impossible neighbor lookup) panic with a diagnostic.

pub mod adjacency;
pub mod boundary;
pub mod color;
pub mod cube;
pub mod dir;
pub mod io;
pub mod net;

pub use boundary::BoundaryCube;
pub use color::FaceColor;
pub use cube::{Cube, CubeError, Move, ParseMoveError};
pub use dir::Direction;
pub use net::{NetAtlas, Spacing};
