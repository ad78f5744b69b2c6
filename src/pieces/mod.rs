//! Piece model: edge items, rotations, letters and the fixed rosters.
//!
//! ## Key Types
//!
//! - `EdgeItem`: what sits on one edge (nothing, a shield or a sword)
//! - `Rotation`: one of the four legal counter-clockwise turns
//! - `Letter`: a piece's identity; its case names the owning side
//! - `PlayerPiece`: letter, current edges, accumulated rotation, position
//! - `PieceArena`: the single store of all 48 pieces

mod arena;
mod edge;
mod piece;
mod roster;
mod rotation;

pub use arena::PieceArena;
pub use edge::{EdgeItem, Orientation};
pub use piece::{rotate_edges, Letter, PlayerPiece, ROSTER_SIZE};
pub use roster::{layout, roster};
pub use rotation::Rotation;
