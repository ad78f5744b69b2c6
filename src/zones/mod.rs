//! Where pieces live when they are not on the board.
//!
//! ## Key Types
//!
//! - `Hand`: a side's unplaced pieces
//! - `Cemetery`: eliminated pieces of both sides
//! - `Location`: the one place a piece currently is

mod cemetery;
mod hand;

pub use cemetery::Cemetery;
pub use hand::Hand;

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// The single place a piece occupies at any moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Hand,
    Board(Position),
    Cemetery,
}
