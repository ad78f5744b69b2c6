//! Square contents.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::pieces::Letter;

/// What occupies a board square.
///
/// Every resolver and renderer matches all four cases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Free; always a legal landing square.
    #[default]
    Empty,
    /// Permanently forbidden.
    Blank,
    /// A side's home marker. Never moves.
    Home(Side),
    /// A player piece, by letter.
    Piece(Letter),
}

impl Square {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Letter of the piece here, if any.
    #[must_use]
    pub const fn piece(self) -> Option<Letter> {
        match self {
            Square::Piece(letter) => Some(letter),
            _ => None,
        }
    }

    /// Check if nothing may ever stand here.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Square::Blank | Square::Home(_))
    }
}
