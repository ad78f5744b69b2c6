//! Player pieces and their letters.
//!
//! A piece is created once, at game start, from its side's roster and is
//! never destroyed: eliminating it only changes where its letter is filed.

use serde::{Deserialize, Serialize};

use super::edge::EdgeItem;
use super::rotation::Rotation;
use crate::core::{Direction, Position, Side};
use crate::error::GameError;

/// Pieces per side.
pub const ROSTER_SIZE: usize = 24;

/// Display letter of a piece: `A`–`X` for Side A, `a`–`x` for Side B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(char);

impl Letter {
    /// Create a letter, panicking if `c` is not a piece letter.
    ///
    /// Use `Letter::try_from` for front-end input.
    #[must_use]
    pub fn new(c: char) -> Self {
        match Self::try_from(c) {
            Ok(letter) => letter,
            Err(_) => panic!("'{c}' is not a piece letter"),
        }
    }

    /// Letter of the `index`-th roster piece of `side`.
    #[must_use]
    pub fn nth(side: Side, index: usize) -> Self {
        assert!(index < ROSTER_SIZE, "roster index {index} out of range");
        let base = match side {
            Side::A => b'A',
            Side::B => b'a',
        };
        Self((base + index as u8) as char)
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Side owning this letter (by case).
    #[must_use]
    pub const fn side(self) -> Side {
        if self.0.is_ascii_uppercase() {
            Side::A
        } else {
            Side::B
        }
    }

    /// Arena slot: `0..24` for Side A, `24..48` for Side B.
    #[must_use]
    pub const fn index(self) -> usize {
        match self.side() {
            Side::A => (self.0 as u8 - b'A') as usize,
            Side::B => ROSTER_SIZE + (self.0 as u8 - b'a') as usize,
        }
    }

    /// Position of this letter within its side's roster.
    #[must_use]
    pub const fn roster_index(self) -> usize {
        self.index() % ROSTER_SIZE
    }
}

impl TryFrom<char> for Letter {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A'..='X' | 'a'..='x' => Ok(Self(c)),
            other => Err(GameError::InvalidLetter(other)),
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rotatable piece with four edge items.
///
/// `edges` is stored clockwise from the top (see `Direction::index`) and
/// always reflects the current rotation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPiece {
    pub letter: Letter,
    edges: [EdgeItem; 4],
    rotation: Rotation,
    /// Board position. `None` while in hand or in the cemetery.
    pub position: Option<Position>,
}

impl PlayerPiece {
    /// Create an unplaced piece with the given unrotated layout.
    #[must_use]
    pub fn new(letter: Letter, edges: [EdgeItem; 4]) -> Self {
        Self {
            letter,
            edges,
            rotation: Rotation::R0,
            position: None,
        }
    }

    #[must_use]
    pub const fn side(&self) -> Side {
        self.letter.side()
    }

    /// Item on the edge facing `direction`.
    #[must_use]
    pub const fn edge(&self, direction: Direction) -> EdgeItem {
        self.edges[direction.index()]
    }

    /// All four edges, clockwise from the top.
    #[must_use]
    pub const fn edges(&self) -> [EdgeItem; 4] {
        self.edges
    }

    /// Rotation accumulated since the piece left the roster.
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Rotate counter-clockwise in place.
    pub fn rotate(&mut self, rotation: Rotation) {
        self.edges = rotate_edges(self.edges, rotation);
        self.rotation = self.rotation.then(rotation);
    }

    /// A copy of this piece turned by `rotation`.
    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let mut piece = self.clone();
        piece.rotate(rotation);
        piece
    }

    /// Check if any edge carries a sword.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.edges.iter().any(|e| e.is_sword())
    }
}

/// Permute an edge array by a counter-clockwise rotation.
#[must_use]
pub fn rotate_edges(edges: [EdgeItem; 4], rotation: Rotation) -> [EdgeItem; 4] {
    let k = rotation.quarter_turns();
    std::array::from_fn(|i| edges[(i + k as usize) % 4].rotated(k))
}
