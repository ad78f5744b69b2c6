//! Sides, per-side storage and player records.
//!
//! ## Side
//!
//! The two competitors. Side A owns the uppercase letters and the top-left
//! corner; Side B owns the lowercase letters and the bottom-right corner.
//!
//! ## SideMap
//!
//! Per-side data storage with O(1) access, indexable by `Side`.
//!
//! ## Player
//!
//! A side's hand, its pieces on the board and its creation square.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::position::Position;
use crate::pieces::Letter;
use crate::zones::Hand;

/// One of the two competitors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    /// Side to move on move counter `turn`: even turns are Side A's.
    #[must_use]
    pub const fn from_turn(turn: u32) -> Self {
        if turn % 2 == 0 {
            Side::A
        } else {
            Side::B
        }
    }

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    /// Square where this side introduces pieces.
    #[must_use]
    pub const fn creation_square(self) -> Position {
        match self {
            Side::A => Position::new(2, 2),
            Side::B => Position::new(7, 7),
        }
    }

    /// Square holding this side's home marker.
    #[must_use]
    pub const fn home_square(self) -> Position {
        match self {
            Side::A => Position::new(1, 1),
            Side::B => Position::new(8, 8),
        }
    }

    /// Permanently forbidden squares in this side's corner.
    #[must_use]
    pub const fn blank_squares(self) -> [Position; 3] {
        match self {
            Side::A => [Position::new(0, 0), Position::new(0, 1), Position::new(1, 0)],
            Side::B => [Position::new(9, 9), Position::new(9, 8), Position::new(8, 9)],
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "Side A"),
            Side::B => write!(f, "Side B"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use sword_shield::core::{Side, SideMap};
///
/// let mut score: SideMap<u32> = SideMap::with_value(0);
/// score[Side::B] += 3;
/// assert_eq!(score[Side::A], 0);
/// assert_eq!(score[Side::B], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::A), factory(Side::B)],
        }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

/// A side's piece bookkeeping.
///
/// Invariant: a letter of this side is in `hand`, in `on_board`, or in the
/// cemetery, and never in two of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub side: Side,
    pub hand: Hand,
    /// This side's pieces currently on the board, in letter order.
    pub on_board: OrdSet<Letter>,
    pub creation_square: Position,
}

impl Player {
    /// A player holding its whole roster.
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self {
            side,
            hand: Hand::full(side),
            on_board: OrdSet::new(),
            creation_square: side.creation_square(),
        }
    }

    /// Move a piece from the hand to the board set.
    ///
    /// Returns false if the letter was not in hand.
    pub fn deploy(&mut self, letter: Letter) -> bool {
        if self.hand.take(letter) {
            self.on_board.insert(letter);
            true
        } else {
            false
        }
    }

    /// Drop a piece from the board set. Returns true if it was there.
    pub fn remove_from_board(&mut self, letter: Letter) -> bool {
        self.on_board.remove(&letter).is_some()
    }

    #[must_use]
    pub fn has_on_board(&self, letter: Letter) -> bool {
        self.on_board.contains(&letter)
    }
}
