//! Eliminated pieces.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::pieces::Letter;

/// Pieces removed from play, kept in letter order.
///
/// Letters are only ever added; undo restores an earlier cemetery as a
/// whole rather than removing entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cemetery {
    letters: OrdSet<Letter>,
}

impl Cemetery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bury a piece. Returns false if it was already here.
    pub fn bury(&mut self, letter: Letter) -> bool {
        self.letters.insert(letter).is_none()
    }

    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters in order.
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.letters.iter().copied()
    }

    /// Eliminated pieces of one side.
    pub fn of_side(&self, side: Side) -> impl Iterator<Item = Letter> + '_ {
        self.iter().filter(move |l| l.side() == side)
    }
}
