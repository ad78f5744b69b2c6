//! A side's unplaced pieces.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::pieces::{Letter, ROSTER_SIZE};

/// Letters of the pieces a side has not yet placed, in letter order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    letters: OrdSet<Letter>,
}

impl Hand {
    /// An empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A hand holding the whole roster of `side`.
    #[must_use]
    pub fn full(side: Side) -> Self {
        Self {
            letters: (0..ROSTER_SIZE).map(|i| Letter::nth(side, i)).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Remove a letter. Returns true if it was present.
    pub fn take(&mut self, letter: Letter) -> bool {
        self.letters.remove(&letter).is_some()
    }

    /// Return a letter to the hand.
    pub fn put(&mut self, letter: Letter) {
        self.letters.insert(letter);
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
}
