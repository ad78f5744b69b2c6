//! Reaction outcomes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Direction, Side};
use crate::pieces::Letter;

/// Result of resolving a piece against one neighbour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reaction {
    /// Nothing happens at this edge.
    None,
    /// These pieces go to the cemetery, in order.
    Eliminate(SmallVec<[Letter; 2]>),
    /// `letter` is pushed one square toward `direction`.
    Push { letter: Letter, direction: Direction },
    /// The game ends with this side as winner.
    Win(Side),
}

impl Reaction {
    /// Eliminate a single piece.
    #[must_use]
    pub fn eliminate(letter: Letter) -> Self {
        let mut letters = SmallVec::new();
        letters.push(letter);
        Reaction::Eliminate(letters)
    }

    /// Eliminate two pieces.
    #[must_use]
    pub fn eliminate_both(first: Letter, second: Letter) -> Self {
        Reaction::Eliminate(SmallVec::from_buf([first, second]))
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Reaction::None)
    }
}
