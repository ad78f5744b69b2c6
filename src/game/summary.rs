//! What a command changed.
//!
//! Every successful command returns a `ChangeSummary`. Front ends use it to
//! decide what to redraw or announce, then re-query the game for state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, Direction, Phase, Position, Side};
use crate::history::CommandKind;
use crate::pieces::{Letter, Rotation};

/// A single observable change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Created {
        letter: Letter,
        pos: Position,
        rotation: Rotation,
    },
    Moved {
        letter: Letter,
        from: Position,
        to: Position,
    },
    Rotated {
        letter: Letter,
        rotation: Rotation,
    },
    /// A piece stepped onto the opposing Home.
    Struck {
        letter: Letter,
        home: Side,
    },
    Eliminated {
        letter: Letter,
        pos: Position,
    },
    Pushed {
        letter: Letter,
        from: Position,
        to: Position,
    },
    /// A push had nowhere to go; the piece stayed put.
    PushBlocked {
        letter: Letter,
        direction: Direction,
    },
    Won(Side),
    PhaseChanged {
        from: Phase,
        to: Phase,
    },
    TurnAdvanced {
        turn: u32,
        side: Side,
    },
    Undone(CommandKind),
}

/// Result of a successful command.
///
/// ## Example
///
/// ```
/// use sword_shield::game::{Event, Game};
///
/// let mut game = Game::new();
/// let summary = game.create('L', 0).unwrap();
/// assert!(summary.events().iter().any(|e| matches!(e, Event::Created { .. })));
/// assert_eq!(summary.winner(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    /// The command that produced these events.
    pub action: Action,
    events: SmallVec<[Event; 4]>,
}

impl ChangeSummary {
    #[must_use]
    pub fn new(action: Action, events: SmallVec<[Event; 4]>) -> Self {
        Self { action, events }
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Letters sent to the cemetery, in order.
    pub fn eliminated(&self) -> impl Iterator<Item = Letter> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::Eliminated { letter, .. } => Some(*letter),
            _ => None,
        })
    }

    /// Winner declared by this command, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.events.iter().find_map(|e| match e {
            Event::Won(side) => Some(*side),
            _ => None,
        })
    }

    /// Check if the command handed the move to the other side.
    #[must_use]
    pub fn turn_advanced(&self) -> bool {
        self.events.iter().any(|e| matches!(e, Event::TurnAdvanced { .. }))
    }

    /// Final phase reached by this command, if it changed.
    #[must_use]
    pub fn phase_change(&self) -> Option<Phase> {
        self.events.iter().rev().find_map(|e| match e {
            Event::PhaseChanged { to, .. } => Some(*to),
            _ => None,
        })
    }
}
