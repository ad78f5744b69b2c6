//! Player intents.
//!
//! An `Action` is what a front end asks the game to do. Actions are plain
//! values: they can be validated without being applied, recorded, and
//! replayed against a fresh game to reproduce a match exactly.

use serde::{Deserialize, Serialize};

use super::player::Side;
use super::position::Direction;
use super::state::Phase;
use crate::pieces::{Letter, Rotation};

/// A complete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Bring a piece from the hand onto the creation square.
    Create { letter: Letter, rotation: Rotation },
    /// Step a piece one square.
    Move { letter: Letter, direction: Direction },
    /// Turn a piece in place.
    Rotate { letter: Letter, rotation: Rotation },
    /// Leave the current phase.
    Pass,
    /// Revert the most recent create, move or rotate.
    Undo,
}

/// The kind of an action, without its arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
    Create,
    Move,
    Rotate,
    Pass,
    Undo,
}

impl Verb {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Verb::Create => "create",
            Verb::Move => "move",
            Verb::Rotate => "rotate",
            Verb::Pass => "pass",
            Verb::Undo => "undo",
        }
    }

    /// Check if this kind of action may be taken in `phase`.
    ///
    /// Nothing is allowed once the game is over.
    #[must_use]
    pub const fn allowed_in(self, phase: Phase) -> bool {
        match (self, phase) {
            (_, Phase::GameOver) => false,
            (Verb::Create, phase) => matches!(phase, Phase::Creation),
            (Verb::Move | Verb::Rotate, phase) => matches!(phase, Phase::Action),
            (Verb::Pass | Verb::Undo, _) => true,
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Action {
    #[must_use]
    pub const fn verb(&self) -> Verb {
        match self {
            Action::Create { .. } => Verb::Create,
            Action::Move { .. } => Verb::Move,
            Action::Rotate { .. } => Verb::Rotate,
            Action::Pass => Verb::Pass,
            Action::Undo => Verb::Undo,
        }
    }

    /// Piece the action names, if any.
    #[must_use]
    pub const fn letter(&self) -> Option<Letter> {
        match self {
            Action::Create { letter, .. }
            | Action::Move { letter, .. }
            | Action::Rotate { letter, .. } => Some(*letter),
            Action::Pass | Action::Undo => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Create { letter, rotation } => {
                write!(f, "create {letter} {}", rotation.degrees())
            }
            Action::Move { letter, direction } => write!(f, "move {letter} {direction}"),
            Action::Rotate { letter, rotation } => {
                write!(f, "rotate {letter} {}", rotation.degrees())
            }
            Action::Pass => write!(f, "pass"),
            Action::Undo => write!(f, "undo"),
        }
    }
}

/// A successful action with its context, for history and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that took the action.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// Move counter when the action was taken.
    pub turn: u32,

    /// Sequence number within the match.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(side: Side, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            side,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        let create = Action::Create {
            letter: Letter::new('L'),
            rotation: Rotation::R90,
        };
        let mv = Action::Move {
            letter: Letter::new('a'),
            direction: Direction::Left,
        };
        assert_eq!(create.to_string(), "create L 90");
        assert_eq!(mv.to_string(), "move a left");
        assert_eq!(Action::Pass.to_string(), "pass");
    }

    #[test]
    fn test_action_letter() {
        let rotate = Action::Rotate {
            letter: Letter::new('c'),
            rotation: Rotation::R0,
        };
        assert_eq!(rotate.letter(), Some(Letter::new('c')));
        assert_eq!(Action::Undo.letter(), None);
        assert_eq!(rotate.verb(), Verb::Rotate);
    }

    #[test]
    fn test_verb_phase_gating() {
        assert!(Verb::Create.allowed_in(Phase::Creation));
        assert!(!Verb::Create.allowed_in(Phase::Action));
        assert!(!Verb::Move.allowed_in(Phase::Creation));
        assert!(!Verb::Rotate.allowed_in(Phase::Final));
        assert!(Verb::Rotate.allowed_in(Phase::Action));
        assert!(Verb::Pass.allowed_in(Phase::Final));
        assert!(Verb::Undo.allowed_in(Phase::Creation));
        assert!(!Verb::Pass.allowed_in(Phase::GameOver));
        assert_eq!(Verb::Move.to_string(), "move");
    }

    #[test]
    fn test_action_record_serialization() {
        let action = Action::Move {
            letter: Letter::new('B'),
            direction: Direction::Down,
        };
        let record = ActionRecord::new(Side::A, action, 4, 9);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
