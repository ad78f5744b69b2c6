//! Committed commands and their before-images.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::board::Square;
use crate::core::{Action, Direction, GameState, Phase, Player, Position, Side};
use crate::pieces::{Letter, PlayerPiece, Rotation};
use crate::zones::Cemetery;

/// The value a piece of state held before a command changed it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edit {
    Square { pos: Position, before: Square },
    Piece { letter: Letter, before: PlayerPiece },
    Player { side: Side, before: Player },
    Unacted(OrdSet<Letter>),
    Cemetery(Cemetery),
    Phase(Phase),
    Turn(u32),
    Winner(Option<Side>),
}

impl Edit {
    /// Write the before-image back into `state`.
    pub fn restore(self, state: &mut GameState) {
        match self {
            Edit::Square { pos, before } => {
                state.board.replace(pos, before);
            }
            Edit::Piece { letter, before } => *state.pieces.get_mut(letter) = before,
            Edit::Player { side, before } => state.players[side] = before,
            Edit::Unacted(before) => state.unacted = before,
            Edit::Cemetery(before) => state.cemetery = before,
            Edit::Phase(before) => state.phase = before,
            Edit::Turn(before) => state.turn = before,
            Edit::Winner(before) => state.winner = before,
        }
    }
}

/// What a command did, in front-end terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    Create { letter: Letter, rotation: Rotation },
    Move { letter: Letter, direction: Direction },
    Rotate { letter: Letter, rotation: Rotation },
}

impl From<CommandKind> for Action {
    fn from(kind: CommandKind) -> Self {
        match kind {
            CommandKind::Create { letter, rotation } => Action::Create { letter, rotation },
            CommandKind::Move { letter, direction } => Action::Move { letter, direction },
            CommandKind::Rotate { letter, rotation } => Action::Rotate { letter, rotation },
        }
    }
}

/// One undoable unit of play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub kind: CommandKind,

    /// Side that issued the command.
    pub side: Side,

    /// Move counter when the command ran.
    pub turn: u32,

    edits: Vec<Edit>,
}

impl Command {
    #[must_use]
    pub fn new(kind: CommandKind, side: Side, turn: u32, edits: Vec<Edit>) -> Self {
        Self {
            kind,
            side,
            turn,
            edits,
        }
    }

    /// Undo the command by restoring its before-images newest first.
    pub fn revert(self, state: &mut GameState) {
        for edit in self.edits.into_iter().rev() {
            edit.restore(state);
        }
    }
}
