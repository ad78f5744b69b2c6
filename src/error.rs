//! Rule violations reported to front ends.
//!
//! Every variant is a recoverable, user-facing failure; `Display` gives the
//! reason string a front end shows before prompting again. A command that
//! returns an error has left the game untouched.

use thiserror::Error;

use crate::core::{Phase, Position};
use crate::pieces::Letter;

/// Why a command or query was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("'{0}' is not a piece letter")]
    InvalidLetter(char),

    #[error("rotation must be 0, 90, 180 or 270 degrees, got {0}")]
    InvalidRotation(u16),

    #[error("unknown direction '{0}'")]
    InvalidDirection(String),

    #[error("position {0} is outside the board")]
    OutOfRange(Position),

    #[error("creation square {0} is occupied")]
    CreationSquareOccupied(Position),

    #[error("piece {0} is not in your hand")]
    NotInHand(Letter),

    #[error("piece {0} is not on the board")]
    PieceNotOnBoard(Letter),

    #[error("piece {0} belongs to the other side")]
    NotYourPiece(Letter),

    #[error("piece {0} has already acted this turn")]
    AlreadyActed(Letter),

    #[error("cannot move onto {0}: square is out of play")]
    DestinationOutOfPlay(Position),

    #[error("cannot move onto {0}: square is occupied")]
    DestinationOccupied(Position),

    #[error("cannot {action} during the {phase} phase")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("nothing to undo")]
    NoUndoAvailable,

    #[error("the game is over")]
    GameOver,

    #[error("square {0} is not empty")]
    SquareNotEmpty(Position),

    #[error("snapshot could not be read or written: {0}")]
    Snapshot(String),
}
