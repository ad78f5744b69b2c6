//! Game state: everything an undo must be able to restore.
//!
//! ## Phase
//!
//! `Creation → Action → Final → Creation (other side) → … → GameOver`.
//!
//! ## GameState
//!
//! Board, piece arena, both players, cemetery, phase, move counter, the
//! unacted set and the winner. Letter sets use `im` persistent structures,
//! so cloning a state is cheap and two states compare structurally.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::player::{Player, Side, SideMap};
use crate::board::{Board, Square};
use crate::error::GameError;
use crate::pieces::{Letter, PieceArena, PlayerPiece};
use crate::zones::{Cemetery, Location};

/// Turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The side to move may create one piece or pass.
    Creation,
    /// The side to move moves or rotates its unacted pieces.
    Action,
    /// Every piece has acted; only pass and undo remain.
    Final,
    /// A side has won. Nothing further is accepted.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Creation => "creation",
            Phase::Action => "action",
            Phase::Final => "final",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Complete mutable state of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) pieces: PieceArena,
    pub(crate) players: SideMap<Player>,
    pub(crate) cemetery: Cemetery,
    pub(crate) phase: Phase,
    /// Move counter; the side to move is `Side::from_turn(turn)`.
    pub(crate) turn: u32,
    /// Pieces of the side to move that have not acted this turn.
    pub(crate) unacted: OrdSet<Letter>,
    pub(crate) winner: Option<Side>,
}

impl GameState {
    /// Opening position: empty board, full hands, Side A to create.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            pieces: PieceArena::new(),
            players: SideMap::new(Player::new),
            cemetery: Cemetery::new(),
            phase: Phase::Creation,
            turn: 0,
            unacted: OrdSet::new(),
            winner: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn pieces(&self) -> &PieceArena {
        &self.pieces
    }

    #[must_use]
    pub fn piece(&self, letter: Letter) -> &PlayerPiece {
        self.pieces.get(letter)
    }

    #[must_use]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side]
    }

    #[must_use]
    pub fn cemetery(&self) -> &Cemetery {
        &self.cemetery
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Side whose turn it is.
    #[must_use]
    pub fn current_side(&self) -> Side {
        Side::from_turn(self.turn)
    }

    #[must_use]
    pub fn unacted(&self) -> &OrdSet<Letter> {
        &self.unacted
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Where a piece currently is.
    #[must_use]
    pub fn location(&self, letter: Letter) -> Location {
        if let Some(pos) = self.pieces.get(letter).position {
            Location::Board(pos)
        } else if self.cemetery.contains(letter) {
            Location::Cemetery
        } else {
            Location::Hand
        }
    }

    /// Encode the state as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        bincode::serialize(self).map_err(|e| GameError::Snapshot(e.to_string()))
    }

    /// Decode a snapshot written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        bincode::deserialize(bytes).map_err(|e| GameError::Snapshot(e.to_string()))
    }

    /// Check the cross-collection invariants.
    ///
    /// Each player must hold only its own letters and its side's creation
    /// square. Every piece must be filed in exactly one of its owner's hand,
    /// its owner's on-board set or the cemetery; board squares, piece
    /// positions and on-board sets must agree; the unacted set must only hold
    /// pieces the side to move has on the board. Returns a description of the
    /// first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        for (side, player) in self.players.iter() {
            if player.side != side || player.creation_square != side.creation_square() {
                return Err(format!("player record for {side} is misplaced"));
            }
            let mut letters = player.hand.iter().chain(player.on_board.iter().copied());
            if let Some(stray) = letters.find(|l| l.side() != side) {
                return Err(format!("piece {stray} is filed with {side}"));
            }
        }

        for piece in self.pieces.iter() {
            let letter = piece.letter;
            let player = &self.players[letter.side()];
            let places = [
                player.hand.contains(letter),
                player.has_on_board(letter),
                self.cemetery.contains(letter),
            ];
            let count = places.iter().filter(|&&p| p).count();
            if count != 1 {
                return Err(format!("piece {letter} is filed in {count} places"));
            }

            match piece.position {
                Some(pos) => {
                    if !player.has_on_board(letter) {
                        return Err(format!("piece {letter} has a position but is not on board"));
                    }
                    if self.board.square_at(pos) != Ok(Square::Piece(letter)) {
                        return Err(format!("board disagrees with position of {letter} at {pos}"));
                    }
                }
                None => {
                    if player.has_on_board(letter) {
                        return Err(format!("piece {letter} is on board without a position"));
                    }
                }
            }
        }

        for (pos, letter) in self.board.pieces() {
            if self.pieces.get(letter).position != Some(pos) {
                return Err(format!("square {pos} holds {letter} but the piece is elsewhere"));
            }
        }

        let mover = &self.players[self.current_side()];
        if let Some(stray) = self.unacted.iter().find(|l| !mover.has_on_board(**l)) {
            return Err(format!("unacted piece {stray} is not on the mover's board set"));
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert_eq!(state.phase(), Phase::Creation);
        assert_eq!(state.current_side(), Side::A);
        assert_eq!(state.turn(), 0);
        assert!(state.unacted().is_empty());
        assert_eq!(state.winner(), None);
        assert!(state.cemetery().is_empty());
        assert_eq!(state.location(Letter::new('L')), Location::Hand);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_invariant_detects_double_filing() {
        let mut state = GameState::new();
        let letter = Letter::new('c');
        state.cemetery.bury(letter);

        let err = state.check_invariants().unwrap_err();
        assert!(err.contains("filed in 2 places"), "{err}");
    }

    #[test]
    fn test_invariant_detects_board_mismatch() {
        let mut state = GameState::new();
        let letter = Letter::new('D');
        state.players[Side::A].deploy(letter);
        state.pieces.get_mut(letter).position = Some(Position::new(4, 4));

        let err = state.check_invariants().unwrap_err();
        assert!(err.contains("board disagrees"), "{err}");
    }

    #[test]
    fn test_clone_compares_structurally() {
        let state = GameState::new();
        let mut copy = state.clone();
        assert_eq!(state, copy);

        copy.turn += 1;
        assert_ne!(state, copy);
    }

    #[test]
    fn test_binary_snapshot() {
        let mut state = GameState::new();
        state.players[Side::B].deploy(Letter::new('q'));
        state.pieces.get_mut(Letter::new('q')).position = Some(Position::new(6, 6));
        state.board.replace(Position::new(6, 6), Square::Piece(Letter::new('q')));
        state.turn = 3;

        let bytes = state.to_bytes().unwrap();
        assert_eq!(GameState::from_bytes(&bytes).unwrap(), state);
        assert!(matches!(GameState::from_bytes(&bytes[..4]), Err(GameError::Snapshot(_))));
    }

    #[test]
    fn test_invariant_detects_foreign_letter() {
        let mut state = GameState::new();
        state.players[Side::A].hand.put(Letter::new('b'));

        let err = state.check_invariants().unwrap_err();
        assert!(err.contains("is filed with Side A"), "{err}");
    }

    #[test]
    fn test_snapshot_rejects_misplaced_piece() {
        let mut state = GameState::new();
        state.pieces.get_mut(Letter::new('A')).letter = Letter::new('B');

        let bytes = state.to_bytes().unwrap();
        assert!(matches!(GameState::from_bytes(&bytes), Err(GameError::Snapshot(_))));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Action.to_string(), "action");
        assert_eq!(Phase::GameOver.to_string(), "game over");
    }
}
