//! Recording mutations as they happen.

use im::OrdSet;
use smallvec::SmallVec;

use super::Edit;
use crate::board::Square;
use crate::core::{GameState, Phase, Player, Position, Side};
use crate::game::Event;
use crate::pieces::{Letter, PlayerPiece};

/// Mutable view of a `GameState` that keeps a before-image of every write.
///
/// All changes a command makes go through a transaction; `finish` hands
/// back the edits (to build an undoable `Command`) and the events (to build
/// the `ChangeSummary`).
pub struct Transaction<'a> {
    state: &'a mut GameState,
    edits: Vec<Edit>,
    events: SmallVec<[Event; 4]>,
}

impl<'a> Transaction<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self {
            state,
            edits: Vec::new(),
            events: SmallVec::new(),
        }
    }

    /// Read access to the state as modified so far.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Overwrite an on-board square.
    pub fn set_square(&mut self, pos: Position, square: Square) {
        let before = self.state.board.replace(pos, square);
        self.edits.push(Edit::Square { pos, before });
    }

    pub fn update_piece(&mut self, letter: Letter, f: impl FnOnce(&mut PlayerPiece)) {
        let piece = self.state.pieces.get_mut(letter);
        self.edits.push(Edit::Piece {
            letter,
            before: piece.clone(),
        });
        f(piece);
    }

    pub fn update_player(&mut self, side: Side, f: impl FnOnce(&mut Player)) {
        let player = &mut self.state.players[side];
        self.edits.push(Edit::Player {
            side,
            before: player.clone(),
        });
        f(player);
    }

    pub fn update_unacted(&mut self, f: impl FnOnce(&mut OrdSet<Letter>)) {
        self.edits.push(Edit::Unacted(self.state.unacted.clone()));
        f(&mut self.state.unacted);
    }

    /// Add a letter to the cemetery.
    pub fn bury(&mut self, letter: Letter) {
        self.edits.push(Edit::Cemetery(self.state.cemetery.clone()));
        self.state.cemetery.bury(letter);
    }

    /// Change phase, emitting `PhaseChanged` when it differs.
    pub fn set_phase(&mut self, phase: Phase) {
        let from = self.state.phase;
        if from == phase {
            return;
        }
        self.edits.push(Edit::Phase(from));
        self.state.phase = phase;
        self.emit(Event::PhaseChanged { from, to: phase });
    }

    pub fn set_turn(&mut self, turn: u32) {
        self.edits.push(Edit::Turn(self.state.turn));
        self.state.turn = turn;
    }

    pub fn set_winner(&mut self, side: Side) {
        self.edits.push(Edit::Winner(self.state.winner));
        self.state.winner = Some(side);
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Close the transaction, returning its edits and events.
    #[must_use]
    pub fn finish(self) -> (Vec<Edit>, SmallVec<[Event; 4]>) {
        (self.edits, self.events)
    }
}
