//! The 10×10 board.
//!
//! The board stores square contents only and enforces nothing beyond
//! bounds; game rules live in `Game`. Piece state (edges, rotation) is held
//! by the `PieceArena`, so cloning the board together with the arena gives
//! a fully independent copy.

use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::core::{Position, Side, BOARD_SIZE};
use crate::error::GameError;
use crate::pieces::Letter;

const CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Grid of square contents with the fixed Blank and Home squares laid out.
///
/// Deserializing rejects a grid of the wrong size or one whose Blank and
/// Home squares differ from the standard layout.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Square>", into = "Vec<Square>")]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// A board with only the fixed corner squares set.
    #[must_use]
    pub fn new() -> Self {
        let mut squares = vec![Square::Empty; CELLS];
        for side in Side::BOTH {
            for blank in side.blank_squares() {
                squares[blank.index()] = Square::Blank;
            }
            squares[side.home_square().index()] = Square::Home(side);
        }
        Self { squares }
    }

    /// Contents of `pos`.
    pub fn square_at(&self, pos: Position) -> Result<Square, GameError> {
        if pos.is_on_board() {
            Ok(self.squares[pos.index()])
        } else {
            Err(GameError::OutOfRange(pos))
        }
    }

    /// Overwrite `pos` unconditionally. Callers own the legality checks.
    pub fn place(&mut self, pos: Position, square: Square) -> Result<(), GameError> {
        if !pos.is_on_board() {
            return Err(GameError::OutOfRange(pos));
        }
        self.squares[pos.index()] = square;
        Ok(())
    }

    /// Overwrite an on-board square and return its previous contents.
    ///
    /// Panics if `pos` is off the board.
    pub(crate) fn replace(&mut self, pos: Position, square: Square) -> Square {
        std::mem::replace(&mut self.squares[pos.index()], square)
    }

    /// Where `letter` stands, if it is on the board.
    #[must_use]
    pub fn find_piece(&self, letter: Letter) -> Option<Position> {
        self.positions()
            .find(|&pos| self.squares[pos.index()] == Square::Piece(letter))
    }

    /// Check if nothing may move onto `pos`: off the board, Blank or Home.
    #[must_use]
    pub fn is_out_of_play(&self, pos: Position) -> bool {
        match self.square_at(pos) {
            Ok(square) => square.is_fixed(),
            Err(_) => true,
        }
    }

    /// Every on-board position, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    /// Every piece on the board with its position, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Letter)> + '_ {
        self.positions()
            .filter_map(|pos| self.squares[pos.index()].piece().map(|l| (pos, l)))
    }
}

impl TryFrom<Vec<Square>> for Board {
    type Error = GameError;

    fn try_from(squares: Vec<Square>) -> Result<Self, Self::Error> {
        if squares.len() != CELLS {
            return Err(GameError::Snapshot(format!(
                "board has {} squares, expected {CELLS}",
                squares.len()
            )));
        }
        let layout = Board::new();
        for (pos, (&saved, &fixed)) in layout.positions().zip(squares.iter().zip(&layout.squares)) {
            if (saved.is_fixed() || fixed.is_fixed()) && saved != fixed {
                return Err(GameError::Snapshot(format!("square {pos} breaks the fixed layout")));
            }
        }
        Ok(Self { squares })
    }
}

impl From<Board> for Vec<Square> {
    fn from(board: Board) -> Self {
        board.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
