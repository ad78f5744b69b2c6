//! Fixed-width text rendering of the board.
//!
//! Each square is a 3×3 block of glyphs:
//!
//! ```text
//!  |      piece: centre letter, edge glyphs around it
//! -L-     `|` vertical sword, `-` horizontal sword, `#` shield
//!  #
//! ```
//!
//! Empty squares show a centre `.`, blanks `xxx`, homes `*1*` / `*2*`
//! framed by `*`. Useful for test fixtures and console front ends.

use std::fmt;

use super::grid::Board;
use super::square::Square;
use crate::core::{Direction, Position, Side, BOARD_SIZE};
use crate::pieces::PieceArena;

/// Borrowing view that renders a board with its pieces.
pub struct BoardView<'a> {
    board: &'a Board,
    arena: &'a PieceArena,
}

impl<'a> BoardView<'a> {
    #[must_use]
    pub fn new(board: &'a Board, arena: &'a PieceArena) -> Self {
        Self { board, arena }
    }

    /// The 3×3 glyph block for one square.
    #[must_use]
    pub fn cell(&self, pos: Position) -> [[char; 3]; 3] {
        let square = self.board.square_at(pos).unwrap_or(Square::Blank);
        match square {
            Square::Empty => [[' '; 3], [' ', '.', ' '], [' '; 3]],
            Square::Blank => [['x'; 3]; 3],
            Square::Home(side) => {
                let mark = match side {
                    Side::A => '1',
                    Side::B => '2',
                };
                [['*'; 3], ['*', mark, '*'], ['*'; 3]]
            }
            Square::Piece(letter) => {
                let piece = self.arena.get(letter);
                let g = |d: Direction| piece.edge(d).glyph();
                [
                    [' ', g(Direction::Up), ' '],
                    [g(Direction::Left), letter.as_char(), g(Direction::Right)],
                    [' ', g(Direction::Down), ' '],
                ]
            }
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let cells: Vec<_> = (0..BOARD_SIZE)
                .map(|col| self.cell(Position::new(row, col)))
                .collect();
            for line in 0..3 {
                if row > 0 || line > 0 {
                    writeln!(f)?;
                }
                for cell in &cells {
                    for c in cell[line] {
                        write!(f, "{c}")?;
                    }
                }
            }
        }
        Ok(())
    }
}
