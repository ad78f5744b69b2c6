//! Board coordinates and the four compass directions.
//!
//! ## Position
//!
//! A `(row, col)` pair. Coordinates are signed so that stepping off the
//! board still yields a value; callers check `is_on_board()` (or let
//! `Board::square_at` reject it).
//!
//! ## Direction
//!
//! UP decreases the row, DOWN increases it, LEFT decreases the column and
//! RIGHT increases it. `Direction::ALL` is in clockwise order starting at
//! UP, which is also the order of a piece's edge array.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GameError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 10;

/// A square coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    /// Create a position. Off-board values are allowed.
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if both coordinates lie in `[0, BOARD_SIZE)`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// The neighbouring position one step in `direction`.
    ///
    /// ```
    /// use sword_shield::core::{Direction, Position};
    ///
    /// let p = Position::new(4, 4);
    /// assert_eq!(p.step(Direction::Up), Position::new(3, 4));
    /// assert_eq!(p.step(Direction::Right), Position::new(4, 5));
    /// assert!(!Position::new(0, 0).step(Direction::Left).is_on_board());
    /// ```
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Row-major index into a 10×10 grid.
    ///
    /// Panics if the position is off the board.
    #[must_use]
    pub fn index(self) -> usize {
        assert!(self.is_on_board(), "position {self} is off the board");
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Iterate over the four orthogonal neighbours in `order`.
    pub fn neighbours(self, order: [Direction; 4]) -> impl Iterator<Item = (Direction, Position)> {
        order.into_iter().map(move |d| (d, self.step(d)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Axis a direction runs along; used to decide whether a sword is armed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Clockwise from UP. Matches the layout of a piece's edge array.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Default order in which simultaneous reactions are evaluated.
    pub const REACTION_ORDER: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `(row, col)` delta of a single step.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Index into a clockwise edge array (UP = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Axis this direction runs along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}
