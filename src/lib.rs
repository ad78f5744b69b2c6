//! # sword-shield
//!
//! Rules engine for a two-player tactics game played on a 10×10 board.
//! Each side brings square pieces with swords and shields mounted on their
//! edges into play, then moves and turns them so that adjacent pieces
//! fight. The first side to strike the opposing Home with a sword wins.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: no randomness anywhere. The same action list always
//!    produces the same game, so a match is fully described by its history.
//!
//! 2. **Validate, then mutate**: a rejected command leaves the game exactly
//!    as it was.
//!
//! 3. **One undo per command**: every create, move or rotate is recorded
//!    together with its whole reaction cascade.
//!
//! ## Architecture
//!
//! - **Piece arena**: all 48 pieces live in one store indexed by letter;
//!   hands, the board and the cemetery only hold letters.
//!
//! - **Persistent Data Structures**: letter sets and history use `im`, so a
//!   `GameState` snapshot clones in O(1) and compares structurally.
//!
//! - **Before-image undo**: a `Transaction` records the previous value of
//!   every field it writes; reverting replays them newest first.
//!
//! ## Modules
//!
//! - `core`: positions, sides, configuration, actions and state
//! - `pieces`: edge items, rotations, letters, the fixed rosters
//! - `zones`: hands and the cemetery
//! - `board`: square contents, the grid and its text rendering
//! - `reactions`: the adjacency combat table
//! - `history`: commands, the undo log and transactions
//! - `game`: the phase machine and front-end command surface
//!
//! ## Example
//!
//! ```
//! use sword_shield::{Direction, Game, Phase, Side};
//!
//! let mut game = Game::new();
//! game.create('L', 0).unwrap();
//! game.move_piece('L', Direction::Right).unwrap();
//! assert_eq!(game.phase(), Phase::Final);
//!
//! let summary = game.pass().unwrap();
//! assert!(summary.turn_advanced());
//! assert_eq!(game.current_side(), Side::B);
//! ```

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod history;
pub mod pieces;
pub mod reactions;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Direction, EdgePush, GameConfig, GameState, Phase, Player, Position, Side,
    SideMap, Verb,
};

pub use crate::board::{Board, BoardView, Square};

pub use crate::error::GameError;

pub use crate::game::{ChangeSummary, Event, Game, GameBuilder};

pub use crate::history::{Command, CommandKind, CommandLog};

pub use crate::pieces::{EdgeItem, Letter, Orientation, PlayerPiece, Rotation};

pub use crate::reactions::{Reaction, ReactionResolver};

pub use crate::zones::{Cemetery, Hand, Location};
