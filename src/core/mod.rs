//! Core engine types: positions, sides, configuration, actions and state.
//!
//! These are the value types every other module builds on. `GameState`
//! holds the whole mutable state of a match; `Game` (in `game`) is the only
//! code that mutates it.

pub mod action;
pub mod config;
pub mod player;
pub mod position;
pub mod state;

pub use action::{Action, ActionRecord, Verb};
pub use config::{EdgePush, GameConfig};
pub use player::{Player, Side, SideMap};
pub use position::{Axis, Direction, Position, BOARD_SIZE};
pub use state::{GameState, Phase};
