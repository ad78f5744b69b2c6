//! Running a match.
//!
//! ## Key Types
//!
//! - `Game`: the phase machine and command surface front ends talk to
//! - `GameBuilder`: sets up arbitrary positions for puzzles and tests
//! - `ChangeSummary` / `Event`: what a command changed
//!
//! ## Turn Structure
//!
//! Each turn the side to move may create one piece (Creation), then act
//! once with each of its pieces on the board (Action), then pass (Final).
//! A side wins by striking the opposing Home with a sword.

mod builder;
#[allow(clippy::module_inception)]
mod game;
mod legal;
mod summary;

pub use builder::GameBuilder;
pub use game::Game;
pub use summary::{ChangeSummary, Event};
