//! Undo support.
//!
//! ## Key Types
//!
//! - `Edit`: a primitive before-image of one piece of state
//! - `Command`: one committed create, move or rotate with all its edits
//! - `CommandLog`: LIFO of the current turn's commands
//! - `Transaction`: records edits and events while a command mutates state
//!
//! A command owns every edit made while it ran, reaction cascade included,
//! so reverting it restores the state exactly as it was before.

mod command;
mod log;
mod transaction;

pub use command::{Command, CommandKind, Edit};
pub use log::CommandLog;
pub use transaction::Transaction;
