//! The undo stack.

use serde::{Deserialize, Serialize};

use super::Command;

/// Last-in-first-out log of committed commands.
///
/// Only the current turn's commands are kept; `Game` clears the log when
/// the turn advances.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLog {
    commands: Vec<Command>,
}

impl CommandLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Remove and return the most recent command.
    pub fn pop(&mut self) -> Option<Command> {
        self.commands.pop()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
