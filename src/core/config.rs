//! Rules configuration.
//!
//! A match is configured once at construction. The defaults are the
//! standard rules; the options cover the points where variants of the game
//! differ:
//! - `EdgePush`: what happens to a piece pushed off the board
//! - reaction order: which neighbour is resolved first
//! - whether a turn ends in an explicit `Final` phase

use serde::{Deserialize, Serialize};

use super::position::Direction;

/// Fate of a piece pushed past the board edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgePush {
    /// The push is blocked; the piece stays where it is.
    #[default]
    Block,
    /// The piece falls off the board into the cemetery.
    Eliminate,
}

/// Complete rules configuration.
///
/// ## Example
///
/// ```
/// use sword_shield::core::{Direction, EdgePush, GameConfig};
///
/// let config = GameConfig::new()
///     .with_edge_push(EdgePush::Eliminate)
///     .with_turn_end_phase(false);
///
/// assert_eq!(config.edge_push, EdgePush::Eliminate);
/// assert_eq!(config.reaction_order, Direction::REACTION_ORDER);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Behaviour of pushes that would leave the board.
    pub edge_push: EdgePush,

    /// Order in which the acting piece's neighbours are resolved.
    pub reaction_order: [Direction; 4],

    /// Enter a `Final` phase once every piece has acted, instead of
    /// advancing the turn immediately.
    pub turn_end_phase: bool,
}

impl GameConfig {
    /// Standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            edge_push: EdgePush::Block,
            reaction_order: Direction::REACTION_ORDER,
            turn_end_phase: true,
        }
    }

    #[must_use]
    pub fn with_edge_push(mut self, edge_push: EdgePush) -> Self {
        self.edge_push = edge_push;
        self
    }

    /// Set the reaction order.
    ///
    /// Panics unless `order` names each direction exactly once.
    #[must_use]
    pub fn with_reaction_order(mut self, order: [Direction; 4]) -> Self {
        for d in Direction::ALL {
            assert!(order.contains(&d), "reaction order must include {d}");
        }
        self.reaction_order = order;
        self
    }

    #[must_use]
    pub fn with_turn_end_phase(mut self, enabled: bool) -> Self {
        self.turn_end_phase = enabled;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.edge_push, EdgePush::Block);
        assert_eq!(
            config.reaction_order,
            [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
        );
        assert!(config.turn_end_phase);
    }

    #[test]
    fn test_builder() {
        let order = [Direction::Right, Direction::Left, Direction::Down, Direction::Up];
        let config = GameConfig::new()
            .with_reaction_order(order)
            .with_edge_push(EdgePush::Eliminate)
            .with_turn_end_phase(false);

        assert_eq!(config.reaction_order, order);
        assert_eq!(config.edge_push, EdgePush::Eliminate);
        assert!(!config.turn_end_phase);
    }

    #[test]
    #[should_panic(expected = "reaction order must include")]
    fn test_reaction_order_must_be_permutation() {
        let _ = GameConfig::new()
            .with_reaction_order([Direction::Up, Direction::Up, Direction::Left, Direction::Right]);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new().with_edge_push(EdgePush::Eliminate);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
