//! Scenario setup.

use crate::board::Square;
use crate::core::{GameConfig, GameState, Phase, Position, Side};
use crate::error::GameError;
use crate::pieces::{Letter, Rotation};

use super::Game;

/// Builder for a game starting from an arbitrary position.
///
/// Placed pieces come out of their owner's hand; no reactions run while the
/// position is laid out.
///
/// ## Example
///
/// ```
/// use sword_shield::core::{Phase, Position, Side};
/// use sword_shield::game::GameBuilder;
/// use sword_shield::pieces::Rotation;
///
/// let game = GameBuilder::new()
///     .side_to_move(Side::B)
///     .place('L', Position::new(4, 4), Rotation::R0)
///     .place('t', Position::new(4, 5), Rotation::R0)
///     .phase(Phase::Action)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.current_side(), Side::B);
/// assert_eq!(game.unacted().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    side: Option<Side>,
    phase: Option<Phase>,
    placements: Vec<(char, Position, Rotation)>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Phase the game starts in. Defaults to `Creation`.
    ///
    /// Panics on `GameOver`: a built game always has a move to make.
    #[must_use]
    pub fn phase(mut self, phase: Phase) -> Self {
        assert!(phase != Phase::GameOver, "cannot build a finished game");
        self.phase = Some(phase);
        self
    }

    /// Put a piece on the board, turned by `rotation`.
    #[must_use]
    pub fn place(mut self, letter: char, pos: Position, rotation: Rotation) -> Self {
        self.placements.push((letter, pos, rotation));
        self
    }

    /// Lay out the position and build the game.
    pub fn build(self) -> Result<Game, GameError> {
        let mut state = GameState::new();
        let side = self.side.unwrap_or(Side::A);
        state.turn = side.index() as u32;

        for (c, pos, rotation) in self.placements {
            let letter = Letter::try_from(c)?;
            if state.board.square_at(pos)? != Square::Empty {
                return Err(GameError::SquareNotEmpty(pos));
            }
            if !state.players[letter.side()].deploy(letter) {
                return Err(GameError::NotInHand(letter));
            }
            let piece = state.pieces.get_mut(letter);
            piece.rotate(rotation);
            piece.position = Some(pos);
            state.board.replace(pos, Square::Piece(letter));
        }

        let phase = self.phase.unwrap_or(Phase::Creation);
        state.phase = phase;
        if phase == Phase::Action {
            state.unacted = state.players[side].on_board.clone();
        }

        Ok(Game::from_state(self.config, state))
    }
}
