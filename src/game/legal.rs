//! Legal action enumeration.

use crate::core::{Action, Direction, Phase};
use crate::pieces::Rotation;

use super::Game;

impl Game {
    /// Every action `validate` accepts right now.
    ///
    /// Candidates are generated per phase and filtered through `validate`,
    /// so the list agrees with what `apply` will accept.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut candidates = Vec::new();

        match self.phase() {
            Phase::Creation => {
                let hand = &self.player(self.current_side()).hand;
                for letter in hand.iter() {
                    let creates = Rotation::ALL.map(|rotation| Action::Create { letter, rotation });
                    candidates.extend(creates);
                }
            }
            Phase::Action => {
                for &letter in self.unacted().iter() {
                    let moves = Direction::ALL.map(|direction| Action::Move { letter, direction });
                    let rotates = Rotation::ALL.map(|rotation| Action::Rotate { letter, rotation });
                    candidates.extend(moves);
                    candidates.extend(rotates);
                }
            }
            Phase::Final | Phase::GameOver => {}
        }
        candidates.push(Action::Pass);
        candidates.push(Action::Undo);

        candidates.retain(|action| self.validate(action).is_ok());
        candidates
    }
}
