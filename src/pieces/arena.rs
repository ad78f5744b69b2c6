//! Authoritative store of every piece in a match.
//!
//! Hands, on-board sets, the unacted set and the cemetery only hold
//! `Letter` keys into this arena, so a piece's mutable state exists in
//! exactly one place.

use serde::{Deserialize, Serialize};

use super::piece::{Letter, PlayerPiece, ROSTER_SIZE};
use super::roster::roster;
use crate::core::Side;
use crate::error::GameError;

/// All 48 pieces, indexed by `Letter::index()`.
///
/// Deserializing checks the slot of every piece, so a decoded arena can be
/// indexed by any letter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PlayerPiece>", into = "Vec<PlayerPiece>")]
pub struct PieceArena {
    pieces: Vec<PlayerPiece>,
}

impl PieceArena {
    /// Create the arena from both fixed rosters.
    #[must_use]
    pub fn new() -> Self {
        let pieces: Vec<_> = roster(Side::A).chain(roster(Side::B)).collect();
        debug_assert_eq!(pieces.len(), 2 * ROSTER_SIZE);
        Self { pieces }
    }

    #[must_use]
    pub fn get(&self, letter: Letter) -> &PlayerPiece {
        &self.pieces[letter.index()]
    }

    pub fn get_mut(&mut self, letter: Letter) -> &mut PlayerPiece {
        &mut self.pieces[letter.index()]
    }

    /// Iterate over every piece.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerPiece> {
        self.pieces.iter()
    }
}

impl TryFrom<Vec<PlayerPiece>> for PieceArena {
    type Error = GameError;

    fn try_from(pieces: Vec<PlayerPiece>) -> Result<Self, Self::Error> {
        if pieces.len() != 2 * ROSTER_SIZE {
            return Err(GameError::Snapshot(format!(
                "arena holds {} pieces, expected {}",
                pieces.len(),
                2 * ROSTER_SIZE
            )));
        }
        let misplaced = pieces.iter().enumerate().find(|(slot, p)| p.letter.index() != *slot);
        if let Some((slot, piece)) = misplaced {
            let letter = piece.letter;
            return Err(GameError::Snapshot(format!("piece {letter} is stored in slot {slot}")));
        }
        Ok(Self { pieces })
    }
}

impl From<PieceArena> for Vec<PlayerPiece> {
    fn from(arena: PieceArena) -> Self {
        arena.pieces
    }
}

impl Default for PieceArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_lookup_by_letter() {
        let arena = PieceArena::new();
        for piece in arena.iter() {
            assert_eq!(arena.get(piece.letter).letter, piece.letter);
        }
        assert_eq!(arena.iter().filter(|p| p.side() == Side::B).count(), ROSTER_SIZE);
    }

    #[test]
    fn test_pieces_start_unplaced() {
        let arena = PieceArena::new();
        assert!(arena.iter().all(|p| p.position.is_none()));
    }

    #[test]
    fn test_mutation_is_visible() {
        let mut arena = PieceArena::new();
        let letter = Letter::new('q');
        arena.get_mut(letter).position = Some(Position::new(4, 4));
        assert_eq!(arena.get(letter).position, Some(Position::new(4, 4)));
    }

    #[test]
    fn test_deserialize_checks_slots() {
        let arena = PieceArena::new();
        let json = serde_json::to_string(&arena).unwrap();
        assert_eq!(serde_json::from_str::<PieceArena>(&json).unwrap(), arena);

        let mut pieces: Vec<PlayerPiece> = arena.clone().into();
        pieces.swap(0, 1);
        let swapped = serde_json::to_string(&pieces).unwrap();
        assert!(serde_json::from_str::<PieceArena>(&swapped).is_err());

        pieces.truncate(47);
        let short = serde_json::to_string(&pieces).unwrap();
        assert!(serde_json::from_str::<PieceArena>(&short).is_err());
    }
}
