//! The combat table.
//!
//! With `p` the acting piece's edge facing `direction` and `n` the
//! neighbour's edge facing back:
//!
//! | p \ n  | Sword          | Shield             | None             |
//! |--------|----------------|--------------------|------------------|
//! | Sword  | eliminate both | push p back        | eliminate n      |
//! | Shield | push n away    |                    |                  |
//! | None   | eliminate p    |                    |                  |
//!
//! A sword only counts when armed toward the edge it faces. A neighbouring
//! opposing Home struck by an armed sword wins the game.

use crate::board::Square;
use crate::core::Direction;
use crate::pieces::{EdgeItem, Letter, PieceArena};

use super::Reaction;

/// Edge-pair combat rules.
pub struct ReactionResolver;

/// A facing edge reduced to what matters in combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Facing {
    Sword,
    Shield,
    Bare,
}

impl Facing {
    fn of(item: EdgeItem, direction: Direction) -> Self {
        if item.is_armed_toward(direction) {
            Facing::Sword
        } else if item.is_shield() {
            Facing::Shield
        } else {
            Facing::Bare
        }
    }
}

impl ReactionResolver {
    /// Resolve `piece` against the square it faces in `direction`.
    ///
    /// Reactions hold between any two adjacent pieces, whatever their owners.
    #[must_use]
    pub fn resolve(
        arena: &PieceArena,
        piece: Letter,
        direction: Direction,
        neighbour: Square,
    ) -> Reaction {
        let acting = arena.get(piece);
        let p = Facing::of(acting.edge(direction), direction);

        match neighbour {
            Square::Empty | Square::Blank => Reaction::None,
            Square::Home(owner) => {
                if owner != acting.side() && p == Facing::Sword {
                    Reaction::Win(acting.side())
                } else {
                    Reaction::None
                }
            }
            Square::Piece(other) => {
                let facing_back = direction.opposite();
                let n = Facing::of(arena.get(other).edge(facing_back), facing_back);
                Self::resolve_edges(piece, p, other, n, direction)
            }
        }
    }

    fn resolve_edges(
        piece: Letter,
        p: Facing,
        other: Letter,
        n: Facing,
        direction: Direction,
    ) -> Reaction {
        match (p, n) {
            (Facing::Sword, Facing::Sword) => Reaction::eliminate_both(piece, other),
            (Facing::Sword, Facing::Shield) => Reaction::Push {
                letter: piece,
                direction: direction.opposite(),
            },
            (Facing::Sword, Facing::Bare) => Reaction::eliminate(other),
            (Facing::Shield, Facing::Sword) => Reaction::Push {
                letter: other,
                direction,
            },
            (Facing::Bare, Facing::Sword) => Reaction::eliminate(piece),
            (Facing::Shield | Facing::Bare, Facing::Shield | Facing::Bare) => Reaction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;
    use crate::pieces::Rotation;

    fn letter(c: char) -> Letter {
        Letter::new(c)
    }

    fn facing(arena: &PieceArena, a: char, direction: Direction, square: Square) -> Reaction {
        ReactionResolver::resolve(arena, letter(a), direction, square)
    }

    /// Resolve piece `a` against piece `b` standing in `direction`.
    fn against(arena: &PieceArena, a: char, direction: Direction, b: char) -> Reaction {
        facing(arena, a, direction, Square::Piece(letter(b)))
    }

    #[test]
    fn test_sword_against_shield_pushes_sword_back() {
        // L has a sword on its right; t is all shields.
        let arena = PieceArena::new();
        let reaction = against(&arena, 'L', Direction::Right, 't');

        assert_eq!(
            reaction,
            Reaction::Push {
                letter: letter('L'),
                direction: Direction::Left,
            }
        );
    }

    #[test]
    fn test_sword_against_bare_eliminates_neighbour() {
        let arena = PieceArena::new();
        let reaction = against(&arena, 'L', Direction::Right, 's');
        assert_eq!(reaction, Reaction::eliminate(letter('s')));
    }

    #[test]
    fn test_sword_against_sword_eliminates_both() {
        let arena = PieceArena::new();
        let reaction = against(&arena, 'L', Direction::Right, 'r');
        assert_eq!(reaction, Reaction::eliminate_both(letter('L'), letter('r')));
    }

    #[test]
    fn test_bare_against_sword_eliminates_piece() {
        // S has no items at all; R is all swords.
        let arena = PieceArena::new();
        let reaction = against(&arena, 'S', Direction::Up, 'R');
        assert_eq!(reaction, Reaction::eliminate(letter('S')));
    }

    #[test]
    fn test_shield_against_sword_pushes_neighbour() {
        let arena = PieceArena::new();
        let reaction = against(&arena, 'T', Direction::Down, 'r');
        assert_eq!(
            reaction,
            Reaction::Push {
                letter: letter('r'),
                direction: Direction::Down,
            }
        );
    }

    #[test]
    fn test_passive_edges_do_nothing() {
        let arena = PieceArena::new();
        assert!(against(&arena, 'T', Direction::Left, 't').is_none());
        assert!(against(&arena, 'S', Direction::Left, 's').is_none());
    }

    #[test]
    fn test_same_side_pieces_react() {
        let arena = PieceArena::new();
        let reaction = against(&arena, 'R', Direction::Right, 'S');
        assert_eq!(reaction, Reaction::eliminate(letter('S')));
    }

    #[test]
    fn test_misoriented_sword_is_not_armed() {
        let mut arena = PieceArena::new();
        // A vertical sword wrongly mounted on the right edge.
        *arena.get_mut(letter('A')) = crate::pieces::PlayerPiece::new(
            letter('A'),
            [
                EdgeItem::None,
                EdgeItem::Sword(crate::pieces::Orientation::Vertical),
                EdgeItem::None,
                EdgeItem::None,
            ],
        );
        let reaction = against(&arena, 'A', Direction::Right, 's');
        assert!(reaction.is_none());
    }

    #[test]
    fn test_armed_sword_strikes_opposing_home() {
        let arena = PieceArena::new();
        let reaction = facing(&arena, 'L', Direction::Up, Square::Home(Side::B));
        assert_eq!(reaction, Reaction::Win(Side::A));
    }

    #[test]
    fn test_own_home_and_shields_never_strike() {
        let arena = PieceArena::new();
        assert!(facing(&arena, 'L', Direction::Up, Square::Home(Side::A)).is_none());
        assert!(facing(&arena, 'L', Direction::Down, Square::Home(Side::B)).is_none());
    }

    #[test]
    fn test_empty_and_blank_do_nothing() {
        let arena = PieceArena::new();
        assert!(facing(&arena, 'R', Direction::Up, Square::Empty).is_none());
        assert!(facing(&arena, 'R', Direction::Up, Square::Blank).is_none());
    }

    #[test]
    fn test_rotation_moves_the_sword() {
        // A carries one sword on top; a quarter turn counter-clockwise takes
        // it to the left edge, three take it to the right.
        let mut arena = PieceArena::new();
        arena.get_mut(letter('A')).rotate(Rotation::R270);

        let right = against(&arena, 'A', Direction::Right, 's');
        let up = against(&arena, 'A', Direction::Up, 's');
        assert_eq!(right, Reaction::eliminate(letter('s')));
        assert!(up.is_none());
    }
}
