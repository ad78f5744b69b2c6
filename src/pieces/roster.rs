//! The fixed 24-piece rosters.
//!
//! Each side owns one piece for every layout of {none, shield, sword} on
//! four edges that is distinct up to rotation (there are exactly 24). Side B
//! carries the same layouts turned half a revolution so the two armies face
//! each other.
//!
//! Layout strings give the top, right, bottom and left edges:
//! `W` sword, `S` shield, `.` bare.

use super::edge::EdgeItem;
use super::piece::{rotate_edges, Letter, PlayerPiece, ROSTER_SIZE};
use super::rotation::Rotation;
use crate::core::{Direction, Side};

/// Side A layouts, `A` through `X`.
const LAYOUTS: [&str; ROSTER_SIZE] = [
    "W...", "W.S.", "W..S", "W.SS", "WS.S", "WSSS", "WS..", "WSS.", //
    "WW..", "W.W.", "WWSS", "WWSW", "WSWS", "WW.S", "WWS.", "W.WS", //
    "WWW.", "WWWW", "....", "SSSS", "S...", ".SSS", "..SS", ".S.S",
];

fn parse_layout(layout: &str) -> [EdgeItem; 4] {
    let bytes = layout.as_bytes();
    assert_eq!(bytes.len(), 4, "layout {layout:?} must name four edges");
    std::array::from_fn(|i| match bytes[i] {
        b'W' => EdgeItem::sword_for(Direction::ALL[i]),
        b'S' => EdgeItem::Shield,
        b'.' => EdgeItem::None,
        other => panic!("unknown edge code {:?} in layout {layout:?}", other as char),
    })
}

/// Unrotated edge layout of the roster piece `letter`.
#[must_use]
pub fn layout(letter: Letter) -> [EdgeItem; 4] {
    let edges = parse_layout(LAYOUTS[letter.roster_index()]);
    match letter.side() {
        Side::A => edges,
        Side::B => rotate_edges(edges, Rotation::R180),
    }
}

/// All pieces of `side`, in letter order, unplaced.
pub fn roster(side: Side) -> impl Iterator<Item = PlayerPiece> {
    (0..ROSTER_SIZE).map(move |i| {
        let letter = Letter::nth(side, i);
        PlayerPiece::new(letter, layout(letter))
    })
}
