//! Items mounted on a piece's edges.
//!
//! A sword carries an orientation tag. Swords on the top and bottom edges
//! are vertical, swords on the left and right edges horizontal; a quarter
//! turn moves a sword to the other axis and flips the tag with it. A sword
//! only fights along the axis its tag names.

use serde::{Deserialize, Serialize};

use crate::core::{Axis, Direction};

/// Orientation of a sword blade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Orientation a sword has when mounted on the edge facing `direction`.
    #[must_use]
    pub const fn for_edge(direction: Direction) -> Self {
        match direction.axis() {
            Axis::Vertical => Orientation::Vertical,
            Axis::Horizontal => Orientation::Horizontal,
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    const fn matches(self, axis: Axis) -> bool {
        matches!(
            (self, axis),
            (Orientation::Horizontal, Axis::Horizontal) | (Orientation::Vertical, Axis::Vertical)
        )
    }
}

/// What sits on one edge of a piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeItem {
    #[default]
    None,
    Shield,
    Sword(Orientation),
}

impl EdgeItem {
    /// A sword correctly oriented for the edge facing `direction`.
    #[must_use]
    pub const fn sword_for(direction: Direction) -> Self {
        EdgeItem::Sword(Orientation::for_edge(direction))
    }

    /// The item after `quarter_turns` quarter turns of its piece.
    ///
    /// Odd turns flip a sword's orientation; shields and bare edges are
    /// unchanged.
    #[must_use]
    pub const fn rotated(self, quarter_turns: u8) -> Self {
        match self {
            EdgeItem::Sword(o) if quarter_turns % 2 == 1 => EdgeItem::Sword(o.flipped()),
            other => other,
        }
    }

    #[must_use]
    pub const fn is_sword(self) -> bool {
        matches!(self, EdgeItem::Sword(_))
    }

    #[must_use]
    pub const fn is_shield(self) -> bool {
        matches!(self, EdgeItem::Shield)
    }

    /// Check if this is a sword able to strike toward `direction`.
    #[must_use]
    pub const fn is_armed_toward(self, direction: Direction) -> bool {
        match self {
            EdgeItem::Sword(o) => o.matches(direction.axis()),
            _ => false,
        }
    }

    /// Single-character glyph used by board rendering.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            EdgeItem::None => ' ',
            EdgeItem::Shield => '#',
            EdgeItem::Sword(Orientation::Vertical) => '|',
            EdgeItem::Sword(Orientation::Horizontal) => '-',
        }
    }
}
