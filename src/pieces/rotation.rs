//! Legal piece rotations.
//!
//! Rotation is counter-clockwise: a 90° turn moves the RIGHT item to the
//! TOP, TOP to LEFT, LEFT to BOTTOM and BOTTOM to RIGHT. With the edge array
//! stored clockwise from the top, a turn of `k` quarters maps
//! `new[i] = old[(i + k) % 4]`.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// One of the four legal rotations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Number of counter-clockwise quarter turns.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    #[must_use]
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::R0,
            1 => Rotation::R90,
            2 => Rotation::R180,
            _ => Rotation::R270,
        }
    }

    #[must_use]
    pub const fn degrees(self) -> u16 {
        self.quarter_turns() as u16 * 90
    }

    /// This rotation followed by `other`.
    #[must_use]
    pub const fn then(self, other: Rotation) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }

    /// The rotation that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::from_quarter_turns(4 - self.quarter_turns())
    }
}

impl TryFrom<u16> for Rotation {
    type Error = GameError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::R0),
            90 => Ok(Rotation::R90),
            180 => Ok(Rotation::R180),
            270 => Ok(Rotation::R270),
            other => Err(GameError::InvalidRotation(other)),
        }
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_degrees() {
        assert_eq!(Rotation::try_from(0), Ok(Rotation::R0));
        assert_eq!(Rotation::try_from(270), Ok(Rotation::R270));
        assert_eq!(Rotation::try_from(45), Err(GameError::InvalidRotation(45)));
        assert_eq!(Rotation::try_from(360), Err(GameError::InvalidRotation(360)));
    }

    #[test]
    fn test_compose_and_inverse() {
        assert_eq!(Rotation::R90.then(Rotation::R90), Rotation::R180);
        assert_eq!(Rotation::R270.then(Rotation::R180), Rotation::R90);
        for r in Rotation::ALL {
            assert_eq!(r.then(r.inverse()), Rotation::R0);
        }
    }

    #[test]
    fn test_degrees_display() {
        assert_eq!(Rotation::R180.degrees(), 180);
        assert_eq!(Rotation::R90.to_string(), "90°");
    }
}
