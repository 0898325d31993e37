//! The two sides of a game.

use std::fmt;
use std::ops::Not;

/// One of the two players. `Light` owns ranks 0-1 at the start, `Dark` owns ranks 6-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Light = 0,
    Dark = 1,
}

impl Side {
    /// Both sides, light first.
    pub const ALL: [Side; 2] = [Side::Light, Side::Dark];

    /// Return the opposite side.
    #[inline]
    pub const fn flip(self) -> Side {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Return `true` for the dark side.
    #[inline]
    pub const fn is_dark(self) -> bool {
        matches!(self, Side::Dark)
    }

    /// Build a side from the `is_dark_side` flag carried by pieces.
    #[inline]
    pub const fn from_dark(is_dark: bool) -> Side {
        if is_dark { Side::Dark } else { Side::Light }
    }

    /// Rank delta of a pawn advance: light moves toward rank 7, dark toward rank 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Light => 1,
            Side::Dark => -1,
        }
    }

    /// The rank on which this side's pawns promote.
    #[inline]
    pub const fn last_rank(self) -> u8 {
        match self {
            Side::Light => 7,
            Side::Dark => 0,
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.flip()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Light => write!(f, "light"),
            Side::Dark => write!(f, "dark"),
        }
    }
}
