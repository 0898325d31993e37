//! The contents of a single board cell.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::side::Side;

/// A piece kind plus the side owning it.
///
/// An empty cell is `Piece::EMPTY` (kind [`PieceKind::None`]). Its side flag carries
/// no meaning and is normalised to light so that all empty cells compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    is_dark_side: bool,
}

impl Piece {
    /// The empty cell.
    pub const EMPTY: Piece = Piece {
        kind: PieceKind::None,
        is_dark_side: false,
    };

    /// Create a piece of `kind` owned by `side`.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        match kind {
            PieceKind::None => Piece::EMPTY,
            _ => Piece {
                kind,
                is_dark_side: side.is_dark(),
            },
        }
    }

    /// Parse a placement character: uppercase is light, lowercase is dark.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::Light
        } else {
            Side::Dark
        };
        Some(Piece::new(kind, side))
    }

    /// Return the piece kind, [`PieceKind::None`] for an empty cell.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the side flag. Always `false` for an empty cell.
    #[inline]
    pub const fn is_dark_side(self) -> bool {
        self.is_dark_side
    }

    /// Return `true` if no piece stands here.
    #[inline]
    pub const fn is_empty(self) -> bool {
        !self.kind.is_piece()
    }

    /// The owning side, or `None` for an empty cell.
    #[inline]
    pub const fn side(self) -> Option<Side> {
        if self.is_empty() {
            None
        } else {
            Some(Side::from_dark(self.is_dark_side))
        }
    }

    /// Return `true` if this cell holds a piece belonging to `side`.
    #[inline]
    pub const fn belongs_to(self, side: Side) -> bool {
        !self.is_empty() && self.is_dark_side == side.is_dark()
    }

    /// Placement character, `None` for an empty cell.
    pub fn fen_char(self) -> Option<char> {
        let c = self.kind.fen_char()?;
        Some(if self.is_dark_side {
            c
        } else {
            c.to_ascii_uppercase()
        })
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::EMPTY
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char().unwrap_or('.'))
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side() {
            Some(side) => write!(f, "Piece({side} {})", self.kind),
            None => write!(f, "Piece(empty)"),
        }
    }
}
