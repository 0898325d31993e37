//! Piece kinds, including the empty-square marker.

use std::fmt;

/// The kind of a piece, without side information.
///
/// `None` marks an empty square so every board cell holds the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Rook = 1,
    Knight = 2,
    Bishop = 3,
    Queen = 4,
    King = 5,
    None = 6,
}

impl PieceKind {
    /// Back-rank order indexed by file (a through h).
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Return `true` unless this is the empty marker.
    #[inline]
    pub const fn is_piece(self) -> bool {
        !matches!(self, PieceKind::None)
    }

    /// Return the lowercase placement character, `None` for the empty marker.
    #[inline]
    pub const fn fen_char(self) -> Option<char> {
        match self {
            PieceKind::Pawn => Some('p'),
            PieceKind::Rook => Some('r'),
            PieceKind::Knight => Some('n'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Queen => Some('q'),
            PieceKind::King => Some('k'),
            PieceKind::None => None,
        }
    }

    /// Parse a placement character (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
            PieceKind::None => "none",
        };
        f.write_str(name)
    }
}
