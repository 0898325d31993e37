//! Board coordinates.

use std::fmt;

/// A `(rank, file)` coordinate packed into a `u8` as `rank * 8 + file`.
///
/// Rank 0 is the light side's back row, rank 7 the dark side's.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a rank and a file.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..8`. Callers validate
    /// coordinates first; use [`Square::try_new`] for untrusted input.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Square {
        assert!(rank < 8 && file < 8, "square coordinate out of range");
        Square(rank * 8 + file)
    }

    /// Create a square from a rank and a file, returning `None` if out of range.
    #[inline]
    pub const fn try_new(rank: u8, file: u8) -> Option<Square> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Create a square from its linear index `rank * 8 + file`.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Parse algebraic notation: file letter `a`-`h`, rank digit `1`-`8` (rank 0 is `1`).
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let &[file_byte, rank_byte] = s.as_bytes() else {
            return None;
        };
        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }
        Square::try_new(rank_byte - b'1', file_byte - b'a')
    }

    /// Return the linear index `rank * 8 + file`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the rank, 0 for light's back row.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Return the file, 0 for the a-file.
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Step by a signed `(rank, file)` delta, `None` when leaving the board.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        let rank = self.rank() as i8 + d_rank;
        let file = self.file() as i8 + d_file;
        if rank < 0 || rank > 7 || file < 0 || file > 7 {
            return None;
        }
        Some(Square(rank as u8 * 8 + file as u8))
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        write!(f, "{file}{}", self.rank() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn new_and_accessors() {
        let sq = Square::new(3, 3);
        assert_eq!(sq.rank(), 3);
        assert_eq!(sq.file(), 3);
        assert_eq!(sq.index(), 27);
    }

    #[test]
    fn rank_file_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::new(sq.rank(), sq.file()), sq);
        }
        assert_eq!(Square::all().count(), Square::COUNT);
    }

    #[test]
    #[should_panic(expected = "square coordinate out of range")]
    fn new_out_of_range_panics() {
        let _ = Square::new(8, 0);
    }

    #[test]
    fn try_new_and_from_index() {
        assert_eq!(Square::try_new(7, 7), Some(Square::new(7, 7)));
        assert_eq!(Square::try_new(0, 8), None);
        assert_eq!(Square::from_index(63), Some(Square::new(7, 7)));
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic("d4"), Some(Square::new(3, 3)));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::new(7, 7)));
        assert_eq!(format!("{}", Square::new(3, 4)), "e4");
        assert_eq!(format!("{:?}", Square::new(0, 0)), "Square(a1)");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("a0").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("a1b").is_none());
    }

    #[test]
    fn offset_stays_on_board() {
        let a1 = Square::new(0, 0);
        assert_eq!(a1.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(Square::new(7, 7).offset(1, 0), None);
        assert_eq!(Square::new(7, 7).offset(0, 1), None);
    }
}
