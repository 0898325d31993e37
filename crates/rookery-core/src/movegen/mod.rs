//! Pseudo-legal destination generation.
//!
//! Destinations follow each piece's movement pattern and occupancy rules only;
//! whether the move exposes the mover's king is not considered.

mod king;
mod knights;
mod pawns;
mod sliders;

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS, gen_rays};

/// Upper bound on destinations from one square (a central queen reaches 27).
const CAPACITY: usize = 28;

/// Stack-allocated, insertion-ordered set of destination squares.
#[derive(Clone, Copy)]
pub struct Destinations {
    squares: [Square; CAPACITY],
    len: u8,
}

impl Destinations {
    /// Create an empty set.
    pub const fn new() -> Destinations {
        Destinations {
            squares: [Square::new(0, 0); CAPACITY],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, sq: Square) {
        debug_assert!((self.len as usize) < CAPACITY);
        self.squares[self.len as usize] = sq;
        self.len += 1;
    }

    /// Return the number of destinations.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if there are no destinations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the squares in generation order.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }

    /// Return `true` if `sq` is one of the destinations.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    /// Iterate over the destinations in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }
}

impl Default for Destinations {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Destinations {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Destinations {}

impl fmt::Debug for Destinations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a Destinations {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Generate the destinations of the piece standing on `origin`.
///
/// An empty `origin` yields an empty set, as does a piece with nowhere to go;
/// neither is an error. Pawns are assumed to have been promoted before
/// reaching their last rank.
pub fn legal_destinations(position: &Position, origin: Square) -> Destinations {
    let mut list = Destinations::new();
    let piece = position.piece_at(origin);
    let Some(side) = piece.side() else {
        return list;
    };

    match piece.kind() {
        PieceKind::Rook => gen_rays(position, origin, side, &ROOK_DIRECTIONS, &mut list),
        PieceKind::Bishop => gen_rays(position, origin, side, &BISHOP_DIRECTIONS, &mut list),
        PieceKind::Queen => {
            gen_rays(position, origin, side, &ROOK_DIRECTIONS, &mut list);
            gen_rays(position, origin, side, &BISHOP_DIRECTIONS, &mut list);
        }
        PieceKind::Knight => gen_knight(position, origin, side, &mut list),
        PieceKind::King => gen_king(position, origin, side, &mut list),
        PieceKind::Pawn => gen_pawn(position, origin, side, &mut list),
        PieceKind::None => {}
    }
    list
}

/// Push `target` unless a piece of `side` stands on it. Shared by the offset-table pieces.
#[inline]
fn push_if_not_friendly(position: &Position, target: Square, side: Side, list: &mut Destinations) {
    if !position.piece_at(target).belongs_to(side) {
        list.push(target);
    }
}

#[cfg(test)]
mod tests {
    use super::legal_destinations;
    use crate::position::Position;
    use crate::side::Side;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn empty_origin_yields_nothing() {
        let position = Position::initial();
        assert!(legal_destinations(&position, sq("e4")).is_empty());
    }

    #[test]
    fn initial_position_counts() {
        let position = Position::initial();
        // Pawns step once, knights have two squares each, everything else is blocked.
        let total: usize = position
            .squares_of(Side::Light)
            .map(|origin| legal_destinations(&position, origin).len())
            .sum();
        assert_eq!(total, 8 + 4);
        assert_eq!(legal_destinations(&position, sq("a1")).len(), 0);
        assert_eq!(legal_destinations(&position, sq("d1")).len(), 0);
        assert_eq!(legal_destinations(&position, sq("e1")).len(), 0);
    }

    #[test]
    fn queen_is_union_of_rook_and_bishop() {
        let position: Position = "8/8/8/8/3Q4/8/8/8".parse().unwrap();
        let dests = legal_destinations(&position, sq("d4"));
        assert_eq!(dests.len(), 14 + 13);
        assert!(dests.contains(sq("d8")));
        assert!(dests.contains(sq("a1")));
        assert!(dests.contains(sq("h8")));
        assert!(dests.contains(sq("a7")));
        assert!(!dests.contains(sq("e6")));
    }

    #[test]
    fn generation_order_is_deterministic() {
        let position: Position = "8/8/8/8/3Q4/8/8/8".parse().unwrap();
        let first = legal_destinations(&position, sq("d4"));
        let second = legal_destinations(&position, sq("d4"));
        assert_eq!(first, second);
        // Rook directions come first: north ray starts at d5.
        assert_eq!(first.as_slice()[0], sq("d5"));
    }
}
