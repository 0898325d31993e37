//! Knight destinations.

use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

use super::{Destinations, push_if_not_friendly};

/// The eight L-shaped `(rank, file)` jumps.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Generate knight destinations: on-board and not occupied by a friendly piece.
pub(super) fn gen_knight(position: &Position, origin: Square, side: Side, list: &mut Destinations) {
    for (d_rank, d_file) in KNIGHT_OFFSETS {
        if let Some(target) = origin.offset(d_rank, d_file) {
            push_if_not_friendly(position, target, side, list);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::movegen::legal_destinations;
    use crate::position::Position;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn knight_from_a1_on_empty_board() {
        let position: Position = "8/8/8/8/8/8/8/N7".parse().unwrap();
        let dests = legal_destinations(&position, Square::new(0, 0));
        assert_eq!(dests.len(), 2);
        assert!(dests.contains(Square::new(1, 2)));
        assert!(dests.contains(Square::new(2, 1)));
    }

    #[test]
    fn knight_in_centre() {
        let position: Position = "8/8/8/8/3N4/8/8/8".parse().unwrap();
        assert_eq!(legal_destinations(&position, sq("d4")).len(), 8);
    }

    #[test]
    fn knight_captures_enemy_but_not_friend() {
        // Light knight d4, dark pawn e6, light pawn c6.
        let position: Position = "8/8/2P1p3/8/3N4/8/8/8".parse().unwrap();
        let dests = legal_destinations(&position, sq("d4"));
        assert!(dests.contains(sq("e6")));
        assert!(!dests.contains(sq("c6")));
        assert_eq!(dests.len(), 7);
    }

    #[test]
    fn initial_knight_jumps_over_pawns() {
        let position = Position::initial();
        let dests = legal_destinations(&position, sq("g8"));
        assert_eq!(dests.as_slice(), &[sq("h6"), sq("f6")]);
    }
}
