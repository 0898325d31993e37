//! Ray-walking for rooks, bishops, and queens.

use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

use super::Destinations;

/// North, south, east, west as `(rank, file)` steps.
pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonals as `(rank, file)` steps.
pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each direction until the board edge or a blocker.
///
/// Empty squares extend the ray; an enemy piece is included and ends the ray;
/// a friendly piece ends the ray and is excluded.
pub(super) fn gen_rays(
    position: &Position,
    origin: Square,
    side: Side,
    directions: &[(i8, i8)],
    list: &mut Destinations,
) {
    for &(d_rank, d_file) in directions {
        let mut current = origin;
        while let Some(next) = current.offset(d_rank, d_file) {
            let target = position.piece_at(next);
            if target.is_empty() {
                list.push(next);
                current = next;
                continue;
            }
            if !target.belongs_to(side) {
                list.push(next);
            }
            break;
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
    fn rook_on_empty_board_from_d4() {
        let position: Position = "8/8/8/8/3R4/8/8/8".parse().unwrap();
        let dests = legal_destinations(&position, Square::new(3, 3));
        assert_eq!(dests.len(), 14);
        for d in &dests {
            assert!(d.rank() == 3 || d.file() == 3);
        }
    }

    #[test]
    fn rook_stops_at_friend_and_captures_enemy() {
        // Light rook d4, light pawn d6, dark knight f4.
        let position: Position = "8/8/3P4/8/3R1n2/8/8/8".parse().unwrap();
        let dests = legal_destinations(&position, sq("d4"));
        assert!(dests.contains(sq("d5")));
        assert!(!dests.contains(sq("d6")));
        assert!(!dests.contains(sq("d7")));
        assert!(dests.contains(sq("e4")));
        assert!(dests.contains(sq("f4")));
        assert!(!dests.contains(sq("g4")));
        // north 1, south 3, east 2, west 3
        assert_eq!(dests.len(), 9);
    }

    #[test]
    fn bishop_in_corner() {
        let position: Position = "8/8/8/8/8/8/8/B7".parse().unwrap();
        let dests = legal_destinations(&position, sq("a1"));
        assert_eq!(dests.len(), 7);
        assert!(dests.contains(sq("h8")));
    }

    #[test]
    fn bishop_blocked_by_enemy() {
        let position: Position = "8/8/8/8/8/2p5/8/B7".parse().unwrap();
        let dests = legal_destinations(&position, sq("a1"));
        assert_eq!(dests.as_slice(), &[sq("b2"), sq("c3")]);
    }

    #[test]
    fn dark_rook_ignores_dark_blockers() {
        let position = Position::initial();
        assert!(legal_destinations(&position, sq("a8")).is_empty());
        assert!(legal_destinations(&position, sq("h8")).is_empty());
    }
}
