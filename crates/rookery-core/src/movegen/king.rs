//! King destinations. No castling and no check avoidance.

use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

use super::{Destinations, push_if_not_friendly};

/// The eight unit-distance `(rank, file)` steps.
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(super) fn gen_king(position: &Position, origin: Square, side: Side, list: &mut Destinations) {
    for (d_rank, d_file) in KING_OFFSETS {
        if let Some(target) = origin.offset(d_rank, d_file) {
            push_if_not_friendly(position, target, side, list);
        }
    }
}
