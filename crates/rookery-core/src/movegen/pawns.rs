//! Pawn destinations: single step forward and diagonal captures.
//!
//! No double step from the starting rank and no en passant.

use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

use super::Destinations;

pub(super) fn gen_pawn(position: &Position, origin: Square, side: Side, list: &mut Destinations) {
    let forward = side.forward();

    if let Some(ahead) = origin.offset(forward, 0)
        && position.is_empty(ahead)
    {
        list.push(ahead);
    }

    for d_file in [-1, 1] {
        if let Some(target) = origin.offset(forward, d_file)
            && position.piece_at(target).belongs_to(side.flip())
        {
            list.push(target);
        }
    }
}
