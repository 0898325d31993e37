//! Move execution and reversal.
//!
//! Moves are applied in place. Every execution pushes the overwritten
//! destination cell onto a [`CaptureHistory`] so that `undo` can restore it.

use tracing::trace;

use crate::chess_move::Move;
use crate::error::ExecuteError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Stack of destination cells overwritten by executed moves, most recent last.
///
/// Depth equals the number of executed moves not yet undone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureHistory {
    captured: Vec<Piece>,
}

impl CaptureHistory {
    /// Create an empty history.
    pub fn new() -> CaptureHistory {
        CaptureHistory::default()
    }

    /// Return the number of recorded moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.captured.len()
    }

    /// Return `true` if no move has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.captured.is_empty()
    }

    /// The most recently recorded cell, if any.
    #[inline]
    pub fn last(&self) -> Option<Piece> {
        self.captured.last().copied()
    }

    fn push(&mut self, piece: Piece) {
        self.captured.push(piece);
    }

    fn pop(&mut self) -> Option<Piece> {
        self.captured.pop()
    }
}

/// Apply `mv` to `position`, recording the overwritten destination in `history`.
///
/// A pawn landing on its side's last rank becomes a queen of the same side.
/// Legality is not re-checked: only moves produced by the generator may be
/// passed in.
///
/// # Errors
///
/// Returns [`ExecuteError::EmptyOrigin`] if `mv.from` is empty. Nothing is
/// modified in that case.
pub fn execute(
    position: &mut Position,
    mv: Move,
    history: &mut CaptureHistory,
) -> Result<(), ExecuteError> {
    let moving = position.piece_at(mv.from);
    let Some(side) = moving.side() else {
        return Err(ExecuteError::EmptyOrigin { square: mv.from });
    };

    history.push(position.piece_at(mv.to));

    let landed = if moving.kind() == PieceKind::Pawn && mv.to.rank() == side.last_rank() {
        trace!(%mv, %side, "pawn promoted to queen");
        Piece::new(PieceKind::Queen, side)
    } else {
        moving
    };
    position.set_piece(mv.to, landed);
    position.set_piece(mv.from, Piece::EMPTY);
    Ok(())
}

/// Reverse `mv`, restoring the cell recorded by the matching [`execute`].
///
/// The piece on `mv.to` goes back to `mv.from` as it is: a promotion is not
/// reversed, so a promoted queen returns as a queen.
///
/// # Errors
///
/// Returns [`ExecuteError::HistoryUnderflow`] if `history` is empty. Nothing is
/// modified in that case.
pub fn undo(
    position: &mut Position,
    mv: Move,
    history: &mut CaptureHistory,
) -> Result<(), ExecuteError> {
    let restored = history.pop().ok_or(ExecuteError::HistoryUnderflow)?;
    position.set_piece(mv.from, position.piece_at(mv.to));
    position.set_piece(mv.to, restored);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CaptureHistory, execute, undo};
    use crate::chess_move::Move;
    use crate::error::ExecuteError;
    use crate::movegen::legal_destinations;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::side::Side;
    use crate::square::Square;

    fn mv(s: &str) -> Move {
        Move::from_coordinate(s).unwrap()
    }

    #[test]
    fn quiet_move() {
        let mut position = Position::initial();
        let mut history = CaptureHistory::new();
        execute(&mut position, mv("e2e3"), &mut history).unwrap();
        assert!(position.is_empty(Square::new(1, 4)));
        assert_eq!(
            position.piece_at(Square::new(2, 4)),
            Piece::new(PieceKind::Pawn, Side::Light)
        );
        assert_eq!(history.len(), 1);
        assert_eq!(history.last(), Some(Piece::EMPTY));
    }

    #[test]
    fn capture_is_recorded() {
        let mut position: Position = "8/8/8/3n4/4P3/8/8/8".parse().unwrap();
        let mut history = CaptureHistory::new();
        execute(&mut position, mv("e4d5"), &mut history).unwrap();
        assert_eq!(history.last(), Some(Piece::new(PieceKind::Knight, Side::Dark)));
        assert_eq!(
            position.piece_at(Square::new(4, 3)),
            Piece::new(PieceKind::Pawn, Side::Light)
        );
    }

    #[test]
    fn light_pawn_promotes_on_rank_seven() {
        let mut position: Position = "8/4P3/8/8/8/8/8/8".parse().unwrap();
        let mut history = CaptureHistory::new();
        execute(&mut position, Move::new(Square::new(6, 4), Square::new(7, 4)), &mut history).unwrap();
        assert_eq!(
            position.piece_at(Square::new(7, 4)),
            Piece::new(PieceKind::Queen, Side::Light)
        );
        assert_eq!(position.piece_at(Square::new(6, 4)), Piece::EMPTY);
    }

    #[test]
    fn dark_pawn_promotes_on_rank_zero() {
        let mut position: Position = "8/8/8/8/8/8/3p4/2R5".parse().unwrap();
        let mut history = CaptureHistory::new();
        execute(&mut position, mv("d2c1"), &mut history).unwrap();
        assert_eq!(
            position.piece_at(Square::new(0, 2)),
            Piece::new(PieceKind::Queen, Side::Dark)
        );
        assert_eq!(history.last(), Some(Piece::new(PieceKind::Rook, Side::Light)));
    }

    #[test]
    fn empty_origin_is_rejected_without_side_effects() {
        let mut position = Position::initial();
        let mut history = CaptureHistory::new();
        let err = execute(&mut position, mv("e4e5"), &mut history).unwrap_err();
        assert_eq!(
            err,
            ExecuteError::EmptyOrigin {
                square: Square::new(3, 4)
            }
        );
        assert!(history.is_empty());
        assert_eq!(position, Position::initial());
    }

    #[test]
    fn undo_restores_capture() {
        let start: Position = "8/8/8/3n4/4P3/8/8/8".parse().unwrap();
        let mut position = start.clone();
        let mut history = CaptureHistory::new();
        execute(&mut position, mv("e4d5"), &mut history).unwrap();
        undo(&mut position, mv("e4d5"), &mut history).unwrap();
        assert_eq!(position, start);
        assert!(history.is_empty());
    }

    #[test]
    fn undo_does_not_reverse_promotion() {
        let mut position: Position = "8/4P3/8/8/8/8/8/8".parse().unwrap();
        let mut history = CaptureHistory::new();
        let promo = mv("e7e8");
        execute(&mut position, promo, &mut history).unwrap();
        undo(&mut position, promo, &mut history).unwrap();
        assert_eq!(
            position.piece_at(Square::new(6, 4)),
            Piece::new(PieceKind::Queen, Side::Light)
        );
        assert_eq!(position.piece_at(Square::new(7, 4)), Piece::EMPTY);
    }

    #[test]
    fn undo_with_empty_history_fails() {
        let mut position = Position::initial();
        let mut history = CaptureHistory::new();
        let err = undo(&mut position, mv("e2e3"), &mut history).unwrap_err();
        assert_eq!(err, ExecuteError::HistoryUnderflow);
        assert_eq!(position, Position::initial());
    }

    #[test]
    fn every_generated_move_round_trips() {
        let start = Position::initial();
        for side in Side::ALL {
            for origin in start.squares_of(side) {
                for &dest in &legal_destinations(&start, origin) {
                    let m = Move::new(origin, dest);
                    let mut position = start.clone();
                    let mut history = CaptureHistory::new();
                    execute(&mut position, m, &mut history).unwrap();
                    undo(&mut position, m, &mut history).unwrap();
                    assert_eq!(position, start, "move {m}");
                }
            }
        }
    }

    #[test]
    fn history_depth_tracks_moves() {
        let mut position = Position::initial();
        let mut history = CaptureHistory::new();
        let moves = [mv("e2e3"), mv("d7d6"), mv("b1c3")];
        for m in moves {
            execute(&mut position, m, &mut history).unwrap();
        }
        assert_eq!(history.len(), 3);
        for m in moves.into_iter().rev() {
            undo(&mut position, m, &mut history).unwrap();
        }
        assert!(history.is_empty());
        assert_eq!(position, Position::initial());
    }
}
