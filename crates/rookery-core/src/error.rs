//! Error types for placement parsing, move execution, turn handling, and replay.

use crate::square::Square;

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based index in the string (0 is rank 7 on the board).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side field is not `w`/`light` or `b`/`dark`.
    #[error("invalid side to move: \"{found}\"")]
    InvalidSide {
        /// The invalid side string.
        found: String,
    },
}

/// Errors raised by the move executor. Both indicate a bug in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    /// The origin of the move holds no piece.
    #[error("no piece on origin square {square}")]
    EmptyOrigin {
        /// The empty origin.
        square: Square,
    },
    /// `undo` was called with an empty capture history.
    #[error("capture history is empty")]
    HistoryUnderflow,
}

/// Selections rejected by the turn coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    /// The selection does not match the phase the coordinator is in.
    #[error("selection not expected in the current phase")]
    WrongPhase,
    /// The origin square is empty or holds an opponent piece.
    #[error("{square} holds no piece of the side to move")]
    NotActivePiece {
        /// The rejected origin.
        square: Square,
    },
    /// The destination is not one of the armed candidates.
    #[error("{square} is not a candidate destination")]
    NotACandidate {
        /// The rejected destination.
        square: Square,
    },
    /// A takeback was requested before any move was committed.
    #[error("no committed move to take back")]
    NothingToUndo,
    /// The executor refused the move.
    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

/// Navigation failures of the history viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    /// Already viewing the initial position.
    #[error("already viewing the initial position")]
    AtStart,
    /// Already viewing the latest position.
    #[error("already viewing the latest position")]
    AtEnd,
    /// The executor refused a recorded move.
    #[error(transparent)]
    Execute(#[from] ExecuteError),
}
