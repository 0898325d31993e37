//! Board state and move-legality engine: positions, pseudo-legal destination
//! generation, reversible move execution, and the two-phase selection protocol.

mod chess_move;
mod error;
mod execute;
mod fen;
mod movegen;
mod piece;
mod piece_kind;
mod position;
mod replay;
mod side;
mod square;
mod turn;

pub use chess_move::Move;
pub use error::{ExecuteError, FenError, ReplayError, TurnError};
pub use execute::{CaptureHistory, execute, undo};
pub use fen::{STARTING_PLACEMENT, parse_side};
pub use movegen::{Destinations, legal_destinations};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{Position, PrettyPosition};
pub use replay::Replay;
pub use side::Side;
pub use square::Square;
pub use turn::{
    Commit, DestinationOutcome, OriginOutcome, Phase, Prompt, PromptKind, SelectionEvent, Ticket,
    Transition, TurnCoordinator, TurnState,
};

/// The standard initial layout.
pub fn initial_position() -> Position {
    Position::initial()
}
