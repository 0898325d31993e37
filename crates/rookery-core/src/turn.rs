//! Two-phase selection protocol: pick an origin, then a destination or cancel.
//!
//! The coordinator owns the game's [`Position`] and [`CaptureHistory`]. Each
//! time a phase is armed it issues a fresh [`Ticket`]; selections carrying an
//! older ticket come from affordances that were already disabled and are
//! discarded, so a late signal from a previous round can never be honoured.

use std::fmt;

use tracing::{debug, info, warn};

use crate::chess_move::Move;
use crate::error::TurnError;
use crate::execute::{CaptureHistory, execute, undo};
use crate::movegen::{Destinations, legal_destinations};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

/// Identifies one armed phase. Advances whenever the enabled squares change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticket(u64);

impl Ticket {
    /// Return the raw counter value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Ticket {
        Ticket(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the coordinator is within the current move round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the active side to pick a piece.
    AwaitingOrigin,
    /// Waiting for one of `candidates`, or `origin` again to cancel.
    AwaitingDestination {
        origin: Square,
        candidates: Destinations,
    },
}

/// Side to move plus the display orientation derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub active: Side,
    /// `true` when the board should be shown from the dark side.
    pub flipped: bool,
}

/// Which kind of square the collaborator should offer next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Origin,
    Destination,
}

/// The affordances to enable for the current phase, tagged with its ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub ticket: Ticket,
    pub kind: PromptKind,
    pub side: Side,
    pub enabled: Vec<Square>,
}

/// A square picked through an affordance issued under `ticket`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEvent {
    pub ticket: Ticket,
    pub square: Square,
}

/// Result of an origin selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginOutcome {
    /// Destination phase armed with these candidates.
    Armed(Destinations),
    /// The piece cannot move; still awaiting an origin.
    NoDestinations,
}

/// A move that has been applied to the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub mv: Move,
    /// The side that made the move.
    pub side: Side,
    /// Cell overwritten at the destination, [`Piece::EMPTY`] for a quiet move.
    pub captured: Piece,
    pub promoted: bool,
}

/// Result of a destination selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationOutcome {
    Applied(Commit),
    /// The origin was picked again; back to awaiting an origin.
    Cancelled,
}

/// Result of feeding a [`SelectionEvent`] to [`TurnCoordinator::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Origin(OriginOutcome),
    Destination(DestinationOutcome),
    /// The event carried a stale ticket and was ignored.
    Discarded,
}

/// Drives one game through origin and destination selections.
#[derive(Debug, Clone)]
pub struct TurnCoordinator {
    position: Position,
    history: CaptureHistory,
    moves: Vec<Move>,
    active: Side,
    phase: Phase,
    ticket: Ticket,
}

impl TurnCoordinator {
    /// Start a game from the initial layout with light to move.
    pub fn new() -> TurnCoordinator {
        TurnCoordinator::from_position(Position::initial(), Side::Light)
    }

    /// Start a game from an arbitrary position.
    pub fn from_position(position: Position, active: Side) -> TurnCoordinator {
        TurnCoordinator {
            position,
            history: CaptureHistory::new(),
            moves: Vec::new(),
            active,
            phase: Phase::AwaitingOrigin,
            ticket: Ticket::default(),
        }
    }

    /// Return the live position.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Return the captured-piece stack, one entry per committed move.
    #[inline]
    pub fn history(&self) -> &CaptureHistory {
        &self.history
    }

    /// Moves committed so far, oldest first.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Return the side to move.
    #[inline]
    pub fn active_side(&self) -> Side {
        self.active
    }

    /// Return the current selection phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The ticket selections must carry to be honoured.
    #[inline]
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Return the side to move and the orientation that goes with it.
    pub fn turn_state(&self) -> TurnState {
        TurnState {
            active: self.active,
            flipped: self.active.is_dark(),
        }
    }

    /// Squares of the active side whose piece has at least one destination.
    pub fn enabled_origins(&self) -> Vec<Square> {
        self.position
            .squares_of(self.active)
            .filter(|&sq| !legal_destinations(&self.position, sq).is_empty())
            .collect()
    }

    /// Describe the affordances for the current phase.
    ///
    /// In the destination phase the origin itself is enabled as the cancel gesture.
    pub fn prompt(&self) -> Prompt {
        let (kind, enabled) = match self.phase {
            Phase::AwaitingOrigin => (PromptKind::Origin, self.enabled_origins()),
            Phase::AwaitingDestination { origin, candidates } => {
                let mut enabled = Vec::with_capacity(candidates.len() + 1);
                enabled.push(origin);
                enabled.extend(candidates.iter().copied());
                (PromptKind::Destination, enabled)
            }
        };
        Prompt {
            ticket: self.ticket,
            kind,
            side: self.active,
            enabled,
        }
    }

    /// Pick the piece to move.
    ///
    /// # Errors
    ///
    /// [`TurnError::WrongPhase`] outside the origin phase, and
    /// [`TurnError::NotActivePiece`] if `square` holds no piece of the side to move.
    pub fn select_origin(&mut self, square: Square) -> Result<OriginOutcome, TurnError> {
        if self.phase != Phase::AwaitingOrigin {
            return Err(TurnError::WrongPhase);
        }
        if !self.position.piece_at(square).belongs_to(self.active) {
            return Err(TurnError::NotActivePiece { square });
        }

        let candidates = legal_destinations(&self.position, square);
        if candidates.is_empty() {
            debug!(%square, side = %self.active, "selected piece has no destinations");
            return Ok(OriginOutcome::NoDestinations);
        }

        self.arm(Phase::AwaitingDestination {
            origin: square,
            candidates,
        });
        debug!(%square, count = candidates.len(), ticket = %self.ticket, "destinations armed");
        Ok(OriginOutcome::Armed(candidates))
    }

    /// Pick the destination, or the origin again to cancel.
    ///
    /// # Errors
    ///
    /// [`TurnError::WrongPhase`] outside the destination phase,
    /// [`TurnError::NotACandidate`] for a square that was never offered, and
    /// [`TurnError::Execute`] if the executor refuses the move.
    pub fn select_destination(&mut self, square: Square) -> Result<DestinationOutcome, TurnError> {
        let Phase::AwaitingDestination { origin, candidates } = self.phase else {
            return Err(TurnError::WrongPhase);
        };

        if square == origin {
            self.arm(Phase::AwaitingOrigin);
            debug!(%origin, "selection cancelled");
            return Ok(DestinationOutcome::Cancelled);
        }
        if !candidates.contains(square) {
            return Err(TurnError::NotACandidate { square });
        }

        let mv = Move::new(origin, square);
        let side = self.active;
        let moving = self.position.piece_at(origin);
        let captured = self.position.piece_at(square);
        execute(&mut self.position, mv, &mut self.history)?;
        let promoted = moving.kind() == PieceKind::Pawn
            && self.position.piece_at(square).kind() == PieceKind::Queen;

        self.moves.push(mv);
        self.active = self.active.flip();
        self.arm(Phase::AwaitingOrigin);
        info!(%mv, %side, captured = %captured, promoted, "move committed");

        Ok(DestinationOutcome::Applied(Commit {
            mv,
            side,
            captured,
            promoted,
        }))
    }

    /// Route a ticketed selection to the phase it was issued for.
    ///
    /// # Errors
    ///
    /// Whatever the routed selection returns; stale tickets are not errors.
    pub fn handle(&mut self, event: SelectionEvent) -> Result<Transition, TurnError> {
        if event.ticket != self.ticket {
            warn!(
                square = %event.square,
                stale = %event.ticket,
                current = %self.ticket,
                "discarding stale selection"
            );
            return Ok(Transition::Discarded);
        }
        match self.phase {
            Phase::AwaitingOrigin => self.select_origin(event.square).map(Transition::Origin),
            Phase::AwaitingDestination { .. } => {
                self.select_destination(event.square).map(Transition::Destination)
            }
        }
    }

    /// Take back the last committed move and hand the turn back to its side.
    ///
    /// # Errors
    ///
    /// [`TurnError::WrongPhase`] while a destination is armed and
    /// [`TurnError::NothingToUndo`] before the first move.
    pub fn undo_last(&mut self) -> Result<Move, TurnError> {
        if self.phase != Phase::AwaitingOrigin {
            return Err(TurnError::WrongPhase);
        }
        let mv = *self.moves.last().ok_or(TurnError::NothingToUndo)?;
        undo(&mut self.position, mv, &mut self.history)?;
        self.moves.pop();
        self.active = self.active.flip();
        self.arm(Phase::AwaitingOrigin);
        info!(%mv, side = %self.active, "move taken back");
        Ok(mv)
    }

    /// Disable the current affordances and switch to `phase`.
    fn arm(&mut self, phase: Phase) {
        self.ticket = self.ticket.next();
        self.phase = phase;
    }
}

impl Default for TurnCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
