//! Step through a game's moves without touching the live position.
//!
//! A [`Replay`] keeps its own position, the recorded move list, and a cursor
//! (the number of moves applied to the viewed board). Moves recorded while the
//! cursor is behind the end are appended but not applied, so a historical view
//! is never mutated by play.

use tracing::debug;

use crate::chess_move::Move;
use crate::error::ReplayError;
use crate::execute::{CaptureHistory, execute, undo};
use crate::position::Position;

/// A recorded game and a cursor into it.
#[derive(Debug, Clone)]
pub struct Replay {
    position: Position,
    history: CaptureHistory,
    moves: Vec<Move>,
    cursor: usize,
}

impl Replay {
    /// An empty record viewed from the initial layout.
    pub fn new() -> Replay {
        Replay::from_position(Position::initial())
    }

    /// An empty record starting from `start`.
    pub fn from_position(start: Position) -> Replay {
        Replay {
            position: start,
            history: CaptureHistory::new(),
            moves: Vec::new(),
            cursor: 0,
        }
    }

    /// Build a replay from `start` with every move in `moves` applied.
    ///
    /// # Errors
    ///
    /// Fails if a recorded move starts from an empty square.
    pub fn from_moves(
        start: Position,
        moves: impl IntoIterator<Item = Move>,
    ) -> Result<Replay, ReplayError> {
        let mut replay = Replay::from_position(start);
        for mv in moves {
            replay.record(mv)?;
        }
        Ok(replay)
    }

    /// The board as of the cursor.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Return every recorded move, oldest first.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves applied to the viewed board.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of recorded moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// `true` while the cursor is behind the latest move.
    #[inline]
    pub fn is_historical(&self) -> bool {
        self.cursor < self.moves.len()
    }

    /// Append a live move. Applied only when viewing the latest position.
    ///
    /// # Errors
    ///
    /// Fails if the move is applied and its origin is empty; the move is not
    /// recorded in that case.
    pub fn record(&mut self, mv: Move) -> Result<(), ReplayError> {
        if self.is_historical() {
            debug!(%mv, cursor = self.cursor, "recorded while viewing history");
            self.moves.push(mv);
            return Ok(());
        }
        execute(&mut self.position, mv, &mut self.history)?;
        self.moves.push(mv);
        self.cursor += 1;
        Ok(())
    }

    /// Drop the latest move, following a takeback in the live game.
    ///
    /// Returns `None` when nothing is recorded.
    ///
    /// # Errors
    ///
    /// Fails if the viewed board has applied the move but its capture history
    /// is out of step.
    pub fn forget_last(&mut self) -> Result<Option<Move>, ReplayError> {
        let Some(&mv) = self.moves.last() else {
            return Ok(None);
        };
        if self.cursor == self.moves.len() {
            undo(&mut self.position, mv, &mut self.history)?;
            self.cursor -= 1;
        }
        self.moves.pop();
        Ok(Some(mv))
    }

    /// Undo the move before the cursor.
    ///
    /// # Errors
    ///
    /// [`ReplayError::AtStart`] when already at the initial position.
    pub fn step_back(&mut self) -> Result<Move, ReplayError> {
        if self.cursor == 0 {
            return Err(ReplayError::AtStart);
        }
        let mv = self.moves[self.cursor - 1];
        undo(&mut self.position, mv, &mut self.history)?;
        self.cursor -= 1;
        Ok(mv)
    }

    /// Re-apply the move after the cursor.
    ///
    /// # Errors
    ///
    /// [`ReplayError::AtEnd`] when already at the latest position.
    pub fn step_forward(&mut self) -> Result<Move, ReplayError> {
        let Some(&mv) = self.moves.get(self.cursor) else {
            return Err(ReplayError::AtEnd);
        };
        execute(&mut self.position, mv, &mut self.history)?;
        self.cursor += 1;
        Ok(mv)
    }

    /// Step back to the initial position, returning the number of moves undone.
    ///
    /// # Errors
    ///
    /// [`ReplayError::AtStart`] if already there.
    pub fn rewind(&mut self) -> Result<usize, ReplayError> {
        if self.cursor == 0 {
            return Err(ReplayError::AtStart);
        }
        let steps = self.cursor;
        for _ in 0..steps {
            self.step_back()?;
        }
        Ok(steps)
    }

    /// Step forward to the latest position, returning the number of moves applied.
    ///
    /// # Errors
    ///
    /// [`ReplayError::AtEnd`] if already there.
    pub fn fast_forward(&mut self) -> Result<usize, ReplayError> {
        if !self.is_historical() {
            return Err(ReplayError::AtEnd);
        }
        let steps = self.moves.len() - self.cursor;
        for _ in 0..steps {
            self.step_forward()?;
        }
        Ok(steps)
    }
}

impl Default for Replay {
    fn default() -> Self {
        Self::new()
    }
}
