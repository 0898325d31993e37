//! Line-oriented game session driving a [`TurnCoordinator`].
//!
//! Input is read on a separate thread and forwarded over a channel; the
//! session loop is the only owner of the game state and handles one command
//! at a time. After every change the previous affordances are replaced by a
//! fresh [`Prompt`] before it is printed.
//!
//! Loading a record suspends the game in progress; `resume` brings it back.

use std::io::{self, BufRead, Write};
use std::mem;
use std::sync::mpsc;
use std::thread;

use tracing::{debug, info, warn};

use rookery_core::{
    DestinationOutcome, Move, OriginOutcome, Position, Prompt, PromptKind, Replay,
    SelectionEvent, Side, Square, Transition, TurnCoordinator,
};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::PlayError;

/// Display settings adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Show the board from the side to move, re-orienting after every move.
    pub flip: bool,
    /// Print the board after every change.
    pub board: bool,
    /// Print rank and file labels.
    pub coords: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            flip: true,
            board: true,
            coords: true,
        }
    }
}

/// Whether the session keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Whose board is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// The game being played; selections are accepted.
    Live,
    /// A loaded record; viewing only.
    Archive,
}

/// Events processed by the session loop.
enum SessionEvent {
    Line(Result<Command, PlayError>),
    InputFailed(io::Error),
    InputClosed,
}

/// One game session writing its protocol output to `W`.
pub struct Session<W: Write> {
    turn: TurnCoordinator,
    view: Replay,
    mode: Mode,
    armed: Prompt,
    /// The live game's history while a loaded record is on screen.
    suspended: Option<Replay>,
    config: SessionConfig,
    out: W,
}

impl Session<io::Stdout> {
    /// A session writing to stdout.
    pub fn stdio() -> Self {
        Session::new(io::stdout())
    }
}

impl<W: Write> Session<W> {
    /// Create a session with a fresh game and default settings.
    pub fn new(out: W) -> Self {
        Session::with_config(out, SessionConfig::default())
    }

    /// Create a session with a fresh game and the given settings.
    pub fn with_config(out: W, config: SessionConfig) -> Self {
        let turn = TurnCoordinator::new();
        let armed = turn.prompt();
        Self {
            turn,
            view: Replay::new(),
            mode: Mode::Live,
            armed,
            suspended: None,
            config,
            out,
        }
    }

    /// Return the current display settings.
    #[inline]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Return the coordinator of the game in progress.
    #[inline]
    pub fn turn(&self) -> &TurnCoordinator {
        &self.turn
    }

    /// Return the history on screen: the live game's, or a loaded record's.
    #[inline]
    pub fn view(&self) -> &Replay {
        &self.view
    }

    /// The affordances currently enabled. Empty while viewing a loaded record.
    #[inline]
    pub fn armed(&self) -> &Prompt {
        &self.armed
    }

    /// Consume the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until `quit` or end of input, reading lines from `input` on a reader thread.
    ///
    /// # Errors
    ///
    /// Only a failed read or write ends the session early. Malformed lines,
    /// including ones that are not UTF-8, are reported and skipped.
    pub fn run<R>(mut self, mut input: R) -> Result<W, PlayError>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<SessionEvent>();

        thread::spawn(move || {
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match input.read_until(b'\n', &mut buf) {
                    Ok(0) => break,
                    Ok(_) => {
                        let event = match std::str::from_utf8(&buf) {
                            Ok(line) => {
                                let trimmed = line.trim();
                                if trimmed.is_empty() {
                                    continue;
                                }
                                debug!(cmd = %trimmed, "received command");
                                SessionEvent::Line(parse_command(trimmed))
                            }
                            Err(_) => SessionEvent::Line(Err(PlayError::InvalidEncoding)),
                        };
                        if tx.send(event).is_err() {
                            return;
                        }
                    }
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(e) => {
                        let _ = tx.send(SessionEvent::InputFailed(e));
                        return;
                    }
                }
            }
            let _ = tx.send(SessionEvent::InputClosed);
        });

        info!("session started");
        self.print_board()?;
        self.print_prompt()?;

        for event in rx {
            let result = match event {
                SessionEvent::Line(Ok(command)) => self.handle(command),
                SessionEvent::Line(Err(e)) => Err(e),
                SessionEvent::InputFailed(e) => return Err(e.into()),
                SessionEvent::InputClosed => break,
            };
            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e @ PlayError::Io { .. }) => return Err(e),
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(self.out, "error: {e}")?;
                }
            }
        }

        info!("session closed");
        Ok(self.out)
    }

    /// Apply one command.
    ///
    /// # Errors
    ///
    /// Rejected commands leave the game untouched and return the reason.
    pub fn handle(&mut self, command: Command) -> Result<Flow, PlayError> {
        match command {
            Command::NewGame => self.handle_new(Position::initial(), Side::Light)?,
            Command::Position(position, side) => self.handle_new(position, side)?,
            Command::Select(square) => self.handle_select(square)?,
            Command::Undo => self.handle_undo()?,
            Command::Back => {
                let mv = self.view.step_back()?;
                self.print_view(&format!("back over {mv}"))?;
            }
            Command::Forward => {
                let mv = self.view.step_forward()?;
                self.print_view(&format!("forward over {mv}"))?;
            }
            Command::Start => {
                let steps = self.view.rewind()?;
                self.print_view(&format!("rewound {steps} moves"))?;
            }
            Command::End => {
                let steps = self.view.fast_forward()?;
                self.print_view(&format!("advanced {steps} moves"))?;
            }
            Command::Show => {
                self.print_board()?;
                self.print_prompt()?;
            }
            Command::Load(moves) => self.handle_load(moves)?,
            Command::Resume => self.handle_resume()?,
            Command::Set(option) => self.handle_set(option)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(keyword) => {
                debug!(%keyword, "ignoring unknown command");
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_new(&mut self, position: Position, side: Side) -> Result<(), PlayError> {
        info!(%position, %side, "new game");
        self.turn = TurnCoordinator::from_position(position.clone(), side);
        self.view = Replay::from_position(position);
        self.suspended = None;
        self.mode = Mode::Live;
        self.rearm();
        writeln!(self.out, "new game, {side} to move")?;
        self.print_board()?;
        self.print_prompt()
    }

    fn handle_select(&mut self, square: Square) -> Result<(), PlayError> {
        if self.mode == Mode::Archive {
            return Err(PlayError::ReadOnly);
        }
        if !self.armed.enabled.contains(&square) {
            return Err(PlayError::NotSelectable {
                square: square.to_string(),
            });
        }

        let event = SelectionEvent {
            ticket: self.armed.ticket,
            square,
        };
        let before = self.turn.turn_state();
        match self.turn.handle(event)? {
            Transition::Origin(OriginOutcome::Armed(_)) => {
                self.rearm();
            }
            Transition::Origin(OriginOutcome::NoDestinations) => {
                writeln!(self.out, "no moves from {square}")?;
            }
            Transition::Destination(DestinationOutcome::Cancelled) => {
                self.rearm();
                writeln!(self.out, "cancelled")?;
            }
            Transition::Destination(DestinationOutcome::Applied(commit)) => {
                self.view.record(commit.mv)?;
                self.rearm();
                let mut line = format!("moved {}", commit.mv);
                if !commit.captured.is_empty() {
                    line.push_str(&format!(" capturing {}", commit.captured.kind()));
                }
                if commit.promoted {
                    line.push_str(" promoting to queen");
                }
                writeln!(self.out, "{line}")?;
                if self.view.is_historical() {
                    writeln!(self.out, "{}", self.viewing())?;
                }
                if before != self.turn.turn_state() {
                    debug!(side = %self.turn.active_side(), "active side changed");
                    self.print_board()?;
                }
            }
            Transition::Discarded => {
                self.rearm();
            }
        }
        self.print_prompt()
    }

    fn handle_undo(&mut self) -> Result<(), PlayError> {
        if self.mode == Mode::Archive {
            return Err(PlayError::ReadOnly);
        }
        let mv = self.turn.undo_last()?;
        self.view.forget_last()?;
        self.rearm();
        writeln!(self.out, "took back {mv}")?;
        self.print_board()?;
        self.print_prompt()
    }

    fn handle_load(&mut self, moves: Vec<Move>) -> Result<(), PlayError> {
        let view = Replay::from_moves(Position::initial(), moves)?;
        info!(moves = view.len(), "record loaded");
        let previous = mem::replace(&mut self.view, view);
        if self.mode == Mode::Live {
            self.suspended = Some(previous);
            self.mode = Mode::Archive;
            if !self.turn.moves().is_empty() {
                writeln!(
                    self.out,
                    "game in progress suspended after {} moves, resume to continue",
                    self.turn.moves().len()
                )?;
            }
        }
        self.rearm();
        self.print_view("loaded record")
    }

    fn handle_resume(&mut self) -> Result<(), PlayError> {
        let view = self.suspended.take().ok_or(PlayError::NothingToResume)?;
        info!("game resumed");
        self.view = view;
        self.mode = Mode::Live;
        self.rearm();
        writeln!(self.out, "resumed game, {} to move", self.turn.active_side())?;
        self.print_board()?;
        self.print_prompt()
    }

    fn handle_set(&mut self, option: SessionOption) -> Result<(), PlayError> {
        match option {
            SessionOption::Flip(on) => self.config.flip = on,
            SessionOption::Board(on) => self.config.board = on,
            SessionOption::Coords(on) => self.config.coords = on,
        }
        debug!(?option, "option set");
        Ok(())
    }

    /// Replace the enabled affordances with those of the coordinator's current phase.
    fn rearm(&mut self) {
        self.armed = match self.mode {
            Mode::Live => self.turn.prompt(),
            Mode::Archive => Prompt {
                ticket: self.turn.ticket(),
                kind: PromptKind::Origin,
                side: self.turn.active_side(),
                enabled: Vec::new(),
            },
        };
    }

    fn orientation(&self) -> Side {
        if self.config.flip && self.mode == Mode::Live {
            self.turn.turn_state().active
        } else {
            Side::Light
        }
    }

    fn viewing(&self) -> String {
        format!("viewing move {} of {}", self.view.cursor(), self.view.len())
    }

    fn print_view(&mut self, what: &str) -> Result<(), PlayError> {
        let line = format!("{what}, {}", self.viewing());
        writeln!(self.out, "{line}")?;
        self.print_board()
    }

    fn print_board(&mut self) -> Result<(), PlayError> {
        if !self.config.board {
            return Ok(());
        }
        let pretty = self
            .view
            .position()
            .pretty(self.orientation())
            .with_coords(self.config.coords);
        writeln!(self.out, "{pretty}")?;
        Ok(())
    }

    fn print_prompt(&mut self) -> Result<(), PlayError> {
        if self.mode == Mode::Archive {
            return Ok(());
        }
        let kind = match self.armed.kind {
            PromptKind::Origin => "origin",
            PromptKind::Destination => "destination",
        };
        let squares: Vec<String> = self.armed.enabled.iter().map(Square::to_string).collect();
        writeln!(
            self.out,
            "select {kind} for {}: {}",
            self.armed.side,
            squares.join(" ")
        )?;
        Ok(())
    }
}
