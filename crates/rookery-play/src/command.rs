//! Session command parsing.

use rookery_core::{Move, Position, Side, Square, parse_side};

use crate::error::PlayError;
use crate::record::decode_record;

/// A runtime-adjustable session option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Show the board from the side to move.
    Flip(bool),
    /// Print the board after every change.
    Board(bool),
    /// Print rank and file labels.
    Coords(bool),
}

/// A parsed session command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- start a game from the initial layout.
    NewGame,
    /// `position <placement> [w|b]` -- start a game from a placement string.
    Position(Position, Side),
    /// `select <square>` -- pick an origin or destination.
    Select(Square),
    /// `undo` -- take back the last committed move.
    Undo,
    /// `back` -- view the previous position.
    Back,
    /// `forward` -- view the next position.
    Forward,
    /// `start` -- view the initial position.
    Start,
    /// `end` -- view the latest position.
    End,
    /// `show` -- print the viewed board and the current prompt.
    Show,
    /// `load <from-to> ...` -- open a recorded game for viewing.
    Load(Vec<Move>),
    /// `resume` -- leave a loaded record and return to the suspended game.
    Resume,
    /// `set <name> <on|off>` -- change a session option.
    Set(SessionOption),
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command keyword.
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match keyword {
        "new" => Ok(Command::NewGame),
        "position" => parse_position(args),
        "select" => parse_select(args),
        "undo" => Ok(Command::Undo),
        "back" => Ok(Command::Back),
        "forward" => Ok(Command::Forward),
        "start" => Ok(Command::Start),
        "end" => Ok(Command::End),
        "show" => Ok(Command::Show),
        "load" => Ok(Command::Load(decode_record(args.iter().copied())?)),
        "resume" => Ok(Command::Resume),
        "set" => parse_set(args),
        "quit" => Ok(Command::Quit),
        other => Ok(Command::Unknown(other.to_string())),
    }
}

fn parse_position(args: &[&str]) -> Result<Command, PlayError> {
    let placement = args.first().ok_or(PlayError::MissingArgument {
        command: "position",
    })?;
    let position: Position = placement.parse()?;
    let side = match args.get(1) {
        Some(field) => parse_side(field)?,
        None => Side::Light,
    };
    Ok(Command::Position(position, side))
}

fn parse_select(args: &[&str]) -> Result<Command, PlayError> {
    let value = args
        .first()
        .ok_or(PlayError::MissingArgument { command: "select" })?;
    let square = Square::from_algebraic(value).ok_or_else(|| PlayError::InvalidSquare {
        value: value.to_string(),
    })?;
    Ok(Command::Select(square))
}

fn parse_set(args: &[&str]) -> Result<Command, PlayError> {
    let (Some(&name), Some(&value)) = (args.first(), args.get(1)) else {
        return Err(PlayError::MissingArgument { command: "set" });
    };
    let enabled = match value {
        "on" | "true" => true,
        "off" | "false" => false,
        _ => {
            return Err(PlayError::InvalidOptionValue {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    };
    let option = match name {
        "flip" => SessionOption::Flip(enabled),
        "board" => SessionOption::Board(enabled),
        "coords" => SessionOption::Coords(enabled),
        _ => {
            return Err(PlayError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::Set(option))
}
