//! Text-protocol errors.

use rookery_core::{FenError, ReplayError, TurnError};

/// Errors that can occur while parsing or running session commands.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// A command was given without a required argument.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
    },

    /// A square argument is not in `a1`..`h8` form.
    #[error("invalid square: {value}")]
    InvalidSquare {
        /// The rejected token.
        value: String,
    },

    /// A recorded move is not a `from-to` pair of indices in `0..64`.
    #[error("invalid recorded move: {token}")]
    InvalidRecord {
        /// The rejected token.
        token: String,
    },

    /// The placement string of a `position` command failed to parse.
    #[error("invalid position: {source}")]
    InvalidPosition {
        /// The underlying parse error.
        #[from]
        source: FenError,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `set` was given a value other than `on`/`off`.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The square was not among the enabled affordances.
    #[error("{square} is not selectable right now")]
    NotSelectable {
        /// The rejected square, as typed.
        square: String,
    },

    /// An input line was not valid UTF-8.
    #[error("input line is not valid UTF-8")]
    InvalidEncoding,

    /// `resume` was given while no loaded record is open.
    #[error("no game is suspended")]
    NothingToResume,

    /// A loaded game is open for viewing only.
    #[error("archived game is read-only")]
    ReadOnly,

    /// The coordinator rejected a selection.
    #[error(transparent)]
    Turn(#[from] TurnError),

    /// The history viewer could not move.
    #[error(transparent)]
    Replay(#[from] ReplayError),

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
