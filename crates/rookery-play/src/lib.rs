//! Text-protocol session for rookery: reads selection commands line by line and
//! drives the turn coordinator, printing prompts and boards.

pub mod command;
pub mod error;
pub mod record;
pub mod session;

pub use command::{Command, SessionOption, parse_command};
pub use error::PlayError;
pub use record::{decode_move, decode_record};
pub use session::{Flow, Session, SessionConfig};
