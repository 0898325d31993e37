//! Decoding of externally recorded games.
//!
//! Records address squares by a single linear index, `rank * 8 + file`, and
//! store each move as `from-to`, e.g. `12-20` for e2e3.

use rookery_core::{Move, Square};

use crate::error::PlayError;

/// Decode one `from-to` token.
pub fn decode_move(token: &str) -> Result<Move, PlayError> {
    let invalid = || PlayError::InvalidRecord {
        token: token.to_string(),
    };
    let (from, to) = token.split_once('-').ok_or_else(invalid)?;
    let from = parse_index(from).ok_or_else(invalid)?;
    let to = parse_index(to).ok_or_else(invalid)?;
    Ok(Move::new(from, to))
}

/// Decode every token of a record, stopping at the first malformed one.
pub fn decode_record<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Vec<Move>, PlayError> {
    tokens.into_iter().map(decode_move).collect()
}

fn parse_index(s: &str) -> Option<Square> {
    let index: u8 = s.parse().ok()?;
    Square::from_index(index)
}
