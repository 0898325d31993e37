//! Piece-placement strings (the first field of FEN) for [`Position`].

use std::fmt;
use std::str::FromStr;

use crate::error::FenError;
use crate::piece::Piece;
use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

/// Placement string of the standard initial layout.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Position {
    type Err = FenError;

    fn from_str(placement: &str) -> Result<Position, FenError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut position = Position::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // Placement lists rank 7 first.
            let rank = 7 - rank_index as u8;
            let mut file: u8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file = file.saturating_add(digit as u8);
                    continue;
                }
                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let sq = Square::try_new(rank, file).ok_or(FenError::BadRankLength {
                    rank_index,
                    length: file as usize + 1,
                })?;
                position.set_piece(sq, piece);
                file += 1;
            }

            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file as usize,
                });
            }
        }

        Ok(position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty = 0;
            for file in 0u8..8 {
                match self.piece_at(Square::new(rank, file)).fen_char() {
                    Some(c) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{c}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

/// Parse a side-to-move field: `w`/`light` or `b`/`dark`.
pub fn parse_side(s: &str) -> Result<Side, FenError> {
    match s {
        "w" | "light" => Ok(Side::Light),
        "b" | "dark" => Ok(Side::Dark),
        other => Err(FenError::InvalidSide {
            found: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{STARTING_PLACEMENT, parse_side};
    use crate::error::FenError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::side::Side;
    use crate::square::Square;

    #[test]
    fn starting_placement_matches_initial() {
        let parsed: Position = STARTING_PLACEMENT.parse().unwrap();
        assert_eq!(parsed, Position::initial());
        assert_eq!(format!("{}", Position::initial()), STARTING_PLACEMENT);
    }

    #[test]
    fn sparse_placement() {
        let position: Position = "8/8/8/8/3R4/8/8/8".parse().unwrap();
        assert_eq!(
            position.piece_at(Square::new(3, 3)),
            Piece::new(PieceKind::Rook, Side::Light)
        );
        assert_eq!(position.squares_of(Side::Light).count(), 1);
        assert_eq!(format!("{position}"), "8/8/8/8/3R4/8/8/8");
    }

    #[test]
    fn empty_board_display() {
        assert_eq!(format!("{}", Position::empty()), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn wrong_rank_count() {
        let err = "8/8/8".parse::<Position>().unwrap_err();
        assert_eq!(err, FenError::WrongRankCount { found: 3 });
    }

    #[test]
    fn bad_rank_length() {
        let err = "8/8/8/8/8/8/8/7".parse::<Position>().unwrap_err();
        assert_eq!(
            err,
            FenError::BadRankLength {
                rank_index: 7,
                length: 7
            }
        );
        let err = "8/8/8/8/8/8/8/8p".parse::<Position>().unwrap_err();
        assert!(matches!(err, FenError::BadRankLength { rank_index: 7, .. }));
    }

    #[test]
    fn invalid_piece_char() {
        let err = "8/8/8/8/8/8/8/7x".parse::<Position>().unwrap_err();
        assert_eq!(err, FenError::InvalidPieceChar { character: 'x' });
    }

    #[test]
    fn side_field() {
        assert_eq!(parse_side("w"), Ok(Side::Light));
        assert_eq!(parse_side("dark"), Ok(Side::Dark));
        assert!(matches!(parse_side("x"), Err(FenError::InvalidSide { .. })));
    }
}
