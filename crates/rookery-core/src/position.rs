//! The 8x8 grid of board cells.

use std::fmt;

use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// Board contents: exactly one [`Piece`] per square, empty cells included.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Position {
    cells: [Piece; Square::COUNT],
}

impl Position {
    /// A board with every cell empty.
    pub const fn empty() -> Position {
        Position {
            cells: [Piece::EMPTY; Square::COUNT],
        }
    }

    /// The standard initial layout: light on ranks 0-1, dark on ranks 6-7.
    pub fn initial() -> Position {
        let mut position = Position::empty();
        for file in 0u8..8 {
            let back = PieceKind::BACK_RANK[file as usize];
            position.set_piece(Square::new(0, file), Piece::new(back, Side::Light));
            position.set_piece(Square::new(1, file), Piece::new(PieceKind::Pawn, Side::Light));
            position.set_piece(Square::new(6, file), Piece::new(PieceKind::Pawn, Side::Dark));
            position.set_piece(Square::new(7, file), Piece::new(back, Side::Dark));
        }
        position
    }

    /// Return the cell at `sq`. Total: empty cells yield [`Piece::EMPTY`].
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.cells[sq.index()]
    }

    /// Overwrite the cell at `sq` without any legality check.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.index()] = piece;
    }

    /// Return `true` if `sq` holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_empty()
    }

    /// Iterate over the occupied squares owned by `side`, in index order.
    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.piece_at(sq).belongs_to(side))
    }

    /// Return a pretty-printable view seen from `orientation`'s side of the table.
    pub fn pretty(&self, orientation: Side) -> PrettyPosition<'_> {
        PrettyPosition {
            position: self,
            orientation,
            coords: true,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::initial()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{self}\")")
    }
}

/// Wrapper for printing a position as an 8x8 grid.
pub struct PrettyPosition<'a> {
    position: &'a Position,
    orientation: Side,
    coords: bool,
}

impl PrettyPosition<'_> {
    /// Toggle the rank and file labels.
    pub fn with_coords(mut self, coords: bool) -> Self {
        self.coords = coords;
        self
    }
}

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The viewing side's back rank sits at the bottom.
        let (ranks, files): ([u8; 8], [u8; 8]) = match self.orientation {
            Side::Light => ([7, 6, 5, 4, 3, 2, 1, 0], [0, 1, 2, 3, 4, 5, 6, 7]),
            Side::Dark => ([0, 1, 2, 3, 4, 5, 6, 7], [7, 6, 5, 4, 3, 2, 1, 0]),
        };
        for rank in ranks {
            if self.coords {
                write!(f, "{}  ", rank + 1)?;
            }
            for (i, file) in files.into_iter().enumerate() {
                let piece = self.position.piece_at(Square::new(rank, file));
                if i < 7 {
                    write!(f, "{piece} ")?;
                } else {
                    write!(f, "{piece}")?;
                }
            }
            writeln!(f)?;
        }
        if self.coords {
            write!(f, "  ")?;
            for file in files {
                write!(f, " {}", (b'a' + file) as char)?;
            }
        }
        Ok(())
    }
}
