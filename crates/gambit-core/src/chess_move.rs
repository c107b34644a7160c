//! Coordinate-pair moves.

use std::fmt;

use crate::square::Square;

/// A move as an ordered (source, destination) pair.
///
/// There is no promotion field: a pawn reaching the last rank always
/// becomes a queen. Castling is written as the king's two-file step and
/// en passant as the pawn's diagonal step onto the empty target square.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Create a move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Parse coordinate notation: `"e2e4"`, or `"e2 e4"` with any whitespace between.
    pub fn from_coords(s: &str) -> Option<Move> {
        let compact: String = s.split_whitespace().collect();
        if compact.len() != 4 || !compact.is_ascii() {
            return None;
        }
        let from = Square::from_algebraic(&compact[..2])?;
        let to = Square::from_algebraic(&compact[2..])?;
        Some(Move::new(from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
