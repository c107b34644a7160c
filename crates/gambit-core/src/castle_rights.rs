//! Castling rights as a four-flag set.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File the rook starts on.
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the rook lands on after castling.
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// File the king lands on after castling.
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }
}

/// Castling rights: bit 0 = White king side, 1 = White queen side,
/// 2 = Black king side, 3 = Black queen side.
///
/// Within one game rights are only ever removed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if all flags in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Return new rights with the flags of `other` added.
    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    /// Return new rights with the flags of `other` removed.
    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Check whether `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::flag(color, side))
    }

    /// Remove both rights of `color`.
    #[inline]
    pub const fn remove_color(self, color: Color) -> CastleRights {
        self.remove(Self::flag(color, CastleSide::KingSide))
            .remove(Self::flag(color, CastleSide::QueenSide))
    }

    /// Remove the right tied to a rook corner if `sq` is one of the four corners.
    ///
    /// A move from or to a corner either moves that rook or captures it.
    pub const fn touch(self, sq: Square) -> CastleRights {
        match sq {
            Square::H1 => self.remove(Self::WHITE_KING),
            Square::A1 => self.remove(Self::WHITE_QUEEN),
            Square::H8 => self.remove(Self::BLACK_KING),
            Square::A8 => self.remove(Self::BLACK_QUEEN),
            _ => self,
        }
    }

    /// The single flag for a color and side.
    #[inline]
    pub const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    /// Parse the castling field of the board-state encoding (e.g. "KQkq", "Kq", "-").
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }

        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            let flag = match c {
                'K' => Self::WHITE_KING,
                'Q' => Self::WHITE_QUEEN,
                'k' => Self::BLACK_KING,
                'q' => Self::BLACK_QUEEN,
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            rights = rights.insert(flag);
        }
        Ok(rights)
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (flag, c) in [
            (Self::WHITE_KING, 'K'),
            (Self::WHITE_QUEEN, 'Q'),
            (Self::BLACK_KING, 'k'),
            (Self::BLACK_QUEEN, 'q'),
        ] {
            if self.contains(flag) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn from_fen_and_display() {
        for text in ["KQkq", "Kq", "k", "-", "KQ", "kq"] {
            let rights = CastleRights::from_fen(text).unwrap();
            assert_eq!(rights.to_string(), text, "roundtrip failed for {text}");
        }
        assert_eq!(CastleRights::from_fen("KQkq").unwrap(), CastleRights::ALL);
        // Out-of-order input is accepted and printed canonically.
        assert_eq!(CastleRights::from_fen("qK").unwrap().to_string(), "Kq");
    }

    #[test]
    fn from_fen_invalid() {
        assert!(CastleRights::from_fen("KQxq").is_err());
        assert!(CastleRights::from_fen("1").is_err());
    }

    #[test]
    fn has_color_side() {
        let rights = CastleRights::from_fen("Kq").unwrap();
        assert!(rights.has(Color::White, CastleSide::KingSide));
        assert!(!rights.has(Color::White, CastleSide::QueenSide));
        assert!(!rights.has(Color::Black, CastleSide::KingSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn remove_color_keeps_the_other_side() {
        let rights = CastleRights::ALL.remove_color(Color::White);
        assert_eq!(rights.to_string(), "kq");
        assert_eq!(CastleRights::ALL.remove_color(Color::Black).to_string(), "KQ");
    }

    #[test]
    fn touching_a_corner_revokes_one_right() {
        assert_eq!(CastleRights::ALL.touch(Square::H1).to_string(), "Qkq");
        assert_eq!(CastleRights::ALL.touch(Square::A8).to_string(), "KQk");
        assert_eq!(CastleRights::ALL.touch(Square::E4), CastleRights::ALL);
    }

    #[test]
    fn side_files() {
        assert_eq!(CastleSide::KingSide.king_target_file(), 6);
        assert_eq!(CastleSide::QueenSide.rook_target_file(), 3);
    }
}
