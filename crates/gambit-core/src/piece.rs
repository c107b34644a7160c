//! Colored chess piece carrying its integer code.

use std::fmt;
use std::num::NonZeroU8;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece, stored as its piece code.
///
/// Codes 1-6 are the white pawn, knight, bishop, rook, queen and king;
/// codes 7-12 are the black pieces in the same order. Code 0 means an
/// empty square and is represented as `None` in an `Option<Piece>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(NonZeroU8);

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// All 12 pieces in code order.
    pub const ALL: [Piece; 12] = [
        Self::WHITE_PAWN,
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_ROOK,
        Self::WHITE_QUEEN,
        Self::WHITE_KING,
        Self::BLACK_PAWN,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_ROOK,
        Self::BLACK_QUEEN,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        let offset = match color {
            Color::White => 0,
            Color::Black => PieceKind::COUNT as u8,
        };
        match NonZeroU8::new(kind as u8 + offset) {
            Some(code) => Piece(code),
            None => panic!("piece codes start at 1"),
        }
    }

    /// Decode a piece code. `0` and anything above `12` yield `None`.
    #[inline]
    pub const fn from_code(code: u8) -> Option<Piece> {
        match code {
            1..=12 => match NonZeroU8::new(code) {
                Some(code) => Some(Piece(code)),
                None => None,
            },
            _ => None,
        }
    }

    /// The piece code (1..=12).
    #[inline]
    pub const fn code(self) -> u8 {
        self.0.get()
    }

    /// The kind of this piece.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match (self.0.get() - 1) % PieceKind::COUNT as u8 {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    /// The side this piece belongs to.
    #[inline]
    pub const fn color(self) -> Color {
        if self.0.get() <= PieceKind::COUNT as u8 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Parse a piece letter: uppercase is White, lowercase is Black.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// The piece letter: uppercase for White, lowercase for Black.
    #[inline]
    pub fn fen_char(self) -> char {
        let c = self.kind().fen_char();
        match self.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({}={})", self.code(), self.fen_char())
    }
}
