//! The 8x8 grid of pieces.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank piece order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement only: who stands where.
///
/// Side to move, castling rights and the en-passant target live in
/// [`GameState`](crate::game_state::GameState). A `Board` is `Copy`, so
/// an independent copy is always explicit at the call site.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Indexed by [`Square::index`], row-major from a8.
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// The standard starting placement.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                if let Some(sq) = Square::new(color.back_row(), file as u8) {
                    board.set(sq, Some(Piece::new(*kind, color)));
                }
                if let Some(sq) = Square::new(color.pawn_row(), file as u8) {
                    board.set(sq, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        board
    }

    /// The piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Put `piece` on `sq` (or clear it with `None`).
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Return `true` if nothing stands on `sq`.
    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Color of the piece on `sq`, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Where `color`'s king stands. Scans the board, first king wins.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces().find(|(_, piece)| *piece == king).map(|(sq, _)| sq)
    }

    /// Check that each side has exactly one king and no pawn stands on a back rank.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let king = Piece::new(PieceKind::King, color);
            let count = self.pieces().filter(|(_, piece)| *piece == king).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count,
                });
            }
        }

        if let Some((sq, _)) = self.pieces().find(|(sq, piece)| {
            piece.kind() == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7)
        }) {
            return Err(BoardError::PawnOnBackRank {
                square: sq.to_string(),
            });
        }

        Ok(())
    }

    /// The piece-placement field of the board-state encoding.
    pub fn placement(&self) -> Placement<'_> {
        Placement(self)
    }

    /// Return a wrapper that displays the board as an 8x8 grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement())
    }
}

/// Rank-major placement text, e.g. `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
pub struct Placement<'a>(&'a Board);

impl fmt::Display for Placement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            let mut empty_run = 0u8;
            for file in 0u8..8 {
                let piece = Square::new(row, file).and_then(|sq| self.0.piece_at(sq));
                match piece {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for file in 0u8..8 {
                let c = Square::new(row, file)
                    .and_then(|sq| self.0.piece_at(sq))
                    .map_or('.', Piece::fen_char);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_position_validates() {
        Board::starting_position().validate().unwrap();
    }

    #[test]
    fn starting_position_pieces() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(Square::D8), Some(Piece::BLACK_QUEEN));
        assert_eq!(board.piece_at(Square::A2), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(Square::H8), Some(Piece::BLACK_ROOK));
        assert!(board.is_empty_at(Square::E4));
        assert_eq!(board.pieces().count(), 32);
        let white = board
            .pieces()
            .filter(|(_, piece)| piece.color() == Color::White)
            .count();
        assert_eq!(white, 16);
    }

    #[test]
    fn king_squares() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::White), Some(Square::E1));
        assert_eq!(board.king_square(Color::Black), Some(Square::E8));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn validate_rejects_missing_king() {
        let mut board = Board::starting_position();
        board.set(Square::E8, None);
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount { color: "black", count: 0 })
        );
    }

    #[test]
    fn validate_rejects_back_rank_pawn() {
        let mut board = Board::starting_position();
        board.set(Square::B8, Some(Piece::WHITE_PAWN));
        assert!(matches!(board.validate(), Err(BoardError::PawnOnBackRank { .. })));
    }

    #[test]
    fn placement_text() {
        let board = Board::starting_position();
        assert_eq!(
            board.placement().to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn pretty_grid() {
        let text = Board::starting_position().pretty().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
