//! Material balance evaluation.

use gambit_core::{Board, Color, Piece, PieceKind};

/// Base material values indexed by [`PieceKind::index()`].
///
/// | Piece  | value |
/// |--------|-------|
/// | Pawn   |    10 |
/// | Knight |    30 |
/// | Bishop |    30 |
/// | Rook   |    50 |
/// | Queen  |    90 |
/// | King   |   900 |
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [10, 30, 30, 50, 90, 900];

/// Signed material value of `piece`: positive for White, negative for Black.
#[inline]
pub fn piece_value(piece: Piece) -> i32 {
    let value = MATERIAL_VALUE[piece.kind().index()];
    match piece.color() {
        Color::White => value,
        Color::Black => -value,
    }
}

/// Material balance from White's perspective.
pub fn material(board: &Board) -> i32 {
    board.pieces().map(|(_, piece)| piece_value(piece)).sum()
}
