//! Attack and check detection.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::pseudo_moves;

/// Squares of `attacker`'s pieces that attack the opposing king.
///
/// Built from pseudo-moves with castling forced off and no en-passant
/// target. A board without the opposing king yields the empty set.
pub fn checkers(board: &Board, attacker: Color) -> SquareSet {
    let Some(king) = board.king_square(attacker.flip()) else {
        return SquareSet::EMPTY;
    };
    board
        .pieces()
        .filter(|(sq, piece)| piece.color() == attacker && attacks(board, *sq, king))
        .map(|(sq, _)| sq)
        .collect()
}

/// Return `true` if `side`'s king is attacked by the opponent.
pub fn is_in_check(board: &Board, side: Color) -> bool {
    let Some(king) = board.king_square(side) else {
        return false;
    };
    board
        .pieces()
        .any(|(sq, piece)| piece.color() != side && attacks(board, sq, king))
}

#[inline]
fn attacks(board: &Board, from: Square, target: Square) -> bool {
    pseudo_moves(board, from, None, CastleRights::NONE).contains(target)
}
