//! Pawn move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Pseudo-legal pawn destinations: single and double pushes, diagonal
/// captures, and the en-passant capture onto `en_passant`.
///
/// The en-passant target only counts when it lies on `color`'s
/// en-passant row, so a stale target can never be captured onto.
pub(super) fn pawn_moves(
    board: &Board,
    from: Square,
    color: Color,
    en_passant: Option<Square>,
) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    let forward = color.forward();

    // Pushes
    if let Some(one) = from.offset(forward, 0)
        && board.is_empty_at(one)
    {
        moves.insert(one);
        if from.row() == color.pawn_row()
            && let Some(two) = one.offset(forward, 0)
            && board.is_empty_at(two)
        {
            moves.insert(two);
        }
    }

    // Captures
    for d_file in [-1, 1] {
        let Some(to) = from.offset(forward, d_file) else {
            continue;
        };
        match board.color_at(to) {
            Some(other) if other != color => moves.insert(to),
            None if en_passant == Some(to) && to.row() == color.en_passant_row() => {
                moves.insert(to)
            }
            _ => {}
        }
    }

    moves
}
