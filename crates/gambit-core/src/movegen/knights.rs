//! Knight move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Pseudo-legal knight destinations.
pub(super) fn knight_moves(board: &Board, from: Square, color: Color) -> SquareSet {
    step_moves(board, from, color, &KNIGHT_OFFSETS)
}

/// Destinations one fixed step away, on the board and not held by `color`.
pub(super) fn step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(d_row, d_file)| from.offset(d_row, d_file))
        .filter(|&to| board.color_at(to) != Some(color))
        .collect()
}
