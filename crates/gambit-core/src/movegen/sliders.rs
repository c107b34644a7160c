//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Walk each direction until the edge or a piece. An enemy piece is
/// included, a friendly one is not.
pub(super) fn slider_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    for &(d_row, d_file) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_file) {
            match board.color_at(to) {
                None => moves.insert(to),
                Some(other) => {
                    if other != color {
                        moves.insert(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS, slider_moves};
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn rook_on_empty_board_sees_fourteen_squares() {
        let mut board = Board::empty();
        board.set(Square::D4, Some(Piece::WHITE_ROOK));
        assert_eq!(
            slider_moves(&board, Square::D4, Color::White, &ROOK_DIRECTIONS).len(),
            14
        );
    }

    #[test]
    fn bishop_stops_at_blockers() {
        let mut board = Board::empty();
        board.set(Square::C1, Some(Piece::WHITE_BISHOP));
        board.set(Square::E3, Some(Piece::BLACK_PAWN));
        board.set(Square::B2, Some(Piece::WHITE_PAWN));
        let moves = slider_moves(&board, Square::C1, Color::White, &BISHOP_DIRECTIONS);
        assert_eq!(moves.len(), 2, "d2 and the capture on e3: {moves:?}");
        assert!(moves.contains(Square::D2));
        assert!(moves.contains(Square::E3));
        assert!(!moves.contains(Square::F4));
    }

    #[test]
    fn starting_rook_is_boxed_in() {
        let board = Board::starting_position();
        assert!(slider_moves(&board, Square::A1, Color::White, &ROOK_DIRECTIONS).is_empty());
    }
}
