//! Static evaluation: material plus piece-square tables.
//!
//! Scores are from White's perspective: positive favours White, negative
//! favours Black. There is no mobility, pawn-structure or king-safety
//! term beyond what the tables encode.

pub mod material;
pub mod pst;

use gambit_core::Board;

use self::material::material;
use self::pst::pst_value;

/// Evaluate `board` from White's perspective.
pub fn evaluate(board: &Board) -> i32 {
    let positional: i32 = board
        .pieces()
        .map(|(sq, piece)| pst_value(piece, sq))
        .sum();
    material(board) + positional
}

#[cfg(test)]
mod tests {
    use super::evaluate;
    use gambit_core::{Board, GameState, Piece, Square};

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(evaluate(&Board::starting_position()), 0);
    }

    #[test]
    fn extra_queen_is_worth_about_ninety() {
        let mut board = Board::starting_position();
        board.set(Square::D8, None);
        let score = evaluate(&board);
        assert!(
            (85..=95).contains(&score),
            "missing black queen should give White ~90, got {score}"
        );
    }

    #[test]
    fn mirrored_position_negates_the_score() {
        let white: GameState = "4k3/8/8/8/3N4/8/1P6/4K3 w - - 0 1".parse().unwrap();
        let black: GameState = "4k3/1p6/8/3n4/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(evaluate(white.board()), -evaluate(black.board()));
        assert!(evaluate(white.board()) > 0);
    }

    #[test]
    fn material_dominates_a_lost_knight() {
        let mut board = Board::starting_position();
        board.set(Square::G1, None);
        let score = evaluate(&board);
        assert!(
            (-40..=-20).contains(&score),
            "missing white knight should give Black ~30, got {score}"
        );
    }

    #[test]
    fn central_knight_beats_rim_knight() {
        let mut centre = Board::empty();
        centre.set(Square::D4, Some(Piece::WHITE_KNIGHT));
        let mut rim = Board::empty();
        rim.set(Square::A1, Some(Piece::WHITE_KNIGHT));
        assert!(evaluate(&centre) > evaluate(&rim));
    }
}
