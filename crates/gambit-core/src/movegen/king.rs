//! King move and castling generation.

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::color::Color;
use crate::make_move::simulate_move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::check::is_in_check;
use super::knights::step_moves;

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Pseudo-legal king destinations, castling included when `castling` allows it.
pub(super) fn king_moves(
    board: &Board,
    from: Square,
    color: Color,
    castling: CastleRights,
) -> SquareSet {
    step_moves(board, from, color, &KING_OFFSETS) | castle_moves(board, from, color, castling)
}

/// Castling destinations (the king's two-file step).
///
/// Requires the right, the king on its home square, a friendly rook on the
/// corner, every square between them empty, the king not in check, and
/// neither the square it crosses nor the one it lands on attacked.
fn castle_moves(board: &Board, from: Square, color: Color, castling: CastleRights) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    let row = color.back_row();
    if castling.remove_color(color.flip()).is_empty() || Square::new(row, 4) != Some(from) {
        return moves;
    }
    // Evaluated lazily, at most once.
    let mut in_check = None;

    for side in CastleSide::ALL {
        if !castling.has(color, side) {
            continue;
        }
        let Some(rook_from) = Square::new(row, side.rook_file()) else {
            continue;
        };
        if board.piece_at(rook_from) != Some(Piece::new(PieceKind::Rook, color)) {
            continue;
        }

        let (low, high) = match side {
            CastleSide::KingSide => (5, 6),
            CastleSide::QueenSide => (1, 3),
        };
        let path_clear = (low..=high)
            .filter_map(|file| Square::new(row, file))
            .all(|sq| board.is_empty_at(sq));
        if !path_clear {
            continue;
        }

        if *in_check.get_or_insert_with(|| is_in_check(board, color)) {
            return moves;
        }

        let crossing = Square::new(row, side.rook_target_file());
        let landing = Square::new(row, side.king_target_file());
        let (Some(crossing), Some(landing)) = (crossing, landing) else {
            continue;
        };
        let safe = [crossing, landing]
            .into_iter()
            .all(|to| !is_in_check(&simulate_move(board, from, to), color));
        if safe {
            moves.insert(landing);
        }
    }

    moves
}
