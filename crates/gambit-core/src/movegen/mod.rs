//! Move generation: pseudo-legal destinations per piece, and the legal
//! filter built on top of them.

mod check;
mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::make_move::simulate_move;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

pub use self::check::{checkers, is_in_check};

use self::king::king_moves;
use self::knights::knight_moves;
use self::pawns::pawn_moves;
use self::sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS, slider_moves};

/// Pseudo-legal destinations of the piece on `from`, ignoring whether the
/// move leaves its own king attacked. An empty square yields the empty set.
pub fn pseudo_moves(
    board: &Board,
    from: Square,
    en_passant: Option<Square>,
    castling: CastleRights,
) -> SquareSet {
    let Some(piece) = board.piece_at(from) else {
        return SquareSet::EMPTY;
    };
    let color = piece.color();
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(board, from, color, en_passant),
        PieceKind::Knight => knight_moves(board, from, color),
        PieceKind::Bishop => slider_moves(board, from, color, &BISHOP_DIRECTIONS),
        PieceKind::Rook => slider_moves(board, from, color, &ROOK_DIRECTIONS),
        PieceKind::Queen => {
            slider_moves(board, from, color, &BISHOP_DIRECTIONS)
                | slider_moves(board, from, color, &ROOK_DIRECTIONS)
        }
        PieceKind::King => king_moves(board, from, color, castling),
    }
}

/// Legal destinations of the piece on `from`: the pseudo-moves after which
/// its own king is not attacked, each probed on a private copy.
pub fn legal_moves(
    board: &Board,
    from: Square,
    en_passant: Option<Square>,
    castling: CastleRights,
) -> SquareSet {
    let Some(color) = board.color_at(from) else {
        return SquareSet::EMPTY;
    };
    pseudo_moves(board, from, en_passant, castling)
        .filter(|&to| !is_in_check(&simulate_move(board, from, to), color))
        .collect()
}

/// Legal moves of `side`, grouped by origin square.
pub fn enumerate_all_legal_moves(
    board: &Board,
    side: Color,
    en_passant: Option<Square>,
    castling: CastleRights,
) -> LegalMoves {
    let mut moves = LegalMoves::new();
    for (from, piece) in board.pieces() {
        if piece.color() == side {
            moves.targets[from.index()] = legal_moves(board, from, en_passant, castling);
        }
    }
    moves
}

/// Legal destinations per origin square, held inline with no allocation.
///
/// Origins without a legal move are absent. An empty mapping means the
/// side has no legal move: checkmate or stalemate.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LegalMoves {
    targets: [SquareSet; Square::COUNT],
}

impl LegalMoves {
    fn new() -> LegalMoves {
        LegalMoves {
            targets: [SquareSet::EMPTY; Square::COUNT],
        }
    }

    /// Legal destinations from `from` (empty if none).
    #[inline]
    pub fn get(&self, from: Square) -> SquareSet {
        self.targets[from.index()]
    }

    /// Return `true` if `mv` is legal.
    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        self.get(mv.from()).contains(mv.to())
    }

    /// Return `true` if there are no legal moves at all.
    pub fn is_empty(&self) -> bool {
        self.targets.iter().all(|&set| set.is_empty())
    }

    /// Total number of legal moves.
    pub fn len(&self) -> usize {
        self.targets.iter().map(|&set| set.len()).sum()
    }

    /// Origins with their non-empty destination sets, in row-major order.
    pub fn origins(&self) -> impl Iterator<Item = (Square, SquareSet)> + '_ {
        Square::all()
            .map(|sq| (sq, self.get(sq)))
            .filter(|&(_, set)| !set.is_empty())
    }

    /// Every legal move, ordered by origin then destination (both row-major).
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.origins()
            .flat_map(|(from, targets)| targets.map(move |to| Move::new(from, to)))
    }
}

impl std::fmt::Debug for LegalMoves {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.origins()
                    .map(|(from, targets)| (from, targets.collect::<Vec<_>>())),
            )
            .finish()
    }
}
