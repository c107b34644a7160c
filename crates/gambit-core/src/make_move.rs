//! Move execution: in-place apply with an undo record, exact reversal, and
//! simulate-on-a-copy for legality probing.

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Most squares one move can touch: king, king target, rook, rook target.
const MAX_TOUCHED: usize = 4;

/// Pre-move contents of every square one [`apply_move`] changed, in the
/// order they were recorded. Each square appears at most once.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct UndoRecord {
    entries: [(Square, Option<Piece>); MAX_TOUCHED],
    len: u8,
}

impl UndoRecord {
    fn new() -> UndoRecord {
        UndoRecord {
            entries: [(Square::A8, None); MAX_TOUCHED],
            len: 0,
        }
    }

    fn record(&mut self, board: &Board, sq: Square) {
        if self.entries().iter().any(|(seen, _)| *seen == sq) {
            return;
        }
        debug_assert!((self.len as usize) < MAX_TOUCHED);
        self.entries[self.len as usize] = (sq, board.piece_at(sq));
        self.len += 1;
    }

    /// The recorded `(square, previous piece)` pairs.
    #[inline]
    pub fn entries(&self) -> &[(Square, Option<Piece>)] {
        &self.entries[..self.len as usize]
    }

    /// Number of touched squares.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the move touched nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Debug for UndoRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries()).finish()
    }
}

/// Metadata produced by [`apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Castling rights after the move.
    pub castling: CastleRights,
    /// En-passant target for the next ply only.
    pub en_passant: Option<Square>,
    /// What [`reverse_move`] needs to put the squares back.
    pub undo: UndoRecord,
}

/// Square changes a move implies beyond relocating the moving piece.
struct Effects {
    /// What ends up on the destination (a queen after promotion).
    placed: Piece,
    /// Pawn removed by an en-passant capture.
    en_passant_victim: Option<Square>,
    /// Rook relocation of a castling move.
    rook: Option<(Square, Square)>,
}

impl Effects {
    fn of(board: &Board, from: Square, to: Square) -> Option<Effects> {
        let piece = board.piece_at(from)?;
        let color = piece.color();
        let mut effects = Effects {
            placed: piece,
            en_passant_victim: None,
            rook: None,
        };

        match piece.kind() {
            PieceKind::Pawn => {
                // A diagonal step onto an empty square can only be en passant.
                if from.file() != to.file() && board.is_empty_at(to) {
                    effects.en_passant_victim = Square::new(from.row(), to.file());
                }
                if to.row() == color.promotion_row() {
                    effects.placed = Piece::new(PieceKind::Queen, color);
                }
            }
            PieceKind::King if from.file().abs_diff(to.file()) == 2 => {
                let side = if to.file() > from.file() {
                    CastleSide::KingSide
                } else {
                    CastleSide::QueenSide
                };
                effects.rook = Square::new(from.row(), side.rook_file())
                    .zip(Square::new(from.row(), side.rook_target_file()));
            }
            _ => {}
        }

        Some(effects)
    }

    fn touched(&self, from: Square, to: Square) -> impl Iterator<Item = Square> {
        let rook = self.rook.into_iter().flat_map(|(a, b)| [a, b]);
        [from, to].into_iter().chain(self.en_passant_victim).chain(rook)
    }

    fn execute(&self, board: &mut Board, from: Square, to: Square) {
        if let Some(victim) = self.en_passant_victim {
            board.set(victim, None);
        }
        if let Some((rook_from, rook_to)) = self.rook {
            let rook = board.piece_at(rook_from);
            board.set(rook_from, None);
            board.set(rook_to, rook);
        }
        board.set(from, None);
        board.set(to, Some(self.placed));
    }
}

/// Apply the move `from -> to` to `board` in place.
///
/// Captures, en passant, promotion to queen and the castling rook are all
/// handled. `castling` and `en_passant` are the rights and target before the
/// move. An empty `from` leaves the board untouched.
pub fn apply_move(
    board: &mut Board,
    from: Square,
    to: Square,
    en_passant: Option<Square>,
    castling: CastleRights,
) -> MoveOutcome {
    let mut undo = UndoRecord::new();
    let Some(effects) = Effects::of(board, from, to) else {
        return MoveOutcome {
            castling,
            en_passant: None,
            undo,
        };
    };
    debug_assert!(
        effects.en_passant_victim.is_none() || en_passant == Some(to),
        "en passant onto {to} without a matching target"
    );

    for sq in effects.touched(from, to) {
        undo.record(board, sq);
    }

    let mut castling = castling.touch(from).touch(to);
    let moved = effects.placed.color();
    let moved_kind = board.piece_at(from).map(Piece::kind);
    if moved_kind == Some(PieceKind::King) {
        castling = castling.remove_color(moved);
    }

    let en_passant = match moved_kind {
        Some(PieceKind::Pawn) if from.row().abs_diff(to.row()) == 2 => {
            Square::new((from.row() + to.row()) / 2, from.file())
        }
        _ => None,
    };

    effects.execute(board, from, to);

    MoveOutcome {
        castling,
        en_passant,
        undo,
    }
}

/// Put back every square recorded in `undo`, newest first.
///
/// Castling rights and the en-passant target are not part of the record;
/// callers keep their own copy from before the move.
pub fn reverse_move(board: &mut Board, undo: &UndoRecord) {
    for &(sq, piece) in undo.entries().iter().rev() {
        board.set(sq, piece);
    }
}

/// Return a copy of `board` with the move applied. `board` is not touched
/// and no metadata is produced.
pub fn simulate_move(board: &Board, from: Square, to: Square) -> Board {
    let mut copy = *board;
    if let Some(effects) = Effects::of(board, from, to) {
        effects.execute(&mut copy, from, to);
    }
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn board_with(pieces: &[(Square, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(sq, piece) in pieces {
            board.set(sq, Some(piece));
        }
        board
    }

    #[test]
    fn pawn_double_push_sets_target() {
        let mut board = Board::starting_position();
        let out = apply_move(&mut board, Square::E2, Square::E4, None, CastleRights::ALL);
        assert_eq!(out.en_passant, Some(Square::E3));
        assert_eq!(out.castling, CastleRights::ALL);
        assert_eq!(board.piece_at(Square::E4), Some(Piece::WHITE_PAWN));
        assert!(board.is_empty_at(Square::E2));
        assert_eq!(out.undo.len(), 2);
    }

    #[test]
    fn single_push_clears_target() {
        let mut board = Board::starting_position();
        let out = apply_move(&mut board, Square::D7, Square::D6, Some(Square::E3), CastleRights::ALL);
        assert_eq!(out.en_passant, None);
    }

    #[test]
    fn capture_records_the_victim() {
        let mut board = board_with(&[
            (Square::D4, Piece::WHITE_KNIGHT),
            (Square::E6, Piece::BLACK_BISHOP),
        ]);
        let out = apply_move(&mut board, Square::D4, Square::E6, None, CastleRights::NONE);
        assert_eq!(board.piece_at(Square::E6), Some(Piece::WHITE_KNIGHT));
        assert_eq!(
            out.undo.entries(),
            &[
                (Square::D4, Some(Piece::WHITE_KNIGHT)),
                (Square::E6, Some(Piece::BLACK_BISHOP)),
            ]
        );
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut board = board_with(&[
            (Square::E5, Piece::WHITE_PAWN),
            (Square::D5, Piece::BLACK_PAWN),
        ]);
        let before = board;
        let out = apply_move(&mut board, Square::E5, Square::D6, Some(Square::D6), CastleRights::NONE);
        assert_eq!(board.piece_at(Square::D6), Some(Piece::WHITE_PAWN));
        assert!(board.is_empty_at(Square::D5));
        assert!(board.is_empty_at(Square::E5));
        assert_eq!(out.undo.len(), 3);
        reverse_move(&mut board, &out.undo);
        assert_eq!(board, before);
    }

    #[test]
    fn promotion_makes_a_queen() {
        let mut board = board_with(&[(Square::A2, Piece::BLACK_PAWN)]);
        apply_move(&mut board, Square::A2, Square::A1, None, CastleRights::NONE);
        assert_eq!(board.piece_at(Square::A1), Some(Piece::BLACK_QUEEN));
    }

    #[test]
    fn kingside_castling_moves_the_rook() {
        let mut board = board_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::H1, Piece::WHITE_ROOK),
            (Square::A1, Piece::WHITE_ROOK),
        ]);
        let before = board;
        let out = apply_move(&mut board, Square::E1, Square::G1, None, CastleRights::ALL);
        assert_eq!(board.piece_at(Square::G1), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(Square::F1), Some(Piece::WHITE_ROOK));
        assert!(board.is_empty_at(Square::H1));
        assert_eq!(out.castling, CastleRights::ALL.remove_color(Color::White));
        assert_eq!(out.undo.len(), 4);
        reverse_move(&mut board, &out.undo);
        assert_eq!(board, before);
    }

    #[test]
    fn queenside_castling_moves_the_rook() {
        let mut board = board_with(&[
            (Square::E8, Piece::BLACK_KING),
            (Square::A8, Piece::BLACK_ROOK),
        ]);
        let out = apply_move(&mut board, Square::E8, Square::C8, None, CastleRights::ALL);
        assert_eq!(board.piece_at(Square::C8), Some(Piece::BLACK_KING));
        assert_eq!(board.piece_at(Square::D8), Some(Piece::BLACK_ROOK));
        assert!(board.is_empty_at(Square::A8));
        assert_eq!(out.castling.to_string(), "KQ");
    }

    #[test]
    fn rook_moves_and_captures_revoke_rights() {
        let mut board = board_with(&[
            (Square::A1, Piece::WHITE_ROOK),
            (Square::A8, Piece::BLACK_ROOK),
        ]);
        let out = apply_move(&mut board, Square::A1, Square::A8, None, CastleRights::ALL);
        assert_eq!(out.castling.to_string(), "Kk");
    }

    #[test]
    fn simulate_leaves_the_original_alone() {
        let board = Board::starting_position();
        let copy = simulate_move(&board, Square::G1, Square::F3);
        assert_eq!(board, Board::starting_position());
        assert_eq!(copy.piece_at(Square::F3), Some(Piece::WHITE_KNIGHT));
        assert!(copy.is_empty_at(Square::G1));
    }

    #[test]
    fn simulate_matches_apply() {
        let board = board_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::H1, Piece::WHITE_ROOK),
        ]);
        let mut applied = board;
        apply_move(&mut applied, Square::E1, Square::G1, None, CastleRights::ALL);
        assert_eq!(simulate_move(&board, Square::E1, Square::G1), applied);
    }
}
