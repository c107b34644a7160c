//! Board plus side to move, castling rights, en-passant target and move counters.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::make_move::{UndoRecord, apply_move, reverse_move};
use crate::movegen::{LegalMoves, checkers, enumerate_all_legal_moves, is_in_check};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The side to move is in check and has no legal move.
    Checkmate { winner: Color },
    /// The side to move is not in check and has no legal move.
    Stalemate,
}

/// Everything [`GameState::undo`] needs to take one ply back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlyRecord {
    mv: Move,
    undo: UndoRecord,
    captured: Option<Piece>,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl PlyRecord {
    /// The move that was played.
    #[inline]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// The piece removed from the board by the move, if any.
    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
}

/// A full game position.
///
/// Moves go through [`play`](GameState::play), which mutates the board in
/// place, and come back through [`undo`](GameState::undo).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl GameState {
    /// Assemble a state with fresh move counters.
    pub fn new(
        board: Board,
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
    ) -> GameState {
        GameState {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard starting position, White to move.
    pub fn starting_position() -> GameState {
        GameState::new(
            Board::starting_position(),
            Color::White,
            CastleRights::ALL,
            None,
        )
    }

    /// Replace the move counters.
    pub fn with_counters(mut self, halfmove_clock: u32, fullmove_number: u32) -> GameState {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Plies since the last pawn move or capture.
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Starts at 1 and increments after each Black move.
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Legal moves of the side to move.
    pub fn legal_moves(&self) -> LegalMoves {
        enumerate_all_legal_moves(
            &self.board,
            self.side_to_move,
            self.en_passant,
            self.castling,
        )
    }

    /// Return `true` if `mv` is legal for the side to move.
    pub fn is_legal(&self, mv: Move) -> bool {
        if self.board.color_at(mv.from()) != Some(self.side_to_move) {
            return false;
        }
        crate::movegen::legal_moves(&self.board, mv.from(), self.en_passant, self.castling)
            .contains(mv.to())
    }

    /// Return `true` if the side to move is in check.
    pub fn in_check(&self) -> bool {
        is_in_check(&self.board, self.side_to_move)
    }

    /// Opposing pieces giving check to the side to move.
    pub fn checkers(&self) -> SquareSet {
        checkers(&self.board, self.side_to_move.flip())
    }

    /// `Some` once the side to move has no legal move.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.legal_moves().is_empty() {
            return None;
        }
        Some(self.outcome_without_moves())
    }

    /// Classify a position already known to have no legal move.
    pub fn outcome_without_moves(&self) -> Outcome {
        if self.checkers().is_empty() {
            Outcome::Stalemate
        } else {
            Outcome::Checkmate {
                winner: self.side_to_move.flip(),
            }
        }
    }

    /// Play `mv` for the side to move.
    ///
    /// The move is not checked for legality; take it from
    /// [`legal_moves`](GameState::legal_moves) or test it with
    /// [`is_legal`](GameState::is_legal) first.
    pub fn play(&mut self, mv: Move) -> PlyRecord {
        let mover = self.board.piece_at(mv.from());
        let mut captured = self.board.piece_at(mv.to());

        let applied = apply_move(
            &mut self.board,
            mv.from(),
            mv.to(),
            self.en_passant,
            self.castling,
        );
        // An en-passant victim is the only touched square besides the
        // destination that held an enemy piece.
        if captured.is_none() && mover.map(Piece::kind) == Some(PieceKind::Pawn) {
            captured = applied
                .undo
                .entries()
                .iter()
                .filter(|(sq, _)| *sq != mv.from() && *sq != mv.to())
                .find_map(|(_, piece)| *piece);
        }

        let record = PlyRecord {
            mv,
            undo: applied.undo,
            captured,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };

        let pawn_move = mover.map(Piece::kind) == Some(PieceKind::Pawn);
        if pawn_move || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.castling = applied.castling;
        self.en_passant = applied.en_passant;
        self.side_to_move = self.side_to_move.flip();

        record
    }

    /// Take back the ply described by `record`. Records must be undone in
    /// the reverse order they were played.
    pub fn undo(&mut self, record: &PlyRecord) {
        reverse_move(&mut self.board, &record.undo);
        self.castling = record.castling;
        self.en_passant = record.en_passant;
        self.halfmove_clock = record.halfmove_clock;
        self.fullmove_number = record.fullmove_number;
        self.side_to_move = self.side_to_move.flip();
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::starting_position()
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GameState(\"{self}\")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(text: &str) -> Move {
        Move::from_coords(text).unwrap()
    }

    #[test]
    fn play_flips_side_and_counts_moves() {
        let mut state = GameState::starting_position();
        state.play(mv("g1f3"));
        assert_eq!(state.side_to_move(), Color::Black);
        assert_eq!(state.halfmove_clock(), 1);
        assert_eq!(state.fullmove_number(), 1);
        state.play(mv("g8f6"));
        assert_eq!(state.side_to_move(), Color::White);
        assert_eq!(state.halfmove_clock(), 2);
        assert_eq!(state.fullmove_number(), 2);
        state.play(mv("e2e4"));
        assert_eq!(state.halfmove_clock(), 0, "pawn moves reset the clock");
        assert_eq!(state.en_passant(), Some(Square::E3));
    }

    #[test]
    fn undo_restores_everything() {
        let mut state = GameState::starting_position();
        let before = state;
        let first = state.play(mv("e2e4"));
        let second = state.play(mv("d7d5"));
        let third = state.play(mv("e4d5"));
        assert_eq!(third.captured(), Some(Piece::BLACK_PAWN));
        state.undo(&third);
        state.undo(&second);
        state.undo(&first);
        assert_eq!(state, before);
    }

    #[test]
    fn en_passant_capture_is_reported() {
        let mut state: GameState = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        let record = state.play(mv("e5d6"));
        assert_eq!(record.captured(), Some(Piece::BLACK_PAWN));
        assert!(state.board().is_empty_at(Square::D5));
    }

    #[test]
    fn is_legal_checks_side_and_rules() {
        let state = GameState::starting_position();
        assert!(state.is_legal(mv("e2e4")));
        assert!(!state.is_legal(mv("e2e5")));
        assert!(!state.is_legal(mv("e7e5")), "not Black's turn");
        assert!(!state.is_legal(mv("e4e5")), "empty square");
    }

    #[test]
    fn checkmate_and_stalemate() {
        let mate: GameState = "R6k/8/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert!(mate.in_check());
        assert_eq!(
            mate.outcome(),
            Some(Outcome::Checkmate {
                winner: Color::White
            })
        );

        let stale: GameState = "k7/8/K7/8/8/8/8/1R6 b - - 0 1".parse().unwrap();
        assert!(!stale.in_check());
        assert_eq!(stale.outcome(), Some(Outcome::Stalemate));

        assert_eq!(GameState::starting_position().outcome(), None);
    }
}
