//! Core chess types and rules: board model, move generation, check
//! detection, and in-place move execution with exact reversal.

mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod game_state;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod square;
mod square_set;

pub use board::{Board, Placement, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_FEN;
pub use game_state::{GameState, Outcome, PlyRecord};
pub use make_move::{MoveOutcome, UndoRecord, apply_move, reverse_move, simulate_move};
pub use movegen::{
    LegalMoves, checkers, enumerate_all_legal_moves, is_in_check, legal_moves, pseudo_moves,
};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
pub use square_set::SquareSet;
