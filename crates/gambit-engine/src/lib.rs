//! Evaluation and search for gambit.

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::{INF, MATE_SCORE, SearchResult, choose_move, minimax, minimax_root, search};
