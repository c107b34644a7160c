//! Fixed-depth game-tree search.

mod alphabeta;

use gambit_core::{Color, GameState, Move};
use tracing::{debug, trace};

use alphabeta::{SearchContext, alpha_beta, full_minimax, terminal_score};

pub use alphabeta::{INF, MATE_SCORE};

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move for the side to move, `None` if it has no legal move.
    pub best_move: Option<Move>,
    /// Score of `best_move` from White's perspective.
    pub score: i32,
    /// Total nodes visited during the search.
    pub nodes: u64,
    /// Depth searched, in plies.
    pub depth: u8,
}

/// Search every root move to `depth` plies and keep the best one.
///
/// White maximises, Black minimises; on equal scores the first move found
/// wins. Depth 0 is searched as depth 1. Each root move gets the full
/// window. `state` must hold both kings.
pub fn minimax_root(state: &GameState, depth: u8) -> SearchResult {
    let depth = depth.max(1);
    let mut work = *state;
    let mut ctx = SearchContext::new(&mut work);
    let side = ctx.state.side_to_move();

    let moves = ctx.state.legal_moves();
    let mut best_move = None;
    let mut best_score = match side {
        Color::White => -INF,
        Color::Black => INF,
    };

    for mv in moves.iter() {
        let record = ctx.state.play(mv);
        let score = alpha_beta(&mut ctx, depth - 1, -INF, INF);
        ctx.state.undo(&record);
        trace!(%mv, score, "root move");

        let improves = match side {
            Color::White => score > best_score,
            Color::Black => score < best_score,
        };
        if improves {
            best_move = Some(mv);
            best_score = score;
        }
    }

    if best_move.is_none() {
        best_score = terminal_score(ctx.state);
    }

    let result = SearchResult {
        best_move,
        score: best_score,
        nodes: ctx.nodes + 1,
        depth,
    };
    debug!(
        depth,
        score = result.score,
        nodes = result.nodes,
        best_move = ?result.best_move,
        "search complete"
    );
    result
}

/// The engine's move for the side to move, or `None` when the game is over.
pub fn choose_move(state: &GameState, depth: u8) -> Option<Move> {
    minimax_root(state, depth).best_move
}

/// Alpha-beta score of `state` searched to `depth` plies.
///
/// Moves are played and taken back on `state` itself, which is left exactly
/// as it was found.
pub fn search(state: &mut GameState, depth: u8, alpha: i32, beta: i32) -> i32 {
    let mut ctx = SearchContext::new(state);
    alpha_beta(&mut ctx, depth, alpha, beta)
}

/// Unpruned minimax score of `state` searched to `depth` plies.
pub fn minimax(state: &mut GameState, depth: u8) -> i32 {
    let mut ctx = SearchContext::new(state);
    full_minimax(&mut ctx, depth)
}
