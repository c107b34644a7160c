//! Depth-first minimax with alpha-beta pruning over one working state.

use gambit_core::{Color, GameState};

use crate::evaluate;

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 30_000;

/// Score of a checkmate, positive when White delivered it.
pub const MATE_SCORE: i32 = 10_000;

/// Working state shared by every node of one search.
///
/// Each node plays a move on `state`, recurses, and takes the move back
/// before trying a sibling, so `state` is identical on entry and exit.
pub(super) struct SearchContext<'a> {
    pub(super) state: &'a mut GameState,
    pub(super) nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub(super) fn new(state: &'a mut GameState) -> Self {
        Self { state, nodes: 0 }
    }
}

/// Score of a position where the side to move has no legal move.
pub(super) fn terminal_score(state: &GameState) -> i32 {
    if !state.in_check() {
        return 0;
    }
    match state.side_to_move() {
        Color::White => -MATE_SCORE,
        Color::Black => MATE_SCORE,
    }
}

/// Fail-soft alpha-beta. White maximises, Black minimises.
pub(super) fn alpha_beta(ctx: &mut SearchContext<'_>, depth: u8, mut alpha: i32, mut beta: i32) -> i32 {
    ctx.nodes += 1;

    // Leaf node: static evaluation only
    if depth == 0 {
        return evaluate(ctx.state.board());
    }

    let moves = ctx.state.legal_moves();
    if moves.is_empty() {
        return terminal_score(ctx.state);
    }

    match ctx.state.side_to_move() {
        Color::White => {
            let mut best = -INF;
            for mv in moves.iter() {
                let record = ctx.state.play(mv);
                let score = alpha_beta(ctx, depth - 1, alpha, beta);
                ctx.state.undo(&record);

                best = best.max(score);
                if best >= beta {
                    return best;
                }
                alpha = alpha.max(best);
            }
            best
        }
        Color::Black => {
            let mut best = INF;
            for mv in moves.iter() {
                let record = ctx.state.play(mv);
                let score = alpha_beta(ctx, depth - 1, alpha, beta);
                ctx.state.undo(&record);

                best = best.min(score);
                if best <= alpha {
                    return best;
                }
                beta = beta.min(best);
            }
            best
        }
    }
}

/// Plain minimax over the full tree, no pruning.
pub(super) fn full_minimax(ctx: &mut SearchContext<'_>, depth: u8) -> i32 {
    ctx.nodes += 1;

    if depth == 0 {
        return evaluate(ctx.state.board());
    }

    let moves = ctx.state.legal_moves();
    if moves.is_empty() {
        return terminal_score(ctx.state);
    }

    let maximizing = ctx.state.side_to_move() == Color::White;
    let mut best = if maximizing { -INF } else { INF };
    for mv in moves.iter() {
        let record = ctx.state.play(mv);
        let score = full_minimax(ctx, depth - 1);
        ctx.state.undo(&record);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(fen: &str) -> GameState {
        fen.parse().unwrap()
    }

    #[test]
    fn mate_scores_favour_the_mating_side() {
        assert_eq!(terminal_score(&state("R6k/8/6K1/8/8/8/8/8 b - - 0 1")), MATE_SCORE);
        assert_eq!(terminal_score(&state("8/8/8/8/8/6k1/8/r6K w - - 0 1")), -MATE_SCORE);
        assert_eq!(terminal_score(&state("k7/8/K7/8/8/8/8/1R6 b - - 0 1")), 0);
    }

    #[test]
    fn depth_zero_is_static_eval() {
        let mut work = GameState::starting_position();
        let mut ctx = SearchContext::new(&mut work);
        assert_eq!(alpha_beta(&mut ctx, 0, -INF, INF), 0);
        assert_eq!(ctx.nodes, 1);
    }

    #[test]
    fn pruning_visits_fewer_nodes() {
        let start = state("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");

        let mut pruned_state = start;
        let mut pruned = SearchContext::new(&mut pruned_state);
        let a = alpha_beta(&mut pruned, 3, -INF, INF);

        let mut full_state = start;
        let mut full = SearchContext::new(&mut full_state);
        let b = full_minimax(&mut full, 3);

        assert_eq!(a, b);
        assert!(pruned.nodes < full.nodes, "{} vs {}", pruned.nodes, full.nodes);
    }

    #[test]
    fn context_state_is_restored() {
        let start = state("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let mut work = start;
        let mut ctx = SearchContext::new(&mut work);
        alpha_beta(&mut ctx, 2, -INF, INF);
        assert_eq!(work, start);
    }
}
