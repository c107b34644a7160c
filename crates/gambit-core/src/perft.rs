//! Perft (performance test) for move generation correctness verification.

use crate::game_state::GameState;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number of
/// legal moves without playing them. Every move is played and taken back on
/// one working copy of `state`.
pub fn perft(state: &GameState, depth: usize) -> u64 {
    let mut work = *state;
    count(&mut work, depth)
}

fn count(state: &mut GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves.iter() {
        let record = state.play(mv);
        nodes += count(state, depth - 1);
        state.undo(&record);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(move, node_count)` pairs sorted alphabetically.
pub fn divide(state: &GameState, depth: usize) -> Vec<(String, u64)> {
    let mut work = *state;
    let moves = work.legal_moves();
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .map(|mv| {
            let record = work.play(mv);
            let nodes = if depth <= 1 { 1 } else { count(&mut work, depth - 1) };
            work.undo(&record);
            (mv.to_string(), nodes)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
