//! Integration tests for the fixed-depth search.
//!
//! Verifies mate finding for both colours, tactical captures, game-over
//! handling, and that pruning never changes the minimax result.

use gambit_core::{GameState, Move};
use gambit_engine::{INF, MATE_SCORE, choose_move, minimax, minimax_root, search};

const BACK_RANK_MATE_WHITE: &str = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1";
const BACK_RANK_MATE_BLACK: &str = "r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1";
const HANGING_QUEEN: &str = "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1";

const POSITIONS: [&str; 5] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b - - 0 1",
    "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
];

fn state(fen: &str) -> GameState {
    fen.parse().unwrap()
}

fn mv(text: &str) -> Move {
    Move::from_coords(text).unwrap()
}

// ── Mates and tactics ─────────────────────────────────────────────────────────

#[test]
fn white_finds_back_rank_mate() {
    let result = minimax_root(&state(BACK_RANK_MATE_WHITE), 2);
    assert_eq!(result.best_move, Some(mv("a1a8")));
    assert_eq!(result.score, MATE_SCORE);
}

#[test]
fn black_finds_back_rank_mate() {
    let result = minimax_root(&state(BACK_RANK_MATE_BLACK), 2);
    assert_eq!(result.best_move, Some(mv("a8a1")));
    assert_eq!(result.score, -MATE_SCORE);
}

#[test]
fn mate_is_still_found_deeper() {
    let result = minimax_root(&state(BACK_RANK_MATE_WHITE), 3);
    assert_eq!(result.best_move, Some(mv("a1a8")));
    assert_eq!(result.score, MATE_SCORE);
}

#[test]
fn scholars_mate_in_one() {
    let game = state("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4");
    assert_eq!(choose_move(&game, 2), Some(mv("h5f7")));
}

#[test]
fn takes_the_hanging_queen() {
    assert_eq!(choose_move(&state(HANGING_QUEEN), 1), Some(mv("d2d5")));
}

#[test]
fn depth_zero_searches_one_ply() {
    let result = minimax_root(&state(HANGING_QUEEN), 0);
    assert_eq!(result.depth, 1);
    assert_eq!(result.best_move, Some(mv("d2d5")));
}

// ── Game over ─────────────────────────────────────────────────────────────────

#[test]
fn stalemate_has_no_move_and_scores_zero() {
    let result = minimax_root(&state("k7/8/K7/8/8/8/8/1R6 b - - 0 1"), 3);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
}

#[test]
fn checkmated_side_has_no_move() {
    let result = minimax_root(&state("R6k/8/6K1/8/8/8/8/8 b - - 0 1"), 2);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, MATE_SCORE);
}

// ── Search invariants ─────────────────────────────────────────────────────────

#[test]
fn alpha_beta_matches_minimax() {
    for fen in POSITIONS {
        for depth in 1..=3 {
            let mut pruned = state(fen);
            let mut full = state(fen);
            assert_eq!(
                search(&mut pruned, depth, -INF, INF),
                minimax(&mut full, depth),
                "score mismatch at depth {depth} in {fen}"
            );
        }
    }
}

#[test]
fn search_leaves_the_state_untouched() {
    for fen in POSITIONS {
        let before = state(fen);
        let mut work = before;
        search(&mut work, 3, -INF, INF);
        assert_eq!(work, before, "state changed by search in {fen}");
    }
}

#[test]
fn chosen_move_is_legal() {
    for fen in POSITIONS {
        let game = state(fen);
        if let Some(m) = choose_move(&game, 2) {
            assert!(game.is_legal(m), "{m} is not legal in {fen}");
        }
    }
}

#[test]
fn root_score_matches_search() {
    for fen in POSITIONS {
        let game = state(fen);
        let result = minimax_root(&game, 2);
        let mut work = game;
        assert_eq!(result.score, search(&mut work, 2, -INF, INF), "in {fen}");
        assert!(result.nodes > 1);
    }
}
