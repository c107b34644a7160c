//! Piece-square tables for all six piece types.
//!
//! Tables are written from White's point of view in board order:
//! `[row][file]` with row 0 = rank 8 and file 0 = the a-file. Black looks
//! them up with the row mirrored.

use gambit_core::{Color, Piece, PieceKind, Square};

type Table = [[i32; 8]; 8];

#[rustfmt::skip]
const PAWN: Table = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 5,  5,  5,  5,  5,  5,  5,  5],
    [ 1,  1,  2,  3,  3,  2,  1,  1],
    [ 1,  1,  1,  3,  3,  1,  1,  1],
    [ 0,  0,  0,  2,  2,  0,  0,  0],
    [ 1, -1, -1,  0,  0, -1, -1,  1],
    [ 1,  1,  1, -2, -2,  1,  1,  1],
    [ 0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT: Table = [
    [-5, -4, -3, -3, -3, -3, -4, -5],
    [-4, -2,  0,  0,  0,  0, -2, -4],
    [-3,  0,  1,  2,  2,  1,  0, -3],
    [-3,  1,  2,  2,  2,  2,  1, -3],
    [-3,  0,  2,  2,  2,  2,  0, -3],
    [-3,  1,  1,  2,  2,  1,  1, -3],
    [-4, -2,  0,  1,  1,  0, -2, -4],
    [-5, -4, -3, -3, -3, -3, -4, -5],
];

#[rustfmt::skip]
const BISHOP: Table = [
    [-2, -1, -1, -1, -1, -1, -1, -2],
    [-1,  0,  0,  0,  0,  0,  0, -1],
    [-1,  0,  1,  1,  1,  1,  0, -1],
    [-1,  1,  1,  1,  1,  1,  1, -1],
    [-1,  0,  1,  1,  1,  1,  0, -1],
    [-1,  1,  1,  1,  1,  1,  1, -1],
    [-1,  1,  0,  0,  0,  0,  1, -1],
    [-2, -1, -1, -1, -1, -1, -1, -2],
];

#[rustfmt::skip]
const ROOK: Table = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 1,  1,  1,  1,  1,  1,  1,  1],
    [-1,  0,  0,  0,  0,  0,  0, -1],
    [-1,  0,  0,  0,  0,  0,  0, -1],
    [-1,  0,  0,  0,  0,  0,  0, -1],
    [-1,  0,  0,  0,  0,  0,  0, -1],
    [-1,  0,  0,  0,  0,  0,  0, -1],
    [ 0,  0,  0,  1,  1,  0,  0,  0],
];

#[rustfmt::skip]
const QUEEN: Table = [
    [-2, -1, -1, -1, -1, -1, -1, -2],
    [-1,  0,  0,  0,  0,  0,  0, -1],
    [-1,  0,  1,  1,  1,  1,  0, -1],
    [-1,  0,  1,  1,  1,  1,  0, -1],
    [ 0,  0,  1,  1,  1,  1,  0, -1],
    [-1,  1,  1,  1,  1,  1,  0, -1],
    [-1,  0,  1,  0,  0,  0,  0, -1],
    [-2, -1, -1, -1, -1, -1, -1, -2],
];

// Keeps the king tucked behind its pawns.
#[rustfmt::skip]
const KING: Table = [
    [-3, -4, -4, -5, -5, -4, -4, -3],
    [-3, -4, -4, -5, -5, -4, -4, -3],
    [-3, -4, -4, -5, -5, -4, -4, -3],
    [-3, -4, -4, -5, -5, -4, -4, -3],
    [-2, -3, -3, -4, -4, -3, -3, -2],
    [-1, -2, -2, -2, -2, -2, -2, -1],
    [ 2,  2,  0,  0,  0,  0,  2,  2],
    [ 2,  3,  1,  0,  0,  1,  3,  2],
];

/// All tables indexed by [`PieceKind::index()`].
const TABLES: [&Table; PieceKind::COUNT] = [&PAWN, &KNIGHT, &BISHOP, &ROOK, &QUEEN, &KING];

/// Positional bonus of `piece` on `sq`, signed from White's perspective.
#[inline]
pub fn pst_value(piece: Piece, sq: Square) -> i32 {
    let table = TABLES[piece.kind().index()];
    match piece.color() {
        Color::White => table[sq.row() as usize][sq.file() as usize],
        Color::Black => {
            let seen = sq.mirror();
            -table[seen.row() as usize][seen.file() as usize]
        }
    }
}
