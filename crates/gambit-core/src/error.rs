//! Error types for board-state decoding and board validation.

/// Errors that occur when decoding a board-state string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The string does not have the placement field plus 5 trailing fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {row} describes {length} squares, expected 8")]
    BadRankLength {
        /// Row index (0 = rank 8).
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid field.
        found: String,
    },
    /// An unrecognized character appeared in the castling field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en-passant field is not "-" or an algebraic square.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid field.
        found: String,
    },
    /// A move counter is not a number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// "halfmove clock" or "fullmove number".
        field: &'static str,
        /// The invalid field.
        found: String,
    },
    /// The decoded board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying validation error.
        #[from]
        source: BoardError,
    },
}

/// Structural problems with a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn stands on the first or eighth rank.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank {
        /// Where the pawn stands, in algebraic notation.
        square: String,
    },
}
