//! Console input errors.

use gambit_core::FenError;

/// Errors that can occur while handling console input.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The word is neither a command nor a move.
    #[error("unknown command: {word} (type 'help')")]
    UnknownCommand {
        /// The first word of the rejected line.
        word: String,
    },

    /// A command was given without its required argument.
    #[error("'{command}' needs an argument")]
    MissingArgument {
        /// The command that was incomplete.
        command: &'static str,
    },

    /// Failed to parse a FEN string.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// Why it was rejected.
        source: FenError,
    },

    /// A square name could not be parsed.
    #[error("invalid square: {text}")]
    InvalidSquare {
        /// The text that failed to parse.
        text: String,
    },

    /// A move is well-formed but not legal in the current position.
    #[error("illegal move: {mv}")]
    IllegalMove {
        /// The rejected move in coordinate notation.
        mv: String,
    },

    /// The depth value could not be parsed or is zero.
    #[error("invalid depth: {value} (expected 1-255)")]
    InvalidDepth {
        /// The depth string that failed to parse.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
