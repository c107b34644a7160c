//! Console command parsing.

use gambit_core::{GameState, Move, Square};

use crate::error::CliError;

/// A parsed console command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `e2e4` or `e2 e4` -- play a move for the side to move.
    Play(Move),
    /// `moves [square]` -- list legal moves, all or from one square.
    Moves(Option<Square>),
    /// `go` -- let the engine move for the side to move.
    Go,
    /// `undo` -- take back the last ply.
    Undo,
    /// `depth <n>` -- set the search depth.
    Depth(u8),
    /// `fen` -- print the current position.
    Fen,
    /// `position <fen>` -- load a position.
    Position(Box<GameState>),
    /// `new` -- back to the starting position.
    New,
    /// `eval` -- print the static evaluation.
    Eval,
    /// `board` -- redraw the board.
    Board,
    /// `help` -- list commands.
    Help,
    /// `quit` -- leave the session.
    Quit,
    /// A blank line.
    Empty,
}

/// Parse a single line of console input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&word) = tokens.first() else {
        return Ok(Command::Empty);
    };

    match word {
        "moves" => parse_moves(&tokens[1..]),
        "go" => Ok(Command::Go),
        "undo" => Ok(Command::Undo),
        "depth" => parse_depth(&tokens[1..]),
        "fen" => Ok(Command::Fen),
        "position" => parse_position(&tokens[1..]),
        "new" => Ok(Command::New),
        "eval" => Ok(Command::Eval),
        "board" => Ok(Command::Board),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Move::from_coords(line)
            .map(Command::Play)
            .ok_or_else(|| CliError::UnknownCommand {
                word: word.to_string(),
            }),
    }
}

/// Parse `moves [square]`.
fn parse_moves(tokens: &[&str]) -> Result<Command, CliError> {
    match tokens.first() {
        None => Ok(Command::Moves(None)),
        Some(text) => Square::from_algebraic(text)
            .map(|sq| Command::Moves(Some(sq)))
            .ok_or_else(|| CliError::InvalidSquare {
                text: text.to_string(),
            }),
    }
}

/// Parse `depth <n>`, rejecting zero.
fn parse_depth(tokens: &[&str]) -> Result<Command, CliError> {
    let text = tokens
        .first()
        .ok_or(CliError::MissingArgument { command: "depth" })?;
    match text.parse::<u8>() {
        Ok(depth) if depth >= 1 => Ok(Command::Depth(depth)),
        _ => Err(CliError::InvalidDepth {
            value: text.to_string(),
        }),
    }
}

/// Parse `position <fen>`, where the FEN spans the remaining tokens.
fn parse_position(tokens: &[&str]) -> Result<Command, CliError> {
    if tokens.is_empty() {
        return Err(CliError::MissingArgument {
            command: "position",
        });
    }
    let fen = tokens.join(" ");
    let state: GameState = fen
        .parse()
        .map_err(|source| CliError::InvalidFen { fen: fen.clone(), source })?;
    Ok(Command::Position(Box::new(state)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_compact_move() {
        assert_eq!(
            parse_command("e2e4").unwrap(),
            Command::Play(Move::new(Square::E2, Square::E4))
        );
    }

    #[test]
    fn parse_spaced_move() {
        assert_eq!(
            parse_command("  g8 f6 ").unwrap(),
            Command::Play(Move::new(Square::G8, Square::F6))
        );
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(parse_command("go").unwrap(), Command::Go);
        assert_eq!(parse_command("undo").unwrap(), Command::Undo);
        assert_eq!(parse_command("fen").unwrap(), Command::Fen);
        assert_eq!(parse_command("new").unwrap(), Command::New);
        assert_eq!(parse_command("eval").unwrap(), Command::Eval);
        assert_eq!(parse_command("board").unwrap(), Command::Board);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("").unwrap(), Command::Empty);
    }

    #[test]
    fn parse_moves_with_and_without_square() {
        assert_eq!(parse_command("moves").unwrap(), Command::Moves(None));
        assert_eq!(
            parse_command("moves b1").unwrap(),
            Command::Moves(Some(Square::B1))
        );
        assert!(matches!(
            parse_command("moves z9"),
            Err(CliError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn parse_depth() {
        assert_eq!(parse_command("depth 4").unwrap(), Command::Depth(4));
        assert!(matches!(
            parse_command("depth 0"),
            Err(CliError::InvalidDepth { .. })
        ));
        assert!(matches!(
            parse_command("depth many"),
            Err(CliError::InvalidDepth { .. })
        ));
        assert!(matches!(
            parse_command("depth"),
            Err(CliError::MissingArgument { command: "depth" })
        ));
    }

    #[test]
    fn parse_position_fen() {
        match parse_command("position 4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap() {
            Command::Position(state) => {
                assert_eq!(state.to_string(), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_bad_fen() {
        let err = parse_command("position 4k3/8/8 w - - 0 1").unwrap_err();
        assert!(matches!(err, CliError::InvalidFen { .. }));
        assert!(err.to_string().starts_with("invalid FEN"));
    }

    #[test]
    fn unknown_word() {
        let err = parse_command("castle now").unwrap_err();
        assert_eq!(err.to_string(), "unknown command: castle (type 'help')");
    }
}
