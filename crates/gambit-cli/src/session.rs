//! Interactive console game: a human against the engine, or any mix.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{Color, GameState, Move, Outcome, PlyRecord, Square};
use gambit_engine::{evaluate, minimax_root};

use crate::command::{Command, parse_command};
use crate::error::CliError;

const HELP: &str = "\
commands:
  e2e4 | e2 e4      play a move
  moves [square]    list legal moves
  go                let the engine move
  undo              take back your last move
  depth <n>         set the search depth
  fen               print the position
  position <fen>    load a position
  new               start a new game
  eval              print the static evaluation
  board             redraw the board
  help              show this text
  quit              leave";

/// Which sides a human controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAs {
    White,
    Black,
    Both,
    /// The engine plays both sides.
    None,
}

impl PlayAs {
    /// Return `true` if a human moves for `color`.
    pub fn is_human(self, color: Color) -> bool {
        match self {
            PlayAs::White => color == Color::White,
            PlayAs::Black => color == Color::Black,
            PlayAs::Both => true,
            PlayAs::None => false,
        }
    }
}

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Search depth in plies, at least 1.
    pub depth: u8,
    /// Sides the human controls.
    pub play_as: PlayAs,
    /// Engine-vs-engine games stop after this many plies.
    pub max_plies: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            depth: 3,
            play_as: PlayAs::White,
            max_plies: 200,
        }
    }
}

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A console game in progress.
pub struct Session {
    state: GameState,
    history: Vec<PlyRecord>,
    config: Config,
    outcome: Option<Outcome>,
}

impl Session {
    /// Start a session from `state`.
    pub fn new(state: GameState, config: Config) -> Self {
        Self {
            outcome: state.outcome(),
            state,
            history: Vec::new(),
            config,
        }
    }

    /// The current position.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The current settings.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Plies played (and not taken back) this session.
    pub fn plies(&self) -> usize {
        self.history.len()
    }

    /// How the game ended, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Run the read loop until `quit`, end of input, or, with no human
    /// side, the end of the engine game.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), CliError> {
        info!(fen = %self.state, depth = self.config.depth, play_as = ?self.config.play_as, "session started");
        self.show(out)?;

        let mut lines = input.lines();
        loop {
            self.engine_turns(out)?;
            if self.config.play_as == PlayAs::None {
                break;
            }

            write!(out, "{}> ", self.state.side_to_move().name())?;
            out.flush()?;
            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let line = line?;
            debug!(input = %line.trim(), "console input");

            match parse_command(&line) {
                Ok(cmd) => match self.execute(cmd, out) {
                    Ok(Flow::Quit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e @ CliError::Io { .. }) => return Err(e),
                    Err(e) => self.reject(&e, out)?,
                },
                Err(e) => self.reject(&e, out)?,
            }
        }

        info!(plies = self.history.len(), outcome = ?self.outcome, "session finished");
        Ok(())
    }

    /// Let the engine move while it is its turn and the game goes on.
    fn engine_turns<W: Write>(&mut self, out: &mut W) -> Result<(), CliError> {
        while self.outcome.is_none() && !self.config.play_as.is_human(self.state.side_to_move()) {
            if self.config.play_as == PlayAs::None
                && self.history.len() >= self.config.max_plies as usize
            {
                writeln!(out, "stopped after {} plies", self.history.len())?;
                break;
            }
            self.engine_move(out)?;
        }
        Ok(())
    }

    fn engine_move<W: Write>(&mut self, out: &mut W) -> Result<(), CliError> {
        let result = minimax_root(&self.state, self.config.depth);
        let Some(mv) = result.best_move else {
            // No move means the game is already over.
            self.outcome = Some(self.state.outcome_without_moves());
            return self.report_outcome(out);
        };
        info!(%mv, score = result.score, nodes = result.nodes, depth = result.depth, "engine move");
        writeln!(out, "{} plays {mv}", self.state.side_to_move().name())?;
        self.play(mv, out)
    }

    fn play<W: Write>(&mut self, mv: Move, out: &mut W) -> Result<(), CliError> {
        let record = self.state.play(mv);
        self.history.push(record);
        self.outcome = self.state.outcome();
        self.show(out)
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, CliError> {
        match cmd {
            Command::Play(mv) => {
                if self.outcome.is_some() {
                    writeln!(out, "the game is over; use undo, new or position")?;
                } else if self.state.is_legal(mv) {
                    self.play(mv, out)?;
                } else {
                    return Err(CliError::IllegalMove { mv: mv.to_string() });
                }
            }
            Command::Moves(from) => self.list_moves(from, out)?,
            Command::Go => {
                if self.outcome.is_some() {
                    self.report_outcome(out)?;
                } else {
                    self.engine_move(out)?;
                }
            }
            Command::Undo => self.undo(out)?,
            Command::Depth(depth) => {
                self.config.depth = depth;
                writeln!(out, "depth set to {depth}")?;
            }
            Command::Fen => writeln!(out, "{}", self.state)?,
            Command::Position(state) => self.load(*state, out)?,
            Command::New => self.load(GameState::starting_position(), out)?,
            Command::Eval => writeln!(out, "eval: {}", evaluate(self.state.board()))?,
            Command::Board => self.show(out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
        }
        Ok(Flow::Continue)
    }

    fn reject<W: Write>(&self, err: &CliError, out: &mut W) -> Result<(), CliError> {
        warn!(error = %err, "rejected input");
        writeln!(out, "error: {err}")?;
        Ok(())
    }

    fn list_moves<W: Write>(&self, from: Option<Square>, out: &mut W) -> Result<(), CliError> {
        let legal = self.state.legal_moves();
        let moves: Vec<String> = match from {
            Some(sq) => legal.get(sq).map(|to| Move::new(sq, to).to_string()).collect(),
            None => legal.iter().map(|mv| mv.to_string()).collect(),
        };
        if moves.is_empty() {
            writeln!(out, "no legal moves")?;
        } else {
            writeln!(out, "{}", moves.join(" "))?;
        }
        Ok(())
    }

    /// Take back one ply, and keep going until it is a human's turn again.
    fn undo<W: Write>(&mut self, out: &mut W) -> Result<(), CliError> {
        let Some(record) = self.history.pop() else {
            writeln!(out, "nothing to undo")?;
            return Ok(());
        };
        self.state.undo(&record);
        while !self.config.play_as.is_human(self.state.side_to_move()) {
            let Some(record) = self.history.pop() else {
                break;
            };
            self.state.undo(&record);
        }
        self.outcome = None;
        self.show(out)
    }

    fn load<W: Write>(&mut self, state: GameState, out: &mut W) -> Result<(), CliError> {
        info!(fen = %state, "position loaded");
        self.state = state;
        self.history.clear();
        self.outcome = state.outcome();
        self.show(out)
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        writeln!(out, "{}", self.state.board().pretty())?;
        if self.outcome.is_some() {
            return self.report_outcome(out);
        }
        let side = self.state.side_to_move().name();
        if self.state.in_check() {
            writeln!(out, "{side} to move, in check")?;
        } else {
            writeln!(out, "{side} to move")?;
        }
        Ok(())
    }

    fn report_outcome<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        match self.outcome {
            Some(Outcome::Checkmate { winner }) => writeln!(out, "checkmate, {} wins", winner.name())?,
            Some(Outcome::Stalemate) => writeln!(out, "stalemate")?,
            None => {}
        }
        Ok(())
    }
}
