use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gambit_cli::{Config, PlayAs, Session};
use gambit_core::{GameState, STARTING_FEN};
use gambit_engine::minimax_root;

/// Play chess against a small minimax engine in the terminal.
#[derive(Debug, Parser)]
#[command(name = "gambit", version, about)]
struct Args {
    /// Starting position.
    #[arg(long, default_value = STARTING_FEN)]
    fen: String,

    /// Search depth in plies.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..))]
    depth: u8,

    /// Which side the human plays.
    #[arg(long, value_enum, default_value_t = Side::White)]
    play_as: Side,

    /// Print the engine's move for the position and exit.
    #[arg(long)]
    best_move: bool,

    /// Stop engine-vs-engine games after this many plies.
    #[arg(long, default_value_t = 200)]
    max_plies: u32,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
    Both,
    None,
}

impl From<Side> for PlayAs {
    fn from(side: Side) -> Self {
        match side {
            Side::White => PlayAs::White,
            Side::Black => PlayAs::Black,
            Side::Both => PlayAs::Both,
            Side::None => PlayAs::None,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let state: GameState = args
        .fen
        .parse()
        .with_context(|| format!("invalid --fen \"{}\"", args.fen))?;
    info!(fen = %state, depth = args.depth, "gambit starting");

    if args.best_move {
        let result = minimax_root(&state, args.depth);
        match result.best_move {
            Some(mv) => println!("{mv}"),
            None => println!("none"),
        }
        return Ok(());
    }

    let config = Config {
        depth: args.depth,
        play_as: args.play_as.into(),
        max_plies: args.max_plies,
    };
    let mut session = Session::new(state, config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session
        .run(stdin.lock(), &mut stdout)
        .context("console session failed")?;
    Ok(())
}
