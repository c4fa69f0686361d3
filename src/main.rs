//! Renju referee command line
//!
//! - `renju replay h8 a1 i8 ...` - commit a move list, print board and outcome
//! - `renju hints h8 a1 ...` - list the points Black may not play
//! - `renju play` - read moves from stdin, one per line

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use renju::{Game, Outcome, Pos};

/// Referee for Renju on a 15x15 board
#[derive(Parser)]
#[command(name = "renju")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Commit a list of moves and print the resulting position
    Replay {
        /// Moves in order, Black first, e.g. `h8 a1 i8`
        moves: Vec<String>,
    },
    /// Print the forbidden points for Black after a list of moves
    Hints {
        moves: Vec<String>,
    },
    /// Read moves from stdin and judge each one
    Play,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(log_level(cli.verbose))
        .init();

    match cli.command {
        Commands::Replay { moves } => {
            let game = replay(&moves)?;
            print!("{}", game.board());
            println!("{}", game.outcome());
        }
        Commands::Hints { moves } => {
            let game = replay(&moves)?;
            let points = game.forbidden_points();
            if points.is_empty() {
                println!("no forbidden points");
            } else {
                let names: Vec<String> = points.iter().map(Pos::to_string).collect();
                println!("{}", names.join(" "));
            }
        }
        Commands::Play => play()?,
    }
    Ok(())
}

/// Game reset and game end log at info, so they show without `-v`.
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn replay(moves: &[String]) -> Result<Game> {
    let mut game = Game::new();
    for (i, text) in moves.iter().enumerate() {
        let pos = text
            .parse::<Pos>()
            .with_context(|| format!("move {}: cannot read '{text}'", i + 1))?;
        game.commit_move(pos)
            .with_context(|| format!("move {}: {pos} rejected", i + 1))?;
    }
    Ok(game)
}

fn play() -> Result<()> {
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "{} to move", game.to_move())?;
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == "reset" {
            game.reset();
            writeln!(out, "{} to move", game.to_move())?;
            continue;
        }

        let pos = match text.parse::<Pos>() {
            Ok(pos) => pos,
            Err(e) => {
                writeln!(out, "{text}: {e}")?;
                continue;
            }
        };
        match game.commit_move(pos) {
            Ok(Outcome::InProgress) => writeln!(out, "{} to move", game.to_move())?,
            Ok(outcome) => {
                write!(out, "{}", game.board())?;
                writeln!(out, "{outcome}")?;
            }
            Err(e) => writeln!(out, "{e}")?,
        }
    }
    Ok(())
}
