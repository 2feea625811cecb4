//! Command-line front end: reads a start board, solves it, prints the moves.
//!
//! Board format: one row per line, cells separated by whitespace, `_` (or
//! `.` or `0`) for the blank. For example:
//!
//! ```text
//! 1 2 3
//! 4 _ 6
//! 7 5 8
//! ```

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tile_solver::{breadth_first, moves_from_path, parse_board, search, Board};

#[derive(Parser)]
#[command(name = "tile-solver")]
#[command(version)]
#[command(about = "Find the shortest solution of a sliding-tile puzzle")]
struct Cli {
    /// File holding the start board (stdin when omitted)
    input: Option<PathBuf>,

    /// File holding the goal board (defaults to 1..N² with the blank last)
    #[arg(long, env = "TILE_SOLVER_GOAL")]
    goal: Option<PathBuf>,

    /// Confirm the solution length with an uninformed breadth-first search
    #[arg(long)]
    check: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn read_board(path: Option<&Path>) -> Result<Board> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading board from stdin")?;
            text
        }
    };

    let source = path.map_or("stdin".into(), |p| p.display().to_string());
    parse_board(&text).with_context(|| format!("parsing board from {source}"))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let start = read_board(cli.input.as_deref())?;
    let goal = match cli.goal.as_deref() {
        Some(path) => read_board(Some(path))?,
        None => Board::goal(start.size())?,
    };

    println!("Start:");
    println!("{}", start);
    println!("----");
    println!("Goal:");
    println!("{}", goal);
    println!("----");

    if start == goal {
        println!("Puzzle is already solved!");
        return Ok(ExitCode::SUCCESS);
    }

    let result = search(&start, &goal)?;
    let Some(path) = result.path else {
        println!("No solution found");
        return Ok(ExitCode::FAILURE);
    };

    let moves = moves_from_path(&path);
    println!("Solution found in {} moves:", moves.len());
    for (i, mv) in moves.iter().enumerate() {
        match mv.direction() {
            Some(d) => println!("Move {}: {} (blank {})", i + 1, mv, d),
            None => println!("Move {}: {}", i + 1, mv),
        }
    }
    println!(
        "Visited {} board positions (generated {} total).",
        result.visited, result.generated
    );

    if cli.check {
        info!("cross-checking with breadth-first search");
        let reference = breadth_first(&start, &goal)?;
        match reference {
            Some(r) if r.len() == path.len() => info!(moves = moves.len(), "solution is optimal"),
            Some(r) => bail!(
                "A* found {} moves but breadth-first search found {}",
                moves.len(),
                r.len() - 1
            ),
            None => bail!("breadth-first search found no solution"),
        }
    }

    Ok(ExitCode::SUCCESS)
}
