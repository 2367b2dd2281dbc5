//! Command-line demo: load a Killer Sudoku puzzle from JSON, solve it, and
//! print the grid together with the search statistics.
//!
//! Run with the built-in reference puzzle:
//!
//! ```text
//! cargo run --example killer
//! ```
//!
//! or point it at your own puzzle file and pick a strategy:
//!
//! ```text
//! cargo run --example killer -- my-puzzle.json --selection cage-ordered-mrv
//! ```

use std::{fs, path::PathBuf};

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use cagey::solver::{
    cage::{Cage, CageSet},
    engine::Solver,
    grid::Cell,
    stats::render_stats_table,
    strategy::{Propagation, SelectionStrategy, SolverConfig},
};

const DEFAULT_PUZZLE: &str = include_str!("classic.json");

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Selection {
    StaticScan,
    GlobalMrv,
    CageOrderedMrv,
}

impl From<Selection> for SelectionStrategy {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::StaticScan => SelectionStrategy::StaticScan,
            Selection::GlobalMrv => SelectionStrategy::GlobalMrv,
            Selection::CageOrderedMrv => SelectionStrategy::CageOrderedMrv,
        }
    }
}

#[derive(Parser)]
#[command(about = "Solve a Killer Sudoku puzzle described as JSON")]
struct Args {
    /// Puzzle file; the built-in reference puzzle when omitted.
    puzzle: Option<PathBuf>,

    /// Cell-selection strategy.
    #[arg(long, value_enum, default_value = "global-mrv")]
    selection: Selection,

    /// Disable forward checking and rely on plain backtracking.
    #[arg(long)]
    no_propagation: bool,
}

#[derive(Deserialize)]
struct PuzzleFile {
    cages: Vec<Cage>,
    #[serde(default)]
    givens: Vec<Given>,
}

#[derive(Deserialize)]
struct Given {
    cell: Cell,
    value: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let text = match &args.puzzle {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_PUZZLE.to_string(),
    };
    let puzzle: PuzzleFile = serde_json::from_str(&text)?;

    let config = SolverConfig::new(
        args.selection.into(),
        if args.no_propagation {
            Propagation::None
        } else {
            Propagation::ForwardChecking
        },
    );
    let solver = Solver::with_config(CageSet::new(puzzle.cages)?, config);

    let givens: Vec<(Cell, u8)> = puzzle.givens.iter().map(|g| (g.cell, g.value)).collect();
    let (solution, stats) = solver.solve(&givens)?;

    match solution {
        Some(grid) => {
            println!("{grid}");
            println!("{}", render_stats_table(&stats));
        }
        None => {
            println!("no solution exists for this puzzle");
            println!("{}", render_stats_table(&stats));
        }
    }
    Ok(())
}
