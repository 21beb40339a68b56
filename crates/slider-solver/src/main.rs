//! CLI entry point for the slider solver.
//!
//! Usage:
//!   slider-solver solve <board.txt> [options]
//!   slider-solver solve --stdin [options]
//!   slider-solver scramble [--size <n>] [--moves <n>] [--seed <n>] [--any]
//!
//! Solve options:
//!   --json                  Print a JSON report instead of text
//!   --max-expansions <n>    Abort after n node expansions (env SLIDER_MAX_EXPANSIONS)
//!   --timeout <seconds>     Abort after this many seconds (env SLIDER_TIMEOUT)
//!   --pruning <rule>        skip-reversal (default) or parent-only
//!   --heuristic <h>         manhattan (default) or hamming
//!
//! Set RUST_LOG=debug to see search progress on stderr.

use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use slider_solver::{
    parse_board, random_permutation, read_board_file, scramble, Board, Heuristic, Outcome,
    PruningRule, Solver, SolverConfig,
};

/// Exit code for a search stopped by a limit
const EXIT_ABORTED: i32 = 2;

#[derive(Parser)]
#[command(name = "slider-solver")]
#[command(about = "A* solver for the N-by-N sliding tile puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest solution of a board, or report that none exists
    Solve {
        /// Path to a board file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read the board from stdin instead of a file
        #[arg(long)]
        stdin: bool,

        /// Print a JSON report
        #[arg(long)]
        json: bool,

        /// Maximum node expansions across both searches
        #[arg(long, env = "SLIDER_MAX_EXPANSIONS")]
        max_expansions: Option<usize>,

        /// Maximum search time in seconds
        #[arg(long, env = "SLIDER_TIMEOUT")]
        timeout: Option<u64>,

        /// Neighbor admission rule
        #[arg(long, value_enum, default_value_t)]
        pruning: PruningRule,

        /// Priority heuristic
        #[arg(long, value_enum, default_value_t)]
        heuristic: Heuristic,
    },

    /// Print a random board in the plain input format
    Scramble {
        /// Board dimension
        #[arg(long, default_value = "4")]
        size: usize,

        /// Random blank moves away from the goal
        #[arg(long, default_value = "40")]
        moves: usize,

        /// Seed for a reproducible board
        #[arg(long)]
        seed: Option<u64>,

        /// Shuffle all tiles instead; the board may be unsolvable
        #[arg(long)]
        any: bool,
    },
}

/// JSON report for `solve --json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveReport<'a> {
    outcome: Outcome,
    solvable: bool,
    moves: Option<usize>,
    expansions: usize,
    nodes_created: usize,
    time_elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<&'a [Board]>,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            json,
            max_expansions,
            timeout,
            pruning,
            heuristic,
        } => {
            let board = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read from stdin")?;
                parse_board(&buffer).context("Failed to parse board from stdin")?
            } else if let Some(path) = file {
                read_board_file(&path)
                    .with_context(|| format!("Failed to load board from {}", path.display()))?
            } else {
                bail!("Must provide either a file path or --stdin");
            };

            let config = SolverConfig {
                max_expansions,
                timeout: timeout.map(Duration::from_secs),
                pruning,
                heuristic,
            };
            info!("solving {}x{} board", board.dimension(), board.dimension());

            let solver = Solver::with_config(board, &config);

            if json {
                println!("{}", serde_json::to_string_pretty(&report(&solver))?);
            } else {
                print_text(&solver);
            }

            if solver.outcome() == Outcome::Aborted {
                std::process::exit(EXIT_ABORTED);
            }
        }
        Commands::Scramble {
            size,
            moves,
            seed,
            any,
        } => {
            if size == 0 {
                bail!("Board size must be at least 1");
            }
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let board = if any {
                random_permutation(size, &mut rng)
            } else {
                scramble(size, moves, &mut rng)
            };
            print!("{board}");
        }
    }

    Ok(())
}

fn report(solver: &Solver) -> SolveReport<'_> {
    let stats = solver.stats();
    SolveReport {
        outcome: solver.outcome(),
        solvable: solver.is_solvable(),
        moves: solver.moves(),
        expansions: stats.expansions,
        nodes_created: stats.nodes_created,
        time_elapsed_ms: stats.time_elapsed_ms,
        solution: solver.solution(),
    }
}

fn print_text(solver: &Solver) {
    match (solver.outcome(), solver.solution()) {
        (Outcome::Solved, Some(path)) => {
            println!("Minimum number of moves = {}", path.len() - 1);
            for board in path {
                println!("{board}");
            }
        }
        (Outcome::Aborted, _) => {
            println!(
                "Search aborted after {} expansions",
                solver.stats().expansions
            );
        }
        _ => println!("No solution possible"),
    }
}
