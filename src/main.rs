//! Sliding-Tile Puzzle Solver
//!
//! Solves 8-puzzle style boards with A* search and prints the path one grid
//! at a time, followed by the move that produced it.

mod logger;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::info;

use slider::persistence::{self, Puzzle};
use slider::render::{format_board, format_moves, format_solution};
use slider::{parity, Board, HeuristicKind, Solution, SolveOutcome, Solver, SolverConfig};

/// The board solved when no subcommand is given.
const DEFAULT_INITIAL: &str = "1 0 3/4 2 5/7 8 6";

/// Solves sliding-tile puzzles with A* search.
#[derive(Parser)]
#[command(name = "slider")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle and print the move sequence.
    Solve(SolveArgs),
    /// Report whether a board can reach the goal.
    Check {
        /// Board to check, e.g. "1 2 3/4 0 6/7 5 8".
        board: Board,
        /// Goal board (defaults to the canonical layout).
        #[arg(long)]
        goal: Option<Board>,
    },
}

#[derive(Args, Default)]
struct SolveArgs {
    /// Initial board, rows separated by '/', blank as 0, '_' or '.'.
    #[arg(long, conflicts_with = "file")]
    initial: Option<Board>,

    /// Read the initial (and optional goal) board from a puzzle file.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Goal board (overrides the file's goal; defaults to the canonical layout).
    #[arg(long)]
    goal: Option<Board>,

    #[arg(long, value_enum, default_value_t = HeuristicKind::Manhattan)]
    heuristic: HeuristicKind,

    /// Stop after this many node expansions.
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Search even when parity proves the goal unreachable.
    #[arg(long)]
    no_parity_check: bool,

    /// Also write the rendered path to this file.
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Exit status when the puzzle has no solution.
const EXIT_UNSOLVED: u8 = 1;
/// Exit status for malformed input.
const EXIT_INVALID: u8 = 2;
/// Exit status when the solution could not be written.
const EXIT_IO: u8 = 3;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Some(Command::Solve(args)) => run_solve(args),
        Some(Command::Check { board, goal }) => run_check(board, goal),
        None => run_solve(SolveArgs::default()),
    }
}

/// Resolves the initial and goal boards from the command line.
fn load_puzzle(args: &SolveArgs) -> Result<Puzzle, String> {
    let mut puzzle = match (&args.initial, &args.file) {
        (_, Some(path)) => persistence::load_puzzle(path).map_err(|e| e.to_string())?,
        (Some(initial), None) => Puzzle {
            initial: initial.clone(),
            goal: canonical_goal_for(initial)?,
        },
        (None, None) => {
            let initial: Board = DEFAULT_INITIAL
                .parse()
                .map_err(|e: slider::InvalidInput| e.to_string())?;
            let goal = canonical_goal_for(&initial)?;
            Puzzle { initial, goal }
        }
    };

    if let Some(goal) = &args.goal {
        puzzle.goal = goal.clone();
    }
    Ok(puzzle)
}

fn canonical_goal_for(board: &Board) -> Result<Board, String> {
    Board::canonical_goal(board.rows(), board.cols()).map_err(|e| e.to_string())
}

/// Solves the puzzle and prints the path.
fn run_solve(args: SolveArgs) -> ExitCode {
    let puzzle = match load_puzzle(&args) {
        Ok(puzzle) => puzzle,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(EXIT_INVALID);
        }
    };

    let config = SolverConfig::default()
        .with_heuristic(args.heuristic)
        .with_parity_check(!args.no_parity_check)
        .with_max_expansions(args.max_expansions);
    info!("heuristic: {}", config.heuristic);

    let outcome = match Solver::new(config).solve(&puzzle.initial, &puzzle.goal) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Invalid puzzle: {e}");
            return ExitCode::from(EXIT_INVALID);
        }
    };

    match outcome {
        SolveOutcome::Solved(solution) => {
            println!("Solution found in {} moves!", solution.move_count());
            println!("Initial state:");
            print!("{}", format_solution(&solution));
            println!("Moves: {}", format_moves(&solution));
            println!(
                "Expanded {} nodes, generated {}, peak frontier {}",
                solution.stats.expanded, solution.stats.generated, solution.stats.max_frontier
            );

            if let Some(path) = &args.output {
                if let Err(message) = write_output(path, &solution) {
                    eprintln!("{message}");
                    return ExitCode::from(EXIT_IO);
                }
                println!("Wrote {}", path.display());
            }
            ExitCode::SUCCESS
        }
        SolveOutcome::Unsolvable { reason, stats } => {
            eprintln!("Solution not found: {reason} ({} nodes expanded)", stats.expanded);
            ExitCode::from(EXIT_UNSOLVED)
        }
        SolveOutcome::LimitReached { stats } => {
            eprintln!("Solution not found within {} expansions.", stats.expanded);
            ExitCode::from(EXIT_UNSOLVED)
        }
    }
}

fn write_output(path: &Path, solution: &Solution) -> Result<(), String> {
    persistence::save_solution(path, solution)
        .map_err(|e| format!("failed to write {}: {e}", path.display()))
}

/// Prints whether the board is solvable relative to the goal.
fn run_check(board: Board, goal: Option<Board>) -> ExitCode {
    let goal = match goal.map_or_else(|| canonical_goal_for(&board), Ok) {
        Ok(goal) => goal,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(EXIT_INVALID);
        }
    };
    if let Err(e) = slider::solver::validate(&board, &goal) {
        eprintln!("Invalid puzzle: {e}");
        return ExitCode::from(EXIT_INVALID);
    }

    print!("{}", format_board(&board));
    if parity::is_solvable(&board, &goal) {
        println!("solvable");
        ExitCode::SUCCESS
    } else {
        println!("not solvable");
        ExitCode::from(EXIT_UNSOLVED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_solve_arguments() {
        let cli = Cli::try_parse_from([
            "slider",
            "-v",
            "solve",
            "--initial",
            "1 2 3/4 0 6/7 5 8",
            "--heuristic",
            "misplaced",
            "--max-expansions",
            "50",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Some(Command::Solve(args)) => {
                assert_eq!(args.heuristic, HeuristicKind::Misplaced);
                assert_eq!(args.max_expansions, Some(50));
                assert!(!args.no_parity_check);
                let puzzle = load_puzzle(&args).unwrap();
                assert_eq!(puzzle.goal, Board::canonical_goal(3, 3).unwrap());
            }
            _ => panic!("expected solve subcommand"),
        }
    }

    #[test]
    fn test_cli_rejects_malformed_board() {
        assert!(Cli::try_parse_from(["slider", "check", "1 2 3/4 5"]).is_err());
    }

    #[test]
    fn test_default_puzzle_solves_in_three_moves() {
        let puzzle = load_puzzle(&SolveArgs::default()).unwrap();
        assert_eq!(puzzle.initial, DEFAULT_INITIAL.parse().unwrap());
        let solution = slider::solve(&puzzle.initial, &puzzle.goal)
            .unwrap()
            .into_solution()
            .unwrap();
        assert_eq!(solution.move_count(), 3);
    }

    #[test]
    fn test_goal_flag_overrides_canonical_goal() {
        let args = SolveArgs {
            initial: Some("1 0/2 3".parse().unwrap()),
            goal: Some("0 1/2 3".parse().unwrap()),
            ..SolveArgs::default()
        };
        let puzzle = load_puzzle(&args).unwrap();
        assert_eq!(puzzle.goal, "0 1/2 3".parse().unwrap());
    }

    #[test]
    fn test_unwritable_output_is_an_error() {
        let puzzle = load_puzzle(&SolveArgs::default()).unwrap();
        let solution = slider::solve(&puzzle.initial, &puzzle.goal)
            .unwrap()
            .into_solution()
            .unwrap();
        let path = std::env::temp_dir()
            .join(format!("slider-{}-missing", std::process::id()))
            .join("solution.txt");

        let message = write_output(&path, &solution).unwrap_err();
        assert!(message.starts_with("failed to write"), "{message}");
        assert!(!path.exists());
    }
}
