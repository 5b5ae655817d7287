//! Puzzle files on disk.
//!
//! A puzzle file holds the initial board, optionally followed by a blank
//! line and the goal board. Lines starting with `#` are ignored:
//!
//! ```text
//! # initial
//! 1 0 3
//! 4 2 5
//! 7 8 6
//!
//! # goal
//! 1 2 3
//! 4 5 6
//! 7 8 0
//! ```
//!
//! Without a goal block the goal is the canonical layout for the initial
//! board's dimensions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::board::Board;
use crate::error::InvalidInput;
use crate::render::format_solution;
use crate::solver::Solution;

/// An initial board and the goal it should reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub initial: Board,
    pub goal: Board,
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid puzzle in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: InvalidInput,
    },

    #[error("{} contains more than two boards", path.display())]
    TooManyBoards { path: PathBuf },
}

/// Parses puzzle file contents.
pub fn parse_puzzle(text: &str) -> Result<Puzzle, InvalidInput> {
    let mut blocks: Vec<Vec<&str>> = vec![Vec::new()];
    for line in text.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        if line.is_empty() {
            if blocks.last().is_some_and(|block| !block.is_empty()) {
                blocks.push(Vec::new());
            }
            continue;
        }
        if let Some(block) = blocks.last_mut() {
            block.push(line);
        }
    }
    blocks.retain(|block| !block.is_empty());

    let mut boards = blocks
        .iter()
        .map(|block| block.join("\n").parse::<Board>());

    // an empty file parses as an empty board, which reports the size error
    let initial = boards.next().unwrap_or_else(|| "".parse())?;
    let goal = match boards.next() {
        Some(goal) => goal?,
        None => Board::canonical_goal(initial.rows(), initial.cols())?,
    };

    Ok(Puzzle { initial, goal })
}

/// Loads a puzzle file.
pub fn load_puzzle(path: impl AsRef<Path>) -> Result<Puzzle, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if count_blocks(&text) > 2 {
        return Err(LoadError::TooManyBoards {
            path: path.to_path_buf(),
        });
    }

    parse_puzzle(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn count_blocks(text: &str) -> usize {
    let mut count = 0;
    let mut in_block = false;
    for line in text.lines().map(str::trim).filter(|line| !line.starts_with('#')) {
        if line.is_empty() {
            in_block = false;
        } else if !in_block {
            in_block = true;
            count += 1;
        }
    }
    count
}

/// Writes the rendered solution path to `path`.
pub fn save_solution(path: impl AsRef<Path>, solution: &Solution) -> io::Result<()> {
    let mut output = format!("Solution found in {} moves!\n", solution.move_count());
    output.push_str(&format_solution(solution));
    fs::write(path, output)
}
