//! Admissible cost-to-goal estimators.

use crate::board::{Board, Tile, BLANK, MAX_CELLS};

/// A goal board with a precomputed tile -> cell lookup.
///
/// Built once per solve so heuristics don't rescan the goal for every node.
#[derive(Debug, Clone)]
pub struct Goal {
    board: Board,
    /// `positions[tile]` is the `(row, col)` of `tile` in the goal.
    positions: Vec<(usize, usize)>,
}

impl Goal {
    pub fn new(board: &Board) -> Self {
        let mut positions = vec![(0, 0); MAX_CELLS + 1];
        for (index, &tile) in board.cells().iter().enumerate() {
            positions[tile as usize] = board.position_of_index(index);
        }
        Self {
            board: board.clone(),
            positions,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// `(row, col)` of `tile` in the goal layout.
    #[inline]
    pub fn position_of(&self, tile: Tile) -> (usize, usize) {
        self.positions[tile as usize]
    }
}

/// Estimates the number of moves remaining from `board` to `goal`.
///
/// Implementations must be admissible: the estimate never exceeds the true
/// remaining move count, otherwise the solver loses its optimality guarantee.
pub trait Heuristic {
    fn estimate(&self, board: &Board, goal: &Goal) -> u32;
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    fn estimate(&self, board: &Board, goal: &Goal) -> u32 {
        (**self).estimate(board, goal)
    }
}

/// Sum of grid distances between every tile and its goal cell.
///
/// Each move shifts one tile by one cell, so this never overestimates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, board: &Board, goal: &Goal) -> u32 {
        board
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(index, &tile)| {
                let (row, col) = board.position_of_index(index);
                let (goal_row, goal_col) = goal.position_of(tile);
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
            })
            .sum()
    }
}

/// Number of tiles not on their goal cell (blank excluded).
#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedTiles;

impl Heuristic for MisplacedTiles {
    fn estimate(&self, board: &Board, goal: &Goal) -> u32 {
        board
            .cells()
            .iter()
            .zip(goal.board().cells())
            .filter(|&(&tile, &target)| tile != BLANK && tile != target)
            .count() as u32
    }
}

/// Always zero; turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _board: &Board, _goal: &Goal) -> u32 {
        0
    }
}
