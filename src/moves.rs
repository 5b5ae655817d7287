//! Blank-shift moves.
//!
//! A move names the direction the blank travels; the neighbouring tile
//! slides the opposite way into the vacated cell.

use std::fmt;

use crate::board::Board;

/// One of the four shift directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Expansion order used by the solver.
///
/// Children are generated in this order, which together with FIFO
/// tie-breaking makes the returned path deterministic.
pub const EXPANSION_ORDER: [Move; 4] = [Move::Right, Move::Down, Move::Left, Move::Up];

impl Move {
    /// `(row, col)` offset applied to the blank.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    pub const fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        }
    }

    /// Flat index the blank would move to, or `None` if it would leave the grid.
    pub fn target(self, board: &Board) -> Option<usize> {
        let (row, col) = board.blank_position();
        let (d_row, d_col) = self.offset();
        let new_row = row.checked_add_signed(d_row)?;
        let new_col = col.checked_add_signed(d_col)?;

        if new_row < board.rows() && new_col < board.cols() {
            Some(new_row * board.cols() + new_col)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_applicable(self, board: &Board) -> bool {
        self.target(board).is_some()
    }

    /// Applies the move, returning the resulting board.
    pub fn apply(self, board: &Board) -> Option<Board> {
        self.target(board).map(|target| board.with_blank_at(target))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Moves applicable to `board`, in expansion order.
pub fn applicable_moves(board: &Board) -> impl Iterator<Item = Move> + '_ {
    EXPANSION_ORDER
        .into_iter()
        .filter(move |mv| mv.is_applicable(board))
}

/// Successor boards of `board`, paired with the move producing each.
pub fn successors(board: &Board) -> impl Iterator<Item = (Move, Board)> + '_ {
    EXPANSION_ORDER
        .into_iter()
        .filter_map(move |mv| mv.apply(board).map(|next| (mv, next)))
}
