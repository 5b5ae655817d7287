//! Plain-text rendering of boards and solution paths.

use crate::board::Board;
use crate::solver::Solution;

/// Line printed between steps of a rendered path.
pub const SEPARATOR: &str = "------------------";

/// Formats a board one row per line, cells separated by single spaces.
///
/// Cells are right-aligned to the widest tile so larger boards stay in columns.
pub fn format_board(board: &Board) -> String {
    let width = board
        .cells()
        .iter()
        .map(|tile| tile.to_string().len())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for row in board.iter_rows() {
        let line: Vec<String> = row
            .iter()
            .map(|tile| format!("{tile:>width$}"))
            .collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }
    output
}

/// Formats every step of a solution: the grid, the move taken, a separator.
pub fn format_solution(solution: &Solution) -> String {
    let mut output = String::new();
    for step in &solution.steps {
        output.push_str(&format_board(&step.board));
        match step.mv {
            Some(mv) => output.push_str(&format!("Move: {mv}\n")),
            None => output.push_str("Move: start\n"),
        }
        output.push_str(SEPARATOR);
        output.push('\n');
    }
    output
}

/// Formats a solution as a comma-separated move list, e.g. `down, right`.
pub fn format_moves(solution: &Solution) -> String {
    solution
        .moves()
        .map(|mv| mv.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    #[test]
    fn test_format_board_3x3() {
        let board: Board = "1 2 3/4 0 6/7 5 8".parse().unwrap();
        assert_eq!(format_board(&board), "1 2 3\n4 0 6\n7 5 8\n");
    }

    #[test]
    fn test_format_board_aligns_wide_tiles() {
        let board = Board::canonical_goal(4, 4).unwrap();
        assert_eq!(
            format_board(&board),
            " 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14 15  0\n"
        );
    }

    #[test]
    fn test_format_solution_snapshot() {
        let initial: Board = "1 0 3/4 2 5/7 8 6".parse().unwrap();
        let goal = Board::canonical_goal(3, 3).unwrap();
        let solution = solve(&initial, &goal).unwrap().into_solution().unwrap();

        let mut output = format!("Solution found in {} moves!\n", solution.move_count());
        output.push_str(&format_solution(&solution));
        insta::assert_snapshot!(output);
    }

    #[test]
    fn test_format_moves() {
        let initial: Board = "1 2 3/4 0 6/7 5 8".parse().unwrap();
        let goal = Board::canonical_goal(3, 3).unwrap();
        let solution = solve(&initial, &goal).unwrap().into_solution().unwrap();
        assert_eq!(format_moves(&solution), "down, right");
    }
}
