//! Solvability test by permutation parity.
//!
//! Every move swaps the blank with a neighbour: one transposition of the
//! cell permutation, and one step of blank displacement. So the parity of
//! the permutation taking `initial` to `goal` (blank included) always equals
//! the parity of the blank's taxicab distance. On grids at least 2x2 that
//! condition is also sufficient. Single-row and single-column grids can only
//! slide the blank along the line, so tile order must already agree.

use crate::board::{Board, BLANK, MAX_CELLS};

/// Returns true if `goal` is reachable from `initial`.
///
/// Boards with different dimensions or tile sets are never reachable.
pub fn is_solvable(initial: &Board, goal: &Board) -> bool {
    if initial.dimensions() != goal.dimensions() || !initial.same_tiles(goal) {
        return false;
    }

    if initial.rows() == 1 || initial.cols() == 1 {
        return tiles_in_order(initial).eq(tiles_in_order(goal));
    }

    let (blank_row, blank_col) = initial.blank_position();
    let (goal_row, goal_col) = goal.blank_position();
    let blank_distance = blank_row.abs_diff(goal_row) + blank_col.abs_diff(goal_col);

    permutation_is_odd(initial, goal) == (blank_distance % 2 == 1)
}

/// Number of pairs of non-blank tiles out of ascending order (row-major).
pub fn inversions(board: &Board) -> usize {
    let tiles: Vec<_> = tiles_in_order(board).collect();
    tiles
        .iter()
        .enumerate()
        .map(|(i, &tile)| tiles[i + 1..].iter().filter(|&&next| next < tile).count())
        .sum()
}

fn tiles_in_order(board: &Board) -> impl Iterator<Item = u8> + '_ {
    board.cells().iter().copied().filter(|&tile| tile != BLANK)
}

/// Parity of the cell permutation mapping `initial` onto `goal`.
///
/// Computed from the cycle decomposition: a permutation of `n` elements with
/// `c` cycles is odd iff `n - c` is odd.
fn permutation_is_odd(initial: &Board, goal: &Board) -> bool {
    let mut goal_index = [0usize; MAX_CELLS + 1];
    for (index, &tile) in goal.cells().iter().enumerate() {
        goal_index[tile as usize] = index;
    }

    // tiles are unique, so this is a permutation of cell indices
    let mapping: Vec<usize> = initial
        .cells()
        .iter()
        .map(|&tile| goal_index[tile as usize])
        .collect();

    let mut seen = vec![false; mapping.len()];
    let mut cycles = 0;
    for start in 0..mapping.len() {
        if seen[start] {
            continue;
        }
        cycles += 1;
        let mut cell = start;
        while !seen[cell] {
            seen[cell] = true;
            cell = mapping[cell];
        }
    }

    (mapping.len() - cycles) % 2 == 1
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::moves::successors;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    /// Every board reachable from `start`.
    fn reachable(start: &Board) -> FxHashSet<Board> {
        let mut seen = FxHashSet::default();
        let mut stack = vec![start.clone()];
        seen.insert(start.clone());
        while let Some(current) = stack.pop() {
            for (_, next) in successors(&current) {
                if seen.insert(next.clone()) {
                    stack.push(next);
                }
            }
        }
        seen
    }

    /// Deterministic pseudo-random permutations of the 3x3 tiles.
    fn shuffled_boards(count: usize) -> Vec<Board> {
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        (0..count)
            .map(|_| {
                let mut cells: Vec<u8> = (0..9).collect();
                for i in (1..cells.len()).rev() {
                    state = state
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(1442695040888963407);
                    let j = (state >> 33) as usize % (i + 1);
                    cells.swap(i, j);
                }
                Board::new(3, 3, cells).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_classic_examples() {
        let goal = Board::canonical_goal(3, 3).unwrap();
        assert!(is_solvable(&board("1 2 3/4 0 6/7 5 8"), &goal));
        assert!(is_solvable(&board("1 0 3/4 2 5/7 8 6"), &goal));
        assert!(!is_solvable(&board("2 1 3/4 5 6/7 8 0"), &goal));
        assert!(!is_solvable(&board("1 2 3/4 5 6/8 7 0"), &goal));
    }

    #[test]
    fn test_matches_inversion_rule_for_canonical_3x3_goal() {
        let goal = Board::canonical_goal(3, 3).unwrap();
        for start in shuffled_boards(500) {
            assert_eq!(
                is_solvable(&start, &goal),
                inversions(&start) % 2 == 0,
                "parity disagrees with inversion count for {start}"
            );
        }
    }

    #[test]
    fn test_matches_exhaustive_reachability_2x3() {
        let goal = Board::canonical_goal(2, 3).unwrap();
        let reached = reachable(&goal);
        assert_eq!(reached.len(), 360);

        let mut solvable = 0;
        let mut cells: Vec<u8> = (0..6).collect();
        for_each_permutation(&mut cells, 0, &mut |cells| {
            let start = Board::new(2, 3, cells.to_vec()).unwrap();
            assert_eq!(is_solvable(&start, &goal), reached.contains(&start), "{start}");
            if reached.contains(&start) {
                solvable += 1;
            }
        });
        assert_eq!(solvable, 360);
    }

    #[test]
    fn test_non_canonical_goal() {
        let goal = board("0 1 2/3 4 5/6 7 8");
        let reached = reachable(&goal);
        for start in shuffled_boards(200) {
            assert_eq!(is_solvable(&start, &goal), reached.contains(&start), "{start}");
        }
    }

    #[test]
    fn test_fifteen_puzzle_swap_is_unsolvable() {
        let goal = Board::canonical_goal(4, 4).unwrap();
        let swapped = board("1 2 3 4/5 6 7 8/9 10 11 12/13 15 14 0");
        assert!(!is_solvable(&swapped, &goal));

        let shifted = board("1 2 3 4/5 6 7 8/9 10 11 12/13 14 0 15");
        assert!(is_solvable(&shifted, &goal));
    }

    #[test]
    fn test_single_row_requires_same_order() {
        let goal = board("1 2 3 0");
        assert!(is_solvable(&board("0 1 2 3"), &goal));
        assert!(is_solvable(&board("1 0 2 3"), &goal));
        assert!(!is_solvable(&board("2 1 3 0"), &goal));
        assert!(!is_solvable(&board("1 3 0 2"), &goal));

        let column = board("1\n0\n2");
        assert!(is_solvable(&column, &board("0\n1\n2")));
        assert!(!is_solvable(&column, &board("2\n1\n0")));
    }

    #[test]
    fn test_mismatched_boards_are_not_solvable() {
        let goal = Board::canonical_goal(3, 3).unwrap();
        assert!(!is_solvable(&board("1 2/3 0"), &goal));
        assert!(!is_solvable(&board("1 2 3/4 5 6/7 9 0"), &goal));
    }

    #[test]
    fn test_arbitrary_tile_ids_match_reachability() {
        let goal = board("1 5 2/9 4 0");
        let reached = reachable(&goal);
        assert_eq!(reached.len(), 360);

        let mut cells: Vec<u8> = vec![0, 1, 2, 4, 5, 9];
        for_each_permutation(&mut cells, 0, &mut |cells| {
            let start = Board::new(2, 3, cells.to_vec()).unwrap();
            assert_eq!(is_solvable(&start, &goal), reached.contains(&start), "{start}");
        });
    }

    #[test]
    fn test_repeated_tiles_cannot_form_a_board() {
        let mut cells: Vec<u8> = vec![0, 1, 1, 2, 3, 4];
        for_each_permutation(&mut cells, 0, &mut |cells| {
            assert!(Board::new(2, 3, cells.to_vec()).is_err());
        });
    }

    #[test]
    fn test_inversions() {
        assert_eq!(inversions(&Board::canonical_goal(3, 3).unwrap()), 0);
        assert_eq!(inversions(&board("2 1 3/4 5 6/7 8 0")), 1);
        assert_eq!(inversions(&board("0 8 7/6 5 4/3 2 1")), 28);
    }

    fn for_each_permutation(cells: &mut Vec<u8>, k: usize, visit: &mut impl FnMut(&[u8])) {
        if k == cells.len() {
            visit(cells);
            return;
        }
        for i in k..cells.len() {
            cells.swap(k, i);
            for_each_permutation(cells, k + 1, visit);
            cells.swap(k, i);
        }
    }
}
