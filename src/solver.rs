//! A* search over board states.
//!
//! - Nodes live in a per-solve arena; parent links are arena indices, so
//!   path reconstruction always walks toward the root
//! - The frontier is a binary heap ordered by `f`, then by insertion order
//!   (FIFO among equal `f`) so repeated solves return the same path
//! - Expanded boards go into an `FxHashSet`; with unit move costs the first
//!   expansion of a board is already along a shortest path, so later
//!   rediscoveries are dropped

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::config::{HeuristicKind, SolverConfig};
use crate::error::InvalidInput;
use crate::heuristic::{Goal, Heuristic};
use crate::moves::{successors, Move};
use crate::parity;

/// Index of a node in the search arena.
type NodeId = usize;

/// A generated board together with how it was reached.
struct Node {
    board: Board,
    parent: Option<NodeId>,
    /// Move applied to the parent to produce `board` (`None` for the root).
    mv: Option<Move>,
    /// Moves from the initial board.
    g: u32,
    /// Estimated moves to the goal.
    h: u32,
}

impl Node {
    #[inline]
    fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Frontier entry; the heap pops the smallest `(f, seq)` first.
#[derive(PartialEq, Eq)]
struct FrontierEntry {
    f: u32,
    seq: u64,
    node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the frontier and expanded.
    pub expanded: usize,
    /// Child nodes pushed onto the frontier.
    pub generated: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// One board along a solution path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub board: Board,
    /// Move that produced `board` from the previous step; `None` for the start.
    pub mv: Option<Move>,
}

/// A shortest path from the initial board to the goal, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub steps: Vec<Step>,
    pub stats: SearchStats,
}

impl Solution {
    /// Number of moves (one less than the number of steps).
    pub fn move_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.steps.iter().filter_map(|step| step.mv)
    }

    pub fn boards(&self) -> impl Iterator<Item = &Board> + '_ {
        self.steps.iter().map(|step| &step.board)
    }
}

/// Why a well-formed puzzle has no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsolvableReason {
    /// Permutation parity rules out the goal; no search was run.
    ParityMismatch,
    /// Every reachable board was expanded without meeting the goal.
    Exhausted,
}

impl fmt::Display for UnsolvableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnsolvableReason::ParityMismatch => "tile parity rules out the goal",
            UnsolvableReason::Exhausted => "every reachable board was searched",
        })
    }
}

/// Result of a solve on valid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved(Solution),
    Unsolvable {
        reason: UnsolvableReason,
        stats: SearchStats,
    },
    /// The expansion limit was hit before the goal was found.
    LimitReached { stats: SearchStats },
}

impl SolveOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SolveOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn is_unsolvable(&self) -> bool {
        matches!(self, SolveOutcome::Unsolvable { .. })
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            SolveOutcome::Solved(solution) => solution.stats,
            SolveOutcome::Unsolvable { stats, .. } | SolveOutcome::LimitReached { stats } => *stats,
        }
    }
}

/// Checks that `initial` and `goal` describe the same puzzle.
pub fn validate(initial: &Board, goal: &Board) -> Result<(), InvalidInput> {
    if initial.dimensions() != goal.dimensions() {
        return Err(InvalidInput::DimensionMismatch {
            initial: initial.dimensions(),
            goal: goal.dimensions(),
        });
    }
    if !initial.same_tiles(goal) {
        return Err(InvalidInput::TileMismatch);
    }
    Ok(())
}

/// Solves with the default configuration (Manhattan distance, parity pre-check).
pub fn solve(initial: &Board, goal: &Board) -> Result<SolveOutcome, InvalidInput> {
    Solver::new(SolverConfig::default()).solve(initial, goal)
}

/// A* solver parameterized by its heuristic.
#[derive(Debug, Clone)]
pub struct Solver<H = HeuristicKind> {
    heuristic: H,
    parity_check: bool,
    max_expansions: Option<usize>,
}

impl Solver<HeuristicKind> {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            heuristic: config.heuristic,
            parity_check: config.parity_check,
            max_expansions: config.max_expansions,
        }
    }
}

impl<H: Heuristic> Solver<H> {
    /// Uses a custom heuristic with the default parity check and no limit.
    pub fn with_heuristic(heuristic: H) -> Self {
        let defaults = SolverConfig::default();
        Self {
            heuristic,
            parity_check: defaults.parity_check,
            max_expansions: defaults.max_expansions,
        }
    }

    pub fn parity_check(mut self, enabled: bool) -> Self {
        self.parity_check = enabled;
        self
    }

    pub fn max_expansions(mut self, limit: Option<usize>) -> Self {
        self.max_expansions = limit;
        self
    }

    /// Finds a shortest move sequence from `initial` to `goal`.
    ///
    /// Malformed input is an error; an unreachable goal is a normal outcome.
    pub fn solve(&self, initial: &Board, goal: &Board) -> Result<SolveOutcome, InvalidInput> {
        validate(initial, goal)?;

        debug!(
            "solving {}x{} puzzle {} -> {}",
            initial.rows(),
            initial.cols(),
            initial,
            goal
        );

        if self.parity_check && !parity::is_solvable(initial, goal) {
            debug!("parity mismatch, skipping search");
            return Ok(SolveOutcome::Unsolvable {
                reason: UnsolvableReason::ParityMismatch,
                stats: SearchStats::default(),
            });
        }

        let outcome = self.search(initial, goal);
        debug!("search finished: {:?}", outcome.stats());
        Ok(outcome)
    }

    fn search(&self, initial: &Board, goal_board: &Board) -> SolveOutcome {
        let goal = Goal::new(goal_board);
        let mut stats = SearchStats::default();

        let mut arena: Vec<Node> = vec![Node {
            board: initial.clone(),
            parent: None,
            mv: None,
            g: 0,
            h: self.heuristic.estimate(initial, &goal),
        }];
        let mut frontier = BinaryHeap::new();
        let mut visited: FxHashSet<Board> = FxHashSet::default();
        let mut next_seq: u64 = 0;

        frontier.push(FrontierEntry {
            f: arena[0].f(),
            seq: next_seq,
            node: 0,
        });
        next_seq += 1;
        stats.max_frontier = 1;

        while let Some(entry) = frontier.pop() {
            let current = entry.node;

            if arena[current].board == *goal_board {
                stats.max_frontier = stats.max_frontier.max(frontier.len() + 1);
                let steps = reconstruct_path(&arena, current);
                debug!("solved in {} moves", steps.len() - 1);
                return SolveOutcome::Solved(Solution { steps, stats });
            }

            // the same board may have been pushed more than once before expansion
            if visited.contains(&arena[current].board) {
                continue;
            }

            if self
                .max_expansions
                .is_some_and(|limit| stats.expanded >= limit)
            {
                debug!("expansion limit reached after {} expansions", stats.expanded);
                return SolveOutcome::LimitReached { stats };
            }

            visited.insert(arena[current].board.clone());
            stats.expanded += 1;

            let parent_g = arena[current].g;
            trace!(
                "expand #{} g={} f={} {}",
                stats.expanded,
                parent_g,
                entry.f,
                arena[current].board
            );

            let children: Vec<(Move, Board)> = successors(&arena[current].board)
                .filter(|(_, child)| !visited.contains(child))
                .collect();

            for (mv, board) in children {
                let h = self.heuristic.estimate(&board, &goal);
                let id = arena.len();
                arena.push(Node {
                    board,
                    parent: Some(current),
                    mv: Some(mv),
                    g: parent_g + 1,
                    h,
                });
                frontier.push(FrontierEntry {
                    f: parent_g + 1 + h,
                    seq: next_seq,
                    node: id,
                });
                next_seq += 1;
                stats.generated += 1;
            }

            stats.max_frontier = stats.max_frontier.max(frontier.len());
        }

        debug!("frontier exhausted after {} expansions", stats.expanded);
        SolveOutcome::Unsolvable {
            reason: UnsolvableReason::Exhausted,
            stats,
        }
    }
}

/// Follows parent links from `last` back to the root, then reverses.
fn reconstruct_path(arena: &[Node], last: NodeId) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut cursor = Some(last);
    while let Some(id) = cursor {
        let node = &arena[id];
        steps.push(Step {
            board: node.board.clone(),
            mv: node.mv,
        });
        cursor = node.parent;
    }
    steps.reverse();
    steps
}
