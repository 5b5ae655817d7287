//! Solver configuration.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::board::Board;
use crate::heuristic::{Goal, Heuristic, Manhattan, MisplacedTiles, Zero};

/// Built-in heuristics, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HeuristicKind {
    /// Sum of tile distances to their goal cells.
    #[default]
    Manhattan,
    /// Count of tiles off their goal cell.
    Misplaced,
    /// No estimate (uniform-cost search).
    Zero,
}

impl HeuristicKind {
    pub const fn name(self) -> &'static str {
        match self {
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::Misplaced => "misplaced",
            HeuristicKind::Zero => "zero",
        }
    }
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, board: &Board, goal: &Goal) -> u32 {
        match self {
            HeuristicKind::Manhattan => Manhattan.estimate(board, goal),
            HeuristicKind::Misplaced => MisplacedTiles.estimate(board, goal),
            HeuristicKind::Zero => Zero.estimate(board, goal),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(HeuristicKind::Manhattan),
            "misplaced" => Ok(HeuristicKind::Misplaced),
            "zero" => Ok(HeuristicKind::Zero),
            other => Err(format!(
                "unknown heuristic '{other}' (expected manhattan, misplaced or zero)"
            )),
        }
    }
}

/// Options controlling a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub heuristic: HeuristicKind,
    /// Reject parity-mismatched puzzles before searching.
    pub parity_check: bool,
    /// Give up after this many node expansions.
    pub max_expansions: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicKind::Manhattan,
            parity_check: true,
            max_expansions: None,
        }
    }
}

impl SolverConfig {
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_parity_check(mut self, enabled: bool) -> Self {
        self.parity_check = enabled;
        self
    }

    pub fn with_max_expansions(mut self, limit: Option<usize>) -> Self {
        self.max_expansions = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.heuristic, HeuristicKind::Manhattan);
        assert!(config.parity_check);
        assert_eq!(config.max_expansions, None);
    }

    #[test]
    fn test_builder_methods() {
        let config = SolverConfig::default()
            .with_heuristic(HeuristicKind::Zero)
            .with_parity_check(false)
            .with_max_expansions(Some(10));
        assert_eq!(config.heuristic, HeuristicKind::Zero);
        assert!(!config.parity_check);
        assert_eq!(config.max_expansions, Some(10));
    }

    #[test]
    fn test_heuristic_kind_parses_names() {
        for kind in [
            HeuristicKind::Manhattan,
            HeuristicKind::Misplaced,
            HeuristicKind::Zero,
        ] {
            assert_eq!(kind.name().parse::<HeuristicKind>().unwrap(), kind);
        }
        assert_eq!(
            "Manhattan".parse::<HeuristicKind>().unwrap(),
            HeuristicKind::Manhattan
        );
        assert!("euclid".parse::<HeuristicKind>().is_err());
    }

    #[test]
    fn test_heuristic_kind_dispatches() {
        let goal_board = Board::canonical_goal(3, 3).unwrap();
        let goal = Goal::new(&goal_board);
        let start: Board = "1 0 3/4 2 5/7 8 6".parse().unwrap();
        assert_eq!(HeuristicKind::Manhattan.estimate(&start, &goal), 3);
        assert_eq!(HeuristicKind::Misplaced.estimate(&start, &goal), 3);
        assert_eq!(HeuristicKind::Zero.estimate(&start, &goal), 0);
    }
}
