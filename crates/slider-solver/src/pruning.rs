//! Neighbor admission rules applied when a search node is expanded.
//!
//! A root node always admits every neighbor. For any other node the rule
//! decides, given the board of the node's parent, which neighbors are
//! pushed onto the frontier.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::board::Board;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PruningRule {
    /// Admit every neighbor except the one that undoes the previous move
    #[default]
    SkipReversal,
    /// Admit only the neighbor that equals the parent's board.
    ///
    /// With this rule a search never moves more than one step away from
    /// its root, so it only terminates when a goal is one move away.
    /// Pair it with an expansion limit or timeout.
    ParentOnly,
}

impl PruningRule {
    /// Check whether `neighbor` should be pushed when expanding a node whose
    /// parent holds `parent_board` (`None` for a root).
    pub fn admits(self, parent_board: Option<&Board>, neighbor: &Board) -> bool {
        let Some(parent) = parent_board else {
            return true;
        };
        match self {
            PruningRule::SkipReversal => neighbor != parent,
            PruningRule::ParentOnly => neighbor == parent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(rule: PruningRule, parent: Option<&Board>, board: &Board) -> Vec<Board> {
        board
            .neighbors()
            .into_iter()
            .filter(|n| rule.admits(parent, n))
            .collect()
    }

    #[test]
    fn test_root_admits_all_neighbors() {
        let root = Board::new(vec![vec![1, 2, 3], vec![4, 0, 5], vec![6, 7, 8]]);
        for rule in [PruningRule::SkipReversal, PruningRule::ParentOnly] {
            assert_eq!(expand(rule, None, &root).len(), 4);
        }
    }

    #[test]
    fn test_skip_reversal_drops_only_the_parent() {
        let parent = Board::new(vec![vec![1, 2, 3], vec![4, 0, 5], vec![6, 7, 8]]);
        let child = Board::new(vec![vec![1, 0, 3], vec![4, 2, 5], vec![6, 7, 8]]);
        let admitted = expand(PruningRule::SkipReversal, Some(&parent), &child);
        assert_eq!(admitted.len(), 2);
        assert!(!admitted.contains(&parent));
    }

    #[test]
    fn test_parent_only_keeps_only_the_parent() {
        let parent = Board::new(vec![vec![1, 2, 3], vec![4, 0, 5], vec![6, 7, 8]]);
        let child = Board::new(vec![vec![1, 0, 3], vec![4, 2, 5], vec![6, 7, 8]]);
        let admitted = expand(PruningRule::ParentOnly, Some(&parent), &child);
        assert_eq!(admitted, vec![parent]);
    }
}
