//! Dual-frontier A* solver with twin-board solvability detection.
//!
//! Two independent searches run in lockstep: one from the initial board and
//! one from its twin. Exactly one of the two can reach the goal, so whichever
//! frontier pops a goal first decides the answer. The real search is checked
//! first each round, so a tie resolves as solvable.

use std::time::{Duration, Instant};

use clap::ValueEnum;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Neighbors};
use crate::frontier::Frontier;
use crate::pruning::PruningRule;

/// Rounds between progress traces
const TRACE_INTERVAL: usize = 100_000;

/// Estimate of remaining moves used in node priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    #[default]
    Manhattan,
    Hamming,
}

impl Heuristic {
    pub fn estimate(self, board: &Board) -> usize {
        match self {
            Heuristic::Manhattan => board.manhattan(),
            Heuristic::Hamming => board.hamming(),
        }
    }
}

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Total expansions across both frontiers before giving up
    pub max_expansions: Option<usize>,
    /// Maximum time to search
    pub timeout: Option<Duration>,
    /// Which neighbors are admitted when a node is expanded
    pub pruning: PruningRule,
    pub heuristic: Heuristic,
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The real search reached the goal
    Solved,
    /// The twin search reached the goal first
    Unsolvable,
    /// A limit from `SolverConfig` was hit before either search finished
    Aborted,
}

/// Counters collected during a search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from either frontier
    pub expansions: usize,
    /// Nodes allocated in either search tree
    pub nodes_created: usize,
    pub time_elapsed_ms: u64,
}

/// One node of a search tree. `parent` indexes into the same arena.
#[derive(Debug)]
struct SearchNode {
    board: Board,
    moves: usize,
    parent: Option<usize>,
}

/// A single A* search: an arena of nodes and the frontier of unexpanded ones.
///
/// Parents always sit at lower indices than their children, so the arena
/// encodes a tree and walking `parent` links always ends at the root.
#[derive(Debug)]
struct Search {
    nodes: Vec<SearchNode>,
    frontier: Frontier<usize>,
    pruning: PruningRule,
    heuristic: Heuristic,
}

impl Search {
    fn new(root: Board, pruning: PruningRule, heuristic: Heuristic) -> Self {
        let mut search = Self {
            nodes: Vec::new(),
            frontier: Frontier::new(),
            pruning,
            heuristic,
        };
        search.insert(root, 0, None);
        search
    }

    fn insert(&mut self, board: Board, moves: usize, parent: Option<usize>) {
        let priority = moves + self.heuristic.estimate(&board);
        let index = self.nodes.len();
        self.nodes.push(SearchNode {
            board,
            moves,
            parent,
        });
        self.frontier.push(priority, index);
    }

    /// Pop the lowest-priority node, push its admitted neighbors, and return
    /// the popped node's index. `None` when the frontier is empty.
    fn expand(&mut self) -> Option<usize> {
        let (_, index) = self.frontier.pop()?;
        let node = &self.nodes[index];
        let parent_board = node.parent.map(|p| &self.nodes[p].board);
        let moves = node.moves + 1;
        let children: Neighbors = node
            .board
            .neighbors()
            .into_iter()
            .filter(|next| self.pruning.admits(parent_board, next))
            .collect();

        for board in children {
            self.insert(board, moves, Some(index));
        }
        Some(index)
    }

    fn node(&self, index: usize) -> &SearchNode {
        &self.nodes[index]
    }

    /// Boards from the root to `index`, inclusive
    fn path_to(&self, index: usize) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.nodes[index].moves + 1);
        let mut cursor = Some(index);
        while let Some(i) = cursor {
            let node = &self.nodes[i];
            path.push(node.board.clone());
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}

/// Result of solving one board. The search runs to completion in the
/// constructor; the accessors only read the stored result.
#[derive(Debug, Clone)]
pub struct Solver {
    outcome: Outcome,
    solution: Option<Vec<Board>>,
    stats: SearchStats,
}

impl Solver {
    /// Solve `initial` with no limits, skip-reversal pruning and the
    /// Manhattan heuristic.
    pub fn new(initial: Board) -> Self {
        Self::with_config(initial, &SolverConfig::default())
    }

    pub fn with_config(initial: Board, config: &SolverConfig) -> Self {
        let start_time = Instant::now();

        if initial.is_goal() {
            debug!("initial board is already solved");
            return Self {
                outcome: Outcome::Solved,
                solution: Some(vec![initial]),
                stats: SearchStats {
                    nodes_created: 1,
                    ..Default::default()
                },
            };
        }

        debug!(
            "searching {n}x{n} board (manhattan {}, hamming {}) with {:?}",
            initial.manhattan(),
            initial.hamming(),
            config,
            n = initial.dimension(),
        );

        // A deadline past the end of `Instant`'s range is no deadline
        let deadline = config.timeout.and_then(|t| start_time.checked_add(t));
        let limit_reached =
            |expansions: usize| config.max_expansions.is_some_and(|max| expansions >= max);
        let twin = initial.twin();
        let mut real = Search::new(initial, config.pruning, config.heuristic);
        let mut mirror = Search::new(twin, config.pruning, config.heuristic);
        let mut expansions = 0;
        let mut rounds = 0;

        let (outcome, solution) = loop {
            if limit_reached(expansions) {
                warn!("search aborted after {expansions} expansions");
                break (Outcome::Aborted, None);
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                warn!("search aborted after {:?}", start_time.elapsed());
                break (Outcome::Aborted, None);
            }

            let Some(real_index) = real.expand() else {
                warn!("frontier exhausted without reaching the goal");
                break (Outcome::Unsolvable, None);
            };
            expansions += 1;

            // The real side wins a round even when the twin would also hit
            if real.node(real_index).board.is_goal() {
                break (Outcome::Solved, Some(real.path_to(real_index)));
            }
            if limit_reached(expansions) {
                warn!("search aborted after {expansions} expansions");
                break (Outcome::Aborted, None);
            }

            let twin_index = mirror.expand();
            expansions += usize::from(twin_index.is_some());
            if twin_index.is_some_and(|i| mirror.node(i).board.is_goal()) {
                break (Outcome::Unsolvable, None);
            }

            rounds += 1;
            if rounds % TRACE_INTERVAL == 0 {
                trace!(
                    "round {rounds}: frontier sizes {} / {}, depth {}",
                    real.frontier.len(),
                    mirror.frontier.len(),
                    real.node(real_index).moves
                );
            }
        };

        let stats = SearchStats {
            expansions,
            nodes_created: real.nodes.len() + mirror.nodes.len(),
            time_elapsed_ms: start_time.elapsed().as_millis() as u64,
        };
        debug!("search finished: {outcome:?}, {stats:?}");

        Self {
            outcome,
            solution,
            stats,
        }
    }

    /// True iff the real search reached the goal
    pub fn is_solvable(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    /// Minimum number of moves, or `None` if unsolvable or aborted
    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }

    /// Boards from the initial board to the goal, inclusive
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
