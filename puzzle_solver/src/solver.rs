//! A* search for the sliding-tile puzzle.
//!
//! `Solver` runs two best-first searches in lockstep: one from the input
//! board and one from its twin. A board and its twin never share
//! solvability, so whichever search reaches the goal first decides the
//! verdict. No visited set is kept; a node only refuses to step back onto
//! its own predecessor's board.
use crate::engine::Board;
use crate::error::SolverError;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace, warn};

/// Expansions between two progress reports at `trace` level.
const PROGRESS_INTERVAL: usize = 10_000;

/// Counters describing how much work a search performed, summed over the
/// original and twin searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from a frontier.
    pub expanded: usize,
    /// Nodes created, roots included.
    pub generated: usize,
}

/// One explored board plus how it was reached.
#[derive(Debug)]
struct SearchNode {
    board: Board,
    steps: u32,
    /// Index of the parent node in the same arena; `None` for the root.
    predecessor: Option<usize>,
}

/// Frontier key. `BinaryHeap` is a max-heap, so the ordering is reversed:
/// lower priority wins, and among equal priorities the node created first.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    priority: u32,
    node: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A search tree stored as an arena of nodes plus the frontier of nodes not
/// yet expanded. Parent links are arena indices, so the tree holds no
/// reference cycles.
#[derive(Debug)]
struct SearchTree {
    nodes: Vec<SearchNode>,
    frontier: BinaryHeap<FrontierEntry>,
}

impl SearchTree {
    fn new(root: Board) -> Self {
        let mut tree = SearchTree {
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
        };
        tree.push(root, 0, None);
        tree
    }

    fn push(&mut self, board: Board, steps: u32, predecessor: Option<usize>) {
        let node = self.nodes.len();
        let priority = steps + board.manhattan();
        self.nodes.push(SearchNode {
            board,
            steps,
            predecessor,
        });
        self.frontier.push(FrontierEntry { priority, node });
    }

    /// Removes the lowest-priority node and returns its arena index.
    fn pop(&mut self) -> Option<usize> {
        self.frontier.pop().map(|entry| entry.node)
    }

    fn board(&self, node: usize) -> &Board {
        &self.nodes[node].board
    }

    /// Enqueues every neighbour of `node` except the board it came from.
    /// Returns how many nodes were created.
    fn expand(&mut self, node: usize) -> usize {
        let current = &self.nodes[node];
        let parent = current.predecessor.map(|p| &self.nodes[p].board);
        let steps = current.steps + 1;

        let children: Vec<Board> = current
            .board
            .neighbors()
            .into_iter()
            .filter(|neighbor| Some(neighbor) != parent)
            .collect();

        let created = children.len();
        for child in children {
            self.push(child, steps, Some(node));
        }
        created
    }

    /// Boards from the root to `node`, inclusive.
    fn path_to(&self, node: usize) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.nodes[node].steps as usize + 1);
        let mut current = Some(node);
        while let Some(idx) = current {
            path.push(self.nodes[idx].board.clone());
            current = self.nodes[idx].predecessor;
        }
        path.reverse();
        path
    }
}

/// How a lockstep search ended.
enum Outcome {
    Solved(Vec<Board>),
    Unsolvable,
}

/// The pair of searches (original and twin) advanced one round at a time.
struct LockstepSearch {
    original: SearchTree,
    twin: SearchTree,
    stats: SearchStats,
    next_report: usize,
}

impl LockstepSearch {
    fn new(initial: Board) -> Self {
        let twin = initial.twin();
        LockstepSearch {
            original: SearchTree::new(initial),
            twin: SearchTree::new(twin),
            stats: SearchStats {
                expanded: 0,
                generated: 2,
            },
            next_report: PROGRESS_INTERVAL,
        }
    }

    /// Expands one node of the original search, then one of the twin search.
    /// Returns `Some` once either of them pops a goal board.
    fn step(&mut self) -> Option<Outcome> {
        // Neither frontier can drain for a valid board: every node has at least
        // two neighbours and only one of them is skipped.
        let Some(node) = self.original.pop() else {
            return Some(Outcome::Unsolvable);
        };
        self.stats.expanded += 1;
        if self.original.board(node).is_goal() {
            return Some(Outcome::Solved(self.original.path_to(node)));
        }
        self.stats.generated += self.original.expand(node);

        if let Some(node) = self.twin.pop() {
            self.stats.expanded += 1;
            if self.twin.board(node).is_goal() {
                return Some(Outcome::Unsolvable);
            }
            self.stats.generated += self.twin.expand(node);
        }

        if self.stats.expanded >= self.next_report {
            trace!(
                expanded = self.stats.expanded,
                generated = self.stats.generated,
                frontier = self.original.frontier.len(),
                "search in progress"
            );
            self.next_report += PROGRESS_INTERVAL;
        }

        None
    }

    fn finish(self, outcome: Outcome) -> Solver {
        let stats = self.stats;
        // The arenas are dropped here; only the solution path survives.
        drop(self);

        let solution = match outcome {
            Outcome::Solved(path) => {
                debug!(
                    moves = path.len() - 1,
                    expanded = stats.expanded,
                    generated = stats.generated,
                    "puzzle solved"
                );
                Some(path)
            }
            Outcome::Unsolvable => {
                debug!(
                    expanded = stats.expanded,
                    generated = stats.generated,
                    "twin reached the goal, board is unsolvable"
                );
                None
            }
        };

        Solver { solution, stats }
    }
}

/// Finds a shortest solution for a board, or proves there is none.
///
/// The search runs to completion inside the constructor; the accessors only
/// read the stored outcome. Unsolvable boards are a normal result:
/// `is_solvable()` is `false`, `moves()` is `-1` and `solution()` is `None`.
///
/// # Examples
/// ```
/// use puzzle_solver::engine::Board;
/// use puzzle_solver::solver::Solver;
///
/// let board = Board::new(&[vec![0, 1], vec![3, 2]]).unwrap();
/// let solver = Solver::new(board);
/// assert!(solver.is_solvable());
/// assert_eq!(solver.moves(), 2);
/// assert_eq!(solver.solution().unwrap().len(), 3);
///
/// let swapped = Board::new(&[vec![1, 2, 3], vec![4, 5, 6], vec![8, 7, 0]]).unwrap();
/// assert_eq!(Solver::new(swapped).moves(), -1);
/// ```
#[derive(Clone, Debug)]
pub struct Solver {
    solution: Option<Vec<Board>>,
    stats: SearchStats,
}

impl Solver {
    /// Solves `initial`, running until one of the two searches reaches the goal.
    ///
    /// There is no upper bound on the work performed; use `with_budget` for
    /// boards that may be too hard to finish.
    pub fn new(initial: Board) -> Self {
        let mut search = LockstepSearch::new(initial);
        loop {
            if let Some(outcome) = search.step() {
                return search.finish(outcome);
            }
        }
    }

    /// Solves `initial` but gives up once both searches together have expanded
    /// at least `max_expansions` nodes.
    ///
    /// The budget is checked after each round (one expansion per search), so a
    /// goal found in the round that reaches the budget is still returned.
    ///
    /// # Returns
    /// * `Ok(Solver)` with the same outcome `Solver::new` would produce.
    /// * `Err(SolverError::BudgetExhausted)` if the budget ran out first.
    pub fn with_budget(initial: Board, max_expansions: usize) -> Result<Self, SolverError> {
        let mut search = LockstepSearch::new(initial);
        loop {
            if let Some(outcome) = search.step() {
                return Ok(search.finish(outcome));
            }
            if search.stats.expanded >= max_expansions {
                warn!(
                    expanded = search.stats.expanded,
                    max_expansions, "search budget exhausted"
                );
                return Err(SolverError::BudgetExhausted {
                    expanded: search.stats.expanded,
                });
            }
        }
    }

    /// Returns `true` if the initial board can reach the goal.
    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Minimum number of moves to reach the goal, or `-1` if unsolvable.
    pub fn moves(&self) -> i32 {
        self.solution
            .as_ref()
            .map_or(-1, |path| path.len() as i32 - 1)
    }

    /// Boards from the initial board to the goal, inclusive, in move order.
    /// `None` if unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    /// Consumes the solver and returns the owned solution path.
    pub fn into_solution(self) -> Option<Vec<Board>> {
        self.solution
    }

    /// Work counters for the finished search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
