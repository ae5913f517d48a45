//! Board representation for the sliding-tile puzzle.
//!
//! This module defines `Board`, an immutable n×n placement of numbered tiles
//! and one blank (label `0`). A board knows how far it is from the goal
//! (`hamming`, `manhattan`), whether it is the goal, and which boards are one
//! slide away (`neighbors`). It also produces its `twin`, the single-swap
//! variant the solver uses to detect unsolvable inputs.
//!
//! The goal board lists tiles `1..n²-1` in row-major order with the blank in
//! the bottom-right cell.
use crate::error::InvalidBoardError;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Label used for the blank cell.
pub const BLANK: u32 = 0;

/// Row/column offsets of the cells the blank can trade places with, in the
/// order neighbours are produced: up, left, down, right.
const SLIDES: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// One immutable configuration of the puzzle.
///
/// Tiles are stored row-major. Every transformation (`twin`, `neighbors`,
/// the generators) returns a new board that owns its own tiles.
///
/// Two boards are equal when they have the same dimension and the same label
/// in every cell.
///
/// # Examples
/// ```
/// use puzzle_solver::engine::Board;
///
/// let board = Board::new(&[vec![0, 1], vec![3, 2]]).unwrap();
/// assert_eq!(board.dimension(), 2);
/// assert_eq!(board.manhattan(), 2);
/// assert!(!board.is_goal());
/// assert_eq!(board.neighbors().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    tiles: Vec<u32>,
    // Row-major index of the blank, derived from `tiles`.
    blank: usize,
}

impl Board {
    /// Creates a board from a grid of rows.
    ///
    /// # Arguments
    /// * `grid`: rows of labels; `grid[r][c]` is the tile at row `r`, column `c`.
    ///
    /// # Returns
    /// * `Ok(Board)` if the grid is square, at least 2x2 and holds every label
    ///   of `0..n²` exactly once.
    /// * `Err(InvalidBoardError)` describing the first violation otherwise.
    pub fn new(grid: &[Vec<u32>]) -> Result<Self, InvalidBoardError> {
        let dimension = grid.len();
        if dimension < 2 {
            return Err(InvalidBoardError::DimensionTooSmall(dimension));
        }

        let mut tiles = Vec::with_capacity(dimension * dimension);
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != dimension {
                return Err(InvalidBoardError::RaggedRow {
                    row,
                    expected: dimension,
                    found: cells.len(),
                });
            }
            tiles.extend_from_slice(cells);
        }

        Self::from_tiles(dimension, tiles)
    }

    /// Creates a board from a dimension and its row-major labels.
    ///
    /// Validation is the same as for `Board::new`.
    pub fn from_tiles(dimension: usize, tiles: Vec<u32>) -> Result<Self, InvalidBoardError> {
        if dimension < 2 {
            return Err(InvalidBoardError::DimensionTooSmall(dimension));
        }

        let cell_count = dimension * dimension;
        if tiles.len() != cell_count {
            return Err(InvalidBoardError::WrongTileCount {
                expected: cell_count,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; cell_count];
        for (idx, &label) in tiles.iter().enumerate() {
            let (row, col) = (idx / dimension, idx % dimension);
            let slot = label as usize;
            if slot >= cell_count {
                return Err(InvalidBoardError::LabelOutOfRange {
                    label,
                    row,
                    col,
                    max: (cell_count - 1) as u32,
                });
            }
            if seen[slot] {
                return Err(InvalidBoardError::DuplicateLabel { label, row, col });
            }
            seen[slot] = true;
        }

        // n² distinct labels drawn from 0..n² means the blank is present exactly once.
        Ok(Self::from_parts(dimension, tiles))
    }

    /// Returns the solved board of the given dimension.
    ///
    /// # Examples
    /// ```
    /// use puzzle_solver::engine::Board;
    ///
    /// let goal = Board::goal(3).unwrap();
    /// assert!(goal.is_goal());
    /// assert_eq!(goal.tile(2, 2), 0);
    /// ```
    pub fn goal(dimension: usize) -> Result<Self, InvalidBoardError> {
        if dimension < 2 {
            return Err(InvalidBoardError::DimensionTooSmall(dimension));
        }
        let cell_count = dimension * dimension;
        let tiles = (1..cell_count as u32).chain(std::iter::once(BLANK)).collect();
        Ok(Self::from_parts(dimension, tiles))
    }

    /// Creates a board whose tiles are a uniformly shuffled permutation.
    ///
    /// The same `seed` always yields the same board. Roughly half of the
    /// boards produced this way are unsolvable.
    pub fn new_random_with_seed(dimension: usize, seed: u64) -> Result<Self, InvalidBoardError> {
        if dimension < 2 {
            return Err(InvalidBoardError::DimensionTooSmall(dimension));
        }
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut tiles: Vec<u32> = (0..(dimension * dimension) as u32).collect();
        tiles.shuffle(&mut rng);
        Ok(Self::from_parts(dimension, tiles))
    }

    /// Creates a solvable board by walking the blank `walk` random steps away
    /// from the goal.
    ///
    /// A step never undoes the step right before it, but longer detours can
    /// still bring the board closer to the goal, so the optimal solution is at
    /// most `walk` moves long.
    ///
    /// # Arguments
    /// * `dimension`: board size `n`.
    /// * `walk`: number of random slides applied to the goal board.
    /// * `seed`: seed for the random number generator.
    pub fn scrambled(dimension: usize, walk: usize, seed: u64) -> Result<Self, InvalidBoardError> {
        let mut board = Self::goal(dimension)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut previous: Option<Board> = None;

        for _ in 0..walk {
            let mut candidates = board.neighbors();
            if let Some(prev) = &previous {
                candidates.retain(|candidate| candidate != prev);
            }
            // Every board has at least two neighbours, so one always survives.
            let next = candidates.swap_remove(rng.gen_range(0..candidates.len()));
            previous = Some(std::mem::replace(&mut board, next));
        }

        Ok(board)
    }

    fn from_parts(dimension: usize, tiles: Vec<u32>) -> Self {
        let blank = tiles
            .iter()
            .position(|&label| label == BLANK)
            .unwrap_or_default();
        Board {
            dimension,
            tiles,
            blank,
        }
    }

    /// Returns the board dimension `n`.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the label at row `r`, column `c` (`0` for the blank).
    ///
    /// # Panics
    /// Panics if `r` or `c` is not below `dimension()`.
    pub fn tile(&self, r: usize, c: usize) -> u32 {
        assert!(c < self.dimension, "column {} out of bounds", c);
        self.tiles[r * self.dimension + c]
    }

    /// Returns all labels in row-major order.
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.tiles.chunks(self.dimension)
    }

    /// Returns the (row, column) of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.dimension, self.blank % self.dimension)
    }

    /// Number of non-blank tiles that are not in their goal cell.
    ///
    /// Every cell `i` (row-major) is compared against label `i + 1`. The last
    /// cell expects `n²`, a label that never exists, so it always counts as a
    /// mismatch; that single extra count is taken off at the end. The blank is
    /// therefore never counted and a solved board reports 0.
    pub fn hamming(&self) -> u32 {
        let mismatched = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(idx, &label)| label as usize != idx + 1)
            .count() as u32;
        mismatched - 1
    }

    /// Sum of the row and column distances of every non-blank tile from its
    /// goal cell.
    ///
    /// This never overestimates the number of moves left, which is what lets
    /// the solver return shortest solutions.
    pub fn manhattan(&self) -> u32 {
        let n = self.dimension;
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label != BLANK)
            .map(|(idx, &label)| {
                let goal = label as usize - 1;
                (idx / n).abs_diff(goal / n) + (idx % n).abs_diff(goal % n)
            })
            .sum::<usize>() as u32
    }

    /// Returns `true` if this is the goal board.
    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }

    /// Returns the board obtained by swapping one pair of adjacent non-blank
    /// tiles in the same row.
    ///
    /// The first two cells of row 0 are swapped unless one of them is the
    /// blank; in that case the first two cells of the last row are swapped.
    /// Exactly one of a board and its twin is solvable.
    pub fn twin(&self) -> Board {
        let mut tiles = self.tiles.clone();
        if tiles[0] != BLANK && tiles[1] != BLANK {
            tiles.swap(0, 1);
        } else {
            let last_row = (self.dimension - 1) * self.dimension;
            tiles.swap(last_row, last_row + 1);
        }
        Self::from_parts(self.dimension, tiles)
    }

    /// Returns every board reachable by sliding one tile into the blank.
    ///
    /// The blank moves up, left, down, then right, skipping directions that
    /// leave the grid: a corner blank yields 2 boards, an edge blank 3 and an
    /// interior blank 4.
    pub fn neighbors(&self) -> Vec<Board> {
        let n = self.dimension as isize;
        let (row, col) = self.blank_position();
        let mut result = Vec::with_capacity(4);

        for (dr, dc) in SLIDES {
            let nr = row as isize + dr;
            let nc = col as isize + dc;
            if nr >= 0 && nr < n && nc >= 0 && nc < n {
                result.push(self.slide_from(nr as usize * self.dimension + nc as usize));
            }
        }

        result
    }

    /// Moves the tile at `source` (row-major) into the blank.
    fn slide_from(&self, source: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, source);
        Board {
            dimension: self.dimension,
            tiles,
            blank: source,
        }
    }
}

impl TryFrom<Vec<Vec<u32>>> for Board {
    type Error = InvalidBoardError;

    fn try_from(grid: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Board::new(&grid)
    }
}

impl fmt::Display for Board {
    /// Writes the dimension on its own line, then one line per row with each
    /// label right-aligned in two columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dimension)?;
        for row in self.rows() {
            for label in row {
                write!(f, "{:2} ", label)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn board(rows: &[&[u32]]) -> Board {
        let grid: Vec<Vec<u32>> = rows.iter().map(|r| r.to_vec()).collect();
        Board::new(&grid).unwrap()
    }

    #[test]
    fn test_goal_board_has_zero_heuristics() {
        for n in 2..=5 {
            let goal = Board::goal(n).unwrap();
            assert_eq!(goal.hamming(), 0, "hamming of {}x{} goal", n, n);
            assert_eq!(goal.manhattan(), 0, "manhattan of {}x{} goal", n, n);
            assert!(goal.is_goal());
            assert_eq!(goal.blank_position(), (n - 1, n - 1));
        }
    }

    #[test]
    fn test_goal_matches_explicit_grid() {
        let explicit = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]);
        assert_eq!(Board::goal(3).unwrap(), explicit);
    }

    #[test]
    fn test_heuristics_on_known_board() {
        // 8 1 3
        // 4 0 2
        // 7 6 5
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        assert_eq!(b.hamming(), 5);
        assert_eq!(b.manhattan(), 10);
        assert!(!b.is_goal());
    }

    #[test]
    fn test_heuristics_ignore_blank() {
        // Only tile 8 is out of place; the blank being off its goal cell does not count.
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]);
        assert_eq!(b.hamming(), 1);
        assert_eq!(b.manhattan(), 1);

        let b = board(&[&[0, 1], &[3, 2]]);
        assert_eq!(b.hamming(), 2);
        assert_eq!(b.manhattan(), 2);
    }

    #[test]
    fn test_twin_swaps_first_row_when_possible() {
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[8, 7, 0]]);
        assert_eq!(b.twin(), board(&[&[2, 1, 3], &[4, 5, 6], &[8, 7, 0]]));
    }

    #[test]
    fn test_twin_swaps_last_row_when_blank_in_first_pair() {
        let b = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        assert_eq!(b.twin(), board(&[&[0, 1, 3], &[4, 2, 5], &[8, 7, 6]]));

        let b = board(&[&[1, 0], &[3, 2]]);
        assert_eq!(b.twin(), board(&[&[1, 0], &[2, 3]]));
    }

    #[test]
    fn test_twin_leaves_original_untouched() {
        let b = board(&[&[1, 2], &[3, 0]]);
        let twin = b.twin();
        assert_ne!(b, twin);
        assert_eq!(b, Board::goal(2).unwrap());
        assert_eq!(twin.twin(), b);
    }

    #[test]
    fn test_neighbor_counts_by_blank_position() {
        let corner = board(&[&[0, 1, 2], &[3, 4, 5], &[6, 7, 8]]);
        let edge = board(&[&[1, 0, 2], &[3, 4, 5], &[6, 7, 8]]);
        let interior = board(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]);
        assert_eq!(corner.neighbors().len(), 2);
        assert_eq!(edge.neighbors().len(), 3);
        assert_eq!(interior.neighbors().len(), 4);
        assert_eq!(Board::goal(2).unwrap().neighbors().len(), 2);
    }

    #[test]
    fn test_neighbor_order_is_up_left_down_right() {
        let interior = board(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]);
        let blanks: Vec<(usize, usize)> = interior
            .neighbors()
            .iter()
            .map(|n| n.blank_position())
            .collect();
        assert_eq!(blanks, vec![(0, 1), (1, 0), (2, 1), (1, 2)]);

        let up = &interior.neighbors()[0];
        assert_eq!(*up, board(&[&[1, 0, 3], &[4, 2, 5], &[6, 7, 8]]));
    }

    #[test]
    fn test_neighbors_differ_by_one_blank_swap() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        let (br, bc) = b.blank_position();
        for neighbor in b.neighbors() {
            let (nr, nc) = neighbor.blank_position();
            assert_eq!(br.abs_diff(nr) + bc.abs_diff(nc), 1);

            let differing: Vec<usize> = (0..9)
                .filter(|&i| b.tiles()[i] != neighbor.tiles()[i])
                .collect();
            assert_eq!(differing.len(), 2);
            // The tile that moved now sits where the blank was.
            assert_eq!(neighbor.tile(br, bc), b.tile(nr, nc));
        }
    }

    #[test]
    fn test_neighbor_round_trip_returns_original() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        for neighbor in b.neighbors() {
            assert!(neighbor.neighbors().contains(&b));
        }
    }

    #[test]
    fn test_equality_and_hash() {
        let a = board(&[&[1, 2], &[0, 3]]);
        let b = board(&[&[1, 2], &[0, 3]]);
        let c = board(&[&[1, 2], &[3, 0]]);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Board> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }

    #[test]
    fn test_invalid_boards_are_rejected() {
        assert_eq!(
            Board::new(&[vec![0]]),
            Err(InvalidBoardError::DimensionTooSmall(1))
        );
        assert_eq!(
            Board::new(&[]),
            Err(InvalidBoardError::DimensionTooSmall(0))
        );
        assert_eq!(
            Board::new(&[vec![1, 2], vec![3]]),
            Err(InvalidBoardError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Board::new(&[vec![1, 2], vec![3, 4]]),
            Err(InvalidBoardError::LabelOutOfRange {
                label: 4,
                row: 1,
                col: 1,
                max: 3
            })
        );
        assert_eq!(
            Board::new(&[vec![1, 2], vec![2, 0]]),
            Err(InvalidBoardError::DuplicateLabel {
                label: 2,
                row: 1,
                col: 0
            })
        );
        assert_eq!(
            Board::from_tiles(2, vec![1, 2, 0]),
            Err(InvalidBoardError::WrongTileCount {
                expected: 4,
                found: 3
            })
        );
        assert!(Board::goal(1).is_err());
    }

    #[test]
    fn test_try_from_grid() {
        let b = Board::try_from(vec![vec![1, 2], vec![3, 0]]).unwrap();
        assert!(b.is_goal());
        assert!(Board::try_from(vec![vec![1, 1], vec![3, 0]]).is_err());
    }

    #[test]
    fn test_accessors() {
        let b = board(&[&[5, 1, 3], &[4, 0, 2], &[7, 6, 8]]);
        assert_eq!(b.tile(0, 0), 5);
        assert_eq!(b.tile(2, 1), 6);
        assert_eq!(b.blank_position(), (1, 1));
        assert_eq!(b.tiles(), &[5, 1, 3, 4, 0, 2, 7, 6, 8]);
        let rows: Vec<&[u32]> = b.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[7, 6, 8]);
    }

    #[test]
    #[should_panic]
    fn test_tile_out_of_bounds_panics() {
        let b = Board::goal(2).unwrap();
        b.tile(0, 2);
    }

    #[test]
    fn test_display_board_formatting() {
        let b = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        assert_eq!(format!("{}", b), "3\n 0  1  3 \n 4  2  5 \n 7  8  6 \n");

        let big = Board::goal(4).unwrap();
        let text = big.to_string();
        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.lines().nth(4), Some("13 14 15  0 "));
    }

    #[test]
    fn test_new_random_with_seed_determinism() {
        let seed = 123;
        let board1 = Board::new_random_with_seed(3, seed).unwrap();
        let board2 = Board::new_random_with_seed(3, seed).unwrap();
        assert_eq!(board1, board2, "Boards with the same seed must be identical.");

        let mut labels = board1.tiles().to_vec();
        labels.sort_unstable();
        assert_eq!(labels, (0..9).collect::<Vec<u32>>());

        let distinct: HashSet<Board> = (0..20)
            .map(|s| Board::new_random_with_seed(3, s).unwrap())
            .collect();
        assert!(distinct.len() > 1, "Different seeds should give different boards.");
    }

    #[test]
    fn test_scrambled_walks_away_from_goal() {
        assert!(Board::scrambled(3, 0, 7).unwrap().is_goal());

        let b = Board::scrambled(3, 1, 7).unwrap();
        assert!(Board::goal(3).unwrap().neighbors().contains(&b));

        let again = Board::scrambled(4, 30, 99).unwrap();
        assert_eq!(again, Board::scrambled(4, 30, 99).unwrap());
        assert!(crate::parity::is_solvable(&again));
    }
}
