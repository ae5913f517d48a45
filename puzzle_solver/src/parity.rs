//! Inversion-parity solvability test.
//!
//! The solver never consults this module: it proves (un)solvability by
//! searching the twin board. The parity test is a closed-form cross-check
//! used by tests and by the `bench` binary.
use crate::engine::{Board, BLANK};

/// Counts pairs of non-blank tiles that appear in the wrong order when the
/// board is read row by row.
pub fn count_inversions(board: &Board) -> usize {
    let labels: Vec<u32> = board
        .tiles()
        .iter()
        .copied()
        .filter(|&label| label != BLANK)
        .collect();

    labels
        .iter()
        .enumerate()
        .map(|(i, &val)| labels[i + 1..].iter().filter(|&&next| next < val).count())
        .sum()
}

/// Returns `true` if the board can reach the goal.
///
/// For odd dimensions the inversion count must be even. For even dimensions
/// the inversion count plus the blank's row (counted from the top) must be
/// odd.
pub fn is_solvable(board: &Board) -> bool {
    let inversions = count_inversions(board);
    if board.dimension() % 2 == 1 {
        inversions % 2 == 0
    } else {
        let (blank_row, _) = board.blank_position();
        (inversions + blank_row) % 2 == 1
    }
}
