//! Shared helpers for the integration tests.
#![allow(dead_code)]

use puzzle_solver::engine::Board;
use std::collections::{HashSet, VecDeque};

/// Exact distance to the goal by breadth-first search, or `None` if the goal
/// is not reachable within `max_depth` moves.
pub fn bfs_distance(start: &Board, max_depth: usize) -> Option<usize> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start.clone());
    queue.push_back((start.clone(), 0));

    while let Some((board, depth)) = queue.pop_front() {
        if board.is_goal() {
            return Some(depth);
        }
        if depth == max_depth {
            continue;
        }
        for neighbor in board.neighbors() {
            if visited.insert(neighbor.clone()) {
                queue.push_back((neighbor, depth + 1));
            }
        }
    }
    None
}

/// Every ordering of `0..count`.
pub fn all_permutations(count: u32) -> Vec<Vec<u32>> {
    fn extend(prefix: &mut Vec<u32>, remaining: &mut Vec<u32>, out: &mut Vec<Vec<u32>>) {
        if remaining.is_empty() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..remaining.len() {
            let label = remaining.remove(i);
            prefix.push(label);
            extend(prefix, remaining, out);
            prefix.pop();
            remaining.insert(i, label);
        }
    }

    let mut out = Vec::new();
    extend(&mut Vec::new(), &mut (0..count).collect(), &mut out);
    out
}
