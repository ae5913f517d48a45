//! # Sliding Puzzle Solver Library
//!
//! This library solves the n-puzzle: an n×n board of numbered tiles with one
//! blank, where a move slides a tile into the blank. It finds a shortest
//! sequence of moves to the sorted goal board, or proves that none exists.
//!
//! It is used by three binaries:
//! - `solve`: reads a board file and prints the shortest solution.
//! - `scramble`: prints a random board in the input file format.
//! - `bench`: solves a batch of seeded boards and reports averages.
//!
//! ## Modules
//! - `engine`: the immutable `Board` with its heuristics (`hamming`,
//!   `manhattan`), `twin` and `neighbors`, plus seeded board generators.
//! - `solver`: `Solver`, an A* search run in lockstep on a board and its twin
//!   to detect unsolvable inputs.
//! - `parity`: an inversion-count solvability test used to cross-check verdicts.
//! - `utils`: parsing boards from text and files.
//! - `error`: error types for board construction, parsing and bounded searches.
//! - `logging`: `tracing` subscriber setup for the binaries.

pub mod engine;
pub mod error;
pub mod logging;
pub mod parity;
pub mod solver;
pub mod utils;

pub use engine::Board;
pub use error::{InvalidBoardError, ParseError, SolverError};
pub use solver::{SearchStats, Solver};
