use anyhow::bail;
use clap::Parser;
use puzzle_solver::engine::Board;
use puzzle_solver::logging::init_tracing;
use puzzle_solver::parity::is_solvable;
use puzzle_solver::solver::Solver;
use puzzle_solver::SolverError;
use tracing::{error, warn};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solves a batch of seeded boards and reports averages", long_about = None)]
struct Args {
    /// Board dimension n
    #[clap(short, long, default_value_t = 3)]
    dimension: usize,

    /// Number of boards to solve
    #[clap(short, long, default_value_t = 20)]
    count: usize,

    /// Build boards by walking this many random moves from the goal.
    /// Without it the tiles are shuffled uniformly (about half unsolvable).
    #[clap(short, long)]
    walk: Option<usize>,

    /// Seed of the first board; board i uses start_seed + i
    #[clap(short, long, default_value_t = 0)]
    start_seed: u64,

    /// Skip a board once its search expands this many nodes
    #[clap(short, long)]
    max_expansions: Option<usize>,
}

#[derive(Default)]
struct Totals {
    solved: usize,
    unsolvable: usize,
    skipped: usize,
    mismatches: usize,
    moves: u64,
    expanded: u64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    println!(
        "Starting benchmark for {} boards of dimension {}...",
        args.count, args.dimension
    );

    let mut totals = Totals::default();

    for board_idx in 0..args.count {
        let seed = args.start_seed + board_idx as u64;
        let initial = match args.walk {
            Some(walk) => Board::scrambled(args.dimension, walk, seed)?,
            None => Board::new_random_with_seed(args.dimension, seed)?,
        };
        let expected_solvable = is_solvable(&initial);

        let solver = match args.max_expansions {
            Some(max) => match Solver::with_budget(initial, max) {
                Ok(solver) => solver,
                Err(SolverError::BudgetExhausted { expanded }) => {
                    warn!(board_idx, seed, expanded, "skipping board, budget exhausted");
                    totals.skipped += 1;
                    continue;
                }
            },
            None => Solver::new(initial),
        };

        if solver.is_solvable() != expected_solvable {
            error!(
                board_idx,
                seed,
                expected_solvable,
                "solver verdict disagrees with the parity test"
            );
            totals.mismatches += 1;
        }

        let stats = solver.stats();
        totals.expanded += stats.expanded as u64;
        if solver.is_solvable() {
            totals.solved += 1;
            totals.moves += solver.moves() as u64;
        } else {
            totals.unsolvable += 1;
        }

        println!(
            "  Board {:<4} (Seed: {:<6}) Moves: {:<4} Expanded: {}",
            board_idx,
            seed,
            solver.moves(),
            stats.expanded
        );
    }

    println!("\n--- Benchmark Complete ---");
    println!(
        "Solvable: {}, Unsolvable: {}, Skipped: {}",
        totals.solved, totals.unsolvable, totals.skipped
    );

    let finished = totals.solved + totals.unsolvable;
    if totals.solved > 0 {
        println!(
            "Average moves (solvable boards): {:.2}",
            totals.moves as f64 / totals.solved as f64
        );
    }
    if finished > 0 {
        println!(
            "Average nodes expanded: {:.2}",
            totals.expanded as f64 / finished as f64
        );
    }

    if totals.mismatches > 0 {
        bail!(
            "{} board(s) got a verdict that contradicts the parity test",
            totals.mismatches
        );
    }
    Ok(())
}
