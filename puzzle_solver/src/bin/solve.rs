use anyhow::Context;
use clap::Parser;
use puzzle_solver::logging::init_tracing;
use puzzle_solver::solver::Solver;
use puzzle_solver::utils::read_board_file;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds a shortest solution for a sliding puzzle board", long_about = None)]
struct Args {
    /// Path to the board file (dimension, then the tiles row by row, 0 for the blank)
    board_file: PathBuf,

    /// Give up after expanding this many search nodes
    #[clap(short, long)]
    max_expansions: Option<usize>,

    /// Print only the move count, not the boards along the way
    #[clap(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let initial = read_board_file(&args.board_file).with_context(|| {
        format!("Failed to read board from file: {}", args.board_file.display())
    })?;
    info!(
        dimension = initial.dimension(),
        hamming = initial.hamming(),
        manhattan = initial.manhattan(),
        "loaded {}",
        args.board_file.display()
    );

    let solver = match args.max_expansions {
        Some(max_expansions) => Solver::with_budget(initial, max_expansions)?,
        None => Solver::new(initial),
    };

    let stats = solver.stats();
    info!(
        expanded = stats.expanded,
        generated = stats.generated,
        "search finished"
    );

    match solver.solution() {
        None => println!("No solution possible"),
        Some(path) => {
            println!("Minimum number of moves = {}", solver.moves());
            if !args.quiet {
                for board in path {
                    println!("{}", board);
                }
            }
        }
    }

    Ok(())
}
