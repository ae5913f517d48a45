use clap::Parser;
use puzzle_solver::engine::Board;
use puzzle_solver::logging::init_tracing;
use puzzle_solver::parity::is_solvable;
use tracing::debug;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Prints a random board in the solver's input format", long_about = None)]
struct Args {
    /// Board dimension n (the board has n*n cells)
    #[clap(short, long, default_value_t = 3)]
    dimension: usize,

    /// Seed for the random number generator
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Walk this many random moves away from the goal (always solvable).
    /// Without it the tiles are shuffled uniformly and may be unsolvable.
    #[clap(short, long)]
    walk: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let board = match args.walk {
        Some(walk) => Board::scrambled(args.dimension, walk, args.seed)?,
        None => Board::new_random_with_seed(args.dimension, args.seed)?,
    };
    debug!(
        seed = args.seed,
        manhattan = board.manhattan(),
        solvable = is_solvable(&board),
        "generated board"
    );

    print!("{}", board);
    Ok(())
}
