//! Example demonstrating Sudoku puzzle generation.
//!
//! Generates one puzzle and prints its seed, the problem grid in the save
//! format, and the solution.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p gridlock-generator --example generate_puzzle
//! ```
//!
//! Reproduce a specific puzzle from its seed:
//!
//! ```sh
//! cargo run -p gridlock-generator --example generate_puzzle -- \
//!     --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Control how many digits are removed (default: 50):
//!
//! ```sh
//! cargo run -p gridlock-generator --example generate_puzzle -- --removed-cells 30
//! ```

use clap::Parser;
use gridlock_core::ClueMask;
use gridlock_generator::{PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to reproduce a specific puzzle (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Number of digits to remove from the solved grid.
    #[arg(long, value_name = "COUNT", default_value_t = PuzzleGenerator::DEFAULT_REMOVED_CELLS)]
    removed_cells: u8,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::with_removed_cells(args.removed_cells);
    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    let clues = ClueMask::from_grid(&puzzle.problem);
    println!("Problem ({} clues):", clues.clue_count());
    println!("{}", gridlock_save::encode(&puzzle.problem, &clues));
    println!();

    println!("Solution:");
    let solved_clues = ClueMask::from_grid(&puzzle.solution);
    println!("{}", gridlock_save::encode(&puzzle.solution, &solved_clues));
}
