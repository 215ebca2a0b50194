use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use npuzzle::error::Result;
use npuzzle::input;
use npuzzle::Solver;

#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(about = "Solve an N-by-N sliding tile puzzle with A* search")]
struct Args {
    /// Puzzle file: the dimension N followed by N*N cell values, 0 for the blank
    input: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let initial = input::read_board(&args.input)?;
    let solver = Solver::new(initial);

    if !solver.is_solvable() {
        println!("No solution possible");
        return Ok(());
    }

    println!("Minimum number of moves = {}", solver.moves());
    if let Some(boards) = solver.solution() {
        for board in boards {
            println!("{}", board);
        }
    }

    Ok(())
}
