//! Step-by-step A* search over a random obstacle grid.
//!
//! Run: cargo run --bin stepstar -- --seed 42

use std::time::Duration;

use clap::Parser;
use env_logger::Env;
use stepstar_demos::{Args, Frame, LogObserver, TerminalObserver};
use stepstar_search::{Outcome, SearchEngine, drive};

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let grid = args.load_grid()?;
    let (start, goal) = (grid.top_left(), grid.bottom_right());
    let mut engine = SearchEngine::with_config(grid, start, goal, args.search_config())?;

    let outcome = if args.no_render {
        drive(&mut engine, &mut LogObserver::default())?
    } else {
        let mut term =
            TerminalObserver::new(Duration::from_millis(args.delay_ms), !args.no_wait)?;
        let outcome = drive(&mut engine, &mut term)?;
        // Leave the alternate screen before printing.
        drop(term);
        outcome
    };

    if args.no_render {
        println!("{}", Frame::capture(&engine, outcome.path()));
    }
    match &outcome {
        Outcome::Found { path, cost, steps } => {
            println!("path found: {} cells, cost {cost}, {steps} steps", path.len());
        }
        Outcome::NoPath { steps } => println!("no path exists ({steps} steps)"),
        Outcome::Interrupted { steps } => println!("stopped after {steps} steps"),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let default_filter = if args.no_render { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
