use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use minefield_core::{CellCount, Coord, GridEngine};

mod command;
mod session;
mod view;

#[derive(Parser, Debug)]
#[command(version, about = "Clear a minefield from the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of columns
    #[arg(short = 'W', long, default_value_t = 10)]
    width: Coord,

    /// Number of rows
    #[arg(short = 'H', long, default_value_t = 10)]
    height: Coord,

    /// Number of mines, must leave at least one safe cell
    #[arg(short, long, default_value_t = 10)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every outcome as a JSON line instead of drawing the board
    #[arg(long)]
    json: bool,
}

/// Seed from the wall clock, good enough to vary games between runs.
fn clock_seed() -> u64 {
    use web_time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("seed: {}", seed);

    let engine = GridEngine::with_seed(args.width, args.height, args.mines, seed)
        .context("Could not start game")?;

    let mut session = session::Session::new(engine, args.json);
    let mut out = io::stdout().lock();
    session.start(&mut out)?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read input")?;
        let flow = session.handle(&line, &mut out)?;
        out.flush()?;
        if flow == session::Flow::Stop {
            break;
        }
    }

    log::debug!("Bye");
    Ok(())
}
