//! Ask one of the computer players where it would move.
//!
//! The board is given as nine cells, row-major, each `_`, `A` or `B`:
//!
//! ```text
//! noughts --mark B --strategy heuristic A,_,_ _,A,_ _,_,_
//! ```
//!
//! prints the chosen square as `row col`.

use anyhow::Context as _;
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};
use noughts::{evaluate, logging, Board, Error, PlayerMark, Strategy as _, StrategyKind};

/// Pick a move for the computer player on a noughts and crosses board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The marker the computer plays, A or B
    #[arg(short, long)]
    mark: PlayerMark,

    /// random (goldfish), heuristic (medium) or optimal (impossible)
    #[arg(short, long, default_value = "optimal")]
    strategy: StrategyKind,

    /// The seed for the random number generator (when used)
    #[arg(long)]
    seed: Option<u64>,

    /// Search the optimal strategy with alpha-beta pruning. Picks the same move, faster.
    #[arg(long)]
    prune: bool,

    /// More log output on stderr. Repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The nine cells in row-major order, separated by spaces and/or commas
    #[arg(required = true, num_args = 1..)]
    cells: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose).context("could not set up logging")?;
    let seed = args.seed.unwrap_or(StdRng::from_entropy().gen());
    info!("AI seed: {}", seed);

    let mut board: Board = args.cells.join(" ").parse()?;
    let outcome = evaluate(&board);
    if outcome.is_terminal() {
        return Err(Error::GameOver(outcome).into());
    }
    let mut ai = if args.prune {
        args.strategy.build_pruned(seed)
    } else {
        args.strategy.build(seed)
    };
    let at = ai.choose_move(&mut board, args.mark)?;
    info!("{} as {} plays {}", args.strategy, args.mark, at);
    println!("{} {}", at.row(), at.col());
    Ok(())
}
