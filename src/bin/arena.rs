//! Let the computer players play each other and count who wins.
//! Every pairing is played both ways round, A always moving first.
//! Nothing is written to disk; the tally goes to stdout.

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use enum_iterator::all;
use itertools::iproduct;
use log::{debug, info};
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};
use serde::Serialize;

use noughts::game::run_game;
use noughts::{logging, Outcome, PlayerMark, StrategyKind};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Games to play per pairing
    #[arg(short, long, default_value = "100")]
    games: usize,

    /// The seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Prune the optimal player's search
    #[arg(long)]
    prune: bool,

    #[arg(short, long, default_value = "table")]
    format: Format,

    /// More log output on stderr. Repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct PairingRecord {
    player_a: StrategyKind,
    player_b: StrategyKind,
    a_wins: usize,
    b_wins: usize,
    draws: usize,
}

fn play_pairing(
    player_a: StrategyKind,
    player_b: StrategyKind,
    games: usize,
    prune: bool,
    rng: &mut StdRng,
) -> anyhow::Result<PairingRecord> {
    let mut record = PairingRecord {
        player_a,
        player_b,
        a_wins: 0,
        b_wins: 0,
        draws: 0,
    };
    let build = |kind: StrategyKind, seed: u64| {
        if prune {
            kind.build_pruned(seed)
        } else {
            kind.build(seed)
        }
    };
    for game in 0..games {
        let mut p1 = build(player_a, rng.gen());
        let mut p2 = build(player_b, rng.gen());
        let outcome = run_game(p1.as_mut(), p2.as_mut())
            .with_context(|| format!("{player_a} vs {player_b}, game {game}"))?;
        debug!("{} vs {}: {}", player_a, player_b, outcome);
        match outcome {
            Outcome::Win(PlayerMark::A) => record.a_wins += 1,
            Outcome::Win(PlayerMark::B) => record.b_wins += 1,
            Outcome::Draw => record.draws += 1,
            Outcome::Ongoing => unreachable!("run_game only returns finished games"),
        }
    }
    Ok(record)
}

fn print_table(records: &[PairingRecord]) {
    println!(
        "{:<10} {:<10} {:>7} {:>7} {:>7}",
        "A", "B", "A wins", "B wins", "draws"
    );
    for r in records {
        println!(
            "{:<10} {:<10} {:>7} {:>7} {:>7}",
            r.player_a.to_string(),
            r.player_b.to_string(),
            r.a_wins,
            r.b_wins,
            r.draws
        );
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose).context("could not set up logging")?;
    let seed = args.seed.unwrap_or(StdRng::from_entropy().gen());
    info!("Arena seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let kinds: Vec<StrategyKind> = all::<StrategyKind>().collect();
    let records = iproduct!(kinds.iter().copied(), kinds.iter().copied())
        .map(|(a, b)| play_pairing(a, b, args.games, args.prune, &mut rng))
        .collect::<anyhow::Result<Vec<_>>>()?;

    match args.format {
        Format::Table => print_table(&records),
        Format::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }
    Ok(())
}
