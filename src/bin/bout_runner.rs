//! Headless Bout Runner
//!
//! Loads a bout card from TOML, simulates it and prints the outcome as JSON
//! or text. With `--sweep N` it runs N seeds and prints a matchup report.

use bout_engine::analysis::{run_matchup_parallel, MatchupReport};
use bout_engine::bout::{Bout, FightOutcome};
use bout_engine::core::config::{RoundCount, TraceMode};
use bout_engine::core::error::Result;
use bout_engine::core::types::{Corner, FighterId};
use bout_engine::fighter::load_bout_card;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Headless Bout Runner - simulate a bout card
#[derive(Parser, Debug)]
#[command(name = "bout_runner")]
#[command(about = "Simulate an MMA bout card and print the outcome")]
struct Args {
    /// Bout card (TOML)
    #[arg(long, default_value = "data/bouts/sample.toml")]
    card: String,

    /// Random seed; overrides the card's seed
    #[arg(long)]
    seed: Option<u64>,

    /// Scheduled rounds (3 or 5); overrides the card's config
    #[arg(long)]
    rounds: Option<u32>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Record a per-tick state trace in the outcome
    #[arg(long)]
    trace: bool,

    /// Run this many consecutive seeds and print a matchup report instead
    #[arg(long)]
    sweep: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bout_engine=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let card = load_bout_card(&args.card)?;
    let mut config = card.config.clone();
    if let Some(rounds) = args.rounds {
        config.rounds = RoundCount::try_from(rounds)?;
    }
    if args.trace {
        config.trace = TraceMode::Ticks;
    }

    let (red, blue) = card.snapshots()?;
    let bout = Bout::new(red, blue, config)?;

    let seed = args
        .seed
        .or(card.seed)
        .unwrap_or_else(rand::random);
    tracing::info!(seed, card = %args.card, "running bout card");

    if let Some(iterations) = args.sweep {
        let report = run_matchup_parallel(&bout, seed, iterations);
        match args.format.as_str() {
            "text" => print_report(&bout, &report),
            _ => println!("{}", serde_json::to_string_pretty(&report)?),
        }
        return Ok(());
    }

    let outcome = bout.run(seed);
    match args.format.as_str() {
        "text" => print_outcome(&bout, &outcome, seed),
        _ => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(())
}

fn name_of<'a>(bout: &'a Bout, id: FighterId) -> &'a str {
    if bout.fighter(Corner::Red).id == id {
        &bout.fighter(Corner::Red).name
    } else {
        &bout.fighter(Corner::Blue).name
    }
}

fn print_outcome(bout: &Bout, outcome: &FightOutcome, seed: u64) {
    println!(
        "{} vs {} (seed {})",
        bout.fighter(Corner::Red).name,
        bout.fighter(Corner::Blue).name,
        seed
    );

    for round in &outcome.rounds {
        println!("--- Round {} ---", round.round);
        for event in &round.events {
            println!("  [{:>2}] {}", event.tick, event.description);
        }
    }

    println!();
    println!(
        "{} def. {} by {} (R{}, {})",
        name_of(bout, outcome.winner),
        name_of(bout, outcome.loser),
        outcome.method,
        outcome.round_ended,
        outcome.time_ended
    );
    if let Some(card) = &outcome.scorecard {
        println!("Scorecard: {:.1} - {:.1}", card.red, card.blue);
    }
    println!("{}", outcome.narrative);
}

fn print_report(bout: &Bout, report: &MatchupReport) {
    let red = &bout.fighter(Corner::Red).name;
    let blue = &bout.fighter(Corner::Blue).name;

    println!("{} vs {} over {} bouts", red, blue, report.bouts);
    println!(
        "  {:<20} {:>5} wins ({:.1}%)",
        red,
        report.red_wins,
        report.win_rate(Corner::Red) * 100.0
    );
    println!(
        "  {:<20} {:>5} wins ({:.1}%)",
        blue,
        report.blue_wins,
        report.win_rate(Corner::Blue) * 100.0
    );
    println!(
        "  KO/TKO {}  Sub {}  UD {}  SD {}  MD {}",
        report.methods.strike_stoppage,
        report.methods.submission,
        report.methods.unanimous,
        report.methods.split,
        report.methods.majority
    );
    println!(
        "  Finish rate {:.1}%, average round ended {:.2}",
        report.finish_rate() * 100.0,
        report.avg_round_ended
    );
}
