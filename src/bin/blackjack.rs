//! Console blackjack.
//!
//! ```text
//! cargo run --features cli --bin blackjack -- --bankroll 100 --seed 42
//! ```

use blackjack_engine::games::blackjack::render::{render_outcome, render_round};
use blackjack_engine::{Bankroll, Blackjack, PlayerAction, TableConfig};
use clap::Parser;
use dialoguer::{Confirm, Input};

#[derive(Parser)]
#[command(name = "blackjack", about = "Play blackjack against an automated dealer")]
struct Args {
    /// Seed the shoe for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Opening balance; omit to play without wagers
    #[arg(long)]
    bankroll: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = TableConfig::new();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(balance) = args.bankroll {
        config = config.with_bankroll(balance);
    }
    let mut table = Blackjack::new(config)?;

    loop {
        if let Some(bankroll) = table.bankroll().copied() {
            if bankroll.is_broke() {
                println!("You're out of money.");
                break;
            }
            let wager = prompt_wager(bankroll)?;
            table.place_wager(wager)?;
        }

        table.deal()?;
        while table.phase().is_live() {
            println!("{}", render_round(table.round()));
            let action = prompt_action()?;
            println!();
            table.act(action)?;
        }
        println!("{}", render_round(table.round()));

        let settlement = table.settle()?;
        println!("\n{}\n", render_outcome(&settlement));

        let again = Confirm::new()
            .with_prompt("New game?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
        println!();
    }

    if let Some(bankroll) = table.bankroll() {
        println!(
            "Finished with {} after {} rounds (net {:+}).",
            bankroll.balance(),
            bankroll.rounds_settled(),
            bankroll.net()
        );
    }
    println!("Good Game!");
    Ok(())
}

fn prompt_wager(bankroll: Bankroll) -> anyhow::Result<u64> {
    let wager = Input::<u64>::new()
        .with_prompt(format!("Place your bet (balance {})", bankroll.balance()))
        .validate_with(move |wager: &u64| -> Result<(), String> {
            bankroll.validate(*wager).map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(wager)
}

fn prompt_action() -> anyhow::Result<PlayerAction> {
    let answer = Input::<String>::new()
        .with_prompt("Hit or stay?")
        .validate_with(|input: &String| -> Result<(), String> {
            input
                .parse::<PlayerAction>()
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(answer.parse::<PlayerAction>()?)
}

/// Initialise the `tracing` subscriber. Logs go to stderr so they never
/// interleave with the table display.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("blackjack=warn,blackjack_engine=warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
