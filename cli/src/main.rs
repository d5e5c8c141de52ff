use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;

use bandito_core::{Dimension, WinRule};

mod session;
mod simulate;

#[derive(Parser)]
#[command(
    name = "bandito",
    version,
    about = "Weighted-reel slot machine for the terminal"
)]
struct Cli {
    /// Starting coin balance (prompted for when omitted)
    #[arg(long)]
    coins: Option<u64>,

    /// Board size as ROWSxCOLS, e.g. 3x3 (prompted for when omitted)
    #[arg(long)]
    board: Option<Dimension>,

    /// Preselected win condition
    #[arg(long, value_parser = parse_rule_arg)]
    rule: Option<WinRule>,

    /// Coins staked on every round
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    bet: u64,

    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Spin rounds without prompts and print a summary
    Simulate {
        /// Rounds to spin
        #[arg(long, default_value_t = 1000)]
        rounds: u32,

        /// Print the summary as a JSON object
        #[arg(long)]
        json: bool,
    },
}

/// Maps the player-facing rule names onto engine rules.
fn parse_rule(text: &str) -> Option<WinRule> {
    match text.trim().to_lowercase().as_str() {
        "rowcolumn" => Some(WinRule::RowOrColumn),
        "diagonals" => Some(WinRule::Diagonals),
        "anyrow" => Some(WinRule::AnyUniformRow),
        _ => None,
    }
}

fn parse_rule_arg(text: &str) -> Result<WinRule, String> {
    parse_rule(text).ok_or_else(|| String::from("expected rowcolumn, diagonals or anyrow"))
}

/// Player-facing name of a rule, the inverse of [`parse_rule`].
fn rule_name(rule: WinRule) -> &'static str {
    match rule {
        WinRule::RowOrColumn => "rowcolumn",
        WinRule::Diagonals => "diagonals",
        WinRule::AnyUniformRow => "anyrow",
    }
}

/// Explicit seed when given, wall-clock nanoseconds otherwise.
fn session_seed(seed: Option<u64>) -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    match seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    match cli.command {
        Some(Command::Simulate { rounds, json }) => simulate::run(&cli, rounds, json),
        None => session::run(&cli),
    }
}
