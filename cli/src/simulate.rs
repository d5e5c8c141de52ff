use std::collections::BTreeMap;

use anyhow::{Result, bail};
use rand::prelude::*;
use serde::Serialize;

use bandito_core::{
    BoardGenerator, Dimension, GameConfig, SymbolCatalog, WeightedBoardGenerator, WinRule,
};

use crate::{Cli, rule_name, session_seed};

#[derive(Debug, Serialize)]
struct SimulationReport {
    rounds: u32,
    board: String,
    rule: String,
    bet: u64,
    wins: u32,
    losses: u32,
    win_rate: f64,
    coins_won: u64,
    coins_lost: u64,
    net_coins: i128,
    hits: BTreeMap<String, u32>,
}

pub(crate) fn run(cli: &Cli, rounds: u32, json: bool) -> Result<()> {
    let Some(rule) = cli.rule else {
        bail!("simulate needs a win condition, pass --rule");
    };

    let dimension = cli.board.unwrap_or(Dimension::new_unchecked(3, 3));
    let config = GameConfig::new(dimension, SymbolCatalog::classic());
    let report = simulate(&config, rule, cli.bet, rounds, session_seed(cli.seed))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn simulate(
    config: &GameConfig,
    rule: WinRule,
    bet: u64,
    rounds: u32,
    seed: u64,
) -> Result<SimulationReport> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut wins = 0u32;
    let mut coins_won = 0u64;
    let mut coins_lost = 0u64;
    let mut hits: BTreeMap<String, u32> = BTreeMap::new();

    for _ in 0..rounds {
        let board = WeightedBoardGenerator::new(rng.random()).generate(config)?;
        match board.evaluate(rule).symbol() {
            Some(symbol) => {
                wins += 1;
                coins_won = coins_won.saturating_add(bet.saturating_mul(u64::from(symbol.value)));
                *hits.entry(symbol.name.clone()).or_default() += 1;
            }
            None => coins_lost = coins_lost.saturating_add(bet),
        }
    }

    let win_rate = if rounds == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(rounds)
    };

    Ok(SimulationReport {
        rounds,
        board: config.dimension.to_string(),
        rule: String::from(rule_name(rule)),
        bet,
        wins,
        losses: rounds - wins,
        win_rate,
        coins_won,
        coins_lost,
        net_coins: i128::from(coins_won) - i128::from(coins_lost),
        hits,
    })
}

fn print_report(report: &SimulationReport) {
    println!(
        "Simulated {} rounds of {} on a {} board",
        report.rounds, report.rule, report.board
    );
    println!(
        "  wins:   {} ({:.2}% win rate)",
        report.wins,
        report.win_rate * 100.0
    );
    println!("  losses: {}", report.losses);
    println!(
        "  coins:  won {}, lost {}, net {} (bet {})",
        report.coins_won, report.coins_lost, report.net_coins, report.bet
    );
    if !report.hits.is_empty() {
        println!("  winning symbols:");
        for (name, count) in &report.hits {
            println!("    {name:?}: {count}");
        }
    }
}
