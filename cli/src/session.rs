use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use colored::*;
use rand::prelude::*;

use bandito_core::{
    Board, BoardGenerator, Dimension, GameConfig, SymbolCatalog, WeightedBoardGenerator,
    WinOutcome, WinRule,
};

use crate::{Cli, parse_rule, session_seed};

/// Interactive command loop. Flags fill in what would otherwise be prompted
/// for; everything after that is the classic five-command dialogue.
pub(crate) fn run(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let coins = match cli.coins {
        Some(coins) => coins,
        None => prompt(
            &mut input,
            "Enter the amount of coins you'd like to start with: ",
        )?
        .parse()
        .unwrap_or(0),
    };
    if coins == 0 {
        bail!("Input a valid amount.");
    }

    let dimension = match cli.board {
        Some(dimension) => dimension,
        None => {
            let text = prompt(&mut input, "Enter the size of the board you'd like (ex. 3x3): ")?;
            match text.parse() {
                Ok(dimension) => dimension,
                Err(_) => {
                    bail!("Invalid input format. Please enter dimensions in the format 'NxM'.")
                }
            }
        }
    };

    let seed = session_seed(cli.seed);
    log::debug!("session seed {seed}");

    let mut session = Session::new(coins, cli.bet, dimension, cli.rule, seed);

    loop {
        let command = prompt(
            &mut input,
            "Please input your desired action [Playgame, Bet, Board, Selectwin, Exit]: ",
        )?;

        match command.to_lowercase().as_str() {
            "playgame" => session.play_streak(&mut input)?,
            "bet" => session.prompt_bet(&mut input)?,
            "board" => session.prompt_board(&mut input)?,
            "selectwin" => session.prompt_rule(&mut input)?,
            "exit" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid input. Please try again."),
        }
    }
}

struct Session {
    coins: u64,
    bet: u64,
    dimension: Dimension,
    rule: Option<WinRule>,
    catalog: SymbolCatalog,
    rng: SmallRng,
}

impl Session {
    fn new(coins: u64, bet: u64, dimension: Dimension, rule: Option<WinRule>, seed: u64) -> Self {
        Self {
            coins,
            bet,
            dimension,
            rule,
            catalog: SymbolCatalog::classic(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// One `playgame` streak. Losses hit the balance round by round; wins
    /// are banked and credited in one lump when the streak ends, so the
    /// printed balance trails behind during a winning run.
    fn play_streak(&mut self, input: &mut impl BufRead) -> Result<()> {
        let Some(rule) = self.rule else {
            println!("Please select a win condition before playing the game.");
            return Ok(());
        };

        let mut banked: u64 = 0;
        loop {
            if self.coins < self.bet {
                println!("Not enough coins left to cover the bet.");
                break;
            }

            let board = self.spin()?;
            render(&board);

            let outcome = board.evaluate(rule);
            let won = self.apply_outcome(&outcome);
            if outcome.is_win() {
                println!("{}", "Congratulations! You win!".green());
                println!("You won {won} coins!");
            } else {
                println!("{}", "Sorry, you lose!".red());
            }
            banked = banked.saturating_add(won);
            println!("Coins Left: {}", self.coins);
            println!();

            let again = prompt(input, "Do you want to play again? (Y/N): ")?;
            if !again.eq_ignore_ascii_case("y") {
                break;
            }
        }

        self.credit(banked);
        Ok(())
    }

    fn spin(&mut self) -> bandito_core::Result<Board> {
        let seed = self.rng.random();
        log::debug!("round seed {seed}");

        let config = GameConfig::new(self.dimension, self.catalog.clone());
        WeightedBoardGenerator::new(seed).generate(&config)
    }

    /// Applies one round's outcome: a loss deducts the bet immediately, a
    /// win returns the payout to be banked until the streak settles.
    fn apply_outcome(&mut self, outcome: &WinOutcome) -> u64 {
        match outcome.symbol() {
            Some(symbol) => self.bet.saturating_mul(u64::from(symbol.value)),
            None => {
                self.coins = self.coins.saturating_sub(self.bet);
                0
            }
        }
    }

    fn credit(&mut self, banked: u64) {
        self.coins = self.coins.saturating_add(banked);
    }

    fn prompt_bet(&mut self, input: &mut impl BufRead) -> Result<()> {
        loop {
            let text = prompt(input, "Please select your bet amount: ")?;
            match text.parse::<u64>() {
                Ok(bet) if bet > 0 => {
                    self.bet = bet;
                    return Ok(());
                }
                _ => println!("Input a valid amount."),
            }
        }
    }

    fn prompt_board(&mut self, input: &mut impl BufRead) -> Result<()> {
        let text = prompt(input, "Enter the new size of the board (ex. 3x3): ")?;
        match text.parse() {
            Ok(dimension) => self.dimension = dimension,
            Err(_) => {
                println!("Invalid input format. Please enter dimensions in the format 'NxM'.")
            }
        }
        Ok(())
    }

    fn prompt_rule(&mut self, input: &mut impl BufRead) -> Result<()> {
        let text = prompt(
            input,
            "Please select the win condition [RowColumn, Diagonals, AnyRow]: ",
        )?;
        match parse_rule(&text) {
            Some(rule) => {
                self.rule = Some(rule);
                println!("Win condition selected: {}", text.to_lowercase());
            }
            None => println!("Invalid win condition. Please try again."),
        }
        Ok(())
    }
}

fn render(board: &Board) {
    let dimension = board.dimension();
    for row in 0..dimension.rows() {
        let names: Vec<&str> = board.row_names(row).collect();
        println!("{}", names.join(" "));
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input ended");
    }
    Ok(line.trim().to_string())
}
