use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout, Stdin, Write};

use tictactoe_ai::*;

mod display;

/// Play tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of rows
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(3..=6))]
    rows: u8,

    /// Number of columns
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(3..=6))]
    cols: u8,

    /// Symbol of player 1 (X always moves first)
    #[arg(long, default_value = "X")]
    symbol: Symbol,

    /// Name of player 1
    #[arg(long)]
    name: Option<String>,

    /// Name of player 2
    #[arg(long)]
    opponent_name: Option<String>,

    /// Let a second human play instead of the computer
    #[arg(long)]
    two_player: bool,

    /// Plies the computer looks past each candidate move
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            rows: self.rows as usize,
            cols: self.cols as usize,
            player1_symbol: self.symbol,
            player1_name: self.name.clone(),
            ai_enabled: !self.two_player,
            player2_name: self.opponent_name.clone(),
            search_depth: self.depth,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = args.game_config();
    config.validate()?;
    debug!(?config, "starting");

    let stdin = stdin();
    let mut scores = Scoreboard::new();

    println!("Welcome to Tic-Tac-Toe\n");

    loop {
        let mut session = GameSession::new(config.clone())?;
        println!(
            "{} ({}) vs {} ({}), {}x{} grid",
            session.player1().name(),
            session.player1().symbol(),
            session.player2().name(),
            session.player2().symbol(),
            session.rows(),
            session.cols()
        );
        if let Some(opening) = session.move_history().first() {
            println!("{} opened at ({}, {})", session.player_name(opening.symbol), opening.row, opening.col);
        }

        // game loop
        while session.winner().is_none() {
            display::draw_board(&session)?;
            display::draw_status(&session)?;

            print!("Move input (row col) > ");
            stdout().flush()?;
            let mut input_str = String::new();
            if stdin.read_line(&mut input_str)? == 0 {
                // stdin closed
                return Ok(());
            }

            let (row, col) = match parse_cell(&input_str) {
                Ok(cell) => cell,
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
            };

            match session.play(row, col) {
                Err(err) => println!("{}", err),
                Ok(PlayOutcome::Rejected(Rejection::CellOccupied)) => {
                    println!("Cell ({}, {}) is already taken", row, col)
                }
                Ok(PlayOutcome::Rejected(reason)) => println!("Move ignored: {:?}", reason),
                Ok(PlayOutcome::Applied { reply, .. }) => {
                    if let Some(reply) = reply {
                        println!("{} played ({}, {})", session.player_name(reply.symbol), reply.row, reply.col);
                    }
                }
            }
        }

        // end state
        display::draw_board(&session)?;
        display::draw_status(&session)?;
        if let Some(winner) = session.winner() {
            scores.record(winner);
        }
        display::draw_history(&session);
        display::draw_scores(&session, &scores);

        if !ask_yes_no(&stdin, "Play again? y/n: ")? {
            break;
        }
    }
    Ok(())
}

fn parse_cell(input: &str) -> Result<(usize, usize)> {
    let mut parts = input.split(|c: char| c.is_whitespace() || c == ',').filter(|s| !s.is_empty());
    let mut next = || -> Result<usize> {
        let part = parts.next().ok_or_else(|| anyhow!("Expected a row and a column, e.g. '1 2'"))?;
        part.parse::<usize>()
            .map_err(|_| anyhow!("Invalid number: {}", part))
    };
    let row = next()?;
    let col = next()?;
    Ok((row, col))
}

fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{}", question);
        stdout().flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            return Ok(false);
        }
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
