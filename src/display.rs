use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use tictactoe_ai::{Cell, GameSession, GameState, Scoreboard, Symbol};

pub fn draw_board(session: &GameSession) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (0..session.cols()).map(|col| format!(" {}", col)).collect();
    stdout.queue(PrintStyledContent(style(format!("\n  {}\n", header)).attribute(Attribute::Dim)))?;

    for row in 0..session.rows() {
        stdout.queue(PrintStyledContent(style(format!(" {}", row)).attribute(Attribute::Dim)))?;
        for col in 0..session.cols() {
            let cell = match session.board_cell(row, col)? {
                Cell::X => style(" X").attribute(Attribute::Bold).with(Color::Red),
                Cell::O => style(" O").attribute(Attribute::Bold).with(Color::Blue),
                Cell::Empty => style(" .").with(Color::DarkGrey),
            };
            stdout.queue(PrintStyledContent(cell))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}

pub fn draw_status(session: &GameSession) -> Result<()> {
    let mut stdout = stdout();
    let status = match session.state() {
        GameState::InProgress => {
            let turn = session.current_turn();
            style(format!("{}'s turn ({})\n", session.player_name(turn), turn)).with(Color::Cyan)
        }
        GameState::Won(symbol) => style(format!("{} wins!\n", session.player_name(symbol)))
            .attribute(Attribute::Bold)
            .with(Color::Green),
        GameState::Draw => style("It's a draw!\n".to_string())
            .attribute(Attribute::Bold)
            .with(Color::Yellow),
    };
    stdout.queue(PrintStyledContent(status))?;
    stdout.flush()?;
    Ok(())
}

pub fn draw_history(session: &GameSession) {
    println!("Move history:");
    if session.move_history().is_empty() {
        println!("  No moves yet!");
    }
    for (idx, played) in session.move_history().iter().enumerate() {
        println!("  Move {}: {}", idx + 1, played);
    }
}

pub fn draw_scores(session: &GameSession, scores: &Scoreboard) {
    println!("Scores:");
    for &symbol in [Symbol::X, Symbol::O].iter() {
        println!(
            "  {} ({}): {} wins",
            session.player_name(symbol),
            symbol,
            scores.wins(symbol)
        );
    }
    println!("  Draws: {}", scores.draws());
}
