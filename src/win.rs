//! Terminal-state detection shared by the session and the search

use std::fmt;

use crate::board::{Board, Symbol};

/// How a finished game ended
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Winner {
    Won(Symbol),
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Won(symbol) => write!(f, "{}", symbol),
            Winner::Draw => write!(f, "Draw"),
        }
    }
}

pub fn has_won(board: &Board, symbol: Symbol) -> bool {
    board.check_win(symbol)
}

pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// The result of `mover` having just played on `board`, if the game is over
///
/// A win takes precedence over a full board.
pub fn outcome(board: &Board, mover: Symbol) -> Option<Winner> {
    if has_won(board, mover) {
        Some(Winner::Won(mover))
    } else if is_full(board) {
        Some(Winner::Draw)
    } else {
        None
    }
}
