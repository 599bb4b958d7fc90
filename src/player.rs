use tracing::warn;

use crate::{
    board::{Board, Symbol},
    error::GameError,
    search::Minimax,
};

/// Who chooses a player's moves
#[derive(Clone, Debug)]
pub enum PlayerKind {
    /// Moves are supplied by the caller
    Human,
    /// Moves are chosen by a minimax search
    Ai(Minimax),
}

#[derive(Clone, Debug)]
pub struct Player {
    symbol: Symbol,
    name: String,
    kind: PlayerKind,
}

impl Player {
    /// Creates a human player, named `Player <symbol>` unless a non-blank name is given
    pub fn human(symbol: Symbol, name: Option<String>) -> Self {
        let name = name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("Player {}", symbol));
        Self {
            symbol,
            name,
            kind: PlayerKind::Human,
        }
    }

    /// Creates a computer player searching `max_depth` plies ahead
    pub fn ai(symbol: Symbol, name: Option<String>, max_depth: usize) -> Self {
        let name = name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "AI".to_string());
        Self {
            symbol,
            name,
            kind: PlayerKind::Ai(Minimax::new(max_depth)),
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &PlayerKind {
        &self.kind
    }

    pub fn is_ai(&self) -> bool {
        match self.kind {
            PlayerKind::Ai(_) => true,
            PlayerKind::Human => false,
        }
    }

    /// Plays this player's move on `board`
    ///
    /// A human plays at `cell` and needs one. The AI ignores `cell` and plays
    /// the cell its search prefers. Returns `Ok(false)` if nothing was played:
    /// the human's cell is taken, or the AI found no empty cell.
    pub fn make_move(&mut self, board: &mut Board, cell: Option<(usize, usize)>) -> Result<bool, GameError> {
        let symbol = self.symbol;
        match &mut self.kind {
            PlayerKind::Human => {
                let (row, col) = cell.ok_or(GameError::MissingCoordinate { symbol })?;
                board.make_move(row, col, symbol)
            }
            PlayerKind::Ai(searcher) => match searcher.best_move(board, symbol) {
                Some(((row, col), _score)) => board.make_move(row, col, symbol),
                None => {
                    warn!(%symbol, "AI asked to move on a full board");
                    Ok(false)
                }
            },
        }
    }
}
