use crate::{board::Symbol, error::GameError, DEFAULT_DIM, DEFAULT_SEARCH_DEPTH, MAX_DIM, MIN_DIM};

/// Everything needed to start a game
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Player 2 gets the other symbol
    pub player1_symbol: Symbol,
    pub player1_name: Option<String>,
    /// Whether player 2 is the computer
    pub ai_enabled: bool,
    pub player2_name: Option<String>,
    /// Plies the AI looks past each candidate move
    pub search_depth: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_DIM,
            cols: DEFAULT_DIM,
            player1_symbol: Symbol::X,
            player1_name: None,
            ai_enabled: true,
            player2_name: None,
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        let in_range = |dim: usize| (MIN_DIM..=MAX_DIM).contains(&dim);
        if !in_range(self.rows) || !in_range(self.cols) {
            return Err(GameError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.search_depth == 0 {
            return Err(GameError::InvalidDepth(self.search_depth));
        }
        Ok(())
    }

    pub fn player2_symbol(&self) -> Symbol {
        self.player1_symbol.other()
    }
}
