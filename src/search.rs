//! A depth-limited minimax searcher
//!
//! # Position Scoring
//! Positions are scored from the searching player's point of view. A position
//! the searcher has won scores `10 - depth`, one the opponent has won scores
//! `depth - 10`, where `depth` counts the plies played since the candidate
//! move. A full board, or a position at the depth limit with no winner,
//! scores 0. Earlier wins are therefore preferred and losses are put off as
//! long as possible.
//!
//! Beyond the depth limit the search is blind: on boards larger than 3x3 the
//! chosen move is only as good as the horizon allows.

use tracing::{debug, instrument};

use crate::{
    board::{Board, Symbol},
    win, DEFAULT_SEARCH_DEPTH,
};

/// Score of a position won with the candidate move itself
pub const WIN_SCORE: i32 = 10;

/// A minimax searcher with a fixed depth limit
#[derive(Clone, Debug)]
pub struct Minimax {
    max_depth: usize,

    /// The number of nodes searched by this `Minimax` so far (for diagnostics only)
    pub node_count: usize,
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Minimax {
    /// Creates a searcher that looks `max_depth` plies past each candidate move
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            node_count: 0,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Finds the best cell for `symbol` to play on `board`
    ///
    /// Returns the cell and its score, or `None` if the board has no empty
    /// cell. Candidates are tried in row-major order and only a strictly
    /// better score replaces the current best, so ties go to the first cell.
    ///
    /// The board is used as scratch space during the search and is left
    /// exactly as it was given.
    #[instrument(level = "debug", skip(self, board), fields(rows = board.rows(), cols = board.cols()))]
    pub fn best_move(&mut self, board: &mut Board, symbol: Symbol) -> Option<((usize, usize), i32)> {
        let candidates: Vec<(usize, usize)> = board.empty_cells().collect();
        let start_count = self.node_count;

        let mut best: Option<((usize, usize), i32)> = None;
        for (row, col) in candidates {
            board.place(row, col, symbol);
            let score = self.minimax(board, 0, false, symbol);
            board.unplace(row, col);

            debug!(row, col, score, "scored candidate");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some(((row, col), score));
            }
        }

        if let Some(((row, col), score)) = best {
            debug!(
                row,
                col,
                score,
                nodes = self.node_count - start_count,
                "search finished"
            );
        }
        best
    }

    /// Scores `board` for `ai_symbol`, with `maximizing` telling whose ply is next
    fn minimax(&mut self, board: &mut Board, depth: usize, maximizing: bool, ai_symbol: Symbol) -> i32 {
        self.node_count += 1;

        let opponent = ai_symbol.other();
        if win::has_won(board, ai_symbol) {
            return WIN_SCORE - depth as i32;
        }
        if win::has_won(board, opponent) {
            return depth as i32 - WIN_SCORE;
        }
        if win::is_full(board) || depth >= self.max_depth {
            return 0;
        }

        let (mover, mut best_score) = if maximizing {
            (ai_symbol, i32::MIN)
        } else {
            (opponent, i32::MAX)
        };

        // the cell list is fixed for this node, hypothetical moves below are always undone
        let candidates: Vec<(usize, usize)> = board.empty_cells().collect();
        for (row, col) in candidates {
            board.place(row, col, mover);
            let score = self.minimax(board, depth + 1, !maximizing, ai_symbol);
            board.unplace(row, col);

            best_score = if maximizing {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }
        best_score
    }
}
