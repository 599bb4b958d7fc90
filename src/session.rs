//! Turn sequencing for a single game
//!
//! A [`GameSession`] owns the board and both players. The presentation layer
//! drives it through [`GameSession::play`] and reads everything else through
//! the observers. When player 2 is the AI, its reply is part of the same
//! `play` transition: the caller never triggers the AI itself.

use tracing::{debug, info};

use crate::{
    board::{Board, Cell, Move, Symbol},
    config::GameConfig,
    error::GameError,
    player::Player,
    win::{self, Winner},
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    InProgress,
    Won(Symbol),
    Draw,
}

/// Why a `play` call changed nothing
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Rejection {
    /// The game has already been won or drawn
    GameOver,
    /// It is the AI's turn
    OutOfTurn,
    /// The requested cell is taken
    CellOccupied,
}

/// The effect of a `play` call
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PlayOutcome {
    /// The requested move was played, followed by the AI's reply if the game
    /// was still going and player 2 is the AI
    Applied { played: Move, reply: Option<Move> },
    Rejected(Rejection),
}

#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    player1: Player,
    player2: Player,
    current: Symbol,
    winner: Option<Winner>,
    ai_enabled: bool,
}

/// Starts a session with the default search depth
pub fn new_session(
    rows: usize,
    cols: usize,
    player1_symbol: Symbol,
    player1_name: Option<String>,
    ai_enabled: bool,
    player2_name: Option<String>,
) -> Result<GameSession, GameError> {
    GameSession::new(GameConfig {
        rows,
        cols,
        player1_symbol,
        player1_name,
        ai_enabled,
        player2_name,
        ..GameConfig::default()
    })
}

impl GameSession {
    /// Starts a new game
    ///
    /// X always moves first. If that is the AI, its opening move has been
    /// played by the time this returns.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let board = Board::new(config.rows, config.cols)?;
        let player1 = Player::human(config.player1_symbol, config.player1_name);
        let player2 = if config.ai_enabled {
            Player::ai(config.player1_symbol.other(), config.player2_name, config.search_depth)
        } else {
            Player::human(config.player1_symbol.other(), config.player2_name)
        };

        let mut session = Self {
            board,
            player1,
            player2,
            current: Symbol::X,
            winner: None,
            ai_enabled: config.ai_enabled,
        };
        debug!(
            rows = config.rows,
            cols = config.cols,
            player1 = %session.player1.symbol(),
            ai = session.ai_enabled,
            "new session"
        );

        if session.ai_to_move() {
            session.ai_reply()?;
        }
        Ok(session)
    }

    /// Plays the current player's move at (`row`, `col`)
    ///
    /// Moves after the game is over, out of turn, or onto a taken cell are
    /// rejected and leave the session unchanged. Coordinates outside the
    /// board are an error.
    pub fn play(&mut self, row: usize, col: usize) -> Result<PlayOutcome, GameError> {
        if self.winner.is_some() {
            return Ok(PlayOutcome::Rejected(Rejection::GameOver));
        }
        if self.ai_enabled && self.current != self.player1.symbol() {
            return Ok(PlayOutcome::Rejected(Rejection::OutOfTurn));
        }

        let player = if self.current == self.player1.symbol() {
            &mut self.player1
        } else {
            &mut self.player2
        };
        if !player.make_move(&mut self.board, Some((row, col)))? {
            return Ok(PlayOutcome::Rejected(Rejection::CellOccupied));
        }
        let played = self.last_move();
        self.finish_ply(played);

        let reply = if self.ai_to_move() {
            self.ai_reply()?
        } else {
            None
        };
        Ok(PlayOutcome::Applied { played, reply })
    }

    fn ai_to_move(&self) -> bool {
        self.ai_enabled && self.winner.is_none() && self.current == self.player2.symbol()
    }

    // the auto-response sub-step of a transition
    fn ai_reply(&mut self) -> Result<Option<Move>, GameError> {
        if !self.player2.make_move(&mut self.board, None)? {
            return Ok(None);
        }
        let reply = self.last_move();
        self.finish_ply(reply);
        Ok(Some(reply))
    }

    // callers have just pushed a move
    fn last_move(&self) -> Move {
        self.board.history()[self.board.num_moves() - 1]
    }

    fn finish_ply(&mut self, played: Move) {
        debug!(row = played.row, col = played.col, symbol = %played.symbol, "move played");
        match win::outcome(&self.board, played.symbol) {
            Some(winner) => {
                info!(%winner, moves = self.board.num_moves(), "game over");
                self.winner = Some(winner);
            }
            None => self.current = played.symbol.other(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.board.cell(row, col)
    }

    pub fn move_history(&self) -> &[Move] {
        self.board.history()
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn state(&self) -> GameState {
        match self.winner {
            None => GameState::InProgress,
            Some(Winner::Won(symbol)) => GameState::Won(symbol),
            Some(Winner::Draw) => GameState::Draw,
        }
    }

    /// The symbol due to move next, or the last mover once the game is over
    pub fn current_turn(&self) -> Symbol {
        self.current
    }

    pub fn player_name(&self, symbol: Symbol) -> &str {
        self.player(symbol).name()
    }

    pub fn player(&self, symbol: Symbol) -> &Player {
        if symbol == self.player1.symbol() {
            &self.player1
        } else {
            &self.player2
        }
    }

    pub fn player1(&self) -> &Player {
        &self.player1
    }

    pub fn player2(&self) -> &Player {
        &self.player2
    }

    pub fn is_ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_turn_play_is_ignored() -> Result<(), GameError> {
        let mut session = GameSession::new(GameConfig::default())?;
        session.play(1, 1)?;
        let history = session.move_history().to_vec();
        let board = session.board().clone();

        // only reachable if a host interleaves calls during the AI's turn
        session.current = session.player2.symbol();
        assert_eq!(session.play(0, 0)?, PlayOutcome::Rejected(Rejection::OutOfTurn));
        assert_eq!(session.move_history(), &history[..]);
        assert_eq!(session.board(), &board);
        assert_eq!(session.winner(), None);
        Ok(())
    }

    #[test]
    fn two_human_players_alternate() -> Result<(), GameError> {
        let mut session = GameSession::new(GameConfig {
            ai_enabled: false,
            ..GameConfig::default()
        })?;
        assert_eq!(session.current_turn(), Symbol::X);
        session.play(0, 0)?;
        assert_eq!(session.current_turn(), Symbol::O);
        session.play(1, 1)?;
        assert_eq!(session.current_turn(), Symbol::X);
        assert_eq!(session.move_history().len(), 2);
        Ok(())
    }
}
