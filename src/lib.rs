//! A tic-tac-toe engine for boards of configurable size, with a computer
//! opponent
//!
//! The computer opponent uses a depth-limited minimax search, so on larger
//! boards it only sees a few plies ahead.
//!
//! # Basic Usage
//!
//! ```
//! use tictactoe_ai::{new_session, GameState, Symbol};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut session = new_session(3, 3, Symbol::X, None, true, None)?;
//! session.play(1, 1)?;
//!
//! // the AI has already answered
//! assert_eq!(session.move_history().len(), 2);
//! assert_eq!(session.state(), GameState::InProgress);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod config;

pub mod error;

pub mod player;

pub mod score;

pub mod search;

pub mod session;

pub mod win;


pub use board::{Board, Cell, Move, Symbol};
pub use config::GameConfig;
pub use error::GameError;
pub use player::{Player, PlayerKind};
pub use score::Scoreboard;
pub use search::Minimax;
pub use session::{new_session, GameSession, GameState, PlayOutcome, Rejection};
pub use win::Winner;

/// The smallest supported number of rows or columns
pub const MIN_DIM: usize = 1;

/// The largest supported number of rows or columns
pub const MAX_DIM: usize = 9;

/// The number of rows and columns of a default board
pub const DEFAULT_DIM: usize = 3;

/// The number of plies the AI looks past each candidate move by default
pub const DEFAULT_SEARCH_DEPTH: usize = 3;

// coordinates are entered and shown as single digits
const_assert!(MAX_DIM <= 10);
const_assert!(MIN_DIM >= 1 && MIN_DIM <= DEFAULT_DIM && DEFAULT_DIM <= MAX_DIM);
const_assert!(DEFAULT_SEARCH_DEPTH > 0);
