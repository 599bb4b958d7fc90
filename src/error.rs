//! Errors reported by the game engine

use crate::board::Symbol;

/// Faults reported to the caller of the engine.
///
/// Occupied cells, out-of-turn moves and moves after the game has ended are
/// not faults: they are reported as `false` by [`Board::make_move`] and as a
/// [`Rejection`] by [`GameSession::play`].
///
/// [`Board::make_move`]: crate::board::Board::make_move
/// [`Rejection`]: crate::session::Rejection
/// [`GameSession::play`]: crate::session::GameSession::play
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    InvalidCoordinate {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error(
        "a {rows}x{cols} board is not supported, dimensions must be between {} and {}",
        crate::MIN_DIM,
        crate::MAX_DIM
    )]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("player {symbol} needs a row and column to move")]
    MissingCoordinate { symbol: Symbol },

    #[error("'{0}' is not a symbol, expected X or O")]
    InvalidSymbol(String),

    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(usize),
}
