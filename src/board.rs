use anyhow::{anyhow, Result};

use std::fmt;
use std::str::FromStr;

use crate::{error::GameError, MAX_DIM, MIN_DIM};

/// One of the two marks a player places
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// The symbol held by the other player
    pub fn other(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Symbol::X => Cell::X,
            Symbol::O => Cell::O,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

impl FromStr for Symbol {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Symbol::X),
            "o" | "O" => Ok(Symbol::O),
            other => Err(GameError::InvalidSymbol(other.to_string())),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Symbol::X),
            Cell::O => Some(Symbol::O),
        }
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        symbol.to_cell()
    }
}

/// A recorded move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub symbol: Symbol,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} at ({}, {})", self.symbol, self.row, self.col)
    }
}

/// A `rows` x `cols` grid and the log of moves that filled it
///
/// Cells are only ever filled through [`Board::make_move`], so the history
/// always lists exactly the non-empty cells, in the order they were taken.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>, // cells are stored row by row, top to bottom
    history: Vec<Move>,
}

impl Board {
    /// Creates an empty board
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows < MIN_DIM || rows > MAX_DIM || cols < MIN_DIM || cols > MAX_DIM {
            return Err(GameError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            history: Vec::with_capacity(rows * cols),
        })
    }

    /// Builds a board from a string of `rc` digit pairs separated by whitespace,
    /// e.g. `"00 11 02"`. Moves alternate between X and O, starting with X.
    pub fn from_moves<S: AsRef<str>>(rows: usize, cols: usize, moves: S) -> Result<Self> {
        let mut board = Self::new(rows, cols)?;
        let mut symbol = Symbol::X;

        for token in moves.as_ref().split_whitespace() {
            let digits: Vec<usize> = token
                .chars()
                .map(|c| c.to_digit(10).map(|d| d as usize))
                .collect::<Option<_>>()
                .ok_or_else(|| anyhow!("could not parse '{}' as a valid move", token))?;
            let (row, col) = match digits[..] {
                [row, col] => (row, col),
                _ => return Err(anyhow!("could not parse '{}' as a valid move", token)),
            };
            // abort if the position is won at any point
            if board.check_win(symbol.other()) {
                return Err(anyhow!("Invalid position, game is over"));
            }
            if !board.make_move(row, col, symbol)? {
                return Err(anyhow!("Invalid move, cell ({}, {}) is taken", row, col));
            }
            symbol = symbol.other();
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The moves played so far, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn num_moves(&self) -> usize {
        self.history.len()
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if row >= self.rows || col >= self.cols {
            return Err(GameError::InvalidCoordinate {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Ok(self.cells[self.index(row, col)?])
    }

    // callers guarantee coordinates are in range
    fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Places `symbol` at (`row`, `col`) and records the move
    ///
    /// Returns `Ok(false)` and leaves the board untouched if the cell is
    /// already taken.
    pub fn make_move(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<bool, GameError> {
        let idx = self.index(row, col)?;
        if !self.cells[idx].is_empty() {
            return Ok(false);
        }
        self.cells[idx] = symbol.to_cell();
        self.history.push(Move { row, col, symbol });
        Ok(true)
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    // Hypothetical placement for search. Not recorded in the history, and
    // must be undone with `unplace` before the board is observed again.
    pub(crate) fn place(&mut self, row: usize, col: usize, symbol: Symbol) {
        let idx = row * self.cols + col;
        debug_assert!(self.cells[idx].is_empty());
        self.cells[idx] = symbol.to_cell();
    }

    pub(crate) fn unplace(&mut self, row: usize, col: usize) {
        self.cells[row * self.cols + col] = Cell::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Checks every row, every column and both diagonals for a line of `symbol`
    ///
    /// On non-square boards the diagonals only run for `min(rows, cols)` cells
    /// from the top corners.
    pub fn check_win(&self, symbol: Symbol) -> bool {
        let target = symbol.to_cell();

        if (0..self.rows).any(|row| (0..self.cols).all(|col| self.at(row, col) == target)) {
            return true;
        }
        if (0..self.cols).any(|col| (0..self.rows).all(|row| self.at(row, col) == target)) {
            return true;
        }

        let diagonal = self.rows.min(self.cols);
        if (0..diagonal).all(|i| self.at(i, i) == target) {
            return true;
        }
        (0..diagonal).all(|i| self.at(i, self.cols - 1 - i) == target)
    }
}
