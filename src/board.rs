//! The square grid the game is played on.

use crate::error::{BoardError, MoveError};
use crate::moves::Move;
use std::fmt;

/// Smallest board a line of three can be played on.
pub const MIN_BOARD_SIZE: usize = 3;

/// A player's symbol, either X or O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the other mark.
    #[cfg(test)]
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A single cell on the board, which can be empty or occupied by a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(Mark),
}

impl Cell {
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Occupied(mark) => write!(f, "{}", mark),
        }
    }
}

/// An N x N grid. The size is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
    size: usize,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    ///
    /// # Errors
    /// Returns `BoardError::TooSmall` for sizes below [`MIN_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::TooSmall { size });
        }
        Ok(Board {
            cells: vec![vec![Cell::Empty; size]; size],
            size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at (`row`, `col`), or `None` when it lies off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Puts the move's mark into its cell.
    ///
    /// # Errors
    /// Fails without touching the board if the cell is off the board or
    /// already occupied.
    pub fn place(&mut self, mv: &Move) -> Result<(), MoveError> {
        let (row, col) = (mv.row(), mv.col());
        let size = self.size;
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(MoveError::OutOfBounds { row, col, size })?;

        if *cell != Cell::Empty {
            return Err(MoveError::Occupied { row, col });
        }
        *cell = Cell::Occupied(mv.mark());
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Cell::Empty {
                    empty.push((row, col));
                }
            }
        }
        empty
    }
}

/// Renders the grid row by row, marks separated by a single space.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.cells {
            let row_str: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            writeln!(f, "{}", row_str.join(" "))?;
        }
        Ok(())
    }
}
