use crate::board::Mark;

/// A request to put `mark` at (`row`, `col`). Zero-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    row: usize,
    col: usize,
    mark: Mark,
}

impl Move {
    pub fn new(row: usize, col: usize, mark: Mark) -> Self {
        Move { row, col, mark }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}
