//! Win and draw detection. Everything here is recomputed from the board on
//! each call; nothing is tracked between turns.

use crate::board::{Board, Mark};
use crate::game::GameStatus;

/// Returns the mark of the first complete line found, if any.
///
/// Rows and columns are scanned pairwise by index, then the main diagonal,
/// then the anti-diagonal.
pub fn winning_mark(board: &Board) -> Option<Mark> {
    let size = board.size();

    for i in 0..size {
        if let Some(mark) = line_owner(board, (0..size).map(|j| (i, j))) {
            return Some(mark);
        }
        if let Some(mark) = line_owner(board, (0..size).map(|j| (j, i))) {
            return Some(mark);
        }
    }

    if let Some(mark) = line_owner(board, (0..size).map(|i| (i, i))) {
        return Some(mark);
    }
    line_owner(board, (0..size).map(|i| (i, size - 1 - i)))
}

/// Current status of the game on `board`.
pub fn evaluate(board: &Board) -> GameStatus {
    match winning_mark(board) {
        Some(Mark::X) => GameStatus::XWon,
        Some(Mark::O) => GameStatus::OWon,
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

/// The mark filling every cell of the line, or `None` if the line has an
/// empty cell or mixed marks.
fn line_owner(board: &Board, mut cells: impl Iterator<Item = (usize, usize)>) -> Option<Mark> {
    let (row, col) = cells.next()?;
    let first = board.cell(row, col)?.mark()?;
    cells
        .all(|(row, col)| board.cell(row, col).and_then(|c| c.mark()) == Some(first))
        .then_some(first)
}
