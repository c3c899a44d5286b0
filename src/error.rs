//! Error types shared by the board, the players and the console.

use crate::game::Slot;
use std::fmt;
use std::io;

/// Why a placement was refused. The board is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds { row: usize, col: usize, size: usize },
    Occupied { row: usize, col: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col, size } => write!(
                f,
                "cell ({}, {}) is outside the {}x{} board",
                row, col, size, size
            ),
            MoveError::Occupied { row, col } => write!(f, "cell ({}, {}) is already taken", row, col),
        }
    }
}

impl std::error::Error for MoveError {}

/// Returned when a board cannot be built with the requested size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    TooSmall { size: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::TooSmall { size } => {
                write!(f, "board size must be at least 3, got {}", size)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Failures that stop a game from making progress.
#[derive(Debug)]
pub enum GameError {
    /// A move was requested for a roster slot nobody occupies.
    EmptySlot(Slot),
    /// A player was asked to move with no empty cell left.
    BoardFull,
    /// Players were already registered for this session.
    AlreadySetUp,
    /// A player produced a placement the board refused.
    IllegalMove(MoveError),
    /// Standard input ended while a reply was expected.
    InputClosed,
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::EmptySlot(slot) => write!(f, "no player registered in slot {}", slot),
            GameError::BoardFull => write!(f, "no empty cell left on the board"),
            GameError::AlreadySetUp => write!(f, "players are already registered"),
            GameError::IllegalMove(err) => write!(f, "illegal move: {}", err),
            GameError::InputClosed => write!(f, "input closed before the game finished"),
            GameError::Io(err) => write!(f, "terminal I/O failed: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalMove(err) => Some(err),
            GameError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Io(err)
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::IllegalMove(err)
    }
}
