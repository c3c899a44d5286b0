//! # Tic Tac Toe console game
//!
//! A human plays `X` against a computer that places `O` on a random empty
//! cell. The library holds the board, the players, win detection and the
//! console driver; the binary only parses arguments and sets up logging.

pub mod board;
pub mod console;
pub mod error;
pub mod game;
pub mod moves;
pub mod player;
pub mod rules;
pub mod terminal;

pub use board::{Board, Cell, Mark};
pub use console::GameConsole;
pub use error::{BoardError, GameError, MoveError};
pub use game::{Game, GameStatus, Slot};
pub use moves::Move;
pub use player::{HumanPlayer, Player, RandomPlayer};
