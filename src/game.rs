//! Game state: the board, the two-player roster and the current status.

use crate::board::{Board, Mark};
use crate::error::GameError;
use crate::moves::Move;
use crate::player::Player;
use std::fmt;
use tracing::{info, warn};

/// Roster position. `One` is whoever was added first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    One,
    Two,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::One, Slot::Two];

    /// Returns the other slot.
    pub fn other(self) -> Self {
        match self {
            Slot::One => Slot::Two,
            Slot::Two => Slot::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Slot::One => 0,
            Slot::Two => 1,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// How the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    /// The mark that won, if the game ended in a win.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub fn is_finished(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Owns the board and up to two players.
pub struct Game {
    board: Board,
    players: Vec<Box<dyn Player>>,
    status: GameStatus,
}

impl Game {
    pub const MAX_PLAYERS: usize = 2;

    pub fn new(board: Board) -> Self {
        Game {
            board,
            players: Vec::with_capacity(Self::MAX_PLAYERS),
            status: GameStatus::InProgress,
        }
    }

    /// Registers the next player. Returns `false`, leaving the roster
    /// unchanged, once both slots are taken.
    pub fn add_player(&mut self, player: Box<dyn Player>) -> bool {
        if self.players.len() >= Self::MAX_PLAYERS {
            warn!(name = player.name(), "roster is full, player not added");
            return false;
        }
        info!(
            name = player.name(),
            mark = %player.mark(),
            slot = self.players.len() + 1,
            "player joined"
        );
        self.players.push(player);
        true
    }

    pub fn roster_len(&self) -> usize {
        self.players.len()
    }

    /// Lets the player in `slot` choose and place a move on the board.
    pub fn request_move(&mut self, slot: Slot) -> Result<Move, GameError> {
        let player = self
            .players
            .get_mut(slot.index())
            .ok_or(GameError::EmptySlot(slot))?;
        let mv = player.choose_move(&mut self.board)?;
        info!(
            player = player.name(),
            mark = %mv.mark(),
            row = mv.row(),
            col = mv.col(),
            "move applied"
        );
        Ok(mv)
    }

    pub fn player(&self, slot: Slot) -> Option<&dyn Player> {
        self.players.get(slot.index()).map(|p| p.as_ref())
    }

    pub fn player_name(&self, slot: Slot) -> Option<&str> {
        self.player(slot).map(|p| p.name())
    }

    pub fn player_mark(&self, slot: Slot) -> Option<Mark> {
        self.player(slot).map(|p| p.mark())
    }

    /// The slot whose player plays `mark`.
    pub fn slot_for_mark(&self, mark: Mark) -> Option<Slot> {
        Slot::ALL
            .into_iter()
            .find(|&slot| self.player_mark(slot) == Some(mark))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
