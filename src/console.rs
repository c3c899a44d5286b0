//! Drives a session at the terminal: name prompts, the alternating turn
//! loop, and the result banner.

use crate::board::{Board, Mark};
use crate::error::{BoardError, GameError};
use crate::game::{Game, GameStatus, Slot};
use crate::player::{HumanPlayer, RandomPlayer};
use crate::rules;
use crate::terminal::{SharedTerminal, Terminal};
use rand::Rng;
use std::io::{BufRead, Write};
use std::mem;
use tracing::info;

pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

/// Where a session stands. The computer's RNG waits in `Setup` until the
/// players are built.
enum Phase<G> {
    Setup(G),
    InProgress,
    Finished,
}

/// A human (slot one, `X`) against a random computer (slot two, `O`).
pub struct GameConsole<R, W, G> {
    game: Game,
    terminal: SharedTerminal<R, W>,
    phase: Phase<G>,
}

impl<R, W, G> GameConsole<R, W, G>
where
    R: BufRead + 'static,
    W: Write + 'static,
    G: Rng + 'static,
{
    /// Creates a console on a fresh `board_size` board. `rng` drives the
    /// computer player.
    pub fn new(board_size: usize, input: R, output: W, rng: G) -> Result<Self, BoardError> {
        Ok(GameConsole {
            game: Game::new(Board::new(board_size)?),
            terminal: Terminal::shared(input, output),
            phase: Phase::Setup(rng),
        })
    }

    /// Asks for both names and registers the human, then the computer.
    ///
    /// # Errors
    /// Returns `GameError::AlreadySetUp` when called a second time.
    pub fn setup(&mut self) -> Result<(), GameError> {
        if !matches!(self.phase, Phase::Setup(_)) {
            return Err(GameError::AlreadySetUp);
        }

        let human = self.read_name("\nEnter name for human: ")?;
        let computer = self.read_name("\nEnter name for computer: ")?;

        if let Phase::Setup(rng) = mem::replace(&mut self.phase, Phase::InProgress) {
            self.game.add_player(Box::new(HumanPlayer::new(
                human,
                HUMAN_MARK,
                self.terminal.clone(),
            )));
            self.game.add_player(Box::new(
                RandomPlayer::new(computer, COMPUTER_MARK, rng)
                    .announcing_to(Box::new(self.terminal.clone())),
            ));
        }
        Ok(())
    }

    /// Alternates turns, starting with slot one, until the board shows a
    /// win or a draw. The board is printed after every move.
    pub fn play(&mut self) -> Result<GameStatus, GameError> {
        info!("game started");
        let mut slot = Slot::One;

        loop {
            let status = rules::evaluate(self.game.board());
            if status.is_finished() {
                self.game.set_status(status);
                self.phase = Phase::Finished;
                info!(?status, "game finished");
                return Ok(status);
            }

            self.game.request_move(slot)?;
            self.display_board()?;
            slot = slot.other();
        }
    }

    /// Prints the winner's name, or "No One" after a draw.
    pub fn print_result(&mut self) -> Result<(), GameError> {
        let winner = self
            .game
            .status()
            .winner()
            .and_then(|mark| self.game.slot_for_mark(mark))
            .and_then(|slot| self.game.player_name(slot))
            .unwrap_or("No One");

        self.terminal
            .borrow_mut()
            .write_line(&format!("\n---->| {} WINS |<----", winner))
    }

    /// Runs a whole session: setup, play, result.
    pub fn run(&mut self) -> Result<GameStatus, GameError> {
        self.setup()?;
        let status = self.play()?;
        self.print_result()?;
        Ok(status)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn terminal(&self) -> &SharedTerminal<R, W> {
        &self.terminal
    }

    /// A name is a single word; blank lines are skipped.
    fn read_name(&mut self, prompt: &str) -> Result<String, GameError> {
        let mut terminal = self.terminal.borrow_mut();
        terminal.prompt(prompt)?;
        terminal.next_token()
    }

    fn display_board(&mut self) -> Result<(), GameError> {
        let rendered = self.game.board().to_string();
        let mut terminal = self.terminal.borrow_mut();
        for row in rendered.lines() {
            terminal.write_line(&format!("\t\t\t {}", row))?;
        }
        Ok(())
    }
}
