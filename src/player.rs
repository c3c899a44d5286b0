//! The two kinds of player: a human at the terminal and a computer that
//! picks empty cells at random.

use crate::board::{Board, Mark};
use crate::error::GameError;
use crate::moves::Move;
use crate::terminal::{Announce, SharedTerminal, Terminal};
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

/// Something that can take a turn.
pub trait Player {
    fn name(&self) -> &str;

    fn mark(&self) -> Mark;

    /// Picks a legal cell and places this player's mark on `board`.
    ///
    /// Only returns `Ok` once the mark has been placed. Callers must not ask
    /// for a move on a full board; doing so yields `GameError::BoardFull`.
    fn choose_move(&mut self, board: &mut Board) -> Result<Move, GameError>;
}

/// A player whose moves are typed in at the terminal.
pub struct HumanPlayer<R, W> {
    name: String,
    mark: Mark,
    terminal: SharedTerminal<R, W>,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, mark: Mark, terminal: SharedTerminal<R, W>) -> Self {
        HumanPlayer {
            name: name.into(),
            mark,
            terminal,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    /// Prompts for a row and a column until they name an empty cell. The two
    /// numbers may be on one line or on separate lines.
    fn choose_move(&mut self, board: &mut Board) -> Result<Move, GameError> {
        if board.is_full() {
            return Err(GameError::BoardFull);
        }

        let prompt = format!("{} turn, (x,y): ", self.name);
        loop {
            let mut terminal = self.terminal.borrow_mut();
            terminal.prompt(&prompt)?;
            let Some(row) = read_coordinate(&mut *terminal)? else {
                continue;
            };
            let Some(col) = read_coordinate(&mut *terminal)? else {
                continue;
            };
            drop(terminal);

            let mv = Move::new(row, col, self.mark);
            match board.place(&mv) {
                Ok(()) => return Ok(mv),
                Err(err) => debug!(player = %self.name, %err, "move rejected"),
            }
        }
    }
}

/// Reads one non-negative integer. On anything else the rest of the line
/// is dropped and `None` is returned.
fn read_coordinate<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
) -> Result<Option<usize>, GameError> {
    let token = terminal.next_token()?;
    match token.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            debug!(input = %token, "unreadable coordinate");
            terminal.discard_pending();
            Ok(None)
        }
    }
}

/// A computer player choosing uniformly among the empty cells.
pub struct RandomPlayer<R> {
    name: String,
    mark: Mark,
    rng: R,
    announcer: Option<Box<dyn Announce>>,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(name: impl Into<String>, mark: Mark, rng: R) -> Self {
        RandomPlayer {
            name: name.into(),
            mark,
            rng,
            announcer: None,
        }
    }

    /// Prints `<name> turn, (x,y): ` to `announcer` at the start of each turn.
    pub fn announcing_to(mut self, announcer: Box<dyn Announce>) -> Self {
        self.announcer = Some(announcer);
        self
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_move(&mut self, board: &mut Board) -> Result<Move, GameError> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return Err(GameError::BoardFull);
        }
        if let Some(announcer) = self.announcer.as_mut() {
            announcer.announce(&format!("{} turn, (x,y): ", self.name))?;
        }

        let &(row, col) = empty.choose(&mut self.rng).ok_or(GameError::BoardFull)?;
        let mv = Move::new(row, col, self.mark);
        board.place(&mv)?;
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn board_with_one_gap(gap: (usize, usize)) -> Board {
        let mut board = Board::new(3).unwrap();
        let mut mark = Mark::X;
        for row in 0..3 {
            for col in 0..3 {
                if (row, col) != gap {
                    board.place(&Move::new(row, col, mark)).unwrap();
                    mark = mark.opponent();
                }
            }
        }
        board
    }

    #[test]
    fn test_read_coordinate_drops_rest_of_a_bad_line() {
        let mut terminal = Terminal::new(Cursor::new("3\nx 9 9\n-1\n4\n"), Vec::new());

        assert_eq!(read_coordinate(&mut terminal).unwrap(), Some(3));
        assert_eq!(read_coordinate(&mut terminal).unwrap(), None);
        assert_eq!(read_coordinate(&mut terminal).unwrap(), None);
        assert_eq!(read_coordinate(&mut terminal).unwrap(), Some(4));
    }

    #[test]
    fn test_random_player_fills_the_only_gap() {
        for seed in 0..20 {
            let mut board = board_with_one_gap((2, 1));
            let mut player = RandomPlayer::new("cpu", Mark::O, StdRng::seed_from_u64(seed));

            let mv = player.choose_move(&mut board).unwrap();

            assert_eq!((mv.row(), mv.col()), (2, 1));
            assert_eq!(board.cell(2, 1), Some(Cell::Occupied(Mark::O)));
            assert!(board.is_full());
        }
    }

    #[test]
    fn test_random_player_on_full_board_is_board_full() {
        let mut board = board_with_one_gap((0, 0));
        board.place(&Move::new(0, 0, Mark::X)).unwrap();
        let mut player = RandomPlayer::new("cpu", Mark::O, StdRng::seed_from_u64(7));

        assert!(matches!(player.choose_move(&mut board), Err(GameError::BoardFull)));
    }

    #[test]
    fn test_random_player_is_deterministic_for_a_seed() {
        let mut first = Board::new(3).unwrap();
        let mut second = Board::new(3).unwrap();
        let mut a = RandomPlayer::new("a", Mark::O, StdRng::seed_from_u64(42));
        let mut b = RandomPlayer::new("b", Mark::O, StdRng::seed_from_u64(42));

        for _ in 0..9 {
            assert_eq!(a.choose_move(&mut first).unwrap(), b.choose_move(&mut second).unwrap());
        }
        assert!(first.is_full());
    }

    #[test]
    fn test_human_player_retries_until_a_legal_cell() {
        let input = "nonsense 5\n0 0\n7 7\n1 2\n";
        let terminal = Terminal::shared(Cursor::new(input), Vec::new());
        let mut board = Board::new(3).unwrap();
        board.place(&Move::new(0, 0, Mark::O)).unwrap();
        let mut player = HumanPlayer::new("ann", Mark::X, terminal.clone());

        let mv = player.choose_move(&mut board).unwrap();

        assert_eq!(mv, Move::new(1, 2, Mark::X));
        assert_eq!(board.cell(1, 2), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.cell(0, 0), Some(Cell::Occupied(Mark::O)));
        let output = String::from_utf8(terminal.borrow().output().clone()).unwrap();
        assert_eq!(output.matches("ann turn, (x,y): ").count(), 4);
    }

    #[test]
    fn test_human_player_reads_coordinates_across_lines() {
        let terminal = Terminal::shared(Cursor::new("1\n2\n"), Vec::new());
        let mut board = Board::new(3).unwrap();
        let mut player = HumanPlayer::new("ann", Mark::X, terminal.clone());

        let mv = player.choose_move(&mut board).unwrap();

        assert_eq!(mv, Move::new(1, 2, Mark::X));
        assert_eq!(board.cell(1, 2), Some(Cell::Occupied(Mark::X)));
        let output = String::from_utf8(terminal.borrow().output().clone()).unwrap();
        assert_eq!(output, "ann turn, (x,y): ");
    }

    #[test]
    fn test_human_player_keeps_extra_numbers_for_next_turn() {
        let terminal = Terminal::shared(Cursor::new("0 0 2 2\n"), Vec::new());
        let mut board = Board::new(3).unwrap();
        let mut player = HumanPlayer::new("ann", Mark::X, terminal);

        assert_eq!(player.choose_move(&mut board).unwrap(), Move::new(0, 0, Mark::X));
        assert_eq!(player.choose_move(&mut board).unwrap(), Move::new(2, 2, Mark::X));
    }

    #[test]
    fn test_random_player_announces_turn_without_coordinates() {
        let terminal = Terminal::shared(Cursor::new(""), Vec::new());
        let mut board = Board::new(3).unwrap();
        let mut player = RandomPlayer::new("hal", Mark::O, StdRng::seed_from_u64(5))
            .announcing_to(Box::new(terminal.clone()));

        player.choose_move(&mut board).unwrap();

        let output = String::from_utf8(terminal.borrow().output().clone()).unwrap();
        assert_eq!(output, "hal turn, (x,y): \n");
    }

    #[test]
    fn test_human_player_reports_closed_input() {
        let terminal = Terminal::shared(Cursor::new("5 5\n"), Vec::new());
        let mut board = Board::new(3).unwrap();
        let mut player = HumanPlayer::new("ann", Mark::X, terminal);

        assert!(matches!(player.choose_move(&mut board), Err(GameError::InputClosed)));
        assert_eq!(board, Board::new(3).unwrap());
    }
}
