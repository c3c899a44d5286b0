//! Console I/O shared by the console and the players.
//!
//! Replies are read as whitespace-separated tokens, so a reply may span
//! several lines and one line may carry several replies.

use crate::error::GameError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::rc::Rc;

/// A terminal handle both the console and the players write through.
pub type SharedTerminal<R, W> = Rc<RefCell<Terminal<R, W>>>;

/// Wraps an input and an output stream.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn shared(input: R, output: W) -> SharedTerminal<R, W> {
        Rc::new(RefCell::new(Self::new(input, output)))
    }

    /// Writes `prompt` without a trailing newline and flushes.
    pub fn prompt(&mut self, prompt: &str) -> Result<(), GameError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns the next whitespace-delimited token, reading more lines as
    /// needed. Blank lines are skipped.
    ///
    /// # Errors
    /// Returns `GameError::InputClosed` at end of input.
    pub fn next_token(&mut self) -> Result<String, GameError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Drops whatever is left of the current input line.
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }

    pub fn write_line(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

/// Where a non-interactive player announces its turn.
pub trait Announce {
    fn announce(&mut self, text: &str) -> Result<(), GameError>;
}

impl<R: BufRead, W: Write> Announce for SharedTerminal<R, W> {
    fn announce(&mut self, text: &str) -> Result<(), GameError> {
        self.borrow_mut().write_line(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_span_lines_and_share_lines() {
        let mut term = Terminal::new(Cursor::new("alice\r\n\n  bob carol\n"), Vec::new());

        assert_eq!(term.next_token().unwrap(), "alice");
        assert_eq!(term.next_token().unwrap(), "bob");
        assert_eq!(term.next_token().unwrap(), "carol");
        assert!(matches!(term.next_token(), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_discard_pending_drops_rest_of_line() {
        let mut term = Terminal::new(Cursor::new("a b c\nd\n"), Vec::new());

        assert_eq!(term.next_token().unwrap(), "a");
        term.discard_pending();
        assert_eq!(term.next_token().unwrap(), "d");
    }

    #[test]
    fn test_prompt_and_write_line_reach_output() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new());

        term.prompt("name: ").unwrap();
        term.write_line("done").unwrap();

        assert_eq!(String::from_utf8(term.output().clone()).unwrap(), "name: done\n");
    }

    #[test]
    fn test_empty_input_is_input_closed() {
        let mut term = Terminal::new(Cursor::new("\n\n"), Vec::new());

        assert!(matches!(term.next_token(), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_shared_terminal_announces_a_line() {
        let mut term = Terminal::shared(Cursor::new(""), Vec::new());

        term.announce("hal turn, (x,y): ").unwrap();

        assert_eq!(
            String::from_utf8(term.borrow().output().clone()).unwrap(),
            "hal turn, (x,y): \n"
        );
    }
}
