//! A console-based Tic Tac Toe game: you against a computer that plays at
//! random.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};
use tictactoe_console::GameConsole;
use tracing::{error, info, Level};

const BOARD_SIZE: usize = 3;

/// Play Tic Tac Toe against the computer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the computer's moves. A random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let rng = match args.seed {
        Some(seed) => {
            info!(seed, "seeding computer player");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    run_app(io::stdin().lock(), io::stdout(), rng)
}

/// Plays one session. A game that cannot finish, for example because input
/// closed, is logged and still counts as a normal exit.
fn run_app<R, W, G>(input: R, output: W, rng: G) -> Result<()>
where
    R: BufRead + 'static,
    W: Write + 'static,
    G: Rng + 'static,
{
    let mut console = GameConsole::new(BOARD_SIZE, input, output, rng)
        .context("Failed to create the board")?;
    if let Err(err) = console.run() {
        error!(%err, "game aborted");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_closed_input_still_exits_normally() {
        let result = run_app(Cursor::new("ann\n"), Vec::new(), StdRng::seed_from_u64(0));

        assert!(result.is_ok());
    }

    #[test]
    fn test_full_session_exits_normally() {
        let mut input = String::from("ann\nhal\n");
        for row in 0..3 {
            for col in 0..3 {
                input.push_str(&format!("{} {}\n", row, col));
            }
        }

        let result = run_app(Cursor::new(input), Vec::new(), StdRng::seed_from_u64(4));

        assert!(result.is_ok());
    }
}
