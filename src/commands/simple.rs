//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is one guess.

use crate::game::{Game, GameState, Input, Outcome};
use crate::input::from_line;
use crate::output::{print_board, print_result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a typed line did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    /// The line was scored and stored
    Committed,
    /// Wrong number of letters; nothing changed
    WrongLength { expected: usize, found: usize },
    /// The game is already over
    Finished,
}

/// Replace any half-typed row with `line` and submit it
pub fn play_line(game: &mut Game, line: &str) -> LineResult {
    if game.state().is_over() {
        return LineResult::Finished;
    }

    let expected = game.answer().len();
    let found = line.chars().filter(char::is_ascii_alphabetic).count();
    if found != expected {
        return LineResult::WrongLength { expected, found };
    }

    while game.handle(Input::Delete).is_accepted() {}

    match game.handle_all(from_line(line)) {
        Outcome::Committed(_) => LineResult::Committed,
        Outcome::Edited | Outcome::Ignored => LineResult::Finished,
    }
}

/// Run the simple interactive CLI mode, reading guesses from `input`
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple<R: BufRead>(game: &mut Game, mut input: R) -> io::Result<()> {
    println!("\n╔════════════════════════════════════════╗");
    println!("║          Wordgame - Line Mode          ║");
    println!("╚════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries. Type 'quit' to exit.",
        game.answer().len(),
        game.max_attempts()
    );

    if !game.attempts().is_empty() {
        println!("Resuming today's game.");
        print_board(&game.snapshot());
    }

    loop {
        if game.state().is_over() {
            print_result(&game.snapshot(), game.answer().text(), game.max_attempts());
            return Ok(());
        }

        print!("Guess {}/{}: ", game.committed() + 1, game.max_attempts());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        let line = line.trim();
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Progress saved. See you later!\n");
            return Ok(());
        }

        match play_line(game, line) {
            LineResult::Committed => print_board(&game.snapshot()),
            LineResult::WrongLength { expected, found } => {
                println!(
                    "{}",
                    format!("❌ Enter exactly {expected} letters (got {found})").red()
                );
            }
            LineResult::Finished => {}
        }

        if game.state() == GameState::Won && game.committed() == 1 {
            println!("{}", "🎯 First try!".bright_yellow().bold());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn game() -> Game {
        Game::new(Word::new("ghast").unwrap(), 6)
    }

    #[test]
    fn play_line_commits_full_words() {
        let mut game = game();
        assert_eq!(play_line(&mut game, "ghost"), LineResult::Committed);
        assert_eq!(game.committed(), 1);
    }

    #[test]
    fn play_line_rejects_wrong_length() {
        let mut game = game();
        assert_eq!(
            play_line(&mut game, "gho"),
            LineResult::WrongLength {
                expected: 5,
                found: 3
            }
        );
        assert!(game.attempts().is_empty());
    }

    #[test]
    fn play_line_replaces_half_typed_row() {
        let mut game = game();
        game.handle_all("xy".chars().map(Input::Character));
        assert_eq!(play_line(&mut game, "ghast"), LineResult::Committed);
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.attempts()[0].text(), "GHAST");
    }

    #[test]
    fn play_line_after_game_over() {
        let mut game = game();
        play_line(&mut game, "ghast");
        assert_eq!(play_line(&mut game, "brick"), LineResult::Finished);
    }

    #[test]
    fn run_simple_plays_to_the_end() {
        let mut game = game();
        let input = io::Cursor::new("brick\nxx\nghast\nignored\n");
        run_simple(&mut game, input).unwrap();
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.committed(), 2);
    }

    #[test]
    fn run_simple_stops_on_quit() {
        let mut game = game();
        let input = io::Cursor::new("brick\nquit\nghast\n");
        run_simple(&mut game, input).unwrap();
        assert_eq!(game.committed(), 1);
        assert_eq!(game.state(), GameState::BuildingAttempt);
    }
}
