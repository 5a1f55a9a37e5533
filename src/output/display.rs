//! Colored terminal rendering for line mode

use super::formatters::{KEYBOARD_ROWS, share_grid};
use crate::core::{Attempt, LetterStatus};
use crate::game::{GameState, Legend, Snapshot};
use colored::{ColoredString, Colorize};

fn paint(text: &str, status: LetterStatus) -> ColoredString {
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
        LetterStatus::Pending => text.bright_white().bold(),
        LetterStatus::Unset => text.bright_black(),
    }
}

/// Render an attempt as colored tiles
#[must_use]
pub fn colored_attempt(attempt: &Attempt) -> String {
    attempt
        .tiles()
        .iter()
        .map(|tile| {
            let letter = tile.letter().unwrap_or('_');
            paint(&format!(" {letter} "), tile.status()).to_string()
        })
        .collect()
}

/// Render the keyboard legend, one row per line
#[must_use]
pub fn colored_keyboard(legend: &Legend) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| paint(&format!("{letter} "), legend.status(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print every committed row of the board followed by the keyboard
pub fn print_board(snapshot: &Snapshot) {
    println!();
    for attempt in snapshot.attempts.iter().filter(|a| a.is_evaluated()) {
        println!("  {}", colored_attempt(attempt));
    }
    println!();
    println!("{}", colored_keyboard(&snapshot.legend));
    println!();
}

/// Print the final result and share grid
pub fn print_result(snapshot: &Snapshot, answer: &str, max_attempts: usize) {
    println!("{}", "─".repeat(40).cyan());
    if snapshot.state == GameState::Won {
        println!(
            "{}",
            format!("✅ Solved in {} of {max_attempts}!", snapshot.attempts.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{} {}",
            "❌ Out of attempts. The word was".red().bold(),
            answer.bright_yellow().bold()
        );
    }
    println!();
    println!("{}", share_grid(&snapshot.attempts, snapshot.state, max_attempts));
    println!("{}", "─".repeat(40).cyan());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::evaluate_word;

    #[test]
    fn colored_attempt_contains_letters() {
        colored::control::set_override(false);
        let row = evaluate_word(&Word::new("ghast").unwrap(), &Word::new("ghost").unwrap())
            .unwrap();
        assert_eq!(colored_attempt(&row), " G  H  O  S  T ");
        assert_eq!(colored_attempt(&Attempt::new(2)), " _  _ ");
    }

    #[test]
    fn keyboard_has_three_rows() {
        colored::control::set_override(false);
        let keyboard = colored_keyboard(&Legend::default());
        let lines: Vec<&str> = keyboard.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Q W E"));
        assert!(lines[2].starts_with("  Z X"));
    }
}
