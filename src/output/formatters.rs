//! Formatting utilities for terminal output

use crate::core::Attempt;
use crate::game::GameState;

/// QWERTY layout used for the keyboard legend
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format an attempt's statuses as emoji squares
#[must_use]
pub fn attempt_to_emoji(attempt: &Attempt) -> String {
    attempt
        .tiles()
        .iter()
        .map(|tile| tile.status().emoji())
        .collect()
}

/// Shareable result grid for a finished game
///
/// The header shows the number of rows used, or `X` for a loss.
#[must_use]
pub fn share_grid(attempts: &[Attempt], state: GameState, max_attempts: usize) -> String {
    let score = match state {
        GameState::Won => attempts.len().to_string(),
        GameState::Lost | GameState::NoActiveAttempt | GameState::BuildingAttempt => {
            "X".to_string()
        }
    };

    let mut grid = format!("Wordgame {score}/{max_attempts}");
    for attempt in attempts.iter().filter(|a| a.is_evaluated()) {
        grid.push('\n');
        grid.push_str(&attempt_to_emoji(attempt));
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::evaluate_word;

    fn scored(answer: &str, guess: &str) -> Attempt {
        evaluate_word(&Word::new(answer).unwrap(), &Word::new(guess).unwrap()).unwrap()
    }

    #[test]
    fn emoji_row() {
        assert_eq!(attempt_to_emoji(&scored("ghast", "shout")), "🟨🟩⬛⬛🟩");
        assert_eq!(attempt_to_emoji(&Attempt::new(3)), "⬜⬜⬜");
    }

    #[test]
    fn share_grid_for_win() {
        let rows = vec![scored("ghast", "brick"), scored("ghast", "ghast")];
        assert_eq!(
            share_grid(&rows, GameState::Won, 6),
            "Wordgame 2/6\n⬛⬛⬛⬛⬛\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_grid_for_loss() {
        let rows = vec![scored("ghast", "brick"); 2];
        assert!(share_grid(&rows, GameState::Lost, 2).starts_with("Wordgame X/2\n"));
    }

    #[test]
    fn keyboard_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.concat().chars().collect();
        letters.sort_unstable();
        assert_eq!(letters, ('A'..='Z').collect::<Vec<_>>());
    }
}
