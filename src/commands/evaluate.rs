//! One-shot scoring of a guess against an answer

use crate::core::{Attempt, Word};
use crate::engine::evaluate_word;
use crate::output::{attempt_to_emoji, colored_attempt};
use anyhow::{Context, Result};

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn score_guess(answer: &str, guess: &str) -> Result<Attempt> {
    let answer = Word::new(answer).with_context(|| format!("invalid answer {answer:?}"))?;
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let scored = evaluate_word(&answer, &guess)?;
    Ok(scored)
}

/// Print the scored guess as colored tiles and emoji
pub fn print_score(scored: &Attempt) {
    println!("{}", colored_attempt(scored));
    println!("{}", attempt_to_emoji(scored));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::*;

    #[test]
    fn scores_valid_words() {
        let scored = score_guess("ghast", "hoist").unwrap();
        assert_eq!(scored.statuses(), [Present, Absent, Absent, Correct, Correct]);
    }

    #[test]
    fn reports_invalid_input() {
        let err = score_guess("ghast", "gh0st").unwrap_err();
        assert!(err.to_string().contains("invalid guess"));

        let err = score_guess("ghast", "ghosts").unwrap_err();
        assert!(err.to_string().contains("6 tiles"));
    }
}
