//! Best-known status per letter, for coloring the on-screen keyboard

use crate::core::{Attempt, LetterStatus};
use rustc_hash::FxHashMap;

/// Best verdict seen for `letter` across all evaluated tiles
///
/// `Correct` beats `Present`, which beats `Absent`. Letters never scored, or
/// only present in the attempt still being typed, are `Unset`.
///
/// # Examples
/// ```
/// use wordgame::core::{LetterStatus, Word};
/// use wordgame::engine::evaluate_word;
/// use wordgame::game::best_status;
///
/// let answer = Word::new("ghast").unwrap();
/// let row = evaluate_word(&answer, &Word::new("hoist").unwrap()).unwrap();
///
/// assert_eq!(best_status(&[row.clone()], 'H'), LetterStatus::Present);
/// assert_eq!(best_status(&[row.clone()], 'O'), LetterStatus::Absent);
/// assert_eq!(best_status(&[row], 'Z'), LetterStatus::Unset);
/// ```
#[must_use]
pub fn best_status(attempts: &[Attempt], letter: char) -> LetterStatus {
    Legend::from_attempts(attempts).status(letter)
}

/// Best-known status for every letter that has been scored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Legend {
    statuses: FxHashMap<char, LetterStatus>,
}

impl Legend {
    /// Recompute the legend from the full attempt history
    #[must_use]
    pub fn from_attempts(attempts: &[Attempt]) -> Self {
        let mut statuses = FxHashMap::default();
        for tile in attempts.iter().flat_map(Attempt::tiles) {
            if let Some(letter) = tile.letter() {
                if !tile.status().is_evaluated() {
                    continue;
                }
                let best = statuses.entry(letter).or_insert(LetterStatus::Unset);
                if tile.status().legend_rank() > best.legend_rank() {
                    *best = tile.status();
                }
            }
        }
        Self { statuses }
    }

    /// Status for `letter`, `Unset` when never scored
    #[must_use]
    pub fn status(&self, letter: char) -> LetterStatus {
        self.statuses
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::evaluate_word;
    use LetterStatus::*;

    fn rows(answer: &str, guesses: &[&str]) -> Vec<Attempt> {
        let answer = Word::new(answer).unwrap();
        guesses
            .iter()
            .map(|g| evaluate_word(&answer, &Word::new(g).unwrap()).unwrap())
            .collect()
    }

    #[test]
    fn correct_beats_earlier_present() {
        let history = rows("ghast", &["hangs", "ghost"]);
        assert_eq!(best_status(&history, 'H'), Correct);
        assert_eq!(best_status(&history, 'g'), Correct);
        assert_eq!(best_status(&history, 'A'), Present);
    }

    #[test]
    fn duplicate_downgrade_does_not_hide_credit() {
        // The second E in EERIE is Absent because SPEND has one E
        let history = rows("spend", &["eerie"]);
        assert_eq!(best_status(&history, 'E'), Present);
        assert_eq!(best_status(&history, 'R'), Absent);
    }

    #[test]
    fn exact_match_and_absent_copy_in_same_row() {
        let history = rows("crane", &["eerie"]);
        assert_eq!(best_status(&history, 'E'), Correct);
    }

    #[test]
    fn pending_tiles_are_ignored() {
        let mut typing = Attempt::new(5);
        typing.put_letter('q');
        assert_eq!(best_status(&[typing.clone()], 'Q'), Unset);
        assert_eq!(Legend::from_attempts(&[typing]).status('Q'), Unset);
    }

    #[test]
    fn legend_matches_best_status() {
        let history = rows("ghast", &["eerie", "hangs", "ghost", "sassy"]);
        let legend = Legend::from_attempts(&history);
        for letter in 'A'..='Z' {
            assert_eq!(legend.status(letter), best_status(&history, letter), "{letter}");
        }
    }
}
