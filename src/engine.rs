//! Guess evaluation
//!
//! Scores a filled attempt against the answer, one verdict per tile, with
//! repeated letters credited no more often than the answer contains them.
//!
//! # Algorithm
//! 1. First pass: exact matches become `Correct`; letters missing from the
//!    answer become `Absent`; everything else is tentatively partial.
//! 2. Second pass: for each letter, the answer's count minus its `Correct`
//!    tiles is the number of `Present` credits left. Partial tiles claim those
//!    credits left to right; once a letter runs out, later tiles are `Absent`.

use crate::core::{Attempt, LetterStatus, Tile, Word};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Reasons a candidate cannot be evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// At least one tile has no letter
    #[error("attempt is incomplete: only {filled} of {width} tiles are filled")]
    Incomplete { filled: usize, width: usize },
    /// Candidate and answer lengths differ
    #[error("attempt has {candidate} tiles but the answer has {answer} letters")]
    LengthMismatch { answer: usize, candidate: usize },
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum FirstPass {
    Correct,
    Absent,
    Partial,
}

/// Evaluate `candidate` against `answer`
///
/// Returns a new attempt whose tiles all carry `Correct`, `Present` or
/// `Absent`. The function is pure; the same inputs always give the same
/// output.
///
/// # Errors
/// - [`EvaluationError::LengthMismatch`] if the widths differ
/// - [`EvaluationError::Incomplete`] if any tile is empty
///
/// # Examples
/// ```
/// use wordgame::core::{Attempt, LetterStatus::*, Word};
/// use wordgame::engine::evaluate;
///
/// let answer = Word::new("ghast").unwrap();
/// let guess = Attempt::from_word(&Word::new("shout").unwrap());
/// let scored = evaluate(&answer, &guess).unwrap();
///
/// assert_eq!(scored.statuses(), [Present, Correct, Absent, Absent, Correct]);
/// ```
pub fn evaluate(answer: &Word, candidate: &Attempt) -> Result<Attempt, EvaluationError> {
    if candidate.width() != answer.len() {
        return Err(EvaluationError::LengthMismatch {
            answer: answer.len(),
            candidate: candidate.width(),
        });
    }

    let letters: Vec<char> = candidate
        .tiles()
        .iter()
        .map_while(|tile| tile.letter())
        .map(|letter| letter.to_ascii_uppercase())
        .collect();
    if letters.len() != candidate.width() {
        return Err(EvaluationError::Incomplete {
            filled: letters.len(),
            width: candidate.width(),
        });
    }

    let first: Vec<FirstPass> = letters
        .iter()
        .zip(answer.letters())
        .map(|(&letter, expected)| {
            if letter == expected {
                FirstPass::Correct
            } else if answer.has_letter(letter) {
                FirstPass::Partial
            } else {
                FirstPass::Absent
            }
        })
        .collect();

    // Credits left per letter once exact matches are taken out
    let mut credits = answer.letter_counts();
    for (&letter, _) in letters
        .iter()
        .zip(&first)
        .filter(|(_, pass)| **pass == FirstPass::Correct)
    {
        if let Some(count) = credits.get_mut(&letter) {
            *count = count.saturating_sub(1);
        }
    }

    let tiles = letters
        .iter()
        .zip(&first)
        .map(|(&letter, pass)| {
            let status = match pass {
                FirstPass::Correct => LetterStatus::Correct,
                FirstPass::Absent => LetterStatus::Absent,
                FirstPass::Partial => claim_credit(&mut credits, letter),
            };
            Tile::scored(letter, status)
        })
        .collect();

    Ok(Attempt::from_tiles(tiles))
}

/// Evaluate a plain word against the answer
///
/// # Errors
/// Returns [`EvaluationError::LengthMismatch`] if the lengths differ.
pub fn evaluate_word(answer: &Word, guess: &Word) -> Result<Attempt, EvaluationError> {
    evaluate(answer, &Attempt::from_word(guess))
}

fn claim_credit(credits: &mut FxHashMap<char, usize>, letter: char) -> LetterStatus {
    match credits.get_mut(&letter) {
        Some(count) if *count > 0 => {
            *count -= 1;
            LetterStatus::Present
        }
        _ => LetterStatus::Absent,
    }
}
