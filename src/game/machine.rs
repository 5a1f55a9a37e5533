//! Attempt state machine
//!
//! `Game` owns the attempt list and applies one [`Input`] at a time. Each
//! accepted input produces a fresh [`Snapshot`] that is handed to every
//! subscribed [`Observer`]; rejected inputs change nothing and notify nobody.

use super::{Board, Legend};
use crate::core::{Attempt, Word};
use crate::engine::evaluate;
use thiserror::Error;
use tracing::{debug, error, info};

/// A normalized input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A single letter typed by the player
    Character(char),
    /// Remove the last entered letter
    Delete,
    /// Commit the current attempt
    Submit,
}

/// Phase of the game, derived from the attempt list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No row is being typed; the next letter starts one
    NoActiveAttempt,
    /// The last row is being typed
    BuildingAttempt,
    /// The last row evaluated to all `Correct`
    Won,
    /// Every row was used without a solve
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        match self {
            Self::Won | Self::Lost => true,
            Self::NoActiveAttempt | Self::BuildingAttempt => false,
        }
    }
}

/// What an input did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was not applicable in the current state
    Ignored,
    /// The row being typed changed
    Edited,
    /// The current row was evaluated and stored
    Committed(Attempt),
}

impl Outcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Read-only view of the game published after every accepted input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub attempts: Vec<Attempt>,
    pub state: GameState,
    pub board: Board,
    pub legend: Legend,
}

/// Receives a snapshot after every accepted input
pub trait Observer {
    fn on_update(&mut self, snapshot: &Snapshot);
}

impl<F: FnMut(&Snapshot)> Observer for F {
    fn on_update(&mut self, snapshot: &Snapshot) {
        self(snapshot);
    }
}

/// Reasons a stored attempt list cannot continue the current game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("{found} attempts stored but only {max} are allowed")]
    TooManyAttempts { found: usize, max: usize },
    #[error("attempt {index} has {found} tiles, expected {expected}")]
    WidthMismatch {
        index: usize,
        found: usize,
        expected: usize,
    },
    #[error("attempt {index} is not the last one but was never evaluated")]
    Unfinished { index: usize },
    #[error("attempt {index} follows a solved attempt")]
    PlayedAfterWin { index: usize },
    #[error("attempt {index} does not match the current answer")]
    ScoreMismatch { index: usize },
}

/// A single game: an answer, a bounded list of attempts, and observers
pub struct Game {
    answer: Word,
    max_attempts: usize,
    attempts: Vec<Attempt>,
    observers: Vec<Box<dyn Observer>>,
}

impl Game {
    /// Start an empty game
    ///
    /// # Panics
    /// Panics in debug mode if `max_attempts` is zero
    #[must_use]
    pub fn new(answer: Word, max_attempts: usize) -> Self {
        debug_assert!(max_attempts > 0, "max_attempts must be positive");
        Self {
            answer,
            max_attempts,
            attempts: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Continue a game from a stored attempt list
    ///
    /// Every committed attempt is re-scored against `answer`, so a list saved
    /// for a different answer is rejected.
    ///
    /// # Errors
    /// Returns `RestoreError` if the list breaks any board invariant.
    pub fn restore(
        answer: Word,
        max_attempts: usize,
        attempts: Vec<Attempt>,
    ) -> Result<Self, RestoreError> {
        if attempts.len() > max_attempts {
            return Err(RestoreError::TooManyAttempts {
                found: attempts.len(),
                max: max_attempts,
            });
        }

        let last = attempts.len().saturating_sub(1);
        for (index, attempt) in attempts.iter().enumerate() {
            if attempt.width() != answer.len() {
                return Err(RestoreError::WidthMismatch {
                    index,
                    found: attempt.width(),
                    expected: answer.len(),
                });
            }
            if index > 0 && attempts[index - 1].is_solved() {
                return Err(RestoreError::PlayedAfterWin { index });
            }
            if !attempt.is_evaluated() {
                if index != last {
                    return Err(RestoreError::Unfinished { index });
                }
                continue;
            }
            if evaluate(&answer, attempt).ok().as_ref() != Some(attempt) {
                return Err(RestoreError::ScoreMismatch { index });
            }
        }

        Ok(Self {
            answer,
            max_attempts,
            attempts,
            observers: Vec::new(),
        })
    }

    /// Register an observer for future updates
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Number of attempts already evaluated
    #[must_use]
    pub fn committed(&self) -> usize {
        self.attempts.iter().filter(|a| a.is_evaluated()).count()
    }

    /// Current phase, derived from the attempt list
    #[must_use]
    pub fn state(&self) -> GameState {
        match self.attempts.last() {
            None => GameState::NoActiveAttempt,
            Some(last) if last.is_solved() => GameState::Won,
            Some(last) if last.is_evaluated() => {
                if self.attempts.len() >= self.max_attempts {
                    GameState::Lost
                } else {
                    GameState::NoActiveAttempt
                }
            }
            Some(_) => GameState::BuildingAttempt,
        }
    }

    /// The row being typed, if any
    #[must_use]
    pub fn current(&self) -> Option<&Attempt> {
        match self.state() {
            GameState::BuildingAttempt => self.attempts.last(),
            GameState::NoActiveAttempt | GameState::Won | GameState::Lost => None,
        }
    }

    /// Build the read-only view handed to observers and renderers
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            attempts: self.attempts.clone(),
            state: self.state(),
            board: Board::new(&self.attempts, self.max_attempts, self.answer.len()),
            legend: Legend::from_attempts(&self.attempts),
        }
    }

    /// Apply one input and notify observers if it was accepted
    pub fn handle(&mut self, input: Input) -> Outcome {
        let outcome = match input {
            Input::Character(letter) => self.input_character(letter),
            Input::Delete => self.delete(),
            Input::Submit => self.submit(),
        };

        if outcome.is_accepted() {
            debug!(?input, state = ?self.state(), "input accepted");
            self.publish();
        }
        outcome
    }

    /// Apply a sequence of inputs, returning the last outcome
    pub fn handle_all(&mut self, inputs: impl IntoIterator<Item = Input>) -> Outcome {
        inputs
            .into_iter()
            .fold(Outcome::Ignored, |_, input| self.handle(input))
    }

    fn input_character(&mut self, letter: char) -> Outcome {
        if !letter.is_ascii_alphabetic() {
            return Outcome::Ignored;
        }
        match self.state() {
            GameState::Won | GameState::Lost => return Outcome::Ignored,
            GameState::NoActiveAttempt => self.attempts.push(Attempt::new(self.answer.len())),
            GameState::BuildingAttempt => {}
        }
        match self.attempts.last_mut() {
            Some(current) => {
                current.put_letter(letter);
                Outcome::Edited
            }
            None => Outcome::Ignored,
        }
    }

    fn delete(&mut self) -> Outcome {
        if self.state() != GameState::BuildingAttempt {
            return Outcome::Ignored;
        }
        match self.attempts.last_mut() {
            Some(current) => {
                if current.delete_letter() {
                    Outcome::Edited
                } else {
                    Outcome::Ignored
                }
            }
            None => Outcome::Ignored,
        }
    }

    fn submit(&mut self) -> Outcome {
        if self.state() != GameState::BuildingAttempt {
            return Outcome::Ignored;
        }
        let Some(current) = self.attempts.last_mut() else {
            return Outcome::Ignored;
        };
        if !current.is_full() {
            return Outcome::Ignored;
        }

        let scored = match evaluate(&self.answer, current) {
            Ok(scored) => scored,
            Err(err) => {
                error!(%err, "full attempt failed evaluation");
                return Outcome::Ignored;
            }
        };
        *current = scored.clone();

        match self.state() {
            GameState::Won => info!(attempts = self.attempts.len(), "game won"),
            GameState::Lost => info!(answer = %self.answer, "game lost"),
            GameState::NoActiveAttempt | GameState::BuildingAttempt => {
                self.attempts.push(Attempt::new(self.answer.len()));
            }
        }
        Outcome::Committed(scored)
    }

    fn publish(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_update(&snapshot);
        }
    }
}
