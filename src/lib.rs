//! Wordgame
//!
//! A daily word puzzle: guess the hidden word in a fixed number of attempts,
//! with per-letter feedback that handles repeated letters correctly.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgame::core::{LetterStatus, Word};
//! use wordgame::game::{Game, GameState, Input};
//!
//! let mut game = Game::new(Word::new("ghast").unwrap(), 6);
//! for letter in "hoist".chars() {
//!     game.handle(Input::Character(letter));
//! }
//! game.handle(Input::Submit);
//!
//! assert_eq!(game.attempts()[0].tiles()[0].status(), LetterStatus::Present);
//! assert_eq!(game.state(), GameState::BuildingAttempt);
//! ```

// Core domain types
pub mod core;

// Guess evaluation
pub mod engine;

// Attempt state machine and derived views
pub mod game;

// Key name normalization
pub mod input;

// Saved sessions
pub mod session;

// Settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
