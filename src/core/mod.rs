//! Core domain types for the puzzle
//!
//! Pure value types with no I/O: words, tiles, their statuses, and attempts.

mod attempt;
mod status;
mod tile;
mod word;

pub use attempt::Attempt;
pub use status::LetterStatus;
pub use tile::Tile;
pub use word::{Word, WordError};
