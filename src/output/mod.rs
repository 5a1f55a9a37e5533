//! Terminal output formatting
//!
//! Display utilities for line mode and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{colored_attempt, colored_keyboard, print_board, print_result};
pub use formatters::{KEYBOARD_ROWS, attempt_to_emoji, share_grid};
