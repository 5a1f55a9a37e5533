//! Command implementations

pub mod evaluate;
pub mod simple;

pub use evaluate::{print_score, score_guess};
pub use simple::{LineResult, play_line, run_simple};
