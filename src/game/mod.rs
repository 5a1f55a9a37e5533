//! Game flow: the attempt state machine and the views derived from it
//!
//! Everything here is recomputed from the attempt list on demand; nothing is
//! cached between inputs.

mod board;
mod legend;
mod machine;

pub use board::Board;
pub use legend::{Legend, best_status};
pub use machine::{Game, GameState, Input, Observer, Outcome, RestoreError, Snapshot};
