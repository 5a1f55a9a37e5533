//! Interactive terminal UI

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, key_name, run_tui};
pub use rendering::{tile_style, ui};
