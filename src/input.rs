//! Raw key name normalization
//!
//! Front ends report keys by name ("Enter", "Backspace", "q", ...). Only three
//! shapes reach the game: a letter, submit, or delete. Everything else is
//! dropped here.

use crate::game::Input;

const SUBMIT_KEYS: &[&str] = &["ENTER", "Enter"];
const DELETE_KEYS: &[&str] = &["DEL", "Clear", "Backspace", "Cut", "Delete", "Escape"];

/// Map a key name to a game input
///
/// # Examples
/// ```
/// use wordgame::game::Input;
/// use wordgame::input::from_key_name;
///
/// assert_eq!(from_key_name("q"), Some(Input::Character('q')));
/// assert_eq!(from_key_name("Enter"), Some(Input::Submit));
/// assert_eq!(from_key_name("Backspace"), Some(Input::Delete));
/// assert_eq!(from_key_name("Shift"), None);
/// ```
#[must_use]
pub fn from_key_name(name: &str) -> Option<Input> {
    if SUBMIT_KEYS.contains(&name) {
        return Some(Input::Submit);
    }
    if DELETE_KEYS.contains(&name) {
        return Some(Input::Delete);
    }

    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => Some(Input::Character(letter)),
        _ => None,
    }
}

/// Turn a typed line into letter inputs followed by a submit
///
/// Non-letters in the line are skipped.
pub fn from_line(line: &str) -> impl Iterator<Item = Input> + '_ {
    line.chars()
        .filter(char::is_ascii_alphabetic)
        .map(Input::Character)
        .chain(std::iter::once(Input::Submit))
}
