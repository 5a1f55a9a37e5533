//! A single letter slot

use super::LetterStatus;
use serde::{Deserialize, Serialize};

/// One letter slot: an optional letter and its status
///
/// The letter is `None` exactly when the status is `Unset`. Letters are always
/// upper-case ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawTile", into = "RawTile")]
pub struct Tile {
    letter: Option<char>,
    status: LetterStatus,
}

#[derive(Serialize, Deserialize)]
struct RawTile {
    letter: Option<char>,
    status: LetterStatus,
}

impl Tile {
    /// An empty, unset tile
    pub const EMPTY: Self = Self {
        letter: None,
        status: LetterStatus::Unset,
    };

    /// A tile holding an entered, not yet evaluated letter
    #[must_use]
    pub fn pending(letter: char) -> Self {
        Self {
            letter: Some(letter.to_ascii_uppercase()),
            status: LetterStatus::Pending,
        }
    }

    /// A filled tile with a verdict
    pub(crate) fn scored(letter: char, status: LetterStatus) -> Self {
        debug_assert!(status.is_evaluated());
        Self {
            letter: Some(letter.to_ascii_uppercase()),
            status,
        }
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn status(self) -> LetterStatus {
        self.status
    }

    /// True when a letter has been entered
    #[inline]
    #[must_use]
    pub const fn is_filled(self) -> bool {
        self.letter.is_some()
    }
}

impl TryFrom<RawTile> for Tile {
    type Error = String;

    fn try_from(raw: RawTile) -> Result<Self, Self::Error> {
        match (raw.letter, raw.status) {
            (None, LetterStatus::Unset) => Ok(Self::EMPTY),
            (None, status) => Err(format!("tile without a letter cannot be {status:?}")),
            (Some(_), LetterStatus::Unset) => Err("unset tile cannot hold a letter".to_string()),
            (Some(letter), status) if letter.is_ascii_alphabetic() => Ok(Self {
                letter: Some(letter.to_ascii_uppercase()),
                status,
            }),
            (Some(letter), _) => Err(format!("invalid tile letter {letter:?}")),
        }
    }
}

impl From<Tile> for RawTile {
    fn from(tile: Tile) -> Self {
        Self {
            letter: tile.letter,
            status: tile.status,
        }
    }
}
