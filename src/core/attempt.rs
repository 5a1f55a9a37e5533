//! One row of the board
//!
//! An `Attempt` has a fixed number of tiles chosen at construction. Filled tiles
//! always form a prefix; the position of the first empty tile is the cursor.

use super::{LetterStatus, Tile, Word};
use serde::{Deserialize, Serialize};

/// A fixed-width row of tiles
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Attempt {
    tiles: Box<[Tile]>,
}

impl Attempt {
    /// Create an empty attempt with `width` unset tiles
    ///
    /// # Panics
    /// Panics in debug mode if `width` is zero
    #[must_use]
    pub fn new(width: usize) -> Self {
        debug_assert!(width > 0, "attempt width must be positive");
        Self {
            tiles: vec![Tile::EMPTY; width].into_boxed_slice(),
        }
    }

    /// Create a fully filled, pending attempt spelling `word`
    ///
    /// # Examples
    /// ```
    /// use wordgame::core::{Attempt, Word};
    ///
    /// let attempt = Attempt::from_word(&Word::new("ghost").unwrap());
    /// assert!(attempt.is_full());
    /// assert_eq!(attempt.text(), "GHOST");
    /// ```
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        Self {
            tiles: word.letters().map(Tile::pending).collect(),
        }
    }

    pub(crate) fn from_tiles(tiles: Box<[Tile]>) -> Self {
        Self { tiles }
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.tiles.len()
    }

    /// Index of the first empty tile, or `width()` when full
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.tiles
            .iter()
            .position(|tile| !tile.is_filled())
            .unwrap_or(self.tiles.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursor() == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cursor() == self.tiles.len()
    }

    /// True once every tile carries a verdict
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.tiles.iter().all(|tile| tile.status().is_evaluated())
    }

    /// True when every tile is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .all(|tile| tile.status() == LetterStatus::Correct)
    }

    /// Statuses in tile order
    #[must_use]
    pub fn statuses(&self) -> Vec<LetterStatus> {
        self.tiles.iter().map(|tile| tile.status()).collect()
    }

    /// The entered letters, stopping at the cursor
    #[must_use]
    pub fn text(&self) -> String {
        self.tiles.iter().map_while(|tile| tile.letter()).collect()
    }

    /// Write `letter` at the cursor, or over the last tile when full
    pub(crate) fn put_letter(&mut self, letter: char) {
        let index = self.cursor().min(self.tiles.len() - 1);
        self.tiles[index] = Tile::pending(letter);
    }

    /// Clear the tile before the cursor. Returns false when nothing was cleared.
    pub(crate) fn delete_letter(&mut self) -> bool {
        match self.cursor() {
            0 => false,
            cursor => {
                self.tiles[cursor - 1] = Tile::EMPTY;
                true
            }
        }
    }
}

impl TryFrom<Vec<Tile>> for Attempt {
    type Error = String;

    fn try_from(tiles: Vec<Tile>) -> Result<Self, Self::Error> {
        if tiles.is_empty() {
            return Err("attempt must have at least one tile".to_string());
        }

        let filled = tiles.iter().take_while(|tile| tile.is_filled()).count();
        if tiles[filled..].iter().any(|tile| tile.is_filled()) {
            return Err("attempt has a gap between filled tiles".to_string());
        }

        let scored = tiles.iter().filter(|tile| tile.status().is_evaluated()).count();
        if scored != 0 && scored != tiles.len() {
            return Err("attempt mixes evaluated and unevaluated tiles".to_string());
        }

        Ok(Self {
            tiles: tiles.into_boxed_slice(),
        })
    }
}

impl From<Attempt> for Vec<Tile> {
    fn from(attempt: Attempt) -> Self {
        attempt.tiles.into_vec()
    }
}
