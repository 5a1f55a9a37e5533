//! Fixed-size board view

use crate::core::Attempt;

/// The attempt list padded with empty rows to the full board height
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Attempt>,
}

impl Board {
    /// Pad `attempts` to `height` rows of `width` tiles
    #[must_use]
    pub fn new(attempts: &[Attempt], height: usize, width: usize) -> Self {
        let mut rows = attempts.to_vec();
        rows.resize_with(height.max(attempts.len()), || Attempt::new(width));
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Attempt] {
        &self.rows
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Attempt::width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, Word};

    #[test]
    fn empty_board_has_blank_rows() {
        let board = Board::new(&[], 6, 5);
        assert_eq!(board.rows().len(), 6);
        assert_eq!(board.width(), 5);
        assert!(board.rows().iter().all(Attempt::is_empty));
    }

    #[test]
    fn attempts_fill_rows_from_top() {
        let row = Attempt::from_word(&Word::new("ghost").unwrap());
        let board = Board::new(&[row.clone()], 6, 5);
        assert_eq!(board.rows()[0], row);
        assert_eq!(board.rows()[1].tiles()[0].status(), LetterStatus::Unset);
    }
}
