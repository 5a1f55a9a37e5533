//! Per-tile feedback status

use serde::{Deserialize, Serialize};

/// Status of a single tile
///
/// `Unset` and `Pending` describe tiles that have not been scored yet; the
/// other three are the terminal verdicts produced by evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    /// No letter entered yet
    #[default]
    Unset,
    /// Letter entered but not evaluated
    Pending,
    /// Right letter, right position
    Correct,
    /// Right letter, wrong position
    Present,
    /// Not in the answer, or all copies already accounted for
    Absent,
}

impl LetterStatus {
    /// True for the terminal verdicts `Correct`, `Present` and `Absent`
    #[inline]
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        match self {
            Self::Correct | Self::Present | Self::Absent => true,
            Self::Unset | Self::Pending => false,
        }
    }

    /// Precedence used by the keyboard legend: `Correct` > `Present` > `Absent` > rest
    #[inline]
    #[must_use]
    pub const fn legend_rank(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Unset | Self::Pending => 0,
        }
    }

    /// Square emoji for share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unset | Self::Pending => '⬜',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluated_statuses() {
        assert!(LetterStatus::Correct.is_evaluated());
        assert!(LetterStatus::Present.is_evaluated());
        assert!(LetterStatus::Absent.is_evaluated());
        assert!(!LetterStatus::Pending.is_evaluated());
        assert!(!LetterStatus::Unset.is_evaluated());
    }

    #[test]
    fn legend_precedence() {
        use LetterStatus::*;
        assert!(Correct.legend_rank() > Present.legend_rank());
        assert!(Present.legend_rank() > Absent.legend_rank());
        assert!(Absent.legend_rank() > Unset.legend_rank());
        assert_eq!(Pending.legend_rank(), Unset.legend_rank());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&LetterStatus::Present).unwrap();
        assert_eq!(json, "\"present\"");
        let back: LetterStatus = serde_json::from_str("\"absent\"").unwrap();
        assert_eq!(back, LetterStatus::Absent);
    }
}
