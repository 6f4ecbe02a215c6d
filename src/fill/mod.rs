use std::{ops::Range, str::FromStr};

use crate::{
    dictionary::Dictionary,
    error::WordSquareError,
    square::WordSquare,
};

pub mod exhaustive;
pub mod heuristic;

/// Candidate rows between progress reports.
pub(crate) const PROGRESS_INTERVAL: usize = 10_000;

pub trait Filler {
    /// The first word square found in this filler's search order, or `None`
    /// once that order is exhausted.
    fn fill(&mut self) -> Option<WordSquare>;

    /// Candidate rows evaluated so far.
    fn candidate_count(&self) -> usize;
}

/// Which first-column words `solve_for_word` tries.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    /// The first-row word doubles as the first column.
    Diagonal,
    /// Every other word sharing the first-row word's initial.
    FirstColumn,
    /// `Diagonal`, then `FirstColumn`.
    Both,
}

impl Phase {
    pub fn includes_diagonal(self) -> bool {
        matches!(self, Phase::Diagonal | Phase::Both)
    }

    pub fn includes_first_column(self) -> bool {
        matches!(self, Phase::FirstColumn | Phase::Both)
    }
}

impl FromStr for Phase {
    type Err = WordSquareError;

    fn from_str(s: &str) -> Result<Phase, WordSquareError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "diagonal" => Ok(Phase::Diagonal),
            "2" | "first-column" => Ok(Phase::FirstColumn),
            "both" => Ok(Phase::Both),
            other => Err(WordSquareError::InvalidConfiguration(format!(
                "Unknown phase {:?}, expected 1, 2 or both",
                other
            ))),
        }
    }
}

/// Checks the partial columns in `columns` of `rows`, stopping at the first
/// one that can no longer become a word.
///
/// `buffer` is scratch space reused across calls.
pub(crate) fn columns_viable(
    dictionary: &Dictionary,
    rows: &[&str],
    columns: Range<usize>,
    buffer: &mut String,
) -> bool {
    for column in columns {
        buffer.clear();
        buffer.extend(rows.iter().map(|row| row.as_bytes()[column] as char));

        if !dictionary.is_viable(buffer) {
            return false;
        }
    }
    true
}
