use std::time::Instant;

use log::{debug, trace};

use crate::{dictionary::Dictionary, square::WordSquare};

use super::{columns_viable, Filler, Phase, PROGRESS_INTERVAL};

/// Two-phase word square search.
///
/// Rows are filled top to bottom against a guessed first column. Each row
/// takes the first word that keeps every column a live prefix, and a row with
/// no such word abandons the guess instead of revisiting earlier rows. That
/// keeps the search fast but means it can miss squares an exhaustive search
/// would find (see [`super::exhaustive::ExhaustiveFiller`]).
pub struct HeuristicFiller<'s> {
    dictionary: &'s Dictionary,
    candidate_count: usize,
    start: Instant,
}

impl<'s> HeuristicFiller<'s> {
    pub fn new(dictionary: &'s Dictionary) -> HeuristicFiller<'s> {
        HeuristicFiller {
            dictionary,
            candidate_count: 0,
            start: Instant::now(),
        }
    }

    /// Fills the grid with `first_row` across the top, assuming the first
    /// column reads `first_column`.
    pub fn attempt(&mut self, first_row: &str, first_column: &str) -> Option<WordSquare> {
        let dictionary = self.dictionary;
        let dimension = dictionary.dimension();
        if first_row.len() != dimension || first_column.len() != dimension {
            return None;
        }

        let mut rows: Vec<&str> = Vec::with_capacity(dimension);
        rows.push(first_row);
        let mut buffer = String::with_capacity(dimension);

        for row in 1..dimension {
            let initial = first_column.get(row..=row)?;
            let mut accepted = false;

            for candidate in dictionary.with_prefix(initial) {
                self.count_candidate();
                rows.push(candidate);

                if columns_viable(dictionary, &rows, 1..dimension, &mut buffer) {
                    accepted = true;
                    break;
                }
                rows.pop();
            }

            if !accepted {
                trace!(
                    "{} / {}: nothing fits row {}",
                    first_row,
                    first_column,
                    row
                );
                return None;
            }
        }

        Some(WordSquare::from_rows(rows))
    }

    pub fn solve_for_word(&mut self, first_row: &str, phase: Phase) -> Option<WordSquare> {
        if phase.includes_diagonal() {
            if let Some(square) = self.attempt(first_row, first_row) {
                return Some(square);
            }
        }

        if phase.includes_first_column() {
            let dictionary = self.dictionary;
            let initial = first_row.get(..1)?;

            for first_column in dictionary.with_prefix(initial) {
                if first_column == first_row {
                    continue;
                }
                if let Some(square) = self.attempt(first_row, first_column) {
                    return Some(square);
                }
            }
        }

        None
    }

    /// Tries every word as first row with the diagonal guess, then every word
    /// again against every compatible first column.
    pub fn solve(&mut self) -> Option<WordSquare> {
        let dictionary = self.dictionary;
        debug!("Starting solver on {} words", dictionary.len());

        for (phase_number, phase) in [(1, Phase::Diagonal), (2, Phase::FirstColumn)] {
            for word in dictionary.words() {
                if let Some(square) = self.solve_for_word(word, phase) {
                    debug!(
                        "Finished in phase {} after {} candidates ({}ms)",
                        phase_number,
                        self.candidate_count,
                        self.start.elapsed().as_millis()
                    );
                    return Some(square);
                }
            }
            debug!(
                "Phase {} exhausted after {} candidates",
                phase_number, self.candidate_count
            );
        }

        None
    }

    fn count_candidate(&mut self) {
        self.candidate_count += 1;

        if self.candidate_count % PROGRESS_INTERVAL == 0 {
            debug!(
                "Throughput: {} candidates/ms",
                self.candidate_count as f32 / self.start.elapsed().as_millis().max(1) as f32
            );
        }
    }
}

impl Filler for HeuristicFiller<'_> {
    fn fill(&mut self) -> Option<WordSquare> {
        self.solve()
    }

    fn candidate_count(&self) -> usize {
        self.candidate_count
    }
}
