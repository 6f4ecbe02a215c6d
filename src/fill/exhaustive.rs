use std::time::Instant;

use log::debug;

use crate::{dictionary::Dictionary, square::WordSquare};

use super::{columns_viable, Filler, PROGRESS_INTERVAL};

/// Depth-first search over whole grids: every row may take any word that
/// keeps all columns, the first one included, live prefixes.
///
/// Unlike [`super::heuristic::HeuristicFiller`] it revisits earlier rows, so
/// it finds a square whenever the dictionary holds one.
pub struct ExhaustiveFiller<'s> {
    dictionary: &'s Dictionary,
    candidate_count: usize,
}

impl<'s> ExhaustiveFiller<'s> {
    pub fn new(dictionary: &'s Dictionary) -> ExhaustiveFiller<'s> {
        ExhaustiveFiller {
            dictionary,
            candidate_count: 0,
        }
    }

    /// Words whose initial keeps the first column a live prefix below `rows`.
    fn next_rows(&self, rows: &[&str]) -> Vec<&'s str> {
        let dictionary = self.dictionary;
        let mut column: String = rows.iter().map(|row| row.as_bytes()[0] as char).collect();

        let mut result = vec![];
        for letter in b'A'..=b'Z' {
            column.push(letter as char);
            if dictionary.has_prefix(&column) {
                result.extend(dictionary.with_prefix(&column[column.len() - 1..]));
            }
            column.pop();
        }
        result
    }
}

impl Filler for ExhaustiveFiller<'_> {
    fn fill(&mut self) -> Option<WordSquare> {
        let start = Instant::now();
        let dictionary = self.dictionary;
        let dimension = dictionary.dimension();
        let mut buffer = String::with_capacity(dimension);

        // popped last-in first-out, so pushed in reverse to explore in word order
        let mut candidates: Vec<Vec<&str>> =
            dictionary.words().rev().map(|word| vec![word]).collect();

        while let Some(candidate) = candidates.pop() {
            if candidate.len() == dimension {
                debug!(
                    "Evaluated {} candidates in {}ms",
                    self.candidate_count,
                    start.elapsed().as_millis()
                );
                return Some(WordSquare::from_rows(candidate));
            }

            let mut extensions = vec![];
            for next_row in self.next_rows(&candidate) {
                self.candidate_count += 1;
                if self.candidate_count % PROGRESS_INTERVAL == 0 {
                    debug!(
                        "Throughput: {} candidates/ms",
                        self.candidate_count as f32 / start.elapsed().as_millis().max(1) as f32
                    );
                }

                let mut new_candidate = candidate.clone();
                new_candidate.push(next_row);
                if columns_viable(dictionary, &new_candidate, 0..dimension, &mut buffer) {
                    extensions.push(new_candidate);
                }
            }
            candidates.extend(extensions.into_iter().rev());
        }

        debug!(
            "No square after {} candidates in {}ms",
            self.candidate_count,
            start.elapsed().as_millis()
        );
        None
    }

    fn candidate_count(&self) -> usize {
        self.candidate_count
    }
}
