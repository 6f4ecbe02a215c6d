use std::path::Path;

use log::info;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{error::Result, source::load_words};

/// Every valid word of one fixed length, plus a lookup from each prefix
/// (lengths 1..=dimension) to the words that start with it.
///
/// Words are stored upper-cased and iterate in ascending order, both from
/// [`Dictionary::words`] and from every [`Dictionary::with_prefix`] entry.
/// The index is never mutated after [`Dictionary::build`] returns, so a
/// shared reference can be handed to any number of fillers.
#[derive(Clone, Debug)]
pub struct Dictionary {
    dimension: usize,
    words: Vec<String>,
    members: FxHashSet<String>,
    prefixes: FxHashMap<String, Vec<usize>>,
}

impl Dictionary {
    /// Builds the index for `dimension`-letter words.
    ///
    /// Candidates are trimmed and upper-cased. Anything that is not exactly
    /// `dimension` ASCII letters is skipped without complaint.
    pub fn build<I, S>(candidates: I, dimension: usize) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut members = FxHashSet::default();

        for candidate in candidates {
            let word = candidate.as_ref().trim();
            if word.is_empty()
                || word.len() != dimension
                || !word.bytes().all(|b| b.is_ascii_alphabetic())
            {
                continue;
            }
            members.insert(word.to_ascii_uppercase());
        }

        let mut words: Vec<String> = members.iter().cloned().collect();
        words.sort_unstable();

        let mut prefixes: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (index, word) in words.iter().enumerate() {
            for length in 1..=dimension {
                prefixes
                    .entry(word[..length].to_owned())
                    .or_insert_with(Vec::new)
                    .push(index);
            }
        }

        Dictionary {
            dimension,
            words,
            members,
            prefixes,
        }
    }

    /// Reads a word list from `path` and indexes its `dimension`-letter words.
    pub fn load<P: AsRef<Path>>(path: P, dimension: usize) -> Result<Dictionary> {
        let candidates = load_words(path.as_ref())?;
        let dictionary = Dictionary::build(candidates, dimension);
        info!(
            "Loaded {} {}-letter words from {}",
            dictionary.len(),
            dimension,
            path.as_ref().display()
        );
        Ok(dictionary)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.members.contains(word)
    }

    /// True when at least one word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains_key(prefix)
    }

    /// Words starting with `prefix`, in ascending order.
    pub fn with_prefix<'s>(&'s self, prefix: &str) -> impl Iterator<Item = &'s str> + 's {
        let indices: &'s [usize] = self
            .prefixes
            .get(prefix)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        indices.iter().map(move |&index| self.words[index].as_str())
    }

    /// Whether a partially read column can still become a word: a full-length
    /// line has to be a word, a shorter one has to be a known prefix.
    pub fn is_viable(&self, line: &str) -> bool {
        if line.len() == self.dimension {
            self.contains(line)
        } else {
            self.has_prefix(line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Dictionary;

    #[test]
    fn build_works() {
        let dictionary = Dictionary::build(vec!["bass", "bats", "bess", "be", "Bass"], 4);

        assert_eq!(4, dictionary.dimension());
        assert_eq!(3, dictionary.len());
        assert_eq!(
            vec!["BASS", "BATS", "BESS"],
            dictionary.words().collect::<Vec<_>>()
        );
    }

    #[test]
    fn build_skips_malformed_entries() {
        let dictionary = Dictionary::build(
            vec![
                "  ember ",
                "don't",
                "x-ray",
                "naïve",
                "12345",
                "seventy",
                "",
                "heart",
            ],
            5,
        );

        assert_eq!(
            vec!["EMBER", "HEART"],
            dictionary.words().collect::<Vec<_>>()
        );
        assert!(!dictionary.contains("DON'T"));
        assert!(!dictionary.contains("NAÏVE"));
    }

    #[test]
    fn every_prefix_maps_to_its_word() {
        let words = vec!["heart", "ember", "abuse", "resin", "trend", "hello"];
        let dictionary = Dictionary::build(words.clone(), 5);

        for word in words {
            let word = word.to_ascii_uppercase();
            for length in 1..=5 {
                assert!(
                    dictionary.with_prefix(&word[..length]).any(|w| w == word),
                    "{} missing under {}",
                    word,
                    &word[..length]
                );
            }
        }
    }

    #[test]
    fn with_prefix_is_sorted() {
        let dictionary = Dictionary::build(vec!["hello", "heart", "abuse", "hence"], 5);

        assert_eq!(
            vec!["HEART", "HELLO", "HENCE"],
            dictionary.with_prefix("HE").collect::<Vec<_>>()
        );
        assert_eq!(
            vec!["HELLO"],
            dictionary.with_prefix("HELLO").collect::<Vec<_>>()
        );
        assert_eq!(0, dictionary.with_prefix("Z").count());
    }

    #[test]
    fn is_viable_works() {
        let dictionary = Dictionary::build(vec!["bass", "bats", "bess"], 4);

        assert!(dictionary.is_viable("B"));
        assert!(dictionary.is_viable("BA"));
        assert!(dictionary.is_viable("BES"));
        assert!(dictionary.is_viable("BATS"));
        assert!(!dictionary.is_viable("BO"));
        assert!(!dictionary.is_viable("BASE"));
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::build(Vec::<String>::new(), 3);

        assert!(dictionary.is_empty());
        assert!(!dictionary.has_prefix("A"));
        assert_eq!(0, dictionary.with_prefix("A").count());
    }
}
