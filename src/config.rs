use std::{env, path::PathBuf};

use log::warn;

use crate::{
    error::{Result, WordSquareError},
    fill::Phase,
};

pub const DEFAULT_DIMENSION: usize = 5;
pub const DEFAULT_DICTIONARY: &str = "./words";
pub const ENV_DICTIONARY: &str = "WORDSQUARE_DICTIONARY";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Strategy {
    Heuristic,
    Exhaustive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dimension: usize,
    pub dictionary: PathBuf,
    pub strategy: Strategy,
    /// Restricts the search to one first-row word.
    pub first_word: Option<String>,
    pub phase: Phase,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dimension: DEFAULT_DIMENSION,
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            strategy: Strategy::Heuristic,
            first_word: None,
            phase: Phase::Both,
        }
    }
}

impl Config {
    /// Falls back to [`DEFAULT_DIMENSION`] for anything that is not a positive
    /// integer.
    pub fn parse_dimension(raw: Option<&str>) -> usize {
        let raw = match raw {
            Some(raw) => raw,
            None => return DEFAULT_DIMENSION,
        };

        match raw.trim().parse::<usize>() {
            Ok(dimension) if dimension > 0 => dimension,
            _ => {
                warn!("Invalid dimension {:?}, using {}", raw, DEFAULT_DIMENSION);
                DEFAULT_DIMENSION
            }
        }
    }

    /// Command line value, then `WORDSQUARE_DICTIONARY`, then `./words`.
    pub fn resolve_dictionary(arg: Option<&str>) -> Result<PathBuf> {
        let path = match arg {
            Some(arg) => PathBuf::from(arg),
            None => match env::var(ENV_DICTIONARY) {
                Ok(value) if !value.trim().is_empty() => PathBuf::from(value.trim()),
                _ => PathBuf::from(DEFAULT_DICTIONARY),
            },
        };

        if path.exists() && !path.is_file() {
            return Err(WordSquareError::InvalidConfiguration(format!(
                "Dictionary path is not a file: {}",
                path.display()
            )));
        }
        Ok(path)
    }

    pub fn parse_phase(raw: Option<&str>) -> Result<Phase> {
        raw.map_or(Ok(Phase::Both), |raw| raw.parse())
    }
}
