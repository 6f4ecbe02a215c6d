use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WordSquareError>;

#[derive(Error, Debug)]
pub enum WordSquareError {
    #[error("Dictionary not found: {path}")]
    DictionaryNotFound { path: PathBuf },

    #[error("Failed to read dictionary {path}")]
    ReadDictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse JSON word list {path}")]
    ParseWordList {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON word list {path} must be an array of strings or an object keyed by word")]
    InvalidWordList { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
}
