//! Word squares: N x N grids of letters in which every row, read left to
//! right, and every column, read top to bottom, is a dictionary word.
//!
//! A [`Dictionary`] indexes the N-letter words of a word list by prefix, and
//! a [`Filler`] searches it for a [`WordSquare`].

pub mod config;
pub mod dictionary;
pub mod error;
pub mod fill;
pub mod source;
pub mod square;

pub use crate::{
    dictionary::Dictionary,
    error::{Result, WordSquareError},
    fill::{exhaustive::ExhaustiveFiller, heuristic::HeuristicFiller, Filler, Phase},
    square::WordSquare,
};

/// About five hundred common five-letter words, plus a few entries the
/// dictionary rejects.
pub const BUNDLED_WORD_LIST: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/common_words.txt");
