use std::{fmt, str::FromStr};

use crate::{
    dictionary::Dictionary,
    error::{Result, WordSquareError},
};

/// A filled grid, stored row-major as one word per row.
#[derive(PartialEq, Eq, Debug, Hash, Clone)]
pub struct WordSquare {
    rows: Vec<String>,
}

impl WordSquare {
    pub fn from_rows<I, S>(rows: I) -> WordSquare
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordSquare {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    pub fn column(&self, index: usize) -> String {
        self.line(Direction::Down, index).collect()
    }

    pub fn line(&self, direction: Direction, index: usize) -> GridLineIterator<'_> {
        GridLineIterator::new(self, direction, index)
    }

    fn is_square(&self) -> bool {
        let dimension = self.dimension();
        dimension > 0 && self.rows.iter().all(|row| row.len() == dimension)
    }

    /// Every row and every column is a word of `dictionary`.
    pub fn is_valid(&self, dictionary: &Dictionary) -> bool {
        if !self.is_square() || self.dimension() != dictionary.dimension() {
            return false;
        }

        (0..self.dimension()).all(|index| {
            dictionary.contains(&self.rows[index]) && dictionary.contains(&self.column(index))
        })
    }
}

/// Letters of one across or down line, read left to right or top to bottom.
#[derive(Clone, Debug)]
pub struct GridLineIterator<'s> {
    square: &'s WordSquare,
    direction: Direction,
    line: usize,
    index: usize,
}

impl<'s> GridLineIterator<'s> {
    pub fn new(square: &'s WordSquare, direction: Direction, line: usize) -> GridLineIterator<'s> {
        GridLineIterator {
            square,
            direction,
            line,
            index: 0,
        }
    }
}

impl Iterator for GridLineIterator<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let (row, col) = match self.direction {
            Direction::Across => (self.line, self.index),
            Direction::Down => (self.index, self.line),
        };

        let result = *self.square.rows.get(row)?.as_bytes().get(col)? as char;
        self.index += 1;
        Some(result)
    }
}

impl fmt::Display for WordSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows.iter().enumerate() {
            if row_index != 0 {
                writeln!(f)?;
            }
            for (col, c) in row.chars().enumerate() {
                if col != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

impl FromStr for WordSquare {
    type Err = WordSquareError;

    /// Accepts the `Display` rendering as well as unspaced rows.
    fn from_str(contents: &str) -> Result<WordSquare> {
        let rows: Vec<String> = contents
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<String>()
            })
            .filter(|row| !row.is_empty())
            .map(|row| row.to_ascii_uppercase())
            .collect();

        if rows.is_empty() {
            return Err(WordSquareError::InvalidGrid(String::from("Grid is empty.")));
        }
        if let Some(row) = rows
            .iter()
            .find(|row| !row.bytes().all(|b| b.is_ascii_alphabetic()))
        {
            return Err(WordSquareError::InvalidGrid(format!(
                "Row {} contains something other than letters.",
                row
            )));
        }

        let square = WordSquare { rows };
        if !square.is_square() {
            return Err(WordSquareError::InvalidGrid(String::from(
                "Contents are not a square.",
            )));
        }
        Ok(square)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Across,
    Down,
}

#[cfg(test)]
mod tests {
    use super::{Direction, WordSquare};
    use crate::{dictionary::Dictionary, error::WordSquareError};

    fn heart() -> WordSquare {
        WordSquare::from_rows(vec!["HEART", "EMBER", "ABUSE", "RESIN", "TREND"])
    }

    #[test]
    fn line_iterator_works() {
        let square = WordSquare::from_rows(vec!["ABC", "DEF", "GHI"]);

        let s: String = square.line(Direction::Across, 1).collect();
        assert_eq!(String::from("DEF"), s);

        let s: String = square.line(Direction::Down, 2).collect();
        assert_eq!(String::from("CFI"), s);

        assert_eq!(0, square.line(Direction::Down, 3).count());
    }

    #[test]
    fn display_works() {
        let square = WordSquare::from_rows(vec!["AT", "TO"]);

        assert_eq!("A T\nT O", square.to_string());
    }

    #[test]
    fn parse_works() {
        let square: WordSquare = "
h e a r t
e m b e r
abuse

r e s i n
t r e n d
"
        .parse()
        .unwrap();

        assert_eq!(heart(), square);
        assert_eq!(heart(), heart().to_string().parse::<WordSquare>().unwrap());
    }

    #[test]
    fn parse_rejects_bad_grids() {
        assert!(matches!(
            "".parse::<WordSquare>(),
            Err(WordSquareError::InvalidGrid(_))
        ));
        assert!(matches!(
            "AB\nCD\nEF".parse::<WordSquare>(),
            Err(WordSquareError::InvalidGrid(_))
        ));
        assert!(matches!(
            "A1\nCD".parse::<WordSquare>(),
            Err(WordSquareError::InvalidGrid(_))
        ));
    }

    #[test]
    fn is_valid_works() {
        let dictionary = Dictionary::build(vec!["heart", "ember", "abuse", "resin", "trend"], 5);

        assert!(heart().is_valid(&dictionary));
        assert_eq!("TREND", heart().column(4));

        let broken = WordSquare::from_rows(vec!["HEART", "EMBER", "ABUSE", "TREND", "RESIN"]);
        assert!(!broken.is_valid(&dictionary));

        let small = Dictionary::build(vec!["at", "to"], 2);
        assert!(!heart().is_valid(&small));
    }
}
