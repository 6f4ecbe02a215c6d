use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use serde_json::Value;

use crate::error::{Result, WordSquareError};

/// Reads one candidate word per line.
///
/// Lines are trimmed and blank lines dropped. Bytes that are not UTF-8 are
/// replaced rather than rejected, since the index throws those words away
/// anyway.
pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = vec![];

    for line in reader.split(b'\n') {
        let line = line?;
        let word = String::from_utf8_lossy(&line);
        let word = word.trim();
        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }

    Ok(words)
}

/// Loads raw candidates from a word list file.
///
/// `.json` files hold either an array of words or an object keyed by word;
/// anything else is read line by line.
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(WordSquareError::DictionaryNotFound {
            path: path.to_owned(),
        });
    }

    let file = File::open(path).map_err(|source| WordSquareError::ReadDictionary {
        path: path.to_owned(),
        source,
    })?;
    let reader = BufReader::new(file);

    let is_json = path
        .extension()
        .map_or(false, |extension| extension.eq_ignore_ascii_case("json"));
    if !is_json {
        return read_words(reader).map_err(|source| WordSquareError::ReadDictionary {
            path: path.to_owned(),
            source,
        });
    }

    let json: Value =
        serde_json::from_reader(reader).map_err(|source| WordSquareError::ParseWordList {
            path: path.to_owned(),
            source,
        })?;

    match json {
        Value::Object(obj) => Ok(obj.keys().cloned().collect()),
        Value::Array(values) => values
            .into_iter()
            .map(|value| match value {
                Value::String(word) => Ok(word),
                _ => Err(WordSquareError::InvalidWordList {
                    path: path.to_owned(),
                }),
            })
            .collect(),
        _ => Err(WordSquareError::InvalidWordList {
            path: path.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Cursor};

    use tempfile::TempDir;

    use super::{load_words, read_words};
    use crate::error::WordSquareError;

    #[test]
    fn read_words_trims_and_skips_blank_lines() {
        let input = Cursor::new(b"heart\r\n  ember \n\n\t\nabuse".to_vec());

        assert_eq!(
            vec!["heart", "ember", "abuse"],
            read_words(input).unwrap()
        );
    }

    #[test]
    fn read_words_tolerates_invalid_utf8() {
        let input = Cursor::new(b"na\xefve\nresin\n".to_vec());
        let words = read_words(input).unwrap();

        assert_eq!(2, words.len());
        assert_eq!("resin", words[1]);
    }

    #[test]
    fn load_words_reads_plain_lists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words");
        fs::write(&path, "heart\nember\n").unwrap();

        assert_eq!(vec!["heart", "ember"], load_words(&path).unwrap());
    }

    #[test]
    fn load_words_reads_json_arrays_and_objects() {
        let dir = TempDir::new().unwrap();

        let array = dir.path().join("array.json");
        fs::write(&array, r#"["heart", "ember"]"#).unwrap();
        assert_eq!(vec!["heart", "ember"], load_words(&array).unwrap());

        let object = dir.path().join("object.JSON");
        fs::write(&object, r#"{"abuse": 50, "resin": 40}"#).unwrap();
        let mut words = load_words(&object).unwrap();
        words.sort();
        assert_eq!(vec!["abuse", "resin"], words);
    }

    #[test]
    fn load_words_rejects_bad_json() {
        let dir = TempDir::new().unwrap();

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "[\"heart\"").unwrap();
        assert!(matches!(
            load_words(&broken),
            Err(WordSquareError::ParseWordList { .. })
        ));

        let numbers = dir.path().join("numbers.json");
        fs::write(&numbers, "[1, 2, 3]").unwrap();
        assert!(matches!(
            load_words(&numbers),
            Err(WordSquareError::InvalidWordList { .. })
        ));
    }

    #[test]
    fn load_words_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope");

        assert!(matches!(
            load_words(&path),
            Err(WordSquareError::DictionaryNotFound { .. })
        ));
    }
}
