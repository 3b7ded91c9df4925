use std::fs;
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use log::{debug, info};
use typed_builder::TypedBuilder;

use crate::error::Error;
use crate::wordlist::dictionary::Dictionary;

/// Raw words read from a text source, before any admission filtering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

/// Layout of a word-list file.
///
/// With no delimiter the whole text is split on whitespace. With a
/// delimiter every non-blank line is split on it and `word_column` picks
/// the word, e.g. `delimiter(';')` for `entry;score` lists.
#[derive(TypedBuilder, Clone, Debug)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: usize,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize, delimiter: char) -> Result<&'a str, Error> {
        line.split(delimiter)
            .nth(self.word_column)
            .map(str::trim)
            .ok_or_else(|| Error::MissingColumn {
                line: line_no,
                column: self.word_column,
                content: line.to_string(),
            })
    }
}

impl Wordlist {
    pub fn parse(text: &str, format: &FileFormat) -> Result<Wordlist, Error> {
        let words = match format.delimiter {
            None => text.split_whitespace().map(str::to_string).collect(),
            Some(delimiter) => {
                let mut words = vec![];
                for (idx, line) in text.lines().enumerate() {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let word = format.parse_line(line, idx + 1, delimiter)?;
                    if !word.is_empty() {
                        words.push(word.to_string());
                    }
                }
                words
            }
        };
        Ok(Wordlist { words })
    }

    /// Reads the whole file before splitting it.
    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Wordlist, Error> {
        let path = path.as_ref();
        debug!("Reading words from {:?}", path);

        let start = Instant::now();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let wordlist = Wordlist::parse(&text, format)?;

        info!("Read {} words from {} in {:.3}s",
              wordlist.len(), path.display(), start.elapsed().as_secs_f64());
        Ok(wordlist)
    }

    delegate! {
        to self.words {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl From<Wordlist> for Dictionary {
    fn from(wordlist: Wordlist) -> Self {
        Dictionary::new(wordlist.words)
    }
}

/// Reads whitespace-separated tokens from `path`.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Error> {
    Wordlist::from_file(path, &FileFormat::default()).map(Wordlist::into_words)
}
