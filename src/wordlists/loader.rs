//! Word list loading utilities
//!
//! Filters dictionary text down to fixed-length lowercase words and picks
//! secrets from the result.

use super::WordSourceError;
use crate::core::{Word, is_alpha};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Conventional location of the system word list
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Immutable pool of equal-length candidate words, in dictionary order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
    length: usize,
}

impl WordList {
    /// Build a word list from dictionary text
    ///
    /// Keeps every line whose length is exactly `length` and which consists
    /// only of `a`-`z`. A trailing `\r` is stripped first; nothing else is
    /// trimmed.
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::EmptyWordList` if no line qualifies.
    ///
    /// # Examples
    /// ```
    /// use wordy::wordlists::WordList;
    ///
    /// let list = WordList::load("crane\nParis\nslate\ncan't\nno\n", 5).unwrap();
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn load(text: &str, length: usize) -> Result<Self, WordSourceError> {
        let words: Vec<Word> = text
            .lines()
            .filter(|line| line.len() == length && is_alpha(line))
            .filter_map(|line| Word::new(line).ok())
            .collect();

        if words.is_empty() {
            return Err(WordSourceError::EmptyWordList { length });
        }

        Ok(Self { words, length })
    }

    /// Length shared by every word in the list
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }
}

/// Load a word list from a dictionary file
///
/// # Errors
///
/// Returns `SourceUnavailable` if the file cannot be read and
/// `EmptyWordList` if it holds no qualifying words.
///
/// # Examples
/// ```no_run
/// use wordy::wordlists::{DEFAULT_DICTIONARY, load_from_file};
///
/// let words = load_from_file(DEFAULT_DICTIONARY, 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> Result<WordList, WordSourceError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordSourceError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read dictionary");

    let list = WordList::load(&content, length)?;
    info!(path = %path.display(), words = list.len(), length, "built word list");
    Ok(list)
}

/// Pick a secret uniformly at random
///
/// # Errors
///
/// Returns `EmptyWordList` if `list` holds no words.
pub fn pick_secret<'a, R: Rng + ?Sized>(
    list: &'a WordList,
    rng: &mut R,
) -> Result<&'a Word, WordSourceError> {
    list.words
        .choose(rng)
        .ok_or(WordSourceError::EmptyWordList {
            length: list.length,
        })
}
