//! Guessable word representation
//!
//! A Word stores a lowercase ASCII word along with the set of letters it
//! contains, used for containment checks during scoring.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// A lowercase word with a letter set for containment lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: FxHashSet<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only lowercase letters a-z, got {0:?}")]
    InvalidCharacters(String),
}

/// Returns true if every character of `text` is a lowercase ASCII letter
#[inline]
#[must_use]
pub fn is_alpha(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_lowercase())
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Unlike dictionary lookups elsewhere, no case folding happens here: a
    /// capitalised entry such as a proper noun is rejected.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than `a`-`z`.
    ///
    /// # Examples
    /// ```
    /// use wordy::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("Crane").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if !is_alpha(&text) {
            return Err(WordError::InvalidCharacters(text));
        }

        let letters: FxHashSet<u8> = text.bytes().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
