//! Per-letter feedback for a guess
//!
//! Each position of a guess is tagged:
//! - `Exact`: right letter, right position
//! - `Present`: letter occurs somewhere else in the secret
//! - `Absent`: letter does not occur in the secret
//!
//! `Present` is decided by plain containment over the whole secret, so a
//! repeated guess letter can be marked `Present` more than once even when
//! the secret holds a single copy.

use super::Word;

/// Feedback tag for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Exact,
    Present,
    Absent,
}

impl Tag {
    /// Emoji square for this tag
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Score `guess` against `secret`, left to right
///
/// Both words are expected to have the same length; extra letters on either
/// side are ignored.
///
/// # Examples
/// ```
/// use wordy::core::{Tag, Word, score_guess};
///
/// let guess = Word::new("crane").unwrap();
/// let secret = Word::new("caper").unwrap();
///
/// // C(exact) R(present) A(present) N(absent) E(present)
/// assert_eq!(
///     score_guess(&guess, &secret),
///     vec![Tag::Exact, Tag::Present, Tag::Present, Tag::Absent, Tag::Present]
/// );
/// ```
#[must_use]
pub fn score_guess(guess: &Word, secret: &Word) -> Vec<Tag> {
    guess
        .chars()
        .iter()
        .zip(secret.chars())
        .map(|(&g, &s)| {
            if g == s {
                Tag::Exact
            } else if secret.has_letter(g) {
                Tag::Present
            } else {
                Tag::Absent
            }
        })
        .collect()
}

/// A submitted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    word: Word,
    tags: Vec<Tag>,
}

impl ScoredGuess {
    /// Score `guess` against `secret` and keep both
    #[must_use]
    pub fn new(guess: Word, secret: &Word) -> Self {
        let tags = score_guess(&guess, secret);
        Self { word: guess, tags }
    }

    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Letters paired with their tags, in guess order
    pub fn letters(&self) -> impl Iterator<Item = (char, Tag)> + '_ {
        self.word
            .chars()
            .iter()
            .map(|&b| char::from(b))
            .zip(self.tags.iter().copied())
    }

    /// True when every position is `Exact`
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.tags.iter().all(|&t| t == Tag::Exact)
    }

    /// Feedback rendered as emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.tags.iter().map(|t| t.to_emoji()).collect()
    }
}
