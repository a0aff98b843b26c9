//! Game session state machine
//!
//! A session starts `InProgress` and ends `Won` or `Lost`. Once finished,
//! every mutator is a silent no-op; only building a new session starts over.

use super::feedback::ScoredGuess;
use super::word::Word;

/// Number of attempts per session
pub const MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub guess: ScoredGuess,
    pub state: GameState,
}

/// One play-through against a single secret
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    input: String,
    guesses: Vec<ScoredGuess>,
    state: GameState,
}

impl GameSession {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        let len = secret.len();
        Self {
            secret,
            input: String::with_capacity(len),
            guesses: Vec::with_capacity(MAX_GUESSES),
            state: GameState::InProgress,
        }
    }

    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn guesses(&self) -> &[ScoredGuess] {
        &self.guesses
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Length every guess must have
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }

    /// Append a letter to the input buffer
    ///
    /// Ignored when the session is finished, the buffer is full, or `c` is
    /// not a lowercase ASCII letter. Returns whether the buffer changed.
    pub fn append_char(&mut self, c: char) -> bool {
        if self.is_finished() || self.input.len() >= self.word_length() || !c.is_ascii_lowercase()
        {
            return false;
        }
        self.input.push(c);
        true
    }

    /// Remove the last letter of the input buffer
    ///
    /// Ignored when the session is finished or the buffer is empty.
    pub fn delete_char(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.input.pop().is_some()
    }

    /// Score the full input buffer and advance the state machine
    ///
    /// Returns `None`, leaving everything untouched, unless the session is in
    /// progress, the buffer holds exactly `word_length()` letters and fewer
    /// than `MAX_GUESSES` guesses have been made. The buffer is cleared after
    /// every accepted submission.
    pub fn submit_guess(&mut self) -> Option<Submission> {
        if self.is_finished()
            || self.input.len() != self.word_length()
            || self.guesses.len() >= MAX_GUESSES
        {
            return None;
        }

        // The buffer only ever holds a-z, so this cannot fail in practice
        let guess = Word::new(std::mem::take(&mut self.input)).ok()?;
        let scored = ScoredGuess::new(guess, &self.secret);
        let won = scored.word() == &self.secret;
        self.guesses.push(scored.clone());

        if won {
            self.state = GameState::Won;
        } else if self.guesses.len() == MAX_GUESSES {
            self.state = GameState::Lost;
        }

        Some(Submission {
            guess: scored,
            state: self.state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tag;
    use proptest::prelude::*;

    fn session(secret: &str) -> GameSession {
        GameSession::new(Word::new(secret).unwrap())
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for c in word.chars() {
            session.append_char(c);
        }
    }

    #[test]
    fn new_session_is_empty_and_in_progress() {
        let s = session("crane");
        assert_eq!(s.state(), GameState::InProgress);
        assert!(s.input().is_empty());
        assert!(s.guesses().is_empty());
        assert_eq!(s.word_length(), 5);
        assert_eq!(s.remaining_attempts(), MAX_GUESSES);
    }

    #[test]
    fn append_stops_at_word_length() {
        let mut s = session("crane");
        type_word(&mut s, "slate");
        assert!(!s.append_char('x'));
        assert_eq!(s.input(), "slate");
    }

    #[test]
    fn append_ignores_non_letters() {
        let mut s = session("crane");
        assert!(!s.append_char('1'));
        assert!(!s.append_char('A'));
        assert!(!s.append_char(' '));
        assert!(s.input().is_empty());
    }

    #[test]
    fn delete_on_empty_buffer_is_noop() {
        let mut s = session("crane");
        assert!(!s.delete_char());
        assert!(s.input().is_empty());
    }

    #[test]
    fn delete_removes_last_letter() {
        let mut s = session("crane");
        type_word(&mut s, "sla");
        assert!(s.delete_char());
        assert_eq!(s.input(), "sl");
    }

    #[test]
    fn submit_requires_full_buffer() {
        let mut s = session("crane");
        type_word(&mut s, "sla");
        assert!(s.submit_guess().is_none());
        assert_eq!(s.input(), "sla");
        assert!(s.guesses().is_empty());
    }

    #[test]
    fn submit_scores_and_clears_input() {
        let mut s = session("apple");
        type_word(&mut s, "allot");
        let submission = s.submit_guess().unwrap();

        assert_eq!(submission.state, GameState::InProgress);
        assert_eq!(
            submission.guess.tags(),
            &[
                Tag::Exact,
                Tag::Present,
                Tag::Present,
                Tag::Absent,
                Tag::Absent
            ]
        );
        assert!(s.input().is_empty());
        assert_eq!(s.guesses().len(), 1);
    }

    #[test]
    fn apple_scenario_wins_on_second_guess() {
        let mut s = session("apple");
        type_word(&mut s, "allot");
        s.submit_guess().unwrap();
        type_word(&mut s, "apple");
        let submission = s.submit_guess().unwrap();

        assert_eq!(submission.state, GameState::Won);
        assert!(submission.guess.is_exact());
        assert_eq!(s.guesses().len(), 2);
        assert!(s.input().is_empty());
    }

    #[test]
    fn six_misses_lose() {
        let mut s = session("crane");
        for (i, guess) in ["slate", "moist", "pouch", "buggy", "fizzy", "jumbo"]
            .iter()
            .enumerate()
        {
            type_word(&mut s, guess);
            let submission = s.submit_guess().unwrap();
            if i < MAX_GUESSES - 1 {
                assert_eq!(submission.state, GameState::InProgress);
            } else {
                assert_eq!(submission.state, GameState::Lost);
            }
        }
        assert_eq!(s.state(), GameState::Lost);
        assert_eq!(s.remaining_attempts(), 0);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut s = session("crane");
        for guess in ["slate", "moist", "pouch", "buggy", "fizzy", "crane"] {
            type_word(&mut s, guess);
            s.submit_guess().unwrap();
        }
        assert_eq!(s.state(), GameState::Won);
    }

    #[test]
    fn finished_session_ignores_all_mutators() {
        let mut s = session("crane");
        type_word(&mut s, "crane");
        s.submit_guess().unwrap();

        assert!(!s.append_char('a'));
        assert!(!s.delete_char());
        assert!(s.submit_guess().is_none());
        assert!(s.input().is_empty());
        assert_eq!(s.guesses().len(), 1);
        assert_eq!(s.state(), GameState::Won);
    }

    proptest! {
        #[test]
        fn invariants_hold_under_random_keystrokes(
            secret in "[a-z]{5}",
            keys in proptest::collection::vec(0u8..29, 0..200),
        ) {
            let mut s = session(&secret);
            let mut won_by_match = false;

            for key in keys {
                let before_finished = s.is_finished();
                let before_input = s.input().to_string();
                let before_guesses = s.guesses().len();

                match key {
                    0..=25 => {
                        s.append_char(char::from(b'a' + key));
                    }
                    26 => {
                        s.delete_char();
                    }
                    _ => {
                        if let Some(sub) = s.submit_guess() {
                            prop_assert!(s.input().is_empty());
                            if sub.guess.word() == s.secret() {
                                won_by_match = true;
                            }
                        }
                    }
                }

                prop_assert!(s.input().len() <= 5);
                prop_assert!(s.guesses().len() <= MAX_GUESSES);
                if before_finished {
                    prop_assert_eq!(s.input(), before_input.as_str());
                    prop_assert_eq!(s.guesses().len(), before_guesses);
                }
            }

            prop_assert_eq!(s.state() == GameState::Won, won_by_match);
            let lost = s.state() == GameState::Lost;
            prop_assert_eq!(lost, !won_by_match && s.guesses().len() == MAX_GUESSES);
        }
    }
}
