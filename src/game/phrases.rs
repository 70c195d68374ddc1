//! Phrase queue and reward pool
//!
//! The queue holds the secret phrases in solving order plus a cursor that
//! only moves forward. `cursor == len` is the terminal "all solved" state;
//! appending a phrase afterwards makes `current()` return it again.

use log::debug;
use rand::Rng;

use super::cipher::{encrypt, partial_decrypt, GuessMap, LetterCipher};

/// Result of checking the player's decryption against the current phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The phrase was solved; `next` is the phrase now current, if any
    Resolved { solved: String, next: Option<String> },
    /// The decryption does not match yet
    NotResolved,
    /// Nothing left to solve; the check did nothing
    Exhausted,
}

/// Ordered phrases to solve plus a forward-only cursor
#[derive(Debug, Clone, Default)]
pub struct PhraseQueue {
    phrases: Vec<String>,
    cursor: usize,
}

impl PhraseQueue {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }

    /// The phrase being solved, or `None` once every phrase is done
    pub fn current(&self) -> Option<&str> {
        self.phrases.get(self.cursor).map(String::as_str)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// True once the cursor has reached the end of the queue
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.phrases.len()
    }

    /// Check the player's guesses against the current phrase
    ///
    /// The phrase is encrypted with `cipher` and decoded through
    /// `guess_map`; the result must equal the phrase, ignoring case. On a
    /// match every letter of the phrase is revealed in `guess_map` and the
    /// cursor advances.
    pub fn check_solution(
        &mut self,
        guess_map: &mut GuessMap,
        cipher: &LetterCipher,
    ) -> SolveOutcome {
        let Some(phrase) = self.current() else {
            return SolveOutcome::Exhausted;
        };

        let decoded = partial_decrypt(&encrypt(phrase, cipher), guess_map);
        if decoded != phrase.to_uppercase() {
            debug!("Decoded {:?} does not match yet", decoded);
            return SolveOutcome::NotResolved;
        }

        let solved = phrase.to_string();
        for letter in solved.chars().filter(char::is_ascii_alphabetic) {
            guess_map.reveal(letter, cipher);
        }
        self.cursor += 1;

        SolveOutcome::Resolved {
            solved,
            next: self.current().map(str::to_string),
        }
    }

    /// Add a phrase at the tail
    ///
    /// The cursor is not touched; if the queue was complete the new phrase
    /// simply becomes `current()`, and the caller reloads its display.
    pub fn append(&mut self, phrase: impl Into<String>) {
        self.phrases.push(phrase.into());
    }

    /// Move one random phrase out of `pool` onto the tail of the queue
    ///
    /// Returns the chosen phrase, or `None` when the pool is empty.
    pub fn append_from_pool<R: Rng + ?Sized>(
        &mut self,
        pool: &mut PhrasePool,
        rng: &mut R,
    ) -> Option<String> {
        let phrase = pool.draw(rng)?;
        debug!("Appending phrase from pool ({} left)", pool.len());
        self.append(phrase.clone());
        Some(phrase)
    }
}

/// Finite pool of reward phrases, drawn without replacement
#[derive(Debug, Clone, Default)]
pub struct PhrasePool {
    phrases: Vec<String>,
}

impl PhrasePool {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Remove and return a uniformly chosen phrase
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.phrases.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.phrases.len());
        Some(self.phrases.swap_remove(index))
    }
}
