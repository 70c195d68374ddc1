//! Shift (Caesar) cipher warm-up puzzle
//!
//! Every letter is moved `shift` places along the alphabet, wrapping at Z.
//! The player answers with the whole plain phrase.

use super::types::{index_letter, letter_index, ALPHABET_LEN};

/// Shift used when none is configured
pub const DEFAULT_SHIFT: u8 = 3;

/// A shift-cipher puzzle around one secret phrase
#[derive(Debug, Clone)]
pub struct ShiftPuzzle {
    shift: u8,
    secret: String,
    encrypted: String,
}

impl ShiftPuzzle {
    pub fn new(secret: &str, shift: u8) -> Self {
        let shift = shift % ALPHABET_LEN as u8;
        let secret = secret.to_uppercase();
        let encrypted = shift_text(&secret, shift as usize);
        Self {
            shift,
            secret,
            encrypted,
        }
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }

    /// The scrambled phrase shown to the player
    pub fn encrypted(&self) -> &str {
        &self.encrypted
    }

    /// Undo the shift on any text
    pub fn decrypt(&self, text: &str) -> String {
        shift_text(
            &text.to_uppercase(),
            ALPHABET_LEN - self.shift as usize,
        )
    }

    /// Compare a whole-phrase answer against the secret, ignoring case
    pub fn check_answer(&self, answer: &str) -> bool {
        answer.trim().to_uppercase() == self.secret
    }
}

/// Shift every uppercase letter forward by `shift`, wrapping at Z
pub fn shift_text(text: &str, shift: usize) -> String {
    text.chars()
        .map(|c| match letter_index(c) {
            Some(index) => index_letter((index + shift) % ALPHABET_LEN),
            None => c,
        })
        .collect()
}
