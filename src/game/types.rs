//! Core types for the puzzle game
//!
//! These are standalone types that don't depend on any engine.

/// Number of letters in the cipher alphabet
pub const ALPHABET_LEN: usize = 26;

/// Glyph rendered in place of a letter the player has not guessed yet
pub const UNKNOWN_GLYPH: char = '_';

/// A wrapper type for pin IDs
///
/// Pins are numbered in registration order, which is also the order
/// expeditions are resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinId(pub usize);

/// Index 0..26 of an uppercase ASCII letter, or `None` for anything else
pub fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Uppercase letter for an index 0..26
///
/// Callers only pass indices produced by `letter_index` or bounded loops.
pub fn index_letter(index: usize) -> char {
    debug_assert!(index < ALPHABET_LEN);
    (b'A' + index as u8) as char
}

/// All 26 uppercase letters in order
pub fn alphabet() -> impl Iterator<Item = char> {
    (0..ALPHABET_LEN).map(index_letter)
}
