//! Substitution cipher engine
//!
//! A cipher is a random permutation of the alphabet (plain -> scrambled).
//! The player fills a 26-slot grid, indexed by scrambled letter, with their
//! guess for the plain letter behind it.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{alphabet, index_letter, letter_index, ALPHABET_LEN, UNKNOWN_GLYPH};

/// A bijective plain -> scrambled letter mapping
///
/// Letters may map to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCipher {
    /// `forward[p]` is the scrambled index for plain index `p`
    forward: [u8; ALPHABET_LEN],
}

impl LetterCipher {
    /// Build a cipher from 26 scrambled letters, listed in plain order (A..Z)
    ///
    /// Returns `None` unless `scrambled` is a permutation of A..Z.
    pub fn from_scrambled(scrambled: &str) -> Option<Self> {
        let mut forward = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        let mut count = 0;

        for (plain, letter) in scrambled.chars().enumerate() {
            if plain >= ALPHABET_LEN {
                return None;
            }
            let scrambled_index = letter_index(letter.to_ascii_uppercase())?;
            if seen[scrambled_index] {
                return None;
            }
            seen[scrambled_index] = true;
            forward[plain] = scrambled_index as u8;
            count += 1;
        }

        (count == ALPHABET_LEN).then_some(Self { forward })
    }

    /// Scrambled letter for a plain letter; non-letters come back unchanged
    pub fn encrypt_letter(&self, plain: char) -> char {
        match letter_index(plain) {
            Some(index) => index_letter(self.forward[index] as usize),
            None => plain,
        }
    }

    /// Plain letter behind a scrambled letter; non-letters come back unchanged
    pub fn decrypt_letter(&self, scrambled: char) -> char {
        match letter_index(scrambled) {
            Some(index) => self
                .forward
                .iter()
                .position(|&s| s as usize == index)
                .map(index_letter)
                .unwrap_or(scrambled),
            None => scrambled,
        }
    }

    /// Decrypt a whole ciphertext with the true mapping
    pub fn decrypt(&self, ciphertext: &str) -> String {
        ciphertext.chars().map(|c| self.decrypt_letter(c)).collect()
    }

    /// Scrambled letters listed in plain order (A..Z)
    pub fn scrambled_alphabet(&self) -> String {
        self.forward
            .iter()
            .map(|&s| index_letter(s as usize))
            .collect()
    }
}

/// Generate a uniformly random cipher (Fisher-Yates shuffle of A..Z)
pub fn generate_cipher<R: Rng + ?Sized>(rng: &mut R) -> LetterCipher {
    let mut forward: [u8; ALPHABET_LEN] = std::array::from_fn(|i| i as u8);
    forward.shuffle(rng);
    LetterCipher { forward }
}

/// Encrypt a phrase. Input is uppercased; non-letters pass through.
pub fn encrypt(text: &str, cipher: &LetterCipher) -> String {
    text.to_uppercase()
        .chars()
        .map(|c| cipher.encrypt_letter(c))
        .collect()
}

/// Normalize raw player input to a single uppercase letter
///
/// Only the first character after trimming counts. Anything that is not a
/// letter becomes unknown (`None`).
pub fn normalize_guess(raw: &str) -> Option<char> {
    let first = raw.trim().chars().next()?.to_ascii_uppercase();
    first.is_ascii_uppercase().then_some(first)
}

/// Render a ciphertext through the player's guesses
///
/// Unknown slots render as `_`; non-letters pass through.
pub fn partial_decrypt(ciphertext: &str, guess_map: &GuessMap) -> String {
    ciphertext
        .chars()
        .map(|c| match letter_index(c) {
            Some(index) => guess_map.slots[index].unwrap_or(UNKNOWN_GLYPH),
            None => c,
        })
        .collect()
}

/// How one grid slot compares with the true cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Unknown,
    Correct,
    Wrong,
}

/// The player's guess grid: scrambled letter -> asserted plain letter
///
/// All 26 slots always exist; `None` is the unknown value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuessMap {
    slots: [Option<char>; ALPHABET_LEN],
}

impl GuessMap {
    /// A grid with every slot unknown
    pub fn new() -> Self {
        Self::default()
    }

    /// A grid holding the correct answer for every slot of `cipher`
    pub fn fully_revealed(cipher: &LetterCipher) -> Self {
        let mut map = Self::new();
        for plain in alphabet() {
            map.reveal(plain, cipher);
        }
        map
    }

    /// Record raw input for one scrambled letter and return the stored value
    ///
    /// Only that slot changes. Non-letter scrambled letters are ignored.
    pub fn record_guess(&mut self, cipher_letter: char, raw_input: &str) -> Option<char> {
        let guess = normalize_guess(raw_input);
        if let Some(index) = letter_index(cipher_letter.to_ascii_uppercase()) {
            self.slots[index] = guess;
        }
        guess
    }

    /// Current guess for a scrambled letter
    pub fn guess_for(&self, cipher_letter: char) -> Option<char> {
        letter_index(cipher_letter).and_then(|index| self.slots[index])
    }

    /// Guess held in slot `index` (0 = scrambled 'A')
    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// True iff every slot holds some letter
    ///
    /// Coverage only: the letters do not have to be right.
    pub fn is_fully_resolved(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of slots that hold a letter
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Force the correct guess for one plain letter into its scrambled slot
    ///
    /// Returns the scrambled letter that was filled, or `None` for non-letters.
    pub fn reveal(&mut self, plain: char, cipher: &LetterCipher) -> Option<char> {
        let plain = plain.to_ascii_uppercase();
        let scrambled = cipher.encrypt_letter(plain);
        let index = letter_index(scrambled)?;
        self.slots[index] = Some(plain);
        Some(scrambled)
    }

    /// Whether the slot for `cipher_letter` holds the true plain letter
    ///
    /// Used for per-slot feedback only, never for the completion gate.
    pub fn is_correct_slot(&self, cipher_letter: char, cipher: &LetterCipher) -> bool {
        self.guess_for(cipher_letter) == Some(cipher.decrypt_letter(cipher_letter))
    }

    /// Colour feedback for one slot
    pub fn slot_status(&self, cipher_letter: char, cipher: &LetterCipher) -> SlotStatus {
        match self.guess_for(cipher_letter) {
            None => SlotStatus::Unknown,
            Some(_) if self.is_correct_slot(cipher_letter, cipher) => SlotStatus::Correct,
            Some(_) => SlotStatus::Wrong,
        }
    }

    /// Plain letters whose correct slot is not yet held by the right guess
    pub fn unrevealed_plain_letters(&self, cipher: &LetterCipher) -> Vec<char> {
        alphabet()
            .filter(|&plain| !self.is_correct_slot(cipher.encrypt_letter(plain), cipher))
            .collect()
    }

    /// Clear every slot back to unknown
    pub fn clear(&mut self) {
        self.slots = [None; ALPHABET_LEN];
    }
}

/// True iff every slot of `guess_map` holds some letter
pub fn is_fully_resolved(guess_map: &GuessMap) -> bool {
    guess_map.is_fully_resolved()
}

/// Reveal one plain letter's slot in `guess_map`
pub fn reveal(plain: char, cipher: &LetterCipher, guess_map: &mut GuessMap) -> Option<char> {
    guess_map.reveal(plain, cipher)
}
