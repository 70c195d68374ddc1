//! Cipher engine tests
//!
//! Covers the substitution cipher, the guess grid and the shift puzzle.

use rand::rngs::StdRng;
use rand::SeedableRng;

use cipher_expedition::game::{
    alphabet, encrypt, generate_cipher, is_fully_resolved, normalize_guess, partial_decrypt,
    reveal, shift_text, GameSession, GuessMap, LetterCipher, ShiftPuzzle, SlotStatus,
};

/// Build a cipher with some fixed plain -> scrambled pairs, the rest filled in order
fn cipher_with(fixed: &[(char, char)]) -> LetterCipher {
    let mut spare: Vec<char> = alphabet()
        .filter(|c| !fixed.iter().any(|&(_, s)| s == *c))
        .collect();
    spare.reverse();

    let scrambled: String = alphabet()
        .map(|plain| match fixed.iter().find(|&&(p, _)| p == plain) {
            Some(&(_, s)) => s,
            None => spare.pop().expect("enough spare letters"),
        })
        .collect();
    LetterCipher::from_scrambled(&scrambled).expect("valid permutation")
}

#[test]
fn test_generated_cipher_is_permutation() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let cipher = generate_cipher(&mut rng);

        let mut letters: Vec<char> = cipher.scrambled_alphabet().chars().collect();
        assert_eq!(letters.len(), 26);
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26, "seed {} produced duplicates", seed);
        assert_eq!(letters.into_iter().collect::<String>(), alphabet().collect::<String>());
    }
}

#[test]
fn test_generated_ciphers_vary_by_seed() {
    let first = generate_cipher(&mut StdRng::seed_from_u64(1));
    let second = generate_cipher(&mut StdRng::seed_from_u64(2));
    assert_ne!(first, second);

    let again = generate_cipher(&mut StdRng::seed_from_u64(1));
    assert_eq!(first, again);
}

#[test]
fn test_from_scrambled_rejects_non_permutations() {
    assert!(LetterCipher::from_scrambled("ABC").is_none());
    assert!(LetterCipher::from_scrambled("AACDEFGHIJKLMNOPQRSTUVWXYZ").is_none());
    assert!(LetterCipher::from_scrambled("ABCDEFGHIJKLMNOPQRSTUVWXYZA").is_none());
    assert!(LetterCipher::from_scrambled("ABCDEFGHIJKLMNOPQRSTUVWXY1").is_none());
    assert!(LetterCipher::from_scrambled("zyxwvutsrqponmlkjihgfedcba").is_some());
}

#[test]
fn test_encrypt_uppercases_and_keeps_non_letters() {
    let cipher = LetterCipher::from_scrambled("BCDEFGHIJKLMNOPQRSTUVWXYZA").unwrap();
    assert_eq!(encrypt("Hello, World! 42", &cipher), "IFMMP, XPSME! 42");
}

#[test]
fn test_decrypt_with_fully_revealed_grid_restores_phrase() {
    let phrases = [
        "Hello World",
        "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG",
        "x marks the spot... 3 paces north!",
        "",
    ];

    for seed in 0..20 {
        let cipher = generate_cipher(&mut StdRng::seed_from_u64(seed));
        let grid = GuessMap::fully_revealed(&cipher);
        for phrase in phrases {
            let scrambled = encrypt(phrase, &cipher);
            assert_eq!(partial_decrypt(&scrambled, &grid), phrase.to_uppercase());
            assert_eq!(cipher.decrypt(&scrambled), phrase.to_uppercase());
        }
    }
}

#[test]
fn test_partial_decrypt_shows_unknowns() {
    let cipher = cipher_with(&[('H', 'Q'), ('I', 'R')]);
    let mut grid = GuessMap::new();
    assert_eq!(partial_decrypt(&encrypt("hi!", &cipher), &grid), "__!");

    reveal('h', &cipher, &mut grid);
    assert_eq!(partial_decrypt(&encrypt("hi!", &cipher), &grid), "H_!");
}

#[test]
fn test_normalize_guess() {
    assert_eq!(normalize_guess(""), None);
    assert_eq!(normalize_guess("   "), None);
    assert_eq!(normalize_guess("b"), Some('B'));
    assert_eq!(normalize_guess("  q "), Some('Q'));
    assert_eq!(normalize_guess("ab"), Some('A'));
    assert_eq!(normalize_guess("1a"), None);
    assert_eq!(normalize_guess("?"), None);
    assert_eq!(normalize_guess("é"), None);
}

#[test]
fn test_record_guess_touches_one_slot() {
    let mut grid = GuessMap::new();
    grid.record_guess('C', "x");
    assert_eq!(grid.guess_for('C'), Some('X'));
    assert_eq!(grid.filled_count(), 1);

    // Overwrite, then clear with junk input
    grid.record_guess('C', "y");
    assert_eq!(grid.guess_for('C'), Some('Y'));
    grid.record_guess('C', "#");
    assert_eq!(grid.guess_for('C'), None);
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_record_same_guess_twice_is_idempotent() {
    let mut once = GuessMap::new();
    once.record_guess('K', "m");

    let mut twice = GuessMap::new();
    twice.record_guess('K', "m");
    twice.record_guess('K', "m");

    assert_eq!(once, twice);
}

#[test]
fn test_full_coverage_does_not_imply_correct() {
    let cipher = cipher_with(&[('H', 'A'), ('E', 'B'), ('L', 'C'), ('O', 'D')]);
    let mut grid = GuessMap::new();
    for scrambled in alphabet() {
        grid.record_guess(scrambled, "z");
    }

    assert!(is_fully_resolved(&grid));
    let scrambled = encrypt("HELLO", &cipher);
    assert_eq!(partial_decrypt(&scrambled, &grid), "ZZZZZ");
    assert_ne!(partial_decrypt(&scrambled, &grid), "HELLO");
}

#[test]
fn test_slot_status_colours() {
    let cipher = cipher_with(&[('H', 'A')]);
    let mut grid = GuessMap::new();
    assert_eq!(grid.slot_status('A', &cipher), SlotStatus::Unknown);

    grid.record_guess('A', "h");
    assert_eq!(grid.slot_status('A', &cipher), SlotStatus::Correct);

    grid.record_guess('A', "j");
    assert_eq!(grid.slot_status('A', &cipher), SlotStatus::Wrong);
}

#[test]
fn test_unrevealed_letters_shrink_as_letters_are_revealed() {
    let cipher = generate_cipher(&mut StdRng::seed_from_u64(9));
    let mut grid = GuessMap::new();
    assert_eq!(grid.unrevealed_plain_letters(&cipher).len(), 26);

    grid.reveal('Q', &cipher);
    let hidden = grid.unrevealed_plain_letters(&cipher);
    assert_eq!(hidden.len(), 25);
    assert!(!hidden.contains(&'Q'));

    assert!(GuessMap::fully_revealed(&cipher)
        .unrevealed_plain_letters(&cipher)
        .is_empty());
}

#[test]
fn test_new_cipher_blocked_until_grid_filled() {
    let mut session = GameSession::new_with_seed(11);
    assert!(!session.guesses().is_fully_resolved());

    let cipher_before = session.cipher().clone();
    let grid_before = session.guesses().clone();
    let text_before = session.ciphertext().to_string();

    let feedback = session.request_new_cipher();
    assert_eq!(feedback.to_string(), "You must complete the current cipher first.");
    assert_eq!(session.cipher(), &cipher_before);
    assert_eq!(session.guesses(), &grid_before);
    assert_eq!(session.ciphertext(), text_before);
}

#[test]
fn test_shift_puzzle() {
    let puzzle = ShiftPuzzle::new("hello unity", 3);
    assert_eq!(puzzle.encrypted(), "KHOOR XQLWB");
    assert_eq!(puzzle.decrypt("khoor xqlwb"), "HELLO UNITY");
    assert!(puzzle.check_answer("Hello Unity"));
    assert!(!puzzle.check_answer("HELLO UNIT"));
}

#[test]
fn test_shift_wraps_around() {
    assert_eq!(shift_text("XYZ", 3), "ABC");

    let puzzle = ShiftPuzzle::new("ZEBRA", 29);
    assert_eq!(puzzle.shift(), 3);
    assert_eq!(puzzle.encrypted(), "CHEUD");
    assert_eq!(puzzle.decrypt(puzzle.encrypted()), "ZEBRA");
}
