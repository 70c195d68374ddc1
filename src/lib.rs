//! Cipher Expedition Library
//!
//! Substitution-cipher puzzles and scout expeditions, driven by a day clock.
//! The game core runs without any engine or UI attached.

pub mod game;
