//! Standalone game core
//!
//! This module contains all the puzzle and expedition logic. It runs
//! without any engine or UI, so it can be driven and tested from the
//! console.

mod cipher;
mod clock;
mod config;
mod expedition;
mod feedback;
mod ledger;
mod phrases;
mod session;
mod shift;
mod types;

// Re-export public types for external use
pub use cipher::{
    encrypt, generate_cipher, is_fully_resolved, normalize_guess, partial_decrypt, reveal,
    GuessMap, LetterCipher, SlotStatus,
};
pub use clock::{ClockRole, DayClock, NewDay, DEFAULT_CLOCK_RATE};
pub use config::{GameConfig, PinConfig, DAILY_UPKEEP, SOLVE_REWARD};
pub use expedition::{
    effective_difficulty, reward_hits, CompletedExpedition, Expedition, ExpeditionScheduler, Pin,
    PinState, RewardRoll, FREE_SHOVELS, MIN_DIFFICULTY,
};
pub use feedback::Feedback;
pub use ledger::{
    default_shop_items, EconomyLedger, Purchase, ShopItem, UnitKind, PRICE_SCOUT, PRICE_SHOVEL,
    STARTING_MONEY, STARTING_PREMIUM, STARTING_SCOUTS, STARTING_SHOVELS,
};
pub use phrases::{PhrasePool, PhraseQueue, SolveOutcome};
pub use session::{DayReport, DispatchDraft, GameSession};
pub use shift::{shift_text, ShiftPuzzle, DEFAULT_SHIFT};
pub use types::{alphabet, index_letter, letter_index, PinId, ALPHABET_LEN, UNKNOWN_GLYPH};
