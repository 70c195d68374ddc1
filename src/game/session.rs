//! Game session that ties everything together
//!
//! The session owns every piece of game state and is the single entry point
//! the UI layer calls into: guesses, solution checks, pin pop-ups, shop
//! purchases and frame ticks. Rendered text is recomputed only when
//! something changes it.

use std::collections::BTreeSet;

use anyhow::{bail, Result};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::cipher::{encrypt, generate_cipher, partial_decrypt, GuessMap, LetterCipher};
use super::clock::{DayClock, NewDay};
use super::config::GameConfig;
use super::expedition::{effective_difficulty, Expedition, ExpeditionScheduler, RewardRoll};
use super::feedback::Feedback;
use super::ledger::{EconomyLedger, Purchase, UnitKind};
use super::phrases::{PhrasePool, PhraseQueue, SolveOutcome};
use super::types::{index_letter, PinId, ALPHABET_LEN};

/// Team being assembled in the pin pop-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchDraft {
    pub pin: PinId,
    pub scouts: u32,
    pub shovels: u32,
}

/// Summary of one new day
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayReport {
    pub day: u32,
    /// Money actually taken for upkeep
    pub upkeep_paid: i32,
    /// Pins whose expeditions came home
    pub returned: Vec<PinId>,
    /// One entry per reward roll, in resolution order
    pub rewards: Vec<Feedback>,
}

/// The running game
pub struct GameSession {
    cipher: LetterCipher,
    guesses: GuessMap,
    /// Plain letters learned from solved phrases
    learned: BTreeSet<char>,
    pre_revealed: Vec<char>,

    queue: PhraseQueue,
    pool: PhrasePool,
    /// Current phrase as shown scrambled
    ciphertext: String,
    /// Current phrase through the player's guesses
    partial: String,

    scheduler: ExpeditionScheduler,
    clock: DayClock,
    ledger: EconomyLedger,

    /// The one open pin pop-up, if any
    popup: Option<DispatchDraft>,
    feedback: Option<Feedback>,

    solve_reward: i32,
    daily_upkeep: i32,
    phrases_solved: usize,

    rng: StdRng,
}

impl GameSession {
    fn new_internal(config: GameConfig, mut rng: StdRng) -> Self {
        let cipher = generate_cipher(&mut rng);

        let mut ledger = EconomyLedger::with_balances(
            config.starting_money,
            config.starting_scouts,
            config.starting_shovels,
        );
        ledger.premium = config.starting_premium;
        ledger.shop_items = config.shop_items;

        let mut scheduler = ExpeditionScheduler::new();
        for pin in config.pins {
            scheduler.add_pin(pin.name, pin.blurb, pin.difficulty);
        }

        let mut session = Self {
            cipher,
            guesses: GuessMap::new(),
            learned: BTreeSet::new(),
            pre_revealed: config.pre_revealed,
            queue: PhraseQueue::new(config.phrases),
            pool: PhrasePool::new(config.reward_pool),
            ciphertext: String::new(),
            partial: String::new(),
            scheduler,
            clock: DayClock::main(config.clock_rate),
            ledger,
            popup: None,
            feedback: None,
            solve_reward: config.solve_reward,
            daily_upkeep: config.daily_upkeep,
            phrases_solved: 0,
            rng,
        };
        session.reset_guesses();
        session.reload_phrase();
        session
    }

    /// Default game with a random seed
    pub fn new() -> Self {
        Self::from_config(GameConfig::default())
    }

    /// Default game with a seeded RNG for reproducible play
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_config_with_seed(GameConfig::default(), seed)
    }

    pub fn from_config(config: GameConfig) -> Self {
        Self::new_internal(config, StdRng::from_os_rng())
    }

    pub fn from_config_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new_internal(config, StdRng::seed_from_u64(seed))
    }

    pub fn cipher(&self) -> &LetterCipher {
        &self.cipher
    }

    pub fn guesses(&self) -> &GuessMap {
        &self.guesses
    }

    pub fn learned_letters(&self) -> &BTreeSet<char> {
        &self.learned
    }

    pub fn queue(&self) -> &PhraseQueue {
        &self.queue
    }

    pub fn pool(&self) -> &PhrasePool {
        &self.pool
    }

    /// The current phrase, scrambled
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// The current phrase as the player's guesses decode it
    pub fn partial_text(&self) -> &str {
        &self.partial
    }

    pub fn scheduler(&self) -> &ExpeditionScheduler {
        &self.scheduler
    }

    pub fn clock(&self) -> &DayClock {
        &self.clock
    }

    pub fn ledger(&self) -> &EconomyLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut EconomyLedger {
        &mut self.ledger
    }

    pub fn popup(&self) -> Option<&DispatchDraft> {
        self.popup.as_ref()
    }

    /// Latest status message
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn phrases_solved(&self) -> usize {
        self.phrases_solved
    }

    fn set_feedback(&mut self, feedback: Feedback) -> Feedback {
        debug!("Feedback: {}", feedback);
        self.feedback = Some(feedback.clone());
        feedback
    }

    fn refresh_partial(&mut self) {
        self.partial = partial_decrypt(&self.ciphertext, &self.guesses);
    }

    /// Re-encrypt the current phrase and redraw the partial text
    fn reload_phrase(&mut self) {
        self.ciphertext = match self.queue.current() {
            Some(phrase) => encrypt(phrase, &self.cipher),
            None => String::new(),
        };
        self.refresh_partial();
    }

    /// Clear the grid, then fill in starter letters and everything learned
    fn reset_guesses(&mut self) {
        self.guesses.clear();
        for &letter in self.pre_revealed.iter().chain(self.learned.iter()) {
            self.guesses.reveal(letter, &self.cipher);
        }
    }

    /// Let the day clock run (after the tutorial)
    pub fn start_clock(&mut self) {
        self.clock.start();
    }

    /// Advance one frame; runs the day handler if the clock wraps
    pub fn tick(&mut self, elapsed_secs: f32) -> Option<DayReport> {
        let NewDay { day } = self.clock.advance(elapsed_secs)?;
        Some(self.end_day(day))
    }

    /// Store raw input for grid slot `slot` (0 = scrambled 'A')
    pub fn record_guess(&mut self, slot: usize, raw_input: &str) -> Result<Option<char>> {
        if slot >= ALPHABET_LEN {
            bail!("Guess slot {} out of range 0..{}", slot, ALPHABET_LEN);
        }
        let cipher_letter = index_letter(slot);
        let guess = self.guesses.record_guess(cipher_letter, raw_input);
        debug!("Guess {} -> {:?}", cipher_letter, guess);
        self.refresh_partial();
        Ok(guess)
    }

    /// Check the player's guesses against the current phrase
    pub fn check_solution(&mut self) -> Feedback {
        match self.queue.check_solution(&mut self.guesses, &self.cipher) {
            SolveOutcome::Exhausted => self.set_feedback(Feedback::AllPhrasesComplete),
            SolveOutcome::NotResolved => self.set_feedback(Feedback::NotSolved),
            SolveOutcome::Resolved { solved, next } => {
                self.phrases_solved += 1;
                self.learned.extend(
                    solved
                        .chars()
                        .filter(char::is_ascii_alphabetic)
                        .map(|c| c.to_ascii_uppercase()),
                );
                self.ledger.credit(self.solve_reward);
                info!("Solved {:?} (+{} money)", solved, self.solve_reward);

                self.reload_phrase();
                match next {
                    Some(_) => self.set_feedback(Feedback::Solved),
                    None => self.set_feedback(Feedback::AllPhrasesComplete),
                }
            }
        }
    }

    /// Report whether every grid slot holds a letter
    pub fn check_cipher_complete(&mut self) -> Feedback {
        if self.guesses.is_fully_resolved() {
            self.set_feedback(Feedback::CipherComplete)
        } else {
            let unknown = ALPHABET_LEN - self.guesses.filled_count();
            self.set_feedback(Feedback::LettersRemain { unknown })
        }
    }

    /// Swap in a fresh cipher, only once every slot of the grid is filled
    pub fn request_new_cipher(&mut self) -> Feedback {
        if !self.guesses.is_fully_resolved() {
            warn!("New cipher refused: grid not complete");
            return self.set_feedback(Feedback::CipherIncomplete);
        }

        self.cipher = generate_cipher(&mut self.rng);
        self.reset_guesses();
        self.reload_phrase();
        info!("Generated a new cipher");
        self.set_feedback(Feedback::NewCipher)
    }

    /// Handle a new day: upkeep, expedition countdowns, rewards
    pub fn end_day(&mut self, day: u32) -> DayReport {
        let upkeep_paid = self.ledger.debit(self.daily_upkeep, 0);
        let completed = self.scheduler.on_new_day(&mut self.rng);

        let mut report = DayReport {
            day,
            upkeep_paid,
            ..Default::default()
        };
        for expedition in completed {
            report.returned.push(expedition.pin);
            for roll in expedition.rolls {
                let reward = self.apply_reward(roll);
                report.rewards.push(reward);
            }
        }
        report
    }

    fn apply_reward(&mut self, roll: RewardRoll) -> Feedback {
        match roll {
            RewardRoll::NewPhrase => {
                let was_complete = self.queue.is_complete();
                match self.queue.append_from_pool(&mut self.pool, &mut self.rng) {
                    Some(phrase) => {
                        if was_complete {
                            self.reload_phrase();
                        }
                        info!("New phrase discovered: {:?}", phrase);
                        self.set_feedback(Feedback::NewPhrase(phrase))
                    }
                    None => self.set_feedback(Feedback::PoolEmpty),
                }
            }
            RewardRoll::RevealLetter => {
                let hidden = self.guesses.unrevealed_plain_letters(&self.cipher);
                match hidden.choose(&mut self.rng) {
                    Some(&letter) => {
                        self.guesses.reveal(letter, &self.cipher);
                        self.refresh_partial();
                        info!("Letter revealed: {}", letter);
                        self.set_feedback(Feedback::LetterRevealed(letter))
                    }
                    None => self.set_feedback(Feedback::NothingToReveal),
                }
            }
        }
    }

    /// Open the pop-up for a pin
    ///
    /// Returns `false` when another pop-up is already open or the pin has a
    /// team out.
    pub fn open_pin(&mut self, pin: PinId) -> Result<bool> {
        if self.popup.is_some() {
            return Ok(false);
        }
        if !self.scheduler.pin(pin)?.is_available() {
            return Ok(false);
        }
        self.popup = Some(DispatchDraft {
            pin,
            scouts: 0,
            shovels: 0,
        });
        Ok(true)
    }

    pub fn close_pin(&mut self) {
        self.popup = None;
    }

    /// Add or remove one scout from the draft team, within what is at home
    pub fn adjust_scouts(&mut self, increase: bool) -> Option<u32> {
        let available = self.ledger.units(UnitKind::Scouts);
        let draft = self.popup.as_mut()?;
        draft.scouts = adjust_count(draft.scouts, available, increase);
        Some(draft.scouts)
    }

    /// Add or remove one shovel from the draft team, within what is in stock
    pub fn adjust_shovels(&mut self, increase: bool) -> Option<u32> {
        let available = self.ledger.units(UnitKind::Shovels);
        let draft = self.popup.as_mut()?;
        draft.shovels = adjust_count(draft.shovels, available, increase);
        Some(draft.shovels)
    }

    /// Send the drafted team and close the pop-up
    ///
    /// A draft with no scouts just closes.
    pub fn send_team(&mut self) -> Result<Option<Feedback>> {
        let Some(draft) = self.popup.take() else {
            return Ok(None);
        };
        if draft.scouts == 0 {
            return Ok(None);
        }

        match self.dispatch(draft.pin, draft.scouts, draft.shovels)? {
            Some(expedition) => {
                let pin = self.scheduler.pin(expedition.pin)?.name.clone();
                let days = expedition.days_remaining;
                Ok(Some(self.set_feedback(Feedback::TeamSent { pin, days })))
            }
            None => Ok(None),
        }
    }

    /// Send a team straight to a pin, bypassing the pop-up
    pub fn dispatch(
        &mut self,
        pin: PinId,
        unit_count: u32,
        consumable_count: u32,
    ) -> Result<Option<Expedition>> {
        self.scheduler
            .dispatch(pin, unit_count, consumable_count, &mut self.ledger)
    }

    /// Days a team of `unit_count` would need to reach `pin`
    pub fn travel_days(&self, pin: PinId, unit_count: u32) -> Result<u32> {
        let pin = self.scheduler.pin(pin)?;
        Ok(effective_difficulty(pin.base_difficulty, unit_count))
    }

    pub fn buy(&mut self, item_name: &str) -> Feedback {
        match self.ledger.buy(item_name) {
            Purchase::Bought(kind) => self.set_feedback(Feedback::Bought(kind)),
            Purchase::InsufficientFunds { .. } => self.set_feedback(Feedback::NotEnoughMoney),
            Purchase::UnknownItem => self.set_feedback(Feedback::UnknownItem),
        }
    }

    /// Print a summary of the session state
    pub fn print_summary(&self) {
        println!("=== Cipher Expedition Summary ===");
        println!(
            "Day: {} (clock {:.0}%)",
            self.clock.day(),
            self.clock.fill() * 100.0
        );
        println!("{}", self.ledger.summary());
        println!(
            "Phrases: {}/{} solved, {} left in reward pool",
            self.queue.cursor().min(self.queue.len()),
            self.queue.len(),
            self.pool.len()
        );
        println!("Grid: {}/{} letters filled", self.guesses.filled_count(), ALPHABET_LEN);
        println!();

        println!("--- Puzzle ---");
        if self.queue.is_complete() {
            println!("  (all phrases solved)");
        } else {
            println!("  Cipher:  {}", self.ciphertext);
            println!("  Decoded: {}", self.partial);
        }

        println!("--- Pins ---");
        for pin in self.scheduler.pins() {
            match pin.expedition() {
                Some(expedition) => println!(
                    "  {} (difficulty {}): {} scouts out, {} days left, {} rewards",
                    pin.name,
                    pin.base_difficulty,
                    expedition.scouts,
                    expedition.days_remaining,
                    expedition.hits
                ),
                None => println!("  {} (difficulty {}): available", pin.name, pin.base_difficulty),
            }
        }

        if let Some(feedback) = &self.feedback {
            println!("--- Status ---");
            println!("  {}", feedback);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn adjust_count(current: u32, available: u32, increase: bool) -> u32 {
    if increase {
        if current >= available {
            current
        } else {
            current + 1
        }
    } else {
        current.saturating_sub(1)
    }
}
