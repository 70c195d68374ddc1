//! Game configuration
//!
//! Everything a designer tunes without touching code, loadable from JSON.
//! Missing fields fall back to the defaults below.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::clock::DEFAULT_CLOCK_RATE;
use super::ledger::{
    default_shop_items, ShopItem, STARTING_MONEY, STARTING_PREMIUM, STARTING_SCOUTS,
    STARTING_SHOVELS,
};

/// Money credited for each solved phrase
pub const SOLVE_REWARD: i32 = 50;
/// Money deducted at the start of each day
pub const DAILY_UPKEEP: i32 = 5;

/// A map location as configured
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinConfig {
    pub name: String,
    #[serde(default)]
    pub blurb: String,
    pub difficulty: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Phrases to solve, in order
    pub phrases: Vec<String>,
    /// Phrases expeditions can bring back
    pub reward_pool: Vec<String>,
    /// Plain letters filled in for free on every new cipher
    pub pre_revealed: Vec<char>,
    /// Fraction of a day that passes per second
    pub clock_rate: f32,
    pub starting_money: i32,
    pub starting_premium: i32,
    pub starting_scouts: u32,
    pub starting_shovels: u32,
    pub daily_upkeep: i32,
    pub solve_reward: i32,
    pub shop_items: Vec<ShopItem>,
    pub pins: Vec<PinConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "HELLO WORLD".to_string(),
                "THE MAP IS NOT THE TERRITORY".to_string(),
                "DIG WHERE THE SHADOWS FALL".to_string(),
            ],
            reward_pool: vec![
                "EUREKA".to_string(),
                "FORTUNE FAVOURS THE BOLD".to_string(),
                "X MARKS THE SPOT".to_string(),
                "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG".to_string(),
                "ALL THAT GLITTERS IS NOT GOLD".to_string(),
            ],
            pre_revealed: vec!['H', 'E', 'L'],
            clock_rate: DEFAULT_CLOCK_RATE,
            starting_money: STARTING_MONEY,
            starting_premium: STARTING_PREMIUM,
            starting_scouts: STARTING_SCOUTS,
            starting_shovels: STARTING_SHOVELS,
            daily_upkeep: DAILY_UPKEEP,
            solve_reward: SOLVE_REWARD,
            shop_items: default_shop_items(),
            pins: vec![
                PinConfig {
                    name: "Red Rock Gorge".to_string(),
                    blurb: "Carvings line the canyon walls.".to_string(),
                    difficulty: 3,
                },
                PinConfig {
                    name: "Salt Lake Ruins".to_string(),
                    blurb: "A buried trading post on the old shoreline.".to_string(),
                    difficulty: 5,
                },
                PinConfig {
                    name: "Ghost Gum Ridge".to_string(),
                    blurb: "Nobody who went up has come back with a map.".to_string(),
                    difficulty: 7,
                },
            ],
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig =
            serde_json::from_str(json).context("Failed to parse game config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.clock_rate.is_finite() || self.clock_rate <= 0.0 {
            bail!("clock_rate must be positive, got {}", self.clock_rate);
        }
        if self.phrases.is_empty() {
            bail!("at least one phrase is required");
        }
        if let Some(pin) = self.pins.iter().find(|pin| pin.difficulty == 0) {
            bail!("pin {:?} must have a difficulty of at least 1", pin.name);
        }
        Ok(())
    }
}
