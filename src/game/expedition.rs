//! Expedition scheduling
//!
//! Each pin is a map location a scouting team can be sent to. A pin is
//! either available or has exactly one expedition in flight. Expeditions
//! count down once per new day and, on arrival, grant reward rolls.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rand::Rng;

use super::ledger::{EconomyLedger, UnitKind};
use super::types::PinId;

/// Fewest days any expedition can take
pub const MIN_DIFFICULTY: u32 = 1;
/// Shovels that buy no extra reward rolls
pub const FREE_SHOVELS: u32 = 2;

/// Days an expedition takes: each scout past the first saves a day
pub fn effective_difficulty(base_difficulty: u32, unit_count: u32) -> u32 {
    base_difficulty
        .saturating_sub(unit_count.saturating_sub(1))
        .max(MIN_DIFFICULTY)
}

/// Reward rolls granted on arrival for the shovels taken along
pub fn reward_hits(consumable_count: u32) -> u32 {
    if consumable_count <= FREE_SHOVELS {
        1
    } else {
        consumable_count - FREE_SHOVELS
    }
}

/// One reward roll's result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardRoll {
    /// Add a phrase from the reward pool to the queue
    NewPhrase,
    /// Reveal one letter the player has not got yet
    RevealLetter,
}

/// An in-flight scouting mission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expedition {
    pub pin: PinId,
    /// Days until arrival
    pub days_remaining: u32,
    /// Reward rolls granted on arrival
    pub hits: u32,
    /// Scouts sent
    pub scouts: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinState {
    Available,
    Dispatched(Expedition),
}

/// A map location
#[derive(Debug, Clone)]
pub struct Pin {
    pub id: PinId,
    pub name: String,
    pub blurb: String,
    pub base_difficulty: u32,
    pub state: PinState,
}

impl Pin {
    pub fn is_available(&self) -> bool {
        self.state == PinState::Available
    }

    pub fn expedition(&self) -> Option<&Expedition> {
        match &self.state {
            PinState::Dispatched(expedition) => Some(expedition),
            PinState::Available => None,
        }
    }
}

/// An expedition that arrived this day, with its rolled rewards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedExpedition {
    pub pin: PinId,
    pub rolls: Vec<RewardRoll>,
}

/// All pins and their expeditions, in registration order
#[derive(Debug, Clone, Default)]
pub struct ExpeditionScheduler {
    pins: Vec<Pin>,
}

impl ExpeditionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pin; ids follow registration order
    pub fn add_pin(
        &mut self,
        name: impl Into<String>,
        blurb: impl Into<String>,
        base_difficulty: u32,
    ) -> PinId {
        let id = PinId(self.pins.len());
        self.pins.push(Pin {
            id,
            name: name.into(),
            blurb: blurb.into(),
            base_difficulty: base_difficulty.max(MIN_DIFFICULTY),
            state: PinState::Available,
        });
        id
    }

    pub fn pin(&self, id: PinId) -> Result<&Pin> {
        self.pins
            .get(id.0)
            .with_context(|| format!("Pin {} not found", id.0))
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Expeditions currently in flight, in pin order
    pub fn active_expeditions(&self) -> impl Iterator<Item = &Expedition> {
        self.pins.iter().filter_map(Pin::expedition)
    }

    /// Send a team to an available pin
    ///
    /// Takes `unit_count` scouts and `consumable_count` shovels out of the
    /// ledger. Returns `None` without touching anything if the pin is busy,
    /// no scouts are sent, or the ledger cannot cover the team.
    pub fn dispatch(
        &mut self,
        pin_id: PinId,
        unit_count: u32,
        consumable_count: u32,
        ledger: &mut EconomyLedger,
    ) -> Result<Option<Expedition>> {
        let pin = self
            .pins
            .get_mut(pin_id.0)
            .with_context(|| format!("Pin {} not found", pin_id.0))?;

        if !pin.is_available() {
            debug!("Pin {} is already occupied", pin.name);
            return Ok(None);
        }
        if unit_count == 0
            || ledger.units(UnitKind::Scouts) < unit_count
            || ledger.units(UnitKind::Shovels) < consumable_count
        {
            warn!(
                "Cannot send {} scouts with {} shovels to {} ({})",
                unit_count,
                consumable_count,
                pin.name,
                ledger.summary()
            );
            return Ok(None);
        }

        ledger.decrement_units(UnitKind::Scouts, unit_count);
        ledger.decrement_units(UnitKind::Shovels, consumable_count);

        let days = effective_difficulty(pin.base_difficulty, unit_count);
        let expedition = Expedition {
            pin: pin_id,
            days_remaining: days,
            hits: reward_hits(consumable_count),
            scouts: unit_count,
        };
        pin.state = PinState::Dispatched(expedition);

        info!(
            "Sent {} scouts to {} ({} days, {} reward rolls)",
            unit_count, pin.name, days, expedition.hits
        );
        Ok(Some(expedition))
    }

    /// Count every expedition down one day and resolve the ones that arrive
    ///
    /// Arrivals are returned in pin registration order, each with its reward
    /// rolls already made. Their pins become available again.
    pub fn on_new_day<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<CompletedExpedition> {
        let mut completed = Vec::new();

        for pin in &mut self.pins {
            let PinState::Dispatched(expedition) = &mut pin.state else {
                continue;
            };

            expedition.days_remaining = expedition.days_remaining.saturating_sub(1);
            if expedition.days_remaining > 0 {
                debug!("{}: {} days left", pin.name, expedition.days_remaining);
                continue;
            }

            let rolls: Vec<RewardRoll> = (0..expedition.hits)
                .map(|_| {
                    if rng.random_bool(0.5) {
                        RewardRoll::NewPhrase
                    } else {
                        RewardRoll::RevealLetter
                    }
                })
                .collect();

            info!("Scouts returned from {} with {} rewards", pin.name, rolls.len());
            completed.push(CompletedExpedition { pin: pin.id, rolls });
            pin.state = PinState::Available;
        }

        completed
    }
}
