//! Economy ledger for the puzzle game
//!
//! Tracks the player's money and the units they can send on expeditions.
//! Balances never drop below their floor.

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Starting balances for a new game
pub const STARTING_MONEY: i32 = 100;
pub const STARTING_PREMIUM: i32 = 0;
pub const STARTING_SCOUTS: u32 = 5;
pub const STARTING_SHOVELS: u32 = 3;

/// Shop prices
pub const PRICE_SCOUT: i32 = 40;
pub const PRICE_SHOVEL: i32 = 15;

/// Countable things the ledger holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Members of a scouting team
    Scouts,
    /// Consumable dig gear; more of it means more reward rolls
    Shovels,
}

/// Something the shop sells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub name: String,
    pub price: i32,
    /// Unit granted on purchase
    pub grants: UnitKind,
}

impl ShopItem {
    pub fn new(name: impl Into<String>, price: i32, grants: UnitKind) -> Self {
        Self {
            name: name.into(),
            price,
            grants,
        }
    }
}

/// Default shop catalogue
pub fn default_shop_items() -> Vec<ShopItem> {
    vec![
        ShopItem::new("Scout", PRICE_SCOUT, UnitKind::Scouts),
        ShopItem::new("Shovel", PRICE_SHOVEL, UnitKind::Shovels),
    ]
}

/// Outcome of a shop purchase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Purchase {
    Bought(UnitKind),
    InsufficientFunds { price: i32, money: i32 },
    UnknownItem,
}

/// The player's money and units
#[derive(Debug, Clone)]
pub struct EconomyLedger {
    /// Spendable money
    pub money: i32,
    /// Premium currency
    pub premium: i32,
    /// Scouts at home, free to be sent out
    pub scouts: u32,
    /// Shovels in stock
    pub shovels: u32,
    /// What the shop sells
    pub shop_items: Vec<ShopItem>,
}

impl Default for EconomyLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl EconomyLedger {
    /// Create a ledger with starting balances
    pub fn new() -> Self {
        Self::with_balances(STARTING_MONEY, STARTING_SCOUTS, STARTING_SHOVELS)
    }

    pub fn with_balances(money: i32, scouts: u32, shovels: u32) -> Self {
        Self {
            money,
            premium: STARTING_PREMIUM,
            scouts,
            shovels,
            shop_items: default_shop_items(),
        }
    }

    /// Check if the player can afford a purchase
    pub fn can_afford(&self, cost: i32) -> bool {
        self.money >= cost
    }

    /// Add money
    pub fn credit(&mut self, amount: i32) {
        self.money += amount;
    }

    /// Take money, clamping the balance at `floor`
    ///
    /// Returns the amount actually removed.
    pub fn debit(&mut self, amount: i32, floor: i32) -> i32 {
        let before = self.money;
        self.money = (self.money - amount).max(floor.min(before));
        before - self.money
    }

    pub fn units(&self, kind: UnitKind) -> u32 {
        match kind {
            UnitKind::Scouts => self.scouts,
            UnitKind::Shovels => self.shovels,
        }
    }

    fn units_mut(&mut self, kind: UnitKind) -> &mut u32 {
        match kind {
            UnitKind::Scouts => &mut self.scouts,
            UnitKind::Shovels => &mut self.shovels,
        }
    }

    /// Remove units, clamping at zero; returns how many were removed
    pub fn decrement_units(&mut self, kind: UnitKind, amount: u32) -> u32 {
        let units = self.units_mut(kind);
        let removed = amount.min(*units);
        *units -= removed;
        removed
    }

    pub fn increment_units(&mut self, kind: UnitKind, amount: u32) {
        *self.units_mut(kind) += amount;
    }

    /// Buy one item by name from the catalogue
    pub fn buy(&mut self, item_name: &str) -> Purchase {
        let Some(item) = self
            .shop_items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(item_name))
            .cloned()
        else {
            warn!("Shop has no item named {:?}", item_name);
            return Purchase::UnknownItem;
        };

        if !self.can_afford(item.price) {
            warn!("Not enough money for {} ({} < {})", item.name, self.money, item.price);
            return Purchase::InsufficientFunds {
                price: item.price,
                money: self.money,
            };
        }

        self.money -= item.price;
        self.increment_units(item.grants, 1);
        info!("Bought: {} (money now {})", item.name, self.money);
        Purchase::Bought(item.grants)
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Money: {} | Premium: {} | Scouts: {} | Shovels: {}",
            self.money, self.premium, self.scouts, self.shovels
        )
    }
}
