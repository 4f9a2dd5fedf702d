use serde::{Deserialize, Serialize};

/// Default bankroll a session starts with.
pub const STARTING_CHIPS: u32 = 100;

/// A party's bankroll and the bet riding on the current round.
///
/// Only bet placement and settlement touch these numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chips {
    total: u32,
    bet: u32,
}

impl Default for Chips {
    fn default() -> Self {
        Self::new(STARTING_CHIPS)
    }
}

impl Chips {
    pub fn new(total: u32) -> Self {
        Self { total, bet: 0 }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn bet(&self) -> u32 {
        self.bet
    }

    /// Caller has already validated `amount` against the total.
    pub(crate) fn set_bet(&mut self, amount: u32) {
        debug_assert!(amount <= self.total);
        self.bet = amount;
    }

    pub(crate) fn win_bet(&mut self) {
        self.total = self.total.saturating_add(self.bet);
    }

    pub(crate) fn lose_bet(&mut self) {
        self.total = self.total.saturating_sub(self.bet);
    }

    pub(crate) fn clear_bet(&mut self) {
        self.bet = 0;
    }

    pub fn is_broke(&self) -> bool {
        self.total == 0
    }
}

/// Decision offered to the player each time around the turn loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnAction {
    Hit,
    Stand,
}
