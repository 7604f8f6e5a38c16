//! Settled round results.

use serde::{Deserialize, Serialize};

use crate::rules::{self, Outcome};

/// What `settle` reports back to the presentation loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub outcome: Outcome,
    pub player_score: u8,
    pub dealer_score: u8,
    /// The round's wager, on wagering tables.
    pub wager: Option<u64>,
    /// Balance after the wager was applied, on wagering tables.
    pub balance: Option<u64>,
    /// Signed change to the balance (0 on free-play tables and pushes).
    pub delta: i64,
}

impl Settlement {
    #[must_use]
    pub fn player_busted(&self) -> bool {
        rules::is_bust(self.player_score)
    }

    #[must_use]
    pub fn dealer_busted(&self) -> bool {
        rules::is_bust(self.dealer_score)
    }
}
