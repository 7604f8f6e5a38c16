//! One deal-to-settlement cycle.

use serde::{Deserialize, Serialize};

use super::hand::{Hand, Role};
use crate::core::Phase;

/// The live (or most recently finished) round.
///
/// A round is replaced wholesale by the next `deal`; until then the finished
/// hands stay readable for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub(crate) player: Hand,
    pub(crate) dealer: Hand,
    pub(crate) wager: Option<u64>,
    pub(crate) phase: Phase,
}

impl Round {
    /// An empty round waiting for cards.
    #[must_use]
    pub fn new() -> Self {
        Self {
            player: Hand::new(Role::Player),
            dealer: Hand::new(Role::Dealer),
            wager: None,
            phase: Phase::AwaitingDeal,
        }
    }

    #[must_use]
    pub fn player(&self) -> &Hand {
        &self.player
    }

    #[must_use]
    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Wager fixed for this round, if the table takes wagers.
    #[must_use]
    pub fn wager(&self) -> Option<u64> {
        self.wager
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn player_score(&self) -> u8 {
        self.player.score()
    }

    #[must_use]
    pub fn dealer_score(&self) -> u8 {
        self.dealer.score()
    }

    /// Both hands are final.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::RoundOver
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
