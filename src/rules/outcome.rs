//! Round outcomes and the dealer's draw policy.

use serde::{Deserialize, Serialize};

use super::scoring::is_bust;

/// Result of a finished round, from the table's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWins,
    DealerWins,
    /// Equal totals; the wager is returned untouched.
    Push,
}

impl Outcome {
    /// Signed multiple of the wager paid to the player.
    #[must_use]
    pub fn payout_factor(self) -> i64 {
        match self {
            Outcome::PlayerWins => 1,
            Outcome::DealerWins => -1,
            Outcome::Push => 0,
        }
    }
}

/// Decide a round from the two final totals.
///
/// A player bust loses even against a dealer bust.
#[must_use]
pub fn determine_outcome(player: u8, dealer: u8) -> Outcome {
    if is_bust(player) {
        Outcome::DealerWins
    } else if is_bust(dealer) {
        Outcome::PlayerWins
    } else if player == dealer {
        Outcome::Push
    } else if dealer > player {
        Outcome::DealerWins
    } else {
        Outcome::PlayerWins
    }
}

/// Should the dealer take another card?
///
/// The dealer chases the player's total instead of standing on 17: it draws
/// while strictly behind and not yet bust.
#[must_use]
pub fn dealer_should_draw(dealer: u8, player: u8) -> bool {
    dealer < player && !is_bust(dealer)
}
