//! Hand scoring.
//!
//! Scoring is a pure function of the cards; it never touches a hand.

use crate::cards::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Score a hand.
///
/// Numerals count at face value, faces as 10 and every ace starts at 11.
/// While the total is over 21 and some ace still counts 11, one ace is
/// demoted to 1. A total still over 21 after that is a bust.
///
/// The sum is taken at full width, so arbitrarily long hands score exactly;
/// only a final total beyond `u8::MAX` is clamped.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    let mut total: usize = 0;
    let mut high_aces: usize = 0;

    for card in cards {
        let rank = card.rank();
        if rank.is_ace() {
            high_aces += 1;
        }
        total += usize::from(rank.value());
    }

    while total > usize::from(BLACKJACK) && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }

    u8::try_from(total).unwrap_or(u8::MAX)
}

/// Is this total over 21?
#[must_use]
pub fn is_bust(total: u8) -> bool {
    total > BLACKJACK
}

/// Two cards totalling exactly 21.
#[must_use]
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == BLACKJACK
}
