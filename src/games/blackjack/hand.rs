//! Hands held by the player and the dealer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::rules::{self, BLACKJACK};

/// Who holds a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Player,
    Dealer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Player => f.write_str("Player"),
            Role::Dealer => f.write_str("Dealer"),
        }
    }
}

/// An ordered hand of cards.
///
/// Hands only grow, and only the engine appends to them. The score is
/// recomputed from the cards on every call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    role: Role,
    /// SmallVec keeps typical hands (under 8 cards) off the heap.
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    /// An empty hand.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            cards: SmallVec::new(),
        }
    }

    /// A hand holding the given cards, in order.
    #[must_use]
    pub fn from_cards(role: Role, cards: &[Card]) -> Self {
        Self {
            role,
            cards: SmallVec::from_slice(cards),
        }
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        rules::score(&self.cards)
    }

    #[must_use]
    pub fn is_bust(&self) -> bool {
        rules::is_bust(self.score())
    }

    /// Exactly 21, on any number of cards.
    #[must_use]
    pub fn is_twenty_one(&self) -> bool {
        self.score() == BLACKJACK
    }

    /// 21 on the first two cards.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        rules::is_natural(&self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_hand_grows_and_rescores() {
        let mut hand = Hand::new(Role::Player);
        assert!(hand.is_empty());
        assert_eq!(hand.score(), 0);

        hand.push(Card::new(Rank::King, Suit::Hearts));
        hand.push(Card::new(Rank::Seven, Suit::Spades));
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.score(), 17);
        assert!(!hand.is_bust());

        hand.push(Card::new(Rank::Nine, Suit::Clubs));
        assert_eq!(hand.score(), 26);
        assert!(hand.is_bust());
    }

    #[test]
    fn test_natural_vs_three_card_21() {
        let natural = Hand::from_cards(
            Role::Player,
            &[Card::new(Rank::Ace, Suit::Hearts), Card::new(Rank::King, Suit::Spades)],
        );
        assert!(natural.is_natural());
        assert!(natural.is_twenty_one());

        let mut three = Hand::from_cards(
            Role::Player,
            &[Card::new(Rank::Seven, Suit::Hearts), Card::new(Rank::Seven, Suit::Spades)],
        );
        three.extend([Card::new(Rank::Seven, Suit::Clubs)]);
        assert!(three.is_twenty_one());
        assert!(!three.is_natural());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Dealer.to_string(), "Dealer");
        assert_eq!(Hand::new(Role::Dealer).role(), Role::Dealer);
    }
}
