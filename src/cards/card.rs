//! Playing cards.
//!
//! Ranks and suits are closed enums, so an unknown rank can never reach the
//! scoring code. Point values live on `Rank` as a lookup; a `Card` itself
//! carries no game state.

use serde::{Deserialize, Serialize};

/// Number of cards in one full set.
pub const DECK_SIZE: usize = 52;

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All 13 ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Face value for scoring. Aces count high; scoring demotes them.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Rank::Ace)
    }

    /// Display label: `"2"`..`"10"`, `"Jack"`, `"Queen"`, `"King"`, `"Ace"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All four suits, in the order a fresh set is laid out.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        };
        f.write_str(name)
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// One full, unshuffled set: suit-major, ranks ascending within a suit.
    #[must_use]
    pub fn full_set() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Two, Suit::Hearts).to_string(), "2 of Hearts");
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).to_string(), "10 of Clubs");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "Ace of Spades");
        assert_eq!(Card::new(Rank::Queen, Suit::Diamonds).to_string(), "Queen of Diamonds");
    }

    #[test]
    fn test_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Nine.value(), 9);
        for face in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(face.value(), 10);
        }
        assert_eq!(Rank::Ace.value(), 11);
        assert!(Rank::Ace.is_ace());
        assert!(!Rank::King.is_ace());
    }

    #[test]
    fn test_full_set() {
        let set = Card::full_set();
        assert_eq!(set.len(), DECK_SIZE);

        let unique: HashSet<_> = set.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);

        assert_eq!(set[0], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(set[51], Card::new(Rank::Ace, Suit::Clubs));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Card::new(Rank::Five, Suit::Hearts), Card::new(Rank::Five, Suit::Hearts));
        assert_ne!(Card::new(Rank::Five, Suit::Hearts), Card::new(Rank::Five, Suit::Spades));
    }

    #[test]
    fn test_serde() {
        let card = Card::new(Rank::King, Suit::Spades);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
