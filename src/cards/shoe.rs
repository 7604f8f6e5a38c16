//! The shoe: undealt cards, dealt from the front.
//!
//! ## Invariants
//!
//! - A new shoe holds one full 52-card set, shuffled.
//! - Dealing never fails for lack of cards. When a request exceeds what is
//!   left, fresh shuffled sets are appended behind the remaining cards first.
//! - The count only moves by cards dealt (down) and whole sets of 52 (up).
//!
//! Cards live in an `im::Vector`, so splitting dealt cards off the front is
//! O(log n) and cloning a shoe is O(1).

use im::Vector;
use tracing::debug;

use super::card::{Card, DECK_SIZE};
use crate::core::{BlackjackError, GameRng, Result};

/// An ordered pool of undealt cards.
#[derive(Clone, Debug)]
pub struct Shoe {
    cards: Vector<Card>,
    rng: GameRng,
    /// Full sets added after construction.
    reshuffles: u32,
}

impl Shoe {
    /// A shuffled 52-card shoe drawing randomness from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        let mut shoe = Self {
            cards: Vector::new(),
            rng,
            reshuffles: 0,
        };
        shoe.cards = shoe.fresh_set();
        shoe
    }

    /// A shuffled shoe with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// A shuffled shoe seeded from entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    /// A shoe stacked in exactly the given order, front first.
    ///
    /// The stack is not shuffled. Sets appended later are, using `rng`.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>, rng: GameRng) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            rng,
            reshuffles: 0,
        }
    }

    /// Reorder the remaining cards with a uniform random permutation.
    pub fn shuffle(&mut self) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        self.rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Remove and return the first `n` cards.
    ///
    /// Tops the shoe up with fresh sets first if fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>> {
        if n == 0 {
            return Err(BlackjackError::InvalidArgument(
                "cannot deal zero cards".to_string(),
            ));
        }
        self.ensure(n);

        let rest = self.cards.split_off(n);
        let dealt = std::mem::replace(&mut self.cards, rest);
        Ok(dealt.into_iter().collect())
    }

    /// Deal a single card.
    pub fn deal_one(&mut self) -> Card {
        self.ensure(1);
        match self.cards.pop_front() {
            Some(card) => card,
            None => unreachable!("shoe was topped up before dealing"),
        }
    }

    /// Append fresh sets until at least `n` cards remain.
    pub fn ensure(&mut self, n: usize) {
        while self.cards.len() < n {
            self.add_deck();
        }
    }

    /// Append one freshly shuffled 52-card set behind the remaining cards.
    pub fn add_deck(&mut self) {
        let set = self.fresh_set();
        self.cards.append(set);
        self.reshuffles += 1;
        debug!(
            remaining = self.cards.len(),
            reshuffles = self.reshuffles,
            "added fresh deck to shoe"
        );
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// How many sets have been appended since construction.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    /// A random card from the shoe, left in place.
    pub fn draw_one(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let index = self.rng.gen_range_usize(0..self.cards.len());
        self.cards.get(index).copied()
    }

    /// Undealt cards in deal order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The seed behind this shoe's shuffles.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn fresh_set(&mut self) -> Vector<Card> {
        let mut set = Card::full_set();
        self.rng.shuffle(&mut set);
        set.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use std::collections::HashSet;

    #[test]
    fn test_new_shoe_is_full_set() {
        let shoe = Shoe::seeded(42);
        assert_eq!(shoe.cards_remaining(), DECK_SIZE);

        let unique: HashSet<_> = shoe.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_new_shoe_is_shuffled() {
        let shoe = Shoe::seeded(42);
        let order: Vec<_> = shoe.iter().copied().collect();
        assert_ne!(order, Card::full_set());
    }

    #[test]
    fn test_same_seed_same_order() {
        let a: Vec<_> = Shoe::seeded(7).iter().copied().collect();
        let b: Vec<_> = Shoe::seeded(7).iter().copied().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_takes_from_front() {
        let stack = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Two, Suit::Clubs),
        ];
        let mut shoe = Shoe::from_cards(stack.clone(), GameRng::new(1));

        let dealt = shoe.deal(2).unwrap();
        assert_eq!(dealt, stack[..2].to_vec());
        assert_eq!(shoe.cards_remaining(), 1);
        assert_eq!(shoe.deal_one(), stack[2]);
        assert_eq!(shoe.cards_remaining(), 0);
    }

    #[test]
    fn test_deal_zero_is_invalid() {
        let mut shoe = Shoe::seeded(1);
        assert!(matches!(shoe.deal(0), Err(BlackjackError::InvalidArgument(_))));
        assert_eq!(shoe.cards_remaining(), DECK_SIZE);
    }

    #[test]
    fn test_deal_past_end_appends_fresh_set() {
        let stack = vec![
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Six, Suit::Hearts),
        ];
        let mut shoe = Shoe::from_cards(stack.clone(), GameRng::new(3));

        let dealt = shoe.deal(4).unwrap();

        // Old cards come out first, then the fresh set
        assert_eq!(&dealt[..2], &stack[..]);
        assert_eq!(shoe.cards_remaining(), 2 + DECK_SIZE - 4);
        assert_eq!(shoe.reshuffles(), 1);
    }

    #[test]
    fn test_deal_one_from_empty_shoe() {
        let mut shoe = Shoe::from_cards(Vec::new(), GameRng::new(3));
        shoe.deal_one();
        assert_eq!(shoe.cards_remaining(), DECK_SIZE - 1);
    }

    #[test]
    fn test_large_deal_appends_multiple_sets() {
        let mut shoe = Shoe::seeded(5);
        let dealt = shoe.deal(120).unwrap();

        assert_eq!(dealt.len(), 120);
        assert_eq!(shoe.reshuffles(), 2);
        assert_eq!(shoe.cards_remaining(), 3 * DECK_SIZE - 120);
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut shoe = Shoe::seeded(11);
        shoe.deal(10).unwrap();

        let mut before: Vec<_> = shoe.iter().copied().collect();
        shoe.shuffle();
        let mut after: Vec<_> = shoe.iter().copied().collect();

        assert_eq!(after.len(), before.len());
        before.sort_by_key(|c| (c.suit(), c.rank()));
        after.sort_by_key(|c| (c.suit(), c.rank()));
        assert_eq!(before, after);
    }

    #[test]
    fn test_draw_one_leaves_card() {
        let mut shoe = Shoe::seeded(2);
        let card = shoe.draw_one().unwrap();

        assert_eq!(shoe.cards_remaining(), DECK_SIZE);
        assert!(shoe.iter().any(|&c| c == card));

        let mut empty = Shoe::from_cards(Vec::new(), GameRng::new(2));
        assert_eq!(empty.draw_one(), None);
    }
}
