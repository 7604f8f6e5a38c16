//! Card and settlement bindings for Python.

use pyo3::prelude::*;

use crate::cards::Card;
use crate::games::blackjack::Settlement;
use crate::rules::Outcome;

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Rank label: "2".."10", "Jack", "Queen", "King", "Ace".
    #[getter]
    fn rank(&self) -> &'static str {
        self.0.rank().label()
    }

    #[getter]
    fn suit(&self) -> String {
        self.0.suit().to_string()
    }

    /// Face value with aces counted high.
    #[getter]
    fn value(&self) -> u8 {
        self.0.rank().value()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

/// Python wrapper for a settled round.
#[pyclass(name = "Settlement")]
#[derive(Clone, Debug)]
pub struct PySettlement(pub Settlement);

#[pymethods]
impl PySettlement {
    /// "player_wins", "dealer_wins" or "push".
    #[getter]
    fn outcome(&self) -> &'static str {
        match self.0.outcome {
            Outcome::PlayerWins => "player_wins",
            Outcome::DealerWins => "dealer_wins",
            Outcome::Push => "push",
        }
    }

    #[getter]
    fn player_score(&self) -> u8 {
        self.0.player_score
    }

    #[getter]
    fn dealer_score(&self) -> u8 {
        self.0.dealer_score
    }

    #[getter]
    fn wager(&self) -> Option<u64> {
        self.0.wager
    }

    #[getter]
    fn balance(&self) -> Option<u64> {
        self.0.balance
    }

    #[getter]
    fn delta(&self) -> i64 {
        self.0.delta
    }

    fn __repr__(&self) -> String {
        format!(
            "Settlement(outcome={}, player={}, dealer={})",
            self.outcome(),
            self.0.player_score,
            self.0.dealer_score
        )
    }
}
