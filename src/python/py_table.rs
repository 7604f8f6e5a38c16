//! Table bindings for Python.

use pyo3::prelude::*;

use crate::core::TableConfig;
use crate::games::blackjack::render::render_round;
use crate::games::blackjack::{Blackjack, PlayerAction};

use super::py_cards::{PyCard, PySettlement};

/// Python wrapper for the blackjack table.
///
/// Engine errors raise `RuntimeError` for wrong-phase calls and
/// `ValueError` for bad arguments or wagers.
#[pyclass(name = "Blackjack")]
pub struct PyBlackjack {
    table: Blackjack,
}

#[pymethods]
impl PyBlackjack {
    /// Open a table.
    ///
    /// # Arguments
    /// - seed: RNG seed for a reproducible shoe
    /// - bankroll: opening balance; omit to play without wagers
    #[new]
    #[pyo3(signature = (seed = None, bankroll = None))]
    fn new(seed: Option<u64>, bankroll: Option<u64>) -> PyResult<Self> {
        let config = TableConfig {
            seed,
            starting_bankroll: bankroll,
        };
        Ok(Self {
            table: Blackjack::new(config)?,
        })
    }

    fn place_wager(&mut self, amount: u64) -> PyResult<()> {
        Ok(self.table.place_wager(amount)?)
    }

    fn deal(&mut self) -> PyResult<()> {
        self.table.deal()?;
        Ok(())
    }

    fn hit(&mut self) -> PyResult<()> {
        self.table.hit()?;
        Ok(())
    }

    fn stand(&mut self) -> PyResult<()> {
        self.table.stand()?;
        Ok(())
    }

    /// Apply a prompt token: "hit" or "stay".
    fn act(&mut self, token: &str) -> PyResult<()> {
        let action: PlayerAction = token.parse()?;
        self.table.act(action)?;
        Ok(())
    }

    fn settle(&mut self) -> PyResult<PySettlement> {
        Ok(PySettlement(self.table.settle()?))
    }

    /// "awaiting deal", "round in progress" or "round over".
    #[getter]
    fn phase(&self) -> String {
        self.table.phase().to_string()
    }

    #[getter]
    fn player_cards(&self) -> Vec<PyCard> {
        self.table.round().player().cards().iter().copied().map(PyCard).collect()
    }

    /// Full dealer hand, hole card included.
    #[getter]
    fn dealer_cards(&self) -> Vec<PyCard> {
        self.table.round().dealer().cards().iter().copied().map(PyCard).collect()
    }

    #[getter]
    fn player_score(&self) -> u8 {
        self.table.round().player_score()
    }

    #[getter]
    fn dealer_score(&self) -> u8 {
        self.table.round().dealer_score()
    }

    #[getter]
    fn balance(&self) -> Option<u64> {
        self.table.bankroll().map(|b| b.balance())
    }

    #[getter]
    fn cards_remaining(&self) -> usize {
        self.table.shoe().cards_remaining()
    }

    /// Console rendering, hole card hidden while the round is live.
    fn render(&self) -> String {
        render_round(self.table.round())
    }

    fn __repr__(&self) -> String {
        format!(
            "Blackjack(phase={}, player={}, balance={:?})",
            self.table.phase(),
            self.table.round().player_score(),
            self.balance()
        )
    }
}
