//! Python bindings for the blackjack engine.
//!
//! # Quick Start
//!
//! ```python
//! import blackjack_engine as bj
//!
//! table = bj.Blackjack(seed=42, bankroll=100)
//! table.place_wager(10)
//! table.deal()
//! while table.phase == "round in progress":
//!     table.act("hit" if table.player_score < 17 else "stay")
//! result = table.settle()
//! print(result.outcome, result.balance)
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::BlackjackError;

mod py_cards;
mod py_table;

pub use py_cards::*;
pub use py_table::*;

impl From<BlackjackError> for PyErr {
    fn from(err: BlackjackError) -> Self {
        match &err {
            BlackjackError::PreconditionViolation { .. } => PyRuntimeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// blackjack_engine: a player-vs-dealer blackjack table.
#[pymodule]
fn blackjack_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PySettlement>()?;
    m.add_class::<PyBlackjack>()?;
    Ok(())
}
