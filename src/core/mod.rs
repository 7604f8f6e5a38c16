//! Core engine types: RNG, configuration, round phase, errors.
//!
//! Nothing in here knows how blackjack is scored; the card and game modules
//! build on these pieces.

pub mod rng;
pub mod config;
pub mod phase;
pub mod error;

pub use rng::GameRng;
pub use config::{TableConfig, MAX_BANKROLL};
pub use phase::Phase;
pub use error::{BlackjackError, Result};
