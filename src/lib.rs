//! # blackjack-engine
//!
//! A player-vs-dealer blackjack engine: shoe management, hand scoring with
//! variable-value aces, turn progression, dealer automation and wager
//! settlement.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: scoring and outcome decisions are free functions over
//!    card slices and totals. Only the table mutates hands.
//!
//! 2. **Explicit Lifecycle**: a round moves through `Phase` values; calling an
//!    operation in the wrong phase is an error, never a silent no-op.
//!
//! 3. **Never Run Dry**: the shoe appends freshly shuffled sets on demand, so
//!    a deal cannot fail for lack of cards.
//!
//! ## Modules
//!
//! - `core`: RNG, table configuration, round phase, errors
//! - `cards`: cards and the shoe
//! - `rules`: scoring, outcomes, dealer draw policy
//! - `games`: the blackjack table and its text renderer
//!
//! ## Example
//!
//! ```
//! use blackjack_engine::{Blackjack, Phase, TableConfig};
//!
//! let mut table = Blackjack::new(TableConfig::new().with_seed(7).with_bankroll(100)).unwrap();
//! table.place_wager(10).unwrap();
//! table.deal().unwrap();
//! if table.phase() == Phase::RoundInProgress {
//!     table.stand().unwrap();
//! }
//! let settlement = table.settle().unwrap();
//! assert!(settlement.balance.is_some());
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{BlackjackError, GameRng, Phase, Result, TableConfig, MAX_BANKROLL};

pub use crate::cards::{Card, Rank, Shoe, Suit, DECK_SIZE};

pub use crate::rules::{determine_outcome, score, Outcome};

pub use crate::games::blackjack::{
    Bankroll, Blackjack, Hand, PlayerAction, Role, Round, Settlement,
};
