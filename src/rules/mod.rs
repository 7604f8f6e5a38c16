//! Blackjack rules as pure functions.
//!
//! - `score`: hand total with ace demotion
//! - `determine_outcome`: who won, from two final totals
//! - `dealer_should_draw`: the dealer's player-relative draw policy
//!
//! The game engine calls into these but they never see engine state.

pub mod scoring;
pub mod outcome;

pub use scoring::{is_bust, is_natural, score, BLACKJACK};
pub use outcome::{dealer_should_draw, determine_outcome, Outcome};
