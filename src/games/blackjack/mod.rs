//! Single-seat blackjack against an automated dealer.
//!
//! - Dealer gets two cards, then the player gets two
//! - A natural 21 plays the dealer out immediately
//! - The player hits until standing, busting or reaching 21
//! - The dealer draws while behind the player's total
//! - Optional wagers settle at even money against a session bankroll

mod action;
mod bankroll;
mod game;
mod hand;
pub mod render;
mod round;
mod settlement;

pub use action::PlayerAction;
pub use bankroll::Bankroll;
pub use game::Blackjack;
pub use hand::{Hand, Role};
pub use round::Round;
pub use settlement::Settlement;
