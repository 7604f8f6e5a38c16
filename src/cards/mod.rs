//! Cards and the shoe.
//!
//! - `Card`, `Rank`, `Suit`: immutable card values
//! - `Shoe`: the undealt pool, reshuffled on demand
//!
//! Nothing here knows blackjack rules beyond a rank's face value.

pub mod card;
pub mod shoe;

pub use card::{Card, Rank, Suit, DECK_SIZE};
pub use shoe::Shoe;
