//! Game implementations built on the card and rules modules.

pub mod blackjack;
