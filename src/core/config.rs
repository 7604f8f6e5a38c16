//! Table configuration.
//!
//! A table is configured once, at construction:
//! - `seed`: fixes the shuffle order so a session can be replayed
//! - `starting_bankroll`: turns wagering on
//!
//! Both default to off, which gives a free-play table with entropy shuffles.

use serde::{Deserialize, Serialize};

use super::error::{BlackjackError, Result};
use super::rng::GameRng;

/// Largest opening balance a table accepts.
///
/// Settlement reports signed deltas, so any single wager must fit in `i64`.
pub const MAX_BANKROLL: u64 = i64::MAX as u64;

/// Complete table configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// RNG seed for the shoe. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Opening balance. `None` plays without wagers.
    pub starting_bankroll: Option<u64>,
}

impl TableConfig {
    /// Create a free-play configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable wagering with the given opening balance.
    #[must_use]
    pub fn with_bankroll(mut self, balance: u64) -> Self {
        self.starting_bankroll = Some(balance);
        self
    }

    /// Are wagers required on this table?
    #[must_use]
    pub fn is_wagering(&self) -> bool {
        self.starting_bankroll.is_some()
    }

    /// Reject configurations no round could be played under.
    pub fn validate(&self) -> Result<()> {
        match self.starting_bankroll {
            Some(0) => Err(BlackjackError::InvalidArgument(
                "starting bankroll must be positive".to_string(),
            )),
            Some(balance) if balance > MAX_BANKROLL => Err(BlackjackError::InvalidArgument(
                format!("starting bankroll must be at most {MAX_BANKROLL}"),
            )),
            _ => Ok(()),
        }
    }

    /// Build the RNG this configuration asks for.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_free_play() {
        let config = TableConfig::new();
        assert_eq!(config.seed, None);
        assert!(!config.is_wagering());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = TableConfig::new().with_seed(9).with_bankroll(250);

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.starting_bankroll, Some(250));
        assert!(config.is_wagering());
        assert_eq!(config.rng().seed(), 9);
    }

    #[test]
    fn test_zero_bankroll_rejected() {
        let config = TableConfig::new().with_bankroll(0);
        assert!(matches!(
            config.validate(),
            Err(BlackjackError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bankroll_upper_bound() {
        assert!(TableConfig::new().with_bankroll(MAX_BANKROLL).validate().is_ok());
        assert!(matches!(
            TableConfig::new().with_bankroll(MAX_BANKROLL + 1).validate(),
            Err(BlackjackError::InvalidArgument(_))
        ));
        assert!(TableConfig::new().with_bankroll(u64::MAX).validate().is_err());
    }

    #[test]
    fn test_serde() {
        let config = TableConfig::new().with_seed(3).with_bankroll(100);

        let json = serde_json::to_string(&config).unwrap();
        let back: TableConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, back);
    }
}
