//! Session bankroll.
//!
//! The bankroll outlives rounds. A wager is checked against it when placed,
//! so no single settlement can take the balance below zero. Totals saturate
//! instead of wrapping.

use serde::{Deserialize, Serialize};

use crate::core::{BlackjackError, Result};
use crate::rules::Outcome;

/// Running balance plus cumulative session totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bankroll {
    balance: u64,
    total_won: u64,
    total_lost: u64,
    rounds_settled: u32,
}

impl Bankroll {
    #[must_use]
    pub fn new(balance: u64) -> Self {
        Self {
            balance,
            total_won: 0,
            total_lost: 0,
            rounds_settled: 0,
        }
    }

    #[must_use]
    pub fn balance(&self) -> u64 {
        self.balance
    }

    #[must_use]
    pub fn total_won(&self) -> u64 {
        self.total_won
    }

    #[must_use]
    pub fn total_lost(&self) -> u64 {
        self.total_lost
    }

    #[must_use]
    pub fn rounds_settled(&self) -> u32 {
        self.rounds_settled
    }

    /// Session profit (negative for a loss).
    #[must_use]
    pub fn net(&self) -> i64 {
        let net = i128::from(self.total_won) - i128::from(self.total_lost);
        i64::try_from(net).unwrap_or(if net < 0 { i64::MIN } else { i64::MAX })
    }

    /// Check `0 < wager <= balance`.
    pub fn validate(&self, wager: u64) -> Result<()> {
        if wager == 0 || wager > self.balance {
            return Err(BlackjackError::InvalidWager {
                wager,
                balance: self.balance,
            });
        }
        Ok(())
    }

    /// Apply a settled round. Returns the signed change to the balance.
    pub(crate) fn apply(&mut self, outcome: Outcome, wager: u64) -> i64 {
        self.rounds_settled = self.rounds_settled.saturating_add(1);
        match outcome {
            Outcome::PlayerWins => {
                self.balance = self.balance.saturating_add(wager);
                self.total_won = self.total_won.saturating_add(wager);
            }
            Outcome::DealerWins => {
                self.balance = self.balance.saturating_sub(wager);
                self.total_lost = self.total_lost.saturating_add(wager);
            }
            Outcome::Push => {}
        }
        outcome.payout_factor() * i64::try_from(wager).unwrap_or(i64::MAX)
    }

    /// Nothing left to wager.
    #[must_use]
    pub fn is_broke(&self) -> bool {
        self.balance == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let bankroll = Bankroll::new(100);
        assert!(bankroll.validate(1).is_ok());
        assert!(bankroll.validate(100).is_ok());
        assert_eq!(
            bankroll.validate(0),
            Err(BlackjackError::InvalidWager { wager: 0, balance: 100 })
        );
        assert_eq!(
            bankroll.validate(101),
            Err(BlackjackError::InvalidWager { wager: 101, balance: 100 })
        );
    }

    #[test]
    fn test_apply_outcomes() {
        let mut bankroll = Bankroll::new(100);

        assert_eq!(bankroll.apply(Outcome::PlayerWins, 20), 20);
        assert_eq!(bankroll.balance(), 120);

        assert_eq!(bankroll.apply(Outcome::DealerWins, 50), -50);
        assert_eq!(bankroll.balance(), 70);

        assert_eq!(bankroll.apply(Outcome::Push, 70), 0);
        assert_eq!(bankroll.balance(), 70);

        assert_eq!(bankroll.total_won(), 20);
        assert_eq!(bankroll.total_lost(), 50);
        assert_eq!(bankroll.net(), -30);
        assert_eq!(bankroll.rounds_settled(), 3);
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let mut bankroll = Bankroll::new(u64::MAX);

        assert_eq!(bankroll.apply(Outcome::PlayerWins, u64::MAX), i64::MAX);
        assert_eq!(bankroll.balance(), u64::MAX);
        assert_eq!(bankroll.total_won(), u64::MAX);
        assert_eq!(bankroll.net(), i64::MAX);

        assert_eq!(bankroll.apply(Outcome::DealerWins, u64::MAX), -i64::MAX);
        assert_eq!(bankroll.balance(), 0);
        assert_eq!(bankroll.net(), 0);
    }

    #[test]
    fn test_broke() {
        let mut bankroll = Bankroll::new(10);
        bankroll.apply(Outcome::DealerWins, 10);
        assert!(bankroll.is_broke());
        assert!(bankroll.validate(1).is_err());
    }
}
