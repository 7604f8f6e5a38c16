//! Engine errors.
//!
//! Every failure the engine can report is a caller mistake that the
//! presentation loop can recover from by re-prompting. None of them are fatal.

use thiserror::Error;

use super::Phase;

/// Errors returned by shoe, table and wagering operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlackjackError {
    /// A malformed argument: zero-card deal, unknown action token, bad config.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation called in the wrong phase, e.g. `hit` after the round ended.
    #[error("cannot {operation} while {phase}")]
    PreconditionViolation {
        operation: &'static str,
        phase: Phase,
    },

    /// A wager outside `1..=balance`.
    #[error("invalid wager {wager}: must be between 1 and {balance}")]
    InvalidWager { wager: u64, balance: u64 },

    /// Wagering is on but no wager was placed for this round.
    #[error("no wager placed for this round")]
    MissingWager,

    /// A wager was offered to a table without a bankroll.
    #[error("wagering is disabled for this table")]
    WageringDisabled,
}

impl BlackjackError {
    pub(crate) fn precondition(operation: &'static str, phase: Phase) -> Self {
        BlackjackError::PreconditionViolation { operation, phase }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BlackjackError>;
