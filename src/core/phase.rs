//! Round lifecycle.

use serde::{Deserialize, Serialize};

/// Where the table is in the deal-to-settlement cycle.
///
/// `AwaitingDeal -> RoundInProgress -> RoundOver -> AwaitingDeal`. A natural
/// 21 skips straight from the deal to `RoundOver`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No live round; a wager may be placed and cards dealt.
    #[default]
    AwaitingDeal,
    /// Cards are out and the player is deciding.
    RoundInProgress,
    /// Both hands are final; the round must be settled.
    RoundOver,
}

impl Phase {
    /// Is the player still allowed to hit or stand?
    #[must_use]
    pub fn is_live(self) -> bool {
        self == Phase::RoundInProgress
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::AwaitingDeal => "awaiting deal",
            Phase::RoundInProgress => "round in progress",
            Phase::RoundOver => "round over",
        };
        f.write_str(name)
    }
}
