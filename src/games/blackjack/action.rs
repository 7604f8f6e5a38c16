//! Player decisions as typed by a presentation loop.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::BlackjackError;

/// The two decisions open to the player mid-round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    Hit,
    Stand,
}

impl PlayerAction {
    /// The token that selects this action at a prompt.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            PlayerAction::Hit => "hit",
            PlayerAction::Stand => "stay",
        }
    }
}

impl FromStr for PlayerAction {
    type Err = BlackjackError;

    /// Accepts exactly `hit` or `stay`, ignoring case and surrounding space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hit" => Ok(PlayerAction::Hit),
            "stay" => Ok(PlayerAction::Stand),
            other => Err(BlackjackError::InvalidArgument(format!(
                "expected `hit` or `stay`, got `{other}`"
            ))),
        }
    }
}

impl std::fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
