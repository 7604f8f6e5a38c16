//! Text rendering for console front ends.
//!
//! ```text
//! Dealer Hand:
//!     King of Hearts, UNKNOWN
//! Player Hand:
//!     7 of Clubs, Ace of Spades
//!     Points: 18
//! ==================================================
//! ```

use super::hand::Hand;
use super::round::Round;
use super::settlement::Settlement;
use crate::rules::Outcome;

/// Placeholder for face-down cards.
pub const HIDDEN_CARD: &str = "UNKNOWN";

/// Render one hand.
///
/// With `reveal` every card and the score are shown. Otherwise only the
/// first card is shown, then a placeholder, and no score.
#[must_use]
pub fn render_hand(hand: &Hand, reveal: bool) -> String {
    let header = format!("{} Hand:", hand.role());
    if reveal {
        let cards = hand
            .cards()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{header}\n\t{cards}\n\tPoints: {}", hand.score())
    } else {
        match hand.cards().first() {
            Some(first) => format!("{header}\n\t{first}, {HIDDEN_CARD}"),
            None => format!("{header}\n\t{HIDDEN_CARD}"),
        }
    }
}

/// Render both hands, dealer first.
///
/// The dealer's hole card stays hidden only while the player is deciding.
#[must_use]
pub fn render_round(round: &Round) -> String {
    let reveal_dealer = !round.phase().is_live();
    format!(
        "{}\n{}\n{}",
        render_hand(round.dealer(), reveal_dealer),
        render_hand(round.player(), true),
        "=".repeat(50)
    )
}

/// Game-over banner from the player's perspective.
#[must_use]
pub fn render_outcome(settlement: &Settlement) -> String {
    let verdict = match settlement.outcome {
        Outcome::PlayerWins => "YOU WIN",
        Outcome::DealerWins => "YOU LOSE",
        Outcome::Push => "DRAW",
    };
    let mut banner = format!("** Game Over -- {verdict} **");
    if let Some(balance) = settlement.balance {
        banner.push_str(&format!("\nBalance: {balance}"));
    }
    banner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::core::Phase;
    use crate::games::blackjack::Role;

    fn dealer_hand() -> Hand {
        Hand::from_cards(
            Role::Dealer,
            &[Card::new(Rank::King, Suit::Hearts), Card::new(Rank::Six, Suit::Clubs)],
        )
    }

    #[test]
    fn test_revealed_hand() {
        assert_eq!(
            render_hand(&dealer_hand(), true),
            "Dealer Hand:\n\tKing of Hearts, 6 of Clubs\n\tPoints: 16"
        );
    }

    #[test]
    fn test_concealed_hand() {
        let text = render_hand(&dealer_hand(), false);
        assert_eq!(text, "Dealer Hand:\n\tKing of Hearts, UNKNOWN");
        assert!(!text.contains("Points"));
        assert!(!text.contains("6 of Clubs"));
    }

    #[test]
    fn test_round_conceals_dealer_only_while_live() {
        let mut round = Round::new();
        round.dealer = dealer_hand();
        round.player = Hand::from_cards(
            Role::Player,
            &[Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Seven, Suit::Clubs)],
        );

        round.phase = Phase::RoundInProgress;
        let live = render_round(&round);
        assert!(live.contains(HIDDEN_CARD));
        assert!(live.contains("Player Hand:\n\tAce of Spades, 7 of Clubs\n\tPoints: 18"));
        assert!(live.ends_with(&"=".repeat(50)));

        round.phase = Phase::RoundOver;
        let over = render_round(&round);
        assert!(!over.contains(HIDDEN_CARD));
        assert!(over.contains("Points: 16"));
    }

    #[test]
    fn test_outcome_banner() {
        let mut settlement = Settlement {
            outcome: Outcome::Push,
            player_score: 20,
            dealer_score: 20,
            wager: None,
            balance: None,
            delta: 0,
        };
        assert_eq!(render_outcome(&settlement), "** Game Over -- DRAW **");

        settlement.outcome = Outcome::DealerWins;
        settlement.balance = Some(90);
        assert_eq!(render_outcome(&settlement), "** Game Over -- YOU LOSE **\nBalance: 90");
    }
}
