//! The blackjack table.

use tracing::{debug, info};

use super::action::PlayerAction;
use super::bankroll::Bankroll;
use super::round::Round;
use super::settlement::Settlement;
use crate::cards::Shoe;
use crate::core::{BlackjackError, Phase, Result, TableConfig};
use crate::rules::{self, BLACKJACK};

/// Cards consumed by the opening deal.
const OPENING_CARDS: usize = 4;

/// A single-seat blackjack table.
///
/// Owns the shoe, the current round and the bankroll. Everything mutates
/// through the operations below; callers only ever see shared references.
#[derive(Clone, Debug)]
pub struct Blackjack {
    config: TableConfig,
    shoe: Shoe,
    round: Round,
    bankroll: Option<Bankroll>,
    /// Wager placed for the next deal.
    pending_wager: Option<u64>,
}

impl Blackjack {
    /// Open a table with a freshly shuffled shoe.
    pub fn new(config: TableConfig) -> Result<Self> {
        config.validate()?;
        let shoe = Shoe::new(config.rng());
        Self::with_shoe(config, shoe)
    }

    /// Open a table over a prepared shoe.
    ///
    /// The shoe brings its own RNG; the stored config records the shoe's
    /// seed in place of whatever seed was passed in.
    pub fn with_shoe(mut config: TableConfig, shoe: Shoe) -> Result<Self> {
        config.validate()?;
        config.seed = Some(shoe.seed());
        info!(
            seed = shoe.seed(),
            bankroll = ?config.starting_bankroll,
            "table opened"
        );
        Ok(Self {
            config,
            shoe,
            round: Round::new(),
            bankroll: config.starting_bankroll.map(Bankroll::new),
            pending_wager: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.phase
    }

    /// The live round, or the last one until the next deal.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn bankroll(&self) -> Option<&Bankroll> {
        self.bankroll.as_ref()
    }

    #[must_use]
    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    #[must_use]
    pub fn pending_wager(&self) -> Option<u64> {
        self.pending_wager
    }

    /// Fix the wager for the next round.
    ///
    /// Must satisfy `0 < amount <= balance`. Placing again before the deal
    /// replaces the earlier wager.
    pub fn place_wager(&mut self, amount: u64) -> Result<()> {
        self.require(Phase::AwaitingDeal, "place a wager")?;
        let bankroll = self.bankroll.as_ref().ok_or(BlackjackError::WageringDisabled)?;
        bankroll.validate(amount)?;
        self.pending_wager = Some(amount);
        Ok(())
    }

    /// Deal two cards to the dealer, then two to the player.
    ///
    /// A natural 21 runs the dealer immediately and ends the round.
    pub fn deal(&mut self) -> Result<&Round> {
        self.require(Phase::AwaitingDeal, "deal")?;
        let wager = if self.bankroll.is_some() {
            Some(self.pending_wager.take().ok_or(BlackjackError::MissingWager)?)
        } else {
            None
        };

        self.shoe.ensure(OPENING_CARDS);
        let mut round = Round::new();
        round.wager = wager;
        round.dealer.extend(self.shoe.deal(2)?);
        round.player.extend(self.shoe.deal(2)?);
        round.phase = Phase::RoundInProgress;
        self.round = round;

        debug!(
            player = self.round.player_score(),
            dealer = self.round.dealer_score(),
            remaining = self.shoe.cards_remaining(),
            "dealt round"
        );

        if self.round.player.is_natural() {
            debug!("player natural 21");
            self.run_dealer();
        }
        Ok(&self.round)
    }

    /// Deal one card to the player.
    ///
    /// A bust ends the round; exactly 21 stands automatically.
    pub fn hit(&mut self) -> Result<&Round> {
        self.require(Phase::RoundInProgress, "hit")?;
        let card = self.shoe.deal_one();
        self.round.player.push(card);

        let score = self.round.player_score();
        debug!(%card, score, "player hits");

        if rules::is_bust(score) {
            self.round.phase = Phase::RoundOver;
        } else if score == BLACKJACK {
            self.run_dealer();
        }
        Ok(&self.round)
    }

    /// End the player's turn and play out the dealer.
    pub fn stand(&mut self) -> Result<&Round> {
        self.require(Phase::RoundInProgress, "stand")?;
        self.run_dealer();
        Ok(&self.round)
    }

    /// Dispatch a parsed prompt answer.
    pub fn act(&mut self, action: PlayerAction) -> Result<&Round> {
        match action {
            PlayerAction::Hit => self.hit(),
            PlayerAction::Stand => self.stand(),
        }
    }

    /// Resolve the finished round and pay or collect the wager.
    ///
    /// Returns the table to `AwaitingDeal`, so a second call is rejected.
    pub fn settle(&mut self) -> Result<Settlement> {
        self.require(Phase::RoundOver, "settle")?;

        let player_score = self.round.player_score();
        let dealer_score = self.round.dealer_score();
        let outcome = rules::determine_outcome(player_score, dealer_score);

        let (wager, balance, delta) = match self.bankroll.as_mut() {
            Some(bankroll) => {
                let wager = self.round.wager.ok_or(BlackjackError::MissingWager)?;
                let delta = bankroll.apply(outcome, wager);
                (Some(wager), Some(bankroll.balance()), delta)
            }
            None => (None, None, 0),
        };
        self.round.phase = Phase::AwaitingDeal;

        info!(
            ?outcome,
            player = player_score,
            dealer = dealer_score,
            ?wager,
            ?balance,
            "round settled"
        );

        Ok(Settlement {
            outcome,
            player_score,
            dealer_score,
            wager,
            balance,
            delta,
        })
    }

    /// Draw for the dealer until it catches the player or busts.
    ///
    /// Terminates: every draw raises the dealer's total by at least one and
    /// the player's total is fixed.
    fn run_dealer(&mut self) {
        let player = self.round.player_score();
        while rules::dealer_should_draw(self.round.dealer_score(), player) {
            let card = self.shoe.deal_one();
            self.round.dealer.push(card);
            debug!(%card, dealer = self.round.dealer_score(), player, "dealer draws");
        }
        self.round.phase = Phase::RoundOver;
    }

    fn require(&self, phase: Phase, operation: &'static str) -> Result<()> {
        if self.round.phase != phase {
            return Err(BlackjackError::precondition(operation, self.round.phase));
        }
        Ok(())
    }
}
