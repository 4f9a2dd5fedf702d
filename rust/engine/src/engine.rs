use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::player::{Chips, TurnAction};
use crate::rules::{resolve, validate_bet, Outcome, Rules};
use crate::scoring::BUST_LIMIT;

/// Where the current round stands.
///
/// Every transition method on [`Engine`] returns the phase it moved to, so
/// callers drive the loop from return values instead of shared flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No round dealt yet in this session.
    Idle,
    /// Waiting for a bet; hands are empty.
    Betting,
    /// Player may hit or stand.
    PlayerTurn,
    /// Player went over 21; the dealer does not play.
    PlayerBust,
    /// Player stood; dealer draws next.
    DealerTurn,
    /// Both hands are final and ready to compare.
    Settlement,
    /// Chips have been moved; a new round may start.
    Complete(Outcome),
}

/// Blackjack table for one player against the dealer.
///
/// Owns the deck, both hands, and the player's chips. The bankroll carries
/// over from round to round; the deck and hands are rebuilt for each one.
///
/// # Examples
///
/// ```
/// use parlor_engine::engine::{Engine, Phase};
/// use parlor_engine::rules::Rules;
///
/// let mut engine = Engine::new(Some(7), Rules::default(), 100);
/// engine.start_round().unwrap();
/// let phase = engine.place_bet(10).unwrap();
/// assert!(matches!(phase, Phase::PlayerTurn | Phase::PlayerBust));
/// assert_eq!(engine.player().cards().len(), 2);
/// assert_eq!(engine.dealer().cards().len(), 2);
///
/// if phase == Phase::PlayerTurn {
///     engine.stand().unwrap();
///     engine.play_dealer().unwrap();
/// }
/// let outcome = engine.settle().unwrap();
/// let total = i64::from(engine.chips().total());
/// assert_eq!(total, 100 + outcome.net(10));
/// ```
#[derive(Debug)]
pub struct Engine {
    deck: Deck,
    rules: Rules,
    chips: Chips,
    player: Hand,
    dealer: Hand,
    phase: Phase,
    seed: u64,
    rounds: u32,
}

impl Engine {
    pub fn new(seed: Option<u64>, rules: Rules, starting_chips: u32) -> Self {
        let seed = seed.unwrap_or(0xA1A2_A3A4);
        Self {
            deck: Deck::new_with_seed(seed),
            rules,
            chips: Chips::new(starting_chips),
            player: Hand::new(rules.scoring),
            dealer: Hand::new(rules.scoring),
            phase: Phase::Idle,
            seed,
            rounds: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn rules(&self) -> Rules {
        self.rules
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn chips(&self) -> &Chips {
        &self.chips
    }
    pub fn player(&self) -> &Hand {
        &self.player
    }
    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }
    pub fn rounds_played(&self) -> u32 {
        self.rounds
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// The dealer card shown while the player is still deciding.
    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.cards().get(1).copied()
    }

    /// Shuffle a fresh deck and open a round for betting.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfChips`] once the bankroll is empty, and
    /// [`GameError::WrongPhase`] while a round is still unsettled.
    pub fn start_round(&mut self) -> Result<Phase, GameError> {
        self.ensure_can_start()?;
        self.deck.shuffle();
        Ok(self.open_round())
    }

    /// Like [`Engine::start_round`] but deals from `deck` as given.
    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<Phase, GameError> {
        self.ensure_can_start()?;
        self.deck = deck;
        Ok(self.open_round())
    }

    /// Accept a bet and deal two cards to the player, then two to the dealer.
    pub fn place_bet(&mut self, amount: i64) -> Result<Phase, GameError> {
        self.expect_phase(Phase::Betting)?;
        let bet = validate_bet(self.chips.total(), amount)?;
        // the whole opening deal must be available before anything changes
        let dealt = [self.draw()?, self.draw()?, self.draw()?, self.draw()?];
        self.chips.set_bet(bet);
        debug!(bet, total = self.chips.total(), "bet accepted");

        let (to_player, to_dealer) = dealt.split_at(2);
        for &c in to_player {
            self.player.add_card(c);
            self.player.adjust_for_ace();
            trace!(card = %c, "player dealt");
        }
        for &c in to_dealer {
            self.dealer.add_card(c);
            self.dealer.adjust_for_ace();
            trace!(card = %c, "dealer dealt");
        }

        // the classic table can bust on the deal (King + Queen = 25)
        self.phase = if self.player.is_bust() {
            Phase::PlayerBust
        } else {
            Phase::PlayerTurn
        };
        Ok(self.phase)
    }

    pub fn hit(&mut self) -> Result<Phase, GameError> {
        self.expect_phase(Phase::PlayerTurn)?;
        let c = self.draw()?;
        self.player.add_card(c);
        self.player.adjust_for_ace();
        trace!(card = %c, value = self.player.value(), "player hit");
        if self.player.is_bust() {
            self.phase = Phase::PlayerBust;
        }
        Ok(self.phase)
    }

    pub fn stand(&mut self) -> Result<Phase, GameError> {
        self.expect_phase(Phase::PlayerTurn)?;
        self.phase = Phase::DealerTurn;
        Ok(self.phase)
    }

    pub fn act(&mut self, action: TurnAction) -> Result<Phase, GameError> {
        match action {
            TurnAction::Hit => self.hit(),
            TurnAction::Stand => self.stand(),
        }
    }

    /// Dealer draws according to the table's [`crate::rules::DealerStrategy`].
    pub fn play_dealer(&mut self) -> Result<Phase, GameError> {
        self.expect_phase(Phase::DealerTurn)?;
        let target = self.player.value();
        while !self.dealer.is_bust()
            && self.rules.dealer.should_hit(self.dealer.value(), target)
        {
            let c = self.draw()?;
            self.dealer.add_card(c);
            self.dealer.adjust_for_ace();
            trace!(card = %c, value = self.dealer.value(), "dealer hit");
        }
        self.phase = Phase::Settlement;
        Ok(self.phase)
    }

    /// Compare hands and move chips. Runs at most once per round.
    pub fn settle(&mut self) -> Result<Outcome, GameError> {
        match self.phase {
            Phase::Settlement | Phase::PlayerBust => {}
            Phase::Complete(_) => return Err(GameError::RoundAlreadySettled),
            actual => {
                return Err(GameError::WrongPhase {
                    expected: Phase::Settlement,
                    actual,
                })
            }
        }

        let outcome = resolve(self.player.value(), self.dealer.value(), BUST_LIMIT);
        let bet = self.chips.bet();
        match outcome.net(bet) {
            n if n > 0 => self.chips.win_bet(),
            n if n < 0 => self.chips.lose_bet(),
            _ => {}
        }
        info!(
            round = self.rounds,
            ?outcome,
            bet,
            player = self.player.value(),
            dealer = self.dealer.value(),
            total = self.chips.total(),
            "round settled"
        );
        self.phase = Phase::Complete(outcome);
        Ok(outcome)
    }

    fn ensure_can_start(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Idle | Phase::Complete(_) => {}
            actual => {
                return Err(GameError::WrongPhase {
                    expected: Phase::Idle,
                    actual,
                })
            }
        }
        if self.chips.is_broke() {
            return Err(GameError::OutOfChips);
        }
        Ok(())
    }

    fn open_round(&mut self) -> Phase {
        self.player.clear();
        self.dealer.clear();
        self.chips.clear_bet();
        self.rounds += 1;
        self.phase = Phase::Betting;
        debug!(round = self.rounds, total = self.chips.total(), "round opened");
        self.phase
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn draw(&mut self) -> Result<Card, GameError> {
        self.deck.deal_card().ok_or(GameError::DeckExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_before_betting_are_rejected() {
        let mut eng = Engine::new(Some(1), Rules::default(), 100);
        assert!(matches!(
            eng.hit(),
            Err(GameError::WrongPhase {
                actual: Phase::Idle,
                ..
            })
        ));
        assert!(matches!(eng.place_bet(5), Err(GameError::WrongPhase { .. })));
    }

    #[test]
    fn cannot_restart_mid_round() {
        let mut eng = Engine::new(Some(1), Rules::default(), 100);
        eng.start_round().unwrap();
        assert!(matches!(
            eng.start_round(),
            Err(GameError::WrongPhase {
                actual: Phase::Betting,
                ..
            })
        ));
    }

    #[test]
    fn rejected_bet_keeps_betting_phase() {
        let mut eng = Engine::new(Some(1), Rules::default(), 100);
        eng.start_round().unwrap();
        assert!(eng.place_bet(500).is_err());
        assert_eq!(eng.phase(), Phase::Betting);
        assert_eq!(eng.chips().bet(), 0);
        assert!(eng.player().cards().is_empty());
    }

    #[test]
    fn opening_deal_uses_four_cards() {
        let mut eng = Engine::new(Some(99), Rules::default(), 100);
        eng.start_round().unwrap();
        eng.place_bet(1).unwrap();
        assert_eq!(eng.deck_remaining(), 48);
        assert_eq!(eng.dealer_upcard(), Some(eng.dealer().cards()[1]));
    }
}
