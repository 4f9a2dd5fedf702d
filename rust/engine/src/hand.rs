use crate::cards::Card;
use crate::scoring::{ScoringScheme, ACE_ADJUSTMENT, BUST_LIMIT};

/// Cards held by one party plus the running value.
///
/// `value` is maintained incrementally: [`Hand::add_card`] adds the card's
/// full value and [`Hand::adjust_for_ace`] retroactively reduces soft aces
/// while the hand is over 21. After an adjustment pass the value is either
/// at most 21 or a genuine bust with no adjustable aces left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    value: u32,
    // aces still counted at their soft value
    aces: u32,
    scheme: ScoringScheme,
}

impl Hand {
    pub fn new(scheme: ScoringScheme) -> Self {
        Self {
            cards: Vec::with_capacity(6),
            value: 0,
            aces: 0,
            scheme,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn aces(&self) -> u32 {
        self.aces
    }

    pub fn scheme(&self) -> ScoringScheme {
        self.scheme
    }

    pub fn add_card(&mut self, card: Card) {
        self.value += self.scheme.rank_value(card.rank);
        if card.rank.is_ace() {
            self.aces += 1;
        }
        self.cards.push(card);
    }

    pub fn adjust_for_ace(&mut self) {
        while self.value > BUST_LIMIT && self.aces > 0 {
            self.value -= ACE_ADJUSTMENT;
            self.aces -= 1;
        }
    }

    pub fn is_bust(&self) -> bool {
        self.value > BUST_LIMIT
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.value = 0;
        self.aces = 0;
    }
}
