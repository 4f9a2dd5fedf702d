use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Full deck in suit and rank order.
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// A deck that deals `cards` front to back. Shuffling it afterwards
    /// refills it with a full 52-card deck.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Refill with all 52 cards and apply a fresh uniform permutation.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
