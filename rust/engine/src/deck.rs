use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// An ordered 52-card sequence consumed strictly from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Builds and shuffles a deck from a fresh random seed.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// Builds and shuffles a deck; the same seed yields the same order.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = Self {
            cards: full_deck(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Builds a stacked deck that deals `cards` in the given order.
    ///
    /// The seed only drives later calls to [`Deck::reset`].
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Fisher-Yates over the remaining cards, from the last index down to 1.
    pub fn shuffle(&mut self) {
        for i in (1..self.cards.len()).rev() {
            let j = self.rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Removes and returns the first `count` cards.
    ///
    /// ```
    /// use cardtable_engine::deck::Deck;
    /// use cardtable_engine::errors::GameError;
    ///
    /// let mut deck = Deck::new_with_seed(7);
    /// let hand = deck.deal(13).unwrap();
    /// assert_eq!(hand.len(), 13);
    /// assert_eq!(deck.remaining(), 39);
    /// assert!(matches!(deck.deal(40), Err(GameError::InsufficientCards { .. })));
    /// ```
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, GameError> {
        if count > self.cards.len() {
            return Err(GameError::InsufficientCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..count).collect())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Discards what is left, rebuilds all 52 cards and reshuffles.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.shuffle();
    }
}
