use serde::{Deserialize, Serialize};

use crate::cards::{compare_by_value, sort_hand, Card, THREE_OF_DIAMONDS};
use crate::deck::Deck;
use crate::errors::GameError;

pub const CARDS_PER_PLAYER: usize = 13;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// One seat's share of a deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatedHand {
    /// `player-1`, `player-2`, ... in seat order
    pub id: String,
    pub name: String,
    /// Zero-based seat index, which is also the deal order
    pub seat: usize,
    /// Sorted by suit priority, then ascending value
    pub cards: Vec<Card>,
    pub is_starting_player: bool,
}

/// Seats 2-4 players from its own deck and picks who opens.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    deck: Deck,
}

impl Dealer {
    pub fn new() -> Self {
        Self { deck: Deck::new() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            deck: Deck::new_with_seed(seed),
        }
    }

    pub fn with_deck(deck: Deck) -> Self {
        Self { deck }
    }

    /// Deals 13 cards to each of `player_count` seats and marks the starting player.
    ///
    /// Fails without consuming any card when the count is outside 2-4 or the
    /// deck cannot cover every seat.
    ///
    /// ```
    /// use cardtable_engine::dealer::Dealer;
    ///
    /// let mut dealer = Dealer::with_seed(42);
    /// let seats = dealer.deal_to_players(3).unwrap();
    /// assert_eq!(seats.len(), 3);
    /// assert!(seats.iter().all(|s| s.cards.len() == 13));
    /// assert_eq!(seats.iter().filter(|s| s.is_starting_player).count(), 1);
    /// ```
    pub fn deal_to_players(&mut self, player_count: usize) -> Result<Vec<SeatedHand>, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(GameError::InvalidPlayerCount {
                requested: player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        let needed = player_count * CARDS_PER_PLAYER;
        if needed > self.deck.remaining() {
            return Err(GameError::InsufficientCards {
                requested: needed,
                remaining: self.deck.remaining(),
            });
        }

        let mut seats = Vec::with_capacity(player_count);
        for seat in 0..player_count {
            let mut cards = self.deck.deal(CARDS_PER_PLAYER)?;
            sort_hand(&mut cards);
            seats.push(SeatedHand {
                id: format!("player-{}", seat + 1),
                name: format!("Player {}", seat + 1),
                seat,
                cards,
                is_starting_player: false,
            });
        }

        let hands: Vec<&[Card]> = seats.iter().map(|s| s.cards.as_slice()).collect();
        if let Some(starter) = determine_starting_player(&hands) {
            seats[starter].is_starting_player = true;
        }
        Ok(seats)
    }

    pub fn reset_deck(&mut self) {
        self.deck.reset();
    }

    pub fn remaining(&self) -> usize {
        self.deck.remaining()
    }
}

/// Index of the hand that opens play.
///
/// The first hand in seat order holding the three of diamonds wins outright.
/// Otherwise the owner of the lowest card by [`compare_by_value`] opens.
/// Returns `None` only when every hand is empty.
pub fn determine_starting_player<H: AsRef<[Card]>>(hands: &[H]) -> Option<usize> {
    if let Some(seat) = hands
        .iter()
        .position(|h| h.as_ref().contains(&THREE_OF_DIAMONDS))
    {
        return Some(seat);
    }

    let mut lowest: Option<(usize, &Card)> = None;
    for (seat, hand) in hands.iter().enumerate() {
        for card in hand.as_ref() {
            match lowest {
                Some((_, best)) if compare_by_value(card, best).is_ge() => {}
                _ => lowest = Some((seat, card)),
            }
        }
    }
    lowest.map(|(seat, _)| seat)
}
