use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::player::add_chips;
use crate::store::{GameId, RoundId};

/// Betting phase of a round.
///
/// Rounds are created in [`Phase::PreFlop`]; advancing phases belongs to a
/// round-closure policy the engine does not implement yet.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

/// One betting cycle with its own pot and current-bet ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    pub game_id: GameId,
    pub round_number: u32,
    /// Only ever grows within a round
    pub pot: u32,
    #[serde(default)]
    pub community_cards: Vec<Card>,
    /// Wager a player must match this round before checking
    pub current_bet: u32,
    pub phase: Phase,
    /// Milliseconds since the Unix epoch
    pub started_at: i64,
}

impl Round {
    pub fn new(id: RoundId, game_id: GameId, round_number: u32, opening_bet: u32) -> Self {
        Self {
            id,
            game_id,
            round_number,
            pot: 0,
            community_cards: Vec::new(),
            current_bet: opening_bet,
            phase: Phase::PreFlop,
            started_at: crate::now_millis(),
        }
    }

    pub fn collect(&mut self, amount: u32) -> Result<(), GameError> {
        self.pot = add_chips(self.pot, amount)?;
        Ok(())
    }
}
