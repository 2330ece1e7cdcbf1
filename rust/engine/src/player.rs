use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::store::{GameId, PlayerId};

/// Default chip stack handed to every seat when a game is created without settings.
pub const DEFAULT_INITIAL_CHIPS: u32 = 1_000;

/// Where a player stands in the current round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerStatus {
    /// Still acting in the round
    Active,
    /// Gave up the round
    Folded,
    /// Committed the whole stack
    AllIn,
    /// Left the table or ran out of chips
    Out,
}

/// Represents a betting action requested by the player holding the turn.
///
/// Bet and raise carry their amount separately (see
/// [`crate::betting::ActionRequest`]) so a missing amount can be reported
/// instead of silently defaulting.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerAction {
    /// Fold and forfeit the round
    Fold,
    /// Pass without betting, only valid when nothing is owed
    Check,
    /// Match the round's current bet
    Call,
    /// Put an explicit amount in
    Bet,
    /// Put an explicit amount in on top of an existing bet
    Raise,
    /// Commit the entire stack
    AllIn,
}

impl PlayerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::Fold => "fold",
            PlayerAction::Check => "check",
            PlayerAction::Call => "call",
            PlayerAction::Bet => "bet",
            PlayerAction::Raise => "raise",
            PlayerAction::AllIn => "all-in",
        }
    }

    pub fn requires_amount(&self) -> bool {
        matches!(self, PlayerAction::Bet | PlayerAction::Raise)
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A seated player record as kept by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub game_id: GameId,
    /// External user identity, unique per game
    pub user_id: String,
    pub name: String,
    /// Seat index, unique within the game and never reused
    pub position: usize,
    /// Sorted by suit, then value
    #[serde(default)]
    pub hand: Vec<Card>,
    pub chips: u32,
    /// Amount committed in the current round
    pub current_bet: u32,
    /// Amount committed over the whole game
    pub total_bet: u32,
    pub status: PlayerStatus,
    pub is_dealer: bool,
    pub is_current_turn: bool,
    /// Milliseconds since the Unix epoch
    pub joined_at: i64,
}

impl Player {
    pub fn new(
        id: PlayerId,
        game_id: GameId,
        user_id: impl Into<String>,
        name: impl Into<String>,
        position: usize,
        chips: u32,
    ) -> Self {
        Self {
            id,
            game_id,
            user_id: user_id.into(),
            name: name.into(),
            position,
            hand: Vec::new(),
            chips,
            current_bet: 0,
            total_bet: 0,
            status: PlayerStatus::Active,
            is_dealer: position == 0,
            is_current_turn: false,
            joined_at: crate::now_millis(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Chips still owed to match `round_bet`.
    pub fn to_call(&self, round_bet: u32) -> u32 {
        round_bet.saturating_sub(self.current_bet)
    }

    /// Moves `amount` from the stack into the player's bets.
    ///
    /// An amount larger than the stack is clamped to the stack and the
    /// player goes all-in. Returns the amount actually committed, or
    /// [`GameError::ChipOverflow`] with the player unchanged when a bet
    /// total would exceed `u32`.
    pub fn commit(&mut self, amount: u32) -> Result<u32, GameError> {
        let all_in = amount > self.chips;
        let paid = amount.min(self.chips);
        let current_bet = add_chips(self.current_bet, paid)?;
        let total_bet = add_chips(self.total_bet, paid)?;
        if all_in {
            self.status = PlayerStatus::AllIn;
        }
        self.chips -= paid;
        self.current_bet = current_bet;
        self.total_bet = total_bet;
        Ok(paid)
    }
}

pub(crate) fn add_chips(held: u32, added: u32) -> Result<u32, GameError> {
    held.checked_add(added)
        .ok_or(GameError::ChipOverflow { held, added })
}
