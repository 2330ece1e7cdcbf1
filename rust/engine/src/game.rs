use serde::{Deserialize, Serialize};

use crate::dealer::{Dealer, SeatedHand};
use crate::errors::GameError;

/// Snapshot of a seating session: who sits where and whose turn it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seated hands in seat order
    pub players: Vec<SeatedHand>,
    /// Index into `players` of the player holding the turn
    pub current_player_index: usize,
    pub game_started: bool,
}

/// Owns a dealer and the session state built on top of it.
///
/// The turn pointer here is positional and walks every seated player,
/// regardless of betting status; betting turns are tracked separately by
/// [`crate::betting`].
///
/// ```
/// use cardtable_engine::game::GameManager;
///
/// let mut manager = GameManager::with_seed(9);
/// let state = manager.start_new_game(4).unwrap();
/// assert!(state.game_started);
/// assert!(state.players[state.current_player_index].is_starting_player);
///
/// manager.next_turn().unwrap();
/// let next = manager.current_player().unwrap();
/// assert_eq!(next.seat, (state.current_player_index + 1) % 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameManager {
    dealer: Dealer,
    state: GameState,
}

impl GameManager {
    pub fn new() -> Self {
        Self::with_dealer(Dealer::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_dealer(Dealer::with_seed(seed))
    }

    pub fn with_dealer(dealer: Dealer) -> Self {
        Self {
            dealer,
            state: GameState::default(),
        }
    }

    pub fn start_new_game(&mut self, player_count: usize) -> Result<GameState, GameError> {
        if self.state.game_started {
            return Err(GameError::GameAlreadyInProgress);
        }

        let players = self.dealer.deal_to_players(player_count)?;
        let starting = players
            .iter()
            .position(|p| p.is_starting_player)
            .unwrap_or(0);

        tracing::info!(
            players = players.len(),
            starting_seat = starting,
            "seating session started"
        );

        self.state = GameState {
            players,
            current_player_index: starting,
            game_started: true,
        };
        Ok(self.game_state())
    }

    /// Deep copy of the current state.
    pub fn game_state(&self) -> GameState {
        self.state.clone()
    }

    pub fn is_started(&self) -> bool {
        self.state.game_started
    }

    pub fn current_player(&self) -> Option<&SeatedHand> {
        if !self.state.game_started {
            return None;
        }
        self.state.players.get(self.state.current_player_index)
    }

    /// Moves the pointer to the next seat and returns the new index.
    pub fn next_turn(&mut self) -> Result<usize, GameError> {
        if !self.state.game_started {
            return Err(GameError::GameNotStarted);
        }
        let count = self.state.players.len();
        if count > 0 {
            self.state.current_player_index = (self.state.current_player_index + 1) % count;
        }
        Ok(self.state.current_player_index)
    }

    /// Reshuffles the dealer's deck and returns to the not-started state.
    pub fn reset_game(&mut self) {
        self.dealer.reset_deck();
        self.state = GameState::default();
        tracing::debug!("seating session reset");
    }

    pub fn player_by_id(&self, id: &str) -> Option<&SeatedHand> {
        self.state.players.iter().find(|p| p.id == id)
    }

    pub fn starting_player(&self) -> Option<&SeatedHand> {
        self.state.players.iter().find(|p| p.is_starting_player)
    }
}
