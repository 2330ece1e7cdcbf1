//! Game records and the table lifecycle: create, join, start, leave.
//!
//! [`Table`] is the handle a presentation layer holds for one record store.
//! Every method is a single read-modify-write that ends in one
//! [`RecordStore::commit`].

use serde::{Deserialize, Serialize};

use crate::betting::{self, ActionRequest, TurnRotation};
use crate::dealer::{Dealer, MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::GameError;
use crate::logger::ActionRecord;
use crate::player::{Player, PlayerStatus, DEFAULT_INITIAL_CHIPS};
use crate::round::Round;
use crate::store::{GameId, PlayerId, RecordStore, RoundId, WriteBatch};

/// Largest starting stack a game accepts; a full table's chips fit in a `u32` pot.
pub const MAX_INITIAL_CHIPS: u32 = u32::MAX / MAX_PLAYERS as u32;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Accepting players
    Waiting,
    /// Cards dealt, betting under way
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Stack every seat starts with
    pub initial_chips: u32,
    /// Rounds between blind increases
    pub blind_interval: u32,
    pub small_blind: u32,
    /// Opening `current_bet` of the first round
    pub big_blind: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            initial_chips: DEFAULT_INITIAL_CHIPS,
            blind_interval: 10,
            small_blind: 10,
            big_blind: 20,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.initial_chips == 0 {
            return Err(GameError::InvalidSettings(
                "initial_chips must be >0".into(),
            ));
        }
        if self.initial_chips > MAX_INITIAL_CHIPS {
            return Err(GameError::InvalidSettings(format!(
                "initial_chips must be <= {}",
                MAX_INITIAL_CHIPS
            )));
        }
        if self.big_blind < self.small_blind {
            return Err(GameError::InvalidSettings(
                "big_blind must be >= small_blind".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub status: GameStatus,
    pub max_players: usize,
    /// Seats not marked `out`
    pub current_players: usize,
    pub created_by: String,
    pub created_at: i64,
    #[serde(default)]
    pub started_at: Option<i64>,
    pub settings: GameSettings,
}

/// Parameters for [`Table::create_game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub name: String,
    pub max_players: usize,
    pub created_by: String,
    pub settings: GameSettings,
}

/// A record store plus the turn policy applied to it.
///
/// ```
/// use cardtable_engine::player::PlayerAction;
/// use cardtable_engine::store::MemoryStore;
/// use cardtable_engine::table::{GameSettings, NewGame, Table};
/// use cardtable_engine::betting::ActionRequest;
///
/// let mut table = Table::new(MemoryStore::new());
/// let game_id = table
///     .create_game(NewGame {
///         name: "friday".into(),
///         max_players: 4,
///         created_by: "ana".into(),
///         settings: GameSettings::default(),
///     })
///     .unwrap();
/// table.join_game(game_id, "ana", "Ana").unwrap();
/// table.join_game(game_id, "bo", "Bo").unwrap();
/// let round_id = table.start_game_with_seed(game_id, 3).unwrap();
///
/// let opener = table.current_turn(game_id).unwrap().unwrap();
/// let record = table
///     .apply_action(ActionRequest::new(game_id, round_id, opener.id, PlayerAction::Call))
///     .unwrap();
/// assert_eq!(record.amount, Some(20));
/// assert_eq!(table.round(round_id).unwrap().pot, 20);
/// ```
#[derive(Debug, Clone)]
pub struct Table<S> {
    store: S,
    rotation: TurnRotation,
}

impl<S: RecordStore> Table<S> {
    pub fn new(store: S) -> Self {
        Self::with_rotation(store, TurnRotation::default())
    }

    pub fn with_rotation(store: S, rotation: TurnRotation) -> Self {
        Self { store, rotation }
    }

    pub fn rotation(&self) -> TurnRotation {
        self.rotation
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn create_game(&mut self, new_game: NewGame) -> Result<GameId, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&new_game.max_players) {
            return Err(GameError::InvalidPlayerCount {
                requested: new_game.max_players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        new_game.settings.validate()?;

        let id = GameId(self.store.next_id()?);
        let game = Game {
            id,
            name: new_game.name,
            status: GameStatus::Waiting,
            max_players: new_game.max_players,
            current_players: 0,
            created_by: new_game.created_by,
            created_at: crate::now_millis(),
            started_at: None,
            settings: new_game.settings,
        };
        self.store.commit(WriteBatch::new().game(game))?;
        tracing::info!(game_id = %id, "game created");
        Ok(id)
    }

    pub fn list_games(&self, status: Option<GameStatus>) -> Result<Vec<Game>, GameError> {
        Ok(self.store.list_games(status)?)
    }

    pub fn game(&self, id: GameId) -> Result<Game, GameError> {
        self.store
            .load_game(id)?
            .ok_or(GameError::GameNotFound(id))
    }

    /// Players ordered by position, including folded and departed ones.
    pub fn players(&self, game_id: GameId) -> Result<Vec<Player>, GameError> {
        Ok(self.store.load_players(game_id)?)
    }

    pub fn player(&self, id: PlayerId) -> Result<Player, GameError> {
        self.store
            .load_player(id)?
            .ok_or(GameError::PlayerNotFound(id))
    }

    pub fn round(&self, id: RoundId) -> Result<Round, GameError> {
        self.store
            .load_round(id)?
            .ok_or(GameError::RoundNotFound(id))
    }

    pub fn actions(&self, round_id: RoundId) -> Result<Vec<ActionRecord>, GameError> {
        Ok(self.store.load_actions(round_id)?)
    }

    /// The player holding the betting turn, if anyone does.
    pub fn current_turn(&self, game_id: GameId) -> Result<Option<Player>, GameError> {
        Ok(self
            .store
            .load_players(game_id)?
            .into_iter()
            .find(|p| p.is_current_turn))
    }

    pub fn join_game(
        &mut self,
        game_id: GameId,
        user_id: &str,
        user_name: &str,
    ) -> Result<PlayerId, GameError> {
        let mut game = self.game(game_id)?;
        if game.status != GameStatus::Waiting {
            return Err(GameError::GameAlreadyInProgress);
        }
        if game.current_players >= game.max_players {
            return Err(GameError::GameFull {
                max_players: game.max_players,
            });
        }
        let seated = self.store.load_players(game_id)?;
        if seated.iter().any(|p| p.user_id == user_id) {
            return Err(GameError::AlreadyJoined {
                user_id: user_id.to_string(),
            });
        }

        // Records are never deleted, so the record count is a fresh seat index.
        let position = seated.len();
        let id = PlayerId(self.store.next_id()?);
        let player = Player::new(
            id,
            game_id,
            user_id,
            user_name,
            position,
            game.settings.initial_chips,
        );
        game.current_players += 1;

        self.store
            .commit(WriteBatch::new().game(game).player(player))?;
        tracing::info!(game_id = %game_id, player_id = %id, position, "player joined");
        Ok(id)
    }

    /// Deals to every active seat, hands the turn to the starting player and opens round 1.
    pub fn start_game(&mut self, game_id: GameId) -> Result<RoundId, GameError> {
        self.start_with_dealer(game_id, Dealer::new())
    }

    /// [`Table::start_game`] with a reproducible shuffle.
    pub fn start_game_with_seed(&mut self, game_id: GameId, seed: u64) -> Result<RoundId, GameError> {
        self.start_with_dealer(game_id, Dealer::with_seed(seed))
    }

    pub fn start_with_dealer(
        &mut self,
        game_id: GameId,
        mut dealer: Dealer,
    ) -> Result<RoundId, GameError> {
        let mut game = self.game(game_id)?;
        if game.status != GameStatus::Waiting {
            return Err(GameError::GameAlreadyInProgress);
        }
        let mut seats: Vec<Player> = self
            .store
            .load_players(game_id)?
            .into_iter()
            .filter(Player::is_active)
            .collect();
        if seats.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers {
                seated: seats.len(),
            });
        }

        let hands = dealer.deal_to_players(seats.len())?;
        for (player, hand) in seats.iter_mut().zip(hands) {
            player.hand = hand.cards;
            player.is_current_turn = hand.is_starting_player;
        }

        let round_id = RoundId(self.store.next_id()?);
        let round = Round::new(round_id, game_id, 1, game.settings.big_blind);
        game.status = GameStatus::Active;
        game.started_at = Some(crate::now_millis());

        let starter = seats.iter().find(|p| p.is_current_turn).map(|p| p.id);
        let mut batch = WriteBatch::new().game(game).round(round);
        batch.players = seats;
        self.store.commit(batch)?;

        tracing::info!(
            game_id = %game_id,
            round_id = %round_id,
            starting_player = ?starter,
            "game started"
        );
        Ok(round_id)
    }

    pub fn leave_game(&mut self, game_id: GameId, user_id: &str) -> Result<(), GameError> {
        let mut game = self.game(game_id)?;
        let mut player = self
            .store
            .load_players(game_id)?
            .into_iter()
            .find(|p| p.user_id == user_id && p.status != PlayerStatus::Out)
            .ok_or_else(|| GameError::PlayerNotInGame {
                user_id: user_id.to_string(),
            })?;

        player.status = PlayerStatus::Out;
        player.is_current_turn = false;
        game.current_players = game.current_players.saturating_sub(1);
        let player_id = player.id;

        self.store
            .commit(WriteBatch::new().game(game).player(player))?;
        tracing::info!(game_id = %game_id, player_id = %player_id, "player left");
        Ok(())
    }

    /// Overwrites a stack; an empty stack takes the player out of the game
    /// and drops the turn.
    pub fn update_player_chips(&mut self, player_id: PlayerId, chips: u32) -> Result<(), GameError> {
        let mut player = self.player(player_id)?;
        player.chips = chips;
        if chips == 0 {
            player.status = PlayerStatus::Out;
            player.is_current_turn = false;
        }
        self.store.commit(WriteBatch::new().player(player))?;
        Ok(())
    }

    /// Applies one betting action; see [`betting::apply_action`].
    pub fn apply_action(&mut self, request: ActionRequest) -> Result<ActionRecord, GameError> {
        betting::apply_action(&mut self.store, self.rotation, request)
    }
}
