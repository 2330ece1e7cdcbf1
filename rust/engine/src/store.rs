//! Record store seam between the core and its persistence collaborator.
//!
//! Every mutating operation reads what it needs, builds a [`WriteBatch`] and
//! hands it to [`RecordStore::commit`] in one call. A store must apply the
//! whole batch or none of it.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logger::ActionRecord;
use crate::player::Player;
use crate::round::Round;
use crate::table::{Game, GameStatus};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }
    };
}

record_id!(
    /// Identifies a game (table) record.
    GameId,
    "game"
);
record_id!(
    /// Identifies a seated player record.
    PlayerId,
    "player"
);
record_id!(
    /// Identifies a betting round record.
    RoundId,
    "round"
);
record_id!(
    /// Identifies an appended action record.
    ActionId,
    "action"
);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} references a game that does not exist")]
    DanglingReference(String),
    #[error("{0} was already appended")]
    Conflict(ActionId),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Upserts and appends that must land together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteBatch {
    pub games: Vec<Game>,
    pub players: Vec<Player>,
    pub rounds: Vec<Round>,
    /// Append-only; an id already present is a conflict
    pub actions: Vec<ActionRecord>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game(mut self, game: Game) -> Self {
        self.games.push(game);
        self
    }

    pub fn player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    pub fn round(mut self, round: Round) -> Self {
        self.rounds.push(round);
        self
    }

    pub fn action(mut self, action: ActionRecord) -> Self {
        self.actions.push(action);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
            && self.players.is_empty()
            && self.rounds.is_empty()
            && self.actions.is_empty()
    }
}

/// Durable, transactional storage of game, player, round and action records.
///
/// Reads return owned snapshots. Writes go through [`RecordStore::commit`],
/// which is atomic per call.
pub trait RecordStore {
    fn load_game(&self, id: GameId) -> Result<Option<Game>, StoreError>;

    /// All games, or only those in `status`.
    fn list_games(&self, status: Option<GameStatus>) -> Result<Vec<Game>, StoreError>;

    /// Players of a game ordered by position.
    fn load_players(&self, game_id: GameId) -> Result<Vec<Player>, StoreError>;

    fn load_player(&self, id: PlayerId) -> Result<Option<Player>, StoreError>;

    fn load_round(&self, id: RoundId) -> Result<Option<Round>, StoreError>;

    /// Actions of a round in append order.
    fn load_actions(&self, round_id: RoundId) -> Result<Vec<ActionRecord>, StoreError>;

    /// Reserves a fresh id; ids reserved by an aborted operation are simply skipped.
    fn next_id(&mut self) -> Result<u64, StoreError>;

    /// Applies the whole batch or nothing. An empty batch writes nothing.
    fn commit(&mut self, batch: WriteBatch) -> Result<(), StoreError>;
}

/// In-memory [`RecordStore`] for tests and local sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    games: BTreeMap<GameId, Game>,
    players: BTreeMap<PlayerId, Player>,
    rounds: BTreeMap<RoundId, Round>,
    actions: Vec<ActionRecord>,
    last_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    fn check(&self, batch: &WriteBatch) -> Result<(), StoreError> {
        let batch_games: HashSet<GameId> = batch.games.iter().map(|g| g.id).collect();
        let known = |id: &GameId| self.games.contains_key(id) || batch_games.contains(id);

        if let Some(p) = batch.players.iter().find(|p| !known(&p.game_id)) {
            return Err(StoreError::DanglingReference(p.id.to_string()));
        }
        if let Some(r) = batch.rounds.iter().find(|r| !known(&r.game_id)) {
            return Err(StoreError::DanglingReference(r.id.to_string()));
        }
        if let Some(a) = batch.actions.iter().find(|a| !known(&a.game_id)) {
            return Err(StoreError::DanglingReference(a.id.to_string()));
        }

        let mut seen: HashSet<ActionId> = self.actions.iter().map(|a| a.id).collect();
        for a in &batch.actions {
            if !seen.insert(a.id) {
                return Err(StoreError::Conflict(a.id));
            }
        }
        Ok(())
    }
}

impl RecordStore for MemoryStore {
    fn load_game(&self, id: GameId) -> Result<Option<Game>, StoreError> {
        Ok(self.games.get(&id).cloned())
    }

    fn list_games(&self, status: Option<GameStatus>) -> Result<Vec<Game>, StoreError> {
        Ok(self
            .games
            .values()
            .filter(|g| status.map_or(true, |s| g.status == s))
            .cloned()
            .collect())
    }

    fn load_players(&self, game_id: GameId) -> Result<Vec<Player>, StoreError> {
        let mut players: Vec<Player> = self
            .players
            .values()
            .filter(|p| p.game_id == game_id)
            .cloned()
            .collect();
        players.sort_by_key(|p| p.position);
        Ok(players)
    }

    fn load_player(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        Ok(self.players.get(&id).cloned())
    }

    fn load_round(&self, id: RoundId) -> Result<Option<Round>, StoreError> {
        Ok(self.rounds.get(&id).cloned())
    }

    fn load_actions(&self, round_id: RoundId) -> Result<Vec<ActionRecord>, StoreError> {
        Ok(self
            .actions
            .iter()
            .filter(|a| a.round_id == round_id)
            .cloned()
            .collect())
    }

    fn next_id(&mut self) -> Result<u64, StoreError> {
        self.last_id += 1;
        Ok(self.last_id)
    }

    fn commit(&mut self, batch: WriteBatch) -> Result<(), StoreError> {
        if batch.is_empty() {
            return Ok(());
        }
        self.check(&batch)?;
        for g in batch.games {
            self.games.insert(g.id, g);
        }
        for p in batch.players {
            self.players.insert(p.id, p);
        }
        for r in batch.rounds {
            self.rounds.insert(r.id, r);
        }
        self.actions.extend(batch.actions);
        Ok(())
    }
}
