use thiserror::Error;

use crate::player::PlayerAction;
use crate::store::{GameId, PlayerId, RoundId, StoreError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Game supports {min}-{max} players, got {requested}")]
    InvalidPlayerCount {
        requested: usize,
        min: usize,
        max: usize,
    },
    #[error("Cannot deal {requested} cards, only {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("Game already in progress")]
    GameAlreadyInProgress,
    #[error("Game not started")]
    GameNotStarted,
    #[error("Game {0} not found")]
    GameNotFound(GameId),
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),
    #[error("Round {0} not found")]
    RoundNotFound(RoundId),
    #[error("Not player {0}'s turn")]
    NotYourTurn(PlayerId),
    #[error("Cannot check, must call {to_call} or fold")]
    IllegalCheck { to_call: u32 },
    #[error("Amount required for {action}")]
    MissingAmount { action: PlayerAction },
    #[error("Game is full ({max_players} players)")]
    GameFull { max_players: usize },
    #[error("User {user_id} already in this game")]
    AlreadyJoined { user_id: String },
    #[error("Not enough players: {seated} seated, at least 2 required")]
    NotEnoughPlayers { seated: usize },
    #[error("User {user_id} not in game")]
    PlayerNotInGame { user_id: String },
    #[error("Chip count overflow: {held} + {added}")]
    ChipOverflow { held: u32, added: u32 },
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
