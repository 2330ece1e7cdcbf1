//! Turn-based betting state machine.
//!
//! [`settle`] is the pure transition for one action against a player and
//! round snapshot. [`apply_action`] loads the snapshot from a
//! [`RecordStore`], settles it, picks the next turn holder and commits
//! everything (player, round, next player, action record) as one batch.
//!
//! Round closure, phase advance and showdown are not decided here; a round
//! stays open until a caller creates the next one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::logger::ActionRecord;
use crate::player::{Player, PlayerAction, PlayerStatus};
use crate::round::Round;
use crate::store::{ActionId, GameId, PlayerId, RecordStore, RoundId, WriteBatch};

/// How the turn moves on after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TurnRotation {
    /// `(actor position + 1) % active count`, matched against the position
    /// values of the active players. Compatible with existing tables; once
    /// folds leave gaps in the positions the lookup can miss and nobody
    /// receives the turn.
    #[default]
    SeatModulo,
    /// The next active player after the actor in seat order, wrapping around.
    ActiveOrder,
}

impl TurnRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRotation::SeatModulo => "seat-modulo",
            TurnRotation::ActiveOrder => "active-order",
        }
    }
}

impl fmt::Display for TurnRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TurnRotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seat-modulo" | "seat_modulo" => Ok(TurnRotation::SeatModulo),
            "active-order" | "active_order" => Ok(TurnRotation::ActiveOrder),
            other => Err(format!(
                "unknown turn rotation '{}' (expected seat-modulo or active-order)",
                other
            )),
        }
    }
}

/// One player action addressed to a game and round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRequest {
    pub game_id: GameId,
    pub round_id: RoundId,
    pub player_id: PlayerId,
    pub action: PlayerAction,
    /// Required (and positive) for bet and raise, ignored otherwise
    pub amount: Option<u32>,
}

impl ActionRequest {
    pub fn new(game_id: GameId, round_id: RoundId, player_id: PlayerId, action: PlayerAction) -> Self {
        Self {
            game_id,
            round_id,
            player_id,
            action,
            amount: None,
        }
    }

    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = Some(amount);
        self
    }
}

/// Player and round after one action, plus the chips that moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub player: Player,
    pub round: Round,
    pub amount: u32,
}

/// Applies `action` to copies of `player` and `round`.
///
/// | action | amount paid | round bet | status |
/// |---|---|---|---|
/// | fold | 0 | unchanged | folded |
/// | check | 0 | unchanged | unchanged; fails if the round bet is above the player's |
/// | call | owed amount, capped to the stack | unchanged | all-in if capped |
/// | bet / raise | `amount`, capped to the stack | player's bet after paying | all-in if capped |
/// | all-in | whole stack | raised only if exceeded | all-in |
///
/// Bet and raise set the round bet unconditionally, so a short all-in bet
/// can lower it.
///
/// ```
/// use cardtable_engine::betting::settle;
/// use cardtable_engine::player::{Player, PlayerAction, PlayerStatus};
/// use cardtable_engine::round::Round;
/// use cardtable_engine::store::{GameId, PlayerId, RoundId};
///
/// let player = Player::new(PlayerId(2), GameId(1), "u", "U", 0, 30);
/// let round = Round::new(RoundId(3), GameId(1), 1, 50);
/// let s = settle(&player, &round, PlayerAction::Call, None).unwrap();
/// assert_eq!(s.amount, 30);
/// assert_eq!(s.player.chips, 0);
/// assert_eq!(s.player.status, PlayerStatus::AllIn);
/// assert_eq!(s.round.pot, 30);
/// ```
pub fn settle(
    player: &Player,
    round: &Round,
    action: PlayerAction,
    amount: Option<u32>,
) -> Result<Settlement, GameError> {
    let mut player = player.clone();
    let mut round = round.clone();

    let paid = match action {
        PlayerAction::Fold => {
            player.status = PlayerStatus::Folded;
            0
        }
        PlayerAction::Check => {
            if round.current_bet > player.current_bet {
                return Err(GameError::IllegalCheck {
                    to_call: player.to_call(round.current_bet),
                });
            }
            0
        }
        PlayerAction::Call => {
            let owed = player.to_call(round.current_bet);
            player.commit(owed)?
        }
        PlayerAction::Bet | PlayerAction::Raise => {
            let wanted = amount
                .filter(|&a| a > 0)
                .ok_or(GameError::MissingAmount { action })?;
            let paid = player.commit(wanted)?;
            round.current_bet = player.current_bet;
            paid
        }
        PlayerAction::AllIn => {
            let stack = player.chips;
            let paid = player.commit(stack)?;
            player.status = PlayerStatus::AllIn;
            if player.current_bet > round.current_bet {
                round.current_bet = player.current_bet;
            }
            paid
        }
    };

    player.is_current_turn = false;
    if paid > 0 {
        round.collect(paid)?;
    }
    Ok(Settlement {
        player,
        round,
        amount: paid,
    })
}

/// Picks who holds the turn after `actor` has acted.
///
/// `players` is the game's roster with the actor's post-action state
/// already in place; only `active` players are eligible.
pub fn next_turn(players: &[Player], actor: &Player, rotation: TurnRotation) -> Option<PlayerId> {
    let mut active: Vec<&Player> = players.iter().filter(|p| p.is_active()).collect();
    active.sort_by_key(|p| p.position);
    if active.is_empty() {
        return None;
    }

    match rotation {
        TurnRotation::SeatModulo => {
            let next_position = (actor.position + 1) % active.len();
            active
                .iter()
                .find(|p| p.position == next_position)
                .map(|p| p.id)
        }
        TurnRotation::ActiveOrder => active
            .iter()
            .find(|p| p.position > actor.position)
            .or_else(|| active.first())
            .map(|p| p.id),
    }
}

/// Validates and applies one action, then commits it atomically.
///
/// Checks run in order: the player exists in the game
/// ([`GameError::PlayerNotFound`]), holds the turn
/// ([`GameError::NotYourTurn`]), the round exists in the game
/// ([`GameError::RoundNotFound`]), then the action's own preconditions.
/// Any failure, including a failed commit, leaves the store untouched.
pub fn apply_action<S: RecordStore + ?Sized>(
    store: &mut S,
    rotation: TurnRotation,
    request: ActionRequest,
) -> Result<ActionRecord, GameError> {
    let player = store
        .load_player(request.player_id)?
        .filter(|p| p.game_id == request.game_id)
        .ok_or(GameError::PlayerNotFound(request.player_id))?;
    if !player.is_current_turn || player.status == PlayerStatus::Out {
        return Err(GameError::NotYourTurn(player.id));
    }
    let round = store
        .load_round(request.round_id)?
        .filter(|r| r.game_id == request.game_id)
        .ok_or(GameError::RoundNotFound(request.round_id))?;

    let Settlement {
        player: mut actor,
        round,
        amount,
    } = settle(&player, &round, request.action, request.amount)?;

    let mut roster = store.load_players(request.game_id)?;
    if let Some(slot) = roster.iter_mut().find(|p| p.id == actor.id) {
        *slot = actor.clone();
    }
    let next = next_turn(&roster, &actor, rotation);

    let record = ActionRecord {
        id: ActionId(store.next_id()?),
        game_id: request.game_id,
        round_id: round.id,
        player_id: actor.id,
        action: request.action,
        amount: (amount > 0).then_some(amount),
        timestamp: crate::now_millis(),
    };

    let pot = round.pot;
    let mut batch = WriteBatch::new().round(round).action(record.clone());
    match next {
        Some(id) if id == actor.id => actor.is_current_turn = true,
        Some(id) => {
            if let Some(mut successor) = roster.into_iter().find(|p| p.id == id) {
                successor.is_current_turn = true;
                batch = batch.player(successor);
            }
        }
        None => tracing::warn!(
            game_id = %request.game_id,
            player_id = %actor.id,
            position = actor.position,
            rotation = %rotation,
            "no active player at the next seat, turn left unassigned"
        ),
    }
    let actor_id = actor.id;
    batch = batch.player(actor);
    store.commit(batch)?;

    tracing::debug!(
        game_id = %request.game_id,
        round_id = %request.round_id,
        player_id = %actor_id,
        action = %request.action,
        amount,
        pot,
        next_player = ?next,
        "action applied"
    );
    Ok(record)
}
