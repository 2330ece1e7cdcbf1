#![allow(dead_code)]

use cardtable_engine::betting::{ActionRequest, TurnRotation};
use cardtable_engine::cards::full_deck;
use cardtable_engine::dealer::Dealer;
use cardtable_engine::deck::Deck;
use cardtable_engine::player::{Player, PlayerAction};
use cardtable_engine::store::{GameId, MemoryStore, PlayerId, RecordStore, RoundId};
use cardtable_engine::table::{GameSettings, NewGame, Table};

pub struct Seated<S> {
    pub table: Table<S>,
    pub game: GameId,
    pub round: RoundId,
    /// Player ids in position order
    pub seats: Vec<PlayerId>,
}

impl<S: RecordStore> Seated<S> {
    pub fn act(&mut self, seat: usize, action: PlayerAction) -> Result<cardtable_engine::logger::ActionRecord, cardtable_engine::errors::GameError> {
        let req = ActionRequest::new(self.game, self.round, self.seats[seat], action);
        self.table.apply_action(req)
    }

    pub fn act_amount(&mut self, seat: usize, action: PlayerAction, amount: u32) -> Result<cardtable_engine::logger::ActionRecord, cardtable_engine::errors::GameError> {
        let req = ActionRequest::new(self.game, self.round, self.seats[seat], action).with_amount(amount);
        self.table.apply_action(req)
    }

    pub fn player(&self, seat: usize) -> Player {
        self.table.player(self.seats[seat]).unwrap()
    }

    /// Positions of every player currently flagged with the turn.
    pub fn turn_holders(&self) -> Vec<usize> {
        self.table
            .players(self.game)
            .unwrap()
            .into_iter()
            .filter(|p| p.is_current_turn)
            .map(|p| p.position)
            .collect()
    }

    pub fn pot(&self) -> u32 {
        self.table.round(self.round).unwrap().pot
    }

    pub fn total_bets(&self) -> u32 {
        self.table
            .players(self.game)
            .unwrap()
            .iter()
            .map(|p| p.total_bet)
            .sum()
    }
}

pub fn settings(initial_chips: u32, big_blind: u32) -> GameSettings {
    GameSettings {
        initial_chips,
        blind_interval: 10,
        small_blind: big_blind / 2,
        big_blind,
    }
}

/// Seats `players` users in `store` and starts the game with an unshuffled
/// deck, so seat 0 holds the three of diamonds and opens.
pub fn seat_in<S: RecordStore>(
    store: S,
    players: usize,
    settings: GameSettings,
    rotation: TurnRotation,
) -> Seated<S> {
    let mut table = Table::with_rotation(store, rotation);
    let game = table
        .create_game(NewGame {
            name: "test table".into(),
            max_players: 4,
            created_by: "user-0".into(),
            settings,
        })
        .unwrap();
    let seats: Vec<PlayerId> = (0..players)
        .map(|i| {
            table
                .join_game(game, &format!("user-{}", i), &format!("User {}", i))
                .unwrap()
        })
        .collect();
    let dealer = Dealer::with_deck(Deck::from_cards(full_deck(), 0));
    let round = table.start_with_dealer(game, dealer).unwrap();
    Seated {
        table,
        game,
        round,
        seats,
    }
}

pub fn seat(players: usize, settings: GameSettings, rotation: TurnRotation) -> Seated<MemoryStore> {
    seat_in(MemoryStore::new(), players, settings, rotation)
}
