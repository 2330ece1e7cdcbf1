use cardtable_engine::cards::full_deck;
use cardtable_engine::dealer::Dealer;
use cardtable_engine::deck::Deck;
use cardtable_engine::errors::GameError;
use cardtable_engine::game::GameManager;

#[test]
fn start_new_game_points_at_starting_player() {
    let mut manager = GameManager::with_seed(1234);
    let state = manager.start_new_game(3).unwrap();
    assert!(state.game_started);
    assert_eq!(state.players.len(), 3);
    assert!(state.players[state.current_player_index].is_starting_player);
    assert_eq!(
        manager.current_player().map(|p| p.seat),
        Some(state.current_player_index)
    );
    assert_eq!(manager.starting_player(), manager.current_player());
}

#[test]
fn start_new_game_twice_fails() {
    let mut manager = GameManager::with_seed(1);
    manager.start_new_game(2).unwrap();
    assert_eq!(
        manager.start_new_game(2).unwrap_err(),
        GameError::GameAlreadyInProgress
    );
}

#[test]
fn invalid_player_count_leaves_session_not_started() {
    let mut manager = GameManager::with_seed(1);
    assert!(matches!(
        manager.start_new_game(5),
        Err(GameError::InvalidPlayerCount { .. })
    ));
    assert!(!manager.is_started());
    assert!(manager.current_player().is_none());
}

#[test]
fn next_turn_requires_started_game() {
    let mut manager = GameManager::with_seed(1);
    assert_eq!(manager.next_turn().unwrap_err(), GameError::GameNotStarted);
}

#[test]
fn next_turn_walks_every_seat_and_wraps() {
    let mut manager = GameManager::with_seed(99);
    let state = manager.start_new_game(4).unwrap();
    let start = state.current_player_index;
    let mut visited = vec![start];
    for _ in 0..4 {
        visited.push(manager.next_turn().unwrap());
    }
    assert_eq!(
        visited,
        vec![start, (start + 1) % 4, (start + 2) % 4, (start + 3) % 4, start]
    );
}

#[test]
fn snapshot_is_detached_from_session() {
    let mut manager = GameManager::with_seed(5);
    let mut snapshot = manager.start_new_game(2).unwrap();
    snapshot.players[0].cards.clear();
    snapshot.current_player_index = 7;

    let fresh = manager.game_state();
    assert_eq!(fresh.players[0].cards.len(), 13);
    assert_ne!(fresh.current_player_index, 7);
}

#[test]
fn reset_game_allows_a_new_game() {
    let mut manager = GameManager::with_seed(8);
    manager.start_new_game(4).unwrap();
    manager.reset_game();

    let state = manager.game_state();
    assert!(!state.game_started);
    assert!(state.players.is_empty());
    assert_eq!(state.current_player_index, 0);

    // The four-way deal consumed every card; only the reset makes this possible.
    let again = manager.start_new_game(4).unwrap();
    assert_eq!(again.players.len(), 4);
}

#[test]
fn player_lookup_by_id() {
    let mut manager = GameManager::with_seed(3);
    manager.start_new_game(3).unwrap();
    let p2 = manager.player_by_id("player-2").unwrap();
    assert_eq!(p2.seat, 1);
    assert!(manager.player_by_id("player-9").is_none());
}

#[test]
fn stacked_deal_starts_seat_holding_three_of_diamonds() {
    // Construction order puts the three of diamonds first, so seat 0 gets it.
    let dealer = Dealer::with_deck(Deck::from_cards(full_deck(), 0));
    let mut manager = GameManager::with_dealer(dealer);
    let state = manager.start_new_game(2).unwrap();
    assert_eq!(state.current_player_index, 0);
    assert_eq!(manager.current_player().unwrap().id, "player-1");
}
