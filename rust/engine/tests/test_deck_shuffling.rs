use std::collections::HashSet;

use cardtable_engine::cards::{full_deck, Card, Rank, Suit};
use cardtable_engine::deck::Deck;
use cardtable_engine::errors::GameError;

#[test]
fn shuffled_deck_is_a_permutation_of_52_cards() {
    for seed in 0..20 {
        let deck = Deck::new_with_seed(seed);
        assert_eq!(deck.remaining(), 52);
        let mut got: Vec<Card> = deck.cards().to_vec();
        let mut want = full_deck();
        got.sort();
        want.sort();
        assert_eq!(got, want, "seed {} lost or duplicated a card", seed);
    }
}

#[test]
fn deals_are_exhaustive_without_replacement() {
    let mut deck = Deck::new_with_seed(42);
    let mut set = HashSet::new();
    for i in 0..4 {
        for c in deck.deal(13).expect("13 cards available") {
            assert!(set.insert(c), "card {} duplicated in deal {}", c, i);
        }
    }
    assert_eq!(set.len(), 52);
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn deal_shrinks_remaining_by_count() {
    let mut deck = Deck::new_with_seed(3);
    let before = deck.remaining();
    let dealt = deck.deal(5).unwrap();
    assert_eq!(dealt.len(), 5);
    assert_eq!(deck.remaining(), before - 5);

    let none = deck.deal(0).unwrap();
    assert!(none.is_empty());
    assert_eq!(deck.remaining(), before - 5);
}

#[test]
fn deal_takes_cards_from_the_front() {
    let mut deck = Deck::new_with_seed(11);
    let front: Vec<Card> = deck.cards()[..3].to_vec();
    assert_eq!(deck.deal(3).unwrap(), front);
}

#[test]
fn overdraw_fails_and_leaves_deck_untouched() {
    let mut deck = Deck::new_with_seed(5);
    deck.deal(50).unwrap();
    let err = deck.deal(3).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientCards {
            requested: 3,
            remaining: 2
        }
    );
    assert_eq!(deck.remaining(), 2);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let d1 = Deck::new_with_seed(12345);
    let d2 = Deck::new_with_seed(12345);
    assert_eq!(d1.cards(), d2.cards(), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let d1 = Deck::new_with_seed(1);
    let d2 = Deck::new_with_seed(2);
    assert_ne!(
        d1.cards(),
        d2.cards(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn reset_restores_full_deck_and_reshuffles() {
    let mut deck = Deck::new_with_seed(8);
    let first_order = deck.cards().to_vec();
    deck.deal(40).unwrap();
    deck.reset();
    assert_eq!(deck.remaining(), 52);
    let mut cards = deck.cards().to_vec();
    assert_ne!(cards, first_order, "reset should reshuffle (high probability)");
    cards.sort();
    let mut all = full_deck();
    all.sort();
    assert_eq!(cards, all);
}

#[test]
fn stacked_deck_deals_in_given_order() {
    let stacked = vec![
        Card::new(Suit::Spades, Rank::Two),
        Card::new(Suit::Diamonds, Rank::Three),
    ];
    let mut deck = Deck::from_cards(stacked.clone(), 0);
    assert_eq!(deck.deal(2).unwrap(), stacked);
}

#[test]
fn card_values_follow_two_high_convention() {
    assert_eq!(Rank::Three.value(), 3);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Ace.value(), 14);
    assert_eq!(Rank::Two.value(), 15);
    assert!(Card::new(Suit::Diamonds, Rank::Two).value() > Card::new(Suit::Spades, Rank::Ace).value());
}

#[test]
fn card_serializes_with_lowercase_suit_and_rank_symbol() {
    let c = Card::new(Suit::Hearts, Rank::Ten);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"{"suit":"hearts","rank":"10"}"#);
    assert_eq!(c.to_string(), "10h");
}
