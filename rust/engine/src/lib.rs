//! # cardtable-engine: Card Table Core
//!
//! Deals a 52-card deck to 2-4 seats, picks the opening player, and runs the
//! turn-based betting state machine (bet, call, raise, check, fold, all-in)
//! against a shared pot. Storage is reached through the
//! [`store::RecordStore`] seam; nothing here keeps global state.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), hand and strength ordering
//! - [`deck`] - Fisher-Yates shuffled deck with ChaCha20 RNG
//! - [`dealer`] - Seat assignment and the starting-player rule
//! - [`game`] - Seating session orchestration and the positional turn pointer
//! - [`player`] - Player records, statuses and actions
//! - [`round`] - Betting round records
//! - [`betting`] - Action validation, chip movement and turn advance
//! - [`table`] - Game lifecycle: create, join, start, leave
//! - [`store`] - Record store trait, atomic write batches, in-memory store
//! - [`logger`] - Action records and JSONL action logs
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cardtable_engine::cards::{Card, Rank, Suit};
//! use cardtable_engine::dealer::Dealer;
//!
//! let mut dealer = Dealer::with_seed(42);
//! let seats = dealer.deal_to_players(4).unwrap();
//! assert_eq!(dealer.remaining(), 0);
//!
//! // A full four-way deal always hands out the three of diamonds.
//! let three = Card::new(Suit::Diamonds, Rank::Three);
//! let opener = seats.iter().find(|s| s.is_starting_player).unwrap();
//! assert!(opener.cards.contains(&three));
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use cardtable_engine::deck::Deck;
//!
//! let d1 = Deck::new_with_seed(42);
//! let d2 = Deck::new_with_seed(42);
//! assert_eq!(d1.cards(), d2.cards());
//! ```

pub mod betting;
pub mod cards;
pub mod dealer;
pub mod deck;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod round;
pub mod store;
pub mod table;

pub(crate) use logger::now_millis;
