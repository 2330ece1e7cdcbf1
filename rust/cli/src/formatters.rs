//! Card, hand, and action formatters for terminal display.
//!
//! Suits render as Unicode symbols (♦ ♣ ♥ ♠) where the terminal is known to
//! support them and as letters (d c h s) otherwise.
//!
//! ## Example
//!
//! ```rust
//! use cardtable_engine::cards::{Card, Rank, Suit};
//! use cardtable_cli::formatters::{format_card, format_hand};
//!
//! let ten = Card::new(Suit::Hearts, Rank::Ten);
//! assert!(format_card(&ten) == "10♥" || format_card(&ten) == "10h");
//! assert!(format_hand(&[ten]).starts_with("10"));
//! ```

use cardtable_engine::cards::{Card, Suit};
use cardtable_engine::player::PlayerAction;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

/// String like "10♥" (Unicode) or "10h" (ASCII)
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(&card.suit))
}

/// Cards in the order given, separated by single spaces.
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an applied action with the chips it moved.
///
/// ```rust
/// use cardtable_engine::player::PlayerAction;
/// # use cardtable_cli::formatters::format_action;
///
/// assert_eq!(format_action(PlayerAction::Fold, None), "fold");
/// assert_eq!(format_action(PlayerAction::Bet, Some(100)), "bet 100");
/// assert_eq!(format_action(PlayerAction::AllIn, Some(40)), "all-in 40");
/// ```
pub fn format_action(action: PlayerAction, amount: Option<u32>) -> String {
    match amount {
        Some(chips) => format!("{} {}", action.as_str(), chips),
        None => action.as_str().to_string(),
    }
}
