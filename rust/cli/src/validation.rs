//! Input parsing for interactive commands.

use cardtable_engine::player::PlayerAction;

/// Outcome of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action; `amount` is set for bet and raise
    Action {
        action: PlayerAction,
        amount: Option<u32>,
    },
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a player action or a quit request.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "x" or "check" → Check
/// - "c" or "call" → Call
/// - "bet X" / "raise X" → Bet / Raise with amount X
/// - "allin" or "all-in" → All-in
/// - "q" or "quit" → Quit command
///
/// ```rust
/// # use cardtable_cli::validation::{parse_player_action, ParseResult};
/// use cardtable_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("bet 100"),
///     ParseResult::Action { action: PlayerAction::Bet, amount: Some(100) }
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("shuffle") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    let action = match verb {
        "q" | "quit" => return ParseResult::Quit,
        "fold" | "f" => PlayerAction::Fold,
        "check" | "x" => PlayerAction::Check,
        "call" | "c" => PlayerAction::Call,
        "allin" | "all-in" => PlayerAction::AllIn,
        "bet" => PlayerAction::Bet,
        "raise" => PlayerAction::Raise,
        _ => {
            return ParseResult::Invalid(format!(
                "Unrecognized action '{}'. Valid actions: fold, check, call, bet <amount>, raise <amount>, allin, q",
                verb
            ));
        }
    };

    if !action.requires_amount() {
        return ParseResult::Action {
            action,
            amount: None,
        };
    }

    let Some(raw) = parts.get(1) else {
        return ParseResult::Invalid(format!(
            "{} requires an amount (e.g., '{} 100')",
            capitalize(action.as_str()),
            action.as_str()
        ));
    };
    match raw.parse::<u32>() {
        Ok(amount) if amount > 0 => ParseResult::Action {
            action,
            amount: Some(amount),
        },
        Ok(_) => ParseResult::Invalid(format!(
            "{} amount must be positive",
            capitalize(action.as_str())
        )),
        Err(_) => ParseResult::Invalid(format!("Invalid {} amount", action.as_str())),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
