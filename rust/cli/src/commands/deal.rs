//! Deal command handler.
//!
//! Seats 2-4 players, deals 13 cards to each and shows every sorted hand
//! along with the player who opens.

use crate::error::CliError;
use crate::formatters::format_hand;
use cardtable_engine::game::GameManager;
use std::io::Write;

/// Handle the deal command.
///
/// Same `seed`, same hands.
pub fn handle_deal_command(
    players: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut manager = GameManager::with_seed(seed);
    let state = manager.start_new_game(players)?;

    writeln!(out, "deal: players={} seed={}", players, seed)?;
    for seat in &state.players {
        let marker = if seat.is_starting_player { "  <- starts" } else { "" };
        writeln!(
            out,
            "{} [seat {}]: {}{}",
            seat.name,
            seat.seat,
            format_hand(&seat.cards),
            marker
        )?;
    }
    if let Some(starter) = manager.starting_player() {
        writeln!(out, "Starting player: {}", starter.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(players: usize, seed: u64) -> String {
        let mut out = Vec::new();
        handle_deal_command(players, Some(seed), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_deal_prints_one_line_per_seat() {
        let output = deal(3, 42);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5, "header, three seats, starter");
        assert_eq!(lines[0], "deal: players=3 seed=42");
        assert!(lines[1].starts_with("Player 1 [seat 0]: "));
        assert!(lines[3].starts_with("Player 3 [seat 2]: "));
        assert!(lines[4].starts_with("Starting player: Player "));
    }

    #[test]
    fn test_deal_shows_13_cards_per_seat() {
        let output = deal(2, 9);
        for line in output.lines().filter(|l| l.starts_with("Player ")) {
            let cards = line
                .split(": ")
                .nth(1)
                .unwrap()
                .trim_end_matches("  <- starts");
            assert_eq!(cards.split(' ').count(), 13, "{}", line);
        }
    }

    #[test]
    fn test_deal_marks_exactly_one_starter() {
        let output = deal(4, 7);
        assert_eq!(output.matches("<- starts").count(), 1);
    }

    #[test]
    fn test_deal_deterministic() {
        assert_eq!(deal(4, 12345), deal(4, 12345));
    }

    #[test]
    fn test_deal_without_seed() {
        let mut out = Vec::new();
        assert!(handle_deal_command(2, None, &mut out).is_ok());
        assert!(String::from_utf8(out).unwrap().contains("seed="));
    }

    #[test]
    fn test_deal_rejects_bad_player_count() {
        let mut out = Vec::new();
        let err = handle_deal_command(5, Some(1), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Engine(_)));
        assert!(out.is_empty());
    }
}
