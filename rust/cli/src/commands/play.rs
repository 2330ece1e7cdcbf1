//! # Play Command
//!
//! Hot-seat betting at a single table. Every seat is dealt 13 cards, then
//! whoever holds the turn types an action on stdin (`fold`, `check`,
//! `call`, `bet N`, `raise N`, `allin`, `q`). The pot is shown after each
//! applied action. The session ends on quit, EOF, or when nobody holds the
//! turn any more.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_action, format_hand};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use cardtable_engine::betting::{ActionRequest, TurnRotation};
use cardtable_engine::logger::ActionLogger;
use cardtable_engine::store::MemoryStore;
use cardtable_engine::table::{GameSettings, NewGame, Table};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Resolved parameters for one `play` session.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub players: usize,
    /// Random when absent
    pub seed: Option<u64>,
    /// JSONL file receiving every applied action
    pub log: Option<PathBuf>,
    pub rotation: TurnRotation,
    pub settings: GameSettings,
}

impl PlayOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            players: config.players,
            seed: config.seed,
            log: None,
            rotation: config.turn_rotation,
            settings: config.game_settings(),
        }
    }
}

/// Handle the play command.
///
/// # Returns
///
/// * `Ok(())` when the session ends normally (quit, EOF, stalled turn)
/// * `Err(CliError)` if the table cannot be set up, the action log cannot be
///   written, or output fails
///
/// Rejected actions are reported on `err` and the same player is prompted again.
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = opts.seed.unwrap_or_else(rand::random);
    let mut logger = match &opts.log {
        Some(path) => ActionLogger::create(path)?,
        None => ActionLogger::discard(),
    };

    let mut table = Table::with_rotation(MemoryStore::new(), opts.rotation);
    let game_id = table.create_game(NewGame {
        name: "cli table".into(),
        max_players: opts.players,
        created_by: "user-1".into(),
        settings: opts.settings.clone(),
    })?;
    for seat in 1..=opts.players {
        table.join_game(game_id, &format!("user-{}", seat), &format!("Player {}", seat))?;
    }
    let round_id = table.start_game_with_seed(game_id, seed)?;

    writeln!(
        out,
        "play: players={} seed={} rotation={}",
        opts.players, seed, opts.rotation
    )?;
    for p in table.players(game_id)? {
        writeln!(out, "{} [seat {}]: {}", p.name, p.position, format_hand(&p.hand))?;
    }
    writeln!(
        out,
        "Round 1: bet to match {}",
        table.round(round_id)?.current_bet
    )?;

    let mut applied = 0usize;
    loop {
        let Some(current) = table.current_turn(game_id)? else {
            ui::display_warning(err, "no player holds the turn; the round cannot continue")?;
            break;
        };
        let round = table.round(round_id)?;
        write!(
            out,
            "{} (chips {}, to call {}) > ",
            current.name,
            current.chips,
            current.to_call(round.current_bet)
        )?;
        out.flush()?;

        let Some(input) = read_stdin_line(stdin)? else {
            break;
        };
        match parse_player_action(&input) {
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Action { action, amount } => {
                let mut request = ActionRequest::new(game_id, round_id, current.id, action);
                if let Some(chips) = amount {
                    request = request.with_amount(chips);
                }
                match table.apply_action(request) {
                    Ok(record) => {
                        logger.write(&record)?;
                        applied += 1;
                        writeln!(
                            out,
                            "Action: {} {}",
                            current.name,
                            format_action(record.action, record.amount)
                        )?;
                        writeln!(out, "Pot: {}", table.round(round_id)?.pot)?;
                    }
                    Err(e) => ui::write_error(err, &format!("Invalid action: {}", e))?,
                }
            }
        }
    }

    writeln!(out, "Actions applied: {}", applied)?;
    if let Some(path) = &opts.log {
        writeln!(out, "Action log: {}", path.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn options(players: usize, rotation: TurnRotation) -> PlayOptions {
        PlayOptions {
            players,
            seed: Some(42),
            log: None,
            rotation,
            settings: GameSettings::default(),
        }
    }

    fn play(opts: PlayOptions, input: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        handle_play_command(opts, &mut out, &mut err, &mut stdin).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_play_quit_immediately() {
        let (out, err) = play(options(3, TurnRotation::SeatModulo), "q\n");
        assert!(out.starts_with("play: players=3 seed=42 rotation=seat-modulo"));
        assert_eq!(out.matches("[seat ").count(), 3);
        assert!(out.contains("Round 1: bet to match 20"));
        assert!(out.contains("Actions applied: 0"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_play_ends_on_eof() {
        let (out, _) = play(options(2, TurnRotation::SeatModulo), "");
        assert!(out.contains("Actions applied: 0"));
    }

    #[test]
    fn test_play_shows_pot_after_each_action() {
        let (out, err) = play(options(2, TurnRotation::ActiveOrder), "call\ncall\nq\n");
        assert!(err.is_empty(), "unexpected errors: {}", err);
        // Nobody posts blinds, so both seats owe the opening bet.
        assert_eq!(out.matches(" call 20\n").count(), 2);
        assert!(out.contains("Pot: 20\n"));
        assert!(out.contains("Pot: 40\n"));
        assert!(out.contains("Actions applied: 2"));
    }

    #[test]
    fn test_play_reports_rejected_actions_and_continues() {
        let (out, err) = play(
            options(2, TurnRotation::ActiveOrder),
            "dance\nbet\ncheck\nraise 30\nq\n",
        );
        assert!(err.contains("Unrecognized action 'dance'"));
        assert!(err.contains("Bet requires an amount"));
        assert!(err.contains("Invalid action: Cannot check, must call 20 or fold"));
        assert!(out.contains(" raise 30\n"));
        assert!(out.contains("Pot: 30"));
        assert!(out.contains("Actions applied: 1"));
    }

    #[test]
    fn test_play_stops_when_nobody_holds_the_turn() {
        let (out, err) = play(options(2, TurnRotation::ActiveOrder), "fold\nfold\ncall\n");
        assert!(err.contains("WARNING: no player holds the turn"));
        assert!(out.contains("Actions applied: 2"));
    }

    #[test]
    fn test_play_writes_action_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("play.jsonl");
        let mut opts = options(2, TurnRotation::ActiveOrder);
        opts.log = Some(path.clone());

        let (out, _) = play(opts, "call\nbet 40\nfold\n");
        assert!(out.contains("Action log: "));

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["action"], "call");
        assert_eq!(lines[0]["amount"], 20);
        assert_eq!(lines[1]["amount"], 40);
        assert!(lines[2].get("amount").is_none());
        assert!(lines.iter().all(|l| l["ts"].is_string()));
    }

    #[test]
    fn test_play_same_seed_same_table() {
        let (a, _) = play(options(4, TurnRotation::SeatModulo), "q\n");
        let (b, _) = play(options(4, TurnRotation::SeatModulo), "q\n");
        assert_eq!(a, b);
    }

    #[test]
    fn test_options_follow_config() {
        let config = Config {
            players: 3,
            seed: Some(5),
            big_blind: 50,
            turn_rotation: TurnRotation::ActiveOrder,
            ..Config::default()
        };
        let opts = PlayOptions::from_config(&config);
        assert_eq!(opts.players, 3);
        assert_eq!(opts.seed, Some(5));
        assert_eq!(opts.settings.big_blind, 50);
        assert_eq!(opts.rotation, TurnRotation::ActiveOrder);
        assert!(opts.log.is_none());
    }
}
