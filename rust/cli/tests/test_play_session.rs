use cardtable_cli::run_with_input;
use std::io::Cursor;

fn session(args: &[&str], input: &str) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let code = run_with_input(args, &mut out, &mut err, &mut stdin);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn three_seat_session_with_raise_and_folds() {
    let (code, out, err) = session(
        &[
            "cardtable", "play", "--players", "3", "--seed", "9", "--rotation", "active-order",
        ],
        "call\nraise 50\nfold\ncall\nq\n",
    );
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(err.is_empty(), "stderr: {}", err);

    let pots: Vec<&str> = out
        .lines()
        .filter_map(|l| l.strip_prefix("Pot: "))
        .collect();
    // call 20, raise 50, fold, then the opener owes 30 more.
    assert_eq!(pots, vec!["20", "70", "70", "100"]);
    assert!(out.contains("Actions applied: 4"));
}

#[test]
fn session_log_is_jsonl_with_one_record_per_action() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("session.jsonl");
    let (code, out, err) = session(
        &[
            "cardtable",
            "play",
            "--players",
            "2",
            "--seed",
            "4",
            "--rotation",
            "active-order",
            "--log",
            log.to_str().unwrap(),
        ],
        "allin\ncall\n",
    );
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Action log: "));

    let bytes = std::fs::read(&log).unwrap();
    assert!(!bytes.contains(&b'\r'));
    let text = String::from_utf8(bytes).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["action"], "all-in");
    assert_eq!(records[0]["amount"], 1_000);
    assert_eq!(records[1]["action"], "call");
    assert_eq!(records[1]["amount"], 1_000);
    assert_eq!(records[0]["round_id"], records[1]["round_id"]);
}

#[test]
fn illegal_actions_are_reported_but_do_not_end_the_session() {
    let (code, out, err) = session(
        &["cardtable", "play", "--players", "2", "--seed", "6"],
        "check\nbet 0\nraise\ncall\n",
    );
    assert_eq!(code, 0);
    assert!(err.contains("Error: Invalid action: Cannot check, must call 20 or fold"));
    assert!(err.contains("Error: Bet amount must be positive"));
    assert!(err.contains("Error: Raise requires an amount"));
    assert!(out.contains("Actions applied: 1"));
}

#[test]
fn unwritable_log_path_fails_the_command() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "x").unwrap();
    let log = blocker.join("nested.jsonl");

    let (code, _, err) = session(
        &["cardtable", "play", "--seed", "1", "--log", log.to_str().unwrap()],
        "q\n",
    );
    assert_eq!(code, 2);
    assert!(err.contains("I/O error"), "stderr: {}", err);
}

#[test]
fn unreadable_stdin_is_an_io_error() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = Cursor::new(b"call\n\xff\xfe\n".to_vec());
    let code = run_with_input(
        &["cardtable", "play", "--players", "2", "--seed", "3"],
        &mut out,
        &mut err,
        &mut stdin,
    );
    let out = String::from_utf8_lossy(&out);
    let err = String::from_utf8_lossy(&err);
    assert_eq!(code, 2);
    assert!(err.contains("I/O error"), "stderr: {}", err);
    assert!(out.contains("Pot: 20"));
    assert!(!out.contains("Actions applied"));
}
