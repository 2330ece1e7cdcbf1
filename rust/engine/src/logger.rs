use chrono::{DateTime, SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::player::PlayerAction;
use crate::store::{ActionId, GameId, PlayerId, RoundId};

/// Immutable log entry for one applied player action.
/// Appended by the betting engine and never modified afterwards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: ActionId,
    pub game_id: GameId,
    pub round_id: RoundId,
    pub player_id: PlayerId,
    /// The action taken by the player
    pub action: PlayerAction,
    /// Chips moved into the pot, absent when nothing was paid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// One JSONL line: the record plus a readable RFC3339 time.
#[derive(Debug, Serialize)]
struct LoggedAction<'a> {
    #[serde(flatten)]
    record: &'a ActionRecord,
    ts: String,
}

/// Appends action records to a JSON Lines file, one record per LF-terminated line.
pub struct ActionLogger {
    writer: Option<BufWriter<File>>,
    written: usize,
}

impl ActionLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            written: 0,
        })
    }

    /// A logger that counts records without touching the filesystem.
    pub fn discard() -> Self {
        Self {
            writer: None,
            written: 0,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write(&mut self, record: &ActionRecord) -> std::io::Result<()> {
        let line = to_json_line(record)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        self.written += 1;
        Ok(())
    }
}

pub fn to_json_line(record: &ActionRecord) -> std::io::Result<String> {
    let logged = LoggedAction {
        record,
        ts: format_timestamp(record.timestamp),
    };
    serde_json::to_string(&logged).map_err(std::io::Error::other)
}

pub fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
