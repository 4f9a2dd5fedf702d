use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::{Engine, Phase};
use crate::rules::Outcome;
use crate::scoring::ScoringScheme;

/// One settled round, serialized as a single JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Session seed; replaying the same seed reproduces every deal
    pub seed: u64,
    pub scoring: ScoringScheme,
    pub bet: u32,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_value: u32,
    pub dealer_value: u32,
    pub outcome: Outcome,
    /// Bankroll after settlement
    pub chips_after: u32,
    /// RFC3339 timestamp, filled in on write when absent
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    /// Snapshot of a settled round. `None` until [`Engine::settle`] has run.
    pub fn from_engine(engine: &Engine, round_id: String) -> Option<Self> {
        let Phase::Complete(outcome) = engine.phase() else {
            return None;
        };
        Some(Self {
            round_id,
            seed: engine.seed(),
            scoring: engine.rules().scoring,
            bet: engine.chips().bet(),
            player_cards: engine.player().cards().to_vec(),
            dealer_cards: engine.dealer().cards().to_vec(),
            player_value: engine.player().value(),
            dealer_value: engine.dealer().value(),
            outcome,
            chips_after: engine.chips().total(),
            ts: None,
        })
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Writes settled rounds as JSON lines, numbering them within the day the
/// log was opened.
///
/// A detached log hands out ids but has nowhere to write, which keeps the
/// numbering testable without touching the filesystem.
pub struct HistoryLogger {
    sink: Option<BufWriter<File>>,
    day: String,
    count: u32,
}

impl HistoryLogger {
    /// Open `path` for writing, replacing any earlier content. Missing parent
    /// directories are created.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let sink = BufWriter::new(File::create(path)?);
        Ok(Self {
            sink: Some(sink),
            day: Utc::now().format("%Y%m%d").to_string(),
            count: 0,
        })
    }

    pub fn detached(day: &str) -> Self {
        Self {
            sink: None,
            day: day.to_owned(),
            count: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format_round_id(&self.day, self.count)
    }

    /// Number and write the round `engine` just settled. Returns the line
    /// that was written, or `None` while the round is still open.
    pub fn record(&mut self, engine: &Engine) -> io::Result<Option<RoundRecord>> {
        if !matches!(engine.phase(), Phase::Complete(_)) {
            return Ok(None);
        }
        let id = self.next_id();
        let Some(rec) = RoundRecord::from_engine(engine, id) else {
            return Ok(None);
        };
        self.write(&rec)?;
        Ok(Some(rec))
    }

    /// Append one record. A missing `ts` is stamped with the current time.
    pub fn write(&mut self, record: &RoundRecord) -> io::Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        let line = match record.ts {
            Some(_) => serde_json::to_string(record)?,
            None => serde_json::to_string(&RoundRecord {
                ts: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
                ..record.clone()
            })?,
        };
        writeln!(sink, "{}", line)?;
        sink.flush()
    }
}
