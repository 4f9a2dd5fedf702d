//! Statistics aggregation over round-history files.
//!
//! Reads JSONL written by `parlor play --history` (optionally `.zst`
//! compressed, or a directory of such files) and prints a JSON summary of
//! outcomes and net chips.

use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;
use parlor_engine::logger::RoundRecord;
use parlor_engine::rules::Outcome;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize)]
struct Summary {
    rounds: u64,
    wins: u64,
    losses: u64,
    pushes: u64,
    player_busts: u64,
    dealer_busts: u64,
    net: i64,
}

impl Summary {
    fn add(&mut self, rec: &RoundRecord) {
        self.rounds += 1;
        self.net += rec.outcome.net(rec.bet);
        match rec.outcome {
            Outcome::PlayerWins => self.wins += 1,
            Outcome::DealerBust => {
                self.wins += 1;
                self.dealer_busts += 1;
            }
            Outcome::DealerWins => self.losses += 1,
            Outcome::PlayerBust => {
                self.losses += 1;
                self.player_busts += 1;
            }
            Outcome::Push => self.pushes += 1,
        }
    }
}

/// Summarize every round found under `input`.
///
/// # Errors
///
/// Fails when the input cannot be read or holds no valid record. Unparseable
/// lines are skipped with a warning on `err`.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let files = if path.is_dir() {
        history_files(path)
    } else {
        vec![path.to_path_buf()]
    };

    let mut summary = Summary::default();
    let mut records = 0u64;
    for file in &files {
        let name = file.to_string_lossy();
        let content = read_text_auto(&name)
            .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", name, e)))?;
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            records += 1;
            let rec: RoundRecord =
                parse_json_or_continue!(line, err, format!("{} line {}", name, i + 1));
            summary.add(&rec);
        }
    }

    let invalid = records - summary.rounds;
    if invalid > 0 {
        ui::display_warning(err, &format!("Skipped {} invalid record(s)", invalid))?;
    }
    if summary.rounds == 0 {
        return Err(CliError::InvalidInput("No valid round records".to_string()));
    }

    let json = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json)?;
    Ok(())
}

/// `.jsonl` and `.jsonl.zst` files anywhere below `dir`, in sorted order.
fn history_files(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(d) = stack.pop() {
        let Ok(rd) = std::fs::read_dir(&d) else {
            continue;
        };
        for e in rd.filter_map(Result::ok) {
            let p = e.path();
            if p.is_dir() {
                stack.push(p);
                continue;
            }
            let is_history = p
                .file_name()
                .and_then(|f| f.to_str())
                .is_some_and(|f| f.ends_with(".jsonl") || f.ends_with(".jsonl.zst"));
            if is_history {
                found.push(p);
            }
        }
    }
    found.sort();
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIN: &str = r#"{"round_id":"20250101-000001","seed":1,"scoring":"classic","bet":10,"player_cards":[],"dealer_cards":[],"player_value":20,"dealer_value":18,"outcome":"player_wins","chips_after":110,"ts":"2025-01-01T00:00:00Z"}"#;
    const BUST: &str = r#"{"round_id":"20250101-000002","seed":1,"scoring":"classic","bet":5,"player_cards":[],"dealer_cards":[],"player_value":25,"dealer_value":15,"outcome":"player_bust","chips_after":105,"ts":"2025-01-01T00:00:01Z"}"#;

    fn stats(path: &Path) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let r = handle_stats_command(path.to_string_lossy().into_owned(), &mut out, &mut err);
        (r, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_stats_counts_and_net() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("h.jsonl");
        std::fs::write(&p, format!("{}\n{}\n", WIN, BUST)).unwrap();
        let (r, out, _) = stats(&p);
        assert!(r.is_ok());
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["rounds"], 2);
        assert_eq!(json["wins"], 1);
        assert_eq!(json["losses"], 1);
        assert_eq!(json["player_busts"], 1);
        assert_eq!(json["net"], 5);
    }

    #[test]
    fn test_stats_skips_bad_lines() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("h.jsonl");
        std::fs::write(&p, format!("{}\nnot json\n", WIN)).unwrap();
        let (r, out, err) = stats(&p);
        assert!(r.is_ok());
        assert!(out.contains("\"rounds\": 1"));
        assert!(err.contains("line 2"));
        assert!(err.contains("Skipped 1 invalid record(s)"));
    }

    #[test]
    fn test_stats_empty_file_is_an_error() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let (r, _, err) = stats(temp.path());
        assert!(matches!(r, Err(CliError::InvalidInput(ref m)) if m == "No valid round records"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_stats_walks_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("day2")).unwrap();
        std::fs::write(dir.path().join("a.jsonl"), format!("{}\n", WIN)).unwrap();
        std::fs::write(dir.path().join("day2/b.jsonl"), format!("{}\n", BUST)).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let (r, out, _) = stats(dir.path());
        assert!(r.is_ok());
        assert!(out.contains("\"rounds\": 2"));
    }

    #[test]
    fn test_stats_missing_file() {
        let (r, _, err) = stats(Path::new("/nonexistent/rounds.jsonl"));
        assert!(matches!(r, Err(CliError::InvalidInput(ref m)) if m.starts_with("Failed to read")));
        assert!(err.is_empty());
    }
}
