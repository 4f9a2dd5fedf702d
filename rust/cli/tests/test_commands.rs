use parlor_cli::{run, TEST_INPUT_ENV};
use serial_test::serial;
use std::io::Write as _;

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn deal_prints_both_hands() {
    let (code, out, _) = run_args(&["parlor", "deal", "--seed", "1"]);
    assert_eq!(code, 0);
    assert!(out.contains("Player: ["));
    assert!(out.contains("Dealer: ["));
}

#[test]
fn deal_is_deterministic_per_seed() {
    let a = run_args(&["parlor", "deal", "--seed", "2024"]);
    let b = run_args(&["parlor", "deal", "--seed", "2024"]);
    assert_eq!(a, b);
}

#[test]
#[serial]
fn play_history_feeds_stats() {
    let dir = tempfile::tempdir().unwrap();
    let history = dir.path().join("rounds.jsonl");
    let history = history.to_string_lossy().into_owned();

    std::env::set_var(TEST_INPUT_ENV, "10\ns\ny\n10\ns\ny\n10\ns\nn\n");
    let (code, _, _) = run_args(&[
        "parlor",
        "play",
        "--seed",
        "11",
        "--scoring",
        "standard",
        "--history",
        &history,
    ]);
    std::env::remove_var(TEST_INPUT_ENV);
    assert_eq!(code, 0);

    let (code, out, _) = run_args(&["parlor", "stats", "--input", &history]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["rounds"], 3);
    let w = json["wins"].as_u64().unwrap();
    let l = json["losses"].as_u64().unwrap();
    let p = json["pushes"].as_u64().unwrap();
    assert_eq!(w + l + p, 3);
    assert_eq!(json["player_busts"], 0);
    assert_eq!(json["net"].as_i64().unwrap(), 10 * (w as i64 - l as i64));
}

#[test]
fn stats_reads_zstd_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl.zst");
    let line = r#"{"round_id":"20250101-000001","seed":1,"scoring":"standard","bet":4,"player_cards":[],"dealer_cards":[],"player_value":18,"dealer_value":18,"outcome":"push","chips_after":100}"#;
    let packed = zstd::bulk::compress(format!("{}\n", line).as_bytes(), 3).unwrap();
    std::fs::File::create(&path)
        .unwrap()
        .write_all(&packed)
        .unwrap();

    let (code, out, _) = run_args(&["parlor", "stats", "--input", path.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(out.contains("\"pushes\": 1"));
    assert!(out.contains("\"net\": 0"));
}

#[test]
fn madlibs_list() {
    let (code, out, _) = run_args(&["parlor", "madlibs", "--list"]);
    assert_eq!(code, 0);
    assert!(out.contains("memorable-day"));
    assert!(out.contains("A Memorable Day"));
}

#[test]
#[serial]
fn madlibs_fully_preset_needs_no_input() {
    std::env::set_var(TEST_INPUT_ENV, "");
    let (code, out, _) = run_args(&[
        "parlor",
        "madlibs",
        "--story",
        "memorable-day",
        "--set",
        "name=Riya",
        "--set",
        "sport=Cricket",
        "--set",
        "city=Hyderabad",
        "--set",
        "player=Dhoni",
        "--set",
        "drink=Lemon soda",
        "--set",
        "snack=Popcorn",
    ]);
    std::env::remove_var(TEST_INPUT_ENV);
    assert_eq!(code, 0);
    assert!(out.starts_with(
        "One day, me and my friend Riya decided to play a Cricket game in Hyderabad."
    ));
}

#[test]
#[serial]
fn cfg_prints_json_with_sources() {
    for key in [
        "PARLOR_CONFIG",
        "PARLOR_SEED",
        "PARLOR_STARTING_CHIPS",
        "PARLOR_SCORING",
        "PARLOR_DEALER",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("PARLOR_SEED", "99");
    let (code, out, _) = run_args(&["parlor", "cfg"]);
    std::env::remove_var("PARLOR_SEED");
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["seed"]["value"], 99);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["starting_chips"]["value"], 100);
    assert_eq!(json["dealer"]["value"], "match-player");
}
