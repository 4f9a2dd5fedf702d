use parlor_cli::{run, TEST_INPUT_ENV};
use parlor_engine::logger::RoundRecord;
use serial_test::serial;
use std::env;

fn play(args: &[&str], input: &str) -> (i32, String, String) {
    env::set_var(TEST_INPUT_ENV, input);
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut argv = vec!["parlor", "play"];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    env::remove_var(TEST_INPUT_ENV);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn quick_quit_at_bet_prompt() {
    let (code, out, _) = play(&["--seed", "42"], "q\n");
    assert_eq!(code, 0);
    assert!(out.contains("How many chips would you like to bet? "));
    assert!(out.contains("Thank you for playing!"));
    assert!(out.contains("Rounds played: 0"));
}

#[test]
#[serial]
fn header_reflects_flags() {
    let (code, out, _) = play(
        &[
            "--seed",
            "5",
            "--chips",
            "250",
            "--scoring",
            "standard",
            "--dealer",
            "stand-on-17",
        ],
        "",
    );
    assert_eq!(code, 0);
    assert!(out.contains("play: seed=5 chips=250 scoring=standard dealer=stand-on-17"));
}

#[test]
#[serial]
fn same_seed_same_session() {
    let script = "10\ns\ny\n20\nh\ns\nn\n";
    let args = ["--seed", "77", "--scoring", "standard"];
    let (c1, a, _) = play(&args, script);
    let (c2, b, _) = play(&args, script);
    assert_eq!((c1, c2), (0, 0));
    assert_eq!(a, b);
}

#[test]
#[serial]
fn bankroll_carries_between_rounds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs/rounds.jsonl");
    let history = path.to_string_lossy().into_owned();
    let (code, out, _) = play(
        &["--seed", "9", "--scoring", "standard", "--history", &history],
        "10\ns\ny\n10\ns\nn\n",
    );
    assert_eq!(code, 0);
    assert!(out.contains("Rounds played: 2"));

    let content = std::fs::read_to_string(&path).unwrap();
    let recs: Vec<RoundRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(recs.len(), 2);
    let first_net = recs[0].outcome.net(10);
    assert_eq!(i64::from(recs[0].chips_after), 100 + first_net);
    let second_net = recs[1].outcome.net(10);
    assert_eq!(
        i64::from(recs[1].chips_after),
        i64::from(recs[0].chips_after) + second_net
    );
    assert!(out.contains(&format!(
        "Player total chips are at: {}",
        recs[1].chips_after
    )));
}

#[test]
#[serial]
fn cards_are_named_in_full() {
    let (code, out, _) = play(&["--seed", "42", "--scoring", "standard"], "10\ns\nn\n");
    assert_eq!(code, 0);
    let named: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with(' ') && l.contains(" of "))
        .collect();
    // upcard plus two player cards before the stand, then every card again
    assert!(named.len() >= 7, "{}", out);
    assert!(!out.contains('♠') && !out.contains('♥'));
}

#[test]
#[serial]
fn invalid_chips_flag_is_rejected() {
    let (code, _, err) = play(&["--chips", "0"], "");
    assert_eq!(code, 2);
    assert!(err.contains("chips"));
}
