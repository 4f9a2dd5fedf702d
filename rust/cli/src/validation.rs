//! Input parsing for the interactive prompts.
//!
//! Each prompt has its own parser returning a small enum, so the session loop
//! only has to match on the result:
//! - bet amount (`How many chips would you like to bet?`)
//! - hit or stand
//! - play another hand
//! - `key=value` assignments for `madlibs --set`

use parlor_engine::player::TurnAction;

pub const NOT_AN_INTEGER: &str = "Sorry please provide an integer";

/// Outcome of reading the bet prompt.
#[derive(Debug, PartialEq)]
pub enum BetInput {
    /// Parsed integer; range checks are left to the engine.
    Amount(i64),
    /// `q` or `quit`
    Quit,
    Invalid(String),
}

/// Parse the answer to the bet prompt.
///
/// ```rust
/// # use parlor_cli::validation::{parse_bet, BetInput};
/// assert_eq!(parse_bet(" 25 "), BetInput::Amount(25));
/// assert_eq!(parse_bet("-5"), BetInput::Amount(-5));
/// assert_eq!(parse_bet("Q"), BetInput::Quit);
/// assert!(matches!(parse_bet("ten"), BetInput::Invalid(_)));
/// ```
pub fn parse_bet(input: &str) -> BetInput {
    let input = input.trim();
    if is_quit(input) {
        return BetInput::Quit;
    }
    match input.parse::<i64>() {
        Ok(n) => BetInput::Amount(n),
        Err(_) => BetInput::Invalid(NOT_AN_INTEGER.to_string()),
    }
}

/// Outcome of reading the hit/stand prompt.
#[derive(Debug, PartialEq)]
pub enum TurnInput {
    Action(TurnAction),
    Invalid(String),
}

/// Only the first character counts, case-insensitively: `h` hits, `s` stands.
pub fn parse_turn_action(input: &str) -> TurnInput {
    match first_char(input) {
        Some('h') => TurnInput::Action(TurnAction::Hit),
        Some('s') => TurnInput::Action(TurnAction::Stand),
        _ => TurnInput::Invalid("Sorry, please try again.".to_string()),
    }
}

/// `true` only when the answer starts with `y`; anything else ends the session.
pub fn wants_another(input: &str) -> bool {
    first_char(input) == Some('y')
}

/// Split `key=value` on the first `=`. The key must be non-empty; the value may
/// be empty (which clears the field).
pub fn parse_assignment(input: &str) -> Result<(String, String), String> {
    let Some((key, value)) = input.split_once('=') else {
        return Err(format!("Expected KEY=VALUE, got '{}'", input));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Missing key in '{}'", input));
    }
    Ok((key.to_string(), value.to_string()))
}

fn is_quit(input: &str) -> bool {
    let lower = input.to_lowercase();
    lower == "q" || lower == "quit"
}

fn first_char(input: &str) -> Option<char> {
    input
        .trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_accepts_integers_including_out_of_range() {
        assert_eq!(parse_bet("10"), BetInput::Amount(10));
        assert_eq!(parse_bet("0"), BetInput::Amount(0));
        assert_eq!(parse_bet("-3"), BetInput::Amount(-3));
    }

    #[test]
    fn bet_rejects_non_integers() {
        for s in ["", "abc", "1.5", "10 chips"] {
            assert_eq!(parse_bet(s), BetInput::Invalid(NOT_AN_INTEGER.to_string()));
        }
    }

    #[test]
    fn bet_quit_words() {
        assert_eq!(parse_bet("q"), BetInput::Quit);
        assert_eq!(parse_bet("QUIT"), BetInput::Quit);
    }

    #[test]
    fn turn_uses_first_character() {
        assert_eq!(parse_turn_action("h"), TurnInput::Action(TurnAction::Hit));
        assert_eq!(parse_turn_action("Hit me"), TurnInput::Action(TurnAction::Hit));
        assert_eq!(parse_turn_action(" S"), TurnInput::Action(TurnAction::Stand));
        assert_eq!(parse_turn_action("stay"), TurnInput::Action(TurnAction::Stand));
        assert!(matches!(parse_turn_action("x"), TurnInput::Invalid(_)));
        assert!(matches!(parse_turn_action(""), TurnInput::Invalid(_)));
    }

    #[test]
    fn replay_only_on_y() {
        assert!(wants_another("y"));
        assert!(wants_another("Yes"));
        assert!(!wants_another("n"));
        assert!(!wants_another(""));
        assert!(!wants_another("sure"));
    }

    #[test]
    fn assignment_splits_on_first_equals() {
        assert_eq!(
            parse_assignment("drink=gin=tonic"),
            Ok(("drink".to_string(), "gin=tonic".to_string()))
        );
        assert_eq!(
            parse_assignment("city="),
            Ok(("city".to_string(), String::new()))
        );
        assert!(parse_assignment("city").is_err());
        assert!(parse_assignment("=Oslo").is_err());
    }
}
