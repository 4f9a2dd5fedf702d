use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GameError;
use crate::scoring::ScoringScheme;

/// When the dealer keeps drawing.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DealerStrategy {
    /// Hit while below the player's final value.
    #[default]
    MatchPlayer,
    /// Hit while below 17, regardless of the player.
    #[serde(rename = "stand-on-17")]
    StandOn17,
}

impl DealerStrategy {
    pub fn should_hit(&self, dealer_value: u32, player_value: u32) -> bool {
        match self {
            DealerStrategy::MatchPlayer => dealer_value < player_value,
            DealerStrategy::StandOn17 => dealer_value < 17,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DealerStrategy::MatchPlayer => "match-player",
            DealerStrategy::StandOn17 => "stand-on-17",
        }
    }
}

impl fmt::Display for DealerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DealerStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "match-player" => Ok(DealerStrategy::MatchPlayer),
            "stand-on-17" => Ok(DealerStrategy::StandOn17),
            other => Err(format!(
                "unknown dealer strategy '{}' (expected match-player or stand-on-17)",
                other
            )),
        }
    }
}

/// Table rules fixed for the lifetime of a session.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub scoring: ScoringScheme,
    pub dealer: DealerStrategy,
}

/// How a round ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Push,
}

impl Outcome {
    /// Signed chip movement for a bet of `bet`.
    pub fn net(&self, bet: u32) -> i64 {
        match self {
            Outcome::DealerBust | Outcome::PlayerWins => i64::from(bet),
            Outcome::PlayerBust | Outcome::DealerWins => -i64::from(bet),
            Outcome::Push => 0,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerBust => "BUST Player!",
            Outcome::DealerBust => "Player WINS! Dealer BUSTED",
            Outcome::PlayerWins => "Player WINS!",
            Outcome::DealerWins => "Dealer WINS!",
            Outcome::Push => "Dealer and player tie! PUSH",
        }
    }
}

/// Validates a requested bet against the current chip total.
///
/// # Errors
///
/// - [`GameError::InvalidBetAmount`] when the bet is zero or negative
/// - [`GameError::InsufficientChips`] when the bet exceeds `total`
///
/// # Examples
///
/// ```
/// use parlor_engine::errors::GameError;
/// use parlor_engine::rules::validate_bet;
///
/// assert_eq!(validate_bet(100, 25), Ok(25));
/// assert_eq!(validate_bet(100, 100), Ok(100));
/// assert!(matches!(validate_bet(100, 101), Err(GameError::InsufficientChips { .. })));
/// assert!(matches!(validate_bet(100, 0), Err(GameError::InvalidBetAmount { .. })));
/// ```
pub fn validate_bet(total: u32, amount: i64) -> Result<u32, GameError> {
    if amount < 1 {
        return Err(GameError::InvalidBetAmount { amount, minimum: 1 });
    }
    match u32::try_from(amount) {
        Ok(bet) if bet <= total => Ok(bet),
        _ => Err(GameError::InsufficientChips {
            bet: u32::try_from(amount).unwrap_or(u32::MAX),
            total,
        }),
    }
}

/// Compare final values. A player bust is decided before the dealer plays,
/// so it wins over every other comparison.
pub fn resolve(player_value: u32, dealer_value: u32, bust_limit: u32) -> Outcome {
    if player_value > bust_limit {
        Outcome::PlayerBust
    } else if dealer_value > bust_limit {
        Outcome::DealerBust
    } else if player_value > dealer_value {
        Outcome::PlayerWins
    } else if dealer_value > player_value {
        Outcome::DealerWins
    } else {
        Outcome::Push
    }
}
