use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cards::Rank;

/// Amount an ace loses when it switches from soft to hard.
pub const ACE_ADJUSTMENT: u32 = 10;

/// Blackjack limit; anything above is a bust.
pub const BUST_LIMIT: u32 = 21;

/// Rank-to-value table used when adding cards to a hand.
///
/// `Classic` keeps the table the game has always shipped with: face cards
/// count 11/12/13 and an ace counts 14 (4 once reduced). `Standard` is the
/// casino table: face cards are 10 and an ace is 11 (1 once reduced).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringScheme {
    #[default]
    Classic,
    Standard,
}

impl ScoringScheme {
    /// Value a card of this rank adds to a hand before any ace adjustment.
    ///
    /// ```
    /// use parlor_engine::cards::Rank;
    /// use parlor_engine::scoring::ScoringScheme;
    ///
    /// assert_eq!(ScoringScheme::Classic.rank_value(Rank::King), 13);
    /// assert_eq!(ScoringScheme::Standard.rank_value(Rank::King), 10);
    /// assert_eq!(ScoringScheme::Standard.rank_value(Rank::Ace), 11);
    /// ```
    pub fn rank_value(&self, rank: Rank) -> u32 {
        let pip = rank as u32;
        match self {
            ScoringScheme::Classic => pip,
            ScoringScheme::Standard => match rank {
                Rank::Ace => 11,
                Rank::Jack | Rank::Queen | Rank::King => 10,
                _ => pip,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringScheme::Classic => "classic",
            ScoringScheme::Standard => "standard",
        }
    }
}

impl fmt::Display for ScoringScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(ScoringScheme::Classic),
            "standard" => Ok(ScoringScheme::Standard),
            other => Err(format!(
                "unknown scoring scheme '{}' (expected classic or standard)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::all_ranks;

    #[test]
    fn classic_table_matches_pip_order() {
        let values: Vec<u32> = all_ranks()
            .iter()
            .map(|&r| ScoringScheme::Classic.rank_value(r))
            .collect();
        assert_eq!(values, (2..=14).collect::<Vec<u32>>());
    }

    #[test]
    fn standard_table_caps_faces_at_ten() {
        for r in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(ScoringScheme::Standard.rank_value(r), 10);
        }
        assert_eq!(ScoringScheme::Standard.rank_value(Rank::Seven), 7);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Standard".parse::<ScoringScheme>(), Ok(ScoringScheme::Standard));
        assert_eq!(" classic ".parse::<ScoringScheme>(), Ok(ScoringScheme::Classic));
        assert!("vegas".parse::<ScoringScheme>().is_err());
    }
}
