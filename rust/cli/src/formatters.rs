//! Compact card and hand formatting for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ when the terminal can show them and fall back to
//! h d c s otherwise (detected from the environment on Windows, assumed on
//! Unix-like systems).
//!
//! ```rust
//! use parlor_engine::cards::{Card, Rank, Suit};
//! use parlor_cli::formatters::{format_card, format_cards};
//!
//! let ten = Card::new(Rank::Ten, Suit::Spades);
//! assert!(format_card(&ten) == "10♠" || format_card(&ten) == "10s");
//! assert!(format_cards(&[ten]).starts_with("[10"));
//! ```

use parlor_engine::cards::{Card, Rank, Suit};
use parlor_engine::hand::Hand;

pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

pub fn format_rank(rank: &Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Cards in bracket notation, e.g. `[10♥ 9♠]`.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Cards plus running value, e.g. `[10♥ 9♠] (19)`.
pub fn format_hand(hand: &Hand) -> String {
    format!("{} ({})", format_cards(hand.cards()), hand.value())
}
