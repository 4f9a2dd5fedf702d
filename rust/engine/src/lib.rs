//! # parlor-engine: Blackjack Table Core
//!
//! A single-player Blackjack table: one player against an automatic dealer,
//! with a bankroll that carries across rounds. Shuffles use a seeded ChaCha
//! RNG so a session can be reproduced from its seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded deck shuffling and dealing
//! - [`scoring`] - Rank-to-value tables (classic and standard)
//! - [`hand`] - Hand value accumulation with ace adjustment
//! - [`player`] - Chips and turn actions
//! - [`rules`] - Bet validation, dealer strategy, and round resolution
//! - [`engine`] - Round state machine
//! - [`logger`] - Round history records in JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use parlor_engine::cards::{Card, Rank, Suit};
//! use parlor_engine::hand::Hand;
//! use parlor_engine::scoring::ScoringScheme;
//!
//! let mut hand = Hand::new(ScoringScheme::Standard);
//! hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
//! hand.add_card(Card::new(Rank::Nine, Suit::Clubs));
//! hand.add_card(Card::new(Rank::Five, Suit::Spades));
//! hand.adjust_for_ace();
//! assert_eq!(hand.value(), 15);
//! ```
//!
//! ## Bet Validation
//!
//! ```rust
//! use parlor_engine::rules::validate_bet;
//!
//! match validate_bet(100, 250) {
//!     Ok(bet) => println!("bet {}", bet),
//!     Err(e) => println!("rejected: {}", e),
//! }
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod scoring;
