use parlor_engine::cards::{Card, Rank, Suit};
use parlor_engine::deck::Deck;
use parlor_engine::engine::{Engine, Phase};
use parlor_engine::errors::GameError;
use parlor_engine::rules::{Outcome, Rules};

#[test]
fn empty_bankroll_prevents_new_round() {
    let mut eng = Engine::new(Some(1), Rules::default(), 10);
    // King + Queen is 25 on the classic table: bust on the deal
    let deck = Deck::from_cards(
        vec![
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
        ],
        1,
    );
    eng.start_round_with_deck(deck).unwrap();
    assert_eq!(eng.place_bet(10), Ok(Phase::PlayerBust));
    assert_eq!(eng.settle(), Ok(Outcome::PlayerBust));
    assert_eq!(eng.chips().total(), 0);

    let r = eng.start_round();
    assert_eq!(r, Err(GameError::OutOfChips));
}
