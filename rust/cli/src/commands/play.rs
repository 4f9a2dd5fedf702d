//! # Play Command
//!
//! Interactive Blackjack session against the dealer.
//!
//! One session keeps a single bankroll across rounds. Each round runs
//! bet → deal → hit/stand → dealer draw → settlement, then asks whether to
//! play again. The dealer's first card stays hidden until the dealer plays.
//!
//! End of input ends the session quietly: at the bet or replay prompt no
//! further round starts, and during the player's turn it counts as a stand
//! so the open bet still settles.

use crate::config::{self, Overrides};
use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_bet, parse_turn_action, wants_another, BetInput, TurnInput};
use parlor_engine::deck::Deck;
use parlor_engine::engine::{Engine, Phase};
use parlor_engine::errors::GameError;
use parlor_engine::hand::Hand;
use parlor_engine::logger::HistoryLogger;
use parlor_engine::player::TurnAction;
use parlor_engine::rules::DealerStrategy;
use parlor_engine::scoring::ScoringScheme;
use std::io::{BufRead, Write};
use tracing::debug;

const BET_PROMPT: &str = "How many chips would you like to bet? ";
const TURN_PROMPT: &str = "Hit or Stand? Enter h or s ";
const REPLAY_PROMPT: &str = "Would you like to play another hand? y/n ";

/// Flags accepted by `parlor play`; unset values fall back to configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub chips: Option<u32>,
    pub scoring: Option<ScoringScheme>,
    pub dealer: Option<DealerStrategy>,
    pub history: Option<String>,
}

/// Handle the play command: run rounds until the player stops, input ends,
/// or the bankroll is empty.
///
/// # Errors
///
/// Configuration problems, an unwritable history file, and output failures
/// are returned; bad answers at the prompts are re-asked instead.
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::resolve(Overrides {
        starting_chips: opts.chips,
        seed: opts.seed,
        scoring: opts.scoring,
        dealer: opts.dealer,
    })?
    .config;
    let seed = cfg.seed.unwrap_or_else(rand::random);

    let mut history = match &opts.history {
        Some(path) => Some(HistoryLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "play: seed={} chips={} scoring={} dealer={}",
        seed, cfg.starting_chips, cfg.scoring, cfg.dealer
    )?;

    let mut engine = Engine::new(Some(seed), cfg.rules(), cfg.starting_chips);
    play_session(&mut engine, &mut history, out, stdin, || None)
}

/// The round loop. Each round is dealt from `next_deck()` when it yields a
/// deck and from a fresh shuffle otherwise.
fn play_session(
    engine: &mut Engine,
    history: &mut Option<HistoryLogger>,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
    mut next_deck: impl FnMut() -> Option<Deck>,
) -> Result<(), CliError> {
    writeln!(out, "WELCOME TO BLACKJACK")?;
    let mut played = 0u32;

    loop {
        let opened = match next_deck() {
            Some(deck) => engine.start_round_with_deck(deck),
            None => engine.start_round(),
        };
        match opened {
            Ok(_) => {}
            Err(GameError::OutOfChips) => {
                writeln!(out, "You are out of chips!")?;
                break;
            }
            Err(e) => return Err(e.into()),
        }

        let Some(mut phase) = take_bet(engine, out, stdin)? else {
            break;
        };
        show_some(engine, out)?;

        while phase == Phase::PlayerTurn {
            ui::prompt(out, TURN_PROMPT)?;
            let action = match read_stdin_line(stdin)? {
                None => TurnAction::Stand,
                Some(line) => match parse_turn_action(&line) {
                    TurnInput::Action(a) => a,
                    TurnInput::Invalid(msg) => {
                        writeln!(out, "{}", msg)?;
                        continue;
                    }
                },
            };
            phase = engine.act(action)?;
            if action == TurnAction::Hit {
                show_some(engine, out)?;
            }
        }

        if phase == Phase::DealerTurn {
            engine.play_dealer()?;
        }
        show_all(engine, out)?;

        let outcome = engine.settle()?;
        played += 1;
        writeln!(out, "{}", outcome.message())?;

        if let Some(log) = history.as_mut() {
            if let Some(rec) = log.record(engine)? {
                debug!(round_id = %rec.round_id, "round recorded");
            }
        }

        writeln!(out, "\nPlayer total chips are at: {}", engine.chips().total())?;
        if engine.chips().is_broke() {
            writeln!(out, "You are out of chips!")?;
            break;
        }

        ui::prompt(out, REPLAY_PROMPT)?;
        match read_stdin_line(stdin)? {
            Some(line) if wants_another(&line) => continue,
            _ => break,
        }
    }

    writeln!(out, "Thank you for playing!")?;
    writeln!(out, "Rounds played: {}", played)?;
    Ok(())
}

/// Ask until a bet is accepted. `None` when the player quits or input ends.
fn take_bet(
    engine: &mut Engine,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<Phase>, CliError> {
    loop {
        ui::prompt(out, BET_PROMPT)?;
        let Some(line) = read_stdin_line(stdin)? else {
            return Ok(None);
        };
        match parse_bet(&line) {
            BetInput::Quit => return Ok(None),
            BetInput::Invalid(msg) => writeln!(out, "{}", msg)?,
            BetInput::Amount(n) => match engine.place_bet(n) {
                Ok(phase) => return Ok(Some(phase)),
                Err(GameError::InsufficientChips { total, .. }) => writeln!(
                    out,
                    "Sorry, you do not have enough chips! You have: {}",
                    total
                )?,
                Err(GameError::InvalidBetAmount { minimum, .. }) => {
                    writeln!(out, "Sorry, the bet must be at least {}", minimum)?
                }
                Err(e) => return Err(e.into()),
            },
        }
    }
}

/// Player's turn view: dealer's first card hidden.
fn show_some(engine: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "\nDealer's Hand:")?;
    writeln!(out, " <card hidden>")?;
    if let Some(up) = engine.dealer_upcard() {
        writeln!(out, " {}", up)?;
    }
    write_hand(out, "Player's Hand:", engine.player())
}

fn show_all(engine: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    write_hand(out, "Dealer's Hand:", engine.dealer())?;
    write_hand(out, "Player's Hand:", engine.player())
}

fn write_hand(out: &mut dyn Write, title: &str, hand: &Hand) -> Result<(), CliError> {
    writeln!(out, "\n{}", title)?;
    for c in hand.cards() {
        writeln!(out, " {}", c)?;
    }
    writeln!(out, "Value: {}", hand.value())?;
    Ok(())
}
