//! Referee logic for Rock-Paper-Scissors-Plus
//!
//! Three rounds, four moves (rock, paper, scissors, bomb), one bomb per
//! player. This crate holds the pure decision functions:
//! - [`validate`]: raw input to [`Move`]
//! - [`resolve`]: two moves to a [`RoundOutcome`]
//! - [`GameState::update`]: apply a resolved round
//!
//! Compiled to native (for the terminal referee) and optionally WASM.

mod bot;
mod error;
mod game;
mod moves;
mod random;
mod state;

#[cfg(feature = "wasm")]
mod wasm;

use serde::{Deserialize, Serialize};

pub use bot::{choose_bot_move, describe_strategy, BotStrategy};
pub use error::RefereeError;
pub use game::{play_round, run_game, GameRecord, RoundRecord};
pub use moves::{validate, validate_move, Move, Rejection, Validation};
pub use random::{seed_from_u64, SeededRng};
pub use state::{FinalResult, GameState, Side};

/// Number of rounds in a game. There is no early stop on score.
pub const MAX_ROUNDS: u8 = 3;

/// Outcome of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    UserWin,
    BotWin,
    Draw,
}

/// Resolve a round
///
/// First match wins: invalid moves lose to anything legal (two invalid
/// moves draw), two bombs draw, a single bomb wins, then the classic
/// rock > scissors > paper > rock cycle.
pub fn resolve(user_move: Move, bot_move: Move) -> RoundOutcome {
    use Move::*;

    match (user_move, bot_move) {
        (Invalid, Invalid) => RoundOutcome::Draw,
        (Invalid, _) => RoundOutcome::BotWin,
        (_, Invalid) => RoundOutcome::UserWin,
        (Bomb, Bomb) => RoundOutcome::Draw,
        (Bomb, _) => RoundOutcome::UserWin,
        (_, Bomb) => RoundOutcome::BotWin,
        (Rock, Scissors) | (Scissors, Paper) | (Paper, Rock) => RoundOutcome::UserWin,
        (Scissors, Rock) | (Paper, Scissors) | (Rock, Paper) => RoundOutcome::BotWin,
        (Rock, Rock) | (Paper, Paper) | (Scissors, Scissors) => RoundOutcome::Draw,
    }
}

/// Short display text for why a round went the way it did
pub fn explain(user_move: Move, bot_move: Move) -> String {
    match (user_move, bot_move) {
        (Move::Invalid, Move::Invalid) => "both moves were invalid".to_string(),
        (Move::Invalid, _) => "user move was invalid".to_string(),
        (_, Move::Invalid) => "bot move was invalid".to_string(),
        (Move::Bomb, Move::Bomb) => "bombs cancel out".to_string(),
        (a, b) if a == b => format!("both played {}", a),
        (a, b) if a.beats(b) => format!("{} beats {}", a, b),
        (a, b) => format!("{} beats {}", b, a),
    }
}
