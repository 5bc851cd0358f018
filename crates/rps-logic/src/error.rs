//! Referee error codes

use thiserror::Error;

/// Errors raised by state transitions
///
/// Bad move input is never an error: it becomes [`Move::Invalid`](crate::Move::Invalid)
/// and is resolved like any other move.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RefereeError {
    #[error("Game is already over (round counter at {round})")]
    GameOver { round: u8 },

    #[error("Round counter {round} is outside 1..={max}")]
    RoundOutOfRange { round: u8, max: u8 },

    #[error("game_over is {game_over} but round counter is {round}")]
    GameOverMismatch { round: u8, game_over: bool },

    #[error("Scores {user_score}-{bot_score} exceed the {played} rounds played")]
    ScoreExceedsRounds { user_score: u8, bot_score: u8, played: u8 },

    #[error("Arithmetic overflow")]
    Overflow,
}
