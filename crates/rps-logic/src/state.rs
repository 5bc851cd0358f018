//! Game state and the per-round transition

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::RefereeError;
use crate::moves::Move;
use crate::{RoundOutcome, MAX_ROUNDS};

/// One of the two participants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    User,
    Bot,
}

/// Result of a finished game, from the final scores
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalResult {
    UserWins,
    BotWins,
    Draw,
}

impl core::fmt::Display for FinalResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FinalResult::UserWins => write!(f, "You win"),
            FinalResult::BotWins => write!(f, "Bot wins"),
            FinalResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Authoritative record of a single game
///
/// Owned by whoever drives the game loop and mutated once per round
/// through [`GameState::update`]. `round` is 1-indexed and reads
/// `MAX_ROUNDS + 1` once the game is over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub round: u8,
    pub user_score: u8,
    pub bot_score: u8,
    pub user_bomb_used: bool,
    pub bot_bomb_used: bool,
    pub game_over: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            round: 1,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
            game_over: false,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn bomb_used(&self, side: Side) -> bool {
        match side {
            Side::User => self.user_bomb_used,
            Side::Bot => self.bot_bomb_used,
        }
    }

    pub fn score(&self, side: Side) -> u8 {
        match side {
            Side::User => self.user_score,
            Side::Bot => self.bot_score,
        }
    }

    /// Final result, or `None` while rounds remain
    pub fn final_result(&self) -> Option<FinalResult> {
        if !self.game_over {
            return None;
        }

        Some(match self.user_score.cmp(&self.bot_score) {
            core::cmp::Ordering::Greater => FinalResult::UserWins,
            core::cmp::Ordering::Less => FinalResult::BotWins,
            core::cmp::Ordering::Equal => FinalResult::Draw,
        })
    }

    /// Check the invariants a state must hold between rounds
    ///
    /// States built through [`GameState::new`] and [`GameState::update`]
    /// always pass; this guards states that arrive from outside, such as
    /// deserialized JSON.
    pub fn validate(&self) -> Result<(), RefereeError> {
        if self.round < 1 || self.round > MAX_ROUNDS + 1 {
            return Err(RefereeError::RoundOutOfRange {
                round: self.round,
                max: MAX_ROUNDS + 1,
            });
        }

        if self.game_over != (self.round > MAX_ROUNDS) {
            return Err(RefereeError::GameOverMismatch {
                round: self.round,
                game_over: self.game_over,
            });
        }

        let played = self.round - 1;
        if u16::from(self.user_score) + u16::from(self.bot_score) > u16::from(played) {
            return Err(RefereeError::ScoreExceedsRounds {
                user_score: self.user_score,
                bot_score: self.bot_score,
                played,
            });
        }

        Ok(())
    }

    /// Apply one resolved round
    ///
    /// Scores the outcome, consumes bombs that were played, advances the
    /// round counter and latches `game_over` past the last round. A
    /// finished game or a state failing [`GameState::validate`] is left
    /// untouched and an error is returned.
    pub fn update(
        &mut self,
        outcome: RoundOutcome,
        user_move: Move,
        bot_move: Move,
    ) -> Result<(), RefereeError> {
        self.validate()?;
        if self.game_over {
            warn!(round = self.round, "update called on a finished game");
            return Err(RefereeError::GameOver { round: self.round });
        }

        let mut next = self.clone();

        match outcome {
            RoundOutcome::UserWin => {
                next.user_score = next.user_score.checked_add(1).ok_or(RefereeError::Overflow)?
            }
            RoundOutcome::BotWin => {
                next.bot_score = next.bot_score.checked_add(1).ok_or(RefereeError::Overflow)?
            }
            RoundOutcome::Draw => {}
        }

        if user_move == Move::Bomb {
            next.user_bomb_used = true;
        }
        if bot_move == Move::Bomb {
            next.bot_bomb_used = true;
        }

        next.round = next.round.checked_add(1).ok_or(RefereeError::Overflow)?;
        if next.round > MAX_ROUNDS {
            next.game_over = true;
        }

        debug!(
            round = self.round,
            ?outcome,
            user_score = next.user_score,
            bot_score = next.bot_score,
            game_over = next.game_over,
            "round applied"
        );

        *self = next;
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
