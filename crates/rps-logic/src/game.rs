//! Round and game execution

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bot::{choose_bot_move, BotStrategy};
use crate::error::RefereeError;
use crate::moves::{validate, validate_move, Move, Rejection};
use crate::random::SeededRng;
use crate::state::{FinalResult, GameState};
use crate::{explain, resolve, RoundOutcome};

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u8,
    pub user_input: String,
    pub user_move: Move,
    pub bot_move: Move,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
    pub outcome: RoundOutcome,
    pub explanation: String,
    pub user_score: u8,
    pub bot_score: u8,
}

/// Result of a complete game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub rounds: Vec<RoundRecord>,
    pub final_state: GameState,
    pub result: FinalResult,
}

/// Play one round: validate both moves, resolve, then update the state
///
/// The bot's move goes through the same validation as the user's, so a
/// second bomb from the bot is just as invalid. On a finished game
/// nothing is validated and the state is left as is.
pub fn play_round(
    state: &mut GameState,
    raw_user_input: &str,
    bot_move: Move,
) -> Result<RoundRecord, RefereeError> {
    if state.game_over {
        return Err(RefereeError::GameOver { round: state.round });
    }

    let validation = validate_move(raw_user_input, state.user_bomb_used);
    if let Some(reason) = validation.rejection() {
        warn!(round = state.round, input = raw_user_input, %reason, "user move rejected");
    }
    let user_move = validation.into_move();

    let checked_bot_move = validate(bot_move.as_str(), state.bot_bomb_used);
    if checked_bot_move != bot_move {
        warn!(round = state.round, %bot_move, "bot move rejected");
    }

    let outcome = resolve(user_move, checked_bot_move);
    let round = state.round;
    state.update(outcome, user_move, checked_bot_move)?;

    debug!(round, %user_move, bot_move = %checked_bot_move, ?outcome, "round resolved");

    Ok(RoundRecord {
        round,
        user_input: raw_user_input.to_string(),
        user_move,
        bot_move: checked_bot_move,
        rejection: validation.rejection(),
        outcome,
        explanation: explain(user_move, checked_bot_move),
        user_score: state.user_score,
        bot_score: state.bot_score,
    })
}

/// Run a complete game from scripted user inputs
///
/// # Arguments
/// * `user_inputs` - Raw user input per round; missing rounds play as empty input
/// * `strategy` - Bot strategy
/// * `seed` - Randomness seed for the bot
/// * `game_index` - Mixed into the seed so one seed can drive many games
///
/// # Returns
/// Round-by-round record plus the final state
pub fn run_game<S: AsRef<str>>(
    user_inputs: &[S],
    strategy: &BotStrategy,
    seed: &[u8; 32],
    game_index: u32,
) -> Result<GameRecord, RefereeError> {
    let rng = SeededRng::new(seed, game_index);
    let mut state = GameState::new();
    let mut rounds = Vec::new();

    while !state.is_game_over() {
        let input = user_inputs
            .get(rounds.len())
            .map(AsRef::as_ref)
            .unwrap_or("");

        let mut round_rng = rng.for_round(state.round);
        let bot_move = choose_bot_move(strategy, &state, &mut round_rng);

        rounds.push(play_round(&mut state, input, bot_move)?);
    }

    let result = state
        .final_result()
        .ok_or(RefereeError::GameOver { round: state.round })?;

    Ok(GameRecord {
        rounds,
        final_state: state,
        result,
    })
}
