//! WASM bindings for a browser front end

#![cfg(feature = "wasm")]

use crate::bot::describe_strategy;
use crate::{resolve, run_game, validate_move, BotStrategy, GameState, Move, Validation};
use wasm_bindgen::prelude::*;

fn parse_move(name: &str) -> Result<Move, JsError> {
    serde_json::from_value(serde_json::Value::String(name.to_lowercase()))
        .map_err(|e| JsError::new(&format!("Unknown move {}: {}", name, e)))
}

fn parse_state(state_json: &str) -> Result<GameState, JsError> {
    let state: GameState = serde_json::from_str(state_json)
        .map_err(|e| JsError::new(&format!("Invalid game state: {}", e)))?;
    state
        .validate()
        .map_err(|e| JsError::new(&format!("Invalid game state: {}", e)))?;
    Ok(state)
}

#[derive(serde::Serialize)]
struct ValidationResult {
    valid: bool,
    #[serde(rename = "move")]
    mv: Move,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// Validate a raw move
///
/// Returns `{valid: true, move: "rock"}` or
/// `{valid: false, move: "invalid", reason: "..."}`.
/// Never throws: a bad move is data, not an error.
#[wasm_bindgen]
pub fn validate_user_move(raw_input: &str, bomb_already_used: bool) -> JsValue {
    let validation = validate_move(raw_input, bomb_already_used);
    let result = ValidationResult {
        valid: matches!(validation, Validation::Accepted(_)),
        mv: validation.into_move(),
        reason: validation.rejection().map(|r| r.to_string()),
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Resolve a round between two move names
///
/// Returns `"user_win"`, `"bot_win"` or `"draw"`.
#[wasm_bindgen]
pub fn resolve_round(user_move: &str, bot_move: &str) -> Result<JsValue, JsError> {
    let outcome = resolve(parse_move(user_move)?, parse_move(bot_move)?);

    serde_wasm_bindgen::to_value(&outcome)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Fresh game state as JSON
#[wasm_bindgen]
pub fn new_game() -> Result<String, JsError> {
    serde_json::to_string(&GameState::new())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Apply one round to a JSON game state and return the next JSON state
///
/// The bot move is validated against the bot's bomb flag before
/// resolution, exactly as in the native referee.
#[wasm_bindgen]
pub fn update_game(
    state_json: &str,
    raw_user_input: &str,
    bot_move: &str,
) -> Result<JsValue, JsError> {
    let mut state = parse_state(state_json)?;
    let record = crate::play_round(&mut state, raw_user_input, parse_move(bot_move)?)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&(record, state))
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Replay a complete game with full round-by-round details
///
/// # Arguments
/// * `user_inputs_json` - JSON array of raw user inputs
/// * `strategy_json` - JSON serialized BotStrategy, e.g. `"Random"` or `{"Fixed": "rock"}`
/// * `seed` - 32-byte randomness seed
/// * `game_index` - Index of this game under the seed
#[wasm_bindgen]
pub fn replay_game(
    user_inputs_json: &str,
    strategy_json: &str,
    seed: &[u8],
    game_index: u32,
) -> Result<JsValue, JsError> {
    let inputs: Vec<String> = serde_json::from_str(user_inputs_json)
        .map_err(|e| JsError::new(&format!("Invalid inputs: {}", e)))?;
    let strategy: BotStrategy = serde_json::from_str(strategy_json)
        .map_err(|e| JsError::new(&format!("Invalid strategy: {}", e)))?;

    let seed_arr: [u8; 32] = seed
        .try_into()
        .map_err(|_| JsError::new("Seed must be exactly 32 bytes"))?;

    let record = run_game(&inputs, &strategy, &seed_arr, game_index)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&record)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get human-readable description of a bot strategy
#[wasm_bindgen]
pub fn get_strategy_description(strategy_json: &str) -> Result<String, JsError> {
    let strategy: BotStrategy = serde_json::from_str(strategy_json)
        .map_err(|e| JsError::new(&format!("Invalid strategy: {}", e)))?;

    Ok(describe_strategy(&strategy))
}
