//! Bot move selection
//!
//! Picking the bot's move is orchestration policy, not referee logic:
//! whatever a strategy returns is validated against the bot's bomb flag
//! exactly like user input.

use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::random::SeededRng;
use crate::state::GameState;

/// How the automated opponent picks its move
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotStrategy {
    /// Uniform over the legal moves still available. Bomb drops out once spent.
    #[default]
    Random,
    /// Rock, paper, scissors in turn by round number. Never bombs.
    Cycle,
    /// The same move every round.
    Fixed(Move),
}

/// Choose the bot's move for the current round
///
/// # Arguments
/// * `strategy` - The bot's strategy
/// * `state` - Current game state (round number and bomb flag)
/// * `rng` - Random number generator for this round
pub fn choose_bot_move(strategy: &BotStrategy, state: &GameState, rng: &mut SeededRng) -> Move {
    match strategy {
        BotStrategy::Random => {
            let pool: &[Move] = if state.bot_bomb_used {
                &Move::CLASSIC
            } else {
                &Move::LEGAL
            };
            rng.pick(pool).unwrap_or(Move::Rock)
        }
        BotStrategy::Cycle => {
            let idx = usize::from(state.round.saturating_sub(1)) % Move::CLASSIC.len();
            Move::CLASSIC[idx]
        }
        BotStrategy::Fixed(mv) => *mv,
    }
}

/// Get a human-readable description of a strategy
pub fn describe_strategy(strategy: &BotStrategy) -> String {
    match strategy {
        BotStrategy::Random => {
            "Picks a random legal move each round. Uses its bomb at most once.".to_string()
        }
        BotStrategy::Cycle => "Plays rock, then paper, then scissors.".to_string(),
        BotStrategy::Fixed(Move::Bomb) => {
            "Always plays bomb. Only the first one counts.".to_string()
        }
        BotStrategy::Fixed(mv) => format!("Always plays {}.", mv),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seed_from_u64;

    #[test]
    fn test_random_only_legal_moves() {
        let state = GameState::new();
        let mut rng = SeededRng::new(&seed_from_u64(11), 0);

        for _ in 0..200 {
            let mv = choose_bot_move(&BotStrategy::Random, &state, &mut rng);
            assert!(mv.is_legal());
        }
    }

    #[test]
    fn test_random_skips_spent_bomb() {
        let mut state = GameState::new();
        state.bot_bomb_used = true;
        let mut rng = SeededRng::new(&seed_from_u64(11), 0);

        for _ in 0..200 {
            let mv = choose_bot_move(&BotStrategy::Random, &state, &mut rng);
            assert_ne!(mv, Move::Bomb, "spent bomb must not be chosen");
        }
    }

    #[test]
    fn test_random_eventually_bombs() {
        let state = GameState::new();
        let mut rng = SeededRng::new(&seed_from_u64(3), 0);
        let bombs = (0..400)
            .filter(|_| choose_bot_move(&BotStrategy::Random, &state, &mut rng) == Move::Bomb)
            .count();
        // Expected ~100 out of 400
        assert!(bombs > 50 && bombs < 150, "bomb picked {} times", bombs);
    }

    #[test]
    fn test_cycle_by_round() {
        let mut rng = SeededRng::new(&seed_from_u64(0), 0);
        let mut state = GameState::new();
        let mut seen = Vec::new();
        for round in 1..=3u8 {
            state.round = round;
            seen.push(choose_bot_move(&BotStrategy::Cycle, &state, &mut rng));
        }
        assert_eq!(seen, vec![Move::Rock, Move::Paper, Move::Scissors]);
    }

    #[test]
    fn test_fixed_ignores_state() {
        let mut rng = SeededRng::new(&seed_from_u64(0), 0);
        let mut state = GameState::new();
        state.bot_bomb_used = true;
        assert_eq!(
            choose_bot_move(&BotStrategy::Fixed(Move::Bomb), &state, &mut rng),
            Move::Bomb
        );
    }

    #[test]
    fn test_describe_strategy() {
        assert!(describe_strategy(&BotStrategy::Fixed(Move::Paper)).contains("paper"));
        assert!(describe_strategy(&BotStrategy::Random).contains("random"));
    }
}
