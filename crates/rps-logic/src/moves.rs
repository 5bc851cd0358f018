//! Move vocabulary and input validation

use serde::{Deserialize, Serialize};

/// A move in Rock-Paper-Scissors-Plus
///
/// `Invalid` is a regular variant rather than an error: it stands for
/// unrecognized input or a reused bomb and loses to every legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// One use per player. Beats every other legal move.
    Bomb,
    Invalid,
}

impl Move {
    /// The four moves a player may submit
    pub const LEGAL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// The three moves of the classic cycle
    pub const CLASSIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn is_legal(self) -> bool {
        self != Move::Invalid
    }

    /// Canonical lowercase token, as accepted by [`validate`]
    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
            Move::Invalid => "invalid",
        }
    }

    /// Check if this move beats the other outright
    ///
    /// Bomb beats every legal move except another bomb. Any legal move
    /// beats `Invalid`. `Invalid` beats nothing.
    pub fn beats(self, other: Move) -> bool {
        match (self, other) {
            (Move::Invalid, _) => false,
            (_, Move::Invalid) => true,
            (Move::Bomb, Move::Bomb) => false,
            (Move::Bomb, _) => true,
            (_, Move::Bomb) => false,
            _ => matches!(
                (self, other),
                (Move::Rock, Move::Scissors)
                    | (Move::Scissors, Move::Paper)
                    | (Move::Paper, Move::Rock)
            ),
        }
    }

    fn from_token(token: &str) -> Option<Move> {
        match token {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            "bomb" => Some(Move::Bomb),
            _ => None,
        }
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a raw input was turned into [`Move::Invalid`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Not one of rock, paper, scissors, bomb.
    UnknownMove,
    /// Bomb was already spent earlier in the game.
    BombAlreadyUsed,
}

impl core::fmt::Display for Rejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Rejection::UnknownMove => write!(f, "Invalid move"),
            Rejection::BombAlreadyUsed => write!(f, "Bomb already used"),
        }
    }
}

/// Result of validating a raw move, with the rejection reason kept for display
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validation {
    Accepted(Move),
    Rejected(Rejection),
}

impl Validation {
    pub fn into_move(self) -> Move {
        match self {
            Validation::Accepted(mv) => mv,
            Validation::Rejected(_) => Move::Invalid,
        }
    }

    pub fn rejection(self) -> Option<Rejection> {
        match self {
            Validation::Accepted(_) => None,
            Validation::Rejected(reason) => Some(reason),
        }
    }
}

/// Validate a raw move, keeping the reason for a rejection
///
/// Matching ignores case and surrounding whitespace. Never fails and
/// never touches the bomb flag; consuming the bomb is the job of
/// [`GameState::update`](crate::GameState::update).
pub fn validate_move(raw_input: &str, bomb_already_used: bool) -> Validation {
    let token = raw_input.trim().to_lowercase();

    match Move::from_token(&token) {
        None => Validation::Rejected(Rejection::UnknownMove),
        Some(Move::Bomb) if bomb_already_used => Validation::Rejected(Rejection::BombAlreadyUsed),
        Some(mv) => Validation::Accepted(mv),
    }
}

/// Validate a raw move against the legal set and the player's bomb allowance
pub fn validate(raw_input: &str, bomb_already_used: bool) -> Move {
    validate_move(raw_input, bomb_already_used).into_move()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_normalizes_input() {
        assert_eq!(validate("ROCK ", false), Move::Rock);
        assert_eq!(validate("  Paper\n", false), Move::Paper);
        assert_eq!(validate("sCiSsOrS", false), Move::Scissors);
        assert_eq!(validate("\tbomb", false), Move::Bomb);
    }

    #[test]
    fn test_validate_blocks_bomb_reuse() {
        assert_eq!(validate("bomb", true), Move::Invalid);
        assert_eq!(
            validate_move("BOMB", true),
            Validation::Rejected(Rejection::BombAlreadyUsed)
        );
    }

    #[test]
    fn test_validate_unknown_tokens() {
        assert_eq!(validate("lizard", false), Move::Invalid);
        assert_eq!(validate("", false), Move::Invalid);
        assert_eq!(validate("rock paper", false), Move::Invalid);
        // The sentinel name is not something a player can submit
        assert_eq!(validate("invalid", false), Move::Invalid);
        assert_eq!(
            validate_move("spock", true),
            Validation::Rejected(Rejection::UnknownMove)
        );
    }

    #[test]
    fn test_bomb_flag_only_affects_bomb() {
        for mv in Move::CLASSIC {
            assert_eq!(validate(mv.as_str(), true), mv);
            assert_eq!(validate(mv.as_str(), false), mv);
        }
    }

    #[test]
    fn test_classic_cycle() {
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Scissors.beats(Move::Paper));
        assert!(Move::Paper.beats(Move::Rock));
        assert!(!Move::Scissors.beats(Move::Rock));
        assert!(!Move::Rock.beats(Move::Rock));
    }

    #[test]
    fn test_bomb_and_invalid_beats() {
        for mv in Move::CLASSIC {
            assert!(Move::Bomb.beats(mv));
            assert!(!mv.beats(Move::Bomb));
        }
        assert!(!Move::Bomb.beats(Move::Bomb));
        for mv in Move::LEGAL {
            assert!(mv.beats(Move::Invalid));
            assert!(!Move::Invalid.beats(mv));
        }
        assert!(!Move::Invalid.beats(Move::Invalid));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Move::Scissors).unwrap(), "\"scissors\"");
        let mv: Move = serde_json::from_str("\"bomb\"").unwrap();
        assert_eq!(mv, Move::Bomb);
        assert_eq!(
            serde_json::to_string(&Rejection::BombAlreadyUsed).unwrap(),
            "\"bomb_already_used\""
        );
    }
}
