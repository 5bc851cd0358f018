//! Interactive referee session
//!
//! Drives the logic crate once per round: read the user's move, pick the
//! bot's move, play the round, print the result. Generic over the input
//! and output streams so it runs against stdin/stdout or in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rps_logic::{
    choose_bot_move, describe_strategy, play_round, BotStrategy, FinalResult, GameState,
    RoundOutcome, RoundRecord, SeededRng, Side, MAX_ROUNDS,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::RefereeConfig;

/// Everything that happened in one session, written out as the transcript
#[derive(Clone, Debug, Serialize)]
pub struct Transcript {
    pub seed: u64,
    pub strategy: BotStrategy,
    pub rounds: Vec<RoundRecord>,
    pub final_state: GameState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<FinalResult>,
    pub aborted: bool,
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "quit" | "exit")
}

fn outcome_line(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Draw => "Result: Draw",
        RoundOutcome::UserWin => "Result: You win this round!",
        RoundOutcome::BotWin => "Result: Bot wins this round!",
    }
}

fn print_welcome<W: Write>(out: &mut W, strategy: &BotStrategy) -> Result<()> {
    writeln!(out, "Welcome to Rock-Paper-Scissors-Plus!")?;
    writeln!(out, "Best of {} rounds.", MAX_ROUNDS)?;
    writeln!(out, "You may use 'bomb' once: it beats everything.")?;
    writeln!(out, "Invalid moves waste the round.")?;
    writeln!(out, "Bot: {}", describe_strategy(strategy))?;
    writeln!(out, "Let's begin!")?;
    writeln!(out)?;
    Ok(())
}

fn print_round<W: Write>(out: &mut W, record: &RoundRecord) -> Result<()> {
    if let Some(reason) = record.rejection {
        writeln!(out, "Invalid input: {}. Round wasted.", reason)?;
    }
    writeln!(out, "You played: {}", record.user_move)?;
    writeln!(out, "Bot played: {}", record.bot_move)?;
    writeln!(out, "{} ({})", outcome_line(record.outcome), record.explanation)?;
    writeln!(out, "Score: You {} | Bot {}", record.user_score, record.bot_score)?;
    writeln!(out)?;
    Ok(())
}

fn print_summary<W: Write>(out: &mut W, transcript: &Transcript) -> Result<()> {
    let state = &transcript.final_state;

    if transcript.aborted {
        writeln!(out, "Game aborted before round {} was played.", state.round)?;
    } else {
        writeln!(out, "=== GAME OVER ===")?;
    }
    writeln!(
        out,
        "Final Score: You {} | Bot {}",
        state.score(Side::User),
        state.score(Side::Bot)
    )?;
    if let Some(result) = transcript.result {
        writeln!(out, "Final Result: {}", result)?;
    }
    Ok(())
}

/// Run one game to completion or until the user quits
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    config: &RefereeConfig,
) -> Result<Transcript> {
    let rng = SeededRng::new(&config.seed, 0);
    let mut state = GameState::new();
    let mut rounds = Vec::new();
    let mut aborted = false;

    print_welcome(out, &config.strategy)?;

    while !state.is_game_over() {
        writeln!(out, "--- Round {} ---", state.round)?;
        write!(out, "Your move: ")?;
        out.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("failed to read move")?;
        if read == 0 || is_quit(&line) {
            info!(round = state.round, "session ended by user");
            writeln!(out)?;
            aborted = true;
            break;
        }

        let bot_move = choose_bot_move(&config.strategy, &state, &mut rng.for_round(state.round));
        debug!(round = state.round, %bot_move, "bot picked move");

        let record = play_round(&mut state, &line, bot_move)?;
        print_round(out, &record)?;
        rounds.push(record);
    }

    let transcript = Transcript {
        seed: config.seed_value,
        strategy: config.strategy,
        rounds,
        result: state.final_result(),
        final_state: state,
        aborted,
    };

    print_summary(out, &transcript)?;
    Ok(transcript)
}
