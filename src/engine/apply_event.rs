use log::{debug, info};

use crate::model::event_result::EventApplyOutcome;
use crate::model::game_event::GameEvent;
use crate::model::game_state::{
    level_score, lives_for_level, GameState, GameStatus, HOP_SLOTS, MAX_LEVEL,
};

/// Apply a settled event to the game state, returning the outcome.
///
/// Every precondition is checked here again, so an event that no longer fits
/// the state (a stale answer, a wrong slot) leaves it untouched.
pub fn apply_event(state: &mut GameState, event: GameEvent) -> EventApplyOutcome {
    debug!("applying {}", event.short_name());

    match event {
        GameEvent::PuzzleGenerated { start, end } => {
            if state.lives == 0 {
                return EventApplyOutcome::skipped("Game over - start a new game");
            }

            let start = normalize_word(&start);
            let end = normalize_word(&end);
            if start.is_empty() || end.is_empty() {
                return EventApplyOutcome::skipped("Puzzle words must not be empty");
            }

            state.clear_puzzle();
            state.start_word = start;
            state.end_word = end;

            info!(
                "level {} puzzle: {} -> {} in {} hops",
                state.level, state.start_word, state.end_word, state.max_steps
            );
            EventApplyOutcome::Applied
        }

        GameEvent::HopAccepted { index, word } => {
            if let Err(reason) = check_open_slot(state, index) {
                return EventApplyOutcome::Skipped { reason };
            }
            let word = normalize_word(&word);
            if word.is_empty() {
                return EventApplyOutcome::skipped("Hop must not be empty");
            }

            commit_hop(state, index, word);
            state.error = None;

            if state.current_step == state.max_steps {
                finish_puzzle(state);
            }
            EventApplyOutcome::Applied
        }

        GameEvent::HopRejected { index, message } => {
            if let Err(reason) = check_open_slot(state, index) {
                return EventApplyOutcome::Skipped { reason };
            }

            lose_life(state);
            state.error = Some(message.clone());
            EventApplyOutcome::Rejected { reason: message }
        }

        GameEvent::HintReceived { index, hint } => {
            if let Err(reason) = check_open_slot(state, index) {
                return EventApplyOutcome::Skipped { reason };
            }
            let hint = normalize_word(&hint);
            if hint.is_empty() {
                return EventApplyOutcome::skipped("Hint must not be empty");
            }

            commit_hop(state, index, hint);
            lose_life(state);
            state.error = None;

            if state.current_step == state.max_steps {
                finish_puzzle(state);
            }
            EventApplyOutcome::Applied
        }

        GameEvent::SolutionReceived { chain } => {
            if !state.has_puzzle() {
                return EventApplyOutcome::skipped("No puzzle to solve");
            }
            if state.is_complete {
                return EventApplyOutcome::skipped("Puzzle is already complete");
            }
            if chain.len() != state.max_steps || chain.iter().any(|w| w.trim().is_empty()) {
                return EventApplyOutcome::Skipped {
                    reason: format!("Solution must be {} non-empty words", state.max_steps),
                };
            }

            let mut hops: Vec<String> = chain.iter().map(|w| normalize_word(w)).collect();
            hops.resize(HOP_SLOTS, String::new());

            state.hops = hops;
            state.current_step = state.max_steps;
            state.is_complete = true;
            state.revealed = true;
            state.error = None;

            info!("level {} puzzle revealed", state.level);
            EventApplyOutcome::Applied
        }

        GameEvent::StepUndone => {
            if state.current_step == 0 {
                return EventApplyOutcome::skipped("Nothing to undo");
            }
            if state.status() != GameStatus::InProgress {
                return EventApplyOutcome::skipped("Undo is only possible while playing");
            }

            state.current_step -= 1;
            for hop in state.hops.iter_mut().skip(state.current_step) {
                hop.clear();
            }
            state.is_complete = false;
            state.error = None;
            EventApplyOutcome::Applied
        }

        GameEvent::GameReset { full } => {
            if full {
                *state = GameState::default();
                info!("full reset");
            } else {
                state.clear_puzzle();
                state.in_flight = Default::default();
            }
            EventApplyOutcome::Applied
        }

        GameEvent::OracleFailed { message } => {
            state.error = Some(message.clone());
            EventApplyOutcome::Failed { reason: message }
        }
    }
}

/// Trimmed, lowercased form every stored word takes.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Force a solution chain to exactly `steps` words.
///
/// Extra words are dropped and missing ones become `step<N>` placeholders.
/// Blank entries cannot be repaired.
pub fn repair_chain(chain: Vec<String>, steps: usize) -> Result<Vec<String>, String> {
    let mut chain: Vec<String> = chain.iter().map(|w| normalize_word(w)).collect();

    if chain.len() != steps {
        debug!("repairing chain of {} words to {}", chain.len(), steps);
    }
    chain.truncate(steps);
    while chain.len() < steps {
        chain.push(format!("step{}", chain.len() + 1));
    }

    if chain.iter().any(String::is_empty) {
        return Err("All steps must be non-empty words".to_string());
    }
    Ok(chain)
}

/// Why slot `index` cannot take a word right now, if it cannot.
pub(crate) fn check_open_slot(state: &GameState, index: usize) -> Result<(), String> {
    if !state.has_puzzle() {
        return Err("No puzzle in progress".to_string());
    }
    if state.lives == 0 {
        return Err("No lives left".to_string());
    }
    if state.is_complete || state.current_step >= state.max_steps {
        return Err("Puzzle is already complete".to_string());
    }
    if index != state.current_step {
        return Err(format!(
            "Hop {} is not the next open slot ({})",
            index, state.current_step
        ));
    }
    Ok(())
}

fn commit_hop(state: &mut GameState, index: usize, word: String) {
    state.hops[index] = word;
    state.current_step = index + 1;
}

fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.streak = 0;
        info!("game over at level {} with score {}", state.level, state.score);
    }
}

fn finish_puzzle(state: &mut GameState) {
    state.is_complete = true;

    // Running out of lives on the last hop still ends the game.
    if state.lives == 0 {
        return;
    }

    let earned = level_score(state.level, state.current_step, state.max_steps);
    state.score += earned;
    state.streak += 1;
    state.total_games_won += 1;

    if state.level < MAX_LEVEL {
        state.level += 1;
        state.lives = lives_for_level(state.level);
        info!("level complete (+{}), advancing to level {}", earned, state.level);
    } else {
        info!("final level complete (+{})", earned);
    }
}
