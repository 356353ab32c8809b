use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::apply_event::{apply_event, check_open_slot, normalize_word, repair_chain};
use crate::engine::oracle::{OracleError, SemanticOracle};
use crate::model::event_result::EventApplyOutcome;
use crate::model::game_event::GameEvent;
use crate::model::game_state::{GameState, GameStatus};
use crate::model::oracle_io::{Difficulty, HintRequest, HopRequest, HopVerdict, SeedRequest, SolveRequest};
use crate::settings::GameSettings;

/// Puzzles used when the oracle cannot produce one.
pub const FALLBACK_PAIRS: [(&str, &str); 5] = [
    ("apple", "computer"),
    ("book", "airplane"),
    ("coffee", "mountain"),
    ("music", "telescope"),
    ("garden", "lightning"),
];

/// Called whenever an in-flight marker is raised.
pub type StateObserver = Box<dyn FnMut(&GameState) + Send>;

/// Owns the game state and drives every transition.
///
/// Each operation checks its preconditions, raises the matching in-flight
/// marker, asks the oracle at most once, then folds the answer into the state
/// through [`apply_event`]. Operations never panic or return errors; oracle
/// failures end up in `state.error` and in the returned outcome.
pub struct GameEngine<O> {
    oracle: O,
    state: GameState,
    settings: GameSettings,
    rng: StdRng,
    observer: Option<StateObserver>,
}

impl<O: SemanticOracle> GameEngine<O> {
    pub fn new(oracle: O, settings: GameSettings) -> Self {
        let rng = match settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            oracle,
            state: GameState::default(),
            settings,
            rng,
            observer: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn set_observer(&mut self, observer: StateObserver) {
        self.observer = Some(observer);
    }

    /// Ask the oracle for a new puzzle at the current level.
    pub fn start_puzzle(&mut self, seed_word: Option<&str>) -> EventApplyOutcome {
        if self.state.lives == 0 {
            return EventApplyOutcome::skipped("Game over - start a new game");
        }
        if self.state.in_flight.seed {
            return EventApplyOutcome::skipped("A puzzle is already being generated");
        }

        let request = SeedRequest {
            seed_word: seed_word.map(normalize_word).filter(|w| !w.is_empty()),
            difficulty: Difficulty::for_level(self.state.level),
        };

        self.state.in_flight.seed = true;
        self.state.error = None;
        self.publish();

        let attempts = self.settings.seed_attempts.max(1);
        let mut pair = None;
        let mut last_error = None;
        for attempt in 1..=attempts {
            match self.oracle.generate_seed_pair(&request) {
                Ok(candidate) => {
                    let start = normalize_word(&candidate.start);
                    let end = normalize_word(&candidate.end);
                    if !start.is_empty() && !end.is_empty() && start != end {
                        pair = Some((start, end));
                        break;
                    }
                    warn!("seed attempt {}/{}: unusable pair {:?}", attempt, attempts, candidate);
                    last_error = Some(OracleError::Malformed(format!(
                        "unusable word pair {:?} -> {:?}",
                        candidate.start, candidate.end
                    )));
                }
                Err(e) => {
                    warn!("seed attempt {}/{} failed: {}", attempt, attempts, e);
                    last_error = Some(e);
                }
            }
        }

        self.state.in_flight.seed = false;

        if let Some((start, end)) = pair {
            return apply_event(&mut self.state, GameEvent::PuzzleGenerated { start, end });
        }

        let (start, end) = FALLBACK_PAIRS[self.rng.gen_range(0..FALLBACK_PAIRS.len())];
        info!("using built-in puzzle {} -> {}", start, end);

        let outcome = apply_event(
            &mut self.state,
            GameEvent::PuzzleGenerated {
                start: start.to_string(),
                end: end.to_string(),
            },
        );
        if !outcome.is_applied() {
            return outcome;
        }

        let reason = match last_error {
            Some(e) => format!("{} - using a built-in puzzle", e),
            None => "Failed to generate seed words - using a built-in puzzle".to_string(),
        };
        self.state.error = Some(reason.clone());
        EventApplyOutcome::Degraded { reason }
    }

    /// Propose `guess` for slot `index` and let the oracle judge it.
    pub fn submit_hop(&mut self, index: usize, guess: &str) -> EventApplyOutcome {
        let guess = guess.trim();
        if guess.is_empty() {
            return EventApplyOutcome::skipped("Enter a word first");
        }
        if self.state.in_flight.hop == Some(index) {
            return EventApplyOutcome::skipped("This hop is already being checked");
        }
        if let Err(reason) = check_open_slot(&self.state, index) {
            return EventApplyOutcome::Skipped { reason };
        }

        let request = HopRequest {
            previous: self.state.previous_word(index).to_string(),
            guess: guess.to_string(),
            target: self.state.end_word.clone(),
            is_final_step: index + 1 == self.state.max_steps,
        };

        self.state.in_flight.hop = Some(index);
        self.publish();
        let result = self.oracle.validate_hop(&request);
        self.state.in_flight.hop = None;

        let event = match result {
            Ok(verdict) if verdict.valid => GameEvent::HopAccepted {
                index,
                word: guess.to_string(),
            },
            Ok(verdict) => GameEvent::HopRejected {
                index,
                message: rejection_message(&verdict, request.is_final_step),
            },
            Err(e) => {
                warn!("hop validation failed: {}", e);
                GameEvent::OracleFailed {
                    message: format!("Failed to validate hop: {}", e),
                }
            }
        };
        apply_event(&mut self.state, event)
    }

    /// Spend a life to have the oracle fill the next slot.
    pub fn request_hint(&mut self) -> EventApplyOutcome {
        if self.state.in_flight.hint {
            return EventApplyOutcome::skipped("A hint is already on its way");
        }
        if let Err(reason) = check_open_slot(&self.state, self.state.current_step) {
            return EventApplyOutcome::Skipped { reason };
        }

        let index = self.state.current_step;
        let request = HintRequest {
            start: self.state.start_word.clone(),
            end: self.state.end_word.clone(),
            hops: self.state.chain().to_vec(),
            current_step: index,
            max_steps: self.state.max_steps,
        };

        self.state.in_flight.hint = true;
        self.publish();
        let result = self.oracle.generate_hint(&request);
        self.state.in_flight.hint = false;

        let event = match result.map(|hint| normalize_word(&hint)) {
            Ok(hint) if !hint.is_empty() => GameEvent::HintReceived { index, hint },
            Ok(_) => GameEvent::OracleFailed {
                message: "Failed to get hint: no hint provided".to_string(),
            },
            Err(e) => {
                warn!("hint failed: {}", e);
                GameEvent::OracleFailed {
                    message: format!("Failed to get hint: {}", e),
                }
            }
        };
        apply_event(&mut self.state, event)
    }

    /// Reveal a full chain. Scores nothing.
    pub fn request_solution(&mut self) -> EventApplyOutcome {
        if !self.state.has_puzzle() {
            return EventApplyOutcome::skipped("No puzzle to solve");
        }
        if self.state.is_complete {
            return EventApplyOutcome::skipped("Puzzle is already complete");
        }
        if self.state.in_flight.solve {
            return EventApplyOutcome::skipped("A solution is already on its way");
        }

        let request = SolveRequest {
            start: self.state.start_word.clone(),
            end: self.state.end_word.clone(),
            steps: self.state.max_steps,
        };

        self.state.in_flight.solve = true;
        self.publish();
        let result = self.oracle.generate_solution_chain(&request);
        self.state.in_flight.solve = false;

        let event = match result {
            Ok(chain) => match repair_chain(chain, request.steps) {
                Ok(chain) => GameEvent::SolutionReceived { chain },
                Err(e) => GameEvent::OracleFailed {
                    message: format!("Failed to get solution: {}", e),
                },
            },
            Err(e) => {
                warn!("solution failed: {}", e);
                GameEvent::OracleFailed {
                    message: format!("Failed to get solution: {}", e),
                }
            }
        };
        apply_event(&mut self.state, event)
    }

    pub fn undo_last_step(&mut self) -> EventApplyOutcome {
        apply_event(&mut self.state, GameEvent::StepUndone)
    }

    pub fn reset_game(&mut self, full_reset: bool) -> EventApplyOutcome {
        apply_event(&mut self.state, GameEvent::GameReset { full: full_reset })
    }

    /// Clear the finished puzzle and generate one for the current level.
    pub fn start_next_level(&mut self) -> EventApplyOutcome {
        if self.state.lives == 0 {
            return EventApplyOutcome::skipped("Game over - start a new game");
        }

        if !self.state.has_next_level() {
            return EventApplyOutcome::skipped("No levels left");
        }

        self.reset_game(false);
        self.start_puzzle(None)
    }

    fn publish(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.state);
        }
    }
}

fn rejection_message(verdict: &HopVerdict, is_final_step: bool) -> String {
    let explanation = verdict.explanation.trim();
    if explanation.is_empty() {
        "Invalid hop - Lost a life!".to_string()
    } else if is_final_step {
        format!("Final step: {}", explanation)
    } else {
        explanation.to_string()
    }
}
