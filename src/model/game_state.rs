use serde::{Deserialize, Serialize};

/// Highest difficulty tier. Level N asks for N hops.
pub const MAX_LEVEL: u32 = 6;

/// Hop slots kept in every state, regardless of the current level.
pub const HOP_SLOTS: usize = MAX_LEVEL as usize;

pub fn max_steps_for_level(level: u32) -> usize {
    level as usize
}

pub fn lives_for_level(level: u32) -> u32 {
    level + 1
}

/// Points for a finished puzzle. `steps_used` is read after the final hop
/// has been counted, so the step bonus is zero for every scored completion.
pub fn level_score(level: u32, steps_used: usize, max_steps: usize) -> u32 {
    let base = level * 100;
    let step_bonus = max_steps.saturating_sub(steps_used) as u32 * 20;
    base + step_bonus
}

/// Oracle requests currently awaiting an answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InFlight {
    pub seed: bool,
    /// Slot index being validated.
    pub hop: Option<usize>,
    pub hint: bool,
    pub solve: bool,
}

impl InFlight {
    pub fn any(&self) -> bool {
        self.seed || self.hop.is_some() || self.hint || self.solve
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    NotStarted,
    InProgress,
    LevelComplete,
    AllLevelsComplete,
    GameOver,
}

/// The whole game. Owned by the engine; everything outside it sees clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub start_word: String,
    pub end_word: String,

    /// Always `HOP_SLOTS` long. Empty string means unfilled.
    pub hops: Vec<String>,
    pub current_step: usize,
    pub max_steps: usize,

    pub level: u32,
    pub lives: u32,
    pub score: u32,
    pub streak: u32,
    pub total_games_won: u32,

    pub is_complete: bool,
    /// Completed by asking the oracle for the answer.
    pub revealed: bool,

    pub in_flight: InFlight,
    pub error: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            start_word: String::new(),
            end_word: String::new(),
            hops: vec![String::new(); HOP_SLOTS],
            current_step: 0,
            max_steps: max_steps_for_level(1),
            level: 1,
            lives: lives_for_level(1),
            score: 0,
            streak: 0,
            total_games_won: 0,
            is_complete: false,
            revealed: false,
            in_flight: InFlight::default(),
            error: None,
        }
    }
}

impl GameState {
    pub fn status(&self) -> GameStatus {
        if self.lives == 0 {
            GameStatus::GameOver
        } else if !self.has_puzzle() {
            GameStatus::NotStarted
        } else if self.is_complete {
            if self.max_steps == max_steps_for_level(MAX_LEVEL) && !self.revealed {
                GameStatus::AllLevelsComplete
            } else {
                GameStatus::LevelComplete
            }
        } else {
            GameStatus::InProgress
        }
    }

    pub fn has_puzzle(&self) -> bool {
        !self.start_word.is_empty() && !self.end_word.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.seed || self.in_flight.solve
    }

    /// Level of the puzzle on the board. After a scored finish `level` has
    /// already moved on while `max_steps` still describes the finished puzzle.
    pub fn played_level(&self) -> u32 {
        if self.is_complete {
            self.max_steps as u32
        } else {
            self.level
        }
    }

    /// Whether a further level exists beyond the one being played.
    pub fn has_next_level(&self) -> bool {
        self.played_level() < MAX_LEVEL
    }

    /// Word the next hop has to connect from.
    pub fn previous_word(&self, index: usize) -> &str {
        if index == 0 {
            &self.start_word
        } else {
            self.hops.get(index - 1).map(String::as_str).unwrap_or("")
        }
    }

    /// Confirmed hops, in order.
    pub fn chain(&self) -> &[String] {
        &self.hops[..self.current_step]
    }

    /// Blanks every puzzle-local field and sizes the puzzle for the current level.
    pub fn clear_puzzle(&mut self) {
        self.start_word.clear();
        self.end_word.clear();
        self.hops = vec![String::new(); HOP_SLOTS];
        self.current_step = 0;
        self.max_steps = max_steps_for_level(self.level);
        self.is_complete = false;
        self.revealed = false;
        self.error = None;
    }

    /// Checks the structural invariants that hold in every reachable state.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.hops.len() != HOP_SLOTS {
            return Err(format!("expected {} hop slots, found {}", HOP_SLOTS, self.hops.len()));
        }
        if self.current_step > self.max_steps {
            return Err(format!(
                "current_step {} exceeds max_steps {}",
                self.current_step, self.max_steps
            ));
        }
        if self.level == 0 || self.level > MAX_LEVEL {
            return Err(format!("level {} out of range", self.level));
        }
        for (i, hop) in self.hops.iter().enumerate() {
            if i < self.current_step && hop.is_empty() {
                return Err(format!("hop {} is blank below current_step", i));
            }
            if i >= self.current_step && !hop.is_empty() {
                return Err(format!("hop {} is filled at or past current_step", i));
            }
        }
        if self.is_complete != (self.current_step == self.max_steps && self.has_puzzle()) {
            return Err("is_complete disagrees with current_step".to_string());
        }
        Ok(())
    }
}
