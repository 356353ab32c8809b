use serde::{Deserialize, Serialize};

use crate::model::game_state::MAX_LEVEL;

/// How hard a generated puzzle should be. Grows with the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Gentle,
    Easy,
    Moderate,
    Tricky,
    Hard,
    Fiendish,
}

impl Difficulty {
    pub fn for_level(level: u32) -> Self {
        match level.clamp(1, MAX_LEVEL) {
            1 => Difficulty::Gentle,
            2 => Difficulty::Easy,
            3 => Difficulty::Moderate,
            4 => Difficulty::Tricky,
            5 => Difficulty::Hard,
            _ => Difficulty::Fiendish,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Difficulty::Gentle => "gentle: the two words should be only a single associative step apart",
            Difficulty::Easy => "easy: a short, fairly obvious path should exist",
            Difficulty::Moderate => "moderate: not too easy, not impossible",
            Difficulty::Tricky => "tricky: the words should look unrelated at first glance",
            Difficulty::Hard => "hard: the path should need several clever associations",
            Difficulty::Fiendish => "fiendish: the words should feel worlds apart",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRequest {
    pub seed_word: Option<String>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPair {
    pub start: String,
    pub end: String,
}

impl SeedPair {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopRequest {
    pub previous: String,
    pub guess: String,
    pub target: String,
    pub is_final_step: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopVerdict {
    pub valid: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintRequest {
    pub start: String,
    pub end: String,
    /// Confirmed hops so far.
    pub hops: Vec<String>,
    pub current_step: usize,
    pub max_steps: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub start: String,
    pub end: String,
    pub steps: usize,
}
