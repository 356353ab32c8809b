use serde::{Deserialize, Serialize};

/// A settled request, ready to be folded into the game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    PuzzleGenerated {
        start: String,
        end: String,
    },

    HopAccepted {
        index: usize,
        word: String,
    },

    HopRejected {
        index: usize,
        message: String,
    },

    HintReceived {
        index: usize,
        hint: String,
    },

    SolutionReceived {
        chain: Vec<String>,
    },

    StepUndone,

    GameReset {
        full: bool,
    },

    OracleFailed {
        message: String,
    },
}

impl GameEvent {
    pub fn short_name(&self) -> &'static str {
        match self {
            GameEvent::PuzzleGenerated { .. } => "PuzzleGenerated",
            GameEvent::HopAccepted { .. } => "HopAccepted",
            GameEvent::HopRejected { .. } => "HopRejected",
            GameEvent::HintReceived { .. } => "HintReceived",
            GameEvent::SolutionReceived { .. } => "SolutionReceived",
            GameEvent::StepUndone => "StepUndone",
            GameEvent::GameReset { .. } => "GameReset",
            GameEvent::OracleFailed { .. } => "OracleFailed",
        }
    }
}
