use crate::model::event_result::EventApplyOutcome;
use crate::model::game_state::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    StartPuzzle { seed_word: Option<String> },
    SubmitHop { index: usize, guess: String },
    RequestHint,
    RequestSolution,
    UndoLastStep,
    ResetGame { full: bool },
    StartNextLevel,
    Snapshot,
    Shutdown,
}

impl EngineCommand {
    pub fn short_name(&self) -> &'static str {
        match self {
            EngineCommand::StartPuzzle { .. } => "StartPuzzle",
            EngineCommand::SubmitHop { .. } => "SubmitHop",
            EngineCommand::RequestHint => "RequestHint",
            EngineCommand::RequestSolution => "RequestSolution",
            EngineCommand::UndoLastStep => "UndoLastStep",
            EngineCommand::ResetGame { .. } => "ResetGame",
            EngineCommand::StartNextLevel => "StartNextLevel",
            EngineCommand::Snapshot => "Snapshot",
            EngineCommand::Shutdown => "Shutdown",
        }
    }
}

#[derive(Debug, Clone)]
pub enum EngineResponse {
    /// An oracle request went out; the state shows which marker is set.
    StateChanged(GameState),

    /// The command has settled.
    Applied {
        command: &'static str,
        outcome: EventApplyOutcome,
        state: GameState,
    },
}
