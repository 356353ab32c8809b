use serde::{Deserialize, Serialize};

/// What happened when an operation or event met the game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventApplyOutcome {
    Applied,
    /// The game rules said no (e.g. the oracle rejected a hop).
    Rejected { reason: String },
    /// Called outside its valid state; nothing changed.
    Skipped { reason: String },
    /// The oracle failed; nothing changed except the error message.
    Failed { reason: String },
    /// Applied with a local substitute for the oracle's answer.
    Degraded { reason: String },
}

impl EventApplyOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        EventApplyOutcome::Skipped {
            reason: reason.into(),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, EventApplyOutcome::Applied | EventApplyOutcome::Degraded { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            EventApplyOutcome::Applied => None,
            EventApplyOutcome::Rejected { reason }
            | EventApplyOutcome::Skipped { reason }
            | EventApplyOutcome::Failed { reason }
            | EventApplyOutcome::Degraded { reason } => Some(reason),
        }
    }
}
