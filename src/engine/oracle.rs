use thiserror::Error;

use crate::model::oracle_io::{HintRequest, HopRequest, HopVerdict, SeedPair, SeedRequest, SolveRequest};

/// Why an oracle call produced no usable answer.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Oracle request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Oracle returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Oracle returned no content")]
    EmptyResponse,

    #[error("Malformed oracle response: {0}")]
    Malformed(String),

    #[error("Oracle unavailable: {0}")]
    Unavailable(String),
}

pub type OracleResult<T> = Result<T, OracleError>;

/// The semantic judge behind the game. Implementations may block; the engine
/// calls them from its own thread.
pub trait SemanticOracle {
    fn generate_seed_pair(&self, request: &SeedRequest) -> OracleResult<SeedPair>;

    fn validate_hop(&self, request: &HopRequest) -> OracleResult<HopVerdict>;

    /// A single next word.
    fn generate_hint(&self, request: &HintRequest) -> OracleResult<String>;

    /// Words between start and end. The length may be off; the engine repairs it.
    fn generate_solution_chain(&self, request: &SolveRequest) -> OracleResult<Vec<String>>;
}
