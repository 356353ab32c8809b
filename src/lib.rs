//! Word Hop: bridge a start word to a target word one associative hop at a
//! time, with an LLM judging every hop.

pub mod engine;
pub mod model;
pub mod settings;
pub mod settings_io;

pub use engine::engine::{Engine, EngineHandle};
pub use engine::game_engine::{GameEngine, FALLBACK_PAIRS};
pub use engine::llm_oracle::LlmOracle;
pub use engine::oracle::{OracleError, OracleResult, SemanticOracle};
pub use engine::protocol::{EngineCommand, EngineResponse};
pub use model::event_result::EventApplyOutcome;
pub use model::game_state::{GameState, GameStatus, MAX_LEVEL};
pub use settings::Settings;
