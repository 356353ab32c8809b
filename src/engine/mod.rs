pub mod engine;
pub mod protocol;
pub mod apply_event;
pub mod game_engine;
pub mod oracle;

pub mod prompt_builder;
pub mod llm_client;
pub mod llm_oracle;
