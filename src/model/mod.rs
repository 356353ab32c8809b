pub mod event_result;
pub mod game_event;
pub mod game_state;
pub mod llm_decode;
pub mod oracle_io;
