//! Terminal Tetris (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `termtris::{core,input,scores,term,types}` and adds the
//! pieces only the binary needs: configuration, log setup, and the sound sink.

pub mod config;
pub mod logging;
pub mod sound;

pub use termtris_core as core;
pub use termtris_input as input;
pub use termtris_scores as scores;
pub use termtris_term as term;
pub use termtris_types as types;

pub use config::AppConfig;
pub use sound::SoundSink;
