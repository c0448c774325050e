//! Terminal input module.
//!
//! This module is independent of the game core. It maps `crossterm` key
//! events into [`crate::types::GameEvent`] and collects them once per frame
//! for the driver loop.

pub mod map;
pub mod reader;

pub use termtris_types as types;

pub use map::{handle_key_event, should_force_quit};
pub use reader::{EventReader, FrameInput, MAX_EVENTS_PER_FRAME};
