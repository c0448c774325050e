//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminal, audio, or file I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted piece source) produces identical games
//! - **Testable**: Time is passed in as an `Instant`, never read from the clock
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision detection and line clearing
//! - [`catalog`]: The seven tetromino shapes and clockwise rotation
//! - [`piece`]: The falling piece and its move/rotate/drop rules
//! - [`gravity`]: Fixed 500ms descent clock
//! - [`rng`]: Piece sources (uniform random, scripted sequences)
//! - [`scoring`]: Points per lock event
//! - [`game_state`]: The session state machine (menu, playing, game over)
//! - [`snapshot`]: Read-only frame view for renderers
//!
//! # Game Rules
//!
//! - **Uniform Randomizer**: Each piece kind is drawn independently from the catalog
//! - **Plain Rotation**: Clockwise only, around the top-left anchor, no wall kicks
//! - **No Lock Delay**: A piece locks on the first gravity tick that cannot move it
//! - **Hard Drop**: Moves the piece to its resting row; the next gravity tick locks it
//! - **Scoring**: `100 * n²` for `n` rows cleared by a single lock
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use termtris_core::GameSession;
//! use termtris_core::types::{GameEvent, GameMode};
//!
//! let t0 = Instant::now();
//! let mut game = GameSession::with_seed(12345, t0);
//! assert_eq!(game.mode(), GameMode::Menu);
//!
//! game.step([GameEvent::Confirm, GameEvent::MoveRight], t0);
//! assert_eq!(game.mode(), GameMode::Playing);
//!
//! // Gravity fires once more than 500ms have passed.
//! let y0 = game.active().map(|p| p.y);
//! game.step([], t0 + Duration::from_millis(501));
//! assert_eq!(game.active().map(|p| p.y), y0.map(|y| y + 1));
//! ```
//!
//! # Requests
//!
//! The session never plays sounds or writes files itself. It queues
//! [`CoreRequest`](types::CoreRequest)s that the driver drains after each
//! frame with [`GameSession::drain_requests`].

pub mod board;
pub mod catalog;
pub mod game_state;
pub mod gravity;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use termtris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{get_shape, Shape};
pub use game_state::GameSession;
pub use gravity::GravityClock;
pub use piece::ActivePiece;
pub use rng::{PieceSource, SequenceSource, SimpleRng, UniformSource};
pub use scoring::calculate_line_score;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
