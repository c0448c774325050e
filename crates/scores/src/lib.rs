//! Leaderboard persistence.
//!
//! Finished games report their score through
//! [`CoreRequest::RecordScore`](termtris_types::CoreRequest::RecordScore); the
//! driver forwards it to [`Leaderboard::record`], which keeps the ten best
//! scores in a JSON file.
//!
//! ```
//! use termtris_scores::Leaderboard;
//!
//! let mut board = Leaderboard::new("leaderboard.json");
//! assert_eq!(board.insert("ann", 400), Some(0));
//! assert_eq!(board.insert("bob", 900), Some(0));
//! assert_eq!(board.entries()[1].name, "ann");
//! ```

pub mod error;
pub mod leaderboard;

pub use termtris_types as types;

pub use error::{Result, ScoreError};
pub use leaderboard::{Leaderboard, ScoreEntry};
