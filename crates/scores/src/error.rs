/// Error types for leaderboard persistence
use thiserror::Error;

/// Result type alias for leaderboard operations
pub type Result<T> = std::result::Result<T, ScoreError>;

/// Errors that can occur while reading or writing the leaderboard file
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed leaderboard JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
