//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TETRIS_SEED` | clock-derived | Seed for the piece source |
//! | `TETRIS_PLAYER` | `player` | Name recorded on the leaderboard |
//! | `TETRIS_LEADERBOARD_PATH` | `<data dir>/termtris/leaderboard.json` | Leaderboard file |
//! | `TETRIS_LOG_PATH` | unset (no logging) | Log file |
//! | `TETRIS_LOG` | `info` | `tracing` filter directive |
//! | `TETRIS_BELL` | off | Ring the terminal bell for sound cues |
//!
//! Unparseable values fall back to the default.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_PLAYER: &str = "player";
pub const DEFAULT_LOG_FILTER: &str = "info";
const LEADERBOARD_FILE: &str = "leaderboard.json";
const APP_DIR: &str = "termtris";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub player: String,
    pub leaderboard_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
    pub bell: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("TETRIS_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);
        let player = var("TETRIS_PLAYER").unwrap_or_else(|| DEFAULT_PLAYER.to_string());
        let leaderboard_path = var("TETRIS_LEADERBOARD_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_leaderboard_path);
        let log_path = var("TETRIS_LOG_PATH").map(PathBuf::from);
        let log_filter = var("TETRIS_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let bell = var("TETRIS_BELL").is_some_and(|s| parse_flag(&s));

        Self {
            seed,
            player,
            leaderboard_path,
            log_path,
            log_filter,
            bell,
        }
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn default_leaderboard_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR).join(LEADERBOARD_FILE),
        None => PathBuf::from(LEADERBOARD_FILE),
    }
}
