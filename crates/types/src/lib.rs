//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping, persistence).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_INTERVAL_MS` | 500 | Automatic one-row descent cadence |
//! | `FRAME_MS` | 16 | Driver frame interval (~60 FPS) |
//!
//! There is exactly one gravity interval: speed never changes during a game.
//!
//! # Examples
//!
//! ```
//! use termtris_types::{GameEvent, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//!
//! // Parse an input event
//! assert_eq!(GameEvent::from_str("hardDrop"), Some(GameEvent::HardDrop));
//! assert_eq!(GameEvent::from_str("teleport"), None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval in milliseconds (one automatic row every 0.5s)
pub const GRAVITY_INTERVAL_MS: u64 = 500;

/// Driver frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Base points for a line clear; a lock clearing `n` rows scores `LINE_CLEAR_BASE * n²`.
pub const LINE_CLEAR_BASE: u32 = 100;

/// Number of entries kept on the leaderboard
pub const LEADERBOARD_CAPACITY: usize = 10;

/// The seven tetromino shapes
///
/// - **I**: horizontal bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
/// - **J**: J-shaped (mirror of L)
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    /// Every kind, in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use termtris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
        }
    }
}

/// Top-level game mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Title screen, waiting for confirm or quit
    #[default]
    Menu,
    /// A piece is falling
    Playing,
    /// The last spawn collided; waiting for restart
    GameOver,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Menu => "menu",
            GameMode::Playing => "playing",
            GameMode::GameOver => "gameOver",
        }
    }
}

/// Discrete input events delivered to the core in frame order.
///
/// Each event is only meaningful in some modes; events that do not apply to
/// the current mode are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// Leave the menu and start playing
    Confirm,
    /// Leave the application (menu only)
    Quit,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise (no wall kicks)
    RotateCw,
    /// Move piece one cell down
    SoftDrop,
    /// Move piece down until it rests; it locks on the next gravity tick
    HardDrop,
    /// Start a new game after game over
    Restart,
}

impl GameEvent {
    /// Parse event from string (case-insensitive)
    ///
    /// Unrecognized identifiers yield `None` and are dropped by callers.
    ///
    /// # Examples
    ///
    /// ```
    /// use termtris_types::GameEvent;
    ///
    /// assert_eq!(GameEvent::from_str("moveLeft"), Some(GameEvent::MoveLeft));
    /// assert_eq!(GameEvent::from_str("ROTATECW"), Some(GameEvent::RotateCw));
    /// assert_eq!(GameEvent::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "confirm" => Some(GameEvent::Confirm),
            "quit" => Some(GameEvent::Quit),
            "moveleft" => Some(GameEvent::MoveLeft),
            "moveright" => Some(GameEvent::MoveRight),
            "rotatecw" => Some(GameEvent::RotateCw),
            "softdrop" => Some(GameEvent::SoftDrop),
            "harddrop" => Some(GameEvent::HardDrop),
            "restart" => Some(GameEvent::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Confirm => "confirm",
            GameEvent::Quit => "quit",
            GameEvent::MoveLeft => "moveLeft",
            GameEvent::MoveRight => "moveRight",
            GameEvent::RotateCw => "rotateCw",
            GameEvent::SoftDrop => "softDrop",
            GameEvent::HardDrop => "hardDrop",
            GameEvent::Restart => "restart",
        }
    }
}

/// Sound the core asks the audio collaborator to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Rotate,
    Lock,
    LineClear,
    GameOver,
}

impl SoundCue {
    /// Asset name of the cue.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Rotate => "rotate",
            SoundCue::Lock => "drop",
            SoundCue::LineClear => "clear",
            SoundCue::GameOver => "gameover",
        }
    }
}

/// Outbound request emitted by the core. The core never performs these itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreRequest {
    /// Ask the audio collaborator to play a cue
    PlaySound(SoundCue),
    /// Ask the persistence collaborator to record a final score
    RecordScore(u32),
}
