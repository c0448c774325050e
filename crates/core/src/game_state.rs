//! Game state module - the session state machine
//!
//! This module ties together all core components: board, active piece, piece
//! source, gravity clock and scoring. A [`GameSession`] owns all mutable game
//! data; the driver feeds it input events and the current time once per frame
//! through [`GameSession::step`] and then reads a snapshot.
//!
//! | From | Event | To | Effect |
//! |------|-------|----|--------|
//! | Menu | Confirm | Playing | spawn first piece |
//! | Menu | Quit | - | session stops running |
//! | Playing | MoveLeft/MoveRight/SoftDrop | Playing | try to move one cell |
//! | Playing | RotateCw | Playing | try to rotate |
//! | Playing | HardDrop | Playing | move down until resting |
//! | Playing | gravity, move fails | Playing or GameOver | lock, clear, score, spawn |
//! | GameOver | Restart | Playing | fresh board, score 0, spawn |
//!
//! Events that do not apply to the current mode are ignored.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::gravity::GravityClock;
use crate::piece::ActivePiece;
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::calculate_line_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{CoreRequest, GameEvent, GameMode, SoundCue};

/// Complete game session
pub struct GameSession {
    board: Board,
    active: Option<ActivePiece>,
    mode: GameMode,
    score: u32,
    lines: u32,
    /// Number of games started (Confirm or Restart)
    games_played: u32,
    gravity: GravityClock,
    source: Box<dyn PieceSource>,
    /// Requests for the audio and persistence collaborators, in emission order
    requests: Vec<CoreRequest>,
    running: bool,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("mode", &self.mode)
            .field("active", &self.active)
            .field("score", &self.score)
            .field("lines", &self.lines)
            .field("games_played", &self.games_played)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Create a session in the menu, drawing pieces from `source`
    pub fn new(source: Box<dyn PieceSource>, now: Instant) -> Self {
        Self {
            board: Board::new(),
            active: None,
            mode: GameMode::Menu,
            score: 0,
            lines: 0,
            games_played: 0,
            gravity: GravityClock::new(now),
            source,
            requests: Vec::new(),
            running: true,
        }
    }

    /// Create a session with a seeded uniform piece source
    pub fn with_seed(seed: u32, now: Instant) -> Self {
        Self::new(Box::new(UniformSource::new(seed)), now)
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// False once a quit has been accepted
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups (tests, demos).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn gravity(&self) -> &GravityClock {
        &self.gravity
    }

    /// Run one frame: apply `events` in order, then evaluate gravity once.
    ///
    /// Returns whether the session is still running.
    pub fn step<I>(&mut self, events: I, now: Instant) -> bool
    where
        I: IntoIterator<Item = GameEvent>,
    {
        for event in events {
            if !self.running {
                break;
            }
            self.handle_event(event);
        }
        if self.running {
            self.tick(now);
        }
        self.running
    }

    /// Apply a single input event
    ///
    /// Returns true when the event changed something (a transition happened or
    /// a move/rotation was accepted). Events that do not apply to the current
    /// mode return false and change nothing.
    pub fn handle_event(&mut self, event: GameEvent) -> bool {
        match (self.mode, event) {
            (GameMode::Menu, GameEvent::Confirm) => {
                self.start_game();
                true
            }
            (GameMode::Menu, GameEvent::Quit) => {
                info!("quit requested from menu");
                self.running = false;
                true
            }
            (GameMode::Playing, GameEvent::MoveLeft) => self.try_move(-1, 0),
            (GameMode::Playing, GameEvent::MoveRight) => self.try_move(1, 0),
            (GameMode::Playing, GameEvent::SoftDrop) => self.try_move(0, 1),
            (GameMode::Playing, GameEvent::RotateCw) => self.try_rotate(),
            (GameMode::Playing, GameEvent::HardDrop) => self.hard_drop(),
            (GameMode::GameOver, GameEvent::Restart) => {
                self.board = Board::new();
                self.score = 0;
                self.lines = 0;
                self.start_game();
                true
            }
            (mode, event) => {
                debug!(mode = mode.as_str(), event = event.as_str(), "event ignored");
                false
            }
        }
    }

    /// Evaluate the gravity clock; on firing, move the piece down one row or lock it.
    ///
    /// Returns true if the clock fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.mode != GameMode::Playing {
            return false;
        }
        if !self.gravity.poll(now) {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Hand queued requests to the audio/persistence collaborators
    pub fn drain_requests(&mut self) -> std::vec::Drain<'_, CoreRequest> {
        self.requests.drain(..)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.mode = self.mode;
        out.score = self.score;
        out.lines = self.lines;
        out.games_played = self.games_played;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn start_game(&mut self) {
        self.games_played = self.games_played.wrapping_add(1);
        self.mode = GameMode::Playing;
        info!(game = self.games_played, "game started");
        self.spawn_piece();
    }

    /// Spawn the next piece; a blocked spawn ends the game
    fn spawn_piece(&mut self) -> bool {
        let kind = self.source.next_kind();
        match ActivePiece::spawn(kind, &self.board) {
            Some(piece) => {
                debug!(kind = kind.as_str(), x = piece.x, "spawned");
                self.active = Some(piece);
                true
            }
            None => {
                self.active = None;
                self.game_over();
                false
            }
        }
    }

    fn game_over(&mut self) {
        info!(score = self.score, lines = self.lines, "game over");
        self.mode = GameMode::GameOver;
        self.requests.push(CoreRequest::PlaySound(SoundCue::GameOver));
        self.requests.push(CoreRequest::RecordScore(self.score));
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        match self.active.as_mut() {
            Some(active) => active.try_move(&self.board, dx, dy),
            None => false,
        }
    }

    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let rotated = active.try_rotate(&self.board);
        if rotated {
            self.requests.push(CoreRequest::PlaySound(SoundCue::Rotate));
        }
        rotated
    }

    fn hard_drop(&mut self) -> bool {
        match self.active.as_mut() {
            Some(active) => active.hard_drop(&self.board) > 0,
            None => false,
        }
    }

    /// Lock the active piece onto the board, clear rows, score, and spawn the next piece
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        if active.collides(&self.board) {
            warn!(kind = active.kind.as_str(), x = active.x, y = active.y, "locking over occupied cells");
        }
        self.board.lock(&active.shape, active.x, active.y);
        self.requests.push(CoreRequest::PlaySound(SoundCue::Lock));

        let lines_cleared = self.board.clear_full_rows();
        let gained = calculate_line_score(lines_cleared);
        if lines_cleared > 0 {
            self.score = self.score.saturating_add(gained);
            self.lines = self.lines.saturating_add(lines_cleared as u32);
            self.requests.push(CoreRequest::PlaySound(SoundCue::LineClear));
        }
        debug!(
            kind = active.kind.as_str(),
            x = active.x,
            y = active.y,
            lines_cleared,
            score = self.score,
            "piece locked"
        );

        self.spawn_piece();
    }
}
