//! Terminal Tetris runner (default binary).
//!
//! One loop iteration per frame: draw the current snapshot, wait for input
//! until the next frame or gravity deadline, feed the events and the time into
//! the session, then hand its requests to the sound sink and the leaderboard.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{info, warn};

use termtris::config::AppConfig;
use termtris::core::{GameSession, GameSnapshot};
use termtris::input::EventReader;
use termtris::logging;
use termtris::scores::Leaderboard;
use termtris::sound::SoundSink;
use termtris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use termtris::types::{CoreRequest, GameMode, FRAME_MS};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if let Some(path) = &config.log_path {
        logging::init(path, &config.log_filter)?;
    }
    info!(seed = config.seed, player = %config.player, "starting");

    let mut leaderboard = Leaderboard::load(&config.leaderboard_path);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut leaderboard);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, leaderboard: &mut Leaderboard) -> Result<()> {
    let mut session = GameSession::with_seed(config.seed, Instant::now());
    let view = GameView::default();
    let sound = SoundSink::new(config.bell);
    let mut reader = EventReader::new();

    let frame = Duration::from_millis(FRAME_MS);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into_with_scores(&snap, leaderboard.entries(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame or gravity step.
        let timeout = match session.mode() {
            GameMode::Playing => frame.min(session.gravity().remaining(Instant::now())),
            _ => frame,
        };
        let input = reader.read_frame(timeout)?;
        if input.force_quit {
            info!("interrupted");
            return Ok(());
        }
        if input.resized {
            term.invalidate();
        }

        let running = session.step(input.events, Instant::now());

        for request in session.drain_requests() {
            match request {
                CoreRequest::PlaySound(cue) => {
                    if sound.play(cue) {
                        term.bell()?;
                    }
                }
                CoreRequest::RecordScore(score) => {
                    if let Err(err) = leaderboard.record(config.player.as_str(), score) {
                        warn!(error = %err, path = %leaderboard.path().display(), "failed to save score");
                    }
                }
            }
        }

        if !running {
            return Ok(());
        }
    }
}
