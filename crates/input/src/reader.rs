//! Per-frame terminal event collection.
//!
//! The driver calls [`EventReader::read_frame`] once per frame. It waits up to
//! the given timeout for the first terminal event, then drains whatever else
//! is already queued without blocking, so a frame sees every key pressed since
//! the previous one, in arrival order.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::map::{handle_key_event, should_force_quit};
use crate::types::GameEvent;

/// Most game events kept per frame; extra keys in the same frame are dropped.
pub const MAX_EVENTS_PER_FRAME: usize = 32;

/// Everything the terminal reported during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub events: ArrayVec<GameEvent, MAX_EVENTS_PER_FRAME>,
    /// Ctrl-C was pressed
    pub force_quit: bool,
    /// The terminal was resized; the next draw must repaint everything
    pub resized: bool,
}

impl FrameInput {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && !self.force_quit && !self.resized
    }

    /// Fold one terminal event into this frame
    pub fn push_terminal_event(&mut self, ev: Event) {
        match ev {
            Event::Key(key) => {
                if should_force_quit(key) {
                    self.force_quit = true;
                } else if let Some(game_event) = handle_key_event(key) {
                    // try_push: a full frame silently drops the overflow.
                    let _ = self.events.try_push(game_event);
                }
            }
            Event::Resize(_, _) => self.resized = true,
            _ => {}
        }
    }
}

/// Reads crossterm events for the driver loop
#[derive(Debug, Default)]
pub struct EventReader {
    _private: (),
}

impl EventReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait up to `timeout` for input, then drain everything already queued
    pub fn read_frame(&mut self, timeout: Duration) -> io::Result<FrameInput> {
        let mut frame = FrameInput::default();
        if !event::poll(timeout)? {
            return Ok(frame);
        }
        loop {
            frame.push_terminal_event(event::read()?);
            if frame.force_quit || !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn test_frame_keeps_arrival_order() {
        let mut frame = FrameInput::default();
        frame.push_terminal_event(key(KeyCode::Left));
        frame.push_terminal_event(key(KeyCode::Up));
        frame.push_terminal_event(key(KeyCode::Char(' ')));
        assert_eq!(
            frame.events.as_slice(),
            &[GameEvent::MoveLeft, GameEvent::RotateCw, GameEvent::HardDrop]
        );
        assert!(!frame.force_quit);
    }

    #[test]
    fn test_frame_skips_unmapped_and_release() {
        let mut frame = FrameInput::default();
        frame.push_terminal_event(key(KeyCode::Char('x')));
        frame.push_terminal_event(Event::Key(KeyEvent::new_with_kind(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        )));
        frame.push_terminal_event(Event::FocusLost);
        assert!(frame.is_empty());
    }

    #[test]
    fn test_frame_flags() {
        let mut frame = FrameInput::default();
        frame.push_terminal_event(Event::Resize(100, 40));
        assert!(frame.resized);
        frame.push_terminal_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(frame.force_quit);
        assert!(frame.events.is_empty());
    }

    #[test]
    fn test_frame_overflow_is_dropped() {
        let mut frame = FrameInput::default();
        for _ in 0..(MAX_EVENTS_PER_FRAME + 5) {
            frame.push_terminal_event(key(KeyCode::Right));
        }
        assert_eq!(frame.events.len(), MAX_EVENTS_PER_FRAME);
    }
}
