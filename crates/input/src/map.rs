//! Key mapping from terminal events to game events.

use crate::types::GameEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game events.
///
/// Key releases are ignored. Auto-repeat is treated like a fresh press so a
/// held arrow key keeps moving the piece.
pub fn handle_key_event(key: KeyEvent) -> Option<GameEvent> {
    if key.kind == KeyEventKind::Release || should_force_quit(key) {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(GameEvent::Confirm),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameEvent::Quit),

        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameEvent::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameEvent::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameEvent::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameEvent::RotateCw),

        KeyCode::Char(' ') => Some(GameEvent::HardDrop),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameEvent::Restart),

        _ => None,
    }
}

/// Ctrl-C leaves the program from any screen.
///
/// Unlike [`GameEvent::Quit`], which the session only honours in the menu,
/// this is handled by the driver directly.
pub fn should_force_quit(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
