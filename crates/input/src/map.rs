//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key to a game action, ignoring its kind.
///
/// Arrows, vi keys (h/j/k/l) and WASD all drive the piece; letters are
/// case-insensitive.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'h' | 'a' => Some(GameAction::MoveLeft),
            'l' | 'd' => Some(GameAction::MoveRight),
            'j' | 's' => Some(GameAction::SoftDrop),
            'k' | 'w' => Some(GameAction::Rotate),
            'r' => Some(GameAction::Restart),
            _ => None,
        },
        _ => None,
    }
}

/// Map a key event, honoring its kind.
///
/// Presses and auto-repeats both act (holding an arrow keeps moving the piece);
/// releases never do.
pub fn map_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => handle_key_event(key),
        KeyEventKind::Release => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
