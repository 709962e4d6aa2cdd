//! Key mapping from terminal events to session events.

use crate::types::{InputEvent, InputType, SessionEvent, WindowEvent};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key to the logical input it drives.
pub fn map_key(key: KeyEvent) -> Option<InputType> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(InputType::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(InputType::MoveRight),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(InputType::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(InputType::RotateCw),
        KeyCode::Char('z' | 'Z' | 'y' | 'Y') => Some(InputType::RotateCcw),

        // Actions
        KeyCode::Char(' ') => Some(InputType::HardDrop),
        KeyCode::Char('c' | 'C') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputType::Hold)
        }
        KeyCode::Char('p' | 'P') | KeyCode::Esc => Some(InputType::GamePause),

        _ => None,
    }
}

/// Map one terminal event to a session event.
///
/// Key repeats yield `None`: a held key produces one pressed edge and, on
/// terminals that report them, one release edge.
pub fn map_event(event: &Event) -> Option<SessionEvent> {
    match event {
        Event::Key(key) => {
            let kind = map_key(*key)?;
            let input = match key.kind {
                KeyEventKind::Press => InputEvent::pressed(kind),
                KeyEventKind::Release => InputEvent::released(kind),
                KeyEventKind::Repeat => return None,
            };
            Some(SessionEvent::Input(input))
        }
        Event::FocusLost => Some(SessionEvent::Window(WindowEvent::FocusLost)),
        Event::FocusGained => Some(SessionEvent::Window(WindowEvent::FocusGained)),
        Event::Resize(cols, rows) => Some(SessionEvent::Window(WindowEvent::Resized {
            cols: *cols,
            rows: *rows,
        })),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
