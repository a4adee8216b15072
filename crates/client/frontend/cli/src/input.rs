//! Keyboard-to-command mapping for the CLI client.
//!
//! Owns the key bindings so the rest of the application stays agnostic
//! about concrete keys or `crossterm` event details.
use crossterm::event::{KeyCode, KeyEvent};

/// High-level outcome of processing a keyboard event.
#[derive(Debug, Eq, PartialEq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Ask the runtime to fetch a snapshot now.
    Refresh,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into dashboard commands.
pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') => KeyAction::Refresh,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, KeyEventKind, KeyEventState};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_bindings() {
        let handler = InputHandler;
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn refresh_binding() {
        let handler = InputHandler;
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('r'))),
            KeyAction::Refresh
        );
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        let handler = InputHandler;
        assert_eq!(handler.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
    }
}
