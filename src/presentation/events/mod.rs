//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Actions bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Show a toast anchored to the top edge.
    ShowTop,
    /// Show a toast anchored to the bottom edge.
    ShowBottom,
    /// Surface a failed API response.
    ReportError,
    /// Dismiss the current toast.
    Hide,
    /// Quit.
    Quit,
}

/// Key hint displayed in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    /// Action label.
    pub label: &'static str,
    /// Key shown next to the label.
    pub key: &'static str,
}

/// Hints for every bound action.
pub const KEY_HINTS: &[KeyHint] = &[
    KeyHint { label: "TOP", key: "t" },
    KeyHint { label: "BOTTOM", key: "b" },
    KeyHint { label: "API ERROR", key: "e" },
    KeyHint { label: "HIDE", key: "h" },
    KeyHint { label: "QUIT", key: "q" },
];

/// Terminal key mapping.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Maps a key to its action.
    #[must_use]
    pub fn action_for(key: &KeyEvent) -> Option<KeyAction> {
        if Self::is_quit_event(key) {
            return Some(KeyAction::Quit);
        }

        if !key.modifiers.is_empty() && key.modifiers != KeyModifiers::SHIFT {
            return None;
        }

        match key.code {
            KeyCode::Char('t' | 'T') => Some(KeyAction::ShowTop),
            KeyCode::Char('b' | 'B') => Some(KeyAction::ShowBottom),
            KeyCode::Char('e' | 'E') => Some(KeyAction::ReportError),
            KeyCode::Char('h' | 'H') => Some(KeyAction::Hide),
            _ => None,
        }
    }
}
