//! Input deterrents: guarded key combos, right-click suppression, the art
//! shield, and the screenshot clipboard counter.
//!
//! None of this is real protection and none of it is treated as such; a
//! determined user can always read the terminal buffer. The point is to make
//! casual copying of the page content and artwork inconvenient, and to keep
//! the inspect-style chords from reaching the shell. Classification is pure;
//! side effects stay in the caller.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::debug;

/// Chords swallowed everywhere: F12, Ctrl+Shift+I, Ctrl+U, Ctrl+Shift+J.
pub fn is_guarded_combo(code: KeyCode, mods: KeyModifiers) -> bool {
    match code {
        KeyCode::F(12) => true,
        KeyCode::Char('i') | KeyCode::Char('I') | KeyCode::Char('j') | KeyCode::Char('J') => {
            mods.contains(KeyModifiers::CONTROL | KeyModifiers::SHIFT)
        }
        KeyCode::Char('u') | KeyCode::Char('U') => {
            mods.contains(KeyModifiers::CONTROL) && !mods.contains(KeyModifiers::SHIFT)
        }
        _ => false,
    }
}

/// The smaller chord set swallowed while the pointer rests on artwork:
/// F12, Ctrl+Shift+I, Ctrl+U.
pub fn is_art_guarded_combo(code: KeyCode, mods: KeyModifiers) -> bool {
    match code {
        KeyCode::F(12) => true,
        KeyCode::Char('i') | KeyCode::Char('I') => {
            mods.contains(KeyModifiers::CONTROL | KeyModifiers::SHIFT)
        }
        KeyCode::Char('u') | KeyCode::Char('U') => {
            mods.contains(KeyModifiers::CONTROL) && !mods.contains(KeyModifiers::SHIFT)
        }
        _ => false,
    }
}

/// Whether this key event should be consumed before normal dispatch.
/// Release events pass through; the guard acts on press and repeat.
pub fn should_swallow_key(event: &KeyEvent) -> bool {
    event.kind != KeyEventKind::Release && is_guarded_combo(event.code, event.modifiers)
}

/// PrintScreen release, the closest observable edge of a screenshot.
/// Requires a terminal that reports key release events.
pub fn is_screenshot_release(event: &KeyEvent) -> bool {
    event.code == KeyCode::PrintScreen && event.kind == KeyEventKind::Release
}

/// Any right-button activity: the context-menu gesture in a terminal.
pub fn is_right_button(event: &MouseEvent) -> bool {
    matches!(
        event.kind,
        MouseEventKind::Down(MouseButton::Right)
            | MouseEventKind::Up(MouseButton::Right)
            | MouseEventKind::Drag(MouseButton::Right)
    )
}

/// Overwrite the system clipboard with an empty string. Best effort: a
/// missing display server or denied clipboard access only logs.
pub fn clear_clipboard() {
    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(String::new())) {
        Ok(()) => debug!(component = "guard", operation = "clear_clipboard", "clipboard cleared"),
        Err(err) => debug!(
            component = "guard",
            operation = "clear_clipboard",
            error = %err,
            "clipboard unavailable"
        ),
    }
}

/// Screen regions occupied by artwork this frame. Rebuilt on every draw;
/// used to suppress drag-selection that starts on art and to apply the
/// art-specific key guard.
#[derive(Debug, Default)]
pub struct ArtShield {
    regions: Vec<Rect>,
}

impl ArtShield {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.regions.clear();
    }

    pub fn add(&mut self, region: Rect) {
        self.regions.push(region);
    }

    pub fn covers(&self, column: u16, row: u16) -> bool {
        let p = Position::new(column, row);
        self.regions.iter().any(|r| r.contains(p))
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
