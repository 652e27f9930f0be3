mod entry;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::controller::Prompter;

use super::app::{App, Mode};

use entry::handle_entry;
use navigate::handle_navigate;

/// Handle a key event in the current mode. Dialogs opened by the
/// resulting action go through `ui`.
pub fn handle_key(app: &mut App, key: KeyEvent, ui: &mut dyn Prompter) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key, ui),
        Mode::Input => handle_entry(app, key, ui),
    }
}

/// Shift+letter arrives as either 'C' or 'c'+SHIFT depending on the
/// terminal; fold both into the uppercase char.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}
