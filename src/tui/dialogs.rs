//! Modal dialogs drawn over the task list. Each call blocks in its own
//! small key loop until the user answers, so actions read top to bottom.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::ops::controller::Prompter;
use crate::util::unicode;

use super::app::Snapshot;
use super::render;

/// A dialog currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Confirm { message: String },
    Prompt { message: String, input: String },
    Alert { message: String },
}

/// Where dialog keystrokes come from
pub trait KeySource {
    /// Next key press. None once no more input can arrive.
    fn next_key(&mut self) -> Option<KeyEvent>;
}

/// Blocking reads from the real terminal
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> Option<KeyEvent> {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return Some(key),
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal input failed");
                    return None;
                }
            }
        }
    }
}

/// Replays a fixed list of keys
#[cfg(test)]
pub struct ScriptedKeys(pub std::collections::VecDeque<KeyEvent>);

#[cfg(test)]
impl ScriptedKeys {
    pub fn new(codes: &[KeyCode]) -> Self {
        ScriptedKeys(
            codes
                .iter()
                .map(|&code| KeyEvent::new(code, KeyModifiers::NONE))
                .collect(),
        )
    }

    /// Each char of `text` typed, followed by `then`
    pub fn typing(text: &str, then: &[KeyCode]) -> Self {
        let mut codes: Vec<KeyCode> = text.chars().map(KeyCode::Char).collect();
        codes.extend_from_slice(then);
        ScriptedKeys::new(&codes)
    }
}

#[cfg(test)]
impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Option<KeyEvent> {
        self.0.pop_front()
    }
}

/// `Prompter` for the TUI: draws the dialog over `backdrop` and reads keys
/// until it is answered.
pub struct Dialogs<'a, B: Backend, K: KeySource> {
    terminal: &'a mut Terminal<B>,
    keys: K,
    backdrop: Snapshot,
}

impl<'a, B: Backend, K: KeySource> Dialogs<'a, B, K> {
    pub fn new(terminal: &'a mut Terminal<B>, keys: K, backdrop: Snapshot) -> Self {
        Dialogs {
            terminal,
            keys,
            backdrop,
        }
    }

    fn draw(&mut self, dialog: &Dialog) {
        let backdrop = &self.backdrop;
        if let Err(e) = self
            .terminal
            .draw(|frame| render::render(frame, backdrop, Some(dialog)))
        {
            tracing::warn!(error = %e, "failed to draw dialog");
        }
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

impl<B: Backend, K: KeySource> Prompter for Dialogs<'_, B, K> {
    fn confirm(&mut self, message: &str) -> bool {
        let dialog = Dialog::Confirm {
            message: message.to_string(),
        };
        loop {
            self.draw(&dialog);
            let Some(key) = self.keys.next_key() else {
                return false;
            };
            if is_ctrl_c(&key) {
                return false;
            }
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return false,
                _ => {}
            }
        }
    }

    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        let mut input = default.to_string();
        loop {
            let dialog = Dialog::Prompt {
                message: message.to_string(),
                input: input.clone(),
            };
            self.draw(&dialog);
            let key = self.keys.next_key()?;
            if is_ctrl_c(&key) {
                return None;
            }
            match key.code {
                KeyCode::Enter => return Some(input),
                KeyCode::Esc => return None,
                KeyCode::Backspace => {
                    unicode::pop_grapheme(&mut input);
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.push(c);
                }
                _ => {}
            }
        }
    }

    fn alert(&mut self, message: &str) {
        let dialog = Dialog::Alert {
            message: message.to_string(),
        };
        self.draw(&dialog);
        // Any key dismisses
        let _ = self.keys.next_key();
    }
}
