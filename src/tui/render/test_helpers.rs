use chrono::{Local, TimeZone};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::storage::MemoryStore;
use crate::model::{Category, DEFAULT_DATE_FORMAT, ThemeMode, UiConfig};
use crate::ops::controller::{Controller, Prompter};
use crate::ops::store::TaskStore;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    buffer_to_string(terminal.backend())
}

/// Plain text of whatever is currently on a test terminal
pub fn buffer_to_string(backend: &TestBackend) -> String {
    let buf = backend.buffer();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Answers yes to everything and never supplies text
pub struct AcceptAll;

impl Prompter for AcceptAll {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }

    fn prompt(&mut self, _message: &str, _default: &str) -> Option<String> {
        None
    }

    fn alert(&mut self, _message: &str) {}
}

/// An app over an in-memory store. Tasks are created in the given order,
/// so the last one ends up at the top. Each gets a fixed timestamp one
/// minute after the previous.
pub fn app_with_tasks(tasks: &[(&str, Category)]) -> (App, MemoryStore) {
    let backend = MemoryStore::new();
    let mut store = TaskStore::open(Box::new(backend.clone()), DEFAULT_DATE_FORMAT);
    for (i, (text, category)) in tasks.iter().enumerate() {
        let when = Local
            .with_ymd_and_hms(2026, 10, 18, 9, i as u32, 0)
            .single()
            .unwrap();
        store.create_at(text, *category, when).unwrap();
    }
    let app = App::new(
        Controller::new(store),
        ThemeMode::Dark,
        UiConfig::default(),
    );
    (app, backend)
}
