use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use crate::io::persist;
use crate::io::storage::FileStore;
use crate::model::{Category, Config, TaskId, ThemeMode, UiConfig};
use crate::ops::controller::Controller;
use crate::ops::display::Screen;
use crate::ops::store::TaskStore;

use super::dialogs::{CrosstermKeys, Dialogs};
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving over the list; single keys run actions
    Navigate,
    /// Typing into the new-task input
    Input,
}

/// Main application state
pub struct App {
    pub controller: Controller,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub ui: UiConfig,
    /// Index into the visible (filtered) list
    pub cursor: usize,
    /// Text typed into the new-task input
    pub input: String,
    /// Category the next submitted task gets
    pub input_category: Category,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
}

/// Owned copy of everything the renderer reads. Dialogs keep one as the
/// backdrop while the app itself is borrowed by the action that opened them.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub screen: Screen,
    pub mode: Mode,
    pub cursor: usize,
    pub input: String,
    pub input_category: Category,
    pub status_message: Option<String>,
    pub theme: Theme,
    pub show_key_hints: bool,
}

impl App {
    pub fn new(controller: Controller, theme_mode: ThemeMode, ui: UiConfig) -> Self {
        App {
            controller,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(theme_mode, &ui),
            input_category: ui.default_category,
            ui,
            cursor: 0,
            input: String::new(),
            status_message: None,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.controller.screen(),
            mode: self.mode,
            cursor: self.cursor,
            input: self.input.clone(),
            input_category: self.input_category,
            status_message: self.status_message.clone(),
            theme: self.theme.clone(),
            show_key_hints: self.ui.show_key_hints,
        }
    }

    /// Ids of the visible tasks, top to bottom
    pub fn visible_ids(&self) -> Vec<TaskId> {
        self.controller.visible().iter().map(|t| t.id).collect()
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.visible_ids().get(self.cursor).copied()
    }

    /// Keep the cursor on a row after the visible list shrinks
    pub fn clamp_cursor(&mut self) {
        let len = self.controller.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.controller.visible().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = (self.cursor as isize).saturating_add(delta);
        self.cursor = next.clamp(0, len as isize - 1) as usize;
    }

    /// Switch palettes and remember the choice under the `theme` key
    pub fn toggle_theme(&mut self) {
        let mode = self.theme.mode.toggled();
        self.theme = Theme::from_config(mode, &self.ui);
        if let Err(e) = persist::save_theme(self.controller.store_mut().backend_mut(), mode) {
            tracing::warn!(error = %e, "theme not saved");
        }
    }
}

/// Open the store in `data_dir` and run the TUI until the user quits
pub fn run(data_dir: &Path, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let backend = FileStore::new(data_dir);
    let theme_mode = persist::load_theme(&backend);
    let store = TaskStore::open(Box::new(backend), &config.ui.date_format);
    tracing::info!(
        data_dir = %data_dir.display(),
        tasks = store.len(),
        "starting tui"
    );
    let mut app = App::new(Controller::new(store), theme_mode, config.ui);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let snapshot = app.snapshot();
        terminal.draw(|frame| render::render(frame, &snapshot, None))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let mut dialogs = Dialogs::new(terminal, CrosstermKeys, snapshot);
            input::handle_key(app, key, &mut dialogs);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Where the TUI sends its log output while it owns the terminal
pub fn open_log_file(data_dir: &Path) -> io::Result<std::fs::File> {
    std::fs::create_dir_all(data_dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("tick.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn app_with(texts: &[&str]) -> (App, crate::io::storage::MemoryStore) {
        let tasks: Vec<(&str, Category)> = texts.iter().map(|t| (*t, Category::General)).collect();
        app_with_tasks(&tasks)
    }

    #[test]
    fn cursor_moves_within_bounds() {
        let (mut app, _) = app_with(&["a", "b", "c"]);
        app.move_cursor(-1);
        assert_eq!(app.cursor, 0);
        app.move_cursor(5);
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn clamp_after_list_shrinks() {
        let (mut app, _) = app_with(&["a", "b"]);
        app.cursor = 1;
        let id = app.selected_id().unwrap();
        app.controller.store_mut().delete(id);
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);

        let only = app.selected_id().unwrap();
        app.controller.store_mut().delete(only);
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
        assert_eq!(app.selected_id(), None);
    }

    #[test]
    fn theme_toggle_is_persisted() {
        let (mut app, backend) = app_with(&[]);
        app.toggle_theme();
        assert_eq!(app.theme.mode, ThemeMode::Light);
        assert_eq!(persist::load_theme(&backend), ThemeMode::Light);
    }

    #[test]
    fn new_task_category_starts_from_config() {
        let (app, _) = app_with(&[]);
        assert_eq!(app.input_category, Category::General);
        let mut ui = UiConfig::default();
        ui.default_category = Category::School;
        let app = App::new(app.controller, ThemeMode::Dark, ui);
        assert_eq!(app.input_category, Category::School);
    }

    #[test]
    fn snapshot_reflects_filters_and_input() {
        let (mut app, _) = app_with(&["a", "b"]);
        app.input = "draft".into();
        app.controller
            .set_status_filter(crate::model::StatusFilter::Completed);
        let snap = app.snapshot();
        assert!(snap.screen.list.is_empty());
        assert_eq!(snap.screen.stats.total, 2);
        assert_eq!(snap.input, "draft");
        assert!(snap.show_key_hints);
    }

    #[test]
    fn log_file_is_created_in_data_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        open_log_file(&nested).unwrap();
        assert!(nested.join("tick.log").exists());
    }
}
