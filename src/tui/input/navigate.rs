use crossterm::event::{KeyCode, KeyEvent};

use crate::model::StatusFilter;
use crate::ops::controller::Prompter;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent, ui: &mut dyn Prompter) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.move_cursor(isize::MAX),

        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_id() {
                app.controller.toggle(id);
                app.clamp_cursor();
            }
        }
        KeyCode::Char('e') => {
            if let Some(id) = app.selected_id() {
                app.controller.request_edit(id, ui);
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.selected_id()
                && app.controller.request_delete(id, ui)
            {
                app.clamp_cursor();
            }
        }
        KeyCode::Char('C') => {
            let removed = app.controller.request_clear_completed(ui);
            if removed > 0 {
                app.status_message = Some(format!("Cleared {} task(s)", removed));
                app.clamp_cursor();
            }
        }

        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Enter => app.mode = Mode::Input,

        KeyCode::Char('s') => {
            let next = app.controller.filter().status.next();
            set_status(app, next);
        }
        KeyCode::Char('1') => set_status(app, StatusFilter::All),
        KeyCode::Char('2') => set_status(app, StatusFilter::Completed),
        KeyCode::Char('3') => set_status(app, StatusFilter::Pending),
        KeyCode::Char('c') => {
            let next = app.controller.filter().category.next();
            app.controller.set_category_filter(next);
            app.clamp_cursor();
        }

        KeyCode::Char('t') => app.toggle_theme(),
        _ => {}
    }
}

fn set_status(app: &mut App, status: StatusFilter) {
    app.controller.set_status_filter(status);
    app.clamp_cursor();
}
