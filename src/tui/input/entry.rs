use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::controller::Prompter;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Keys while the new-task input has focus
pub(super) fn handle_entry(app: &mut App, key: KeyEvent, ui: &mut dyn Prompter) {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => {
            let category = app.input_category;
            if app
                .controller
                .submit_new_task(&app.input, category, ui)
                .is_some()
            {
                // New tasks land on top; keep typing the next one
                app.input.clear();
                app.cursor = 0;
            }
        }
        KeyCode::Tab => app.input_category = app.input_category.next(),
        KeyCode::Backspace => {
            unicode::pop_grapheme(&mut app.input);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.push(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::super::handle_key;
    use super::super::test_keys::*;
    use super::*;
    use crate::model::Category;
    use crate::ops::controller::EMPTY_TASK_MESSAGE;
    use crate::tui::render::test_helpers::*;

    #[derive(Default)]
    struct Alerts(Vec<String>);

    impl Prompter for Alerts {
        fn confirm(&mut self, _: &str) -> bool {
            false
        }

        fn prompt(&mut self, _: &str, _: &str) -> Option<String> {
            None
        }

        fn alert(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, ch(c), &mut AcceptAll);
        }
    }

    fn input_app() -> App {
        let (mut app, _) = app_with_tasks(&[("Buy milk", Category::General)]);
        app.mode = Mode::Input;
        app
    }

    #[test]
    fn typing_does_not_trigger_navigate_keys() {
        let mut app = input_app();
        type_text(&mut app, "quit daily standup");
        assert_eq!(app.input, "quit daily standup");
        assert!(!app.should_quit);
        assert_eq!(app.controller.store().len(), 1);
    }

    #[test]
    fn enter_submits_and_clears_but_keeps_focus() {
        let mut app = input_app();
        type_text(&mut app, "Finish report");
        handle_key(&mut app, key(KeyCode::Tab), &mut AcceptAll);
        handle_key(&mut app, key(KeyCode::Enter), &mut AcceptAll);

        assert_eq!(app.input, "");
        assert_eq!(app.mode, Mode::Input);
        let top = &app.controller.store().tasks()[0];
        assert_eq!(top.text, "Finish report");
        assert_eq!(top.category, Category::Work);
    }

    #[test]
    fn blank_submit_alerts_and_keeps_text() {
        let mut app = input_app();
        type_text(&mut app, "   ");
        let mut ui = Alerts::default();
        handle_key(&mut app, key(KeyCode::Enter), &mut ui);
        assert_eq!(ui.0, vec![EMPTY_TASK_MESSAGE]);
        assert_eq!(app.input, "   ");
        assert_eq!(app.controller.store().len(), 1);
    }

    #[test]
    fn backspace_and_escape() {
        let mut app = input_app();
        type_text(&mut app, "abc");
        handle_key(&mut app, key(KeyCode::Backspace), &mut AcceptAll);
        assert_eq!(app.input, "ab");
        handle_key(&mut app, key(KeyCode::Esc), &mut AcceptAll);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.input, "ab");
    }

    #[test]
    fn tab_cycles_categories() {
        let mut app = input_app();
        for expected in [Category::Work, Category::School, Category::General] {
            handle_key(&mut app, key(KeyCode::Tab), &mut AcceptAll);
            assert_eq!(app.input_category, expected);
        }
    }
}
