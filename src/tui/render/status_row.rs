use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{Mode, Snapshot};
use crate::util::unicode;

const NAVIGATE_HINTS: &str =
    "a add  space done  e edit  d del  C clear  s/c filter  t theme  q quit";
const INPUT_HINTS: &str = "Enter add  Tab category  Esc back";

/// Render the status row (bottom of screen): the last action's message on
/// the left, key hints on the right
pub fn render_status_row(frame: &mut Frame, snap: &Snapshot, area: Rect) {
    let theme = &snap.theme;
    let bg = theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    if let Some(message) = &snap.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(theme.green).bg(bg),
        ));
    }

    if snap.show_key_hints {
        let hint = match snap.mode {
            Mode::Navigate => NAVIGATE_HINTS,
            Mode::Input => INPUT_HINTS,
        };
        let content_width: usize = spans
            .iter()
            .map(|s| unicode::display_width(&s.content))
            .sum();
        let hint_width = unicode::display_width(hint) + 1;
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(
                format!("{} ", hint),
                Style::default().fg(theme.dim).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn draw(snap: &Snapshot) -> String {
        render_to_string(TERM_W, 1, |frame, area| render_status_row(frame, snap, area))
    }

    #[test]
    fn hints_follow_mode() {
        let (mut app, _) = app_with_tasks(&[]);
        assert!(draw(&app.snapshot()).ends_with(NAVIGATE_HINTS));
        app.mode = Mode::Input;
        assert!(draw(&app.snapshot()).ends_with(INPUT_HINTS));
    }

    #[test]
    fn message_on_the_left() {
        let (mut app, _) = app_with_tasks(&[]);
        app.status_message = Some("Cleared 2 task(s)".into());
        let output = draw(&app.snapshot());
        assert!(output.starts_with(" Cleared 2 task(s)"));
    }

    #[test]
    fn hints_can_be_turned_off() {
        let (mut app, _) = app_with_tasks(&[]);
        app.ui.show_key_hints = false;
        assert_eq!(draw(&app.snapshot()), "");
    }
}
