use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{Mode, Snapshot};
use crate::util::unicode;

const PLACEHOLDER: &str = "Add a new task...";

/// The new-task input: prompt, typed text, and the category it will get
pub fn render_input_bar(frame: &mut Frame, snap: &Snapshot, area: Rect) {
    let theme = &snap.theme;
    let bg = theme.background;
    let width = area.width as usize;
    let focused = snap.mode == Mode::Input;

    let category = format!(
        " [{} {}] ",
        snap.input_category.icon(),
        snap.input_category.label()
    );
    let prompt = if focused { " > " } else { "   " };
    let budget = width
        .saturating_sub(unicode::display_width(prompt))
        .saturating_sub(unicode::display_width(&category))
        .saturating_sub(1); // cursor

    let mut spans = vec![Span::styled(
        prompt,
        Style::default()
            .fg(theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    if snap.input.is_empty() && !focused {
        spans.push(Span::styled(
            unicode::truncate_to_width(PLACEHOLDER, budget),
            Style::default().fg(theme.dim).bg(bg),
        ));
    } else {
        // Keep the tail visible while typing past the edge
        let shown = tail_to_width(&snap.input, budget);
        spans.push(Span::styled(
            shown,
            Style::default().fg(theme.text_bright).bg(bg),
        ));
        if focused {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(theme.highlight).bg(bg),
            ));
        }
    }

    let used: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    let category_width = unicode::display_width(&category);
    if used + category_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - category_width),
            Style::default().bg(bg),
        ));
    }
    spans.push(Span::styled(
        category,
        Style::default()
            .fg(theme.category_color(snap.input_category))
            .bg(bg),
    ));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

/// Longest suffix of `s` that fits in `max_cells`
fn tail_to_width(s: &str, max_cells: usize) -> String {
    let mut tail = s.to_string();
    while unicode::display_width(&tail) > max_cells {
        let mut chars = tail.chars();
        chars.next();
        tail = chars.as_str().to_string();
    }
    tail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::tui::render::test_helpers::*;

    fn draw(snap: &Snapshot) -> String {
        render_to_string(TERM_W, 1, |frame, area| render_input_bar(frame, snap, area))
    }

    #[test]
    fn placeholder_when_unfocused_and_empty() {
        let (app, _) = app_with_tasks(&[]);
        let output = draw(&app.snapshot());
        assert!(output.contains("Add a new task..."));
        assert!(output.contains("General]"));
    }

    #[test]
    fn focused_shows_text_cursor_and_category() {
        let (mut app, _) = app_with_tasks(&[]);
        app.mode = Mode::Input;
        app.input = "Finish report".into();
        app.input_category = Category::Work;
        let output = draw(&app.snapshot());
        assert!(output.starts_with(" > Finish report\u{258C}"));
        assert!(output.contains("Work]"));
        assert!(!output.contains("Add a new task"));
    }

    #[test]
    fn long_input_shows_its_end() {
        assert_eq!(tail_to_width("abcdef", 3), "def");
        assert_eq!(tail_to_width("ab", 3), "ab");
        assert_eq!(tail_to_width("日本語", 4), "本語");
    }
}
