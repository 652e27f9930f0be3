use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::display::{ListDisplay, TaskRow};
use crate::tui::app::{Mode, Snapshot};
use crate::tui::theme::Theme;
use crate::util::unicode;

/// Cells reserved for the category label so task text lines up
const CATEGORY_LABEL_WIDTH: usize = 7;

/// Render the filtered tasks, or the empty-state message
pub fn render_task_list(frame: &mut Frame, snap: &Snapshot, area: Rect) {
    let theme = &snap.theme;
    let rows = match &snap.screen.list {
        ListDisplay::Empty { message, .. } => {
            let empty = Paragraph::new(format!(" {}", message))
                .style(Style::default().fg(theme.dim).bg(theme.background));
            frame.render_widget(empty, area);
            return;
        }
        ListDisplay::Rows { rows } => rows,
    };

    let height = area.height as usize;
    let width = area.width as usize;
    let show_cursor = snap.mode == Mode::Navigate;
    let scroll = scroll_offset(snap.cursor, height);

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(scroll)
        .take(height)
        .map(|(i, row)| row_line(theme, row, show_cursor && i == snap.cursor, width))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, area);
}

/// First visible row so that `cursor` stays on screen
fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    (cursor + 1).saturating_sub(height)
}

fn row_line<'a>(theme: &Theme, row: &'a TaskRow, is_cursor: bool, width: usize) -> Line<'a> {
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };

    let check_style = if row.completed {
        Style::default().fg(theme.green).bg(bg)
    } else {
        Style::default().fg(theme.dim).bg(bg)
    };
    let mut text_style = if row.completed {
        Style::default()
            .fg(theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.text_bright).bg(bg)
    };
    if is_cursor {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let marker = if is_cursor { "\u{258E}" } else { " " };
    let prefix = format!("{} ", row.checkbox);
    let icon = format!(
        "{} {} ",
        row.category_icon,
        unicode::pad_to_width(row.category_label, CATEGORY_LABEL_WIDTH)
    );
    let date = format!("  {} ", row.created_at);

    let fixed = unicode::display_width(marker)
        + unicode::display_width(&prefix)
        + unicode::display_width(&icon);
    let date_width = unicode::display_width(&date);
    // Drop the date before squeezing the text
    let show_date = fixed + 12 + date_width <= width;
    let text_budget = width
        .saturating_sub(fixed)
        .saturating_sub(if show_date { date_width } else { 0 });
    let text = unicode::truncate_to_width(&row.text, text_budget);
    let text_width = unicode::display_width(&text);

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(theme.highlight).bg(bg)),
        Span::styled(prefix, check_style),
        Span::styled(
            icon,
            Style::default()
                .fg(theme.category_color(row.category))
                .bg(bg),
        ),
        Span::styled(text, text_style),
    ];

    if show_date {
        let used = fixed + text_width + date_width;
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        }
        spans.push(Span::styled(date, Style::default().fg(theme.dim).bg(bg)));
    } else if is_cursor && fixed + text_width < width {
        spans.push(Span::styled(
            " ".repeat(width - fixed - text_width),
            Style::default().bg(bg),
        ));
    }

    Line::from(spans)
}
