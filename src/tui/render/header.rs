use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::display::{FilterControl, Stats};
use crate::tui::app::Snapshot;
use crate::tui::theme::Theme;
use crate::util::unicode;

/// Title with global counts, then one row per filter dimension
pub fn render_header(frame: &mut Frame, snap: &Snapshot, area: Rect) {
    let width = area.width as usize;
    let lines = vec![
        title_line(&snap.theme, &snap.screen.stats, width),
        controls_line(&snap.theme, " Status:   ", &snap.screen.status_controls),
        controls_line(&snap.theme, " Category: ", &snap.screen.category_controls),
    ];
    let paragraph = Paragraph::new(lines).style(Style::default().bg(snap.theme.background));
    frame.render_widget(paragraph, area);
}

fn title_line(theme: &Theme, stats: &Stats, width: usize) -> Line<'static> {
    let bg = theme.background;
    let title = " \u{2714} tick";
    let counts = format!(
        "Total {}  Completed {}  Pending {} ",
        stats.total, stats.completed, stats.pending
    );

    let mut spans = vec![Span::styled(
        title,
        Style::default()
            .fg(theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let used = unicode::display_width(title) + unicode::display_width(&counts);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    } else {
        spans.push(Span::styled("  ", Style::default().bg(bg)));
    }
    spans.push(Span::styled(counts, Style::default().fg(theme.dim).bg(bg)));
    Line::from(spans)
}

fn controls_line(theme: &Theme, name: &'static str, controls: &[FilterControl]) -> Line<'static> {
    let bg = theme.background;
    let mut spans = vec![Span::styled(name, Style::default().fg(theme.dim).bg(bg))];
    for control in controls {
        let text = match control.icon {
            Some(icon) => format!(" {} {} ", icon, control.label),
            None => format!(" {} ", control.label),
        };
        let style = if control.active {
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).bg(bg)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }
    Line::from(spans)
}
