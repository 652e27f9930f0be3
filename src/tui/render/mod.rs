pub mod header;
pub mod input_bar;
pub mod popup;
pub mod status_row;
pub mod task_list;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use super::app::Snapshot;
use super::dialogs::Dialog;

/// Main render function: dispatches to sub-renderers, then draws `dialog`
/// on top when one is open
pub fn render(frame: &mut Frame, snap: &Snapshot, dialog: Option<&Dialog>) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(snap.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (3 rows) | input | separator | list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title + stats, status filters, category filters
            Constraint::Length(1), // new-task input
            Constraint::Length(1), // separator
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, snap, chunks[0]);
    input_bar::render_input_bar(frame, snap, chunks[1]);

    let separator = Span::styled(
        "\u{2500}".repeat(chunks[2].width as usize),
        Style::default().fg(snap.theme.dim).bg(snap.theme.background),
    );
    frame.render_widget(Paragraph::new(separator), chunks[2]);

    task_list::render_task_list(frame, snap, chunks[3]);
    status_row::render_status_row(frame, snap, chunks[4]);

    if let Some(dialog) = dialog {
        popup::render_dialog(frame, &snap.theme, dialog, area);
    }
}
