use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::dialogs::Dialog;
use crate::tui::theme::Theme;
use crate::util::unicode;

/// Render a modal dialog centered in `area`
pub fn render_dialog(frame: &mut Frame, theme: &Theme, dialog: &Dialog, area: Rect) {
    let popup_w: u16 = 56.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = theme.background;
    let text_style = Style::default().fg(theme.text_bright).bg(bg);
    let hint_style = Style::default().fg(theme.dim).bg(bg);

    let (title, message, hint) = match dialog {
        Dialog::Confirm { message } => (" Confirm ", message, "y/Enter yes   n/Esc no"),
        Dialog::Prompt { message, .. } => (" Edit ", message, "Enter save   Esc cancel"),
        Dialog::Alert { message } => (" Notice ", message, "press any key"),
    };

    let mut styled_lines: Vec<(String, Style)> = Vec::new();
    for s in wrap_text(" ", message, inner_w) {
        styled_lines.push((s, text_style));
    }
    if let Dialog::Prompt { input, .. } = dialog {
        styled_lines.push((String::new(), text_style));
        // Show the end of long input, cursor included
        let field_w = inner_w.saturating_sub(3);
        let mut shown = input.clone();
        while unicode::display_width(&shown) > field_w {
            let mut chars = shown.chars();
            chars.next();
            shown = chars.as_str().to_string();
        }
        styled_lines.push((
            format!(" > {}\u{258C}", shown),
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
    }
    styled_lines.push((String::new(), text_style));
    styled_lines.push((format!(" {}", hint), hint_style));

    // Dynamic height from content + 2 for borders
    let popup_h = ((styled_lines.len() as u16) + 2).min(area.height.saturating_sub(2));

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let lines: Vec<Line> = styled_lines
        .into_iter()
        .map(|(text, style)| Line::from(Span::styled(text, style)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

/// Word-wrap `text` into lines of at most `max_width` cells.
/// Every line (including the first) is prefixed with `indent`.
fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_len = unicode::display_width(indent);
    let mut lines = Vec::new();
    let mut current = indent.to_string();
    let mut current_w = indent_len;

    for word in text.split_whitespace() {
        let word_w = unicode::display_width(word);
        let space = if current_w == indent_len { 0 } else { 1 };
        if current_w + space + word_w > max_width && current_w > indent_len {
            lines.push(current);
            current = indent.to_string();
            current_w = indent_len;
        }
        if current_w > indent_len {
            current.push(' ');
            current_w += 1;
        }
        current.push_str(word);
        current_w += word_w;
    }
    if current_w > indent_len || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
