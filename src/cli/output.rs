use serde::Serialize;

use crate::model::config::ThemeMode;
use crate::model::task::TaskId;
use crate::ops::display::{FilterControl, ListDisplay, Screen, Stats, TaskRow};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ToggleJson {
    pub id: TaskId,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct ChangedJson {
    pub id: TaskId,
    pub changed: bool,
}

#[derive(Serialize)]
pub struct ClearedJson {
    pub removed: usize,
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub theme: ThemeMode,
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// One task as a single line: checkbox, id, category, text, timestamp
pub fn format_row(row: &TaskRow) -> String {
    format!(
        "{} {}  {} {:<7}  {}  ({})",
        row.checkbox, row.id, row.category_icon, row.category_label, row.text, row.created_at
    )
}

/// Rows, or the empty-state message when there are none
pub fn format_list(list: &ListDisplay) -> Vec<String> {
    match list {
        ListDisplay::Empty { message, .. } => vec![message.to_string()],
        ListDisplay::Rows { rows } => rows.iter().map(format_row).collect(),
    }
}

pub fn format_stats(stats: &Stats) -> String {
    format!(
        "Total: {}  Completed: {}  Pending: {}",
        stats.total, stats.completed, stats.pending
    )
}

/// `status: [All] Completed Pending`, the active control in brackets
pub fn format_controls(name: &str, controls: &[FilterControl]) -> String {
    let items: Vec<String> = controls
        .iter()
        .map(|c| {
            let text = match c.icon {
                Some(icon) => format!("{} {}", icon, c.label),
                None => c.label.to_string(),
            };
            if c.active {
                format!("[{}]", text)
            } else {
                text
            }
        })
        .collect();
    format!("{}: {}", name, items.join(" "))
}

/// Full listing: filter bars, the list, then the global counts
pub fn format_screen(screen: &Screen) -> Vec<String> {
    let mut lines = vec![
        format_controls("status", &screen.status_controls),
        format_controls("category", &screen.category_controls),
        String::new(),
    ];
    lines.extend(format_list(&screen.list));
    lines.push(String::new());
    lines.push(format_stats(&screen.stats));
    lines
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;
    use crate::model::filter::{CategoryFilter, FilterState, StatusFilter};
    use crate::model::task::{Category, Task};
    use crate::ops::display::render_screen;

    fn sample() -> Vec<Task> {
        let mut milk = Task::new(
            TaskId(1),
            "Buy milk".into(),
            Category::General,
            "10/18/2026, 9:00:00 AM".into(),
        );
        milk.completed = true;
        let report = Task::new(
            TaskId(2),
            "Finish report".into(),
            Category::Work,
            "10/18/2026, 9:05:00 AM".into(),
        );
        vec![report, milk]
    }

    #[test]
    fn screen_all() {
        let screen = render_screen(&sample(), FilterState::default());
        assert_snapshot!(format_screen(&screen).join("\n"), @r"
        status: [All] Completed Pending
        category: [All] 📋 General 💼 Work 🎓 School

        [ ] 2  💼 Work     Finish report  (10/18/2026, 9:05:00 AM)
        [x] 1  📋 General  Buy milk  (10/18/2026, 9:00:00 AM)

        Total: 2  Completed: 1  Pending: 1
        ");
    }

    #[test]
    fn screen_empty_state() {
        let filter = FilterState {
            status: StatusFilter::Completed,
            category: CategoryFilter::Only(Category::School),
        };
        let screen = render_screen(&sample(), filter);
        assert_snapshot!(format_screen(&screen).join("\n"), @r"
        status: All [Completed] Pending
        category: All 📋 General 💼 Work [🎓 School]

        No completed tasks yet.

        Total: 2  Completed: 1  Pending: 1
        ");
    }

    #[test]
    fn escaped_text_stays_on_one_line() {
        let tasks = vec![Task::new(
            TaskId(3),
            "two\nlines".into(),
            Category::School,
            "now".into(),
        )];
        let screen = render_screen(&tasks, FilterState::default());
        let lines = format_list(&screen.list);
        assert_eq!(lines, vec![r"[ ] 3  🎓 School   two\nlines  (now)"]);
    }

    #[test]
    fn stats_line() {
        let stats = Stats {
            total: 0,
            completed: 0,
            pending: 0,
        };
        assert_eq!(format_stats(&stats), "Total: 0  Completed: 0  Pending: 0");
    }
}
