//! Pure projection of the task list into what a front end shows.
//!
//! Nothing here knows about terminals or JSON; the TUI and the CLI both
//! consume these structs.

use serde::Serialize;

use crate::model::filter::{CategoryFilter, FilterState, StatusFilter};
use crate::model::task::{Category, Task, TaskId};
use crate::ops::view_filter::derive_view_for;

/// What to show when the filtered view has no tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    NoTasks,
    NoCompleted,
    AllCompleted,
}

impl EmptyState {
    /// Chosen by the status filter alone
    pub fn for_status(status: StatusFilter) -> Self {
        match status {
            StatusFilter::All => EmptyState::NoTasks,
            StatusFilter::Completed => EmptyState::NoCompleted,
            StatusFilter::Pending => EmptyState::AllCompleted,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            EmptyState::NoTasks => "No tasks yet. Add one to get started!",
            EmptyState::NoCompleted => "No completed tasks yet.",
            EmptyState::AllCompleted => "All tasks completed! \u{1F389}",
        }
    }
}

/// One displayed task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub completed: bool,
    /// `[x]` or `[ ]`
    pub checkbox: &'static str,
    pub category: Category,
    pub category_icon: &'static str,
    pub category_label: &'static str,
    /// Task text, safe to print verbatim
    pub text: String,
    pub created_at: String,
}

impl TaskRow {
    pub fn from_task(task: &Task) -> Self {
        TaskRow {
            id: task.id,
            completed: task.completed,
            checkbox: if task.completed { "[x]" } else { "[ ]" },
            category: task.category,
            category_icon: task.category.icon(),
            category_label: task.category.label(),
            text: escape_text(&task.text),
            created_at: escape_text(&task.created_at),
        }
    }
}

/// The task list area: either rows or a single empty-state message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListDisplay {
    Empty {
        state: EmptyState,
        message: &'static str,
    },
    Rows {
        rows: Vec<TaskRow>,
    },
}

impl ListDisplay {
    pub fn rows(&self) -> &[TaskRow] {
        match self {
            ListDisplay::Rows { rows } => rows,
            ListDisplay::Empty { .. } => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// Counts over the whole store, regardless of filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// A selectable filter button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterControl {
    pub value: String,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    pub active: bool,
}

/// Everything a front end needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub list: ListDisplay,
    pub stats: Stats,
    pub status_controls: Vec<FilterControl>,
    pub category_controls: Vec<FilterControl>,
}

/// Project a filtered view into rows, or the empty state for `status`
pub fn render(view: &[&Task], status: StatusFilter) -> ListDisplay {
    if view.is_empty() {
        let state = EmptyState::for_status(status);
        return ListDisplay::Empty {
            state,
            message: state.message(),
        };
    }
    ListDisplay::Rows {
        rows: view.iter().map(|t| TaskRow::from_task(t)).collect(),
    }
}

pub fn render_stats(tasks: &[Task]) -> Stats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    Stats {
        total,
        completed,
        pending: total - completed,
    }
}

/// One control per status value; only the current one is active
pub fn status_controls(current: StatusFilter) -> Vec<FilterControl> {
    StatusFilter::ALL
        .iter()
        .map(|&value| FilterControl {
            value: value.to_string(),
            label: value.label(),
            icon: None,
            active: value == current,
        })
        .collect()
}

/// One control per category value; only the current one is active
pub fn category_controls(current: CategoryFilter) -> Vec<FilterControl> {
    CategoryFilter::ALL
        .iter()
        .map(|&value| FilterControl {
            value: value.to_string(),
            label: value.label(),
            icon: match value {
                CategoryFilter::All => None,
                CategoryFilter::Only(category) => Some(category.icon()),
            },
            active: value == current,
        })
        .collect()
}

/// Filter, render, and count in one go
pub fn render_screen(tasks: &[Task], filter: FilterState) -> Screen {
    let view = derive_view_for(tasks, filter);
    Screen {
        list: render(&view, filter.status),
        stats: render_stats(tasks),
        status_controls: status_controls(filter.status),
        category_controls: category_controls(filter.category),
    }
}

/// Make user text inert for a terminal: control characters and bidi
/// overrides are replaced by their escaped spelling.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() || is_bidi_control(c) {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

fn is_bidi_control(c: char) -> bool {
    matches!(c, '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}')
}
