use std::collections::HashSet;
use std::fmt::Write as _;

use chrono::{DateTime, Local};

use crate::io::persist::{load_tasks, save_tasks};
use crate::io::storage::KeyValueStore;
use crate::model::config::DEFAULT_DATE_FORMAT;
use crate::model::task::{Category, Task, TaskId};

/// Error type for store mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("task text cannot be empty")]
    EmptyText,
}

/// The ordered task list (newest first) and its persisted copy.
///
/// Every successful mutation writes the whole list back through the
/// key-value store before returning. Write failures are logged and the
/// session carries on in memory.
pub struct TaskStore {
    tasks: Vec<Task>,
    backend: Box<dyn KeyValueStore>,
    date_format: String,
    /// Largest id ever seen by this store, so new ids never go backwards
    last_id: u64,
}

impl TaskStore {
    /// Load the persisted list from `backend`. Records with blank text or a
    /// repeated id are dropped so the in-memory list starts out valid.
    pub fn open(backend: Box<dyn KeyValueStore>, date_format: &str) -> Self {
        let loaded = load_tasks(backend.as_ref());
        let loaded_count = loaded.len();

        let mut seen = HashSet::new();
        let tasks: Vec<Task> = loaded
            .into_iter()
            .filter(|t| !t.text.trim().is_empty() && seen.insert(t.id))
            .collect();
        if tasks.len() != loaded_count {
            tracing::warn!(
                dropped = loaded_count - tasks.len(),
                "ignored stored tasks with empty text or duplicate ids"
            );
        }

        let date_format = if is_valid_date_format(date_format) {
            date_format.to_string()
        } else {
            tracing::warn!(format = date_format, "invalid date format, using default");
            DEFAULT_DATE_FORMAT.to_string()
        };

        let last_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
        tracing::debug!(count = tasks.len(), "task store opened");

        TaskStore {
            tasks,
            backend,
            date_format,
            last_id,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn backend_mut(&mut self) -> &mut dyn KeyValueStore {
        self.backend.as_mut()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Create a task from `text` (trimmed) and put it at the front
    pub fn create(&mut self, text: &str, category: Category) -> Result<&Task, StoreError> {
        self.create_at(text, category, Local::now())
    }

    /// Same as `create` with an explicit creation time
    pub fn create_at(
        &mut self,
        text: &str,
        category: Category,
        now: DateTime<Local>,
    ) -> Result<&Task, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }

        let id = self.next_id(now.timestamp_millis());
        let created_at = format_timestamp(&now, &self.date_format);
        self.tasks.insert(
            0,
            Task::new(id, text.to_string(), category, created_at),
        );
        tracing::debug!(%id, %category, "task created");
        self.persist();
        Ok(&self.tasks[0])
    }

    /// Flip completion. Returns the new state, or None if no such task.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        let completed = task.completed;
        tracing::debug!(%id, completed, "task toggled");
        self.persist();
        Some(completed)
    }

    /// Replace a task's text. `Ok(false)` if no such task; an empty
    /// replacement is rejected and the original text kept.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> Result<bool, StoreError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        task.text = new_text.to_string();
        tracing::debug!(%id, "task edited");
        self.persist();
        Ok(true)
    }

    /// Remove a task. Returns false if it wasn't there.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tasks.remove(index);
        tracing::debug!(%id, "task deleted");
        self.persist();
        true
    }

    /// Remove every completed task and return how many went
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            tracing::debug!(removed, "completed tasks cleared");
            self.persist();
        }
        removed
    }

    fn next_id(&mut self, now_millis: i64) -> TaskId {
        let candidate = u64::try_from(now_millis).unwrap_or(0);
        let id = if candidate > self.last_id {
            candidate
        } else {
            self.last_id + 1
        };
        self.last_id = id;
        TaskId(id)
    }

    fn persist(&mut self) {
        if let Err(e) = save_tasks(self.backend.as_mut(), &self.tasks) {
            tracing::warn!(error = %e, "could not persist tasks, continuing in memory");
        }
    }
}

/// Format `now` with a strftime-style pattern
pub fn format_timestamp(now: &DateTime<Local>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format(DEFAULT_DATE_FORMAT));
    }
    out
}

fn is_valid_date_format(format: &str) -> bool {
    let mut out = String::new();
    write!(out, "{}", Local::now().format(format)).is_ok()
}
