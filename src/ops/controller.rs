//! User-facing actions: each one is a short sequence of store, filter and
//! display calls. Anything that needs a yes/no answer, a line of text, or a
//! message shown to the user goes through a `Prompter`.

use crate::model::filter::{CategoryFilter, FilterState, StatusFilter};
use crate::model::task::{Category, Task, TaskId};
use crate::ops::display::{Screen, render_screen};
use crate::ops::store::{StoreError, TaskStore};
use crate::ops::view_filter::derive_view_for;

pub const EMPTY_TASK_MESSAGE: &str = "Please enter a task!";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this task?";
pub const NOTHING_TO_CLEAR: &str = "No completed tasks to clear!";
pub const EDIT_PROMPT: &str = "Edit task:";

pub fn clear_confirm_message(count: usize) -> String {
    format!("Delete {} completed task(s)?", count)
}

/// Blocking dialogs supplied by the front end
pub trait Prompter {
    /// Ask a yes/no question. Anything but an explicit yes is a no.
    fn confirm(&mut self, message: &str) -> bool;
    /// Ask for one line of text, pre-filled with `default`.
    /// None means the user cancelled.
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;
    /// Show a message and wait for it to be acknowledged
    fn alert(&mut self, message: &str);
}

/// Owns the store and the session's filter selection
pub struct Controller {
    store: TaskStore,
    filter: FilterState,
}

impl Controller {
    pub fn new(store: TaskStore) -> Self {
        Controller {
            store,
            filter: FilterState::default(),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub fn filter(&self) -> FilterState {
        self.filter
    }

    /// Tasks passing the current filters, in store order
    pub fn visible(&self) -> Vec<&Task> {
        derive_view_for(self.store.tasks(), self.filter)
    }

    /// Current display representation: filtered list, global stats, controls
    pub fn screen(&self) -> Screen {
        render_screen(self.store.tasks(), self.filter)
    }

    /// Add a task. Blank input is reported through `ui` and changes nothing.
    pub fn submit_new_task(
        &mut self,
        raw_text: &str,
        category: Category,
        ui: &mut dyn Prompter,
    ) -> Option<TaskId> {
        if raw_text.trim().is_empty() {
            ui.alert(EMPTY_TASK_MESSAGE);
            return None;
        }
        match self.store.create(raw_text, category) {
            Ok(task) => Some(task.id),
            Err(StoreError::EmptyText) => {
                ui.alert(EMPTY_TASK_MESSAGE);
                None
            }
        }
    }

    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        self.store.toggle(id)
    }

    /// Delete after confirmation. Unknown ids are ignored without asking.
    pub fn request_delete(&mut self, id: TaskId, ui: &mut dyn Prompter) -> bool {
        if self.store.get(id).is_none() {
            return false;
        }
        if !ui.confirm(DELETE_CONFIRM) {
            return false;
        }
        self.store.delete(id)
    }

    /// Clear completed tasks after confirming the count. Returns how many
    /// were removed.
    pub fn request_clear_completed(&mut self, ui: &mut dyn Prompter) -> usize {
        let count = self.store.completed_count();
        if count == 0 {
            ui.alert(NOTHING_TO_CLEAR);
            return 0;
        }
        if !ui.confirm(&clear_confirm_message(count)) {
            return 0;
        }
        self.store.clear_completed()
    }

    /// Prompt for replacement text. Cancel, blank text, or an unknown id
    /// leave the task as it was.
    pub fn request_edit(&mut self, id: TaskId, ui: &mut dyn Prompter) -> bool {
        let current = match self.store.get(id) {
            Some(task) => task.text.clone(),
            None => return false,
        };
        let Some(reply) = ui.prompt(EDIT_PROMPT, &current) else {
            return false;
        };
        match self.store.edit(id, &reply) {
            Ok(edited) => edited,
            Err(StoreError::EmptyText) => {
                tracing::debug!(%id, "blank edit ignored");
                false
            }
        }
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }
}
