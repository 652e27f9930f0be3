//! Typed access to the two persisted keys.
//!
//! Reads never fail: a missing or corrupt blob degrades to the default value
//! with a warning in the log. Writes report their error so callers can log it,
//! but nothing upstream treats a failed write as fatal.

use crate::model::{Task, ThemeMode};

use super::storage::KeyValueStore;

pub const TASKS_KEY: &str = "tasks";
pub const THEME_KEY: &str = "theme";

/// Error type for the persistence adapter
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not write {key}: {source}")]
    Write {
        key: &'static str,
        source: std::io::Error,
    },
    #[error("could not serialize {key}: {source}")]
    Serialize {
        key: &'static str,
        source: serde_json::Error,
    },
}

/// Read the task list. Absent, `null`, or not a JSON array ⇒ empty list.
/// Records that don't deserialize are skipped one by one so the rest survive.
pub fn load_tasks(store: &dyn KeyValueStore) -> Vec<Task> {
    let Some(raw) = store.get(TASKS_KEY) else {
        return Vec::new();
    };
    let records = match serde_json::from_str::<Option<Vec<serde_json::Value>>>(&raw) {
        Ok(records) => records.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "stored task list is unreadable, starting empty");
            return Vec::new();
        }
    };
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Task>(record) {
            Ok(task) => Some(task),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping unreadable stored task");
                None
            }
        })
        .collect()
}

/// Write the full task list
pub fn save_tasks(store: &mut dyn KeyValueStore, tasks: &[Task]) -> Result<(), StorageError> {
    let blob = serde_json::to_string(tasks).map_err(|source| StorageError::Serialize {
        key: TASKS_KEY,
        source,
    })?;
    store
        .set(TASKS_KEY, &blob)
        .map_err(|source| StorageError::Write {
            key: TASKS_KEY,
            source,
        })
}

/// Read the theme selection. Unknown values fall back to dark.
pub fn load_theme(store: &dyn KeyValueStore) -> ThemeMode {
    store
        .get(THEME_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save_theme(store: &mut dyn KeyValueStore, mode: ThemeMode) -> Result<(), StorageError> {
    let blob = serde_json::to_string(&mode).map_err(|source| StorageError::Serialize {
        key: THEME_KEY,
        source,
    })?;
    store
        .set(THEME_KEY, &blob)
        .map_err(|source| StorageError::Write {
            key: THEME_KEY,
            source,
        })
}
