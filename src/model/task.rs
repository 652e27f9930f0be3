use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Task identifier: milliseconds since the Unix epoch at creation time,
/// bumped past the largest existing id when the clock would collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TaskId)
    }
}

/// The fixed set of task categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Work,
    School,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::General, Category::Work, Category::School];

    /// Lowercase name as stored on disk
    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Work => "work",
            Category::School => "school",
        }
    }

    /// Capitalized name shown next to the icon
    pub fn label(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Work => "Work",
            Category::School => "School",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::General => "\u{1F4CB}", // 📋
            Category::Work => "\u{1F4BC}",    // 💼
            Category::School => "\u{1F393}",  // 🎓
        }
    }

    /// Next category in display order, wrapping around
    pub fn next(self) -> Category {
        match self {
            Category::General => Category::Work,
            Category::Work => Category::School,
            Category::School => Category::General,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Category::General),
            "work" => Ok(Category::Work),
            "school" => Ok(Category::School),
            other => Err(format!(
                "unknown category '{}' (expected general, work or school)",
                other
            )),
        }
    }
}

/// A single to-do item.
///
/// Field names on disk follow the `tasks` blob format: `id`, `text`,
/// `category`, `completed`, `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, never empty
    pub text: String,
    pub category: Category,
    #[serde(default)]
    pub completed: bool,
    /// Display-formatted creation time, set once
    pub created_at: String,
}

impl Task {
    pub fn new(id: TaskId, text: String, category: Category, created_at: String) -> Self {
        Task {
            id,
            text,
            category,
            completed: false,
            created_at,
        }
    }
}
