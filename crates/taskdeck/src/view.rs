use serde::Serialize;
use taskdeck_app::TaskStore;
use taskdeck_core::{Category, CategoryId, Priority, Task, TaskId};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const PREVIEW_LIMIT: usize = 80;

/// Serializable projection of a task for human and JSON output.
#[derive(Clone, Debug, Serialize)]
pub struct TaskView {
    pub id: TaskId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_preview: Option<String>,
    pub completed: bool,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub overdue: bool,
    pub created_at: String,
}

impl TaskView {
    /// Project `task`, resolving its category name through `store`.
    pub fn from_task(task: &Task, store: &TaskStore, now: OffsetDateTime) -> Self {
        let category = task
            .category
            .and_then(|id| store.category(id))
            .map(|category| category.name.clone());
        let description_preview = task
            .description
            .as_deref()
            .map(|value| make_preview(value, PREVIEW_LIMIT));

        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            description_preview,
            completed: task.completed,
            priority: task.priority,
            category,
            due_date: task.due_date.and_then(format_timestamp),
            overdue: task.is_overdue(now),
            created_at: format_timestamp(task.created_at).unwrap_or_default(),
        }
    }
}

/// Serializable projection of a category for human and JSON output.
#[derive(Clone, Debug, Serialize)]
pub struct CategoryView {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
    pub task_count: usize,
}

impl CategoryView {
    /// Project `category`, counting the tasks assigned to it in `store`.
    pub fn from_category(category: &Category, store: &TaskStore) -> Self {
        let task_count = store
            .tasks()
            .iter()
            .filter(|task| task.category == Some(category.id))
            .count();
        Self {
            id: category.id,
            name: category.name.clone(),
            color: category.color.clone(),
            task_count,
        }
    }
}

fn format_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    timestamp.format(&Rfc3339).ok()
}

fn make_preview(original: &str, limit: usize) -> String {
    let normalized = collapse_whitespace(original);
    if normalized.len() <= limit {
        normalized
    } else {
        let mut truncated = String::new();
        for ch in normalized.chars().take(limit) {
            truncated.push(ch);
        }
        truncated.push_str("...");
        truncated
    }
}

fn collapse_whitespace(input: &str) -> String {
    let mut result = String::new();
    let mut last_was_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
        } else {
            last_was_space = false;
            result.push(ch);
        }
    }
    result.trim().to_string()
}
