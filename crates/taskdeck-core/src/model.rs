use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use time::OffsetDateTime;

use crate::id::{CategoryId, TaskId};

/// Categorical urgency rank assigned at creation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Default urgency.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Sort rank: high sorts before medium sorts before low.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// String token used in CLIs and configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Error returned when a priority token cannot be parsed.
#[derive(Debug, Error)]
#[error("unknown priority `{0}`, expected low, medium, or high")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(s.to_owned())),
        }
    }
}

/// A single unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier, assigned at creation and never reassigned.
    pub id: TaskId,
    /// Human-readable title. Callers must not pass empty titles.
    pub title: String,
    /// Optional free-form body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion flag; toggling it preserves task identity.
    pub completed: bool,
    /// Urgency rank.
    pub priority: Priority,
    /// Category reference; `None` means uncategorized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    /// Optional deadline; `None` means no deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<OffsetDateTime>,
    /// Creation timestamp, set exactly once.
    pub created_at: OffsetDateTime,
}

impl Task {
    /// True when the task has a deadline strictly in the past and is still open.
    #[must_use]
    pub fn is_overdue(&self, now: OffsetDateTime) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < now)
    }
}

/// A named, colored label attachable to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Hex color used for visual tagging, e.g. `#4299E1`.
    pub color: String,
}

/// Caller-supplied fields for a new task; the store assigns id and timestamp.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    /// Title of the new task.
    pub title: String,
    /// Optional body text.
    pub description: Option<String>,
    /// Initial completion flag.
    pub completed: bool,
    /// Urgency rank.
    pub priority: Priority,
    /// Optional category reference.
    pub category: Option<CategoryId>,
    /// Optional deadline.
    pub due_date: Option<OffsetDateTime>,
}

/// Caller-supplied fields for a new category; the store assigns the id.
#[derive(Debug, Clone)]
pub struct CategoryDraft {
    /// Display name.
    pub name: String,
    /// Hex color tag.
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn task(completed: bool, due_date: Option<OffsetDateTime>) -> Task {
        Task {
            id: TaskId::new(),
            title: "Write report".into(),
            description: None,
            completed,
            priority: Priority::Medium,
            category: None,
            due_date,
            created_at: datetime!(2025-01-01 0:00 UTC),
        }
    }

    #[test]
    fn priority_ranks_high_first() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test]
    fn priority_parses_tokens() {
        for (token, expected) in [
            ("low", Priority::Low),
            (" Medium ", Priority::Medium),
            ("HIGH", Priority::High),
        ] {
            let parsed: Priority = token
                .parse()
                .unwrap_or_else(|err| panic!("`{token}` must parse: {err}"));
            assert_eq!(parsed, expected);
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn overdue_requires_past_due_date_and_open_task() {
        let now = datetime!(2025-06-01 12:00 UTC);
        assert!(task(false, Some(datetime!(2025-05-31 0:00 UTC))).is_overdue(now));
        assert!(!task(false, Some(datetime!(2025-06-02 0:00 UTC))).is_overdue(now));
        assert!(!task(false, None).is_overdue(now));
        assert!(!task(true, Some(datetime!(2025-05-31 0:00 UTC))).is_overdue(now));
    }

    #[test]
    fn task_serde_roundtrip() {
        let original = task(false, Some(datetime!(2025-03-01 9:30 UTC)));
        let json = serde_json::to_string(&original)
            .unwrap_or_else(|err| panic!("task must serialize: {err}"));
        let decoded: Task = serde_json::from_str(&json)
            .unwrap_or_else(|err| panic!("task must deserialize: {err}"));
        assert_eq!(decoded, original);
    }
}
