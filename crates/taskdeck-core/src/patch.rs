use time::OffsetDateTime;

use crate::id::CategoryId;
use crate::model::{Priority, Task};

/// Patch for the description body.
#[derive(Debug, Clone)]
pub enum DescriptionPatch {
    /// Overwrite with a new body.
    Set {
        /// Description text.
        description: String,
    },
    /// Clear the description.
    Clear,
}

/// Patch for the category reference.
#[derive(Debug, Clone)]
pub enum CategoryPatch {
    /// Point the task at the provided category.
    Set {
        /// Category identifier.
        category: CategoryId,
    },
    /// Make the task uncategorized.
    Clear,
}

/// Patch for the due date.
#[derive(Debug, Clone)]
pub enum DueDatePatch {
    /// Set the deadline to the provided instant.
    Set {
        /// Deadline value.
        due_date: OffsetDateTime,
    },
    /// Remove the deadline.
    Clear,
}

/// Partial task update; `None` fields are left untouched.
///
/// Identity fields (`id`, `created_at`) are not representable here, so a
/// patch can never alter them.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    /// Overwrite the title.
    pub title: Option<String>,
    /// Patch applied to the description.
    pub description: Option<DescriptionPatch>,
    /// Overwrite the completion flag.
    pub completed: Option<bool>,
    /// Overwrite the priority.
    pub priority: Option<Priority>,
    /// Patch applied to the category reference.
    pub category: Option<CategoryPatch>,
    /// Patch applied to the due date.
    pub due_date: Option<DueDatePatch>,
}

impl TaskPatch {
    /// Returns true when applying the patch would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
    }

    /// Merge the patch onto `task`, leaving unspecified fields untouched.
    pub fn apply_to(self, task: &mut Task) {
        let Self {
            title,
            description,
            completed,
            priority,
            category,
            due_date,
        } = self;

        if let Some(title) = title {
            task.title = title;
        }
        match description {
            Some(DescriptionPatch::Set { description }) => task.description = Some(description),
            Some(DescriptionPatch::Clear) => task.description = None,
            None => {}
        }
        if let Some(completed) = completed {
            task.completed = completed;
        }
        if let Some(priority) = priority {
            task.priority = priority;
        }
        match category {
            Some(CategoryPatch::Set { category }) => task.category = Some(category),
            Some(CategoryPatch::Clear) => task.category = None,
            None => {}
        }
        match due_date {
            Some(DueDatePatch::Set { due_date }) => task.due_date = Some(due_date),
            Some(DueDatePatch::Clear) => task.due_date = None,
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TaskId;
    use time::macros::datetime;

    fn sample_task() -> Task {
        Task {
            id: TaskId::new(),
            title: "Initial".into(),
            description: Some("body".into()),
            completed: false,
            priority: Priority::Medium,
            category: Some(CategoryId::new()),
            due_date: Some(datetime!(2025-02-01 0:00 UTC)),
            created_at: datetime!(2025-01-01 0:00 UTC),
        }
    }

    #[test]
    fn default_patch_is_empty_and_changes_nothing() {
        let mut task = sample_task();
        let before = task.clone();
        let patch = TaskPatch::default();
        assert!(patch.is_empty());
        patch.apply_to(&mut task);
        assert_eq!(task, before);
    }

    #[test]
    fn patch_overwrites_only_named_fields() {
        let mut task = sample_task();
        let original = task.clone();
        TaskPatch {
            title: Some("Renamed".into()),
            priority: Some(Priority::High),
            ..TaskPatch::default()
        }
        .apply_to(&mut task);

        assert_eq!(task.title, "Renamed");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.description, original.description);
        assert_eq!(task.completed, original.completed);
        assert_eq!(task.category, original.category);
        assert_eq!(task.due_date, original.due_date);
        assert_eq!(task.id, original.id);
        assert_eq!(task.created_at, original.created_at);
    }

    #[test]
    fn clear_variants_reset_optional_fields() {
        let mut task = sample_task();
        TaskPatch {
            description: Some(DescriptionPatch::Clear),
            category: Some(CategoryPatch::Clear),
            due_date: Some(DueDatePatch::Clear),
            ..TaskPatch::default()
        }
        .apply_to(&mut task);

        assert_eq!(task.description, None);
        assert_eq!(task.category, None);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn set_variants_replace_optional_fields() {
        let mut task = sample_task();
        let category = CategoryId::new();
        TaskPatch {
            description: Some(DescriptionPatch::Set {
                description: "rewritten".into(),
            }),
            category: Some(CategoryPatch::Set { category }),
            due_date: Some(DueDatePatch::Set {
                due_date: datetime!(2025-03-01 0:00 UTC),
            }),
            ..TaskPatch::default()
        }
        .apply_to(&mut task);

        assert_eq!(task.description.as_deref(), Some("rewritten"));
        assert_eq!(task.category, Some(category));
        assert_eq!(task.due_date, Some(datetime!(2025-03-01 0:00 UTC)));
    }
}
