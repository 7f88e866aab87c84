//! Canonical owner of the task and category collections.
//!
//! Every mutation goes through [`TaskStore`]; consumers read snapshots via
//! the accessor methods and derive views with `taskdeck_core::derive_view`.

use std::fmt;

use taskdeck_core::{Category, CategoryDraft, CategoryId, Task, TaskDraft, TaskId, TaskPatch};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::debug;

/// Errors surfaced by [`TaskStore`] mutations.
///
/// Mutating an unknown id is reported explicitly rather than silently
/// ignored. Callers wanting no-op semantics can discard the error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Target task could not be found.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),
    /// Target category could not be found.
    #[error("category {0} not found")]
    CategoryNotFound(CategoryId),
}

/// Notification emitted after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A task was created.
    TaskCreated {
        /// Identifier of the new task.
        id: TaskId,
    },
    /// A task was updated through a patch.
    TaskUpdated {
        /// Identifier of the updated task.
        id: TaskId,
    },
    /// A task was removed.
    TaskDeleted {
        /// Identifier of the removed task.
        id: TaskId,
    },
    /// A task's completion flag was flipped.
    CompletionToggled {
        /// Identifier of the toggled task.
        id: TaskId,
        /// The flag's new value.
        completed: bool,
    },
    /// A category was created.
    CategoryCreated {
        /// Identifier of the new category.
        id: CategoryId,
    },
    /// A category was removed and dangling task references cleared.
    CategoryDeleted {
        /// Identifier of the removed category.
        id: CategoryId,
        /// Number of tasks whose category reference was cleared.
        cleared_tasks: usize,
    },
}

type Observer = Box<dyn Fn(&StoreEvent)>;

/// In-memory single-writer store for tasks and categories.
///
/// Collections live for the duration of the session; there is no durable
/// storage. Mutations run synchronously on the caller's thread and notify
/// subscribed observers exactly once after completing.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    categories: Vec<Category>,
    observers: Vec<Observer>,
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("categories", &self.categories)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl TaskStore {
    /// Construct an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a store from existing collections (seed data, tests).
    ///
    /// Callers are responsible for id uniqueness within each collection.
    #[must_use]
    pub const fn from_parts(tasks: Vec<Task>, categories: Vec<Category>) -> Self {
        Self {
            tasks,
            categories,
            observers: Vec::new(),
        }
    }

    /// Register an observer invoked after every successful mutation.
    pub fn subscribe(&mut self, observer: impl Fn(&StoreEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Canonical task collection, most recently created first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Category collection in creation order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a task by id.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Look up a category by id.
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Look up a category by display name, case-insensitively.
    #[must_use]
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.name.eq_ignore_ascii_case(name))
    }

    /// Create a task from `draft`, assigning a fresh id and creation
    /// timestamp, and insert it at the front of the collection.
    ///
    /// The store performs no title validation; rejecting blank titles is the
    /// presentation layer's responsibility.
    pub fn create_task(&mut self, draft: TaskDraft) -> TaskId {
        let TaskDraft {
            title,
            description,
            completed,
            priority,
            category,
            due_date,
        } = draft;

        let id = TaskId::new();
        let task = Task {
            id,
            title,
            description,
            completed,
            priority,
            category,
            due_date,
            created_at: OffsetDateTime::now_utc(),
        };
        self.tasks.insert(0, task);
        debug!(task = %id, "task created");
        self.notify(&StoreEvent::TaskCreated { id });
        id
    }

    /// Merge `patch` onto the task with `id`, leaving unnamed fields
    /// untouched. An empty patch succeeds without emitting an event.
    ///
    /// # Errors
    /// Returns [`StoreError::TaskNotFound`] when no task has that id.
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> Result<(), StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;

        if patch.is_empty() {
            debug!(task = %id, "empty patch ignored");
            return Ok(());
        }

        patch.apply_to(task);
        debug!(task = %id, "task updated");
        self.notify(&StoreEvent::TaskUpdated { id });
        Ok(())
    }

    /// Remove the task with `id` from the collection.
    ///
    /// # Errors
    /// Returns [`StoreError::TaskNotFound`] when no task has that id.
    pub fn delete_task(&mut self, id: TaskId) -> Result<(), StoreError> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;

        self.tasks.remove(position);
        debug!(task = %id, "task deleted");
        self.notify(&StoreEvent::TaskDeleted { id });
        Ok(())
    }

    /// Flip the completion flag of the task with `id` and return the new
    /// value. No other field is touched.
    ///
    /// # Errors
    /// Returns [`StoreError::TaskNotFound`] when no task has that id.
    pub fn toggle_completion(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;

        task.completed = !task.completed;
        let completed = task.completed;
        debug!(task = %id, completed, "completion toggled");
        self.notify(&StoreEvent::CompletionToggled { id, completed });
        Ok(completed)
    }

    /// Create a category from `draft` and append it to the collection.
    pub fn create_category(&mut self, draft: CategoryDraft) -> CategoryId {
        let CategoryDraft { name, color } = draft;
        let id = CategoryId::new();
        self.categories.push(Category { id, name, color });
        debug!(category = %id, "category created");
        self.notify(&StoreEvent::CategoryCreated { id });
        id
    }

    /// Remove the category with `id` and clear the reference on every task
    /// pointing at it.
    ///
    /// Both effects happen under one borrow of the store, so no consumer can
    /// observe a task referencing the deleted category.
    ///
    /// # Errors
    /// Returns [`StoreError::CategoryNotFound`] when no category has that id.
    pub fn delete_category(&mut self, id: CategoryId) -> Result<(), StoreError> {
        let position = self
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or(StoreError::CategoryNotFound(id))?;

        self.categories.remove(position);

        let mut cleared_tasks = 0;
        for task in &mut self.tasks {
            if task.category == Some(id) {
                task.category = None;
                cleared_tasks += 1;
            }
        }

        debug!(category = %id, cleared_tasks, "category deleted");
        self.notify(&StoreEvent::CategoryDeleted { id, cleared_tasks });
        Ok(())
    }

    fn notify(&self, event: &StoreEvent) {
        for observer in &self.observers {
            observer(event);
        }
    }
}
