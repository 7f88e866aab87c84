//! Built-in seed data for a fresh session.
//!
//! Every session starts from the same four categories and four tasks; there
//! is no durable storage, so this is the whole of the initial state.

use taskdeck_core::{Category, CategoryId, Priority, Task, TaskId};
use time::{Duration, OffsetDateTime};

use crate::store::TaskStore;

/// Build a store holding the built-in seed collections, relative to the
/// current wall clock.
#[must_use]
pub fn seed_store() -> TaskStore {
    seed_store_at(OffsetDateTime::now_utc())
}

/// Build the seed store relative to an explicit `now` (deterministic tests).
///
/// Four categories and four tasks, one task per category, spanning the
/// priority ranks and both completion states. No seed task is overdue at
/// construction time.
#[must_use]
pub fn seed_store_at(now: OffsetDateTime) -> TaskStore {
    let work = Category {
        id: CategoryId::new(),
        name: "Work".into(),
        color: "#4299E1".into(),
    };
    let personal = Category {
        id: CategoryId::new(),
        name: "Personal".into(),
        color: "#ED8936".into(),
    };
    let learning = Category {
        id: CategoryId::new(),
        name: "Learning".into(),
        color: "#38B2AC".into(),
    };
    let health = Category {
        id: CategoryId::new(),
        name: "Health".into(),
        color: "#9F7AEA".into(),
    };

    let tasks = vec![
        Task {
            id: TaskId::new(),
            title: "Complete project proposal".into(),
            description: Some(
                "Finish the quarterly project proposal for the management team".into(),
            ),
            completed: false,
            priority: Priority::High,
            category: Some(work.id),
            due_date: Some(now + Duration::days(2)),
            created_at: now,
        },
        Task {
            id: TaskId::new(),
            title: "Schedule dentist appointment".into(),
            description: Some("Call the dentist office to schedule a routine cleaning".into()),
            completed: true,
            priority: Priority::Medium,
            category: Some(personal.id),
            due_date: None,
            created_at: now - Duration::days(1),
        },
        Task {
            id: TaskId::new(),
            title: "Finish the ownership chapter".into(),
            description: Some("Read the next chapter of the programming book".into()),
            completed: false,
            priority: Priority::Medium,
            category: Some(learning.id),
            due_date: Some(now + Duration::days(5)),
            created_at: now,
        },
        Task {
            id: TaskId::new(),
            title: "Go for a 30-minute run".into(),
            description: Some("Complete a 30-minute jogging session in the park".into()),
            completed: false,
            priority: Priority::Low,
            category: Some(health.id),
            due_date: Some(now),
            created_at: now,
        },
    ];

    TaskStore::from_parts(tasks, vec![work, personal, learning, health])
}
