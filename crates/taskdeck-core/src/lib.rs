//! Domain types and view-derivation logic for taskdeck.
//!
//! This crate is pure: it holds the task and category models, the ephemeral
//! view parameters, and the query pipeline that turns both into a displayed
//! task sequence. Ownership of the collections lives in `taskdeck-app`.

/// Identifier types.
pub mod id;
/// Task and category models.
pub mod model;
/// Partial task updates.
pub mod patch;
/// View derivation.
pub mod query;
/// Free-text search matching.
pub mod text_matcher;
/// Filter and sort selection state.
pub mod view;

pub use id::{CategoryId, TaskId};
pub use model::{Category, CategoryDraft, ParsePriorityError, Priority, Task, TaskDraft};
pub use patch::{CategoryPatch, DescriptionPatch, DueDatePatch, TaskPatch};
pub use query::derive_view;
pub use text_matcher::TextMatcher;
pub use view::{
    ParsePriorityFilterError, ParseSortOrderError, PriorityFilter, SortOrder, ViewParams,
};
