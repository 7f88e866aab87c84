use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use thiserror::Error;

use crate::id::CategoryId;
use crate::model::Priority;

/// Order applied to the derived task view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Most recently created first.
    #[default]
    Newest,
    /// Oldest creation timestamp first.
    Oldest,
    /// Soonest deadline first; tasks without one sort last.
    DueDate,
    /// Highest priority rank first.
    Priority,
}

impl SortOrder {
    /// String token used in CLIs and configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::DueDate => "due_date",
            Self::Priority => "priority",
        }
    }
}

/// Error returned when a sort-order token cannot be parsed.
#[derive(Debug, Error)]
#[error("unknown sort order `{0}`, expected newest, oldest, due-date, or priority")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "due_date" | "duedate" => Ok(Self::DueDate),
            "priority" => Ok(Self::Priority),
            _ => Err(ParseSortOrderError(s.to_owned())),
        }
    }
}

/// Priority selection; `All` disables the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Every priority passes.
    #[default]
    All,
    /// Only tasks with exactly this priority pass.
    Only(Priority),
}

impl PriorityFilter {
    /// Apply the filter to a task's priority.
    #[must_use]
    pub fn accepts(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => priority == selected,
        }
    }
}

/// Error returned when a priority-filter token cannot be parsed.
#[derive(Debug, Error)]
#[error("unknown priority filter `{0}`, expected all, low, medium, or high")]
pub struct ParsePriorityFilterError(String);

impl FromStr for PriorityFilter {
    type Err = ParsePriorityFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Priority>()
            .map(Self::Only)
            .map_err(|_| ParsePriorityFilterError(s.to_owned()))
    }
}

/// Ephemeral filter/sort selection driving the derived view.
///
/// Lives for the duration of a session and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParams {
    /// Case-insensitive substring matched against title and description.
    pub search_text: String,
    /// Category identifiers to keep; an empty set keeps every category.
    pub selected_categories: BTreeSet<CategoryId>,
    /// Priority selection.
    pub priority: PriorityFilter,
    /// Order applied after filtering.
    pub sort_by: SortOrder,
    /// When false, completed tasks are hidden (but never deleted).
    pub show_completed: bool,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewParams {
    /// Parameters with every filter disabled and the default sort order.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search_text: String::new(),
            selected_categories: BTreeSet::new(),
            priority: PriorityFilter::All,
            sort_by: SortOrder::Newest,
            show_completed: true,
        }
    }

    /// Replace the search text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Flip membership of `category` in the selected set.
    pub fn toggle_category(&mut self, category: CategoryId) {
        if !self.selected_categories.remove(&category) {
            self.selected_categories.insert(category);
        }
    }

    /// Replace the priority selection.
    pub const fn set_priority(&mut self, priority: PriorityFilter) {
        self.priority = priority;
    }

    /// Replace the sort order.
    pub const fn set_sort_by(&mut self, sort_by: SortOrder) {
        self.sort_by = sort_by;
    }

    /// Replace the completed-task visibility flag.
    pub const fn set_show_completed(&mut self, show_completed: bool) {
        self.show_completed = show_completed;
    }

    /// Reset every field to its default.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// True when any filter differs from its default. Sort order is not a
    /// filter and is excluded from the check.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.search_text.is_empty()
            || !self.selected_categories.is_empty()
            || self.priority != PriorityFilter::All
            || !self.show_completed
    }
}
