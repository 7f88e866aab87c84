//! Pure derivation of a displayed task sequence from the canonical
//! collection plus the current [`ViewParams`].

use std::cmp::Ordering;

use crate::model::Task;
use crate::text_matcher::TextMatcher;
use crate::view::{SortOrder, ViewParams};

/// Derive the ordered, filtered view for `params`.
///
/// Filters are conjunctive and applied in a fixed order: search text,
/// category, priority, completion. The surviving set is sorted with a stable
/// comparator, so ties preserve the canonical (most-recent-first) order of
/// `tasks`. The inputs are never mutated; calling twice with identical inputs
/// yields identical output.
#[must_use]
pub fn derive_view<'a>(tasks: &'a [Task], params: &ViewParams) -> Vec<&'a Task> {
    let matcher = TextMatcher::new(&params.search_text);

    let mut view: Vec<&Task> = tasks
        .iter()
        .filter(|task| matcher.as_ref().is_none_or(|m| m.matches(task)))
        .filter(|task| {
            params.selected_categories.is_empty()
                || task
                    .category
                    .is_some_and(|category| params.selected_categories.contains(&category))
        })
        .filter(|task| params.priority.accepts(task.priority))
        .filter(|task| params.show_completed || !task.completed)
        .collect();

    view.sort_by(comparator(params.sort_by));
    view
}

fn comparator(sort_by: SortOrder) -> impl Fn(&&Task, &&Task) -> Ordering {
    move |a, b| match sort_by {
        SortOrder::Newest => b.created_at.cmp(&a.created_at),
        SortOrder::Oldest => a.created_at.cmp(&b.created_at),
        SortOrder::DueDate => due_date_order(a, b),
        SortOrder::Priority => a.priority.rank().cmp(&b.priority.rank()),
    }
}

// Missing deadlines are treated as infinitely late: every task with a due
// date sorts before every task without one, and pairs of no-deadline tasks
// compare equal so the stable sort keeps their relative order.
fn due_date_order(a: &Task, b: &Task) -> Ordering {
    match (a.due_date, b.due_date) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
