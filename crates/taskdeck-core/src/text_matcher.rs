use crate::model::Task;

/// Case-insensitive substring matcher for task fields.
pub struct TextMatcher {
    needle: String,
}

impl TextMatcher {
    /// Normalize a query string into a matcher. Returns `None` for blank inputs.
    #[must_use]
    pub fn new(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            needle: trimmed.to_lowercase(),
        })
    }

    /// Determine whether the task's title or description contains the query.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_field(&task.title)
            || task
                .description
                .as_deref()
                .is_some_and(|description| self.matches_field(description))
    }

    fn matches_field(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TaskId;
    use crate::model::Priority;
    use time::macros::datetime;

    fn task(title: &str, description: Option<&str>) -> Task {
        Task {
            id: TaskId::new(),
            title: title.to_owned(),
            description: description.map(str::to_owned),
            completed: false,
            priority: Priority::Medium,
            category: None,
            due_date: None,
            created_at: datetime!(2025-01-01 0:00 UTC),
        }
    }

    #[test]
    fn matcher_skips_blank_queries() {
        assert!(TextMatcher::new("").is_none());
        assert!(TextMatcher::new("   ").is_none());
        assert!(TextMatcher::new("\n").is_none());
    }

    #[test]
    fn matcher_finds_text_in_title_and_description() {
        let subject = task("Plan sprint review", Some("Collect demo material"));

        let matcher = TextMatcher::new("sprint")
            .unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(matcher.matches(&subject));

        let matcher = TextMatcher::new("demo")
            .unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(matcher.matches(&subject));

        let matcher = TextMatcher::new("retro")
            .unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(!matcher.matches(&subject));
    }

    #[test]
    fn matcher_is_case_insensitive() {
        let subject = task("Improve CLI", None);

        let matcher = TextMatcher::new("cli")
            .unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(matcher.matches(&subject));

        let matcher = TextMatcher::new("IMPROVE")
            .unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(matcher.matches(&subject));
    }

    #[test]
    fn matcher_ignores_missing_description() {
        let subject = task("Water plants", None);
        let matcher = TextMatcher::new("soil")
            .unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(!matcher.matches(&subject));
    }
}
