use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use taskdeck_core::{SortOrder, ViewParams};

/// File name looked up inside the platform configuration directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration loaded from `config.toml`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Defaults applied to the view parameters of a fresh session.
    #[serde(default)]
    pub view: ViewConfig,
}

impl AppConfig {
    /// Load configuration from `path`. A missing file yields the defaults;
    /// an unreadable or malformed file is an error.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }
}

/// Session defaults for the filter/sort selection.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewConfig {
    /// Sort order applied when no flag overrides it.
    pub sort_by: SortOrder,
    /// Whether completed tasks are visible by default.
    pub show_completed: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            sort_by: SortOrder::Newest,
            show_completed: true,
        }
    }
}

impl ViewConfig {
    /// Build the session's starting view parameters from these defaults.
    #[must_use]
    pub const fn initial_params(&self) -> ViewParams {
        let mut params = ViewParams::new();
        params.set_sort_by(self.sort_by);
        params.set_show_completed(self.show_completed);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new()
            .unwrap_or_else(|err| panic!("temp file must be created: {err}"));
        file.write_all(contents.as_bytes())
            .unwrap_or_else(|err| panic!("temp file must be writable: {err}"));
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load("/nonexistent/taskdeck/config.toml")
            .unwrap_or_else(|err| panic!("missing file must default: {err}"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn parses_view_table() {
        let file = write_config(
            r#"
[view]
sort_by = "due_date"
show_completed = false
"#,
        );
        let config = AppConfig::load(file.path())
            .unwrap_or_else(|err| panic!("config must parse: {err}"));
        assert_eq!(config.view.sort_by, SortOrder::DueDate);
        assert!(!config.view.show_completed);
    }

    #[test]
    fn partial_view_table_keeps_remaining_defaults() {
        let file = write_config(
            r#"
[view]
sort_by = "priority"
"#,
        );
        let config = AppConfig::load(file.path())
            .unwrap_or_else(|err| panic!("config must parse: {err}"));
        assert_eq!(config.view.sort_by, SortOrder::Priority);
        assert!(config.view.show_completed);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("view = \"not a table\"");
        assert!(AppConfig::load(file.path()).is_err());
    }

    #[test]
    fn initial_params_apply_configured_defaults() {
        let config = ViewConfig {
            sort_by: SortOrder::Oldest,
            show_completed: false,
        };
        let params = config.initial_params();
        assert_eq!(params.sort_by, SortOrder::Oldest);
        assert!(!params.show_completed);
        assert!(params.search_text.is_empty());
        assert!(params.selected_categories.is_empty());
    }
}
