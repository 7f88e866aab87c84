//! CLI entry point for taskdeck.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use taskdeck_app::{AppConfig, CONFIG_FILE};

mod commands;
mod view;

/// Filtered, sorted task views over an in-memory session.
#[derive(Parser, Debug)]
#[command(
    name = "taskdeck",
    version,
    about = "taskdeck: filter and sort a seeded task collection from the command line"
)]
struct Cli {
    /// Path to the configuration file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List tasks after applying filters and the sort order.
    List {
        /// Case-insensitive substring matched against title and description.
        #[arg(long)]
        search: Option<String>,
        /// Category name to select; repeat to select several.
        #[arg(short = 'c', long = "category")]
        categories: Vec<String>,
        /// Keep only this priority (low, medium, high, or all).
        #[arg(short = 'p', long)]
        priority: Option<String>,
        /// Sort order (newest, oldest, due-date, or priority).
        #[arg(long)]
        sort: Option<String>,
        /// Hide completed tasks.
        #[arg(long)]
        hide_completed: bool,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Add a task to the session and show the resulting row.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(short = 'p', long, default_value = "medium")]
        priority: String,
        /// Category name; must match an existing category.
        #[arg(short = 'c', long)]
        category: Option<String>,
        /// RFC 3339 deadline, e.g. 2025-07-01T09:00:00Z.
        #[arg(long)]
        due: Option<String>,
        /// Create the task already completed.
        #[arg(long)]
        completed: bool,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List categories with their task counts.
    Categories {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let Cli { config, cmd } = Cli::parse();
    install_tracing();

    let config = load_config(config)?;
    commands::run(cmd, &config)
}

fn load_config(explicit: Option<PathBuf>) -> Result<AppConfig> {
    let path = explicit.or_else(|| {
        dirs::config_dir().map(|dir| dir.join("taskdeck").join(CONFIG_FILE))
    });
    match path {
        Some(path) => AppConfig::load(path),
        None => Ok(AppConfig::default()),
    }
}

fn install_tracing() {
    // RUST_LOG overrides the default INFO level.
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_command() {
        let cli = Cli::parse_from([
            "taskdeck",
            "list",
            "--search",
            "report",
            "--category",
            "Work",
            "--category",
            "Health",
            "--priority",
            "high",
            "--sort",
            "due-date",
            "--hide-completed",
        ]);

        match cli.cmd {
            Command::List {
                search,
                categories,
                priority,
                sort,
                hide_completed,
                json,
            } => {
                assert_eq!(search.as_deref(), Some("report"));
                assert_eq!(categories, vec!["Work", "Health"]);
                assert_eq!(priority.as_deref(), Some("high"));
                assert_eq!(sort.as_deref(), Some("due-date"));
                assert!(hide_completed);
                assert!(!json);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn parse_add_command() {
        let cli = Cli::parse_from([
            "taskdeck",
            "add",
            "--title",
            "Water the plants",
            "--priority",
            "low",
            "--category",
            "Personal",
            "--due",
            "2025-07-01T09:00:00Z",
        ]);

        match cli.cmd {
            Command::Add {
                title,
                priority,
                category,
                due,
                completed,
                ..
            } => {
                assert_eq!(title, "Water the plants");
                assert_eq!(priority, "low");
                assert_eq!(category.as_deref(), Some("Personal"));
                assert_eq!(due.as_deref(), Some("2025-07-01T09:00:00Z"));
                assert!(!completed);
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn add_defaults_to_medium_priority() {
        let cli = Cli::parse_from(["taskdeck", "add", "--title", "Quick note"]);
        match cli.cmd {
            Command::Add { priority, .. } => assert_eq!(priority, "medium"),
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn parse_categories_command() {
        let cli = Cli::parse_from(["taskdeck", "categories", "--json"]);
        match cli.cmd {
            Command::Categories { json } => assert!(json),
            _ => panic!("expected categories command"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["taskdeck", "--config", "/tmp/custom.toml", "categories"]);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/custom.toml")));
    }

    #[test]
    fn explicit_config_path_wins() {
        let config = load_config(Some(PathBuf::from("/nonexistent/dir/config.toml")))
            .unwrap_or_else(|err| panic!("missing file must default: {err}"));
        assert_eq!(config, AppConfig::default());
    }
}
