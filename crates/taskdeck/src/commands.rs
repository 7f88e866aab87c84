use anyhow::{Context, Result, bail};
use taskdeck_app::{AppConfig, TaskStore, seed_store};
use taskdeck_core::{
    CategoryId, Priority, PriorityFilter, TaskDraft, ViewParams, derive_view,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::Command;
use crate::view::{CategoryView, TaskView};

/// Execute `command` against a freshly seeded session.
pub fn run(command: Command, config: &AppConfig) -> Result<()> {
    let mut store = seed_store();
    store.subscribe(|event| tracing::info!(?event, "store event"));

    match command {
        Command::List {
            search,
            categories,
            priority,
            sort,
            hide_completed,
            json,
        } => {
            let flags = ListFlags {
                search,
                categories,
                priority,
                sort,
                hide_completed,
            };
            run_list(&store, config, flags, json)
        }
        Command::Add {
            title,
            description,
            priority,
            category,
            due,
            completed,
            json,
        } => {
            let flags = AddFlags {
                title,
                description,
                priority,
                category,
                due,
                completed,
            };
            run_add(&mut store, flags, json)
        }
        Command::Categories { json } => run_categories(&store, json),
    }
}

fn run_list(store: &TaskStore, config: &AppConfig, flags: ListFlags, json: bool) -> Result<()> {
    let params = build_view_params(config, store, flags)?;
    let now = OffsetDateTime::now_utc();
    let rows: Vec<TaskView> = derive_view(store.tasks(), &params)
        .into_iter()
        .map(|task| TaskView::from_task(task, store, now))
        .collect();

    if rows.is_empty() {
        if params.has_active_filters() {
            println!("No tasks matched the provided filters");
        } else {
            println!("No tasks found");
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        render_task_table(&rows);
    }
    Ok(())
}

fn run_add(store: &mut TaskStore, flags: AddFlags, json: bool) -> Result<()> {
    let draft = build_draft(store, flags)?;
    let id = store.create_task(draft);
    let task = store
        .task(id)
        .context("created task must be retrievable")?;
    let view = TaskView::from_task(task, store, OffsetDateTime::now_utc());

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("created task: {id}");
        render_task_table(&[view]);
    }
    Ok(())
}

fn run_categories(store: &TaskStore, json: bool) -> Result<()> {
    let rows: Vec<CategoryView> = store
        .categories()
        .iter()
        .map(|category| CategoryView::from_category(category, store))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        render_category_table(&rows);
    }
    Ok(())
}

struct ListFlags {
    search: Option<String>,
    categories: Vec<String>,
    priority: Option<String>,
    sort: Option<String>,
    hide_completed: bool,
}

struct AddFlags {
    title: String,
    description: Option<String>,
    priority: String,
    category: Option<String>,
    due: Option<String>,
    completed: bool,
}

/// Start from the configured defaults, then layer the CLI flags on top.
fn build_view_params(
    config: &AppConfig,
    store: &TaskStore,
    flags: ListFlags,
) -> Result<ViewParams> {
    let ListFlags {
        search,
        categories,
        priority,
        sort,
        hide_completed,
    } = flags;

    let mut params = config.view.initial_params();
    if let Some(search) = search {
        params.set_search_text(search);
    }
    for name in categories {
        params.toggle_category(resolve_category(store, &name)?);
    }
    if let Some(raw) = priority {
        let filter: PriorityFilter = raw.parse()?;
        params.set_priority(filter);
    }
    if let Some(raw) = sort {
        params.set_sort_by(raw.parse()?);
    }
    if hide_completed {
        params.set_show_completed(false);
    }
    Ok(params)
}

fn build_draft(store: &TaskStore, flags: AddFlags) -> Result<TaskDraft> {
    let AddFlags {
        title,
        description,
        priority,
        category,
        due,
        completed,
    } = flags;

    let title = title.trim().to_owned();
    if title.is_empty() {
        bail!("task title must not be blank");
    }
    let priority: Priority = priority.parse()?;
    let category = category
        .as_deref()
        .map(|name| resolve_category(store, name))
        .transpose()?;
    let due_date = due.as_deref().map(parse_due).transpose()?;
    let description = description
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty());

    Ok(TaskDraft {
        title,
        description,
        completed,
        priority,
        category,
        due_date,
    })
}

fn resolve_category(store: &TaskStore, name: &str) -> Result<CategoryId> {
    store
        .category_by_name(name)
        .map(|category| category.id)
        .with_context(|| format!("unknown category: {name}"))
}

fn parse_due(raw: &str) -> Result<OffsetDateTime> {
    OffsetDateTime::parse(raw, &Rfc3339)
        .with_context(|| format!("invalid RFC 3339 deadline: {raw}"))
}

fn render_task_table(rows: &[TaskView]) {
    println!("Done | Priority | Title | Category | Due | Created");
    println!("---- | -------- | ----- | -------- | --- | -------");

    for row in rows {
        let done = if row.completed { "x" } else { " " };
        let due = match (row.due_date.as_deref(), row.overdue) {
            (Some(due), true) => format!("{due} (overdue)"),
            (Some(due), false) => due.to_owned(),
            (None, _) => "-".to_owned(),
        };

        println!(
            "[{done}] | {} | {} | {} | {} | {}",
            row.priority.as_str(),
            row.title,
            row.category.as_deref().unwrap_or("-"),
            due,
            row.created_at
        );
    }
}

fn render_category_table(rows: &[CategoryView]) {
    println!("Name | Color | Tasks");
    println!("---- | ----- | -----");

    for row in rows {
        println!("{} | {} | {}", row.name, row.color, row.task_count);
    }
}
