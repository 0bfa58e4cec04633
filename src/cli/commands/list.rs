use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::{DateFormat, apply_table_style, format_optional, status_label, styled_title};
use crate::db::{Database, DbError, Todo, TodoRepository, TodoScope, TodoSummary};

#[derive(Tabled)]
struct TodoDisplay {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Todo")]
    title: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

impl From<&TodoSummary> for TodoDisplay {
    fn from(todo: &TodoSummary) -> Self {
        Self {
            id: todo.id,
            title: styled_title(&todo.title, todo.completed),
            status: status_label(todo.completed),
        }
    }
}

#[derive(Tabled)]
struct TodoLongDisplay {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Todo")]
    title: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Project Id")]
    project_id: i64,
    #[tabled(rename = "Created At")]
    created_at: String,
    #[tabled(rename = "Updated At")]
    updated_at: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

impl TodoLongDisplay {
    fn new(todo: &Todo, dates: DateFormat) -> Self {
        Self {
            id: todo.id,
            title: styled_title(&todo.title, todo.completed),
            description: format_optional(todo.description.as_deref()),
            project_id: todo.project_id,
            created_at: dates.format(&todo.created_at),
            updated_at: dates.format(&todo.updated_at),
            status: status_label(todo.completed),
        }
    }
}

/// Short listing: id, title and status.
pub async fn list_todos<D: Database>(db: &D, scope: TodoScope, format: &str) -> CliResult<String> {
    let listing = db.todos().list_summaries(scope).await?;

    let output = match format {
        "json" => serde_json::to_string_pretty(&listing.items)?,
        _ => format_table(&listing.items),
    };

    Ok(with_interruption(output, listing.interrupted))
}

/// Long listing: every column, dates in the requested format.
pub async fn list_todos_long<D: Database>(
    db: &D,
    scope: TodoScope,
    dates: DateFormat,
    format: &str,
) -> CliResult<String> {
    let listing = db.todos().list(scope).await?;

    let output = match format {
        "json" => serde_json::to_string_pretty(&listing.items)?,
        _ => format_long_table(&listing.items, dates),
    };

    Ok(with_interruption(output, listing.interrupted))
}

pub(crate) fn format_table(todos: &[TodoSummary]) -> String {
    if todos.is_empty() {
        return "No todos found.".to_string();
    }

    let rows: Vec<TodoDisplay> = todos.iter().map(TodoDisplay::from).collect();
    let mut table = Table::new(rows);
    apply_table_style(&mut table);
    table.to_string()
}

pub(crate) fn format_long_table(todos: &[Todo], dates: DateFormat) -> String {
    if todos.is_empty() {
        return "No todos found.".to_string();
    }

    let rows: Vec<TodoLongDisplay> = todos
        .iter()
        .map(|todo| TodoLongDisplay::new(todo, dates))
        .collect();
    let mut table = Table::new(rows);
    apply_table_style(&mut table);
    table.to_string()
}

// The rows read before a cursor failure are still shown.
fn with_interruption(mut output: String, interrupted: Option<DbError>) -> String {
    if let Some(err) = interrupted {
        output.push_str(&format!("\nError iterating over rows: {}", err));
    }
    output
}
