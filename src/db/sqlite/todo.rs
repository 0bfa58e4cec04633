//! SQLite TodoRepository implementation.

use futures_util::{Stream, TryStreamExt};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{info, warn};

use crate::db::utils::{current_timestamp, normalize_optional};
use crate::db::{
    DbError, DbResult, Listing, NewTodo, Todo, TodoRepository, TodoScope, TodoSummary,
};

const SHORT_COLUMNS: &str = "id, title, completed";
const LONG_COLUMNS: &str = "id, title, description, project_id, created_at, updated_at, completed";

/// SQLx-backed todo repository.
pub struct SqliteTodoRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

/// Build the SELECT for a listing, filtered by project when scoped.
pub(crate) fn build_list_query(columns: &str, scope: TodoScope) -> String {
    match scope {
        TodoScope::All => format!("SELECT {} FROM todos ORDER BY id ASC", columns),
        TodoScope::Project(_) => format!(
            "SELECT {} FROM todos WHERE project_id = ? ORDER BY id ASC",
            columns
        ),
    }
}

fn summary_from_row(row: &SqliteRow) -> Result<TodoSummary, sqlx::Error> {
    Ok(TodoSummary {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        completed: row.try_get("completed")?,
    })
}

fn todo_from_row(row: &SqliteRow) -> Result<Todo, sqlx::Error> {
    Ok(Todo {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        project_id: row.try_get("project_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        completed: row.try_get("completed")?,
    })
}

/// Drain a row stream into a listing.
///
/// A row that fails to decode aborts the listing with `RowScan`. A cursor
/// failure after at least one row keeps the rows read so far and records the
/// error in `interrupted`.
pub(crate) async fn collect_rows<T, S, F>(mut rows: S, scan: F) -> DbResult<Listing<T>>
where
    S: Stream<Item = Result<SqliteRow, sqlx::Error>> + Unpin,
    F: Fn(&SqliteRow) -> Result<T, sqlx::Error>,
{
    let mut items = Vec::new();

    loop {
        match rows.try_next().await {
            Ok(Some(row)) => {
                let item = scan(&row).map_err(|e| DbError::RowScan {
                    message: e.to_string(),
                })?;
                items.push(item);
            }
            Ok(None) => return Ok(Listing::complete(items)),
            Err(e) if items.is_empty() => return Err(e.into()),
            Err(e) => {
                warn!(rows = items.len(), error = %e, "row iteration stopped early");
                return Ok(Listing {
                    items,
                    interrupted: Some(e.into()),
                });
            }
        }
    }
}

impl<'a> TodoRepository for SqliteTodoRepository<'a> {
    async fn create(&self, todo: &NewTodo) -> DbResult<Todo> {
        let title = todo.title.trim();
        if title.is_empty() {
            return Err(DbError::InvalidInput {
                message: "Todo title cannot be empty".to_string(),
            });
        }

        let project_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?)")
                .bind(todo.project_id)
                .fetch_one(self.pool)
                .await?;

        if !project_exists {
            return Err(DbError::not_found("project", todo.project_id));
        }

        let description = normalize_optional(todo.description.as_deref());
        let created_at = current_timestamp();
        let updated_at = created_at;

        let result = sqlx::query(
            "INSERT INTO todos (title, description, project_id, created_at, updated_at, completed) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(&description)
        .bind(todo.project_id)
        .bind(created_at)
        .bind(updated_at)
        .bind(false)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(todo_id = id, project_id = todo.project_id, "created todo");

        Ok(Todo {
            id,
            title: title.to_string(),
            description,
            project_id: todo.project_id,
            created_at,
            updated_at,
            completed: false,
        })
    }

    async fn get(&self, id: i64) -> DbResult<Todo> {
        let sql = format!("SELECT {} FROM todos WHERE id = ?", LONG_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("todo", id))?;

        Ok(todo_from_row(&row)?)
    }

    async fn list_summaries(&self, scope: TodoScope) -> DbResult<Listing<TodoSummary>> {
        let sql = build_list_query(SHORT_COLUMNS, scope);
        let mut query = sqlx::query(&sql);
        if let TodoScope::Project(project_id) = scope {
            query = query.bind(project_id);
        }

        collect_rows(query.fetch(self.pool), summary_from_row).await
    }

    async fn list(&self, scope: TodoScope) -> DbResult<Listing<Todo>> {
        let sql = build_list_query(LONG_COLUMNS, scope);
        let mut query = sqlx::query(&sql);
        if let TodoScope::Project(project_id) = scope {
            query = query.bind(project_id);
        }

        collect_rows(query.fetch(self.pool), todo_from_row).await
    }

    async fn complete(&self, id: i64) -> DbResult<Todo> {
        let result = sqlx::query("UPDATE todos SET completed = 1, updated_at = ? WHERE id = ?")
            .bind(current_timestamp())
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("todo", id));
        }

        self.get(id).await
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("todo", id));
        }

        info!(todo_id = id, "deleted todo");
        Ok(())
    }
}
