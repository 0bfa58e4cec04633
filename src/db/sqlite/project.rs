//! SQLite ProjectRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

use crate::db::utils::{current_dir_string, current_timestamp, normalize_optional};
use crate::db::{
    DbError, DbResult, GLOBAL_PROJECT_ID, NewProject, Project, ProjectRepository,
};

const PROJECT_COLUMNS: &str = "id, title, description, archived, filepath, created_at, updated_at";

/// SQLx-backed project repository.
pub struct SqliteProjectRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn project_from_row(row: &SqliteRow) -> Result<Project, sqlx::Error> {
    Ok(Project {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        archived: row.try_get("archived")?,
        filepath: row.try_get("filepath")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

impl<'a> ProjectRepository for SqliteProjectRepository<'a> {
    async fn create(&self, project: &NewProject) -> DbResult<Project> {
        let title = project.title.trim();
        if title.is_empty() {
            return Err(DbError::InvalidInput {
                message: "Project title cannot be empty".to_string(),
            });
        }

        let filepath = match project.filepath.as_deref() {
            Some(path) if !path.trim().is_empty() => path.to_string(),
            _ => current_dir_string()?,
        };
        let description = normalize_optional(project.description.as_deref());

        // Always generate current timestamps for new rows
        let created_at = current_timestamp();
        let updated_at = created_at;

        let result = sqlx::query(
            "INSERT INTO projects (title, description, archived, filepath, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(&description)
        .bind(project.archived)
        .bind(&filepath)
        .bind(created_at)
        .bind(updated_at)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(project_id = id, %filepath, "created project");

        Ok(Project {
            id,
            title: title.to_string(),
            description,
            archived: project.archived,
            filepath,
            created_at,
            updated_at,
        })
    }

    async fn get(&self, id: i64) -> DbResult<Project> {
        let sql = format!("SELECT {} FROM projects WHERE id = ?", PROJECT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("project", id))?;

        Ok(project_from_row(&row)?)
    }

    async fn list(&self) -> DbResult<Vec<Project>> {
        let sql = format!("SELECT {} FROM projects ORDER BY id ASC", PROJECT_COLUMNS);
        let rows = sqlx::query(&sql).fetch_all(self.pool).await?;

        rows.iter()
            .map(|row| project_from_row(row).map_err(DbError::from))
            .collect()
    }

    async fn find_by_filepath(&self, filepath: &str) -> DbResult<Project> {
        let sql = format!(
            "SELECT {} FROM projects WHERE filepath = ? ORDER BY id ASC",
            PROJECT_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(filepath)
            .fetch_all(self.pool)
            .await?;

        match rows.as_slice() {
            [] => Err(DbError::NotFound {
                entity_type: "project".to_string(),
                key: format!("filepath '{}'", filepath),
            }),
            [row] => Ok(project_from_row(row)?),
            _ => {
                let ids = rows
                    .iter()
                    .map(|row| row.try_get::<i64, _>("id"))
                    .collect::<Result<Vec<_>, _>>()?;
                Err(DbError::AmbiguousProject {
                    filepath: filepath.to_string(),
                    ids,
                })
            }
        }
    }

    async fn delete(&self, id: i64) -> DbResult<u64> {
        if id <= 0 {
            return Err(DbError::InvalidInput {
                message: format!("invalid project id {}", id),
            });
        }

        if id == GLOBAL_PROJECT_ID {
            return Err(DbError::ProtectedResource {
                message: "Please do not remove the global project. Other functionality relies upon it."
                    .to_string(),
            });
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::transaction("begin transaction", e))?;

        let todos = sqlx::query("DELETE FROM todos WHERE project_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::transaction("delete project todos", e))?;

        let project = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::transaction("delete project", e))?;

        if project.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(|e| DbError::transaction("roll back", e))?;
            return Err(DbError::not_found("project", id));
        }

        tx.commit()
            .await
            .map_err(|e| DbError::transaction("commit transaction", e))?;

        info!(
            project_id = id,
            todos = todos.rows_affected(),
            "deleted project"
        );
        Ok(todos.rows_affected())
    }

    async fn ensure_global(&self) -> DbResult<Project> {
        let now = current_timestamp();
        let result = sqlx::query(
            "INSERT OR IGNORE INTO projects (id, title, description, archived, filepath, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(GLOBAL_PROJECT_ID)
        .bind("Global")
        .bind("Fallback todo list for directories without a project")
        .bind(false)
        .bind("")
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await?;

        if result.rows_affected() > 0 {
            debug!("re-created global project");
        }

        self.get(GLOBAL_PROJECT_ID).await
    }
}
