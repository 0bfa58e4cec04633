//! SQLite database connection and migration management.

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, info};

use super::{SqliteProjectRepository, SqliteTodoRepository};
use crate::db::{Database, DbError, DbResult};

/// SQLite database implementation.
///
/// The pool is capped at a single connection: every command runs to
/// completion on its own, and an in-memory database only lives as long as
/// its one connection.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (creating if needed) a database file at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| DbError::Connection {
                message: format!("Failed to create database directory: {}", e),
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        debug!(path = %path.display(), "opening database");
        Self::connect(options).await
    }

    /// Create an in-memory database (useful for testing).
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);
        Self::connect(options).await
    }

    async fn connect(options: SqliteConnectOptions) -> DbResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    /// Access the underlying pool (useful for tests and ad-hoc queries).
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type Projects<'a> = SqliteProjectRepository<'a>;
    type Todos<'a> = SqliteTodoRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        sqlx::migrate!("data/sql/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })
    }

    fn projects(&self) -> Self::Projects<'_> {
        SqliteProjectRepository { pool: &self.pool }
    }

    fn todos(&self) -> Self::Todos<'_> {
        SqliteTodoRepository { pool: &self.pool }
    }

    async fn reset(&self) -> DbResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::transaction("begin transaction", e))?;

        // Dropping `tx` on any early return rolls every step back.
        let steps: [(&'static str, &str); 4] = [
            ("clear the todo table", "DELETE FROM todos"),
            ("clear the project table", "DELETE FROM projects"),
            (
                "reset the todo id sequence",
                "DELETE FROM sqlite_sequence WHERE name = 'todos'",
            ),
            (
                "reset the project id sequence",
                "DELETE FROM sqlite_sequence WHERE name = 'projects'",
            ),
        ];

        for (step, sql) in steps {
            sqlx::query(sql)
                .execute(&mut *tx)
                .await
                .map_err(|e| DbError::transaction(step, e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::transaction("commit transaction", e))?;

        info!("database reset");
        Ok(())
    }
}
