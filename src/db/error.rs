//! Database error types.
//!
//! This module provides the error taxonomy for storage operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("No {entity_type} exists with {key}")]
    #[diagnostic(code(toto::db::not_found))]
    NotFound { entity_type: String, key: String },

    #[error("Invalid input: {message}")]
    #[diagnostic(code(toto::db::invalid_input))]
    InvalidInput { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(toto::db::protected),
        help("The global project (id 1) is the fallback list for directories without a project.")
    )]
    ProtectedResource { message: String },

    #[error("Multiple projects share the filepath '{filepath}' (ids: {ids:?})")]
    #[diagnostic(
        code(toto::db::ambiguous_project),
        help("Delete the duplicates with `toto project delete <id>` so only one remains.")
    )]
    AmbiguousProject { filepath: String, ids: Vec<i64> },

    #[error("Transaction rolled back while trying to {step}: {message}")]
    #[diagnostic(code(toto::db::transaction))]
    Transaction { step: &'static str, message: String },

    #[error("Failed to read row: {message}")]
    #[diagnostic(code(toto::db::row_scan))]
    RowScan { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(toto::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(toto::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(toto::db::connection_error))]
    Connection { message: String },
}

impl DbError {
    pub(crate) fn not_found(entity_type: &str, id: i64) -> Self {
        DbError::NotFound {
            entity_type: entity_type.to_string(),
            key: format!("id {}", id),
        }
    }

    pub(crate) fn transaction(step: &'static str, e: sqlx::Error) -> Self {
        DbError::Transaction {
            step,
            message: e.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        DbError::Database {
            message: e.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
