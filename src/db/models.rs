//! Domain models for the todo database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::DbError;

/// Id of the reserved global project.
pub const GLOBAL_PROJECT_ID: i64 = 1;

// =============================================================================
// Project
// =============================================================================

/// A project groups todos and is bound to the directory it was created in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub archived: bool,
    pub filepath: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn is_global(&self) -> bool {
        self.id == GLOBAL_PROJECT_ID
    }
}

/// Input for creating a project.
///
/// When `filepath` is `None` (or blank) the current working directory is used.
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub archived: bool,
    pub filepath: Option<String>,
}

// =============================================================================
// Todo
// =============================================================================

/// A todo item, as returned by the long listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub project_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed: bool,
}

/// Short projection used by `list` / `ls`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoSummary {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Input for creating a todo.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub project_id: i64,
}

/// Which todos a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoScope {
    /// Every todo regardless of project.
    #[default]
    All,
    /// Only todos of one project.
    Project(i64),
}

// =============================================================================
// Listing
// =============================================================================

/// Rows read by a listing query.
///
/// If the cursor failed part-way, `items` holds the rows read before the
/// failure and `interrupted` holds the error.
#[derive(Debug)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub interrupted: Option<DbError>,
}

impl<T> Listing<T> {
    pub fn complete(items: Vec<T>) -> Self {
        Self {
            items,
            interrupted: None,
        }
    }
}
