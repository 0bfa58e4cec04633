//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing the storage
//! backend to be swapped (or faked) without changing command logic.

#![allow(async_fn_in_trait)]

use crate::db::{
    DbResult,
    models::{Listing, NewProject, NewTodo, Project, Todo, TodoScope, TodoSummary},
};

/// Repository for Project operations.
pub trait ProjectRepository {
    /// Create a new project. Fails with `InvalidInput` on a blank title.
    async fn create(&self, project: &NewProject) -> DbResult<Project>;

    /// Get a project by ID.
    async fn get(&self, id: i64) -> DbResult<Project>;

    /// Get all projects, ordered by id.
    async fn list(&self) -> DbResult<Vec<Project>>;

    /// Find the single project stored for `filepath` (exact match).
    async fn find_by_filepath(&self, filepath: &str) -> DbResult<Project>;

    /// Delete a project and all of its todos atomically.
    ///
    /// Returns the number of todos removed.
    async fn delete(&self, id: i64) -> DbResult<u64>;

    /// Re-create the global project if it is missing.
    async fn ensure_global(&self) -> DbResult<Project>;
}

/// Repository for Todo operations.
pub trait TodoRepository {
    /// Create a new todo.
    async fn create(&self, todo: &NewTodo) -> DbResult<Todo>;

    /// Get a todo by ID.
    async fn get(&self, id: i64) -> DbResult<Todo>;

    /// Short listing: id, title and completion flag.
    async fn list_summaries(&self, scope: TodoScope) -> DbResult<Listing<TodoSummary>>;

    /// Long listing: every column.
    async fn list(&self, scope: TodoScope) -> DbResult<Listing<Todo>>;

    /// Mark a todo as completed.
    async fn complete(&self, id: i64) -> DbResult<Todo>;

    /// Delete a single todo.
    async fn delete(&self, id: i64) -> DbResult<()>;
}

/// Combined database interface.
pub trait Database {
    type Projects<'a>: ProjectRepository
    where
        Self: 'a;
    type Todos<'a>: TodoRepository
    where
        Self: 'a;

    /// Run pending migrations.
    async fn migrate(&self) -> DbResult<()>;

    /// Get the project repository.
    fn projects(&self) -> Self::Projects<'_>;

    /// Get the todo repository.
    fn todos(&self) -> Self::Todos<'_>;

    /// Remove every todo and project and reset both id sequences.
    async fn reset(&self) -> DbResult<()>;
}
