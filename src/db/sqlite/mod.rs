//! SQLite implementation of the database traits.
//!
//! This module provides a SQLx-backed implementation of the repository
//! traits defined in the parent module.

mod connection;
mod project;
mod todo;


pub use connection::SqliteDatabase;
pub use project::SqliteProjectRepository;
pub use todo::SqliteTodoRepository;
