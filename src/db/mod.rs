//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access so the
//! command layer only sees repositories, never a shared connection.
//!
//! # Architecture
//!
//! - `error`: Storage error taxonomy
//! - `models`: Domain entities (Project, Todo)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed implementation

mod error;
mod models;
mod repository;
pub mod sqlite;
pub mod utils;


pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
