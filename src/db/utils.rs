//! Database utility functions.

use chrono::{DateTime, Utc};

use crate::db::{DbError, DbResult};

/// Current time, truncated to whole seconds so stored values round-trip.
pub fn current_timestamp() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now)
}

/// Current working directory as a string, the key for project lookup.
pub fn current_dir_string() -> DbResult<String> {
    let dir = std::env::current_dir().map_err(|e| DbError::InvalidInput {
        message: format!("Error getting current directory: {}", e),
    })?;
    Ok(dir.to_string_lossy().into_owned())
}

/// Trim an optional free-text field, mapping blank input to `None`.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
