//! Shared utilities for CLI commands

use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;
use tabled::{Table, settings::Style};

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Format an optional text field for display
pub fn format_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Status column for a todo
pub fn status_label(completed: bool) -> &'static str {
    if completed { "Done" } else { "Pending" }
}

/// Completed todo titles are struck through; open ones are left as-is
pub fn styled_title(title: &str, completed: bool) -> String {
    if completed {
        title.strikethrough().to_string()
    } else {
        title.to_string()
    }
}

/// How timestamps are shown in long listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `dd-mm-yyyy`
    #[default]
    Compact,
    /// RFC 3339, e.g. `2025-01-02T03:04:05Z`
    Full,
}

impl DateFormat {
    pub fn from_full_flag(full_date: bool) -> Self {
        if full_date {
            DateFormat::Full
        } else {
            DateFormat::Compact
        }
    }

    pub fn format(self, timestamp: &DateTime<Utc>) -> String {
        match self {
            DateFormat::Compact => timestamp.format("%d-%m-%Y").to_string(),
            DateFormat::Full => timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}
