//! Database location.
//!
//! Resolution order: `--db` flag, then `TOTO_DB`, then the XDG data directory.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the database file.
pub const DB_PATH_ENV: &str = "TOTO_DB";

/// Get XDG-compliant data directory for toto.
///
/// # Returns
/// `$XDG_DATA_HOME/toto`, or `~/.local/share/toto` when unset. Falls back to
/// a relative `.toto` directory when neither variable is available.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var_os("XDG_DATA_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")));

    match data_home {
        Some(dir) => dir.join("toto"),
        None => PathBuf::from(".toto"),
    }
}

/// Get database file path (data_dir/toto.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("toto.db")
}

/// Pick the database file for this run.
pub fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| {
        env::var_os(DB_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
    .unwrap_or_else(get_db_path)
}
