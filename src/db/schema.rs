use std::fs;
use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use super::DbError;

/// Create the parent directories and the database file if needed, then apply the schema.
pub fn initialize(db_path: &Path) -> Result<Connection, DbError> {
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(db_path)?;
    conn.execute_batch(SCHEMA_SQL)?;

    Ok(conn)
}

/// Open an existing database without write access. Never creates the file.
pub fn open_read_only(db_path: &Path) -> Result<Connection, DbError> {
    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(conn)
}

/// The reminders table as written by the reminder service.
/// `reminder_datetime`, `created_at` and `completed_at` hold ISO-8601 text.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS reminders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    reminder_datetime TEXT NOT NULL,
    completed INTEGER DEFAULT 0,
    notified INTEGER DEFAULT 0,
    created_at TEXT NOT NULL,
    completed_at TEXT,
    user_id TEXT DEFAULT 'default'
);
"#;
