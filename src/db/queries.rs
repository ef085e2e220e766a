use std::borrow::Cow;

use rusqlite::Connection;
use rusqlite::types::ValueRef;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReminderStats {
    pub total: i64,
    pub pending: i64,
    pub overdue: i64,
    pub completed: i64,
}

/// Row counts by completion flag. `overdue` is left at zero; see [`count_pending_due`].
pub fn completion_counts(conn: &Connection) -> rusqlite::Result<ReminderStats> {
    let mut stmt = conn.prepare_cached(
        "SELECT
            COUNT(*) AS total,
            COALESCE(SUM(CASE WHEN completed = 0 THEN 1 ELSE 0 END), 0) AS pending,
            COALESCE(SUM(CASE WHEN completed = 1 THEN 1 ELSE 0 END), 0) AS completed
         FROM reminders",
    )?;
    stmt.query_row([], |row| {
        Ok(ReminderStats {
            total: row.get(0)?,
            pending: row.get(1)?,
            overdue: 0,
            completed: row.get(2)?,
        })
    })
}

/// Count pending reminders whose stored `reminder_datetime` satisfies `is_due`.
///
/// Rows are streamed, not collected. Integer and real values are passed in their text form;
/// NULL and blob values are passed as `None`.
pub fn count_pending_due<F>(conn: &Connection, mut is_due: F) -> rusqlite::Result<i64>
where
    F: FnMut(Option<&str>) -> bool,
{
    let mut stmt =
        conn.prepare_cached("SELECT reminder_datetime FROM reminders WHERE completed = 0")?;
    let mut rows = stmt.query([])?;
    let mut count = 0;
    while let Some(row) = rows.next()? {
        let raw: Option<Cow<'_, str>> = match row.get_ref(0)? {
            ValueRef::Text(bytes) => Some(String::from_utf8_lossy(bytes)),
            ValueRef::Integer(v) => Some(Cow::Owned(v.to_string())),
            ValueRef::Real(v) => Some(Cow::Owned(v.to_string())),
            ValueRef::Null | ValueRef::Blob(_) => None,
        };
        if is_due(raw.as_deref()) {
            count += 1;
        }
    }
    Ok(count)
}

pub fn count_reminders(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM reminders", [], |row| row.get(0))
}
