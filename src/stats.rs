use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::{debug, error};

use crate::db::queries::{self, ReminderStats};
use crate::db::{self, DbError};

/// Outcome of one attempt to read reminder counts.
#[derive(Debug)]
pub enum StatsReading {
    Live(ReminderStats),
    /// The database file does not exist yet.
    Missing,
    /// The file exists but could not be opened or queried.
    Degraded(DbError),
}

impl StatsReading {
    /// Live counts, or all zeros for a missing or unreadable store.
    pub fn stats(&self) -> ReminderStats {
        match self {
            Self::Live(stats) => *stats,
            Self::Missing | Self::Degraded(_) => ReminderStats::default(),
        }
    }
}

/// Read counts through a fresh read-only connection. Never fails; see [`StatsReading`].
pub fn read_stats(db_path: &Path, now: NaiveDateTime) -> StatsReading {
    if !db_path.exists() {
        return StatsReading::Missing;
    }
    match collect(db_path, now) {
        Ok(stats) => StatsReading::Live(stats),
        Err(err) => StatsReading::Degraded(err),
    }
}

/// Read counts and log the fallback cases. Always returns a value.
pub fn get_stats(db_path: &Path, now: NaiveDateTime) -> ReminderStats {
    let reading = read_stats(db_path, now);
    match &reading {
        StatsReading::Live(_) => {}
        StatsReading::Missing => {
            debug!("no database at {}, reporting zero stats", db_path.display())
        }
        StatsReading::Degraded(err) => {
            error!("Error getting stats from {}: {err}", db_path.display())
        }
    }
    reading.stats()
}

/// [`get_stats`] on the blocking pool, for use from request handlers.
pub async fn fetch_stats(db_path: PathBuf, now: NaiveDateTime) -> ReminderStats {
    match tokio::task::spawn_blocking(move || get_stats(&db_path, now)).await {
        Ok(stats) => stats,
        Err(err) => {
            error!("stats task failed: {err}");
            ReminderStats::default()
        }
    }
}

fn collect(db_path: &Path, now: NaiveDateTime) -> Result<ReminderStats, DbError> {
    let conn = db::open_read_only(db_path)?;
    let mut stats = queries::completion_counts(&conn)?;
    let mut check = OverdueCheck::new(now);
    stats.overdue = queries::count_pending_due(&conn, |raw| check.is_overdue(raw))?;
    drop(conn);

    if check.unparsed > 0 {
        debug!("{} reminder_datetime value(s) compared as text", check.unparsed);
    }
    if check.unreadable > 0 {
        debug!("{} reminder_datetime value(s) were NULL or blob", check.unreadable);
    }
    Ok(stats)
}

/// Overdue test for one stored value against a fixed "now".
struct OverdueCheck {
    now: NaiveDateTime,
    now_iso: String,
    unparsed: usize,
    unreadable: usize,
}

impl OverdueCheck {
    fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            now_iso: iso_timestamp(now),
            unparsed: 0,
            unreadable: 0,
        }
    }

    fn is_overdue(&mut self, raw: Option<&str>) -> bool {
        let Some(raw) = raw else {
            self.unreadable += 1;
            return false;
        };
        match parse_reminder_datetime(raw) {
            Some(due) => due < self.now,
            None => {
                self.unparsed += 1;
                raw < self.now_iso.as_str()
            }
        }
    }
}

/// Parse a stored `reminder_datetime`.
///
/// An explicit offset is dropped, not converted: the wall-clock part is used as written,
/// the same way the text ordering treated it.
pub fn parse_reminder_datetime(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// ISO-8601 local timestamp with microseconds, e.g. `2026-10-16T09:30:00.000000`.
pub fn iso_timestamp(now: NaiveDateTime) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn parses_common_iso_forms() {
        let expected = at("2026-03-01T08:30:00");
        assert_eq!(parse_reminder_datetime("2026-03-01T08:30:00"), Some(expected));
        assert_eq!(parse_reminder_datetime("2026-03-01 08:30:00"), Some(expected));
        assert_eq!(parse_reminder_datetime("2026-03-01T08:30"), Some(expected));
        assert_eq!(
            parse_reminder_datetime("2026-03-01T08:30:00.250000"),
            expected.checked_add_signed(chrono::Duration::milliseconds(250))
        );
        assert_eq!(
            parse_reminder_datetime("2026-03-01"),
            Some(at("2026-03-01T00:00:00"))
        );
    }

    #[test]
    fn offset_is_kept_as_wall_clock() {
        assert_eq!(
            parse_reminder_datetime("2026-03-01T08:30:00+05:00"),
            Some(at("2026-03-01T08:30:00"))
        );
        assert_eq!(
            parse_reminder_datetime("2026-03-01T08:30:00Z"),
            Some(at("2026-03-01T08:30:00"))
        );
    }

    #[test]
    fn garbage_does_not_parse() {
        assert_eq!(parse_reminder_datetime("tomorrow at noon"), None);
        assert_eq!(parse_reminder_datetime(""), None);
    }

    fn count_overdue(due: &[Option<&str>], now: NaiveDateTime) -> (usize, OverdueCheck) {
        let mut check = OverdueCheck::new(now);
        let overdue = due.iter().filter(|raw| check.is_overdue(**raw)).count();
        (overdue, check)
    }

    #[test]
    fn overdue_compares_as_time_not_text() {
        let now = at("2026-03-01T12:00:00");
        // Text ordering would put "2026-03-01 13:00" before "2026-03-01T12..." (' ' < 'T').
        let due = [
            Some("2026-03-01 13:00:00"),
            Some("2026-03-01T11:59:59"),
            Some("2026-03-02T00:00:00"),
        ];
        let (overdue, check) = count_overdue(&due, now);
        assert_eq!(overdue, 1);
        assert_eq!(check.unparsed, 0);
    }

    #[test]
    fn unparseable_values_fall_back_to_text_order() {
        let now = at("2026-03-01T12:00:00");
        let (overdue, check) = count_overdue(&[Some("2025-garbage"), Some("2027-garbage")], now);
        assert_eq!(overdue, 1);
        assert_eq!(check.unparsed, 2);
    }

    #[test]
    fn null_values_are_never_overdue() {
        let now = at("2026-03-01T12:00:00");
        let (overdue, check) = count_overdue(&[None, Some("2020-01-01T00:00:00")], now);
        assert_eq!(overdue, 1);
        assert_eq!(check.unreadable, 1);
    }

    #[test]
    fn iso_timestamp_has_microseconds() {
        assert_eq!(
            iso_timestamp(at("2026-03-01T12:00:00")),
            "2026-03-01T12:00:00.000000"
        );
    }

    #[test]
    fn missing_reading_reports_zeros() {
        let reading = read_stats(
            Path::new("/nonexistent/dir/reminders.db"),
            at("2026-03-01T12:00:00"),
        );
        assert!(matches!(reading, StatsReading::Missing));
        assert_eq!(reading.stats(), ReminderStats::default());
    }
}
