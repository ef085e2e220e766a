use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::db::{self, DbError, queries};

/// What the initializer found or did at the target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitReport {
    Existing { size_bytes: u64, reminder_count: i64 },
    Created { size_bytes: u64 },
}

impl InitReport {
    pub fn size_bytes(&self) -> u64 {
        match self {
            Self::Existing { size_bytes, .. } | Self::Created { size_bytes } => *size_bytes,
        }
    }
}

/// Filesystem facts printed before the initializer acts.
#[derive(Debug, Clone)]
pub struct PathProbe {
    pub path: PathBuf,
    pub parent: Option<PathBuf>,
    pub parent_exists: bool,
    pub exists: bool,
}

impl PathProbe {
    pub fn of(path: &Path) -> Self {
        let parent = path.parent().map(Path::to_path_buf);
        let parent_exists = parent.as_deref().is_some_and(Path::exists);
        Self {
            path: path.to_path_buf(),
            parent,
            parent_exists,
            exists: path.exists(),
        }
    }
}

/// Report on an existing database, or create it with an empty reminders table.
///
/// An existing file without the reminders table is an error, not something to repair.
pub fn inspect_or_initialize(path: &Path) -> Result<InitReport, DbError> {
    if path.exists() {
        let size_bytes = fs::metadata(path)?.len();
        let conn = db::open_read_only(path)?;
        let reminder_count = queries::count_reminders(&conn)?;
        return Ok(InitReport::Existing {
            size_bytes,
            reminder_count,
        });
    }

    info!("creating reminders database at {}", path.display());
    let conn = db::initialize(path)?;
    conn.close().map_err(|(_, err)| err)?;

    let size_bytes = fs::metadata(path)?.len();
    Ok(InitReport::Created { size_bytes })
}
