//! Session repository, CRUD for the `sessions` table.

use chrono::{DateTime, Utc};
use rfv_core::SessionId;
use rfv_core::time::{format_timestamp, now_timestamp};
use rusqlite::{Connection, OptionalExtension, params};

use crate::errors::Result;
use crate::sqlite::row_types::SessionRow;

const COLUMNS: &str = "id, title, scheduled_at, notes, created_at";

/// Input for [`SessionRepo::create`].
#[derive(Clone, Debug, Default)]
pub struct NewSession<'a> {
    /// Session title.
    pub title: &'a str,
    /// When the session will be played.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Free-text notes.
    pub notes: Option<&'a str>,
}

/// Session repository. Stateless; every method takes `&Connection`.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session with a fresh ID and creation timestamp.
    pub fn create(conn: &Connection, new: &NewSession<'_>) -> Result<SessionRow> {
        let row = SessionRow {
            id: SessionId::new().into_inner(),
            title: new.title.to_string(),
            scheduled_at: new.scheduled_at.map(format_timestamp),
            notes: new.notes.map(str::to_string),
            created_at: now_timestamp(),
        };
        let _ = conn.execute(
            "INSERT INTO sessions (id, title, scheduled_at, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![row.id, row.title, row.scheduled_at, row.notes, row.created_at],
        )?;
        Ok(row)
    }

    /// Get a session by ID.
    pub fn get_by_id(conn: &Connection, id: &str) -> Result<Option<SessionRow>> {
        let row = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM sessions WHERE id = ?1"),
                params![id],
                Self::map_row,
            )
            .optional()?;
        Ok(row)
    }

    /// Whether a session with this ID exists.
    pub fn exists(conn: &Connection, id: &str) -> Result<bool> {
        let found: Option<i64> = conn
            .query_row("SELECT 1 FROM sessions WHERE id = ?1", params![id], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(found.is_some())
    }

    /// All sessions, latest scheduled first. Unscheduled sessions come last;
    /// ties fall back to newest created first.
    pub fn list(conn: &Connection) -> Result<Vec<SessionRow>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM sessions
             ORDER BY scheduled_at IS NULL, scheduled_at DESC, created_at DESC, id DESC"
        ))?;
        let rows = stmt
            .query_map([], Self::map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SessionRow> {
        Ok(SessionRow {
            id: row.get(0)?,
            title: row.get(1)?,
            scheduled_at: row.get(2)?,
            notes: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}
