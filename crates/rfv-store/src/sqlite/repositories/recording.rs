//! Recording repository, CRUD for `session_recordings`.
//!
//! A recording row is written once, after its document has been published,
//! and never changes afterwards.

use rfv_core::RecordingId;
use rfv_core::time::now_timestamp;
use rusqlite::{Connection, OptionalExtension, params};

use crate::errors::Result;
use crate::sqlite::row_types::RecordingRow;

const COLUMNS: &str = "id, session_id, title, summary, doc_id, doc_url, created_at, updated_at";

/// Input for [`RecordingRepo::create`].
#[derive(Clone, Debug)]
pub struct NewRecording<'a> {
    /// Owning session.
    pub session_id: &'a str,
    /// Document title.
    pub title: &'a str,
    /// Summary inserted into the document.
    pub summary: Option<&'a str>,
    /// Externally issued document ID.
    pub doc_id: &'a str,
    /// Shareable document URL.
    pub doc_url: &'a str,
}

/// Recording repository. Stateless; every method takes `&Connection`.
pub struct RecordingRepo;

impl RecordingRepo {
    /// Insert a recording for an already published document.
    pub fn create(conn: &Connection, new: &NewRecording<'_>) -> Result<RecordingRow> {
        let now = now_timestamp();
        let row = RecordingRow {
            id: RecordingId::new().into_inner(),
            session_id: new.session_id.to_string(),
            title: new.title.to_string(),
            summary: new.summary.map(str::to_string),
            doc_id: new.doc_id.to_string(),
            doc_url: new.doc_url.to_string(),
            created_at: now.clone(),
            updated_at: now,
        };
        let _ = conn.execute(
            &format!("INSERT INTO session_recordings ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
            params![
                row.id,
                row.session_id,
                row.title,
                row.summary,
                row.doc_id,
                row.doc_url,
                row.created_at,
                row.updated_at
            ],
        )?;
        Ok(row)
    }

    /// Get a recording by ID.
    pub fn get_by_id(conn: &Connection, id: &str) -> Result<Option<RecordingRow>> {
        let row = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM session_recordings WHERE id = ?1"),
                params![id],
                Self::map_row,
            )
            .optional()?;
        Ok(row)
    }

    /// All recordings, newest first.
    pub fn list(conn: &Connection) -> Result<Vec<RecordingRow>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM session_recordings ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt
            .query_map([], Self::map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Recordings of one session, newest first.
    pub fn list_for_session(conn: &Connection, session_id: &str) -> Result<Vec<RecordingRow>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM session_recordings WHERE session_id = ?1
             ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt
            .query_map(params![session_id], Self::map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RecordingRow> {
        Ok(RecordingRow {
            id: row.get(0)?,
            session_id: row.get(1)?,
            title: row.get(2)?,
            summary: row.get(3)?,
            doc_id: row.get(4)?,
            doc_url: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }
}
