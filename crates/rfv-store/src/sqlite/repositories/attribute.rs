//! Session attribute repository, the keyed store behind `session_attributes`.
//!
//! At most one row exists per `(session_id, key)`. Upserts rely on the
//! table's unique constraint (`ON CONFLICT … DO UPDATE`) rather than a
//! read-then-write, so concurrent writers to one key cannot create
//! duplicates; the last commit wins.

use rfv_core::time::now_timestamp;
use rfv_core::{AttributeId, ValueKind, classify};
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;
use tracing::debug;

use super::parse_column;
use crate::errors::Result;
use crate::sqlite::row_types::AttributeRow;

const COLUMNS: &str = "id, session_id, key, value, value_type, updated_at";

/// Result of [`AttributeRepo::upsert`].
#[derive(Clone, Debug, PartialEq)]
pub struct UpsertOutcome {
    /// The stored attribute after the write.
    pub attribute: AttributeRow,
    /// Whether the key was new for this session.
    pub created: bool,
}

/// Attribute repository. Stateless; every method takes `&Connection`.
pub struct AttributeRepo;

impl AttributeRepo {
    /// Create or replace the attribute `key` of a session.
    ///
    /// An existing row keeps its ID; its value, kind and timestamp are
    /// replaced. The session must exist (enforced by the foreign key).
    pub fn upsert(
        conn: &Connection,
        session_id: &str,
        key: &str,
        value: &Value,
    ) -> Result<UpsertOutcome> {
        let candidate_id = AttributeId::new().into_inner();
        let kind = classify(value);
        let encoded = serde_json::to_string(value)?;
        let now = now_timestamp();

        let attribute = conn.query_row(
            &format!(
                "INSERT INTO session_attributes (id, session_id, key, value, value_type, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT (session_id, key) DO UPDATE SET
                     value = excluded.value,
                     value_type = excluded.value_type,
                     updated_at = excluded.updated_at
                 RETURNING {COLUMNS}"
            ),
            params![candidate_id, session_id, key, encoded, kind.as_str(), now],
            Self::map_row,
        )?;
        let created = attribute.id == candidate_id;
        debug!(session_id, key, kind = %kind, created, "attribute upserted");
        Ok(UpsertOutcome { attribute, created })
    }

    /// Get one attribute by session and key.
    pub fn get(conn: &Connection, session_id: &str, key: &str) -> Result<Option<AttributeRow>> {
        let row = conn
            .query_row(
                &format!(
                    "SELECT {COLUMNS} FROM session_attributes WHERE session_id = ?1 AND key = ?2"
                ),
                params![session_id, key],
                Self::map_row,
            )
            .optional()?;
        Ok(row)
    }

    /// All attributes of a session, ordered by key.
    pub fn list_for_session(conn: &Connection, session_id: &str) -> Result<Vec<AttributeRow>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM session_attributes WHERE session_id = ?1 ORDER BY key ASC"
        ))?;
        let rows = stmt
            .query_map(params![session_id], Self::map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AttributeRow> {
        Ok(AttributeRow {
            id: row.get(0)?,
            session_id: row.get(1)?,
            key: row.get(2)?,
            value: parse_column(row, 3, |s| serde_json::from_str::<Value>(s))?,
            value_type: parse_column(row, 4, |s| s.parse::<ValueKind>())?,
            updated_at: row.get(5)?,
        })
    }
}
