//! Transactional [`Store`] facade over the repositories.
//!
//! Each public method acquires one pooled connection, runs inside one
//! transaction and returns the connection to the pool on every exit path.
//! A transaction that is dropped without commit rolls back.

use std::path::Path;

use rusqlite::{Connection, Transaction, TransactionBehavior};
use serde_json::Value;
use tracing::{info, instrument};

use crate::errors::{Result, StoreError};
use crate::sqlite::connection::{self, ConnectionConfig, ConnectionPool, PooledConnection};
use crate::sqlite::migrations::run_migrations;
use crate::sqlite::repositories::attribute::{AttributeRepo, UpsertOutcome};
use crate::sqlite::repositories::recording::{NewRecording, RecordingRepo};
use crate::sqlite::repositories::session::{NewSession, SessionRepo};
use crate::sqlite::row_types::{AttributeRow, RecordingRow, SessionRow};

/// Handle to the session database. Cheap to clone; clones share the pool.
#[derive(Clone)]
pub struct Store {
    pool: ConnectionPool,
}

impl Store {
    /// Wrap an existing pool. Migrations are not run.
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) a database file and bring its schema up to date.
    pub fn open(path: &Path, config: &ConnectionConfig) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let store = Self::new(connection::new_file(path, config)?);
        store.migrate()?;
        info!(path = %path.display(), "store opened");
        Ok(store)
    }

    /// Open a private in-memory database with the schema applied.
    pub fn open_in_memory() -> Result<Self> {
        let store = Self::new(connection::new_in_memory(&ConnectionConfig::default())?);
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<u32> {
        let conn = self.conn()?;
        run_migrations(&conn)
    }

    fn conn(&self) -> Result<PooledConnection> {
        Ok(self.pool.get()?)
    }

    /// Run `f` on a pooled connection without a transaction.
    pub fn read<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self.conn()?;
        f(&conn)
    }

    /// Run `f` inside an immediate transaction, committing only if it succeeds.
    ///
    /// The write lock is taken up front so a read inside `f` never has to be
    /// upgraded under contention.
    pub fn write<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self.conn()?;
        let tx = Transaction::new_unchecked(&conn, TransactionBehavior::Immediate)?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }

    /// Round-trip `SELECT 1` through the pool.
    pub fn ping(&self) -> Result<()> {
        self.read(|conn| {
            let _: i64 = conn.query_row("SELECT 1", [], |row| row.get(0))?;
            Ok(())
        })
    }

    // ── Sessions ────────────────────────────────────────────────────

    /// Create a session.
    #[instrument(skip(self, new), fields(title = new.title))]
    pub fn create_session(&self, new: &NewSession<'_>) -> Result<SessionRow> {
        let session = self.write(|conn| SessionRepo::create(conn, new))?;
        info!(session_id = %session.id, "session created");
        Ok(session)
    }

    /// Get a session by ID.
    pub fn get_session(&self, session_id: &str) -> Result<Option<SessionRow>> {
        self.read(|conn| SessionRepo::get_by_id(conn, session_id))
    }

    /// Whether a session exists.
    pub fn session_exists(&self, session_id: &str) -> Result<bool> {
        self.read(|conn| SessionRepo::exists(conn, session_id))
    }

    /// All sessions, latest scheduled first, unscheduled last.
    pub fn list_sessions(&self) -> Result<Vec<SessionRow>> {
        self.read(SessionRepo::list)
    }

    // ── Attributes ──────────────────────────────────────────────────

    /// Attributes of a session ordered by key.
    ///
    /// Fails with [`StoreError::SessionNotFound`] if the session is absent.
    pub fn list_attributes(&self, session_id: &str) -> Result<Vec<AttributeRow>> {
        self.read(|conn| {
            require_session(conn, session_id)?;
            AttributeRepo::list_for_session(conn, session_id)
        })
    }

    /// Create or replace one attribute of a session.
    ///
    /// Fails with [`StoreError::SessionNotFound`] before writing anything if
    /// the session is absent.
    #[instrument(skip(self, value))]
    pub fn upsert_attribute(
        &self,
        session_id: &str,
        key: &str,
        value: &Value,
    ) -> Result<UpsertOutcome> {
        self.write(|conn| {
            require_session(conn, session_id)?;
            AttributeRepo::upsert(conn, session_id, key, value)
        })
    }

    // ── Recordings ──────────────────────────────────────────────────

    /// Persist a recording for a published document.
    ///
    /// Fails with [`StoreError::SessionNotFound`] if the session is absent.
    #[instrument(skip(self, new), fields(session_id = new.session_id, doc_id = new.doc_id))]
    pub fn create_recording(&self, new: &NewRecording<'_>) -> Result<RecordingRow> {
        let recording = self.write(|conn| {
            require_session(conn, new.session_id)?;
            RecordingRepo::create(conn, new)
        })?;
        info!(recording_id = %recording.id, "recording stored");
        Ok(recording)
    }

    /// All recordings, newest first.
    pub fn list_recordings(&self) -> Result<Vec<RecordingRow>> {
        self.read(RecordingRepo::list)
    }

    /// Recordings of one session, newest first. Unknown sessions yield an
    /// empty list.
    pub fn list_recordings_for_session(&self, session_id: &str) -> Result<Vec<RecordingRow>> {
        self.read(|conn| RecordingRepo::list_for_session(conn, session_id))
    }
}

fn require_session(conn: &Connection, session_id: &str) -> Result<()> {
    if SessionRepo::exists(conn, session_id)? {
        Ok(())
    } else {
        Err(StoreError::SessionNotFound(session_id.to_string()))
    }
}
