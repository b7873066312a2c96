//! # rfv-store
//!
//! Relational storage for the RollForVibes services: sessions, per-session
//! attributes (a keyed JSON store with idempotent upsert) and recordings
//! that reference externally published documents.
//!
//! ## Architecture
//!
//! - **[`sqlite`]**: connection pool, migrations, row types and stateless
//!   repositories that take `&Connection`.
//! - **[`store`]**: the [`Store`] facade. Every public operation acquires one
//!   pooled connection and runs in one transaction.
//!
//! Attribute values are JSON; each row also carries the [`ValueKind`] of its
//! value, recomputed on every write.
//!
//! [`ValueKind`]: rfv_core::ValueKind

#![deny(unsafe_code)]

pub mod errors;
pub mod sqlite;
pub mod store;

pub use errors::{Result, StoreError};
pub use sqlite::connection::ConnectionConfig;
pub use sqlite::repositories::attribute::UpsertOutcome;
pub use sqlite::repositories::recording::NewRecording;
pub use sqlite::repositories::session::NewSession;
pub use sqlite::row_types::{AttributeRow, RecordingRow, SessionRow};
pub use store::Store;
