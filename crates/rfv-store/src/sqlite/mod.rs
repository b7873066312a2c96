//! `SQLite` backend.
//!
//! - **[`connection`]**: `r2d2` pool with WAL mode, foreign keys and busy
//!   timeout applied to every connection.
//! - **[`migrations`]**: version-tracked schema, embedded at compile time.
//! - **[`row_types`]**: row structs, which double as the wire shapes.
//! - **[`repositories`]**: stateless structs whose methods take `&Connection`.

pub mod connection;
pub mod migrations;
pub mod repositories;
pub mod row_types;

pub use connection::{ConnectionConfig, ConnectionPool, PooledConnection};
pub use migrations::{current_version, latest_version, run_migrations};
