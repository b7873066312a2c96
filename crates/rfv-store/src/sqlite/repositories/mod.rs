//! Repositories for `SQLite` operations.
//!
//! Each repository is a stateless struct whose methods take `&Connection`,
//! so every operation runs on whatever connection or transaction the caller
//! hands it.

pub mod attribute;
pub mod recording;
pub mod session;

/// Parse a TEXT column into a typed value, reporting failures as a column
/// conversion error.
pub(crate) fn parse_column<T, E, F>(row: &rusqlite::Row<'_>, idx: usize, parse: F) -> rusqlite::Result<T>
where
    F: FnOnce(&str) -> std::result::Result<T, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    let raw: String = row.get(idx)?;
    parse(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, e.into())
    })
}
