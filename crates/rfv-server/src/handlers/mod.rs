//! Route handlers, one module per service.

pub mod calendar;
pub mod recordings;
pub mod sessions;

use rfv_store::Store;

use crate::error::ApiError;

/// Run blocking store work off the async runtime.
pub(crate) async fn with_store<T, F>(store: &Store, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&Store) -> rfv_store::Result<T> + Send + 'static,
{
    let store = store.clone();
    tokio::task::spawn_blocking(move || f(&store))
        .await
        .map_err(|e| ApiError::Internal(format!("store task failed: {e}")))?
        .map_err(ApiError::from)
}
