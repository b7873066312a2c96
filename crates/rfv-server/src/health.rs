//! `/api/health` endpoint.

use axum::Json;
use axum::extract::State;
use rfv_store::Store;
use serde::Serialize;
use tracing::warn;

use crate::error::ApiError;
use crate::server::AppState;

/// Health check response body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Always `"ok"` when returned.
    pub status: String,
    /// Always `"reachable"` when returned.
    pub database: String,
}

/// Probe the store with `SELECT 1`.
pub fn health_check(store: &Store) -> Result<HealthResponse, ApiError> {
    match store.ping() {
        Ok(()) => Ok(HealthResponse {
            status: "ok".into(),
            database: "reachable".into(),
        }),
        Err(error) => {
            warn!(%error, "health check failed");
            Err(ApiError::Internal("database unreachable".into()))
        }
    }
}

/// GET /api/health
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || health_check(&store))
        .await
        .map_err(|e| ApiError::Internal(format!("health task failed: {e}")))?
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_store_is_ok() {
        let store = Store::open_in_memory().unwrap();
        let resp = health_check(&store).unwrap();
        assert_eq!(resp.status, "ok");
        assert_eq!(resp.database, "reachable");
    }

    #[test]
    fn serialization() {
        let store = Store::open_in_memory().unwrap();
        let json = serde_json::to_value(health_check(&store).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "ok", "database": "reachable" }));
    }
}
