//! Session and attribute endpoints.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use rfv_core::time::parse_timestamp;
use rfv_store::{AttributeRow, NewSession, SessionRow};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::with_store;
use crate::error::ApiError;
use crate::server::AppState;

/// Body of `POST /api/sessions`.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// Session title.
    pub title: String,
    /// Scheduled start, RFC 3339 or a naive date/date-time (taken as UTC).
    #[serde(default)]
    pub scheduled_at: Option<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body of `POST /api/sessions/{id}/attributes`.
#[derive(Debug, Deserialize)]
pub struct UpsertAttributeRequest {
    /// Attribute key, unique per session.
    pub key: String,
    /// Any JSON value. Absent means `null`.
    #[serde(default)]
    pub value: Value,
}

/// POST /api/sessions
pub async fn create_session(
    State(state): State<AppState>,
    payload: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Result<Json<SessionRow>, ApiError> {
    let Json(req) = payload?;
    let scheduled_at = match req.scheduled_at.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(raw) => Some(
            parse_timestamp(raw)
                .ok_or_else(|| ApiError::InvalidInput(format!("invalid scheduled_at: {raw:?}")))?,
        ),
        None => None,
    };
    let session = with_store(&state.store, move |store| {
        store.create_session(&NewSession {
            title: &req.title,
            scheduled_at,
            notes: req.notes.as_deref(),
        })
    })
    .await?;
    Ok(Json(session))
}

/// GET /api/sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<SessionRow>>, ApiError> {
    with_store(&state.store, |store| store.list_sessions())
        .await
        .map(Json)
}

/// GET /api/sessions/{session_id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionRow>, ApiError> {
    with_store(&state.store, move |store| store.get_session(&session_id))
        .await?
        .map(Json)
        .ok_or_else(ApiError::session_not_found)
}

/// GET /api/sessions/{session_id}/attributes
pub async fn list_attributes(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<AttributeRow>>, ApiError> {
    with_store(&state.store, move |store| store.list_attributes(&session_id))
        .await
        .map(Json)
}

/// POST /api/sessions/{session_id}/attributes
pub async fn upsert_attribute(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    payload: Result<Json<UpsertAttributeRequest>, JsonRejection>,
) -> Result<Json<AttributeRow>, ApiError> {
    let Json(req) = payload?;
    if req.key.trim().is_empty() {
        return Err(ApiError::InvalidInput("key must not be empty".into()));
    }
    let outcome = with_store(&state.store, move |store| {
        store.upsert_attribute(&session_id, &req.key, &req.value)
    })
    .await?;
    debug!(
        attribute_id = %outcome.attribute.id,
        created = outcome.created,
        "attribute written"
    );
    Ok(Json(outcome.attribute))
}
