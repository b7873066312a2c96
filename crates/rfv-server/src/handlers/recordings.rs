//! Recording endpoints.
//!
//! Creating a recording publishes its document first and persists the row
//! only after the publisher succeeds.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use rfv_store::{NewRecording, RecordingRow};
use serde::Deserialize;
use tracing::{Span, info, instrument};

use super::with_store;
use crate::error::ApiError;
use crate::server::AppState;

/// Body of `POST /api/recordings`.
#[derive(Debug, Deserialize)]
pub struct CreateRecordingRequest {
    /// Owning session.
    pub session_id: String,
    /// Document title.
    pub title: String,
    /// Text inserted at the top of the document.
    #[serde(default)]
    pub summary: Option<String>,
}

/// POST /api/recordings
#[instrument(skip_all, fields(session_id = tracing::field::Empty))]
pub async fn create_recording(
    State(state): State<AppState>,
    payload: Result<Json<CreateRecordingRequest>, JsonRejection>,
) -> Result<Json<RecordingRow>, ApiError> {
    let Json(req) = payload?;
    let _ = Span::current().record("session_id", req.session_id.as_str());
    let session_id = req.session_id.clone();
    if !with_store(&state.store, move |store| store.session_exists(&session_id)).await? {
        return Err(ApiError::session_not_found());
    }

    let doc = state
        .publisher
        .publish(&req.title, req.summary.as_deref())
        .await
        .map_err(|e| ApiError::Upstream(format!("Failed to create document: {e}")))?;
    info!(doc_id = %doc.doc_id, "document published");

    let recording = with_store(&state.store, move |store| {
        store.create_recording(&NewRecording {
            session_id: &req.session_id,
            title: &req.title,
            summary: req.summary.as_deref(),
            doc_id: &doc.doc_id,
            doc_url: &doc.doc_url,
        })
    })
    .await?;
    Ok(Json(recording))
}

/// GET /api/recordings
pub async fn list_recordings(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordingRow>>, ApiError> {
    with_store(&state.store, |store| store.list_recordings())
        .await
        .map(Json)
}

/// GET /api/recordings/session/{session_id}
pub async fn list_session_recordings(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<RecordingRow>>, ApiError> {
    with_store(&state.store, move |store| {
        store.list_recordings_for_session(&session_id)
    })
    .await
    .map(Json)
}
