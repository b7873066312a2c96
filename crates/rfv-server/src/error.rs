//! HTTP error mapping for the session and recording services.
//!
//! Bodies are `{"detail": "<message>"}`. The calendar service has its own
//! `{"error": …}` shape, see [`crate::handlers::calendar`].

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rfv_store::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Failure of one request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Referenced record is absent.
    #[error("{0}")]
    NotFound(String),

    /// Request passed JSON decoding but is semantically invalid.
    #[error("{0}")]
    InvalidInput(String),

    /// An external collaborator failed.
    #[error("{0}")]
    Upstream(String),

    /// Store or runtime failure.
    #[error("{0}")]
    Internal(String),

    /// Body was not acceptable JSON for the endpoint.
    #[error("{message}")]
    Body {
        /// 400, 415 or 422, as decided by the extractor.
        status: StatusCode,
        /// Extractor description.
        message: String,
    },
}

impl ApiError {
    /// Status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Body { status, .. } => *status,
        }
    }

    /// The 404 returned for an unknown session.
    pub fn session_not_found() -> Self {
        Self::NotFound("Session not found".into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        if err.is_not_found() {
            return Self::session_not_found();
        }
        Self::Internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(message) => error!(%message, "request failed"),
            Self::Upstream(message) => warn!(%message, "upstream call failed"),
            Self::NotFound(_) | Self::InvalidInput(_) | Self::Body { .. } => {}
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
