//! `GET /api/next-session`.
//!
//! Errors here use `{"error": …}` bodies, and every failure (missing
//! configuration or upstream) is a 500.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rfv_google::GoogleError;
use rfv_google::calendar::MISSING_CONFIG_MESSAGE;
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};

use crate::server::AppState;

/// Message returned when the calendar has no upcoming events.
pub const NO_UPCOMING_MESSAGE: &str = "No upcoming sessions found.";

/// Successful next-session lookup.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum NextSession {
    /// The soonest upcoming event.
    Event {
        /// Event title.
        title: String,
        /// Start date, e.g. `Nov 28, 2025`.
        date: String,
        /// Link to the event.
        link: Option<String>,
    },
    /// No upcoming events.
    Empty {
        /// Always [`NO_UPCOMING_MESSAGE`].
        message: String,
    },
}

/// Failed next-session lookup.
#[derive(Debug)]
pub struct CalendarError(pub String);

impl IntoResponse for CalendarError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0 })),
        )
            .into_response()
    }
}

impl From<GoogleError> for CalendarError {
    fn from(err: GoogleError) -> Self {
        match err {
            GoogleError::MissingConfig(message) => {
                warn!(%message, "calendar not configured");
                Self(message)
            }
            other => {
                error!(error = %other, "calendar lookup failed");
                Self(other.to_string())
            }
        }
    }
}

/// GET /api/next-session
pub async fn next_session(State(state): State<AppState>) -> Result<Json<NextSession>, CalendarError> {
    let settings = state.calendar_settings.clone();
    let calendar_id = tokio::task::spawn_blocking(move || settings.resolve_calendar_id())
        .await
        .map_err(|e| CalendarError(format!("calendar task failed: {e}")))?;
    let Some(calendar_id) = calendar_id else {
        warn!("no calendar id in campaign file or settings");
        return Err(CalendarError(MISSING_CONFIG_MESSAGE.into()));
    };

    let response = match state.calendar.next_event(&calendar_id).await? {
        Some(event) => NextSession::Event {
            date: event.start.display_date(),
            title: event.title,
            link: event.link,
        },
        None => NextSession::Empty {
            message: NO_UPCOMING_MESSAGE.into(),
        },
    };
    Ok(Json(response))
}
