//! # rfv-google
//!
//! Clients for the two Google services the RollForVibes backend talks to:
//!
//! - [`docs`]: creates a Google Doc for a recording, inserts its summary and
//!   shares it publicly ([`DocumentPublisher`]).
//! - [`calendar`]: finds the next upcoming event on a calendar
//!   ([`CalendarReader`]).
//!
//! Both are exposed as traits so the HTTP layer can be exercised with fakes.
//! Docs/Drive calls authenticate with a service account ([`auth`]); Calendar
//! reads use an API key.

#![deny(unsafe_code)]

pub mod auth;
pub mod calendar;
pub mod docs;
pub mod errors;

pub use auth::{ServiceAccountAuth, ServiceAccountKey};
pub use calendar::{CalendarEvent, CalendarReader, EventStart, GoogleCalendarReader};
pub use docs::{DocumentPublisher, GoogleDocsPublisher, PublishedDocument, document_url};
pub use errors::{GoogleError, Result};

/// Build the shared HTTP client.
///
/// No request timeout is set; a slow Google call holds its request open.
pub fn http_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().build()?)
}

/// Turn a non-2xx response into [`GoogleError::Api`], extracting Google's
/// `error.message` when present.
pub(crate) async fn check_status(
    response: reqwest::Response,
    context: &str,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or(body);
    Err(GoogleError::Api {
        status: status.as_u16(),
        message: format!("{context}: {detail}"),
    })
}
