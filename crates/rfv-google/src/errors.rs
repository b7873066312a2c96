//! Error types for the Google clients.

use thiserror::Error;

/// Errors from Google API calls.
#[derive(Debug, Error)]
pub enum GoogleError {
    /// Required configuration (credentials, API key, calendar id) is absent.
    #[error("{0}")]
    MissingConfig(String),

    /// Service-account credentials could not be read or parsed.
    #[error("invalid service account credentials: {0}")]
    Credentials(String),

    /// The OAuth token exchange failed.
    #[error("google auth failed: {message}")]
    Auth {
        /// Upstream description.
        message: String,
    },

    /// A Google API returned a non-success status.
    #[error("google api error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Upstream description.
        message: String,
    },

    /// Transport failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to sign the token assertion.
    #[error("failed to sign JWT: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// A response was missing expected fields.
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

/// Result alias for Google operations.
pub type Result<T> = std::result::Result<T, GoogleError>;
