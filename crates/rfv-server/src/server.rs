//! `RfvServer`: axum router and listener.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use rfv_google::{CalendarReader, DocumentPublisher};
use rfv_settings::CalendarSettings;
use rfv_store::Store;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{ServerConfig, Service};
use crate::handlers::{calendar, recordings, sessions};
use crate::health::health_handler;

/// Shared state accessible from axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Session, attribute and recording storage.
    pub store: Store,
    /// Creates the document behind each recording.
    pub publisher: Arc<dyn DocumentPublisher>,
    /// Looks up the next calendar event.
    pub calendar: Arc<dyn CalendarReader>,
    /// Where the calendar id comes from.
    pub calendar_settings: Arc<CalendarSettings>,
}

/// Build the router for the selected services.
///
/// `/api/health` is always routed. CORS is fully permissive.
pub fn build_router(state: AppState, services: &[Service]) -> Router {
    let mut router = Router::new().route("/api/health", get(health_handler));

    if services.contains(&Service::Sessions) {
        router = router
            .route(
                "/api/sessions",
                get(sessions::list_sessions).post(sessions::create_session),
            )
            .route("/api/sessions/{session_id}", get(sessions::get_session))
            .route(
                "/api/sessions/{session_id}/attributes",
                get(sessions::list_attributes).post(sessions::upsert_attribute),
            );
    }
    if services.contains(&Service::Recordings) {
        router = router
            .route(
                "/api/recordings",
                get(recordings::list_recordings).post(recordings::create_recording),
            )
            .route(
                "/api/recordings/session/{session_id}",
                get(recordings::list_session_recordings),
            );
    }
    if services.contains(&Service::Calendar) {
        router = router.route("/api/next-session", get(calendar::next_session));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The RollForVibes HTTP server.
pub struct RfvServer {
    config: ServerConfig,
    state: AppState,
}

impl RfvServer {
    /// Create a new server.
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Build the router for the configured services.
    pub fn router(&self) -> Router {
        build_router(self.state.clone(), &self.config.services)
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind and serve until `shutdown` resolves.
    pub async fn serve(self, shutdown: impl Future<Output = ()> + Send + 'static) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr()).await?;
        let services: Vec<&str> = self.config.services.iter().map(|s| s.as_str()).collect();
        info!(addr = %listener.local_addr()?, ?services, "listening");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
    }
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                let _ = sig.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown signal received");
}
