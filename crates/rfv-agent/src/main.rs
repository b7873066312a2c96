//! # rfv-agent
//!
//! RollForVibes services binary: loads settings, opens the store, builds the
//! Google collaborators and serves the selected HTTP services.

#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rfv_google::{GoogleCalendarReader, GoogleDocsPublisher};
use rfv_server::server::shutdown_signal;
use rfv_server::{AppState, RfvServer, ServerConfig, Service};
use rfv_settings::RfvSettings;
use rfv_store::{ConnectionConfig, Store};

/// Services selected on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Services(Vec<Service>);

fn parse_services(raw: &str) -> Result<Services, String> {
    Service::parse_selection(raw).map(Services)
}

/// RollForVibes backend services.
#[derive(Parser, Debug)]
#[command(name = "rfv-agent", about = "RollForVibes session, recording and calendar services")]
struct Cli {
    /// Which service to expose: sessions, recordings, calendar or all.
    #[arg(long, default_value = "all", value_parser = parse_services)]
    service: Services,

    /// Host to bind (overrides settings).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides settings and `PORT`).
    #[arg(long)]
    port: Option<u16>,

    /// Path to the `SQLite` database (overrides settings and `RFV_DB_PATH`).
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Settings file (default `~/.rollforvibes/settings.json`).
    #[arg(long)]
    settings: Option<PathBuf>,
}

impl Cli {
    /// Load settings and apply command-line overrides on top.
    fn resolve_settings(&self) -> Result<RfvSettings> {
        let path = self
            .settings
            .clone()
            .unwrap_or_else(rfv_settings::settings_path);
        let mut settings = rfv_settings::load_settings_from_path(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?;
        self.apply_overrides(&mut settings);
        Ok(settings)
    }

    fn apply_overrides(&self, settings: &mut RfvSettings) {
        if let Some(ref host) = self.host {
            settings.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if let Some(ref db_path) = self.db_path {
            settings.database.path = Some(db_path.to_string_lossy().into_owned());
        }
    }

    fn server_config(&self, settings: &RfvSettings) -> ServerConfig {
        ServerConfig {
            services: self.service.0.clone(),
            ..ServerConfig::from_settings(&settings.server)
        }
    }
}

fn open_store(settings: &RfvSettings) -> Result<Store> {
    let path = settings.database.resolved_path();
    let config = ConnectionConfig {
        pool_size: settings.database.pool_size,
        busy_timeout_ms: settings.database.busy_timeout_ms,
    };
    Store::open(&path, &config)
        .with_context(|| format!("Failed to open database at {}", path.display()))
}

fn build_state(settings: &RfvSettings, store: Store) -> Result<AppState> {
    let client = rfv_google::http_client().context("Failed to build HTTP client")?;
    Ok(AppState {
        store,
        publisher: Arc::new(GoogleDocsPublisher::new(client.clone(), &settings.google)),
        calendar: Arc::new(GoogleCalendarReader::new(client, &settings.google)),
        calendar_settings: Arc::new(settings.calendar.clone()),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.resolve_settings()?;
    rfv_logging::init_subscriber(&settings.logging);

    let store = open_store(&settings)?;
    let state = build_state(&settings, store)?;
    let config = cli.server_config(&settings);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        db = %settings.database.resolved_path().display(),
        "starting rfv-agent"
    );
    RfvServer::new(config, state)
        .serve(shutdown_signal())
        .await
        .context("Server failed")?;
    tracing::info!("server stopped");
    Ok(())
}
