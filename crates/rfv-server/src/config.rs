//! Server configuration.

use std::fmt;
use std::str::FromStr;

use rfv_settings::ServerSettings;

/// One of the services a process can expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    /// Sessions and session attributes.
    Sessions,
    /// Recording publication and listing.
    Recordings,
    /// Next-session calendar lookup.
    Calendar,
}

impl Service {
    /// Every service, in routing order.
    pub const ALL: [Self; 3] = [Self::Sessions, Self::Recordings, Self::Calendar];

    /// Parse a service selector. `all` expands to every service.
    pub fn parse_selection(raw: &str) -> Result<Vec<Self>, String> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::ALL.to_vec());
        }
        raw.parse().map(|s| vec![s])
    }

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sessions => "sessions",
            Self::Recordings => "recordings",
            Self::Calendar => "calendar",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sessions" => Ok(Self::Sessions),
            "recordings" => Ok(Self::Recordings),
            "calendar" => Ok(Self::Calendar),
            other => Err(format!(
                "unknown service {other:?} (expected sessions, recordings, calendar or all)"
            )),
        }
    }
}

/// Listener configuration for one process.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host to bind.
    pub host: String,
    /// Port to bind. `0` picks a free port.
    pub port: u16,
    /// Services to route.
    pub services: Vec<Service>,
}

impl ServerConfig {
    /// Config serving every service on the configured listener.
    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self {
            host: settings.host.clone(),
            port: settings.port,
            services: Service::ALL.to_vec(),
        }
    }

    /// `host:port` for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            services: Service::ALL.to_vec(),
        }
    }
}
