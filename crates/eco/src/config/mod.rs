//! Runtime settings shared by the HTTP service and the terminal commands.
//!
//! Values come from `.env` and the process environment:
//! `ECO_ENV`, `ECO_HOST`, `ECO_PORT` and `ECO_LOG_LEVEL`.

use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const ENV_KEY: &str = "ECO_ENV";
const HOST_KEY: &str = "ECO_HOST";
const PORT_KEY: &str = "ECO_PORT";
const LOG_LEVEL_KEY: &str = "ECO_LOG_LEVEL";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Front end being started. Terminal commands share stdout with the respondent,
/// so they stay quiet unless a level is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Serve,
    Terminal,
}

impl RunMode {
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Serve => "info",
            Self::Terminal => "warn",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Read `.env`, then the process environment.
    pub fn load(mode: RunMode) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(mode, |key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(mode: RunMode, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup(ENV_KEY)
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or(AppEnvironment::Development);

        let host = lookup(HOST_KEY).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(PORT_KEY) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };

        let log_level = lookup(LOG_LEVEL_KEY)
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| mode.default_log_level().to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Apply `--host` / `--port` given on the command line.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost {
                    host: self.host.clone(),
                    source,
                })?
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filter used when `RUST_LOG` is not set.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort {
        value: String,
    },
    InvalidHost {
        host: String,
        source: std::net::AddrParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort { value } => {
                write!(f, "{PORT_KEY} must be a port number, got '{value}'")
            }
            ConfigError::InvalidHost { host, .. } => {
                write!(f, "{HOST_KEY} '{host}' is neither localhost nor an IP address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort { .. } => None,
            ConfigError::InvalidHost { source, .. } => Some(source),
        }
    }
}
