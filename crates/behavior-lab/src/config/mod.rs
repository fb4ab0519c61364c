use secrecy::Secret;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub advisor: AdvisorConfig,
    pub directory: DirectoryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let advisor = AdvisorConfig::from_env()?;
        let directory = DirectoryConfig {
            roster_csv: non_empty_var("MEMBER_DIRECTORY_CSV").map(PathBuf::from),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            advisor,
            directory,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

pub const DEFAULT_ADVISOR_MODEL: &str = "gpt-4o-mini";
const DEFAULT_ADVISOR_TIMEOUT_SECS: u64 = 30;

/// Upstream completion API settings for the chat advisor.
///
/// The URL and key are optional at load time: a missing value surfaces as a
/// configuration error on the advisor route instead of stopping the service.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub api_url: Option<String>,
    pub api_key: Option<Secret<String>>,
    pub default_model: String,
    pub timeout: Duration,
}

impl AdvisorConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = match non_empty_var("OPENAI_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout)?,
            None => DEFAULT_ADVISOR_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url: non_empty_var("OPENAI_API_URL"),
            api_key: non_empty_var("OPENAI_API_KEY").map(Secret::new),
            default_model: non_empty_var("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_ADVISOR_MODEL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            default_model: DEFAULT_ADVISOR_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_ADVISOR_TIMEOUT_SECS),
        }
    }
}

/// Where the member directory is seeded from.
#[derive(Debug, Clone, Default)]
pub struct DirectoryConfig {
    /// Optional roster export; the built-in seed is used when absent.
    pub roster_csv: Option<PathBuf>,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "OPENAI_TIMEOUT_SECS must be a positive number of seconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidTimeout => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
