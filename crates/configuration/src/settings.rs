use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub strategy_service: StrategyServiceConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Where the strategy service listens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on the size of an incoming request body.
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            body_limit_bytes: 10 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// The socket address to bind, if `host` is a literal IP address.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse().ok()
    }
}

/// How the orchestrator reaches the strategy service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrategyServiceConfig {
    /// The full URL of the processing endpoint.
    pub url: String,
    /// Hard limit for one round-trip to the service.
    pub timeout_secs: u64,
}

impl Default for StrategyServiceConfig {
    fn default() -> Self {
        Self {
            url: "http://strategy-service.strategy.svc.cluster.local/strategy".to_string(),
            timeout_secs: 30,
        }
    }
}

impl StrategyServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Connection pool settings. The connection string itself comes from `DATABASE_URL`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// How many records a run fetches when the caller does not say.
    pub default_limit: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout_secs: 5,
            default_limit: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "strategy-agent.log".to_string(),
        }
    }
}
