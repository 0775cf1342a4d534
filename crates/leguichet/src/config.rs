//! Server configuration from environment

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Default host address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port number, kept from the original deployment
pub const DEFAULT_PORT: u16 = 5000;

/// Default CORS origins (local frontend development)
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

/// Server configuration loaded from defaults and environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Allowed CORS origins
    pub cors_origins: Vec<String>,

    /// Log level for tracing
    pub log_level: String,

    /// Optional wall-clock budget for one factoring run, in milliseconds
    pub oracle_timeout_ms: Option<u64>,

    /// Qubit capacity requested from the simulation runtime
    pub max_qubits: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            log_level: "info".to_string(),
            oracle_timeout_ms: None,
            max_qubits: loracle::runtime::DEFAULT_MAX_QUBITS,
        }
    }
}

impl ServerConfig {
    /// Load config from environment variables with fallback to defaults
    ///
    /// Environment variables:
    /// - `LEGUICHET_HOST` - Server host
    /// - `LEGUICHET_PORT` - Server port
    /// - `LEGUICHET_LOG_LEVEL` - Log level (trace, debug, info, warn, error)
    /// - `LEGUICHET_ORACLE_TIMEOUT_MS` - Per-request factoring budget
    /// - `LEGUICHET_MAX_QUBITS` - Simulator capacity
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("LEGUICHET_HOST") {
            config.host = host;
        }

        if let Ok(port_str) = std::env::var("LEGUICHET_PORT") {
            if let Ok(port) = port_str.parse::<u16>() {
                config.port = port;
            }
        }

        if let Ok(log_level) = std::env::var("LEGUICHET_LOG_LEVEL") {
            config.log_level = log_level;
        }

        if let Ok(timeout_str) = std::env::var("LEGUICHET_ORACLE_TIMEOUT_MS") {
            if let Ok(timeout_ms) = timeout_str.parse::<u64>() {
                config.oracle_timeout_ms = Some(timeout_ms);
            }
        }

        if let Ok(qubits_str) = std::env::var("LEGUICHET_MAX_QUBITS") {
            if let Ok(max_qubits) = qubits_str.parse::<u32>() {
                config.max_qubits = max_qubits;
            }
        }

        config
    }

    /// Get the socket address for the server
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {}", e))
    }

    /// Get the full server URL
    #[must_use]
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be zero".to_string());
        }

        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.max_qubits == 0 {
            return Err("Simulator capacity must be greater than zero".to_string());
        }

        if self.oracle_timeout_ms == Some(0) {
            return Err("Oracle timeout must be greater than zero".to_string());
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.log_level
                ));
            }
        }

        Ok(())
    }
}
