//! Server instance management

use std::net::SocketAddr;
use std::time::Duration;

use tokio::signal;
use tracing::{error, info};

use lefacteur::FactorEngine;
use loracle::{initialize_with_capacity, ShorSimulator};

use crate::config::ServerConfig;
use crate::error::ServeError;
use crate::handlers::{create_router, AppState};

/// LeGuichet HTTP server.
///
/// Owns the oracle runtime handle and the process-wide factoring engine, and
/// manages bind, serve, and graceful shutdown.
pub struct LeGuichetServer {
    config: ServerConfig,
    state: AppState<ShorSimulator>,
}

impl LeGuichetServer {
    /// Initialize the oracle runtime and build a server instance.
    ///
    /// The runtime initialization is the one-time startup side effect; the
    /// resulting handle is injected into the engine and never touched again.
    pub fn new(config: ServerConfig) -> Result<Self, ServeError> {
        config.validate().map_err(ServeError::InvalidConfig)?;

        let handle = initialize_with_capacity(config.max_qubits);
        let mut engine = FactorEngine::new(ShorSimulator::new(handle));
        if let Some(timeout_ms) = config.oracle_timeout_ms {
            engine = engine.with_timeout(Duration::from_millis(timeout_ms));
        }

        let state = AppState::new(engine, config.clone());
        Ok(Self { config, state })
    }

    /// Socket address the server binds.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServeError> {
        self.config.socket_addr().map_err(ServeError::InvalidConfig)
    }

    /// Server URL for operators.
    #[must_use]
    pub fn server_url(&self) -> String {
        self.config.server_url()
    }

    /// Bind and serve until a shutdown signal arrives.
    pub async fn start(&self) -> Result<(), ServeError> {
        let addr = self.socket_addr()?;
        let app = create_router(self.state.clone());

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|source| {
            error!(%addr, error = %source, "failed to bind listen address");
            ServeError::Bind {
                addr: addr.to_string(),
                source,
            }
        })?;

        info!("server listening on {}", self.server_url());

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(ServeError::Serve)
    }
}

/// Resolves when Ctrl+C or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("received shutdown signal");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix;
        match unix::signal(unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("received TERM signal");
            }
            Err(err) => {
                error!(error = %err, "failed to install TERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_builds_from_default_config() {
        let server = LeGuichetServer::new(ServerConfig::default());
        assert!(server.is_ok());
    }

    #[test]
    fn server_rejects_invalid_config() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let err = LeGuichetServer::new(config).err().expect("must fail");
        assert!(matches!(err, ServeError::InvalidConfig(_)));
    }

    #[test]
    fn server_reports_its_url() {
        let server = LeGuichetServer::new(ServerConfig::default()).expect("default config");
        assert_eq!(server.server_url(), "http://127.0.0.1:5000");
        assert!(server.socket_addr().is_ok());
    }
}
