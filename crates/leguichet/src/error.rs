//! Server lifecycle errors

use thiserror::Error;

/// Errors raised while configuring or running the HTTP server.
///
/// Request-level failures never reach this type; they classify as a
/// `FactorOutcome` and answer with a response body instead.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Could not bind the listen address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address the bind was attempted on.
        addr: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Serving failed after startup.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_carries_the_reason() {
        let err = ServeError::InvalidConfig("Port cannot be zero".to_string());
        assert!(err.to_string().contains("Port cannot be zero"));
    }

    #[test]
    fn bind_error_names_the_address() {
        let err = ServeError::Bind {
            addr: "127.0.0.1:5000".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        };
        assert!(err.to_string().contains("127.0.0.1:5000"));
    }
}
