//! leguichet - HTTP Factoring Service
//!
//! *Le Guichet* (The Service Window) - Axum front end for the LeShor
//! factoring engine

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Server configuration from environment
pub mod config;

/// Server lifecycle errors
pub mod error;

/// HTTP handlers for the factoring API
pub mod handlers;

/// Wire types for response bodies
pub mod responses;

/// Server instance management
pub mod server;

pub use config::ServerConfig;
pub use error::ServeError;
pub use handlers::{create_router, AppState};
pub use responses::{ErrorResponse, FactorResponse, OutcomeResponse};
pub use server::LeGuichetServer;
