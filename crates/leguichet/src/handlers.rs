//! HTTP handlers for the factoring API

use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use lefacteur::{FactorEngine, FactorOutcome, FactorRequest};
use loracle::Factorer;

use crate::config::ServerConfig;
use crate::responses::OutcomeResponse;

/// State shared across all handlers.
///
/// The engine sits behind `Arc<Mutex<..>>` because the oracle runtime is a
/// single-owner, non-reentrant resource: at most one factorization runs at a
/// time process-wide, and concurrent requests queue on the lock.
pub struct AppState<F: Factorer> {
    /// Single-owner factoring engine.
    pub engine: Arc<Mutex<FactorEngine<F>>>,

    /// Immutable server configuration.
    pub config: Arc<ServerConfig>,
}

impl<F: Factorer> AppState<F> {
    /// Create state from an engine and configuration.
    pub fn new(engine: FactorEngine<F>, config: ServerConfig) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            config: Arc::new(config),
        }
    }
}

impl<F: Factorer> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            config: Arc::clone(&self.config),
        }
    }
}

/// POST /shor-factor - factor a semiprime integer
///
/// Validation happens before the oracle lock is taken, so invalid requests
/// never touch the simulator.
pub async fn shor_factor<F>(
    State(state): State<AppState<F>>,
    body: Option<Json<serde_json::Value>>,
) -> OutcomeResponse
where
    F: Factorer + Send + 'static,
{
    let Some(Json(body)) = body else {
        return OutcomeResponse(FactorOutcome::InvalidInput {
            message: "request body must be a JSON object with a 'number' field".to_string(),
        });
    };
    debug!(%body, "received factor request");

    let request = match FactorRequest::from_json(&body) {
        Ok(request) => request,
        Err(err) => {
            warn!(%body, error = %err, "rejected factor request");
            return OutcomeResponse(FactorOutcome::InvalidInput {
                message: err.to_string(),
            });
        }
    };

    let engine = Arc::clone(&state.engine);
    let joined = tokio::task::spawn_blocking(move || {
        // A poisoned lock only means an earlier request panicked; the engine
        // holds no cross-request state worth discarding.
        let mut engine = engine.lock().unwrap_or_else(PoisonError::into_inner);
        engine.run(&request)
    })
    .await;

    let outcome = match joined {
        Ok(report) => {
            debug!(attempts = report.attempts, outcome = ?report.outcome, "factor run finished");
            report.outcome
        }
        Err(err) => FactorOutcome::OracleError {
            message: format!("factoring task failed: {}", err),
        },
    };
    OutcomeResponse(outcome)
}

/// GET /health - service liveness
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "leguichet",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Build the router with all endpoints and middleware.
pub fn create_router<F>(state: AppState<F>) -> Router
where
    F: Factorer + Send + 'static,
{
    let cors = cors_layer(&state.config);
    Router::new()
        .route("/shor-factor", post(shor_factor::<F>))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS layer from the configured origins; unparseable entries are skipped.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}
