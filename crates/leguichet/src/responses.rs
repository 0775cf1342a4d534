//! Wire types for response bodies

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use lefacteur::FactorOutcome;

/// Successful factoring response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorResponse {
    /// The verified factor pair.
    pub factors: [u64; 2],

    /// Product of the pair; equals the requested number.
    pub product: u64,
}

/// Error response body shared by all failure outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Classified, user-facing message.
    pub error: String,
}

/// Response adapter for a terminal outcome.
///
/// Status and body come from the outcome classifier; this type only carries
/// them onto the wire.
#[derive(Debug, Clone)]
pub struct OutcomeResponse(
    /// Classified terminal outcome.
    pub FactorOutcome,
);

impl IntoResponse for OutcomeResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.body())).into_response()
    }
}
