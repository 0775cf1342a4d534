//! Terminal outcomes and their response classification.

use serde_json::{json, Value};

/// Message returned when the oracle reports the input is prime.
pub const NOT_FACTORABLE_MESSAGE: &str = "The number is prime and cannot be factored.";

/// Message returned when the retry budget runs out.
pub const RETRIES_EXHAUSTED_MESSAGE: &str =
    "Unable to factor the number within the retry budget.";

/// Terminal outcome of one factoring request.
///
/// Created and discarded within a single request; nothing here is shared
/// across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorOutcome {
    /// A verified factor pair.
    Factored {
        /// First factor.
        p: u64,
        /// Second factor.
        q: u64,
        /// Product of the pair; equals the requested number.
        product: u64,
    },

    /// The oracle determined the input has no non-trivial factors.
    NotFactorable,

    /// The retry budget ran out before a valid pair was produced.
    RetriesExhausted,

    /// The oracle failed operationally.
    OracleError {
        /// Classified, user-facing message.
        message: String,
    },

    /// The request failed validation.
    InvalidInput {
        /// Classified, user-facing message.
        message: String,
    },
}

impl FactorOutcome {
    /// HTTP status code for this outcome.
    ///
    /// Caller mistakes and confirmed-prime inputs are 400-class; operational
    /// failures and budget exhaustion are 500-class.
    pub fn status_code(&self) -> u16 {
        match self {
            FactorOutcome::Factored { .. } => 200,
            FactorOutcome::NotFactorable | FactorOutcome::InvalidInput { .. } => 400,
            FactorOutcome::RetriesExhausted | FactorOutcome::OracleError { .. } => 500,
        }
    }

    /// Response body for this outcome.
    ///
    /// The caller never sees internal detail beyond the classified message.
    pub fn body(&self) -> Value {
        match self {
            FactorOutcome::Factored { p, q, product } => {
                json!({ "factors": [p, q], "product": product })
            }
            FactorOutcome::InvalidInput { message } => json!({ "error": message }),
            FactorOutcome::NotFactorable => json!({ "error": NOT_FACTORABLE_MESSAGE }),
            FactorOutcome::OracleError { message } => json!({ "error": message }),
            FactorOutcome::RetriesExhausted => json!({ "error": RETRIES_EXHAUSTED_MESSAGE }),
        }
    }

    /// Whether this outcome reports a verified factorization.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, FactorOutcome::Factored { .. })
    }
}
