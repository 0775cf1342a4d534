//! Oracle error taxonomy

use thiserror::Error;

/// Substring the original oracle emits when it gives up on an input.
///
/// This is the textual integration contract: callers that only see a rendered
/// message match on this substring to distinguish "the input is prime" from
/// operational failures. [`OracleError::is_no_factors`] prefers the structured
/// variant and keeps the substring match as a compatibility fallback.
pub const NO_FACTORS_SIGNAL: &str = "Failed to find factors";

/// Errors raised by a factoring oracle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The oracle determined the input admits no non-trivial factor pair.
    ///
    /// A mathematical fact, not an operational failure: retrying cannot
    /// change it.
    #[error("Failed to find factors: {number} has no non-trivial factor pair")]
    NoFactorsFound {
        /// The input the oracle gave up on.
        number: u64,
    },

    /// The simulation backend failed while executing a round.
    #[error("simulation error: {message}")]
    Simulation {
        /// Human-readable cause.
        message: String,
    },

    /// The oracle runtime is missing or cannot serve the request.
    #[error("oracle unavailable: {message}")]
    Unavailable {
        /// Human-readable cause.
        message: String,
    },
}

impl OracleError {
    /// Whether this error is the deterministic "not factorable" signal
    /// rather than an operational failure.
    ///
    /// Checks the structured variant first, then falls back to the documented
    /// substring so messages forwarded from foreign oracles still classify.
    pub fn is_no_factors(&self) -> bool {
        matches!(self, OracleError::NoFactorsFound { .. })
            || self.to_string().contains(NO_FACTORS_SIGNAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_factors_variant_is_recognized() {
        let err = OracleError::NoFactorsFound { number: 7 };
        assert!(err.is_no_factors());
    }

    #[test]
    fn no_factors_message_carries_the_signal_substring() {
        let err = OracleError::NoFactorsFound { number: 7 };
        assert!(err.to_string().contains(NO_FACTORS_SIGNAL));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn textual_signal_is_recognized_in_forwarded_messages() {
        let err = OracleError::Simulation {
            message: "Failed to find factors of 13".to_string(),
        };
        assert!(err.is_no_factors());
    }

    #[test]
    fn operational_errors_are_not_no_factors() {
        let err = OracleError::Simulation {
            message: "qubit allocation failed".to_string(),
        };
        assert!(!err.is_no_factors());

        let err = OracleError::Unavailable {
            message: "runtime not initialized".to_string(),
        };
        assert!(!err.is_no_factors());
    }
}
