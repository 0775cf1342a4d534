//! Retry-aware engine coordinating oracle attempts.

use std::time::{Duration, Instant};

use tracing::{debug, error, warn};

use loracle::Factorer;

use crate::outcome::FactorOutcome;
use crate::request::FactorRequest;

/// Retry budget per request. A named constant, not caller-configurable.
pub const MAX_ATTEMPTS: usize = 50;

/// Report of one engine run.
#[derive(Debug, Clone)]
pub struct FactorRunReport {
    /// Terminal outcome.
    pub outcome: FactorOutcome,
    /// Oracle attempts consumed.
    pub attempts: usize,
}

/// Engine that invokes the oracle with bounded retry and verifies results.
///
/// Owns the oracle instance for the process: the underlying runtime is not
/// reentrant, so whoever holds the engine holds the oracle. All loop state is
/// local to one `run` call.
pub struct FactorEngine<F: Factorer> {
    oracle: F,
    timeout: Option<Duration>,
}

impl<F: Factorer> FactorEngine<F> {
    /// Create an engine around an oracle instance.
    pub fn new(oracle: F) -> Self {
        Self {
            oracle,
            timeout: None,
        }
    }

    /// Add a wall-clock budget for a whole run.
    ///
    /// A blocking oracle call cannot be preempted, so the budget is checked
    /// between attempts; exceeding it classifies as an oracle error.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Execute one validated request to a terminal outcome.
    pub fn run(&mut self, request: &FactorRequest) -> FactorRunReport {
        let number = request.number;
        let start = Instant::now();
        let mut attempts = 0;

        while attempts < MAX_ATTEMPTS {
            if let Some(timeout) = self.timeout {
                if start.elapsed() >= timeout {
                    error!(
                        number,
                        attempts,
                        timeout_ms = timeout.as_millis() as u64,
                        "factoring timed out"
                    );
                    return FactorRunReport {
                        outcome: FactorOutcome::OracleError {
                            message: format!(
                                "factoring {} timed out after {} ms",
                                number,
                                timeout.as_millis()
                            ),
                        },
                        attempts,
                    };
                }
            }

            attempts += 1;

            match self.oracle.factor(number) {
                Err(err) if err.is_no_factors() => {
                    // A mathematical fact; retrying cannot change it.
                    debug!(number, attempts, "oracle reports input is not factorable");
                    return FactorRunReport {
                        outcome: FactorOutcome::NotFactorable,
                        attempts,
                    };
                }
                Err(err) => {
                    error!(number, attempts, error = %err, "oracle failed operationally");
                    return FactorRunReport {
                        outcome: FactorOutcome::OracleError {
                            message: err.to_string(),
                        },
                        attempts,
                    };
                }
                Ok((p, q)) if is_valid_pair(p, q, number) => {
                    debug!(number, p, q, attempts, "verified factor pair");
                    return FactorRunReport {
                        outcome: FactorOutcome::Factored {
                            p,
                            q,
                            product: number,
                        },
                        attempts,
                    };
                }
                Ok((p, q)) => {
                    // Expected recoverable case: the probabilistic oracle
                    // produced a spurious or partial pair.
                    debug!(number, p, q, attempts, "invalid pair from oracle, retrying");
                }
            }
        }

        warn!(number, attempts, "retry budget exhausted");
        FactorRunReport {
            outcome: FactorOutcome::RetriesExhausted,
            attempts,
        }
    }
}

/// A pair is valid when it multiplies back to the input exactly and neither
/// factor is trivial. The oracle is not trusted for either property.
fn is_valid_pair(p: u64, q: u64, number: u64) -> bool {
    p > 1 && q > 1 && p.checked_mul(q) == Some(number)
}
