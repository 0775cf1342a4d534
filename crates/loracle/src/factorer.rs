//! Capability trait for factoring oracles.

use crate::error::OracleError;

/// A factoring oracle consumed as a single synchronous capability.
///
/// Implementations may be probabilistic: a returned pair is not guaranteed to
/// multiply back to the input, and callers are expected to verify it before
/// trusting it. `&mut self` reflects the single-owner, non-reentrant nature
/// of the underlying runtime: one logical caller holds the oracle at a time.
pub trait Factorer {
    /// Run one factoring attempt for `number`.
    ///
    /// Returns a candidate factor pair, or an error whose
    /// [`OracleError::is_no_factors`] flag separates "the input is not
    /// factorable" from operational failures.
    fn factor(&mut self, number: u64) -> Result<(u64, u64), OracleError>;
}
