//! lefacteur - Request Orchestration
//!
//! *Le Facteur* (The Factor) - Validation, bounded retry around the oracle,
//! and classification of terminal outcomes

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod engine;
pub mod outcome;
pub mod request;

pub use engine::{FactorEngine, FactorRunReport, MAX_ATTEMPTS};
pub use outcome::{FactorOutcome, NOT_FACTORABLE_MESSAGE, RETRIES_EXHAUSTED_MESSAGE};
pub use request::{FactorRequest, RequestError};
