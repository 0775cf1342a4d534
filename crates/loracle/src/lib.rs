//! loracle - Factoring Oracle
//!
//! *L'Oracle* (The Oracle) - Simulated Shor factoring oracle behind a capability trait

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod arithmetic;
pub mod error;
pub mod factorer;
pub mod runtime;
pub mod shor;

pub use error::{OracleError, NO_FACTORS_SIGNAL};
pub use factorer::Factorer;
pub use runtime::{initialize, initialize_with_capacity, RuntimeHandle};
pub use shor::ShorSimulator;
