//! Process-wide simulation runtime.
//!
//! The quantum simulation environment is initialized once per process and
//! shared as an immutable handle. Simulators are constructed from the handle,
//! so the one-time startup side effect stays out of the request path.

use once_cell::sync::OnceCell;
use tracing::info;

/// Default simulator capacity in qubits.
///
/// A factoring register for an n-bit input needs `2n + 3` qubits, so the
/// default admits inputs up to 30 bits.
pub const DEFAULT_MAX_QUBITS: u32 = 63;

static RUNTIME: OnceCell<RuntimeHandle> = OnceCell::new();

/// Immutable handle to the initialized simulation runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeHandle {
    max_qubits: u32,
}

impl RuntimeHandle {
    pub(crate) fn new(max_qubits: u32) -> Self {
        Self { max_qubits }
    }

    /// Simulator capacity in qubits.
    #[must_use]
    pub fn max_qubits(&self) -> u32 {
        self.max_qubits
    }

    /// Qubits required to run one factoring round for `number`.
    #[must_use]
    pub fn required_qubits(number: u64) -> u32 {
        let bits = 64 - number.leading_zeros();
        2 * bits + 3
    }

    /// Whether the runtime can host a factoring round for `number`.
    #[must_use]
    pub fn admits(&self, number: u64) -> bool {
        Self::required_qubits(number) <= self.max_qubits
    }
}

/// Initialize the runtime with the default capacity.
///
/// Idempotent: subsequent calls return the handle created first.
pub fn initialize() -> RuntimeHandle {
    initialize_with_capacity(DEFAULT_MAX_QUBITS)
}

/// Initialize the runtime with an explicit qubit capacity.
///
/// The capacity of the first initialization wins for the process lifetime.
pub fn initialize_with_capacity(max_qubits: u32) -> RuntimeHandle {
    *RUNTIME.get_or_init(|| {
        info!(max_qubits, "initializing quantum simulation runtime");
        RuntimeHandle::new(max_qubits)
    })
}
