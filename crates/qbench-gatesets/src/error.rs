//! Error types for gateset construction.

use thiserror::Error;

use qbench_target::TargetError;

/// Errors raised while building or looking up gatesets.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatesetError {
    #[error("Unknown gateset '{name}'. Available gatesets: {}", .available.join(", "))]
    UnknownGateset { name: String, available: Vec<String> },

    /// A gateset lists a gate neither gate table knows.
    #[error("Unknown gate '{gate}' in gateset '{gateset}'")]
    UnknownGate { gateset: String, gate: String },

    #[error("Gateset '{gateset}' supports {min} to {max} qubits, got {num_qubits}")]
    InvalidQubitCount {
        gateset: String,
        num_qubits: u32,
        min: u32,
        max: u32,
    },

    #[error("No native gateset is associated with device '{0}'")]
    NoGatesetForDevice(String),

    #[error("Gateset construction failed: {0}")]
    Target(#[from] TargetError),
}

/// Result type for gateset operations.
pub type GatesetResult<T> = Result<T, GatesetError>;
