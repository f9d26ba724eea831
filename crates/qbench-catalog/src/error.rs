//! Error types for the catalog facade.

use thiserror::Error;

use qbench_devices::DeviceError;
use qbench_gatesets::GatesetError;

use crate::config::ConfigError;
use crate::levels::BenchmarkLevel;

/// Errors raised by catalog queries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error(transparent)]
    Gateset(#[from] GatesetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(
        "Invalid benchmark level '{0}'. Expected one of: alg, indep, nativegates, mapped (or 0-3)."
    )]
    InvalidLevel(String),

    #[error("Invalid `opt_level` '{0}'. Must be in the range [0, 3].")]
    InvalidOptLevel(String),

    /// The level needs a concrete target and none was named.
    #[error("Benchmark level '{0}' requires a target name")]
    MissingTarget(BenchmarkLevel),

    #[error("Invalid qubit count {0}: a circuit needs at least one qubit")]
    InvalidQubitCount(u32),

    #[error("Circuit needs {circuit_qubits} qubits but device '{device}' has {device_qubits}")]
    CircuitTooWide {
        device: String,
        circuit_qubits: u32,
        device_qubits: u32,
    },
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
