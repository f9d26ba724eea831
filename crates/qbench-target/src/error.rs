//! Error types for the target crate.

use thiserror::Error;

/// Errors raised while assembling or editing a [`TargetModel`](crate::TargetModel).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TargetError {
    /// An instruction with this name is already present.
    #[error("Instruction '{0}' is already defined on this target")]
    DuplicateInstruction(String),

    /// No instruction with this name exists.
    #[error("Unknown instruction '{0}'")]
    UnknownInstruction(String),

    /// The instruction exists but has no entry for the given qubits.
    #[error("Instruction '{operation}' has no entry for qubits {qargs}")]
    UnknownQargs {
        /// Operation name.
        operation: String,
        /// Qubit tuple that was looked up.
        qargs: String,
    },

    /// A qubit index lies outside `[0, num_qubits)`.
    #[error("Instruction '{operation}' references qubit {qubit} but the target only has {num_qubits} qubits")]
    QubitOutOfRange {
        /// Operation name.
        operation: String,
        /// The offending qubit index.
        qubit: u32,
        /// Number of qubits on the target.
        num_qubits: u32,
    },

    /// The qubit tuple does not match the operation's arity.
    #[error("Instruction '{operation}' acts on {expected} qubit(s), got a tuple of {found}")]
    ArityMismatch {
        /// Operation name.
        operation: String,
        /// Arity declared by the operation.
        expected: u32,
        /// Length of the supplied tuple.
        found: u32,
    },

    /// A two-qubit tuple names the same qubit twice.
    #[error("Instruction '{operation}' pairs qubit {qubit} with itself")]
    RepeatedQubit {
        /// Operation name.
        operation: String,
        /// The repeated qubit.
        qubit: u32,
    },

    /// An error rate outside `[0, 1)`.
    #[error("Instruction '{operation}' on {qargs} has error {value}, expected a value in [0, 1)")]
    InvalidError {
        /// Operation name.
        operation: String,
        /// Qubit tuple carrying the value.
        qargs: String,
        /// The rejected error rate.
        value: f64,
    },

    /// A negative or non-finite duration.
    #[error("Instruction '{operation}' on {qargs} has duration {value}, expected a finite value >= 0")]
    InvalidDuration {
        /// Operation name.
        operation: String,
        /// Qubit tuple carrying the value.
        qargs: String,
        /// The rejected duration in seconds.
        value: f64,
    },

    /// A qubit-restricted instruction without any qubit tuple.
    #[error("Instruction '{0}' has no qubit entries")]
    EmptyInstruction(String),

    /// A global instruction wider than the target.
    #[error("Instruction '{operation}' needs {arity} qubits but the target only has {num_qubits}")]
    TargetTooSmall {
        /// Operation name.
        operation: String,
        /// Arity of the operation.
        arity: u32,
        /// Number of qubits on the target.
        num_qubits: u32,
    },

    /// A qubit tuple of unsupported length.
    #[error("Qubit tuples hold one or two qubits, got {0}")]
    InvalidQargs(usize),
}

/// Result type for target operations.
pub type TargetResult<T> = Result<T, TargetError>;
