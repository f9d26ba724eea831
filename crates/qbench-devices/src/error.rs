//! Error types for the devices crate.

use std::path::PathBuf;

use thiserror::Error;

use qbench_target::TargetError;

use crate::addressing::RemapError;

/// Errors raised while loading calibration or building device targets.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeviceError {
    /// No device registered under this name.
    #[error("Unknown device '{name}'. Available devices: {}", .available.join(", "))]
    UnknownDevice {
        /// The requested name.
        name: String,
        /// Registered names in registration order.
        available: Vec<String>,
    },

    /// No calibration document exists for the device.
    #[error("No calibration document for device '{0}'")]
    MissingCalibration(String),

    /// A calibration file could not be read.
    #[error("Failed to read calibration file '{}': {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A calibration document is not valid JSON for its schema.
    #[error("Malformed calibration document for '{device}': {source}")]
    Parse {
        /// Device the document belongs to.
        device: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A calibration document parsed but is incomplete or out of range.
    #[error("Invalid calibration for '{device}': {message}")]
    Calibration {
        /// Device the document belongs to.
        device: String,
        /// What is wrong with it.
        message: String,
    },

    /// A capability table names a gate the gate tables do not know.
    #[error("Unknown gate '{0}' in device capability table")]
    UnknownGate(String),

    /// Hardware index translation failed.
    #[error(transparent)]
    Remap(#[from] RemapError),

    /// The assembled target violates a model invariant.
    #[error("Target construction failed: {0}")]
    Target(#[from] TargetError),
}

impl DeviceError {
    pub(crate) fn calibration(device: &str, message: impl Into<String>) -> Self {
        DeviceError::Calibration {
            device: device.to_string(),
            message: message.into(),
        }
    }
}

/// Result type for device operations.
pub type DeviceResult<T> = Result<T, DeviceError>;
