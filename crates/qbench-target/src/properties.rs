//! Per-entry timing and error figures.

use serde::{Deserialize, Serialize};

use crate::error::{TargetError, TargetResult};
use crate::qargs::Qargs;

/// Duration (seconds) and error probability of one instruction on one qubit tuple.
///
/// Either figure may be absent when the calibration source does not provide it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InstructionProperties {
    /// Gate duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Error probability in `[0, 1)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<f64>,
}

impl InstructionProperties {
    /// Create properties from optional figures.
    pub fn new(duration: Option<f64>, error: Option<f64>) -> Self {
        Self { duration, error }
    }

    /// Properties of a frame-tracked gate: zero duration, zero error.
    pub fn virtual_gate() -> Self {
        Self {
            duration: Some(0.0),
            error: Some(0.0),
        }
    }

    /// Properties derived from a fidelity figure (`error = 1 - fidelity`).
    pub fn from_fidelity(duration: Option<f64>, fidelity: f64) -> Self {
        Self {
            duration,
            error: Some(1.0 - fidelity),
        }
    }

    /// Whether both figures are exactly zero.
    pub fn is_virtual(&self) -> bool {
        self.duration == Some(0.0) && self.error == Some(0.0)
    }

    /// Check the value ranges for an entry of `operation` on `qargs`.
    pub fn check(&self, operation: &str, qargs: Qargs) -> TargetResult<()> {
        if let Some(error) = self.error {
            if !(0.0..1.0).contains(&error) {
                return Err(TargetError::InvalidError {
                    operation: operation.to_string(),
                    qargs: qargs.to_string(),
                    value: error,
                });
            }
        }
        if let Some(duration) = self.duration {
            if !duration.is_finite() || duration < 0.0 {
                return Err(TargetError::InvalidDuration {
                    operation: operation.to_string(),
                    qargs: qargs.to_string(),
                    value: duration,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fidelity() {
        let props = InstructionProperties::from_fidelity(Some(1e-6), 0.99);
        assert!((props.error.unwrap() - 0.01).abs() < 1e-12);
        assert_eq!(props.duration, Some(1e-6));
    }

    #[test]
    fn test_virtual_gate() {
        assert!(InstructionProperties::virtual_gate().is_virtual());
        assert!(!InstructionProperties::new(Some(0.0), None).is_virtual());
    }

    #[test]
    fn test_check_ranges() {
        let q = Qargs::single(0);
        assert!(InstructionProperties::new(Some(0.0), Some(0.0)).check("x", q).is_ok());
        assert!(InstructionProperties::new(None, None).check("x", q).is_ok());
        assert!(matches!(
            InstructionProperties::new(None, Some(1.0)).check("x", q),
            Err(TargetError::InvalidError { .. })
        ));
        assert!(matches!(
            InstructionProperties::new(None, Some(-0.1)).check("x", q),
            Err(TargetError::InvalidError { .. })
        ));
        assert!(matches!(
            InstructionProperties::new(Some(-1e-9), None).check("x", q),
            Err(TargetError::InvalidDuration { .. })
        ));
        assert!(matches!(
            InstructionProperties::new(Some(f64::NAN), None).check("x", q),
            Err(TargetError::InvalidDuration { .. })
        ));
    }
}
