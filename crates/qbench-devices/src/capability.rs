//! Per-vendor capability tables.
//!
//! Each vendor declares, as data, which operations its devices support and
//! where each operation's properties come from. The builder walks the table;
//! no vendor logic lives in control flow.

use qbench_target::{Operation, gates};

use crate::error::{DeviceError, DeviceResult};

/// How the two orderings of a coupled pair are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    /// Both `(a, b)` and `(b, a)` with the same figures.
    Mirrored,
    /// Only the ordering listed in the connectivity.
    Directed,
}

/// What to do with a coupled pair that has no calibration for a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPairs {
    /// Leave the pair out of the instruction.
    Skip,
    /// Use the family's mean over its calibrated pairs.
    MeanBackfill,
}

/// Source of an operation's per-tuple properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertySource {
    /// Frame-tracked rotation: zero duration and zero error on every qubit.
    Virtual,
    /// Single-qubit gate figures on every qubit.
    SingleQubit,
    /// Readout figures on every qubit.
    Readout,
    /// Two-qubit figures of a calibration family over the connectivity.
    TwoQubit {
        family: &'static str,
        symmetry: Symmetry,
        missing: MissingPairs,
    },
}

/// One row of a capability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    pub name: &'static str,
    pub source: PropertySource,
}

impl OperationSpec {
    pub const fn virtual_gate(name: &'static str) -> Self {
        Self {
            name,
            source: PropertySource::Virtual,
        }
    }

    pub const fn single_qubit(name: &'static str) -> Self {
        Self {
            name,
            source: PropertySource::SingleQubit,
        }
    }

    pub const fn readout(name: &'static str) -> Self {
        Self {
            name,
            source: PropertySource::Readout,
        }
    }

    pub const fn two_qubit(
        name: &'static str,
        family: &'static str,
        symmetry: Symmetry,
        missing: MissingPairs,
    ) -> Self {
        Self {
            name,
            source: PropertySource::TwoQubit {
                family,
                symmetry,
                missing,
            },
        }
    }

    /// Resolve the operation through the gate tables.
    pub fn operation(&self) -> DeviceResult<Operation> {
        gates::lookup(self.name).ok_or_else(|| DeviceError::UnknownGate(self.name.to_string()))
    }

    /// Arity the table row implies.
    pub fn arity(&self) -> u32 {
        match self.source {
            PropertySource::TwoQubit { .. } => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_resolves_vendor_gates() {
        let spec = OperationSpec::single_qubit("gpi2");
        assert_eq!(spec.operation().unwrap().name(), "gpi2");
    }

    #[test]
    fn test_unknown_gate() {
        let spec = OperationSpec::single_qubit("unknown_gate");
        let err = spec.operation().unwrap_err();
        assert!(err.to_string().contains("unknown_gate"));
    }

    #[test]
    fn test_arity() {
        let cz = OperationSpec::two_qubit("cz", "cz", Symmetry::Mirrored, MissingPairs::Skip);
        assert_eq!(cz.arity(), 2);
        assert_eq!(OperationSpec::readout("measure").arity(), 1);
    }
}
