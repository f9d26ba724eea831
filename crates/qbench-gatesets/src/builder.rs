//! Gateset target construction.
//!
//! A gateset is not tied to a chip, so it is scaffolded to whatever qubit
//! count the caller asks for. Generic scaffolds couple every ordered pair and
//! draw plausible synthetic figures from a seeded generator, so the same
//! `(name, num_qubits, seed)` always yields the same target.

use std::ops::Range;

use qbench_target::{InstructionProperties, Operation, Qargs, TargetModel, gates};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{GatesetError, GatesetResult};
use crate::gatesets::{GatesetSpec, Scaffold};

/// Seed used when the caller has no preference.
pub const DEFAULT_SEED: u64 = 42;

/// Sampling ranges (seconds, probability) for one class of operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRanges {
    pub duration: Range<f64>,
    pub error: Range<f64>,
}

pub const SINGLE_QUBIT_RANGES: PropertyRanges = PropertyRanges {
    duration: 2.997e-8..5.994e-8,
    error: 9e-5..1e-4,
};

pub const TWO_QUBIT_RANGES: PropertyRanges = PropertyRanges {
    duration: 7.992e-8..8.99988e-7,
    error: 1e-5..5e-3,
};

pub const MEASURE_RANGES: PropertyRanges = PropertyRanges {
    duration: 6.99966e-7..1.500054e-6,
    error: 1e-5..5e-3,
};

/// Widest scaffold a gateset can be built at. Generic scaffolds grow with
/// the square of the width.
pub const MAX_GATESET_QUBITS: u32 = 256;

/// Frame-tracked rotations in a generic scaffold.
const VIRTUAL_GATES: &[&str] = &["rz", "p"];

/// Directives every generic scaffold carries without calibration.
const UNCALIBRATED_DIRECTIVES: &[&str] = &["delay", "reset"];

/// Resolve a gate name through the standard table, then the vendor table.
pub fn resolve_gate(gateset: &str, gate: &str) -> GatesetResult<Operation> {
    gates::lookup(gate).ok_or_else(|| GatesetError::UnknownGate {
        gateset: gateset.to_string(),
        gate: gate.to_string(),
    })
}

/// Build the target for a gateset at the given width.
pub fn build_gateset(
    spec: &GatesetSpec,
    num_qubits: u32,
    seed: u64,
) -> GatesetResult<TargetModel> {
    let operations = spec
        .gates
        .iter()
        .map(|gate| resolve_gate(spec.name, gate))
        .collect::<GatesetResult<Vec<_>>>()?;

    let min = operations
        .iter()
        .filter_map(Operation::num_qubits)
        .max()
        .unwrap_or(1)
        .max(1);
    if !(min..=MAX_GATESET_QUBITS).contains(&num_qubits) {
        return Err(GatesetError::InvalidQubitCount {
            gateset: spec.name.to_string(),
            num_qubits,
            min,
            max: MAX_GATESET_QUBITS,
        });
    }

    let mut target = TargetModel::new(spec.name, num_qubits);
    match spec.scaffold {
        Scaffold::Dense => {
            for operation in operations {
                target.add_global_instruction(operation)?;
            }
        }
        Scaffold::Generic => scaffold_generic(&mut target, operations, seed)?,
    }

    target.validate()?;
    debug!(
        "Scaffolded gateset {} on {} qubits ({} instructions)",
        spec.name,
        num_qubits,
        target.num_instructions()
    );
    Ok(target)
}

fn scaffold_generic(
    target: &mut TargetModel,
    operations: Vec<Operation>,
    seed: u64,
) -> GatesetResult<()> {
    let n = target.num_qubits();
    let mut rng = StdRng::seed_from_u64(seed);

    for operation in operations {
        let name = operation.name();
        if UNCALIBRATED_DIRECTIVES.contains(&name) {
            continue;
        }
        if !gates::is_standard_gate(name) || operation.num_qubits().is_none() {
            target.add_global_instruction(operation)?;
            continue;
        }

        let entries: Vec<_> = if VIRTUAL_GATES.contains(&name) {
            (0..n)
                .map(|q| (Qargs::single(q), Some(InstructionProperties::virtual_gate())))
                .collect()
        } else if name == "measure" {
            (0..n)
                .map(|q| (Qargs::single(q), Some(sample(&mut rng, &MEASURE_RANGES))))
                .collect()
        } else if operation.num_qubits() == Some(2) {
            ordered_pairs(n)
                .map(|(a, b)| (Qargs::pair(a, b), Some(sample(&mut rng, &TWO_QUBIT_RANGES))))
                .collect()
        } else {
            (0..n)
                .map(|q| (Qargs::single(q), Some(sample(&mut rng, &SINGLE_QUBIT_RANGES))))
                .collect()
        };
        target.add_instruction(operation, entries)?;
    }

    for directive in UNCALIBRATED_DIRECTIVES {
        let operation = resolve_gate(target.name(), directive)?;
        target.add_instruction(operation, (0..n).map(|q| (Qargs::single(q), None)))?;
    }
    Ok(())
}

fn ordered_pairs(n: u32) -> impl Iterator<Item = (u32, u32)> {
    (0..n).flat_map(move |a| (0..n).filter(move |&b| b != a).map(move |b| (a, b)))
}

fn sample(rng: &mut StdRng, ranges: &PropertyRanges) -> InstructionProperties {
    let duration = rng.gen_range(ranges.duration.clone());
    let error = rng.gen_range(ranges.error.clone());
    InstructionProperties::new(Some(duration), Some(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gatesets::gateset_spec;

    fn build(name: &str, n: u32) -> TargetModel {
        build_gateset(gateset_spec(name).unwrap(), n, DEFAULT_SEED).unwrap()
    }

    #[test]
    fn test_generic_scaffold_layout() {
        let target = build("ibm_falcon", 4);
        assert_eq!(target.instruction("cx").unwrap().num_entries(), 12);
        assert_eq!(target.instruction("sx").unwrap().num_entries(), 4);
        assert!(target.instruction("barrier").unwrap().is_global());
        for directive in ["delay", "reset"] {
            let inst = target.instruction(directive).unwrap();
            assert_eq!(inst.num_entries(), 4);
            assert!(inst.qargs().all(|q| inst.properties(q).is_none()));
        }
    }

    #[test]
    fn test_virtual_rz() {
        let target = build("ibm_heron", 3);
        let rz = target.properties("rz", Qargs::single(2)).unwrap();
        assert!(rz.is_virtual());
    }

    #[test]
    fn test_vendor_gates_are_global() {
        let target = build("ionq_forte", 5);
        for gate in ["gpi", "gpi2", "zz"] {
            let inst = target.instruction(gate).unwrap();
            assert!(inst.is_global(), "{gate}");
        }
        assert!(target.instruction("zz").unwrap().operation().is_parameterized());
        assert!(!target.instruction("measure").unwrap().is_global());
    }

    #[test]
    fn test_sampled_ranges() {
        let target = build("quantinuum", 6);
        for (name, ranges) in [
            ("rx", &SINGLE_QUBIT_RANGES),
            ("rzz", &TWO_QUBIT_RANGES),
            ("measure", &MEASURE_RANGES),
        ] {
            let inst = target.instruction(name).unwrap();
            for qargs in inst.qargs() {
                let props = inst.properties(qargs).unwrap();
                assert!(ranges.duration.contains(&props.duration.unwrap()), "{name}");
                assert!(ranges.error.contains(&props.error.unwrap()), "{name}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_target() {
        let spec = gateset_spec("iqm").unwrap();
        let a = build_gateset(spec, 7, 7).unwrap();
        let b = build_gateset(spec, 7, 7).unwrap();
        let c = build_gateset(spec, 7, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_dense_scaffold() {
        let target = build("clifford+t", 3);
        assert_eq!(target.num_instructions(), 20);
        assert!(target.instructions().all(|(_, inst)| inst.is_global()));
        assert!(!target.contains("delay"));
    }

    #[test]
    fn test_unknown_gate() {
        let spec = GatesetSpec {
            name: "broken",
            gates: &["cx", "unknown_gate"],
            scaffold: Scaffold::Generic,
        };
        let err = build_gateset(&spec, 4, DEFAULT_SEED).unwrap_err();
        assert!(matches!(err, GatesetError::UnknownGate { .. }));
        assert!(err.to_string().contains("unknown_gate"));
    }

    #[test]
    fn test_qubit_count_checks() {
        let spec = gateset_spec("iqm").unwrap();
        assert!(matches!(
            build_gateset(spec, 0, DEFAULT_SEED),
            Err(GatesetError::InvalidQubitCount { min: 2, .. })
        ));
        assert!(matches!(
            build_gateset(spec, 1, DEFAULT_SEED),
            Err(GatesetError::InvalidQubitCount { .. })
        ));

        let single = GatesetSpec {
            name: "single",
            gates: &["rz", "sx"],
            scaffold: Scaffold::Dense,
        };
        assert!(build_gateset(&single, 1, DEFAULT_SEED).is_ok());
        assert!(matches!(
            build_gateset(&single, 0, DEFAULT_SEED),
            Err(GatesetError::InvalidQubitCount { min: 1, .. })
        ));
    }

    #[test]
    fn test_width_limit() {
        let spec = gateset_spec("iqm").unwrap();
        let target = build_gateset(spec, MAX_GATESET_QUBITS, DEFAULT_SEED).unwrap();
        assert_eq!(target.num_qubits(), MAX_GATESET_QUBITS);

        let err = build_gateset(spec, MAX_GATESET_QUBITS + 1, DEFAULT_SEED).unwrap_err();
        assert!(matches!(
            err,
            GatesetError::InvalidQubitCount { num_qubits: 257, max: 256, .. }
        ));
        assert_eq!(
            err.to_string(),
            "Gateset 'iqm' supports 2 to 256 qubits, got 257"
        );
    }
}
