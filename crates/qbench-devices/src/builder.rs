//! Capability-table driven target construction.

use qbench_target::{InstructionProperties, Qargs, TargetModel};
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::calibration::CalibrationSource;
use crate::capability::{MissingPairs, OperationSpec, PropertySource, Symmetry};
use crate::error::{DeviceError, DeviceResult};

type Entry = (Qargs, Option<InstructionProperties>);

/// Build a target from a calibration record and a capability table.
///
/// Every qubit reference in the record is already dense. Operations whose
/// two-qubit family has no calibrated pair are left out of the target.
pub fn build_target(
    source: &dyn CalibrationSource,
    specs: &[OperationSpec],
) -> DeviceResult<TargetModel> {
    let device = source.device();
    let mut target = TargetModel::new(device, source.num_qubits());

    for spec in specs {
        let operation = spec.operation()?;
        if operation.num_qubits() != Some(spec.arity()) {
            return Err(DeviceError::calibration(
                device,
                format!(
                    "capability table sources '{}' as a {}-qubit operation",
                    spec.name,
                    spec.arity()
                ),
            ));
        }

        let entries = match spec.source {
            PropertySource::Virtual => (0..source.num_qubits())
                .map(|q| (Qargs::single(q), Some(InstructionProperties::virtual_gate())))
                .collect(),
            PropertySource::SingleQubit => per_qubit(source, |q| source.single_qubit(q))?,
            PropertySource::Readout => per_qubit(source, |q| source.readout(q))?,
            PropertySource::TwoQubit {
                family,
                symmetry,
                missing,
            } => two_qubit_entries(source, spec.name, family, symmetry, missing),
        };

        if entries.is_empty() {
            warn!(
                "{}: no calibrated pairs for '{}', omitting it from the target",
                device, spec.name
            );
            continue;
        }
        target.add_instruction(operation, entries)?;
    }

    target.validate()?;
    debug!(
        "Built target {} with {} qubits and {} instructions",
        device,
        target.num_qubits(),
        target.num_instructions()
    );
    Ok(target)
}

fn per_qubit(
    source: &dyn CalibrationSource,
    figures: impl Fn(u32) -> DeviceResult<InstructionProperties>,
) -> DeviceResult<Vec<Entry>> {
    (0..source.num_qubits())
        .map(|q| Ok((Qargs::single(q), Some(figures(q)?))))
        .collect()
}

/// Pairs to look up: listed order, duplicates removed. Mirrored families
/// treat `(a, b)` and `(b, a)` as one pair.
fn distinct_pairs(connectivity: &[(u32, u32)], symmetry: Symmetry) -> Vec<(u32, u32)> {
    let mut seen = FxHashSet::default();
    connectivity
        .iter()
        .copied()
        .filter(|&(a, b)| {
            let key = match symmetry {
                Symmetry::Mirrored => (a.min(b), a.max(b)),
                Symmetry::Directed => (a, b),
            };
            seen.insert(key)
        })
        .collect()
}

fn two_qubit_entries(
    source: &dyn CalibrationSource,
    operation: &str,
    family: &str,
    symmetry: Symmetry,
    missing: MissingPairs,
) -> Vec<Entry> {
    let connectivity = source.connectivity();
    let mut calibrated = Vec::new();
    let mut uncalibrated = Vec::new();
    for (a, b) in distinct_pairs(&connectivity, symmetry) {
        match source.two_qubit(family, a, b) {
            Some(props) => calibrated.push(((a, b), props)),
            None => uncalibrated.push((a, b)),
        }
    }

    if calibrated.is_empty() {
        return Vec::new();
    }

    if !uncalibrated.is_empty() {
        match missing {
            MissingPairs::Skip => debug!(
                "{}: skipping {} uncalibrated pairs for '{}'",
                source.device(),
                uncalibrated.len(),
                operation
            ),
            MissingPairs::MeanBackfill => {
                let mean = mean_properties(calibrated.iter().map(|(_, p)| p));
                warn!(
                    "{}: backfilling {} pairs of '{}' with mean error {:?}",
                    source.device(),
                    uncalibrated.len(),
                    operation,
                    mean.error
                );
                calibrated.extend(uncalibrated.into_iter().map(|pair| (pair, mean)));
            }
        }
    }

    let mut entries = Vec::with_capacity(calibrated.len() * 2);
    for ((a, b), props) in calibrated {
        entries.push((Qargs::pair(a, b), Some(props)));
        if symmetry == Symmetry::Mirrored {
            entries.push((Qargs::pair(b, a), Some(props)));
        }
    }
    entries
}

/// Arithmetic mean of each figure over the entries that carry it.
fn mean_properties<'a>(
    props: impl Iterator<Item = &'a InstructionProperties>,
) -> InstructionProperties {
    let (mut error_sum, mut error_count) = (0.0, 0u32);
    let (mut duration_sum, mut duration_count) = (0.0, 0u32);
    for p in props {
        if let Some(e) = p.error {
            error_sum += e;
            error_count += 1;
        }
        if let Some(d) = p.duration {
            duration_sum += d;
            duration_count += 1;
        }
    }
    let mean = |sum: f64, count: u32| (count > 0).then(|| sum / f64::from(count));
    InstructionProperties::new(
        mean(duration_sum, duration_count),
        mean(error_sum, error_count),
    )
}
