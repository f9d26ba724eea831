//! IonQ trapped-ion devices.
//!
//! IonQ publishes only device-wide means, so the figures for each generation
//! live here rather than in a calibration document. Every ion couples to
//! every other.

use qbench_target::TargetModel;

use crate::builder::build_target;
use crate::calibration::{AllToAll, CalibrationLoader, Connectivity, MeanCalibration, MeanFigures};
use crate::capability::{MissingPairs, OperationSpec, Symmetry};
use crate::error::DeviceResult;

pub const ARIA_FIGURES: MeanFigures = MeanFigures {
    one_q_fidelity: 0.9829,
    two_q_fidelity: 0.996,
    spam_fidelity: 0.9993,
    one_q_duration: 135e-6,
    two_q_duration: 600e-6,
    readout_duration: 300e-6,
};

pub const FORTE_FIGURES: MeanFigures = MeanFigures {
    one_q_fidelity: 0.9998,
    two_q_fidelity: 0.9952,
    spam_fidelity: 0.9959,
    one_q_duration: 130e-6,
    two_q_duration: 970e-6,
    readout_duration: 150e-6,
};

pub const ARIA_OPERATIONS: &[OperationSpec] = &[
    OperationSpec::single_qubit("gpi"),
    OperationSpec::single_qubit("gpi2"),
    OperationSpec::two_qubit("ms", "ms", Symmetry::Mirrored, MissingPairs::Skip),
    OperationSpec::readout("measure"),
];

pub const FORTE_OPERATIONS: &[OperationSpec] = &[
    OperationSpec::single_qubit("gpi"),
    OperationSpec::single_qubit("gpi2"),
    OperationSpec::two_qubit("zz", "zz", Symmetry::Mirrored, MissingPairs::Skip),
    OperationSpec::readout("measure"),
];

fn build(
    device: &str,
    num_qubits: u32,
    figures: MeanFigures,
    ops: &[OperationSpec],
) -> DeviceResult<TargetModel> {
    let calibration = MeanCalibration::new(
        device,
        num_qubits,
        &Connectivity::AllToAll(AllToAll::AllToAll),
        figures,
    )?;
    build_target(&calibration, ops)
}

pub fn aria_25(_loader: &CalibrationLoader) -> DeviceResult<TargetModel> {
    build("ionq_aria_25", 25, ARIA_FIGURES, ARIA_OPERATIONS)
}

pub fn forte_36(_loader: &CalibrationLoader) -> DeviceResult<TargetModel> {
    build("ionq_forte_36", 36, FORTE_FIGURES, FORTE_OPERATIONS)
}
