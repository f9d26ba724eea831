//! IBM superconducting devices (Falcon, Eagle, Heron).
//!
//! Basis `{id, rz, sx, x}` plus one entangling gate per generation: `cx` on
//! Falcon, echoed cross-resonance `ecr` on Eagle, `cz` on Heron. Eagle's
//! `ecr` is only calibrated in the direction the hardware drives it.

use qbench_target::TargetModel;

use crate::builder::build_target;
use crate::calibration::CalibrationLoader;
use crate::capability::{MissingPairs, OperationSpec, Symmetry};
use crate::error::DeviceResult;

pub const FALCON_OPERATIONS: &[OperationSpec] = &[
    OperationSpec::single_qubit("id"),
    OperationSpec::virtual_gate("rz"),
    OperationSpec::single_qubit("sx"),
    OperationSpec::single_qubit("x"),
    OperationSpec::two_qubit("cx", "cx", Symmetry::Mirrored, MissingPairs::Skip),
    OperationSpec::readout("measure"),
];

pub const EAGLE_OPERATIONS: &[OperationSpec] = &[
    OperationSpec::single_qubit("id"),
    OperationSpec::virtual_gate("rz"),
    OperationSpec::single_qubit("sx"),
    OperationSpec::single_qubit("x"),
    OperationSpec::two_qubit("ecr", "ecr", Symmetry::Directed, MissingPairs::Skip),
    OperationSpec::readout("measure"),
];

pub const HERON_OPERATIONS: &[OperationSpec] = &[
    OperationSpec::single_qubit("id"),
    OperationSpec::virtual_gate("rz"),
    OperationSpec::single_qubit("sx"),
    OperationSpec::single_qubit("x"),
    OperationSpec::two_qubit("cz", "cz", Symmetry::Mirrored, MissingPairs::Skip),
    OperationSpec::readout("measure"),
];

fn build(
    loader: &CalibrationLoader,
    device: &str,
    ops: &[OperationSpec],
) -> DeviceResult<TargetModel> {
    let calibration = loader.load_per_qubit(device)?;
    build_target(&calibration, ops)
}

pub fn falcon_27(loader: &CalibrationLoader) -> DeviceResult<TargetModel> {
    build(loader, "ibm_falcon_27", FALCON_OPERATIONS)
}

pub fn falcon_127(loader: &CalibrationLoader) -> DeviceResult<TargetModel> {
    build(loader, "ibm_falcon_127", FALCON_OPERATIONS)
}

pub fn eagle_127(loader: &CalibrationLoader) -> DeviceResult<TargetModel> {
    build(loader, "ibm_eagle_127", EAGLE_OPERATIONS)
}

pub fn heron_133(loader: &CalibrationLoader) -> DeviceResult<TargetModel> {
    build(loader, "ibm_heron_133", HERON_OPERATIONS)
}

pub fn heron_156(loader: &CalibrationLoader) -> DeviceResult<TargetModel> {
    build(loader, "ibm_heron_156", HERON_OPERATIONS)
}
