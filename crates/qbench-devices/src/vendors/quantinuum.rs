//! Quantinuum H-series trapped-ion devices.

use qbench_target::TargetModel;

use crate::builder::build_target;
use crate::calibration::CalibrationLoader;
use crate::capability::{MissingPairs, OperationSpec, Symmetry};
use crate::error::DeviceResult;

pub const H2_OPERATIONS: &[OperationSpec] = &[
    OperationSpec::single_qubit("rx"),
    OperationSpec::single_qubit("ry"),
    OperationSpec::virtual_gate("rz"),
    OperationSpec::two_qubit("rzz", "rzz", Symmetry::Mirrored, MissingPairs::Skip),
    OperationSpec::readout("measure"),
];

pub fn h2_56(loader: &CalibrationLoader) -> DeviceResult<TargetModel> {
    let calibration = loader.load_mean("quantinuum_h2_56")?;
    build_target(&calibration, H2_OPERATIONS)
}
