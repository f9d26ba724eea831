//! Rigetti superconducting devices.
//!
//! Aspen-M3 addresses qubits by octagon ring and position and is missing one
//! fabricated qubit; Ankaa numbers qubits consecutively. Two-qubit figures are
//! calibrated per gate family on a subset of the coupled pairs, so every
//! family backfills its uncalibrated pairs with its mean.

use qbench_target::TargetModel;

use crate::addressing::{ASPEN_M3_LAYOUT, LinearAddressing};
use crate::builder::build_target;
use crate::calibration::CalibrationLoader;
use crate::capability::{MissingPairs, OperationSpec, Symmetry};
use crate::error::DeviceResult;

pub const ASPEN_OPERATIONS: &[OperationSpec] = &[
    OperationSpec::single_qubit("rx"),
    OperationSpec::virtual_gate("rz"),
    OperationSpec::two_qubit("cz", "fCZ", Symmetry::Mirrored, MissingPairs::MeanBackfill),
    OperationSpec::two_qubit("cp", "fCPHASE", Symmetry::Mirrored, MissingPairs::MeanBackfill),
    OperationSpec::two_qubit(
        "xx_plus_yy",
        "fXY",
        Symmetry::Mirrored,
        MissingPairs::MeanBackfill,
    ),
    OperationSpec::readout("measure"),
];

pub const ANKAA_OPERATIONS: &[OperationSpec] = &[
    OperationSpec::single_qubit("rxpi"),
    OperationSpec::single_qubit("rxpi2"),
    OperationSpec::single_qubit("rxpi2dg"),
    OperationSpec::virtual_gate("rz"),
    OperationSpec::two_qubit("iswap", "fISWAP", Symmetry::Mirrored, MissingPairs::MeanBackfill),
    OperationSpec::readout("measure"),
];

pub fn aspen_m3(loader: &CalibrationLoader) -> DeviceResult<TargetModel> {
    let calibration = loader.load_rigetti("rigetti_aspen_m3", &ASPEN_M3_LAYOUT)?;
    build_target(&calibration, ASPEN_OPERATIONS)
}

pub fn ankaa_84(loader: &CalibrationLoader) -> DeviceResult<TargetModel> {
    let calibration = loader.load_rigetti("rigetti_ankaa_84", &LinearAddressing::new(84))?;
    build_target(&calibration, ANKAA_OPERATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspen_m3_families() {
        let target = aspen_m3(&CalibrationLoader::embedded()).unwrap();
        assert_eq!(target.num_qubits(), 79);
        for name in ["cz", "cp", "xx_plus_yy"] {
            assert!(target.is_symmetric(name), "{name}");
        }
        // Backfill fills every family up to the full coupling map.
        let pairs = target.coupling_pairs().len();
        for name in ["cz", "cp", "xx_plus_yy"] {
            assert_eq!(target.instruction(name).unwrap().num_entries(), pairs * 2);
        }
    }

    #[test]
    fn test_ankaa_84() {
        let target = ankaa_84(&CalibrationLoader::embedded()).unwrap();
        assert_eq!(target.num_qubits(), 84);
        assert!(target.contains("rxpi2dg"));
        assert!(target.is_symmetric("iswap"));
    }
}
