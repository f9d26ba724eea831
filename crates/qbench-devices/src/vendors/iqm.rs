//! IQM Crystal devices: phased-rx `r` and `cz` on a square lattice.

use qbench_target::TargetModel;

use crate::builder::build_target;
use crate::calibration::CalibrationLoader;
use crate::capability::{MissingPairs, OperationSpec, Symmetry};
use crate::error::DeviceResult;

pub const CRYSTAL_OPERATIONS: &[OperationSpec] = &[
    OperationSpec::single_qubit("r"),
    OperationSpec::two_qubit("cz", "cz", Symmetry::Mirrored, MissingPairs::Skip),
    OperationSpec::readout("measure"),
];

fn build(loader: &CalibrationLoader, device: &str) -> DeviceResult<TargetModel> {
    let calibration = loader.load_per_qubit(device)?;
    build_target(&calibration, CRYSTAL_OPERATIONS)
}

pub fn crystal_5(loader: &CalibrationLoader) -> DeviceResult<TargetModel> {
    build(loader, "iqm_crystal_5")
}

pub fn crystal_20(loader: &CalibrationLoader) -> DeviceResult<TargetModel> {
    build(loader, "iqm_crystal_20")
}

pub fn crystal_54(loader: &CalibrationLoader) -> DeviceResult<TargetModel> {
    build(loader, "iqm_crystal_54")
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbench_target::Qargs;

    #[test]
    fn test_crystal_5_star() {
        let target = crystal_5(&CalibrationLoader::embedded()).unwrap();
        let cz = target.instruction("cz").unwrap();
        assert_eq!(cz.num_entries(), 8);
        for q in [0, 1, 3, 4] {
            for qargs in [Qargs::pair(q, 2), Qargs::pair(2, q)] {
                let err = cz.properties(qargs).unwrap().error.unwrap();
                assert!((err - 0.0311).abs() < 1e-12);
            }
        }
        let r = target.properties("r", Qargs::single(0)).unwrap();
        assert_eq!(r.duration, Some(40e-9));
    }
}
