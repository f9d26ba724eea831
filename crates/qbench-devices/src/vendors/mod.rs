//! Built-in device catalog.
//!
//! Each vendor module owns its capability tables and knows which calibration
//! schema its devices use. [`BUILTIN_DEVICES`] fixes the registration order.

pub mod ibm;
pub mod ionq;
pub mod iqm;
pub mod quantinuum;
pub mod rigetti;

use qbench_target::TargetModel;

use crate::calibration::CalibrationLoader;
use crate::capability::OperationSpec;
use crate::error::DeviceResult;

/// Builds the target for one device from a loader.
pub type DeviceBuildFn = fn(&CalibrationLoader) -> DeviceResult<TargetModel>;

/// A catalog entry: device name, advertised qubit count, the capability
/// table its builder walks, and the builder.
#[derive(Debug, Clone, Copy)]
pub struct DeviceEntry {
    pub name: &'static str,
    pub num_qubits: u32,
    pub operations: &'static [OperationSpec],
    pub build: DeviceBuildFn,
}

const fn entry(
    name: &'static str,
    num_qubits: u32,
    operations: &'static [OperationSpec],
    build: DeviceBuildFn,
) -> DeviceEntry {
    DeviceEntry {
        name,
        num_qubits,
        operations,
        build,
    }
}

/// Every device in registration order.
pub const BUILTIN_DEVICES: &[DeviceEntry] = &[
    entry("ibm_falcon_27", 27, ibm::FALCON_OPERATIONS, ibm::falcon_27),
    entry("ibm_falcon_127", 127, ibm::FALCON_OPERATIONS, ibm::falcon_127),
    entry("ibm_eagle_127", 127, ibm::EAGLE_OPERATIONS, ibm::eagle_127),
    entry("ibm_heron_133", 133, ibm::HERON_OPERATIONS, ibm::heron_133),
    entry("ibm_heron_156", 156, ibm::HERON_OPERATIONS, ibm::heron_156),
    entry("ionq_aria_25", 25, ionq::ARIA_OPERATIONS, ionq::aria_25),
    entry("ionq_forte_36", 36, ionq::FORTE_OPERATIONS, ionq::forte_36),
    entry("iqm_crystal_5", 5, iqm::CRYSTAL_OPERATIONS, iqm::crystal_5),
    entry("iqm_crystal_20", 20, iqm::CRYSTAL_OPERATIONS, iqm::crystal_20),
    entry("iqm_crystal_54", 54, iqm::CRYSTAL_OPERATIONS, iqm::crystal_54),
    entry("quantinuum_h2_56", 56, quantinuum::H2_OPERATIONS, quantinuum::h2_56),
    entry("rigetti_aspen_m3", 79, rigetti::ASPEN_OPERATIONS, rigetti::aspen_m3),
    entry("rigetti_ankaa_84", 84, rigetti::ANKAA_OPERATIONS, rigetti::ankaa_84),
];

/// Look up a catalog entry by name.
pub fn builtin_device(name: &str) -> Option<&'static DeviceEntry> {
    BUILTIN_DEVICES.iter().find(|d| d.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_names_are_unique() {
        let names: FxHashSet<_> = BUILTIN_DEVICES.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), BUILTIN_DEVICES.len());
    }

    #[test]
    fn test_every_file_backed_device_has_a_document() {
        let embedded: FxHashSet<_> = crate::calibration::embedded_devices().collect();
        for device in BUILTIN_DEVICES {
            if !device.name.starts_with("ionq_") {
                assert!(embedded.contains(device.name), "{}", device.name);
            }
        }
    }

    #[test]
    fn test_entries_list_their_capability_table() {
        let eagle = builtin_device("ibm_eagle_127").unwrap();
        assert!(eagle.operations.iter().any(|op| op.name == "ecr"));
        assert!(BUILTIN_DEVICES.iter().all(|d| !d.operations.is_empty()));
    }

    #[test]
    fn test_builtin_device_lookup() {
        assert_eq!(builtin_device("iqm_crystal_20").unwrap().num_qubits, 20);
        assert!(builtin_device("iqm_crystal_21").is_none());
    }
}
