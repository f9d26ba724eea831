//! qbench Device Targets
//!
//! Calibration-driven target models for the hardware in the qbench catalog.
//!
//! A device target is assembled in three steps:
//!
//! 1. A [`CalibrationLoader`] reads the device's calibration document
//!    (embedded, or from an override directory) and validates it into a
//!    record. Rigetti records are translated from hardware qubit numbering
//!    into dense indices on the way in (see [`addressing`]).
//! 2. The vendor's capability table ([`OperationSpec`] rows) says which
//!    operations the device supports and which record figures feed them.
//! 3. [`build_target`] walks the table against the record and returns a
//!    validated [`TargetModel`](qbench_target::TargetModel).
//!
//! The [`DeviceRegistry`] builds each device at most once and hands out
//! independent copies.
//!
//! # Example
//!
//! ```
//! use qbench_devices::{CalibrationLoader, DeviceRegistry};
//! use qbench_target::Qargs;
//!
//! let registry = DeviceRegistry::with_builtin_devices(CalibrationLoader::embedded());
//! let target = registry.get("iqm_crystal_5")?;
//!
//! assert_eq!(target.num_qubits(), 5);
//! assert!(target.supports("cz", Qargs::pair(2, 0)));
//! # Ok::<(), qbench_devices::DeviceError>(())
//! ```

pub mod addressing;
pub mod builder;
pub mod calibration;
pub mod capability;
pub mod error;
pub mod registry;
pub mod vendors;

pub use addressing::{
    ASPEN_M3_DEFECT, ASPEN_M3_LAYOUT, AddressingScheme, LinearAddressing, QubitAddressing,
    RemapError, RingLayout,
};
pub use builder::build_target;
pub use calibration::{
    CalibrationLoader, CalibrationSource, Connectivity, MeanCalibration, MeanFigures,
    PerQubitCalibration, RigettiCalibration,
};
pub use capability::{MissingPairs, OperationSpec, PropertySource, Symmetry};
pub use error::{DeviceError, DeviceResult};
pub use registry::DeviceRegistry;
pub use vendors::{BUILTIN_DEVICES, DeviceEntry, builtin_device};
