//! qbench Target Model
//!
//! Machine-readable descriptions of quantum hardware and native gatesets:
//! qubit count, supported operations and per-operation timing/error
//! calibration keyed by qubit tuple.
//!
//! # Example
//!
//! ```
//! use qbench_target::{gates, InstructionProperties, Qargs, TargetModel};
//!
//! let mut target = TargetModel::new("two_qubit_demo", 2);
//! target.add_instruction(
//!     gates::standard_gate("rz").unwrap(),
//!     (0..2).map(|q| (Qargs::single(q), Some(InstructionProperties::virtual_gate()))),
//! )?;
//! target.add_instruction(
//!     gates::standard_gate("cz").unwrap(),
//!     [
//!         (Qargs::pair(0, 1), Some(InstructionProperties::new(Some(6e-8), Some(0.01)))),
//!         (Qargs::pair(1, 0), Some(InstructionProperties::new(Some(6e-8), Some(0.01)))),
//!     ],
//! )?;
//!
//! assert!(target.is_symmetric("cz"));
//! assert!(target.properties("rz", Qargs::single(1)).unwrap().is_virtual());
//! # Ok::<(), qbench_target::TargetError>(())
//! ```

pub mod error;
pub mod gates;
pub mod operation;
pub mod properties;
pub mod qargs;
pub mod target;

pub use error::{TargetError, TargetResult};
pub use operation::{Operation, Param};
pub use properties::InstructionProperties;
pub use qargs::Qargs;
pub use target::{Instruction, InstructionSupport, QargsMap, TargetModel};
