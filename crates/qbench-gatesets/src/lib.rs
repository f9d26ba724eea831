//! qbench Native Gatesets
//!
//! Target models for vendor gate alphabets, independent of any one chip.
//!
//! - [`gatesets`]: the gateset table (gate lists and scaffold kind)
//! - [`builder`]: dense and generic scaffolds
//! - [`association`]: which gateset each catalog device compiles to
//! - [`registry`]: build-once cache keyed by name and width
//!
//! # Example
//!
//! ```
//! use qbench_gatesets::{DEFAULT_SEED, GatesetRegistry};
//! use qbench_target::Qargs;
//!
//! let registry = GatesetRegistry::with_builtin_gatesets(DEFAULT_SEED);
//! let iqm = registry.get("iqm", 4)?;
//!
//! assert!(iqm.supports("cz", Qargs::pair(3, 0)));
//! assert!(registry.get("clifford+t", 4)?.instruction("t").unwrap().is_global());
//! # Ok::<(), qbench_gatesets::GatesetError>(())
//! ```

pub mod association;
pub mod builder;
pub mod error;
pub mod gatesets;
pub mod registry;

pub use association::{DEVICE_TO_GATESET, gateset_for_device, unique_gatesets};
pub use builder::{
    DEFAULT_SEED, MAX_GATESET_QUBITS, MEASURE_RANGES, PropertyRanges, SINGLE_QUBIT_RANGES,
    TWO_QUBIT_RANGES, build_gateset, resolve_gate,
};
pub use error::{GatesetError, GatesetResult};
pub use gatesets::{GATESETS, GatesetSpec, Scaffold, gateset_spec};
pub use registry::GatesetRegistry;
