//! qbench Catalog
//!
//! The query surface over every device and native gateset qbench can compile
//! benchmarks for.
//!
//! # Example
//!
//! ```
//! use qbench_catalog::{BenchmarkLevel, Catalog, CatalogConfig, ResolvedTarget, TargetRequest};
//!
//! let catalog = Catalog::new(CatalogConfig::default());
//! assert!(catalog.device_names().iter().any(|d| d == "iqm_crystal_20"));
//!
//! let request = TargetRequest::new(BenchmarkLevel::Mapped, 12).with_target("iqm_crystal_20");
//! match catalog.resolve(&request)? {
//!     ResolvedTarget::Device { target, .. } => assert_eq!(target.num_qubits(), 20),
//!     other => panic!("unexpected {other:?}"),
//! }
//! # Ok::<(), qbench_catalog::CatalogError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod levels;

pub use catalog::{Catalog, ResolvedTarget, TargetRequest};
pub use config::{CalibrationConfig, CatalogConfig, ConfigError, GatesetConfig, LoggingConfig};
pub use error::{CatalogError, CatalogResult};
pub use levels::{BenchmarkLevel, OptimizationLevel};
