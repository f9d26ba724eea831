//! The catalog facade.
//!
//! A [`Catalog`] owns one device registry and one gateset registry and is the
//! single query surface a compilation orchestrator talks to.

use std::path::Path;
use std::sync::OnceLock;

use qbench_devices::{CalibrationLoader, DeviceRegistry};
use qbench_gatesets::{GatesetRegistry, gateset_for_device};
use qbench_target::TargetModel;
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::levels::{BenchmarkLevel, OptimizationLevel};

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// What a compilation run asks the catalog for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRequest {
    pub level: BenchmarkLevel,
    /// Gateset or device name, depending on the level.
    pub target: Option<String>,
    /// Width of the circuit being compiled.
    pub num_qubits: u32,
    pub opt_level: OptimizationLevel,
}

impl TargetRequest {
    pub fn new(level: BenchmarkLevel, num_qubits: u32) -> Self {
        Self {
            level,
            target: None,
            num_qubits,
            opt_level: OptimizationLevel::default(),
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_opt_level(mut self, opt_level: OptimizationLevel) -> Self {
        self.opt_level = opt_level;
        self
    }
}

/// The target a request resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedTarget {
    /// `alg` and `indep` compile without a target.
    Independent,
    /// A native gateset scaffolded to the circuit width.
    Gateset { name: String, target: TargetModel },
    /// A physical device.
    Device { name: String, target: TargetModel },
}

impl ResolvedTarget {
    pub fn target(&self) -> Option<&TargetModel> {
        match self {
            Self::Independent => None,
            Self::Gateset { target, .. } | Self::Device { target, .. } => Some(target),
        }
    }
}

/// Device and gateset catalog.
#[derive(Debug)]
pub struct Catalog {
    config: CatalogConfig,
    devices: DeviceRegistry,
    gatesets: GatesetRegistry,
}

impl Catalog {
    /// Build a catalog from an already validated configuration.
    pub fn new(config: CatalogConfig) -> Self {
        let loader = match &config.calibration.dir {
            Some(dir) => CalibrationLoader::from_dir(dir),
            None => CalibrationLoader::embedded(),
        };
        let devices = DeviceRegistry::with_builtin_devices(loader);
        let gatesets = GatesetRegistry::with_builtin_gatesets(config.gatesets.seed);
        debug!(
            "Catalog ready: {} devices, {} gatesets",
            devices.names().len(),
            gatesets.names().len()
        );
        Self {
            config,
            devices,
            gatesets,
        }
    }

    /// Load configuration (file, then environment) and build a catalog.
    pub fn load(config_file: Option<&Path>) -> CatalogResult<Self> {
        Ok(Self::new(CatalogConfig::load(config_file)?))
    }

    /// Process-wide catalog, built on first use from defaults and the
    /// environment. An invalid environment falls back to defaults.
    pub fn global() -> &'static Catalog {
        GLOBAL.get_or_init(|| {
            let config = CatalogConfig::load(None).unwrap_or_else(|e| {
                warn!("Ignoring catalog environment: {}", e);
                CatalogConfig::default()
            });
            Self::new(config)
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn devices(&self) -> &DeviceRegistry {
        &self.devices
    }

    pub fn gatesets(&self) -> &GatesetRegistry {
        &self.gatesets
    }

    /// Device names in registration order.
    pub fn device_names(&self) -> &[String] {
        self.devices.names()
    }

    /// Independent copy of a device target.
    pub fn device(&self, name: &str) -> CatalogResult<TargetModel> {
        Ok(self.devices.get(name)?)
    }

    /// Gateset names in registration order.
    pub fn gateset_names(&self) -> &[String] {
        self.gatesets.names()
    }

    /// Independent copy of a gateset scaffolded to `num_qubits`.
    pub fn gateset(&self, name: &str, num_qubits: u32) -> CatalogResult<TargetModel> {
        Ok(self.gatesets.get(name, num_qubits)?)
    }

    /// Gateset at the configured default width.
    pub fn default_gateset(&self, name: &str) -> CatalogResult<TargetModel> {
        self.gateset(name, self.config.gatesets.default_num_qubits)
    }

    /// Native gateset name of a device.
    pub fn gateset_for_device(&self, device: &str) -> CatalogResult<&'static str> {
        if !self.devices.contains(device) {
            return Err(CatalogError::Device(
                qbench_devices::DeviceError::UnknownDevice {
                    name: device.to_string(),
                    available: self.devices.names().to_vec(),
                },
            ));
        }
        Ok(gateset_for_device(device)?)
    }

    /// Resolve a compilation request to its target.
    ///
    /// For `nativegates` the target may name a gateset or a device; a device
    /// name selects the device's native gateset.
    pub fn resolve(&self, request: &TargetRequest) -> CatalogResult<ResolvedTarget> {
        if request.num_qubits == 0 {
            return Err(CatalogError::InvalidQubitCount(request.num_qubits));
        }
        if !request.level.needs_target() {
            return Ok(ResolvedTarget::Independent);
        }
        let name = request
            .target
            .as_deref()
            .ok_or(CatalogError::MissingTarget(request.level))?;

        match request.level {
            BenchmarkLevel::NativeGates => {
                let gateset = if self.gatesets.contains(name) || !self.devices.contains(name) {
                    name
                } else {
                    self.gateset_for_device(name)?
                };
                let target = self.gateset(gateset, request.num_qubits)?;
                Ok(ResolvedTarget::Gateset {
                    name: gateset.to_string(),
                    target,
                })
            }
            BenchmarkLevel::Mapped => {
                let target = self.device(name)?;
                if request.num_qubits > target.num_qubits() {
                    return Err(CatalogError::CircuitTooWide {
                        device: name.to_string(),
                        circuit_qubits: request.num_qubits,
                        device_qubits: target.num_qubits(),
                    });
                }
                Ok(ResolvedTarget::Device {
                    name: name.to_string(),
                    target,
                })
            }
            BenchmarkLevel::Alg | BenchmarkLevel::Indep => Ok(ResolvedTarget::Independent),
        }
    }
}
