//! Device registry with build-once caching.
//!
//! The [`DeviceRegistry`] maps device names to builder closures and keeps the
//! first successfully built target of each device. Callers always receive an
//! owned copy, so mutating a returned target never leaks into the cache.

use std::sync::{Arc, Mutex, PoisonError};

use qbench_target::TargetModel;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::calibration::CalibrationLoader;
use crate::error::{DeviceError, DeviceResult};
use crate::vendors::BUILTIN_DEVICES;

/// Builder closure type for registered devices.
type DeviceBuilder = Box<dyn Fn() -> DeviceResult<TargetModel> + Send + Sync>;

struct Slot {
    builder: DeviceBuilder,
    cached: Mutex<Option<Arc<TargetModel>>>,
}

/// Central registry for device targets.
pub struct DeviceRegistry {
    /// Registration order.
    names: Vec<String>,
    slots: FxHashMap<String, Slot>,
}

impl DeviceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            slots: FxHashMap::default(),
        }
    }

    /// Registry of every built-in device, reading calibration through `loader`.
    pub fn with_builtin_devices(loader: CalibrationLoader) -> Self {
        let loader = Arc::new(loader);
        let mut registry = Self::new();
        for device in BUILTIN_DEVICES {
            let loader = Arc::clone(&loader);
            let build = device.build;
            registry.register(device.name, move || build(&loader));
        }
        registry
    }

    /// Register a device builder. Re-registering a name replaces its builder
    /// and drops any cached target, keeping its original position.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        builder: impl Fn() -> DeviceResult<TargetModel> + Send + Sync + 'static,
    ) {
        let name = name.into();
        debug!("Registering device: {}", name);
        let slot = Slot {
            builder: Box::new(builder),
            cached: Mutex::new(None),
        };
        if self.slots.insert(name.clone(), slot).is_none() {
            self.names.push(name);
        }
    }

    /// Device names in registration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether a device is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Whether a device's target has been built already.
    pub fn is_cached(&self, name: &str) -> bool {
        self.slots.get(name).is_some_and(|slot| {
            slot.cached
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .is_some()
        })
    }

    /// Get an independent copy of a device's target, building it on first use.
    pub fn get(&self, name: &str) -> DeviceResult<TargetModel> {
        self.get_shared(name).map(|target| (*target).clone())
    }

    /// Shared handle to the cached target.
    pub(crate) fn get_shared(&self, name: &str) -> DeviceResult<Arc<TargetModel>> {
        let slot = self
            .slots
            .get(name)
            .ok_or_else(|| DeviceError::UnknownDevice {
                name: name.to_string(),
                available: self.names.clone(),
            })?;

        // The lock is held across the build so concurrent first callers wait
        // for one build instead of racing.
        let mut cached = slot.cached.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(target) = cached.as_ref() {
            return Ok(Arc::clone(target));
        }

        info!("Building device target: {}", name);
        let target = Arc::new((slot.builder)()?);
        *cached = Some(Arc::clone(&target));
        debug!("Cached device target: {}", name);
        Ok(target)
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DeviceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceRegistry")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}
