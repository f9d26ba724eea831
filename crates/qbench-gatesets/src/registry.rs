//! Gateset registry.
//!
//! Like the device registry, but a gateset is built once per requested width:
//! the cache holds one target per `(name, num_qubits)`. Only successful builds
//! are stored.

use std::sync::{Arc, Mutex, PoisonError};

use qbench_target::TargetModel;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::builder::{MAX_GATESET_QUBITS, build_gateset};
use crate::error::{GatesetError, GatesetResult};
use crate::gatesets::GATESETS;

/// Builder closure type, parameterized by qubit count.
type GatesetBuilder = Box<dyn Fn(u32) -> GatesetResult<TargetModel> + Send + Sync>;

struct Entry {
    builder: GatesetBuilder,
    /// Serializes builds of this gateset so each width is built once.
    build_lock: Mutex<()>,
    widths: Mutex<FxHashMap<u32, Arc<TargetModel>>>,
}

impl Entry {
    fn cached(&self, num_qubits: u32) -> Option<Arc<TargetModel>> {
        self.widths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&num_qubits)
            .cloned()
    }
}

/// Central registry for native gatesets.
pub struct GatesetRegistry {
    names: Vec<String>,
    entries: FxHashMap<String, Entry>,
}

impl GatesetRegistry {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            entries: FxHashMap::default(),
        }
    }

    /// Registry of every built-in gateset, scaffolded with `seed`.
    pub fn with_builtin_gatesets(seed: u64) -> Self {
        let mut registry = Self::new();
        for spec in GATESETS {
            registry.register(spec.name, move |n| build_gateset(spec, n, seed));
        }
        registry
    }

    /// Register a gateset builder. Re-registering a name replaces its
    /// builder and clears its cache.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        builder: impl Fn(u32) -> GatesetResult<TargetModel> + Send + Sync + 'static,
    ) {
        let name = name.into();
        debug!("Registering gateset: {}", name);
        let entry = Entry {
            builder: Box::new(builder),
            build_lock: Mutex::new(()),
            widths: Mutex::new(FxHashMap::default()),
        };
        if self.entries.insert(name.clone(), entry).is_none() {
            self.names.push(name);
        }
    }

    /// Gateset names in registration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Whether the gateset has been built at this width.
    pub fn is_cached(&self, name: &str, num_qubits: u32) -> bool {
        self.entries
            .get(name)
            .is_some_and(|entry| entry.cached(num_qubits).is_some())
    }

    /// Get an independent copy of a gateset scaffolded to `num_qubits`.
    pub fn get(&self, name: &str, num_qubits: u32) -> GatesetResult<TargetModel> {
        self.get_shared(name, num_qubits)
            .map(|target| (*target).clone())
    }

    pub(crate) fn get_shared(
        &self,
        name: &str,
        num_qubits: u32,
    ) -> GatesetResult<Arc<TargetModel>> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| GatesetError::UnknownGateset {
                name: name.to_string(),
                available: self.names.clone(),
            })?;

        if num_qubits > MAX_GATESET_QUBITS {
            return Err(GatesetError::InvalidQubitCount {
                gateset: name.to_string(),
                num_qubits,
                min: 1,
                max: MAX_GATESET_QUBITS,
            });
        }

        if let Some(target) = entry.cached(num_qubits) {
            return Ok(target);
        }

        let _building = entry.build_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(target) = entry.cached(num_qubits) {
            return Ok(target);
        }

        info!("Building gateset {} on {} qubits", name, num_qubits);
        let target = Arc::new((entry.builder)(num_qubits)?);
        entry
            .widths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(num_qubits, Arc::clone(&target));
        Ok(target)
    }
}

impl Default for GatesetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GatesetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatesetRegistry")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DEFAULT_SEED;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_cached_per_width() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut registry = GatesetRegistry::new();
        registry.register("g", move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(TargetModel::new("g", n))
        });

        registry.get("g", 4).unwrap();
        registry.get("g", 4).unwrap();
        registry.get("g", 8).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(registry.is_cached("g", 4));
        assert!(!registry.is_cached("g", 5));
    }

    fn cached_widths(registry: &GatesetRegistry, name: &str) -> usize {
        registry.entries[name].widths.lock().unwrap().len()
    }

    #[test]
    fn test_failures_are_not_cached() {
        let registry = GatesetRegistry::with_builtin_gatesets(DEFAULT_SEED);
        assert!(registry.get("iqm", 1).is_err());
        assert!(!registry.is_cached("iqm", 1));
        assert_eq!(cached_widths(&registry, "iqm"), 0);

        registry.get("iqm", 3).unwrap();
        assert_eq!(cached_widths(&registry, "iqm"), 1);
    }

    #[test]
    fn test_width_limit_rejected_before_build() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut registry = GatesetRegistry::new();
        registry.register("g", move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(TargetModel::new("g", n))
        });

        for width in [MAX_GATESET_QUBITS + 1, 100_000] {
            let err = registry.get("g", width).unwrap_err();
            assert!(matches!(
                err,
                GatesetError::InvalidQubitCount { max: MAX_GATESET_QUBITS, .. }
            ));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(cached_widths(&registry, "g"), 0);

        registry.get("g", MAX_GATESET_QUBITS).unwrap();
        assert!(registry.is_cached("g", MAX_GATESET_QUBITS));
    }

    #[test]
    fn test_concurrent_first_use_builds_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut registry = GatesetRegistry::new();
        registry.register("g", move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(TargetModel::new("g", n))
        });

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| registry.get("g", 6).unwrap());
            }
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unknown_gateset_message() {
        let mut registry = GatesetRegistry::new();
        registry.register("x1", |n| Ok(TargetModel::new("x1", n)));
        registry.register("x2", |n| Ok(TargetModel::new("x2", n)));
        let err = registry.get("x3", 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown gateset 'x3'. Available gatesets: x1, x2"
        );
    }
}
