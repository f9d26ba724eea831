//! Gate tables.
//!
//! Two tables resolve gate names to [`Operation`]s:
//!
//! - the **standard** table, covering the OpenQASM-style gates every
//!   toolchain understands (`cx`, `rz`, `xx_plus_yy`, `measure`, ...);
//! - the **vendor** table, an explicit name-to-constructor dispatch for
//!   hardware-specific primitives (`gpi`, `ms`, `rxpi2`, ...).
//!
//! Names present in neither table are not gates the catalog can describe.

use std::f64::consts::{FRAC_PI_2, PI};
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::operation::{Operation, Param};

/// Constructor for a vendor-specific gate.
pub type GateConstructor = fn() -> Operation;

/// Standard gates: name, arity (`None` = variadic), parameter names.
const STANDARD_GATES: &[(&str, Option<u32>, &[&str])] = &[
    ("id", Some(1), &[]),
    ("x", Some(1), &[]),
    ("y", Some(1), &[]),
    ("z", Some(1), &[]),
    ("h", Some(1), &[]),
    ("s", Some(1), &[]),
    ("sdg", Some(1), &[]),
    ("t", Some(1), &[]),
    ("tdg", Some(1), &[]),
    ("sx", Some(1), &[]),
    ("sxdg", Some(1), &[]),
    ("rx", Some(1), &["theta"]),
    ("ry", Some(1), &["theta"]),
    ("rz", Some(1), &["phi"]),
    ("p", Some(1), &["lambda"]),
    ("r", Some(1), &["theta", "phi"]),
    ("u", Some(1), &["theta", "phi", "lambda"]),
    ("u3", Some(1), &["theta", "phi", "lambda"]),
    ("cx", Some(2), &[]),
    ("cy", Some(2), &[]),
    ("cz", Some(2), &[]),
    ("ch", Some(2), &[]),
    ("ecr", Some(2), &[]),
    ("swap", Some(2), &[]),
    ("iswap", Some(2), &[]),
    ("dcx", Some(2), &[]),
    ("cp", Some(2), &["theta"]),
    ("rxx", Some(2), &["theta"]),
    ("ryy", Some(2), &["theta"]),
    ("rzz", Some(2), &["theta"]),
    ("xx_plus_yy", Some(2), &["theta", "beta"]),
    ("measure", Some(1), &[]),
    ("reset", Some(1), &[]),
    ("delay", Some(1), &["t"]),
    ("barrier", None, &[]),
];

/// Vendor-specific gates, dispatched by name.
const VENDOR_GATES: &[(&str, GateConstructor)] = &[
    ("gpi", gpi),
    ("gpi2", gpi2),
    ("ms", ms),
    ("zz", zz),
    ("rxpi", rxpi),
    ("rxpi2", rxpi2),
    ("rxpi2dg", rxpi2dg),
];

static STANDARD_INDEX: LazyLock<FxHashMap<&'static str, usize>> = LazyLock::new(|| {
    STANDARD_GATES
        .iter()
        .enumerate()
        .map(|(i, (name, _, _))| (*name, i))
        .collect()
});

/// Look up a standard gate by name.
pub fn standard_gate(name: &str) -> Option<Operation> {
    let &(name, arity, params) = STANDARD_GATES.get(*STANDARD_INDEX.get(name)?)?;
    let op = match arity {
        Some(n) => Operation::new(name, n),
        None => Operation::variadic(name),
    };
    Some(op.with_symbols(params))
}

/// Whether `name` is in the standard table.
pub fn is_standard_gate(name: &str) -> bool {
    STANDARD_INDEX.contains_key(name)
}

/// Names in the standard table, in table order.
pub fn standard_gate_names() -> impl Iterator<Item = &'static str> {
    STANDARD_GATES.iter().map(|(name, _, _)| *name)
}

/// Look up the constructor for a vendor-specific gate.
pub fn vendor_gate_constructor(name: &str) -> Option<GateConstructor> {
    VENDOR_GATES
        .iter()
        .find(|(vendor, _)| *vendor == name)
        .map(|(_, ctor)| *ctor)
}

/// Build a vendor-specific gate by name.
pub fn vendor_gate(name: &str) -> Option<Operation> {
    vendor_gate_constructor(name).map(|ctor| ctor())
}

/// Names in the vendor table, in table order.
pub fn vendor_gate_names() -> impl Iterator<Item = &'static str> {
    VENDOR_GATES.iter().map(|(name, _)| *name)
}

/// Resolve a gate name against the standard table, then the vendor table.
pub fn lookup(name: &str) -> Option<Operation> {
    standard_gate(name).or_else(|| vendor_gate(name))
}

/// IonQ single-qubit phase flip, `GPI(phi)`.
pub fn gpi() -> Operation {
    Operation::new("gpi", 1).with_symbols(&["phi"])
}

/// IonQ single-qubit half flip, `GPI2(phi)`.
pub fn gpi2() -> Operation {
    Operation::new("gpi2", 1).with_symbols(&["phi"])
}

/// IonQ Mølmer-Sørensen entangler, `MS(phi0, phi1, theta)`.
pub fn ms() -> Operation {
    Operation::new("ms", 2).with_symbols(&["phi0", "phi1", "theta"])
}

/// IonQ native ZZ interaction, `ZZ(theta)`.
pub fn zz() -> Operation {
    Operation::new("zz", 2).with_symbols(&["theta"])
}

/// Rigetti fixed `RX(pi)`.
pub fn rxpi() -> Operation {
    Operation::new("rxpi", 1).with_params(vec![Param::Fixed(PI)])
}

/// Rigetti fixed `RX(pi/2)`.
pub fn rxpi2() -> Operation {
    Operation::new("rxpi2", 1).with_params(vec![Param::Fixed(FRAC_PI_2)])
}

/// Rigetti fixed `RX(-pi/2)`.
pub fn rxpi2dg() -> Operation {
    Operation::new("rxpi2dg", 1).with_params(vec![Param::Fixed(-FRAC_PI_2)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lookup() {
        let cx = standard_gate("cx").unwrap();
        assert_eq!(cx.num_qubits(), Some(2));
        assert!(!cx.is_parameterized());

        let u = standard_gate("u").unwrap();
        assert_eq!(u.params().len(), 3);
        assert!(u.is_parameterized());

        let barrier = standard_gate("barrier").unwrap();
        assert_eq!(barrier.num_qubits(), None);

        assert!(standard_gate("gpi").is_none());
    }

    #[test]
    fn test_vendor_lookup() {
        let ms = vendor_gate("ms").unwrap();
        assert_eq!(ms.num_qubits(), Some(2));
        assert_eq!(ms.params().len(), 3);

        let rxpi2 = vendor_gate("rxpi2").unwrap();
        assert!(!rxpi2.is_parameterized());
        assert_eq!(rxpi2.params(), &[Param::Fixed(FRAC_PI_2)]);

        assert!(vendor_gate("cx").is_none());
        assert!(vendor_gate("unknown_gate").is_none());
    }

    #[test]
    fn test_tables_disjoint() {
        for name in vendor_gate_names() {
            assert!(!is_standard_gate(name), "{name} is in both tables");
        }
    }

    #[test]
    fn test_lookup_prefers_standard() {
        assert_eq!(lookup("rz").unwrap().name(), "rz");
        assert_eq!(lookup("gpi2").unwrap().name(), "gpi2");
        assert!(lookup("unknown_gate").is_none());
    }

    #[test]
    fn test_operation_names_match_table_keys() {
        for name in standard_gate_names() {
            assert_eq!(standard_gate(name).unwrap().name(), name);
        }
        for name in vendor_gate_names() {
            assert_eq!(vendor_gate(name).unwrap().name(), name);
        }
    }
}
