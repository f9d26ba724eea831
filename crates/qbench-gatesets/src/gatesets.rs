//! Gateset definitions.

/// How a gateset's target is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaffold {
    /// Every operation global, no properties. Used for pure target alphabets.
    Dense,
    /// Full ordered-pair connectivity with seeded synthetic properties.
    Generic,
}

/// A named native gate alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatesetSpec {
    pub name: &'static str,
    pub gates: &'static [&'static str],
    pub scaffold: Scaffold,
}

const fn generic(name: &'static str, gates: &'static [&'static str]) -> GatesetSpec {
    GatesetSpec {
        name,
        gates,
        scaffold: Scaffold::Generic,
    }
}

const fn dense(name: &'static str, gates: &'static [&'static str]) -> GatesetSpec {
    GatesetSpec {
        name,
        gates,
        scaffold: Scaffold::Dense,
    }
}

const CLIFFORD_T: &[&str] = &[
    "id", "x", "y", "z", "h", "s", "sdg", "t", "tdg", "sx", "sxdg", "cx", "cy", "cz", "swap",
    "iswap", "dcx", "ecr", "measure", "barrier",
];

const CLIFFORD_T_ROTATIONS: &[&str] = &[
    "id", "x", "y", "z", "h", "s", "sdg", "t", "tdg", "sx", "sxdg", "cx", "cy", "cz", "swap",
    "iswap", "dcx", "ecr", "measure", "barrier", "rx", "ry", "rz",
];

/// Every gateset in registration order.
pub const GATESETS: &[GatesetSpec] = &[
    generic("ibm_falcon", &["id", "rz", "sx", "x", "cx", "measure", "barrier"]),
    generic("ibm_eagle", &["id", "rz", "sx", "x", "ecr", "measure", "barrier"]),
    generic("ibm_heron", &["id", "rz", "sx", "x", "cz", "measure", "barrier"]),
    generic("ionq_aria", &["gpi", "gpi2", "ms", "measure"]),
    generic("ionq_forte", &["gpi", "gpi2", "zz", "measure"]),
    generic("iqm", &["r", "cz", "measure"]),
    generic("quantinuum", &["rx", "ry", "rz", "rzz", "measure"]),
    generic("rigetti", &["rxpi", "rxpi2", "rxpi2dg", "rz", "iswap", "measure"]),
    generic("rigetti_aspen", &["rx", "rz", "cz", "cp", "xx_plus_yy", "measure"]),
    dense("clifford+t", CLIFFORD_T),
    dense("clifford+t+rotations", CLIFFORD_T_ROTATIONS),
];

/// Look up a gateset definition by name.
pub fn gateset_spec(name: &str) -> Option<&'static GatesetSpec> {
    GATESETS.iter().find(|g| g.name == name)
}
