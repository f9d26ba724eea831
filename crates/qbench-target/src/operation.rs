//! Operation descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A gate parameter: either bound to a value or left symbolic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Param {
    /// A fixed angle in radians.
    Fixed(f64),
    /// A free parameter, bound when a circuit uses the gate.
    Symbol(String),
}

impl Param {
    /// Create a symbolic parameter.
    pub fn symbol(name: impl Into<String>) -> Self {
        Param::Symbol(name.into())
    }

    /// Whether the parameter is free.
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Param::Symbol(_))
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Fixed(v) => write!(f, "{v}"),
            Param::Symbol(name) => write!(f, "{name}"),
        }
    }
}

/// A named operation a target can execute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    name: String,
    /// `None` for variadic directives such as `barrier`.
    num_qubits: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    params: Vec<Param>,
}

impl Operation {
    /// Operation acting on a fixed number of qubits.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits: Some(num_qubits),
            params: Vec::new(),
        }
    }

    /// Operation acting on any number of qubits.
    pub fn variadic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_qubits: None,
            params: Vec::new(),
        }
    }

    /// Attach parameters.
    pub fn with_params(mut self, params: Vec<Param>) -> Self {
        self.params = params;
        self
    }

    /// Attach one free parameter per name.
    pub fn with_symbols(self, names: &[&str]) -> Self {
        let params = names.iter().map(|n| Param::symbol(*n)).collect();
        self.with_params(params)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_qubits(&self) -> Option<u32> {
        self.num_qubits
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Whether any parameter is left free.
    pub fn is_parameterized(&self) -> bool {
        self.params.iter().any(Param::is_symbolic)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.params.is_empty() {
            let params: Vec<String> = self.params.iter().map(ToString::to_string).collect();
            write!(f, "({})", params.join(", "))?;
        }
        Ok(())
    }
}
