//! Qubit tuples keying per-instruction calibration.

use std::fmt;
use std::iter;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// The qubits an instruction entry applies to.
///
/// Pairs are ordered: `Pair(0, 1)` and `Pair(1, 0)` are distinct entries,
/// which is how directed two-qubit gates are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Vec<u32>", try_from = "Vec<u32>")]
pub enum Qargs {
    /// A single qubit.
    Single(u32),
    /// An ordered pair of qubits.
    Pair(u32, u32),
}

impl Qargs {
    /// Tuple for a single qubit.
    pub fn single(qubit: u32) -> Self {
        Qargs::Single(qubit)
    }

    /// Ordered tuple for a qubit pair.
    pub fn pair(a: u32, b: u32) -> Self {
        Qargs::Pair(a, b)
    }

    /// Number of qubits in the tuple.
    pub fn arity(self) -> u32 {
        match self {
            Qargs::Single(_) => 1,
            Qargs::Pair(_, _) => 2,
        }
    }

    /// The qubits in tuple order.
    pub fn qubits(self) -> impl Iterator<Item = u32> {
        let (first, second) = match self {
            Qargs::Single(q) => (q, None),
            Qargs::Pair(a, b) => (a, Some(b)),
        };
        iter::once(first).chain(second)
    }

    /// The mirrored tuple; single-qubit tuples are returned unchanged.
    pub fn reversed(self) -> Self {
        match self {
            Qargs::Pair(a, b) => Qargs::Pair(b, a),
            single => single,
        }
    }
}

impl fmt::Display for Qargs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qargs::Single(q) => write!(f, "({q},)"),
            Qargs::Pair(a, b) => write!(f, "({a}, {b})"),
        }
    }
}

impl From<Qargs> for Vec<u32> {
    fn from(qargs: Qargs) -> Self {
        qargs.qubits().collect()
    }
}

impl TryFrom<Vec<u32>> for Qargs {
    type Error = TargetError;

    fn try_from(qubits: Vec<u32>) -> Result<Self, Self::Error> {
        match qubits.as_slice() {
            [q] => Ok(Qargs::Single(*q)),
            [a, b] => Ok(Qargs::Pair(*a, *b)),
            other => Err(TargetError::InvalidQargs(other.len())),
        }
    }
}

impl From<u32> for Qargs {
    fn from(qubit: u32) -> Self {
        Qargs::Single(qubit)
    }
}

impl From<(u32, u32)> for Qargs {
    fn from((a, b): (u32, u32)) -> Self {
        Qargs::Pair(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_and_qubits() {
        assert_eq!(Qargs::single(3).arity(), 1);
        assert_eq!(Qargs::pair(0, 4).arity(), 2);
        assert_eq!(Qargs::pair(0, 4).qubits().collect::<Vec<_>>(), vec![0, 4]);
        assert_eq!(Qargs::single(7).qubits().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Qargs::pair(1, 2).reversed(), Qargs::pair(2, 1));
        assert_eq!(Qargs::single(5).reversed(), Qargs::single(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Qargs::single(0).to_string(), "(0,)");
        assert_eq!(Qargs::pair(2, 3).to_string(), "(2, 3)");
    }

    #[test]
    fn test_serde_as_list() {
        let json = serde_json::to_string(&Qargs::pair(0, 2)).unwrap();
        assert_eq!(json, "[0,2]");
        let back: Qargs = serde_json::from_str("[4]").unwrap();
        assert_eq!(back, Qargs::single(4));
        assert!(serde_json::from_str::<Qargs>("[1,2,3]").is_err());
    }
}
