//! Compilation level and optimization effort selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// How far a benchmark circuit is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkLevel {
    /// Algorithm level, no target.
    Alg,
    /// Target-independent compilation.
    Indep,
    /// Compiled to a native gateset.
    NativeGates,
    /// Compiled and mapped onto a device.
    Mapped,
}

impl BenchmarkLevel {
    pub const ALL: [BenchmarkLevel; 4] = [Self::Alg, Self::Indep, Self::NativeGates, Self::Mapped];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alg => "alg",
            Self::Indep => "indep",
            Self::NativeGates => "nativegates",
            Self::Mapped => "mapped",
        }
    }

    /// Numeric index, 0 for `alg` through 3 for `mapped`.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether the level compiles against a concrete target.
    pub fn needs_target(self) -> bool {
        matches!(self, Self::NativeGates | Self::Mapped)
    }
}

impl fmt::Display for BenchmarkLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BenchmarkLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alg" | "0" => Ok(Self::Alg),
            "indep" | "1" => Ok(Self::Indep),
            "nativegates" | "2" => Ok(Self::NativeGates),
            "mapped" | "3" => Ok(Self::Mapped),
            _ => Err(CatalogError::InvalidLevel(s.to_string())),
        }
    }
}

/// Optimization effort passed to the transpiler, 0 through 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct OptimizationLevel(u8);

impl OptimizationLevel {
    pub const MAX: u8 = 3;

    pub fn new(level: i64) -> Result<Self, CatalogError> {
        match u8::try_from(level) {
            Ok(l) if l <= Self::MAX => Ok(Self(l)),
            _ => Err(CatalogError::InvalidOptLevel(level.to_string())),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for OptimizationLevel {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<i64> for OptimizationLevel {
    type Error = CatalogError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<OptimizationLevel> for u8 {
    fn from(level: OptimizationLevel) -> Self {
        level.0
    }
}

impl FromStr for OptimizationLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| CatalogError::InvalidOptLevel(s.to_string()))
            .and_then(Self::new)
    }
}

impl fmt::Display for OptimizationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!("alg".parse::<BenchmarkLevel>().unwrap(), BenchmarkLevel::Alg);
        assert_eq!("2".parse::<BenchmarkLevel>().unwrap(), BenchmarkLevel::NativeGates);
        assert_eq!("Mapped".parse::<BenchmarkLevel>().unwrap(), BenchmarkLevel::Mapped);
        assert!("4".parse::<BenchmarkLevel>().is_err());
        for level in BenchmarkLevel::ALL {
            assert_eq!(level.as_str().parse::<BenchmarkLevel>().unwrap(), level);
            assert_eq!(level.index().to_string().parse::<BenchmarkLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_opt_level_range() {
        for n in 0..=3 {
            assert_eq!(OptimizationLevel::new(n).unwrap().get() as i64, n);
        }
        let err = OptimizationLevel::new(4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid `opt_level` '4'. Must be in the range [0, 3]."
        );
        let err = OptimizationLevel::new(-1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid `opt_level` '-1'. Must be in the range [0, 3]."
        );
        assert!("high".parse::<OptimizationLevel>().is_err());
    }
}
