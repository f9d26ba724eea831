//! Qubit addressing schemes.
//!
//! Rigetti octagon chips address qubits by a three-digit hardware index
//! `row * 100 + column * 10 + ring`. Targets use a dense index instead:
//!
//! ```text
//! raw   = row * (ring_size * columns) + column * ring_size + ring
//! dense = raw - (number of defects below raw)
//! ```
//!
//! Defects are raw positions of qubits that are absent from the fabricated
//! chip. They have no dense index, and every qubit after them shifts down.
//! The defect list belongs to one specific chip and is never derived.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw position of the absent qubit on Aspen-M3 (hardware index 136).
pub const ASPEN_M3_DEFECT: u32 = 70;

/// Aspen-M3: two rows of five octagons, one absent qubit.
pub const ASPEN_M3_LAYOUT: RingLayout = RingLayout::new(2, 5, 8, &[ASPEN_M3_DEFECT]);

/// Index translation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RemapError {
    /// The hardware index does not decode to a coordinate on the chip.
    #[error("Hardware index {0} is not a valid coordinate on this chip")]
    InvalidHardwareIndex(u32),

    /// The hardware index names a qubit that is absent from the chip.
    #[error("Hardware index {0} is a known defect and has no dense index")]
    DefectiveQubit(u32),

    /// The dense index is not below the qubit count.
    #[error("Dense index {index} out of range for {num_qubits} qubits")]
    DenseOutOfRange {
        /// The offending index.
        index: u32,
        /// Number of usable qubits.
        num_qubits: u32,
    },
}

/// How a calibration document numbers its qubits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressingScheme {
    /// Octagon `row/column/ring` digits.
    Ring,
    /// Consecutive indices starting at zero.
    Linear,
}

impl fmt::Display for AddressingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressingScheme::Ring => write!(f, "ring"),
            AddressingScheme::Linear => write!(f, "linear"),
        }
    }
}

/// Translation between hardware and dense qubit indices.
pub trait QubitAddressing: Send + Sync {
    /// The scheme a calibration document must declare to use this addressing.
    fn scheme(&self) -> AddressingScheme;

    /// Number of usable qubits.
    fn num_qubits(&self) -> u32;

    /// Hardware index to dense index.
    fn to_dense(&self, hardware: u32) -> Result<u32, RemapError>;

    /// Dense index to hardware index.
    fn to_hardware(&self, dense: u32) -> Result<u32, RemapError>;
}

/// Octagon-ring layout with a fixed defect list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingLayout {
    rows: u32,
    columns: u32,
    ring_size: u32,
    /// Raw positions of absent qubits, ascending.
    defects: &'static [u32],
}

impl RingLayout {
    /// Create a layout. `columns` and `ring_size` must fit a decimal digit
    /// and `defects` must be sorted ascending.
    pub const fn new(rows: u32, columns: u32, ring_size: u32, defects: &'static [u32]) -> Self {
        Self {
            rows,
            columns,
            ring_size,
            defects,
        }
    }

    pub fn defects(&self) -> &'static [u32] {
        self.defects
    }

    fn qubits_per_row(&self) -> u32 {
        self.ring_size * self.columns
    }

    /// Position of a hardware index before defects are removed.
    pub fn raw_position(&self, hardware: u32) -> Result<u32, RemapError> {
        let row = hardware / 100;
        let column = (hardware % 100) / 10;
        let ring = hardware % 10;
        if row >= self.rows || column >= self.columns || ring >= self.ring_size {
            return Err(RemapError::InvalidHardwareIndex(hardware));
        }
        Ok(row * self.qubits_per_row() + column * self.ring_size + ring)
    }

    fn decode(&self, raw: u32) -> u32 {
        let row = raw / self.qubits_per_row();
        let within = raw % self.qubits_per_row();
        row * 100 + (within / self.ring_size) * 10 + within % self.ring_size
    }
}

impl QubitAddressing for RingLayout {
    fn scheme(&self) -> AddressingScheme {
        AddressingScheme::Ring
    }

    fn num_qubits(&self) -> u32 {
        self.rows * self.qubits_per_row() - self.defects.len() as u32
    }

    fn to_dense(&self, hardware: u32) -> Result<u32, RemapError> {
        let raw = self.raw_position(hardware)?;
        if self.defects.contains(&raw) {
            return Err(RemapError::DefectiveQubit(hardware));
        }
        let shift = self.defects.iter().filter(|&&d| d < raw).count() as u32;
        Ok(raw - shift)
    }

    fn to_hardware(&self, dense: u32) -> Result<u32, RemapError> {
        let num_qubits = self.num_qubits();
        if dense >= num_qubits {
            return Err(RemapError::DenseOutOfRange {
                index: dense,
                num_qubits,
            });
        }
        let mut raw = dense;
        for &defect in self.defects {
            if raw >= defect {
                raw += 1;
            }
        }
        Ok(self.decode(raw))
    }
}

/// Identity addressing for chips numbered consecutively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearAddressing {
    num_qubits: u32,
}

impl LinearAddressing {
    pub const fn new(num_qubits: u32) -> Self {
        Self { num_qubits }
    }
}

impl QubitAddressing for LinearAddressing {
    fn scheme(&self) -> AddressingScheme {
        AddressingScheme::Linear
    }

    fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    fn to_dense(&self, hardware: u32) -> Result<u32, RemapError> {
        if hardware >= self.num_qubits {
            return Err(RemapError::InvalidHardwareIndex(hardware));
        }
        Ok(hardware)
    }

    fn to_hardware(&self, dense: u32) -> Result<u32, RemapError> {
        if dense >= self.num_qubits {
            return Err(RemapError::DenseOutOfRange {
                index: dense,
                num_qubits: self.num_qubits,
            });
        }
        Ok(dense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspen_m3_qubit_count() {
        assert_eq!(ASPEN_M3_LAYOUT.num_qubits(), 79);
    }

    #[test]
    fn test_formula_below_defect() {
        assert_eq!(ASPEN_M3_LAYOUT.to_dense(0).unwrap(), 0);
        assert_eq!(ASPEN_M3_LAYOUT.to_dense(7).unwrap(), 7);
        assert_eq!(ASPEN_M3_LAYOUT.to_dense(10).unwrap(), 8);
        assert_eq!(ASPEN_M3_LAYOUT.to_dense(100).unwrap(), 40);
        assert_eq!(ASPEN_M3_LAYOUT.to_dense(135).unwrap(), 69);
        assert_eq!(ASPEN_M3_LAYOUT.to_hardware(69).unwrap(), 135);
    }

    #[test]
    fn test_defect_discontinuity() {
        // Hardware 136 sits at raw position 70 and is absent.
        assert_eq!(ASPEN_M3_LAYOUT.raw_position(136).unwrap(), ASPEN_M3_DEFECT);
        assert_eq!(
            ASPEN_M3_LAYOUT.to_dense(136),
            Err(RemapError::DefectiveQubit(136))
        );
        // Everything after it shifts down by one.
        assert_eq!(ASPEN_M3_LAYOUT.to_dense(137).unwrap(), 70);
        assert_eq!(ASPEN_M3_LAYOUT.to_hardware(70).unwrap(), 137);
        assert_eq!(ASPEN_M3_LAYOUT.to_dense(147).unwrap(), 78);
        assert_eq!(ASPEN_M3_LAYOUT.to_hardware(78).unwrap(), 147);
    }

    #[test]
    fn test_bounds_validation() {
        // ring digit 8 and 9 do not exist on an octagon
        assert_eq!(
            ASPEN_M3_LAYOUT.to_dense(8),
            Err(RemapError::InvalidHardwareIndex(8))
        );
        // column 5 and row 2 are off the chip
        assert!(ASPEN_M3_LAYOUT.to_dense(50).is_err());
        assert!(ASPEN_M3_LAYOUT.to_dense(200).is_err());
        assert_eq!(
            ASPEN_M3_LAYOUT.to_hardware(79),
            Err(RemapError::DenseOutOfRange {
                index: 79,
                num_qubits: 79
            })
        );
    }

    #[test]
    fn test_multiple_defects() {
        const LAYOUT: RingLayout = RingLayout::new(1, 2, 8, &[3, 10]);
        assert_eq!(LAYOUT.num_qubits(), 14);
        assert_eq!(LAYOUT.to_dense(2).unwrap(), 2);
        assert!(LAYOUT.to_dense(3).is_err());
        assert_eq!(LAYOUT.to_dense(4).unwrap(), 3);
        assert!(LAYOUT.to_dense(12).is_err());
        assert_eq!(LAYOUT.to_dense(13).unwrap(), 9);
        for dense in 0..LAYOUT.num_qubits() {
            let hw = LAYOUT.to_hardware(dense).unwrap();
            assert_eq!(LAYOUT.to_dense(hw).unwrap(), dense);
        }
    }

    #[test]
    fn test_linear_addressing() {
        let linear = LinearAddressing::new(84);
        assert_eq!(linear.to_dense(83).unwrap(), 83);
        assert_eq!(linear.to_hardware(0).unwrap(), 0);
        assert!(linear.to_dense(84).is_err());
        assert!(linear.to_hardware(84).is_err());
    }
}
