//! Rigetti records: fidelities per gate family, hardware-addressed qubits.

use std::borrow::Cow;
use std::collections::BTreeMap;

use qbench_target::InstructionProperties;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::{
    CalibrationSource, NS, check_duration, check_fidelity, check_header, check_pair, parse,
    parse_pair_key, parse_qubit_key,
};
use crate::addressing::{AddressingScheme, QubitAddressing};
use crate::error::{DeviceError, DeviceResult};

#[derive(Deserialize)]
struct RigettiDocument {
    name: String,
    num_qubits: u32,
    addressing: AddressingScheme,
    connectivity: Vec<(u32, u32)>,
    properties: Properties,
    #[serde(default)]
    timing: Option<Timing>,
}

#[derive(Deserialize)]
struct Properties {
    #[serde(rename = "1Q")]
    one_q: BTreeMap<String, OneQubitFigures>,
    #[serde(rename = "2Q")]
    two_q: BTreeMap<String, BTreeMap<String, f64>>,
}

#[derive(Deserialize)]
struct OneQubitFigures {
    #[serde(rename = "f1QRB")]
    rb: f64,
    #[serde(rename = "fRO")]
    readout: f64,
}

/// Durations in nanoseconds.
#[derive(Deserialize)]
struct Timing {
    #[serde(rename = "1q")]
    one_q: f64,
    #[serde(rename = "2q")]
    two_q: f64,
    readout: f64,
}

/// A Rigetti record translated to dense indices.
///
/// Two-qubit fidelities are kept per family (`fCZ`, `fCPHASE`, `fXY`,
/// `fISWAP`, ...) since each family is calibrated on its own subset of pairs.
#[derive(Debug, Clone)]
pub struct RigettiCalibration {
    name: String,
    num_qubits: u32,
    connectivity: Vec<(u32, u32)>,
    /// `(f1QRB, fRO)` per dense qubit.
    one_q: Vec<(f64, f64)>,
    two_q: FxHashMap<(u32, u32), BTreeMap<String, f64>>,
    durations: Option<(f64, f64, f64)>,
}

impl RigettiCalibration {
    /// Parse and validate a JSON document, remapping every qubit reference.
    pub fn from_json(
        device: &str,
        json: &str,
        addressing: &dyn QubitAddressing,
    ) -> DeviceResult<Self> {
        let doc: RigettiDocument = parse(device, json)?;
        check_header(device, &doc.name, doc.num_qubits)?;
        if doc.addressing != addressing.scheme() {
            return Err(DeviceError::calibration(
                device,
                format!(
                    "document uses {} addressing, expected {}",
                    doc.addressing,
                    addressing.scheme()
                ),
            ));
        }
        let n = doc.num_qubits;
        if n != addressing.num_qubits() {
            return Err(DeviceError::calibration(
                device,
                format!(
                    "num_qubits {n} does not match the chip layout ({})",
                    addressing.num_qubits()
                ),
            ));
        }

        let remap_pair = |(a, b): (u32, u32)| -> DeviceResult<(u32, u32)> {
            let pair = (addressing.to_dense(a)?, addressing.to_dense(b)?);
            check_pair(device, pair, n)?;
            Ok(pair)
        };

        let connectivity = doc
            .connectivity
            .iter()
            .map(|&pair| remap_pair(pair))
            .collect::<DeviceResult<Vec<_>>>()?;

        let mut one_q = vec![None; n as usize];
        for (key, figures) in &doc.properties.one_q {
            let dense = addressing.to_dense(parse_qubit_key(device, key)?)?;
            let rb = check_fidelity(device, &format!("1Q[{key}].f1QRB"), figures.rb)?;
            let ro = check_fidelity(device, &format!("1Q[{key}].fRO"), figures.readout)?;
            let slot = one_q.get_mut(dense as usize).ok_or_else(|| {
                DeviceError::calibration(device, format!("1Q lists qubit {key} out of range"))
            })?;
            *slot = Some((rb, ro));
        }
        let one_q = one_q
            .into_iter()
            .enumerate()
            .map(|(q, v)| {
                v.ok_or_else(|| {
                    DeviceError::calibration(device, format!("1Q is missing dense qubit {q}"))
                })
            })
            .collect::<DeviceResult<Vec<_>>>()?;

        let mut two_q = FxHashMap::default();
        for (key, families) in &doc.properties.two_q {
            let pair = remap_pair(parse_pair_key(device, key)?)?;
            for (family, &value) in families {
                check_fidelity(device, &format!("2Q[{key}].{family}"), value)?;
            }
            two_q.insert(pair, families.clone());
        }

        let durations = doc
            .timing
            .map(|t| -> DeviceResult<_> {
                Ok((
                    check_duration(device, "timing.1q", t.one_q)? * NS,
                    check_duration(device, "timing.2q", t.two_q)? * NS,
                    check_duration(device, "timing.readout", t.readout)? * NS,
                ))
            })
            .transpose()?;

        Ok(Self {
            name: doc.name,
            num_qubits: n,
            connectivity,
            one_q,
            two_q,
            durations,
        })
    }

    /// Families present anywhere in the record, sorted.
    pub fn families(&self) -> Vec<&str> {
        let mut families: Vec<&str> = self
            .two_q
            .values()
            .flat_map(|f| f.keys().map(String::as_str))
            .collect();
        families.sort_unstable();
        families.dedup();
        families
    }

    fn entry(&self, qubit: u32) -> DeviceResult<(f64, f64)> {
        self.one_q.get(qubit as usize).copied().ok_or_else(|| {
            DeviceError::calibration(&self.name, format!("no figures for qubit {qubit}"))
        })
    }
}

impl CalibrationSource for RigettiCalibration {
    fn device(&self) -> &str {
        &self.name
    }

    fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    fn connectivity(&self) -> Cow<'_, [(u32, u32)]> {
        Cow::Borrowed(&self.connectivity)
    }

    fn single_qubit(&self, qubit: u32) -> DeviceResult<InstructionProperties> {
        let (rb, _) = self.entry(qubit)?;
        Ok(InstructionProperties::from_fidelity(self.durations.map(|d| d.0), rb))
    }

    fn readout(&self, qubit: u32) -> DeviceResult<InstructionProperties> {
        let (_, ro) = self.entry(qubit)?;
        Ok(InstructionProperties::from_fidelity(self.durations.map(|d| d.2), ro))
    }

    fn two_qubit(&self, family: &str, a: u32, b: u32) -> Option<InstructionProperties> {
        let fidelity = self
            .two_q
            .get(&(a, b))
            .and_then(|f| f.get(family))
            .or_else(|| self.two_q.get(&(b, a)).and_then(|f| f.get(family)))?;
        Some(InstructionProperties::from_fidelity(
            self.durations.map(|d| d.1),
            *fidelity,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::{ASPEN_M3_LAYOUT, LinearAddressing, RingLayout};

    const RING: RingLayout = RingLayout::new(1, 2, 2, &[]);

    const DOC: &str = r#"{
        "name": "mini",
        "num_qubits": 4,
        "addressing": "ring",
        "connectivity": [[0, 1], [1, 10], [10, 11], [11, 0]],
        "properties": {
            "1Q": {
                "0": {"f1QRB": 0.99, "fRO": 0.95},
                "1": {"f1QRB": 0.98, "fRO": 0.94},
                "10": {"f1QRB": 0.97, "fRO": 0.93},
                "11": {"f1QRB": 0.96, "fRO": 0.92}
            },
            "2Q": {
                "0-1": {"fCZ": 0.9, "fXY": 0.8},
                "10-1": {"fCZ": 0.94}
            }
        }
    }"#;

    #[test]
    fn test_remaps_qubits() {
        let cal = RigettiCalibration::from_json("mini", DOC, &RING).unwrap();
        assert_eq!(cal.connectivity().as_ref(), &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let one = cal.single_qubit(2).unwrap();
        assert!((one.error.unwrap() - 0.03).abs() < 1e-12);
        assert_eq!(one.duration, None);
    }

    #[test]
    fn test_family_lookup() {
        let cal = RigettiCalibration::from_json("mini", DOC, &RING).unwrap();
        assert!(cal.two_qubit("fCZ", 2, 1).is_some());
        assert!(cal.two_qubit("fXY", 1, 0).is_some());
        assert!(cal.two_qubit("fXY", 1, 2).is_none());
        assert!(cal.two_qubit("fCPHASE", 0, 1).is_none());
        assert_eq!(cal.families(), vec!["fCZ", "fXY"]);
    }

    #[test]
    fn test_rejects_addressing_mismatch() {
        let err = RigettiCalibration::from_json("mini", DOC, &LinearAddressing::new(4)).unwrap_err();
        assert!(err.to_string().contains("ring addressing"), "{err}");
    }

    #[test]
    fn test_rejects_defective_qubit_reference() {
        let doc = r#"{
            "name": "aspen", "num_qubits": 79, "addressing": "ring",
            "connectivity": [[135, 136]],
            "properties": {"1Q": {}, "2Q": {}}
        }"#;
        let err = RigettiCalibration::from_json("aspen", doc, &ASPEN_M3_LAYOUT).unwrap_err();
        assert!(matches!(err, DeviceError::Remap(_)));
    }

    #[test]
    fn test_rejects_incomplete_one_qubit_table() {
        let doc = DOC.replace(r#""11": {"f1QRB": 0.96, "fRO": 0.92}"#, r#""11": {"f1QRB": 0.96}"#);
        assert!(matches!(
            RigettiCalibration::from_json("mini", &doc, &RING),
            Err(DeviceError::Parse { .. })
        ));
    }
}
