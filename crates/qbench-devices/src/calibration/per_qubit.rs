//! Per-qubit and per-pair error rates (IBM, IQM).

use std::borrow::Cow;

use qbench_target::InstructionProperties;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::{
    CalibrationSource, NS, check_duration, check_error_rate, check_header, check_pair, parse,
    parse_pair_key, parse_qubit_key,
};
use crate::error::{DeviceError, DeviceResult};

#[derive(Deserialize)]
struct PerQubitDocument {
    name: String,
    num_qubits: u32,
    connectivity: Vec<(u32, u32)>,
    error: ErrorTables,
    timing: Timing,
}

#[derive(Deserialize)]
struct ErrorTables {
    one_q: FxHashMap<String, f64>,
    two_q: FxHashMap<String, f64>,
    readout: FxHashMap<String, f64>,
}

/// Gate durations in nanoseconds.
#[derive(Deserialize)]
struct Timing {
    one_q: f64,
    two_q: f64,
    readout: f64,
}

/// A record with one error rate per qubit and per calibrated pair.
///
/// Pair errors are keyed as written in the document (`"a-b"`); lookups try
/// both orderings.
#[derive(Debug, Clone)]
pub struct PerQubitCalibration {
    name: String,
    num_qubits: u32,
    connectivity: Vec<(u32, u32)>,
    one_q_error: Vec<f64>,
    readout_error: Vec<f64>,
    two_q_error: FxHashMap<(u32, u32), f64>,
    one_q_duration: f64,
    two_q_duration: f64,
    readout_duration: f64,
}

impl PerQubitCalibration {
    /// Parse and validate a JSON document.
    pub fn from_json(device: &str, json: &str) -> DeviceResult<Self> {
        let doc: PerQubitDocument = parse(device, json)?;
        check_header(device, &doc.name, doc.num_qubits)?;
        let n = doc.num_qubits;

        for &pair in &doc.connectivity {
            check_pair(device, pair, n)?;
        }

        let one_q_error = per_qubit_table(device, "error.one_q", &doc.error.one_q, n)?;
        let readout_error = per_qubit_table(device, "error.readout", &doc.error.readout, n)?;

        let mut two_q_error = FxHashMap::default();
        for (key, &value) in &doc.error.two_q {
            let pair = parse_pair_key(device, key)?;
            check_pair(device, pair, n)?;
            let value = check_error_rate(device, &format!("error.two_q[{key}]"), value)?;
            two_q_error.insert(pair, value);
        }

        Ok(Self {
            name: doc.name,
            num_qubits: n,
            connectivity: doc.connectivity,
            one_q_error,
            readout_error,
            two_q_error,
            one_q_duration: check_duration(device, "timing.one_q", doc.timing.one_q)? * NS,
            two_q_duration: check_duration(device, "timing.two_q", doc.timing.two_q)? * NS,
            readout_duration: check_duration(device, "timing.readout", doc.timing.readout)? * NS,
        })
    }

    fn qubit_entry(&self, table: &[f64], qubit: u32) -> DeviceResult<f64> {
        table.get(qubit as usize).copied().ok_or_else(|| {
            DeviceError::calibration(&self.name, format!("no figures for qubit {qubit}"))
        })
    }
}

/// Collect a `"q" -> value` table into a dense vector, requiring every qubit.
fn per_qubit_table(
    device: &str,
    field: &str,
    table: &FxHashMap<String, f64>,
    num_qubits: u32,
) -> DeviceResult<Vec<f64>> {
    let mut values = vec![None; num_qubits as usize];
    for (key, &value) in table {
        let qubit = parse_qubit_key(device, key)?;
        let slot = values.get_mut(qubit as usize).ok_or_else(|| {
            DeviceError::calibration(device, format!("{field} lists qubit {qubit} out of range"))
        })?;
        *slot = Some(check_error_rate(device, &format!("{field}[{key}]"), value)?);
    }
    values
        .into_iter()
        .enumerate()
        .map(|(q, v)| {
            v.ok_or_else(|| DeviceError::calibration(device, format!("{field} is missing qubit {q}")))
        })
        .collect()
}

impl CalibrationSource for PerQubitCalibration {
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
        let error = self.qubit_entry(&self.one_q_error, qubit)?;
        Ok(InstructionProperties::new(Some(self.one_q_duration), Some(error)))
    }

    fn readout(&self, qubit: u32) -> DeviceResult<InstructionProperties> {
        let error = self.qubit_entry(&self.readout_error, qubit)?;
        Ok(InstructionProperties::new(Some(self.readout_duration), Some(error)))
    }

    fn two_qubit(&self, _family: &str, a: u32, b: u32) -> Option<InstructionProperties> {
        let error = self
            .two_q_error
            .get(&(a, b))
            .or_else(|| self.two_q_error.get(&(b, a)))?;
        Some(InstructionProperties::new(Some(self.two_q_duration), Some(*error)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "name": "chip",
        "num_qubits": 3,
        "connectivity": [[0, 1], [1, 0], [1, 2], [2, 1]],
        "error": {
            "one_q": {"0": 0.001, "1": 0.002, "2": 0.003},
            "two_q": {"1-0": 0.02},
            "readout": {"0": 0.01, "1": 0.02, "2": 0.03}
        },
        "timing": {"one_q": 40.0, "two_q": 80.0, "readout": 1500.0}
    }"#;

    #[test]
    fn test_nanoseconds_normalized() {
        let cal = PerQubitCalibration::from_json("chip", DOC).unwrap();
        let one = cal.single_qubit(1).unwrap();
        assert!((one.duration.unwrap() - 40e-9).abs() < 1e-18);
        assert_eq!(one.error, Some(0.002));
        let ro = cal.readout(2).unwrap();
        assert!((ro.duration.unwrap() - 1.5e-6).abs() < 1e-15);
    }

    #[test]
    fn test_pair_lookup_both_orderings() {
        let cal = PerQubitCalibration::from_json("chip", DOC).unwrap();
        assert_eq!(cal.two_qubit("cz", 0, 1).unwrap().error, Some(0.02));
        assert_eq!(cal.two_qubit("cz", 1, 0).unwrap().error, Some(0.02));
        assert!(cal.two_qubit("cz", 1, 2).is_none());
    }

    #[test]
    fn test_missing_qubit_is_fatal() {
        let doc = DOC.replace(r#""2": 0.003"#, r#""7": 0.003"#);
        let err = PerQubitCalibration::from_json("chip", &doc).unwrap_err();
        assert!(err.to_string().contains("error.one_q"), "{err}");

        let doc = DOC.replace(r#", "2": 0.03"#, "");
        let err = PerQubitCalibration::from_json("chip", &doc).unwrap_err();
        assert!(err.to_string().contains("missing qubit 2"), "{err}");
    }

    #[test]
    fn test_connectivity_out_of_range_is_fatal() {
        let doc = DOC.replace("[2, 1]]", "[2, 3]]");
        assert!(PerQubitCalibration::from_json("chip", &doc).is_err());
    }

    #[test]
    fn test_error_rate_out_of_range_is_fatal() {
        let doc = DOC.replace("0.02}", "1.2}");
        let err = PerQubitCalibration::from_json("chip", &doc).unwrap_err();
        assert!(err.to_string().contains("error.two_q[1-0]"), "{err}");
    }
}
