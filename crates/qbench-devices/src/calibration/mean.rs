//! Device-wide mean figures (IonQ, Quantinuum).

use std::borrow::Cow;

use qbench_target::InstructionProperties;
use rustc_hash::FxHashSet;
use serde::Deserialize;

use super::{
    CalibrationSource, Connectivity, check_duration, check_fidelity, check_header, check_pair,
    parse,
};
use crate::error::DeviceResult;

/// Mean fidelities and durations (seconds) for a whole device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanFigures {
    pub one_q_fidelity: f64,
    pub two_q_fidelity: f64,
    pub spam_fidelity: f64,
    pub one_q_duration: f64,
    pub two_q_duration: f64,
    pub readout_duration: f64,
}

#[derive(Deserialize)]
struct MeanDocument {
    name: String,
    num_qubits: u32,
    connectivity: Connectivity,
    fidelity: FidelityStats,
    timing: TimingStats,
}

#[derive(Deserialize)]
struct FidelityStats {
    #[serde(rename = "1q")]
    one_q: Stat,
    #[serde(rename = "2q")]
    two_q: Stat,
    spam: Stat,
}

#[derive(Deserialize)]
struct Stat {
    mean: f64,
}

#[derive(Deserialize)]
struct TimingStats {
    #[serde(rename = "1q")]
    one_q: f64,
    #[serde(rename = "2q")]
    two_q: f64,
    readout: f64,
}

/// A record carrying one figure per operation width.
#[derive(Debug, Clone)]
pub struct MeanCalibration {
    name: String,
    num_qubits: u32,
    connectivity: Vec<(u32, u32)>,
    coupled: FxHashSet<(u32, u32)>,
    figures: MeanFigures,
}

impl MeanCalibration {
    /// Build a record from figures held in code.
    pub fn new(
        name: &str,
        num_qubits: u32,
        connectivity: &Connectivity,
        figures: MeanFigures,
    ) -> DeviceResult<Self> {
        check_header(name, name, num_qubits)?;
        check_fidelity(name, "fidelity.1q.mean", figures.one_q_fidelity)?;
        check_fidelity(name, "fidelity.2q.mean", figures.two_q_fidelity)?;
        check_fidelity(name, "fidelity.spam.mean", figures.spam_fidelity)?;
        check_duration(name, "timing.1q", figures.one_q_duration)?;
        check_duration(name, "timing.2q", figures.two_q_duration)?;
        check_duration(name, "timing.readout", figures.readout_duration)?;

        let connectivity = connectivity.pairs(num_qubits);
        for &pair in &connectivity {
            check_pair(name, pair, num_qubits)?;
        }
        let coupled = connectivity.iter().copied().collect();
        Ok(Self {
            name: name.to_string(),
            num_qubits,
            connectivity,
            coupled,
            figures,
        })
    }

    /// Parse and validate a JSON document.
    pub fn from_json(device: &str, json: &str) -> DeviceResult<Self> {
        let doc: MeanDocument = parse(device, json)?;
        check_header(device, &doc.name, doc.num_qubits)?;
        let figures = MeanFigures {
            one_q_fidelity: doc.fidelity.one_q.mean,
            two_q_fidelity: doc.fidelity.two_q.mean,
            spam_fidelity: doc.fidelity.spam.mean,
            one_q_duration: doc.timing.one_q,
            two_q_duration: doc.timing.two_q,
            readout_duration: doc.timing.readout,
        };
        Self::new(device, doc.num_qubits, &doc.connectivity, figures)
    }

    pub fn figures(&self) -> &MeanFigures {
        &self.figures
    }
}

impl CalibrationSource for MeanCalibration {
    fn device(&self) -> &str {
        &self.name
    }

    fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    fn connectivity(&self) -> Cow<'_, [(u32, u32)]> {
        Cow::Borrowed(&self.connectivity)
    }

    fn single_qubit(&self, _qubit: u32) -> DeviceResult<InstructionProperties> {
        Ok(InstructionProperties::from_fidelity(
            Some(self.figures.one_q_duration),
            self.figures.one_q_fidelity,
        ))
    }

    fn readout(&self, _qubit: u32) -> DeviceResult<InstructionProperties> {
        Ok(InstructionProperties::from_fidelity(
            Some(self.figures.readout_duration),
            self.figures.spam_fidelity,
        ))
    }

    fn two_qubit(&self, _family: &str, a: u32, b: u32) -> Option<InstructionProperties> {
        let coupled = self.coupled.contains(&(a, b)) || self.coupled.contains(&(b, a));
        coupled.then(|| {
            InstructionProperties::from_fidelity(
                Some(self.figures.two_q_duration),
                self.figures.two_q_fidelity,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeviceError;

    const DOC: &str = r#"{
        "name": "trap",
        "num_qubits": 4,
        "connectivity": "all-to-all",
        "fidelity": {"1q": {"mean": 0.999}, "2q": {"mean": 0.98}, "spam": {"mean": 0.995}},
        "timing": {"1q": 1e-5, "2q": 2e-4, "readout": 1e-4}
    }"#;

    #[test]
    fn test_parse_document() {
        let cal = MeanCalibration::from_json("trap", DOC).unwrap();
        assert_eq!(cal.num_qubits(), 4);
        assert_eq!(cal.connectivity().len(), 12);
        let two = cal.two_qubit("any", 3, 1).unwrap();
        assert!((two.error.unwrap() - 0.02).abs() < 1e-12);
        assert_eq!(two.duration, Some(2e-4));
        let readout = cal.readout(0).unwrap();
        assert!((readout.error.unwrap() - 0.005).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_wrong_device_name() {
        let err = MeanCalibration::from_json("other", DOC).unwrap_err();
        assert!(matches!(err, DeviceError::Calibration { .. }));
    }

    #[test]
    fn test_rejects_missing_field() {
        let doc = DOC.replace(r#""spam": {"mean": 0.995}"#, r#""spam": {}"#);
        let err = MeanCalibration::from_json("trap", &doc).unwrap_err();
        assert!(matches!(err, DeviceError::Parse { .. }));
    }

    #[test]
    fn test_rejects_zero_fidelity() {
        let doc = DOC.replace("0.98", "0.0");
        let err = MeanCalibration::from_json("trap", &doc).unwrap_err();
        assert!(err.to_string().contains("fidelity.2q.mean"));
    }

    #[test]
    fn test_uncoupled_pair() {
        let figures = MeanFigures {
            one_q_fidelity: 0.999,
            two_q_fidelity: 0.99,
            spam_fidelity: 0.99,
            one_q_duration: 1e-5,
            two_q_duration: 1e-4,
            readout_duration: 1e-4,
        };
        let cal =
            MeanCalibration::new("line", 3, &Connectivity::Pairs(vec![(0, 1)]), figures).unwrap();
        assert!(cal.two_qubit("ms", 1, 0).is_some());
        assert!(cal.two_qubit("ms", 1, 2).is_none());
    }
}
