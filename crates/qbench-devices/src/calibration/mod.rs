//! Calibration documents.
//!
//! Three record schemas cover the catalog:
//!
//! | Schema | Vendors | Figures | Time unit |
//! |--------|---------|---------|-----------|
//! | [`MeanCalibration`] | IonQ, Quantinuum | device-wide mean fidelities | seconds |
//! | [`PerQubitCalibration`] | IBM, IQM | per-qubit and per-pair error rates | nanoseconds |
//! | [`RigettiCalibration`] | Rigetti | per-qubit and per-pair fidelities by gate family | nanoseconds |
//!
//! Documents ship embedded in the crate. A [`CalibrationLoader`] pointed at a
//! directory reads `<dir>/<device>_calibration.json` instead, so fresh data
//! can be dropped in without rebuilding.
//!
//! Every loader validates the record completely before returning it: a
//! builder never sees a partial record.

mod mean;
mod per_qubit;
mod rigetti;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use qbench_target::InstructionProperties;
use serde::Deserialize;
use tracing::debug;

use crate::addressing::QubitAddressing;
use crate::error::{DeviceError, DeviceResult};

pub use mean::{MeanCalibration, MeanFigures};
pub use per_qubit::PerQubitCalibration;
pub use rigetti::RigettiCalibration;

/// Nanoseconds to seconds.
pub(crate) const NS: f64 = 1e-9;

/// Calibration documents compiled into the crate.
const EMBEDDED: &[(&str, &str)] = &[
    (
        "ibm_falcon_27",
        include_str!("../../calibration/ibm_falcon_27_calibration.json"),
    ),
    (
        "ibm_falcon_127",
        include_str!("../../calibration/ibm_falcon_127_calibration.json"),
    ),
    (
        "ibm_eagle_127",
        include_str!("../../calibration/ibm_eagle_127_calibration.json"),
    ),
    (
        "ibm_heron_133",
        include_str!("../../calibration/ibm_heron_133_calibration.json"),
    ),
    (
        "ibm_heron_156",
        include_str!("../../calibration/ibm_heron_156_calibration.json"),
    ),
    (
        "iqm_crystal_5",
        include_str!("../../calibration/iqm_crystal_5_calibration.json"),
    ),
    (
        "iqm_crystal_20",
        include_str!("../../calibration/iqm_crystal_20_calibration.json"),
    ),
    (
        "iqm_crystal_54",
        include_str!("../../calibration/iqm_crystal_54_calibration.json"),
    ),
    (
        "quantinuum_h2_56",
        include_str!("../../calibration/quantinuum_h2_56_calibration.json"),
    ),
    (
        "rigetti_aspen_m3",
        include_str!("../../calibration/rigetti_aspen_m3_calibration.json"),
    ),
    (
        "rigetti_ankaa_84",
        include_str!("../../calibration/rigetti_ankaa_84_calibration.json"),
    ),
];

/// Read access to a validated calibration record, in dense qubit indices.
///
/// Target builders only see records through this trait, so the same
/// capability table walk works for every vendor schema.
pub trait CalibrationSource {
    /// Device name the record belongs to.
    fn device(&self) -> &str;

    /// Number of qubits.
    fn num_qubits(&self) -> u32;

    /// Directed connectivity pairs in document order.
    fn connectivity(&self) -> Cow<'_, [(u32, u32)]>;

    /// Figures for a physical single-qubit gate on `qubit`.
    fn single_qubit(&self, qubit: u32) -> DeviceResult<InstructionProperties>;

    /// Figures for measuring `qubit`.
    fn readout(&self, qubit: u32) -> DeviceResult<InstructionProperties>;

    /// Figures for gate family `family` on the pair, looked up in either
    /// ordering. `None` when the pair is not calibrated for that family.
    fn two_qubit(&self, family: &str, a: u32, b: u32) -> Option<InstructionProperties>;
}

/// Connectivity as written in a document: explicit pairs or all-to-all.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Connectivity {
    /// Every ordered pair of distinct qubits.
    AllToAll(AllToAll),
    /// Listed directed pairs.
    Pairs(Vec<(u32, u32)>),
}

/// Marker for the `"all-to-all"` connectivity string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AllToAll {
    #[serde(rename = "all-to-all")]
    AllToAll,
}

impl Connectivity {
    /// Expand to directed pairs over `num_qubits` qubits.
    pub fn pairs(&self, num_qubits: u32) -> Vec<(u32, u32)> {
        match self {
            Connectivity::AllToAll(_) => (0..num_qubits)
                .flat_map(|a| (0..num_qubits).filter(move |&b| b != a).map(move |b| (a, b)))
                .collect(),
            Connectivity::Pairs(pairs) => pairs.clone(),
        }
    }
}

/// Locates and parses calibration documents.
#[derive(Debug, Clone, Default)]
pub struct CalibrationLoader {
    dir: Option<PathBuf>,
}

impl CalibrationLoader {
    /// Loader for the documents compiled into the crate.
    pub fn embedded() -> Self {
        Self { dir: None }
    }

    /// Loader reading `<dir>/<device>_calibration.json`.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Override directory, if any.
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Raw document text for a device.
    pub fn document(&self, device: &str) -> DeviceResult<Cow<'static, str>> {
        match &self.dir {
            Some(dir) => {
                let path = dir.join(format!("{device}_calibration.json"));
                debug!("Reading calibration for {} from {}", device, path.display());
                std::fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|source| DeviceError::Io { path, source })
            }
            None => EMBEDDED
                .iter()
                .find(|(name, _)| *name == device)
                .map(|(_, doc)| Cow::Borrowed(*doc))
                .ok_or_else(|| DeviceError::MissingCalibration(device.to_string())),
        }
    }

    /// Load a mean-figure record.
    pub fn load_mean(&self, device: &str) -> DeviceResult<MeanCalibration> {
        MeanCalibration::from_json(device, &self.document(device)?)
    }

    /// Load a per-qubit record.
    pub fn load_per_qubit(&self, device: &str) -> DeviceResult<PerQubitCalibration> {
        PerQubitCalibration::from_json(device, &self.document(device)?)
    }

    /// Load a Rigetti record, translating qubits through `addressing`.
    pub fn load_rigetti(
        &self,
        device: &str,
        addressing: &dyn QubitAddressing,
    ) -> DeviceResult<RigettiCalibration> {
        RigettiCalibration::from_json(device, &self.document(device)?, addressing)
    }
}

/// Names of the embedded documents.
pub fn embedded_devices() -> impl Iterator<Item = &'static str> {
    EMBEDDED.iter().map(|(name, _)| *name)
}

pub(crate) fn parse<'a, T: Deserialize<'a>>(device: &str, json: &'a str) -> DeviceResult<T> {
    serde_json::from_str(json).map_err(|source| DeviceError::Parse {
        device: device.to_string(),
        source,
    })
}

pub(crate) fn check_header(device: &str, name: &str, num_qubits: u32) -> DeviceResult<()> {
    if name != device {
        return Err(DeviceError::calibration(
            device,
            format!("document is for device '{name}'"),
        ));
    }
    if num_qubits == 0 {
        return Err(DeviceError::calibration(device, "num_qubits must be positive"));
    }
    Ok(())
}

pub(crate) fn check_fidelity(device: &str, field: &str, value: f64) -> DeviceResult<f64> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(DeviceError::calibration(
            device,
            format!("{field} = {value} is not a fidelity in (0, 1]"),
        ))
    }
}

pub(crate) fn check_error_rate(device: &str, field: &str, value: f64) -> DeviceResult<f64> {
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(DeviceError::calibration(
            device,
            format!("{field} = {value} is not an error rate in [0, 1)"),
        ))
    }
}

pub(crate) fn check_duration(device: &str, field: &str, value: f64) -> DeviceResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DeviceError::calibration(
            device,
            format!("{field} = {value} is not a duration >= 0"),
        ))
    }
}

pub(crate) fn check_pair(device: &str, (a, b): (u32, u32), num_qubits: u32) -> DeviceResult<()> {
    if a == b || a >= num_qubits || b >= num_qubits {
        return Err(DeviceError::calibration(
            device,
            format!("connectivity pair ({a}, {b}) is invalid for {num_qubits} qubits"),
        ));
    }
    Ok(())
}

/// Parse an `"a-b"` pair key.
pub(crate) fn parse_pair_key(device: &str, key: &str) -> DeviceResult<(u32, u32)> {
    let parsed = key
        .split_once('-')
        .and_then(|(a, b)| Some((a.trim().parse().ok()?, b.trim().parse().ok()?)));
    parsed.ok_or_else(|| DeviceError::calibration(device, format!("malformed pair key '{key}'")))
}

/// Parse a qubit key.
pub(crate) fn parse_qubit_key(device: &str, key: &str) -> DeviceResult<u32> {
    key.trim()
        .parse()
        .map_err(|_| DeviceError::calibration(device, format!("malformed qubit key '{key}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_embedded_document_parses_as_json() {
        for name in embedded_devices() {
            let doc = CalibrationLoader::embedded().document(name).unwrap();
            let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
            assert_eq!(value["name"], name);
        }
    }

    #[test]
    fn test_missing_embedded_document() {
        let err = CalibrationLoader::embedded().document("nope").unwrap_err();
        assert!(matches!(err, DeviceError::MissingCalibration(name) if name == "nope"));
    }

    #[test]
    fn test_missing_override_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let loader = CalibrationLoader::from_dir(dir.path());
        let err = loader.document("iqm_crystal_5").unwrap_err();
        assert!(matches!(err, DeviceError::Io { .. }));
        assert!(err.to_string().contains("iqm_crystal_5_calibration.json"));
    }

    #[test]
    fn test_pair_keys() {
        assert_eq!(parse_pair_key("d", "3-12").unwrap(), (3, 12));
        assert!(parse_pair_key("d", "3_12").is_err());
        assert!(parse_pair_key("d", "a-1").is_err());
    }

    #[test]
    fn test_connectivity_all_to_all() {
        let conn: Connectivity = serde_json::from_str("\"all-to-all\"").unwrap();
        let pairs = conn.pairs(3);
        assert_eq!(pairs.len(), 6);
        assert!(pairs.contains(&(2, 0)));

        let listed: Connectivity = serde_json::from_str("[[0, 1], [1, 0]]").unwrap();
        assert_eq!(listed.pairs(5), vec![(0, 1), (1, 0)]);

        assert!(serde_json::from_str::<Connectivity>("\"ring\"").is_err());
    }
}
