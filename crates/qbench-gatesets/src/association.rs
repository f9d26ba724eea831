//! Device to native gateset association.

use rustc_hash::FxHashSet;

use crate::error::{GatesetError, GatesetResult};

/// Native gateset of every catalog device.
pub const DEVICE_TO_GATESET: &[(&str, &str)] = &[
    ("ibm_falcon_27", "ibm_falcon"),
    ("ibm_falcon_127", "ibm_falcon"),
    ("ibm_eagle_127", "ibm_eagle"),
    ("ibm_heron_133", "ibm_heron"),
    ("ibm_heron_156", "ibm_heron"),
    ("ionq_aria_25", "ionq_aria"),
    ("ionq_forte_36", "ionq_forte"),
    ("iqm_crystal_5", "iqm"),
    ("iqm_crystal_20", "iqm"),
    ("iqm_crystal_54", "iqm"),
    ("quantinuum_h2_56", "quantinuum"),
    ("rigetti_aspen_m3", "rigetti_aspen"),
    ("rigetti_ankaa_84", "rigetti"),
];

/// The native gateset a device compiles to.
pub fn gateset_for_device(device: &str) -> GatesetResult<&'static str> {
    DEVICE_TO_GATESET
        .iter()
        .find(|(d, _)| *d == device)
        .map(|(_, gateset)| *gateset)
        .ok_or_else(|| GatesetError::NoGatesetForDevice(device.to_string()))
}

/// Gatesets of several devices, first-seen order, without duplicates.
pub fn unique_gatesets<'a>(
    devices: impl IntoIterator<Item = &'a str>,
) -> GatesetResult<Vec<&'static str>> {
    let mut seen = FxHashSet::default();
    let mut gatesets = Vec::new();
    for device in devices {
        let gateset = gateset_for_device(device)?;
        if seen.insert(gateset) {
            gatesets.push(gateset);
        }
    }
    Ok(gatesets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gatesets::gateset_spec;

    #[test]
    fn test_every_association_names_a_gateset() {
        for (device, gateset) in DEVICE_TO_GATESET {
            assert!(gateset_spec(gateset).is_some(), "{device} -> {gateset}");
        }
    }

    #[test]
    fn test_unique_gatesets_keeps_first_seen_order() {
        let gatesets = unique_gatesets([
            "iqm_crystal_20",
            "ibm_heron_156",
            "iqm_crystal_5",
            "ibm_heron_133",
            "rigetti_ankaa_84",
        ])
        .unwrap();
        assert_eq!(gatesets, vec!["iqm", "ibm_heron", "rigetti"]);
    }

    #[test]
    fn test_unknown_device() {
        assert!(matches!(
            gateset_for_device("ibm_condor_1121"),
            Err(GatesetError::NoGatesetForDevice(_))
        ));
        assert!(unique_gatesets(["iqm_crystal_5", "nope"]).is_err());
    }
}
