//! The fixed brewhouse layout created at startup.

use jaxbrew_core::error::CoreError;
use jaxbrew_core::pump::Pump;
use jaxbrew_core::vessel::{NewVessel, Vessel, VesselKind};

/// Build the brewhouse vessels with their starting temperatures and
/// setpoints. Every vessel starts with `tolerance_c` as its band.
pub fn brewhouse_vessels(tolerance_c: f64) -> Result<Vec<Vessel>, CoreError> {
    let rows: [(&str, &str, VesselKind, bool, &str, f64, f64); 6] = [
        (
            "hlt",
            "Hot Liquor Tank",
            VesselKind::HotLiquorTank,
            true,
            "Electric – main strike & sparge water.",
            20.0,
            65.0,
        ),
        (
            "mash",
            "Mash Tun",
            VesselKind::MashTun,
            false,
            "Mash and recirculation.",
            20.0,
            66.0,
        ),
        (
            "kettle",
            "Kettle",
            VesselKind::Kettle,
            false,
            "Gas fired – manually controlled boil.",
            20.0,
            100.0,
        ),
        ("fermenter-1", "Fermenter 1", VesselKind::Fermenter, false, "Primary fermentation.", 18.5, 19.0),
        ("fermenter-2", "Fermenter 2", VesselKind::Fermenter, false, "Primary fermentation.", 18.0, 19.0),
        ("fermenter-3", "Fermenter 3", VesselKind::Fermenter, false, "Primary fermentation.", 17.5, 19.0),
    ];

    rows.into_iter()
        .map(|(code, name, kind, heated, notes, current_temp, target_temp)| {
            Vessel::new(NewVessel {
                code: code.into(),
                name: name.into(),
                kind,
                volume_l: 100,
                heated,
                notes: notes.into(),
                current_temp,
                target_temp,
                tolerance_c,
            })
        })
        .collect()
}

/// Build the transfer pumps.
pub fn brewhouse_pumps() -> Vec<Pump> {
    vec![
        Pump::new("pump-1", "Pump 1", "HLT → Mash"),
        Pump::new("pump-2", "Pump 2", "Mash → Kettle"),
        Pump::new("pump-3", "Pump 3", "Fermenter transfers"),
    ]
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use jaxbrew_core::vessel::ToleranceState;

    use super::*;
    use crate::store::{InMemoryVesselStore, VesselStore};

    #[test]
    fn layout_has_unique_codes_and_unknown_state() {
        let vessels = brewhouse_vessels(1.5).unwrap();
        assert_eq!(vessels.len(), 6);
        assert!(vessels
            .iter()
            .all(|v| v.last_in_tolerance() == ToleranceState::Unknown && v.tolerance_c() == 1.5));

        let store = InMemoryVesselStore::new(vessels).unwrap();
        for code in ["hlt", "mash", "kettle", "fermenter-1", "fermenter-2", "fermenter-3"] {
            assert!(store.resolve(code).is_some(), "missing {code}");
        }
    }

    #[test]
    fn fermenters_are_typed() {
        let vessels = brewhouse_vessels(0.0).unwrap();
        let fermenters = vessels
            .iter()
            .filter(|v| v.kind() == VesselKind::Fermenter)
            .count();
        assert_eq!(fermenters, 3);
    }

    #[test]
    fn invalid_tolerance_is_rejected() {
        assert_matches!(brewhouse_vessels(-1.0), Err(CoreError::OutOfRange { .. }));
    }

    #[test]
    fn pumps_layout() {
        let pumps = brewhouse_pumps();
        assert_eq!(pumps.len(), 3);
        assert_eq!(pumps[0].code, "pump-1");
        assert_eq!(pumps[1].role, "Mash → Kettle");
    }
}
