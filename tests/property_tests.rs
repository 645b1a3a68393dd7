//! Property tests for the sync core invariants.

use std::collections::HashMap;

use proptest::prelude::*;

use apanel::app::events::AppEvent;
use apanel::app::ports::{DeviceError, EventSink, IndicatorSink, Snapshot};
use apanel::app::service::SyncService;
use apanel::panel::{IndicatorCommand, IndicatorId};
use apanel::rules::{self, DerivedState, Rule};

const ALL_KEYS: [&str; 16] = [
    rules::AP_HEADING_LOCK,
    rules::AP_NAV1_LOCK,
    rules::AP_APPROACH_ARM,
    rules::AP_APPROACH_ACTIVE,
    rules::AP_APPROACH_CAPTURED,
    rules::AP_APPROACH_HOLD,
    rules::AP_GLIDESLOPE_ARM,
    rules::AP_GLIDESLOPE_ACTIVE,
    rules::AP_ALTITUDE_ARM,
    rules::AP_ALTITUDE_LOCK,
    rules::AP_WING_LEVELER,
    rules::AP_FLIGHT_LEVEL_CHANGE,
    rules::AP_MASTER,
    rules::AP_FLIGHT_DIRECTOR,
    rules::AP_YAW_DAMPER,
    rules::AP_VERTICAL_HOLD,
];

#[derive(Debug, Clone)]
struct MapSnapshot(HashMap<&'static str, f64>);

impl Snapshot for MapSnapshot {
    fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }
}

fn arb_snapshot() -> impl Strategy<Value = MapSnapshot> {
    proptest::collection::vec(any::<bool>(), ALL_KEYS.len()).prop_map(|flags| {
        MapSnapshot(
            ALL_KEYS
                .iter()
                .zip(flags)
                .map(|(k, on)| (*k, if on { 1.0 } else { 0.0 }))
                .collect(),
        )
    })
}

struct CountingPanel {
    writes: Vec<IndicatorCommand>,
}

impl IndicatorSink for CountingPanel {
    fn apply(&mut self, cmd: &IndicatorCommand) -> Result<(), DeviceError> {
        self.writes.push(*cmd);
        Ok(())
    }
    fn all_off(&mut self) -> Result<(), DeviceError> {
        Ok(())
    }
}

struct NullSink;
impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

proptest! {
    /// Running a pass twice over the same snapshot never writes on the
    /// second pass, whatever the snapshot contents.
    #[test]
    fn pass_is_idempotent(snap in arb_snapshot()) {
        let mut svc = SyncService::new();
        let mut panel = CountingPanel { writes: Vec::new() };
        let mut sink = NullSink;

        svc.run_pass(&snap, &mut panel, &mut sink);
        let after_first = panel.writes.len();
        let summary = svc.run_pass(&snap, &mut panel, &mut sink);

        prop_assert!(summary.applied.is_empty());
        prop_assert_eq!(panel.writes.len(), after_first);
    }

    /// After any completed pass, every cached entry equals what the rule
    /// would recompute from the same snapshot.
    #[test]
    fn cache_always_matches_recomputation(snap in arb_snapshot()) {
        let mut svc = SyncService::new();
        let mut panel = CountingPanel { writes: Vec::new() };
        let mut sink = NullSink;
        svc.run_pass(&snap, &mut panel, &mut sink);

        for (id, rule) in rules::build_rule_table() {
            let expected = rule.evaluate(&snap);
            if expected == DerivedState::Unsupported {
                prop_assert_eq!(svc.cached_state(id), None);
            } else {
                prop_assert_eq!(svc.cached_state(id), Some(expected));
            }
        }
    }

    /// Engaged evidence always beats armed evidence in the annunciator
    /// family, regardless of the other inputs.
    #[test]
    fn annunciator_engaged_beats_armed(snap in arb_snapshot()) {
        let rule = Rule::Annunciator {
            armed: rules::AP_APPROACH_ARM,
            active: rules::AP_APPROACH_ACTIVE,
            captured: rules::AP_APPROACH_CAPTURED,
            hold: rules::AP_APPROACH_HOLD,
            secondary_armed: rules::AP_GLIDESLOPE_ARM,
            secondary_active: rules::AP_GLIDESLOPE_ACTIVE,
        };
        let engaged = [
            rules::AP_APPROACH_ACTIVE,
            rules::AP_APPROACH_CAPTURED,
            rules::AP_APPROACH_HOLD,
            rules::AP_GLIDESLOPE_ACTIVE,
        ]
        .iter()
        .any(|k| snap.get(k) == Some(1.0));
        let armed = [rules::AP_APPROACH_ARM, rules::AP_GLIDESLOPE_ARM]
            .iter()
            .any(|k| snap.get(k) == Some(1.0));

        let expected = if engaged {
            DerivedState::Active
        } else if armed {
            DerivedState::Armed
        } else {
            DerivedState::Off
        };
        prop_assert_eq!(rule.evaluate(&snap), expected);
    }

    /// The capture family never reports Armed while locked is truthy.
    #[test]
    fn capture_locked_masks_armed(snap in arb_snapshot()) {
        let rule = Rule::Capture {
            armed: rules::AP_ALTITUDE_ARM,
            locked: rules::AP_ALTITUDE_LOCK,
        };
        let state = rule.evaluate(&snap);
        if snap.get(rules::AP_ALTITUDE_LOCK) == Some(1.0) {
            prop_assert_eq!(state, DerivedState::Captured);
        } else {
            prop_assert_ne!(state, DerivedState::Captured);
        }
    }

    /// Whatever the telemetry says, placeholder indicators stay silent.
    #[test]
    fn unsupported_rules_never_surface(snap in arb_snapshot()) {
        let mut svc = SyncService::new();
        let mut panel = CountingPanel { writes: Vec::new() };
        let mut sink = NullSink;
        svc.run_pass(&snap, &mut panel, &mut sink);

        for id in [IndicatorId::Trk, IndicatorId::Vnav] {
            prop_assert!(panel.writes.iter().all(|c| c.id != id));
            prop_assert_eq!(svc.cached_state(id), None);
        }
    }
}
