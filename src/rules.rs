//! Per-indicator classification rules.
//!
//! A rule is a pure, total function from a telemetry snapshot to a
//! [`DerivedState`].  Absent keys read as zero, so a rule can never fail;
//! the worst a malformed snapshot can produce is `Off`.
//!
//! Rules are a closed set expressed as one enum — no closures, no dynamic
//! dispatch, no heap.  The full panel mapping is built once at startup by
//! [`build_rule_table`] and iterated identically every pass.

use crate::app::ports::Snapshot;
use crate::panel::IndicatorId;

// ---------------------------------------------------------------------------
// Simulator variables
// ---------------------------------------------------------------------------
//
// Names follow the sim's autopilot variable set.  Grouped by the button
// they drive.

pub const AP_HEADING_LOCK: &str = "AUTOPILOT_HEADING_LOCK";
pub const AP_NAV1_LOCK: &str = "AUTOPILOT_NAV1_LOCK";

pub const AP_APPROACH_ARM: &str = "AUTOPILOT_APPROACH_ARM";
pub const AP_APPROACH_ACTIVE: &str = "AUTOPILOT_APPROACH_ACTIVE";
pub const AP_APPROACH_CAPTURED: &str = "AUTOPILOT_APPROACH_CAPTURED";
pub const AP_APPROACH_HOLD: &str = "AUTOPILOT_APPROACH_HOLD";
pub const AP_GLIDESLOPE_ARM: &str = "AUTOPILOT_GLIDESLOPE_ARM";
pub const AP_GLIDESLOPE_ACTIVE: &str = "AUTOPILOT_GLIDESLOPE_ACTIVE";

pub const AP_ALTITUDE_ARM: &str = "AUTOPILOT_ALTITUDE_ARM";
pub const AP_ALTITUDE_LOCK: &str = "AUTOPILOT_ALTITUDE_LOCK";

pub const AP_WING_LEVELER: &str = "AUTOPILOT_WING_LEVELER";
pub const AP_FLIGHT_LEVEL_CHANGE: &str = "AUTOPILOT_FLIGHT_LEVEL_CHANGE";
pub const AP_MASTER: &str = "AUTOPILOT_MASTER";
pub const AP_FLIGHT_DIRECTOR: &str = "AUTOPILOT_FLIGHT_DIRECTOR_ACTIVE";
pub const AP_YAW_DAMPER: &str = "AUTOPILOT_YAW_DAMPER";
pub const AP_VERTICAL_HOLD: &str = "AUTOPILOT_VERTICAL_HOLD";

// ---------------------------------------------------------------------------
// Derived state
// ---------------------------------------------------------------------------

/// The classified condition of one indicator, computed from telemetry.
///
/// `On`, `Active` and `Captured` all render identically (solid); they are
/// kept distinct because they come from different rule families and the
/// cache diffs on the semantic state, not the visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedState {
    Off,
    /// Binary family: the tracked flag is truthy.
    On,
    /// Mode selected but not yet engaged — rendered flashing.
    Armed,
    /// Annunciator family: mode engaged.
    Active,
    /// Capture family: target captured/locked.
    Captured,
    /// The rule intentionally does nothing this pass (telemetry the sim
    /// does not expose).  Never cached, never rendered.
    Unsupported,
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Classification rule for one indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `On` iff `key` is truthy (non-zero).
    Binary { key: &'static str },

    /// Approach-style annunciator over a primary mode and a coupled
    /// secondary mode.  Precedence is fixed: `Active` wins over `Armed`
    /// wins over `Off` — engaged evidence is checked first, and `Off`
    /// requires all six inputs false.
    Annunciator {
        armed: &'static str,
        active: &'static str,
        captured: &'static str,
        hold: &'static str,
        secondary_armed: &'static str,
        secondary_active: &'static str,
    },

    /// Altitude-style arm/capture pair.  `locked` is checked first.
    Capture {
        armed: &'static str,
        locked: &'static str,
    },

    /// Placeholder for buttons the sim has no variable for.
    Unsupported,
}

impl Rule {
    /// Classify the current snapshot.  Pure and total: absent keys are
    /// treated as zero and no input can make this fail.
    pub fn evaluate(&self, snap: &impl Snapshot) -> DerivedState {
        match *self {
            Self::Binary { key } => {
                if truthy(snap, key) {
                    DerivedState::On
                } else {
                    DerivedState::Off
                }
            }

            Self::Annunciator {
                armed,
                active,
                captured,
                hold,
                secondary_armed,
                secondary_active,
            } => {
                if truthy(snap, active)
                    || truthy(snap, captured)
                    || truthy(snap, hold)
                    || truthy(snap, secondary_active)
                {
                    DerivedState::Active
                } else if truthy(snap, armed) || truthy(snap, secondary_armed) {
                    DerivedState::Armed
                } else {
                    DerivedState::Off
                }
            }

            Self::Capture { armed, locked } => {
                if truthy(snap, locked) {
                    DerivedState::Captured
                } else if truthy(snap, armed) {
                    DerivedState::Armed
                } else {
                    DerivedState::Off
                }
            }

            Self::Unsupported => DerivedState::Unsupported,
        }
    }
}

/// A missing key and a zero value are both "false".
fn truthy(snap: &impl Snapshot, key: &str) -> bool {
    snap.get(key).unwrap_or(0.0) > 0.0
}

// ---------------------------------------------------------------------------
// Table builder
// ---------------------------------------------------------------------------

/// Build the indicator→rule table.  Called once at startup, iterated in
/// panel order every pass.
pub fn build_rule_table() -> [(IndicatorId, Rule); IndicatorId::COUNT] {
    [
        (IndicatorId::Hdg, Rule::Binary { key: AP_HEADING_LOCK }),
        // TRK has no sim variable on current builds.
        (IndicatorId::Trk, Rule::Unsupported),
        (IndicatorId::Nav, Rule::Binary { key: AP_NAV1_LOCK }),
        (
            IndicatorId::Apr,
            Rule::Annunciator {
                armed: AP_APPROACH_ARM,
                active: AP_APPROACH_ACTIVE,
                captured: AP_APPROACH_CAPTURED,
                hold: AP_APPROACH_HOLD,
                secondary_armed: AP_GLIDESLOPE_ARM,
                secondary_active: AP_GLIDESLOPE_ACTIVE,
            },
        ),
        (
            IndicatorId::Alt,
            Rule::Capture {
                armed: AP_ALTITUDE_ARM,
                locked: AP_ALTITUDE_LOCK,
            },
        ),
        (IndicatorId::Lvl, Rule::Binary { key: AP_WING_LEVELER }),
        // VNAV state is not derivable from the exposed variable set.
        (IndicatorId::Vnav, Rule::Unsupported),
        // The panel's IAS button tracks flight-level-change mode.
        (IndicatorId::Ias, Rule::Binary { key: AP_FLIGHT_LEVEL_CHANGE }),
        (IndicatorId::Ap, Rule::Binary { key: AP_MASTER }),
        (IndicatorId::Fd, Rule::Binary { key: AP_FLIGHT_DIRECTOR }),
        (IndicatorId::Yd, Rule::Binary { key: AP_YAW_DAMPER }),
        (IndicatorId::Vs, Rule::Binary { key: AP_VERTICAL_HOLD }),
    ]
}
