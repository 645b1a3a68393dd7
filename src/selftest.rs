//! LED self-test walk.
//!
//! Validates the indicator sink end to end without the sim: every LED in
//! panel order gets the attention pattern for a fixed duration, then goes
//! dark.  This path never touches rules or the state cache.

use log::{info, warn};

use crate::app::ports::{Clock, IndicatorSink};
use crate::app::service::sweep_off;
use crate::config::PanelConfig;
use crate::panel::{self, IndicatorId};
use crate::rules::DerivedState;

/// Run the full walk.  Individual LED failures are logged and the walk
/// continues; the panel is darkened first so stale states from a
/// previous session cannot linger.
pub fn run(panel: &mut impl IndicatorSink, clock: &mut impl Clock, config: &PanelConfig) {
    info!("Starting LED self test");
    sweep_off(panel, clock, config.all_off_settle_ms);

    for id in IndicatorId::ALL {
        info!("Flashing {}", id.name());
        if let Err(e) = panel.apply(&panel::test_flash(id)) {
            warn!("{}: self-test flash failed ({e})", id.name());
            continue;
        }
        clock.sleep_ms(config.self_test_flash_ms);

        // render() is Some for every non-Unsupported state.
        if let Some(off) = panel::render(id, DerivedState::Off) {
            if let Err(e) = panel.apply(&off) {
                warn!("{}: self-test off failed ({e})", id.name());
            }
        }
        clock.sleep_ms(config.self_test_gap_ms);
    }
    info!("Self test complete");
}
