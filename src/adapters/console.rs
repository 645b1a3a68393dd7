//! Console panel adapter.
//!
//! Implements [`IndicatorSink`] by mirroring every LED write to the log
//! and tracking the last command per LED in memory.  This stands in for
//! the real VKB HID transport, which will replace it behind the same
//! trait once the wire protocol module lands; until then it makes the
//! whole pipeline runnable on a bench with no hardware attached.
//!
//! Also implements [`DeviceEnumerator`], reporting a single simulated
//! panel so startup exercises the same discovery path as production.

use log::{debug, info};

use crate::app::ports::{DeviceError, DeviceEnumerator, IndicatorSink};
use crate::discovery::{DeviceInfo, PANEL_PRODUCT_ID};
use crate::panel::{IndicatorCommand, IndicatorId};

/// In-memory panel that logs every write.
pub struct ConsolePanel {
    last: [Option<IndicatorCommand>; IndicatorId::COUNT],
}

impl ConsolePanel {
    pub fn new() -> Self {
        Self {
            last: [None; IndicatorId::COUNT],
        }
    }

    /// Last command applied to `id`, if any.
    pub fn last_command(&self, id: IndicatorId) -> Option<IndicatorCommand> {
        self.last[id.index()]
    }
}

impl Default for ConsolePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorSink for ConsolePanel {
    fn apply(&mut self, cmd: &IndicatorCommand) -> Result<(), DeviceError> {
        info!(
            "{}: colour=#{:02x}{:02x}{:02x} blink={:?} secondary={}",
            cmd.id.name(),
            cmd.primary.0,
            cmd.primary.1,
            cmd.primary.2,
            cmd.blink,
            cmd.secondary
                .map_or_else(|| "-".to_owned(), |(r, g, b)| format!("#{r:02x}{g:02x}{b:02x}")),
        );
        self.last[cmd.id.index()] = Some(*cmd);
        Ok(())
    }

    fn all_off(&mut self) -> Result<(), DeviceError> {
        debug!("all LEDs off");
        self.last = [None; IndicatorId::COUNT];
        Ok(())
    }
}

impl DeviceEnumerator for ConsolePanel {
    fn enumerate(&self) -> Vec<DeviceInfo> {
        vec![DeviceInfo {
            product_id: PANEL_PRODUCT_ID,
            name: "FSM-GA (console)".to_owned(),
            guid: "console-0".to_owned(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::select_panel;
    use crate::panel::{self, test_flash};
    use crate::rules::DerivedState;

    #[test]
    fn apply_records_last_command() {
        let mut panel = ConsolePanel::new();
        let cmd = test_flash(IndicatorId::Ap);
        panel.apply(&cmd).unwrap();
        assert_eq!(panel.last_command(IndicatorId::Ap), Some(cmd));
        assert_eq!(panel.last_command(IndicatorId::Fd), None);
    }

    #[test]
    fn all_off_clears_tracked_state() {
        let mut panel = ConsolePanel::new();
        let cmd = panel::render(IndicatorId::Hdg, DerivedState::On).unwrap();
        panel.apply(&cmd).unwrap();
        panel.all_off().unwrap();
        assert_eq!(panel.last_command(IndicatorId::Hdg), None);
    }

    #[test]
    fn enumerates_exactly_one_panel() {
        let panel = ConsolePanel::new();
        let devices = panel.enumerate();
        assert!(select_panel(&devices).is_ok());
    }
}
