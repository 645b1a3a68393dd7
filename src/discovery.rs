//! Panel device discovery.
//!
//! Produces exactly one addressed device before the loop starts.  The
//! uniqueness check is a startup precondition, not retried: zero or
//! multiple matching panels is a fatal configuration error.

use crate::error::{Error, Result};

/// USB product id of the FSM-GA panel.
pub const PANEL_PRODUCT_ID: u16 = 0x2220;

/// Identity of one enumerated device, as reported by the HID layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub product_id: u16,
    pub name: String,
    pub guid: String,
}

/// Pick the one FSM-GA panel out of an enumerated device list.
pub fn select_panel(devices: &[DeviceInfo]) -> Result<&DeviceInfo> {
    let mut matches = devices.iter().filter(|d| d.product_id == PANEL_PRODUCT_ID);
    let first = matches
        .next()
        .ok_or(Error::Config("no FSM-GA panel found"))?;
    if matches.next().is_some() {
        return Err(Error::Config("multiple FSM-GA panels are not supported"));
    }
    Ok(first)
}
