//! Runtime configuration.
//!
//! All tunable timing for the sync loop and the self-test walk.  Values
//! can be overridden via a JSON config file passed on the command line.

use serde::{Deserialize, Serialize};

/// Panel mirror configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    // --- Sync loop ---
    /// Delay between sync passes (milliseconds).  Fast enough that armed
    /// annunciators feel immediate, slow enough not to flood the HID
    /// transport.
    pub poll_interval_ms: u32,

    // --- Bootstrap ---
    /// Settle delay between per-LED writes during the all-off sweep
    /// (milliseconds).  The device firmware drops back-to-back writes.
    pub all_off_settle_ms: u32,

    // --- Self-test ---
    /// How long each LED stays in the attention pattern (milliseconds).
    pub self_test_flash_ms: u32,
    /// Dark gap between LEDs in the walk (milliseconds).
    pub self_test_gap_ms: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 250,
            all_off_settle_ms: 50,
            self_test_flash_ms: 2000,
            self_test_gap_ms: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = PanelConfig::default();
        assert!(c.poll_interval_ms >= 100, "sub-100ms would flood the HID link");
        assert!(c.poll_interval_ms <= 1000, "armed blink should feel immediate");
        assert!(c.self_test_flash_ms > c.self_test_gap_ms);
    }

    #[test]
    fn serde_roundtrip() {
        let c = PanelConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: PanelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.poll_interval_ms, c2.poll_interval_ms);
        assert_eq!(c.self_test_flash_ms, c2.self_test_flash_ms);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let c: PanelConfig = serde_json::from_str(r#"{"poll_interval_ms": 500}"#).unwrap();
        assert_eq!(c.poll_interval_ms, 500);
        assert_eq!(c.all_off_settle_ms, PanelConfig::default().all_off_settle_ms);
    }
}
