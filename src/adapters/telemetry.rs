//! Scripted telemetry adapter.
//!
//! A table-backed [`TelemetrySource`] that steps through a fixed list of
//! frames, one per refresh, and requests quit when the script runs out.
//! Stands in for the sim connection behind the same trait (the real
//! client lands behind `TelemetrySource` without touching the core) and
//! doubles as the bench-run driver.

use std::collections::HashMap;

use crate::app::ports::{Snapshot, TelemetrySource, TelemetryError};

/// One refresh worth of values.
pub type Frame = HashMap<String, f64>;

/// Steps through scripted frames; quits after the last one is consumed.
pub struct ScriptedTelemetry {
    frames: Vec<Frame>,
    current: Frame,
    cursor: usize,
}

impl ScriptedTelemetry {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames,
            current: Frame::new(),
            cursor: 0,
        }
    }

    /// Convenience constructor from `(key, value)` frame slices.
    pub fn from_slices(frames: &[&[(&str, f64)]]) -> Self {
        Self::new(
            frames
                .iter()
                .map(|frame| {
                    frame
                        .iter()
                        .map(|(k, v)| ((*k).to_owned(), *v))
                        .collect()
                })
                .collect(),
        )
    }
}

impl Snapshot for ScriptedTelemetry {
    fn get(&self, key: &str) -> Option<f64> {
        self.current.get(key).copied()
    }
}

impl TelemetrySource for ScriptedTelemetry {
    fn refresh(&mut self) -> Result<(), TelemetryError> {
        match self.frames.get(self.cursor) {
            Some(frame) => {
                self.current = frame.clone();
                self.cursor += 1;
                Ok(())
            }
            None => Err(TelemetryError::RefreshFailed),
        }
    }

    fn quit_requested(&self) -> bool {
        self.cursor >= self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::AP_MASTER;

    #[test]
    fn refresh_steps_through_frames() {
        let mut t = ScriptedTelemetry::from_slices(&[
            &[(AP_MASTER, 1.0)],
            &[(AP_MASTER, 0.0)],
        ]);
        assert_eq!(t.get(AP_MASTER), None, "no values before first refresh");

        t.refresh().unwrap();
        assert_eq!(t.get(AP_MASTER), Some(1.0));
        assert!(!t.quit_requested());

        t.refresh().unwrap();
        assert_eq!(t.get(AP_MASTER), Some(0.0));
        assert!(t.quit_requested(), "quit once the script is exhausted");
    }

    #[test]
    fn refresh_past_the_end_fails() {
        let mut t = ScriptedTelemetry::from_slices(&[&[]]);
        t.refresh().unwrap();
        assert_eq!(t.refresh(), Err(TelemetryError::RefreshFailed));
    }
}
