//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger.  A future overlay or remote-monitoring adapter would
//! implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | panel dark, cache reset");
            }
            AppEvent::IndicatorChanged { id, from, to } => {
                info!("LED   | {} {:?} -> {:?}", id.name(), from, to);
            }
            AppEvent::WriteFailed { id } => {
                info!("LED   | {} write failed, will retry", id.name());
            }
            AppEvent::Stopped { reason } => {
                info!("STOP  | {reason}");
            }
        }
    }
}
