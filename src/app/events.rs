//! Outbound application events.
//!
//! The [`SyncService`](super::service::SyncService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the
//! other side decide what to do with them — log to the console today,
//! publish somewhere else tomorrow.

use crate::panel::IndicatorId;
use crate::rules::DerivedState;

/// Structured events emitted by the sync core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Session bootstrap finished: panel dark, cache reset.
    Started,

    /// One indicator's derived state changed and the LED was rewritten.
    /// `from` is `None` on the first write after a reset.
    IndicatorChanged {
        id: IndicatorId,
        from: Option<DerivedState>,
        to: DerivedState,
    },

    /// An LED write failed; the indicator keeps its previous cache entry
    /// and will be retried on the next differing pass.
    WriteFailed { id: IndicatorId },

    /// The poll loop ended (sim quit or telemetry refresh failure).
    Stopped { reason: &'static str },
}
