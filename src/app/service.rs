//! Sync service — the hexagonal core.
//!
//! [`SyncService`] owns the rule table and the last-applied state cache.
//! All I/O flows through port traits injected at call sites, making the
//! whole engine testable with mock adapters.
//!
//! ```text
//!  TelemetrySource ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                      │        SyncService        │
//!    IndicatorSink ◀───│  rules · diff · cache     │
//!                      └──────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::cache::StateCache;
use crate::config::PanelConfig;
use crate::panel::{self, IndicatorCommand, IndicatorId};
use crate::rules::{DerivedState, Rule, build_rule_table};

use super::events::AppEvent;
use super::ports::{Clock, EventSink, IndicatorSink, Snapshot, TelemetrySource};

/// Darken the whole bank one LED at a time, pausing between writes.
/// The device firmware drops back-to-back writes, so the sweep is paced
/// rather than fired as one burst.  Best-effort: a failing LED is logged
/// and the sweep moves on.
pub fn sweep_off(panel: &mut impl IndicatorSink, clock: &mut impl Clock, settle_ms: u32) {
    for id in IndicatorId::ALL {
        // render() is Some for every non-Unsupported state.
        if let Some(cmd) = panel::render(id, DerivedState::Off) {
            if let Err(e) = panel.apply(&cmd) {
                warn!("{}: off write failed ({e})", id.name());
            }
        }
        clock.sleep_ms(settle_ms);
    }
}

/// Outcome of one sync pass.
#[derive(Debug, Default)]
pub struct PassSummary {
    /// Commands successfully applied this pass, in panel order.
    pub applied: heapless::Vec<IndicatorCommand, { IndicatorId::COUNT }>,
    /// Number of LED writes that failed (those indicators were not cached).
    pub failed: u8,
}

// ───────────────────────────────────────────────────────────────
// SyncService
// ───────────────────────────────────────────────────────────────

/// Mirrors derived telemetry states onto the indicator bank, writing an
/// LED only when its state actually changes.
pub struct SyncService {
    rule_table: [(IndicatorId, Rule); IndicatorId::COUNT],
    cache: StateCache,
    pass_count: u64,
}

impl SyncService {
    pub fn new() -> Self {
        Self {
            rule_table: build_rule_table(),
            cache: StateCache::new(),
            pass_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Session bootstrap: darken the whole panel with a paced per-LED
    /// sweep and reset the cache so the first pass emits a command for
    /// every active rule.
    pub fn reset(
        &mut self,
        panel: &mut impl IndicatorSink,
        sink: &mut impl EventSink,
        clock: &mut impl Clock,
        settle_ms: u32,
    ) {
        sweep_off(panel, clock, settle_ms);
        self.cache.reset();
        sink.emit(&AppEvent::Started);
        info!("Panel dark, cache reset");
    }

    // ── One pass ──────────────────────────────────────────────

    /// Evaluate every rule against the current snapshot, diff against
    /// the cache, and rewrite only the LEDs whose state changed.
    ///
    /// A failing LED write is logged and reported through the event
    /// sink; the pass continues and the failed indicator keeps its old
    /// cache entry, so the write is retried while the states still
    /// differ.
    pub fn run_pass(
        &mut self,
        snapshot: &impl Snapshot,
        panel: &mut impl IndicatorSink,
        sink: &mut impl EventSink,
    ) -> PassSummary {
        self.pass_count += 1;
        let mut summary = PassSummary::default();

        for &(id, rule) in &self.rule_table {
            let new_state = rule.evaluate(snapshot);
            if new_state == DerivedState::Unsupported {
                // No diff, no cache entry, no I/O for placeholder rules.
                continue;
            }

            let old_state = self.cache.get(id);
            if old_state == Some(new_state) {
                continue;
            }

            // render() is only None for Unsupported, handled above.
            let Some(cmd) = panel::render(id, new_state) else {
                continue;
            };

            match panel.apply(&cmd) {
                Ok(()) => {
                    self.cache.set(id, new_state);
                    debug!("{}: {:?} -> {:?}", id.name(), old_state, new_state);
                    sink.emit(&AppEvent::IndicatorChanged {
                        id,
                        from: old_state,
                        to: new_state,
                    });
                    // Capacity equals the bank size; push cannot fail.
                    let _ = summary.applied.push(cmd);
                }
                Err(e) => {
                    warn!("{}: LED write failed ({e}), will retry", id.name());
                    sink.emit(&AppEvent::WriteFailed { id });
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    // ── Poll loop ─────────────────────────────────────────────

    /// Refresh-and-sync at a fixed cadence until the sim asks clients to
    /// quit or a refresh fails.  The panel is darkened again on the way
    /// out, whatever the exit reason.
    pub fn run(
        &mut self,
        telemetry: &mut impl TelemetrySource,
        panel: &mut impl IndicatorSink,
        sink: &mut impl EventSink,
        clock: &mut impl Clock,
        config: &PanelConfig,
    ) -> crate::error::Result<()> {
        self.reset(panel, sink, clock, config.all_off_settle_ms);

        let result = loop {
            // Stop conditions are observed only at pass boundaries.
            if telemetry.quit_requested() {
                sink.emit(&AppEvent::Stopped { reason: "sim quit" });
                break Ok(());
            }

            // Never run a pass against a known-stale snapshot.
            if let Err(e) = telemetry.refresh() {
                warn!("Telemetry refresh failed: {e}");
                sink.emit(&AppEvent::Stopped {
                    reason: "telemetry lost",
                });
                break Err(e.into());
            }

            self.run_pass(telemetry, panel, sink);
            clock.sleep_ms(config.poll_interval_ms);
        };

        if let Err(e) = panel.all_off() {
            warn!("Teardown all-off failed: {e}");
        }
        info!("Sync loop ended after {} passes", self.pass_count);
        result
    }

    // ── Queries ───────────────────────────────────────────────

    /// Total sync passes executed since construction.
    pub fn pass_count(&self) -> u64 {
        self.pass_count
    }

    /// Last state applied to `id`, if any write has succeeded since the
    /// last reset.
    pub fn cached_state(&self, id: IndicatorId) -> Option<DerivedState> {
        self.cache.get(id)
    }
}

impl Default for SyncService {
    fn default() -> Self {
        Self::new()
    }
}
