//! Port traits — the hexagonal boundary between the sync core and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SyncService (domain)
//! ```
//!
//! Driven adapters (the panel device, the sim telemetry client, event
//! sinks, the clock) implement these traits.  The
//! [`SyncService`](super::service::SyncService) consumes them via
//! generics, so the core never touches USB or the sim SDK directly.

use crate::discovery::DeviceInfo;
use crate::panel::IndicatorCommand;

// ───────────────────────────────────────────────────────────────
// Telemetry (driven adapter: sim → domain)
// ───────────────────────────────────────────────────────────────

/// Read-only key→value view of the most recent telemetry refresh.
///
/// This is all a rule is allowed to see.  Missing keys read as absent;
/// rules treat absent as zero/false.
pub trait Snapshot {
    fn get(&self, key: &str) -> Option<f64>;
}

/// The full telemetry client: a snapshot plus its refresh lifecycle.
pub trait TelemetrySource: Snapshot {
    /// Pull fresh values from the sim.  After an `Err` the snapshot is
    /// considered stale and the loop must not run a pass against it.
    fn refresh(&mut self) -> Result<(), TelemetryError>;

    /// True once the sim has asked clients to shut down.  Checked at
    /// pass boundaries only, never mid-pass.
    fn quit_requested(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Indicator sink (driven adapter: domain → panel device)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the LED bank.
///
/// Implementations must be idempotent: applying the same visual state
/// twice is harmless (the engine avoids it anyway, via the cache).
pub trait IndicatorSink {
    /// Apply one LED command.
    fn apply(&mut self, cmd: &IndicatorCommand) -> Result<(), DeviceError>;

    /// Turn every LED on the device off.
    fn all_off(&mut self) -> Result<(), DeviceError>;
}

// ───────────────────────────────────────────────────────────────
// Device enumeration (driven adapter: USB → startup code)
// ───────────────────────────────────────────────────────────────

/// Lists candidate devices for [`select_panel`](crate::discovery::select_panel).
/// Runs once, before the loop starts.
pub trait DeviceEnumerator {
    fn enumerate(&self) -> Vec<DeviceInfo>;
}

// ───────────────────────────────────────────────────────────────
// Event sink (driven adapter: domain → logging / telemetry out)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Clock (driven adapter: domain → time)
// ───────────────────────────────────────────────────────────────

/// Blocking sleep, injected so the poll loop and the self-test walk run
/// instantly under test.
pub trait Clock {
    fn sleep_ms(&mut self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`IndicatorSink`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// The HID write was rejected or the device went away.
    WriteFailed,
    /// The device disconnected mid-session.
    Disconnected,
}

/// Errors from [`TelemetrySource::refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryError {
    /// The sim connection dropped.
    Disconnected,
    /// The refresh request failed; the snapshot is stale.
    RefreshFailed,
}

impl core::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WriteFailed => write!(f, "LED write failed"),
            Self::Disconnected => write!(f, "device disconnected"),
        }
    }
}

impl core::fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "sim disconnected"),
            Self::RefreshFailed => write!(f, "telemetry refresh failed"),
        }
    }
}
