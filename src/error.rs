//! Unified error types.
//!
//! A single `Error` enum that every subsystem can convert into, keeping
//! the top-level flow's error handling uniform.  All variants are `Copy`
//! so they can be passed around without allocation.

use core::fmt;

use crate::app::ports::{DeviceError, TelemetryError};

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An LED command or all-off sweep failed.
    Device(DeviceError),
    /// The telemetry transport failed or disconnected.
    Telemetry(TelemetryError),
    /// Startup configuration is invalid (e.g. zero or multiple panels).
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device(e) => write!(f, "device: {e}"),
            Self::Telemetry(e) => write!(f, "telemetry: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<DeviceError> for Error {
    fn from(e: DeviceError) -> Self {
        Self::Device(e)
    }
}

impl From<TelemetryError> for Error {
    fn from(e: TelemetryError) -> Self {
        Self::Telemetry(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
