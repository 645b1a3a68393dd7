//! Autopilot annunciator LED synchronizer for the VKB FSM-GA panel.
//!
//! Mirrors the sim's autopilot flags onto the panel's twelve indicator
//! LEDs, rewriting an LED only when its derived state changes.  The core
//! is pure logic behind port traits; adapters plug in the device and
//! telemetry transports.

#![deny(unused_must_use)]

pub mod app;
pub mod cache;
pub mod config;
pub mod discovery;
pub mod panel;
pub mod rules;
pub mod selftest;

pub mod adapters;

mod error;
pub use error::{Error, Result};
