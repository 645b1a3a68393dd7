//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the panel mirror: rule
//! evaluation, change detection, and poll-loop sequencing.  All
//! interaction with the device and the sim happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable
//! without hardware or a running sim.

pub mod events;
pub mod ports;
pub mod service;
