// src/lib.rs

//! Blocking HC-SR04 ultrasonic rangefinder core.
//!
//! A [`SyncMeter`] owns the host interface for one session. Each call to
//! [`SyncMeter::attempt_measurement`] sends a trigger pulse, times the echo
//! with the cycle counter and returns a [`MeasurementResult`]; failures come
//! back as "distance not available", never as an error.

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod meter;
#[cfg(feature = "impl-native")]
pub mod native;

// Re-export key types for convenience
pub use common::{MeasurementResult, MeterConfig, MeterError};
pub use meter::{SyncMeter, Ticker};
