// src/meter/ticker.rs

use super::sync_meter::SyncMeter;
use crate::common::{
    hal_traits::{SonicInterface, SonicTimer},
    types::MeasurementResult,
};

/// Paces attempts at a fixed period without owning a timer.
///
/// A UI main loop (or a periodic timer callback) calls [`Ticker::poll`]
/// as often as it likes; an attempt runs only when a period has passed
/// since the previous one. Attempts run inside `poll`, so two can never
/// overlap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ticker {
    period_ms: u32,
    last_ms: Option<u32>,
}

impl Ticker {
    pub const fn new(period_ms: u32) -> Self {
        Ticker { period_ms, last_ms: None }
    }

    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Returns `true` and restarts the period if an attempt is due at `now_ms`.
    /// The first call is always due.
    pub fn due(&mut self, now_ms: u32) -> bool {
        let due = match self.last_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= self.period_ms,
        };
        if due {
            self.last_ms = Some(now_ms);
        }
        due
    }

    /// Runs one attempt on `meter` if one is due, returning its result.
    pub fn poll<IF: SonicInterface>(&mut self, meter: &mut SyncMeter<IF>) -> Option<MeasurementResult> {
        let now_ms = meter.interface().tick_ms();
        if self.due(now_ms) {
            Some(meter.attempt_measurement())
        } else {
            None
        }
    }

    /// Forgets the last attempt, as when the measure screen is re-entered.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
