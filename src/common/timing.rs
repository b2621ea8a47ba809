// src/common/timing.rs

use core::time::Duration;

// Nominal values from the HC-SR04 datasheet and the reference application.

/// Width of the trigger pulse the sensor needs to start a ranging cycle.
pub const TRIGGER_PULSE: Duration = Duration::from_micros(10);

/// Deadline for one whole attempt, from arming the pins to the falling echo
/// edge. Comfortably above the ~38 ms the sensor holds echo high when nothing
/// is in range.
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_millis(100);

/// Interval between attempts when driven by the periodic ticker.
pub const MEASUREMENT_PERIOD: Duration = Duration::from_millis(200);

/// `Duration` in whole milliseconds, saturating at `u32::MAX`.
pub(crate) fn as_millis_u32(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

/// `Duration` in whole microseconds, saturating at `u32::MAX`.
pub(crate) fn as_micros_u32(d: Duration) -> u32 {
    u32::try_from(d.as_micros()).unwrap_or(u32::MAX)
}
