// src/common/distance.rs

/// Echo microseconds per unit of distance for the HC-SR04 family.
pub const ECHO_US_PER_UNIT: f32 = 58.0;

/// Converts an echo pulse width into centimeters.
///
/// `cm = (duration_us / 58) / 100`. No clamping: a corrupted duration gives
/// an implausible distance rather than an error.
#[inline]
pub fn duration_to_cm(duration_us: u32) -> f32 {
    let distance_mm = duration_us as f32 / ECHO_US_PER_UNIT;
    distance_mm / 100.0
}
