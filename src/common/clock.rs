// src/common/clock.rs

use super::hal_traits::CycleCounter;

/// Raw value of the free-running cycle counter.
///
/// Only the difference between two snapshots means anything; the counter
/// wraps freely.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleSnapshot(pub u32);

impl CycleSnapshot {
    /// Ticks from `earlier` to `self`, correct across a single counter wrap.
    #[inline]
    pub const fn ticks_since(self, earlier: CycleSnapshot) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

/// Reads the current counter value.
#[inline]
pub fn now<C: CycleCounter + ?Sized>(counter: &C) -> CycleSnapshot {
    CycleSnapshot(counter.cycles())
}

/// Converts a tick count to microseconds at `ticks_per_us` ticks per microsecond.
///
/// A rate of zero is treated as one tick per microsecond.
pub fn ticks_to_us(ticks: u32, ticks_per_us: u32) -> f32 {
    ticks as f32 / ticks_per_us.max(1) as f32
}

/// Microseconds between two snapshots.
pub fn elapsed_us(start: CycleSnapshot, end: CycleSnapshot, ticks_per_us: u32) -> f32 {
    ticks_to_us(end.ticks_since(start), ticks_per_us)
}

/// Microseconds between two snapshots, rounded to the nearest whole microsecond.
pub fn elapsed_whole_us(start: CycleSnapshot, end: CycleSnapshot, ticks_per_us: u32) -> u32 {
    let rate = u64::from(ticks_per_us.max(1));
    let ticks = u64::from(end.ticks_since(start));
    ((ticks + rate / 2) / rate) as u32
}

/// Longest interval, in whole microseconds, the counter can measure before wrapping.
pub const fn counter_period_us(ticks_per_us: u32) -> u32 {
    let rate = if ticks_per_us == 0 { 1 } else { ticks_per_us };
    u32::MAX / rate
}
