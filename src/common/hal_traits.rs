// src/common/hal_traits.rs

use super::gpio::PinConfig;
use super::pins::GpioId;
use core::fmt::Debug;

/// Pin-addressed GPIO access.
///
/// The meter reconfigures lines by id at the start of every attempt and at
/// teardown, so implementations must accept any id from the pin tables.
pub trait SonicGpio {
    /// Associated error type for pin failures.
    type Error: Debug;

    /// Applies mode and slew rate to a line.
    fn configure(&mut self, pin: GpioId, config: PinConfig) -> Result<(), Self::Error>;

    /// Drives an output line high (`true`) or low (`false`).
    fn write(&mut self, pin: GpioId, high: bool) -> Result<(), Self::Error>;

    /// Samples an input line. Called in tight loops, keep it cheap.
    fn read(&mut self, pin: GpioId) -> Result<bool, Self::Error>;
}

/// Millisecond wall clock plus a short busy-wait.
pub trait SonicTimer {
    /// Monotonic millisecond tick. Wraps at `u32::MAX`.
    fn tick_ms(&self) -> u32;

    /// Busy-waits for at least `us` microseconds. Must not yield to a scheduler.
    fn delay_us(&mut self, us: u32);
}

/// Free-running high resolution counter (e.g. the Cortex-M DWT cycle counter).
pub trait CycleCounter {
    /// Current counter value.
    fn cycles(&self) -> u32;

    /// Counter ticks per microsecond at the current core clock.
    fn cycles_per_microsecond(&self) -> u32;
}

/// Control over the sensor's 5V rail.
pub trait PowerSupply {
    /// External power (USB / charger) is present, so the rail is up.
    fn is_charging(&self) -> bool;

    /// The on-board boost (OTG) converter is running.
    fn is_boost_enabled(&self) -> bool;

    /// Switches the boost converter on. Returns whether it came up.
    fn enable_boost(&mut self) -> bool;

    /// Switches the boost converter off.
    fn disable_boost(&mut self);

    /// Holds off (`true`) or re-allows (`false`) battery charging.
    fn suppress_charge(&mut self, suppress: bool);
}

/// Everything a `SyncMeter` needs from the host.
pub trait SonicInterface: SonicGpio + SonicTimer + CycleCounter + PowerSupply {}

impl<T> SonicInterface for T where T: SonicGpio + SonicTimer + CycleCounter + PowerSupply {}
