// src/meter/poll.rs

use crate::common::{error::MeterError, hal_traits::SonicTimer};

/// A millisecond deadline shared by every wait of one attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deadline {
    start_ms: u32,
    timeout_ms: u32,
}

impl Deadline {
    /// Starts the deadline at the timer's current tick.
    pub fn start<T: SonicTimer + ?Sized>(timer: &T, timeout_ms: u32) -> Self {
        Deadline {
            start_ms: timer.tick_ms(),
            timeout_ms,
        }
    }

    #[inline]
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.start_ms)
    }

    #[inline]
    pub fn expired(&self, now_ms: u32) -> bool {
        self.elapsed_ms(now_ms) >= self.timeout_ms
    }
}

/// Spins on `check` until it stops returning `WouldBlock` or `deadline` passes.
///
/// `check` receives the interface so it can both sample pins and read the
/// cycle counter at the exact moment its condition holds. There is no delay
/// between polls: edge timing matters more than CPU time here.
pub fn poll_until<IF, E, FN>(
    interface: &mut IF,
    deadline: Deadline,
    mut check: FN,
) -> Result<(), MeterError<E>>
where
    IF: SonicTimer,
    E: core::fmt::Debug,
    FN: FnMut(&mut IF) -> nb::Result<(), E>,
{
    loop {
        match check(interface) {
            Ok(()) => return Ok(()),
            Err(nb::Error::WouldBlock) => {
                if deadline.expired(interface.tick_ms()) {
                    return Err(MeterError::Timeout);
                }
            }
            Err(nb::Error::Other(e)) => return Err(MeterError::Gpio(e)),
        }
    }
}
