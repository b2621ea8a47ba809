// src/common/error.rs

use super::pins::GpioId;

/// Everything that can stop a ranging attempt.
///
/// `attempt_measurement` never hands these to its caller; they surface only
/// through `try_measure` and the session constructor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeterError<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying GPIO or power error from the HAL implementation.
    #[error("HAL error: {0:?}")]
    Gpio(E),

    /// The 5V sensor rail could not be confirmed on, so no trigger was sent.
    #[error("Sensor supply rail not available")]
    PowerUnavailable,

    /// A stale high level on the echo line never cleared before the deadline.
    #[error("Echo line stuck high before trigger")]
    SettleTimeout,

    /// The echo line never went high: the sensor did not respond.
    #[error("No echo received")]
    NoEcho,

    /// The echo line went high but never fell back low before the deadline.
    #[error("Echo held high past the deadline")]
    EchoStuckHigh,

    /// A polled wait ran into its deadline.
    #[error("Operation timed out")]
    Timeout,

    /// The session was already torn down.
    #[error("Session closed")]
    SessionClosed,

    /// The pin configuration was rejected.
    #[error("Invalid configuration: {0}")]
    Config(ConfigError),
}

// Allow mapping from underlying HAL error, same as the serial errors elsewhere
impl<E: core::fmt::Debug> From<E> for MeterError<E> {
    fn from(e: E) -> Self {
        MeterError::Gpio(e)
    }
}

/// Rejected pin configuration. Independent of any HAL error type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A raw selection index is outside the list of pin choices.
    #[error("Pin selection {index} out of range (0..{choices})")]
    InvalidSelection { index: u8, choices: u8 },

    /// Trigger and echo resolve to the same physical line.
    #[error("Trigger and echo share pin {0}")]
    SamePin(GpioId),
}
