// src/common/config.rs

use super::error::ConfigError;
use super::pins::{check_distinct, EchoSelection, TriggerSelection};
use super::timing;

/// Session configuration. Lives only as long as the session; nothing is persisted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeterConfig {
    pub trigger: TriggerSelection,
    pub echo: EchoSelection,
    /// Deadline for a whole attempt, in milliseconds.
    pub timeout_ms: u32,
    /// Trigger pulse width, in microseconds.
    pub trigger_pulse_us: u32,
    /// Interval the ticker uses between attempts, in milliseconds.
    pub period_ms: u32,
}

impl Default for MeterConfig {
    fn default() -> Self {
        MeterConfig {
            trigger: TriggerSelection::default(),
            echo: EchoSelection::default(),
            timeout_ms: timing::as_millis_u32(timing::ATTEMPT_TIMEOUT),
            trigger_pulse_us: timing::as_micros_u32(timing::TRIGGER_PULSE),
            period_ms: timing::as_millis_u32(timing::MEASUREMENT_PERIOD),
        }
    }
}

impl MeterConfig {
    /// Default timings with the given pin pair.
    pub fn with_pins(trigger: TriggerSelection, echo: EchoSelection) -> Self {
        MeterConfig {
            trigger,
            echo,
            ..Self::default()
        }
    }

    /// Builds a config from raw selector indices, as a settings screen hands them over.
    pub fn from_indices(trigger_index: u8, echo_index: u8) -> Result<Self, ConfigError> {
        let config = Self::with_pins(
            TriggerSelection::try_from_index(trigger_index)?,
            EchoSelection::try_from_index(echo_index)?,
        );
        config.validate()?;
        Ok(config)
    }

    pub fn timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn period_ms(mut self, period_ms: u32) -> Self {
        self.period_ms = period_ms;
        self
    }

    /// Rejects a trigger/echo pair that lands on one physical line.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_distinct(self.trigger, self.echo)
    }
}
