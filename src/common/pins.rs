// src/common/pins.rs

use super::error::ConfigError;
use core::convert::TryFrom;
use core::fmt;

/// GPIO port letter of the host's external header.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioPort {
    A,
    B,
    C,
}

impl GpioPort {
    #[inline]
    pub const fn as_char(&self) -> char {
        match self {
            GpioPort::A => 'A',
            GpioPort::B => 'B',
            GpioPort::C => 'C',
        }
    }
}

/// A concrete GPIO line, e.g. `A4` (port A, pin 4).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioId {
    pub port: GpioPort,
    pub pin: u8,
}

impl GpioId {
    pub const fn new(port: GpioPort, pin: u8) -> Self {
        GpioId { port, pin }
    }
}

impl fmt::Display for GpioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.port.as_char(), self.pin)
    }
}

// --- Reference header wiring ---

/// Lines offered for the trigger, in selector order.
pub const TRIGGER_PINS: [GpioId; 3] = [
    GpioId::new(GpioPort::A, 4),
    GpioId::new(GpioPort::A, 6),
    GpioId::new(GpioPort::A, 7),
];

/// Lines offered for the echo, in selector order.
pub const ECHO_PINS: [GpioId; 2] = [GpioId::new(GpioPort::B, 2), GpioId::new(GpioPort::B, 3)];

/// Board labels matching `TRIGGER_PINS`.
pub const TRIGGER_PIN_NAMES: [&str; 3] = ["A4", "A6", "A7"];
/// Board labels matching `ECHO_PINS`.
pub const ECHO_PIN_NAMES: [&str; 2] = ["B2", "B3"];

/// Resolves a trigger selector index to its GPIO line.
///
/// # Panics
///
/// Panics if `index` is out of range. Indices come from a bounded selector,
/// so a bad one is an integration bug, not a runtime condition.
pub fn resolve_trigger(index: u8) -> GpioId {
    match TRIGGER_PINS.get(index as usize) {
        Some(pin) => *pin,
        None => panic!("trigger pin index {} out of range", index),
    }
}

/// Resolves an echo selector index to its GPIO line.
///
/// # Panics
///
/// Panics if `index` is out of range.
pub fn resolve_echo(index: u8) -> GpioId {
    match ECHO_PINS.get(index as usize) {
        Some(pin) => *pin,
        None => panic!("echo pin index {} out of range", index),
    }
}

// --- Selector indices ---

/// Validated index into `TRIGGER_PINS`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriggerSelection(u8);

/// Validated index into `ECHO_PINS`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EchoSelection(u8);

impl TriggerSelection {
    pub const CHOICES: u8 = TRIGGER_PINS.len() as u8;

    pub fn try_from_index(index: u8) -> Result<Self, ConfigError> {
        if index < Self::CHOICES {
            Ok(TriggerSelection(index))
        } else {
            Err(ConfigError::InvalidSelection { index, choices: Self::CHOICES })
        }
    }

    #[inline]
    pub const fn index(&self) -> u8 {
        self.0
    }

    pub fn resolve(&self) -> GpioId {
        resolve_trigger(self.0)
    }

    pub fn label(&self) -> &'static str {
        TRIGGER_PIN_NAMES[self.0 as usize]
    }
}

impl EchoSelection {
    pub const CHOICES: u8 = ECHO_PINS.len() as u8;

    pub fn try_from_index(index: u8) -> Result<Self, ConfigError> {
        if index < Self::CHOICES {
            Ok(EchoSelection(index))
        } else {
            Err(ConfigError::InvalidSelection { index, choices: Self::CHOICES })
        }
    }

    #[inline]
    pub const fn index(&self) -> u8 {
        self.0
    }

    pub fn resolve(&self) -> GpioId {
        resolve_echo(self.0)
    }

    pub fn label(&self) -> &'static str {
        ECHO_PIN_NAMES[self.0 as usize]
    }
}

impl TryFrom<u8> for TriggerSelection {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_index(value)
    }
}

impl TryFrom<u8> for EchoSelection {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_index(value)
    }
}

/// Checks that a trigger/echo pair drives two different physical lines.
pub fn check_distinct(trigger: TriggerSelection, echo: EchoSelection) -> Result<(), ConfigError> {
    let trigger_pin = trigger.resolve();
    if trigger_pin == echo.resolve() {
        return Err(ConfigError::SamePin(trigger_pin));
    }
    Ok(())
}
