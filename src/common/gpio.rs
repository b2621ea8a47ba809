// src/common/gpio.rs

/// Electrical mode of a GPIO line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Push-pull output, used for the trigger line.
    OutputPushPull,
    /// Input with no pull resistor, used for the echo line and for parking pins.
    InputFloating,
}

/// Output slew rate (edge speed) of a GPIO line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlewRate {
    Low,
    VeryHigh,
}

/// Full configuration applied to one line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    pub mode: PinMode,
    pub slew: SlewRate,
}

impl PinConfig {
    /// Trigger line while measuring.
    pub const TRIGGER: PinConfig = PinConfig { mode: PinMode::OutputPushPull, slew: SlewRate::VeryHigh };
    /// Echo line while measuring.
    pub const ECHO: PinConfig = PinConfig { mode: PinMode::InputFloating, slew: SlewRate::VeryHigh };
    /// Parked state both lines return to at teardown.
    pub const SAFE_DEFAULT: PinConfig = PinConfig { mode: PinMode::InputFloating, slew: SlewRate::Low };
}
