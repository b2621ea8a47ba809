// src/native.rs

//! Adapters from `embedded-hal` 1.0 pins and delays to the meter's traits.
//!
//! HAL pin types fix their mode in the type, so `NativePins` is wired to one
//! trigger/echo pair and treats `configure` as a check that the requested
//! line is one of its two. Parking pins at teardown is then up to the HAL
//! (typically by dropping or converting the pin types).

use crate::common::{
    config::MeterConfig,
    gpio::PinConfig,
    hal_traits::{SonicGpio, SonicTimer},
    pins::GpioId,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::debug;

/// Pin failure from a `NativePins` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativePinError<TE, EE> {
    Trigger(TE),
    Echo(EE),
    /// The meter asked for a line this adapter is not wired to.
    Unwired(GpioId),
}

/// A fixed trigger output and echo input.
#[derive(Debug)]
pub struct NativePins<TRIG, ECHO> {
    trigger: TRIG,
    echo: ECHO,
    trigger_id: GpioId,
    echo_id: GpioId,
}

impl<TRIG, ECHO> NativePins<TRIG, ECHO>
where
    TRIG: OutputPin,
    ECHO: InputPin,
{
    /// Wires the pins to the lines `config` selects.
    pub fn new(trigger: TRIG, echo: ECHO, config: &MeterConfig) -> Self {
        NativePins {
            trigger,
            echo,
            trigger_id: config.trigger.resolve(),
            echo_id: config.echo.resolve(),
        }
    }

    pub fn release(self) -> (TRIG, ECHO) {
        (self.trigger, self.echo)
    }
}

impl<TRIG, ECHO> SonicGpio for NativePins<TRIG, ECHO>
where
    TRIG: OutputPin,
    ECHO: InputPin,
{
    type Error = NativePinError<TRIG::Error, ECHO::Error>;

    fn configure(&mut self, pin: GpioId, config: PinConfig) -> Result<(), Self::Error> {
        if pin != self.trigger_id && pin != self.echo_id {
            return Err(NativePinError::Unwired(pin));
        }
        if config == PinConfig::SAFE_DEFAULT {
            debug!("Pin {} keeps its HAL mode; park it by releasing the adapter", pin);
        }
        Ok(())
    }

    fn write(&mut self, pin: GpioId, high: bool) -> Result<(), Self::Error> {
        if pin != self.trigger_id {
            return Err(NativePinError::Unwired(pin));
        }
        let result = if high { self.trigger.set_high() } else { self.trigger.set_low() };
        result.map_err(NativePinError::Trigger)
    }

    fn read(&mut self, pin: GpioId) -> Result<bool, Self::Error> {
        if pin != self.echo_id {
            return Err(NativePinError::Unwired(pin));
        }
        self.echo.is_high().map_err(NativePinError::Echo)
    }
}

/// `SonicTimer` from a blocking `DelayNs` plus a millisecond tick function.
#[derive(Debug)]
pub struct NativeTimer<D, F> {
    delay: D,
    millis: F,
}

impl<D, F> NativeTimer<D, F>
where
    D: DelayNs,
    F: Fn() -> u32,
{
    pub fn new(delay: D, millis: F) -> Self {
        NativeTimer { delay, millis }
    }
}

impl<D, F> SonicTimer for NativeTimer<D, F>
where
    D: DelayNs,
    F: Fn() -> u32,
{
    fn tick_ms(&self) -> u32 {
        (self.millis)()
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}
