// src/common/board.rs

use super::gpio::PinConfig;
use super::hal_traits::{CycleCounter, PowerSupply, SonicGpio, SonicTimer};
use super::pins::GpioId;

/// Glues four separate HAL pieces into one `SonicInterface`.
///
/// Hosts rarely expose GPIO, timers, the cycle counter and power control
/// from a single type; `Board` lets each come from wherever it lives.
#[derive(Debug)]
pub struct Board<G, T, C, P> {
    pub gpio: G,
    pub timer: T,
    pub counter: C,
    pub power: P,
}

impl<G, T, C, P> Board<G, T, C, P> {
    pub fn new(gpio: G, timer: T, counter: C, power: P) -> Self {
        Board { gpio, timer, counter, power }
    }

    pub fn release(self) -> (G, T, C, P) {
        (self.gpio, self.timer, self.counter, self.power)
    }
}

impl<G: SonicGpio, T, C, P> SonicGpio for Board<G, T, C, P> {
    type Error = G::Error;

    fn configure(&mut self, pin: GpioId, config: PinConfig) -> Result<(), Self::Error> {
        self.gpio.configure(pin, config)
    }

    fn write(&mut self, pin: GpioId, high: bool) -> Result<(), Self::Error> {
        self.gpio.write(pin, high)
    }

    fn read(&mut self, pin: GpioId) -> Result<bool, Self::Error> {
        self.gpio.read(pin)
    }
}

impl<G, T: SonicTimer, C, P> SonicTimer for Board<G, T, C, P> {
    fn tick_ms(&self) -> u32 {
        self.timer.tick_ms()
    }

    fn delay_us(&mut self, us: u32) {
        self.timer.delay_us(us)
    }
}

impl<G, T, C: CycleCounter, P> CycleCounter for Board<G, T, C, P> {
    fn cycles(&self) -> u32 {
        self.counter.cycles()
    }

    fn cycles_per_microsecond(&self) -> u32 {
        self.counter.cycles_per_microsecond()
    }
}

impl<G, T, C, P: PowerSupply> PowerSupply for Board<G, T, C, P> {
    fn is_charging(&self) -> bool {
        self.power.is_charging()
    }

    fn is_boost_enabled(&self) -> bool {
        self.power.is_boost_enabled()
    }

    fn enable_boost(&mut self) -> bool {
        self.power.enable_boost()
    }

    fn disable_boost(&mut self) {
        self.power.disable_boost()
    }

    fn suppress_charge(&mut self, suppress: bool) {
        self.power.suppress_charge(suppress)
    }
}

/// Power control for hosts whose sensor rail is always on (bench supply, fixed 5V).
#[derive(Debug, Default, Copy, Clone)]
pub struct AlwaysPowered;

impl PowerSupply for AlwaysPowered {
    fn is_charging(&self) -> bool {
        true
    }

    fn is_boost_enabled(&self) -> bool {
        false
    }

    fn enable_boost(&mut self) -> bool {
        true
    }

    fn disable_boost(&mut self) {}

    fn suppress_charge(&mut self, _suppress: bool) {}
}
