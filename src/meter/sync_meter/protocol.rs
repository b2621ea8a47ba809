// src/meter/sync_meter/protocol.rs

use super::SyncMeter;
use crate::common::{
    clock::{self, CycleSnapshot},
    error::MeterError,
    gpio::PinConfig,
    hal_traits::{SonicGpio, SonicInterface, SonicTimer},
    pins::GpioId,
};
use crate::meter::poll::{poll_until, Deadline};
use log::{debug, warn};

type HalError<IF> = <IF as SonicGpio>::Error;

/// Trigger/echo lines for one attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct ResolvedPins {
    pub trigger: GpioId,
    pub echo: GpioId,
}

/// Both edges of a captured echo pulse.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct EchoEdges {
    pub rise: CycleSnapshot,
    pub fall: CycleSnapshot,
}

impl<IF> SyncMeter<IF>
where
    IF: SonicInterface,
{
    /// Runs the trigger-and-listen sequence and returns the echo edges.
    ///
    /// Every wait shares one deadline started before the pins are touched, so
    /// the call never blocks longer than `timeout_ms` plus one poll.
    pub(super) fn run_protocol(&mut self, pins: ResolvedPins) -> Result<EchoEdges, MeterError<HalError<IF>>> {
        let deadline = Deadline::start(&self.interface, self.config.timeout_ms);

        self.arm_pins(pins)?;
        self.send_trigger(pins.trigger)?;

        self.settle_echo(pins.echo, deadline)?;
        let rise = self.wait_for_echo_level(pins.echo, true, deadline).map_err(|e| match e {
            MeterError::Timeout => MeterError::NoEcho,
            other => other,
        })?;
        let fall = self.wait_for_echo_level(pins.echo, false, deadline).map_err(|e| match e {
            MeterError::Timeout => MeterError::EchoStuckHigh,
            other => other,
        })?;

        debug!("Echo captured, {} ticks", fall.ticks_since(rise));
        Ok(EchoEdges { rise, fall })
    }

    /// Trigger low and push-pull, echo floating input.
    pub(super) fn arm_pins(&mut self, pins: ResolvedPins) -> Result<(), HalError<IF>> {
        self.interface.write(pins.trigger, false)?;
        self.interface.configure(pins.trigger, PinConfig::TRIGGER)?;
        self.interface.configure(pins.echo, PinConfig::ECHO)?;
        Ok(())
    }

    /// High for `trigger_pulse_us`, busy-waited, then low.
    pub(super) fn send_trigger(&mut self, trigger: GpioId) -> Result<(), HalError<IF>> {
        self.interface.write(trigger, true)?;
        self.interface.delay_us(self.config.trigger_pulse_us);
        self.interface.write(trigger, false)?;
        Ok(())
    }

    /// Waits out a stale high level left on the echo line by an earlier cycle.
    fn settle_echo(&mut self, echo: GpioId, deadline: Deadline) -> Result<(), MeterError<HalError<IF>>> {
        poll_until(&mut self.interface, deadline, |iface| {
            if iface.read(echo).map_err(nb::Error::Other)? {
                Err(nb::Error::WouldBlock)
            } else {
                Ok(())
            }
        })
        .map_err(|e| match e {
            MeterError::Timeout => MeterError::SettleTimeout,
            other => other,
        })
    }

    /// Spins until echo reads `level`, snapshotting the cycle counter on the
    /// same poll that sees the edge.
    fn wait_for_echo_level(
        &mut self,
        echo: GpioId,
        level: bool,
        deadline: Deadline,
    ) -> Result<CycleSnapshot, MeterError<HalError<IF>>> {
        let mut edge = CycleSnapshot(0);
        poll_until(&mut self.interface, deadline, |iface| {
            if iface.read(echo).map_err(nb::Error::Other)? == level {
                edge = clock::now(&*iface);
                Ok(())
            } else {
                Err(nb::Error::WouldBlock)
            }
        })?;
        Ok(edge)
    }

    /// Parks both lines as low-slew inputs. A line that fails to park is
    /// logged and does not stop the other one.
    pub(super) fn park_pins(&mut self, pins: ResolvedPins) {
        for pin in [pins.trigger, pins.echo] {
            if let Err(e) = self.interface.configure(pin, PinConfig::SAFE_DEFAULT) {
                warn!("Failed to park pin {}: {:?}", pin, e);
            }
        }
    }
}
