// src/meter/sync_meter/mod.rs

mod power;
mod protocol;

use crate::common::{
    clock,
    config::MeterConfig,
    error::MeterError,
    gpio::PinConfig,
    hal_traits::{CycleCounter, SonicGpio, SonicInterface},
    pins::{EchoSelection, TriggerSelection},
    types::{Measurement, MeasurementResult, PowerState},
};
use crate::meter::ticker::Ticker;
use log::{debug, info, warn};
use protocol::ResolvedPins;

/// One HC-SR04 ranging session over a blocking, polled interface.
///
/// Owns the interface for its whole life. Creating a `SyncMeter` starts the
/// session (charge suppression, rail check); dropping it or calling
/// [`SyncMeter::teardown`] ends it.
///
/// All methods take `&mut self`, so an attempt and a read of the last result
/// can never overlap.
#[derive(Debug)]
pub struct SyncMeter<IF>
where
    IF: SonicInterface,
{
    interface: IF,
    config: MeterConfig,
    power: PowerState,
    result: MeasurementResult,
    closed: bool,
}

impl<IF> SyncMeter<IF>
where
    IF: SonicInterface,
{
    /// Starts a session. Fails only if `config` is rejected; a rail that
    /// cannot be powered yet is retried on each attempt.
    pub fn new(interface: IF, config: MeterConfig) -> Result<Self, MeterError<IF::Error>> {
        config.validate().map_err(MeterError::Config)?;

        let mut meter = SyncMeter {
            interface,
            config,
            power: PowerState::default(),
            result: MeasurementResult::unavailable(),
            closed: false,
        };

        meter.suppress_charging();
        let rail = meter.ensure_rail_on();
        info!(
            "Sonic meter session started, trigger {} echo {}, rail {}",
            config.trigger.label(),
            config.echo.label(),
            if rail { "on" } else { "off" }
        );
        Ok(meter)
    }

    // --- Configuration ---

    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    /// Selects a new trigger/echo pair for the following attempts.
    ///
    /// Lines that drop out of use are parked in the safe default state.
    pub fn configure(
        &mut self,
        trigger: TriggerSelection,
        echo: EchoSelection,
    ) -> Result<(), MeterError<IF::Error>> {
        let next = MeterConfig { trigger, echo, ..self.config };
        next.validate().map_err(MeterError::Config)?;

        let old = self.resolved_pins();
        let new = ResolvedPins { trigger: trigger.resolve(), echo: echo.resolve() };

        // Selection only changes once the old lines are parked.
        if old.trigger != new.trigger && old.trigger != new.echo {
            self.interface.configure(old.trigger, PinConfig::SAFE_DEFAULT)?;
        }
        if old.echo != new.echo && old.echo != new.trigger {
            self.interface.configure(old.echo, PinConfig::SAFE_DEFAULT)?;
        }
        self.config = next;
        debug!("Pins now trigger {} echo {}", trigger.label(), echo.label());
        Ok(())
    }

    // --- Measurement ---

    /// One full ranging attempt. Never fails outwardly: any problem yields
    /// [`MeasurementResult::unavailable`].
    pub fn attempt_measurement(&mut self) -> MeasurementResult {
        if let Err(e) = self.try_measure() {
            debug!("Measurement unavailable: {:?}", e);
        }
        self.result
    }

    /// Switches to the given pins and measures. A rejected pin pair is
    /// reported like any other failed attempt.
    pub fn measure_with(&mut self, trigger: TriggerSelection, echo: EchoSelection) -> MeasurementResult {
        if let Err(e) = self.configure(trigger, echo) {
            warn!("Pin selection rejected: {:?}", e);
            self.result = MeasurementResult::unavailable();
            return self.result;
        }
        self.attempt_measurement()
    }

    /// Like [`attempt_measurement`](Self::attempt_measurement), but keeps the
    /// reason a measurement was unavailable.
    pub fn try_measure(&mut self) -> Result<Measurement, MeterError<IF::Error>> {
        self.result = MeasurementResult::unavailable();

        if self.closed {
            return Err(MeterError::SessionClosed);
        }
        if !self.ensure_rail_on() {
            return Err(MeterError::PowerUnavailable);
        }

        let edges = self.run_protocol(self.resolved_pins())?;

        let duration_us = clock::elapsed_whole_us(edges.rise, edges.fall, self.interface.cycles_per_microsecond());
        let measurement = Measurement::from_duration_us(duration_us);
        self.result = measurement.into();
        Ok(measurement)
    }

    /// Result of the most recent attempt.
    pub fn last_result(&self) -> MeasurementResult {
        self.result
    }

    pub fn power_state(&self) -> PowerState {
        self.power
    }

    /// A ticker at the configured period, for hosts without their own timer.
    pub fn ticker(&self) -> Ticker {
        Ticker::new(self.config.period_ms)
    }

    pub fn interface(&self) -> &IF {
        &self.interface
    }

    pub fn interface_mut(&mut self) -> &mut IF {
        &mut self.interface
    }

    // --- Teardown ---

    /// Ends the session: parks both lines as low-slew inputs, switches off
    /// the boost supply if this session switched it on, and re-allows
    /// charging. Later calls do nothing.
    pub fn teardown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        self.park_pins(self.resolved_pins());
        self.release_power();
        self.result = MeasurementResult::unavailable();
        info!("Sonic meter session closed");
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn resolved_pins(&self) -> ResolvedPins {
        ResolvedPins {
            trigger: self.config.trigger.resolve(),
            echo: self.config.echo.resolve(),
        }
    }
}

impl<IF> Drop for SyncMeter<IF>
where
    IF: SonicInterface,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{
        hal_traits::{PowerSupply, SonicTimer},
        pins::{GpioId, ECHO_PINS, TRIGGER_PINS},
    };
    use core::cell::Cell;

    const ALL_PINS: usize = TRIGGER_PINS.len() + ECHO_PINS.len();

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    struct MockPinError;

    // --- Mock Interface ---
    // Simulated clock in microseconds; every pin read costs `poll_cost_us`.
    // Echo timings are relative to the falling edge of the trigger pulse.
    #[derive(Debug)]
    struct MockInterface {
        now_us: Cell<u64>,
        poll_cost_us: u64,
        cycles_per_us: u32,
        cycle_offset: u32,

        pin_configs: [(GpioId, Option<PinConfig>); ALL_PINS],
        configure_calls: u32,
        trigger_level: bool,
        trigger_fell_at: Option<u64>,
        trigger_pulses: u32,
        last_pulse_us: u64,
        trigger_rose_at: u64,

        stale_high_until: Option<u64>,
        echo_rise_after_us: Option<u64>,
        echo_width_us: Option<u64>,
        fail_reads: bool,
        fail_configure_for: Option<GpioId>,

        charging: bool,
        boost_enabled: bool,
        boost_can_start: bool,
        boost_disable_calls: u32,
        charge_suppressed: bool,
    }

    impl MockInterface {
        fn new() -> Self {
            let mut pin_configs = [(TRIGGER_PINS[0], None); ALL_PINS];
            for (slot, pin) in pin_configs.iter_mut().zip(TRIGGER_PINS.iter().chain(ECHO_PINS.iter())) {
                slot.0 = *pin;
            }
            MockInterface {
                now_us: Cell::new(0),
                poll_cost_us: 1,
                cycles_per_us: 64,
                cycle_offset: 0,
                pin_configs,
                configure_calls: 0,
                trigger_level: false,
                trigger_fell_at: None,
                trigger_pulses: 0,
                last_pulse_us: 0,
                trigger_rose_at: 0,
                stale_high_until: None,
                echo_rise_after_us: None,
                echo_width_us: None,
                fail_reads: false,
                fail_configure_for: None,
                charging: false,
                boost_enabled: false,
                boost_can_start: true,
                boost_disable_calls: 0,
                charge_suppressed: false,
            }
        }

        fn with_echo(rise_after_us: u64, width_us: u64) -> Self {
            let mut mock = Self::new();
            mock.echo_rise_after_us = Some(rise_after_us);
            mock.echo_width_us = Some(width_us);
            mock
        }

        fn now(&self) -> u64 {
            self.now_us.get()
        }

        fn advance(&self, us: u64) {
            self.now_us.set(self.now_us.get() + us);
        }

        fn config_of(&self, pin: GpioId) -> Option<PinConfig> {
            self.pin_configs.iter().find(|(p, _)| *p == pin).and_then(|(_, c)| *c)
        }

        fn all_parked(&self) -> bool {
            self.pin_configs
                .iter()
                .all(|(_, c)| c.map_or(true, |c| c == PinConfig::SAFE_DEFAULT))
        }

        fn echo_level(&self, t: u64) -> bool {
            if self.stale_high_until.map_or(false, |until| t < until) {
                return true;
            }
            match (self.trigger_fell_at, self.echo_rise_after_us) {
                (Some(fell), Some(after)) => {
                    let rise = fell + after;
                    t >= rise && self.echo_width_us.map_or(true, |w| t < rise + w)
                }
                _ => false,
            }
        }
    }

    impl SonicGpio for MockInterface {
        type Error = MockPinError;

        fn configure(&mut self, pin: GpioId, config: PinConfig) -> Result<(), Self::Error> {
            self.configure_calls += 1;
            if self.fail_configure_for == Some(pin) {
                return Err(MockPinError);
            }
            match self.pin_configs.iter_mut().find(|(p, _)| *p == pin) {
                Some(slot) => {
                    slot.1 = Some(config);
                    Ok(())
                }
                None => Err(MockPinError),
            }
        }

        fn write(&mut self, pin: GpioId, high: bool) -> Result<(), Self::Error> {
            if !TRIGGER_PINS.contains(&pin) {
                return Err(MockPinError);
            }
            if high && !self.trigger_level {
                self.trigger_rose_at = self.now();
            }
            if !high && self.trigger_level {
                self.trigger_fell_at = Some(self.now());
                self.trigger_pulses += 1;
                self.last_pulse_us = self.now() - self.trigger_rose_at;
            }
            self.trigger_level = high;
            Ok(())
        }

        fn read(&mut self, pin: GpioId) -> Result<bool, Self::Error> {
            if self.fail_reads || !ECHO_PINS.contains(&pin) {
                return Err(MockPinError);
            }
            self.advance(self.poll_cost_us);
            Ok(self.echo_level(self.now()))
        }
    }

    impl SonicTimer for MockInterface {
        fn tick_ms(&self) -> u32 {
            (self.now() / 1000) as u32
        }
        fn delay_us(&mut self, us: u32) {
            self.advance(us as u64);
        }
    }

    impl CycleCounter for MockInterface {
        fn cycles(&self) -> u32 {
            (self.now() as u32).wrapping_mul(self.cycles_per_us).wrapping_add(self.cycle_offset)
        }
        fn cycles_per_microsecond(&self) -> u32 {
            self.cycles_per_us
        }
    }

    impl PowerSupply for MockInterface {
        fn is_charging(&self) -> bool {
            self.charging
        }
        fn is_boost_enabled(&self) -> bool {
            self.boost_enabled
        }
        fn enable_boost(&mut self) -> bool {
            if self.boost_can_start {
                self.boost_enabled = true;
            }
            self.boost_enabled
        }
        fn disable_boost(&mut self) {
            self.boost_disable_calls += 1;
            self.boost_enabled = false;
        }
        fn suppress_charge(&mut self, suppress: bool) {
            self.charge_suppressed = suppress;
        }
    }

    fn meter(mock: MockInterface) -> SyncMeter<MockInterface> {
        SyncMeter::new(mock, MeterConfig::default()).unwrap()
    }

    fn sel(trigger: u8, echo: u8) -> (TriggerSelection, EchoSelection) {
        (
            TriggerSelection::try_from_index(trigger).unwrap(),
            EchoSelection::try_from_index(echo).unwrap(),
        )
    }

    // --- Session start ---

    #[test]
    fn test_session_start_enables_boost_and_suppresses_charge() {
        let m = meter(MockInterface::new());
        assert!(m.interface.boost_enabled);
        assert!(m.interface.charge_suppressed);
        assert_eq!(
            m.power_state(),
            PowerState { rail_confirmed_on: true, boost_enabled_by_session: true, charge_suppressed: true }
        );
        assert_eq!(m.interface.configure_calls, 0);
    }

    #[test]
    fn test_session_start_with_external_power_leaves_boost_alone() {
        let mut mock = MockInterface::new();
        mock.charging = true;
        let m = meter(mock);
        assert!(m.power_state().rail_confirmed_on);
        assert!(!m.power_state().boost_enabled_by_session);
        assert!(!m.interface.boost_enabled);
    }

    #[test]
    fn test_rail_check_is_cached() {
        let mut m = meter(MockInterface::new());
        m.interface.boost_enabled = false;
        m.interface.boost_can_start = false;
        assert!(m.ensure_rail_on());
    }

    // --- Measurement ---

    #[test]
    fn test_simulated_echo_round_trip() {
        let mut m = meter(MockInterface::with_echo(450, 5_800));
        let result = m.attempt_measurement();
        assert!(result.succeeded);
        assert!(result.echo_duration_us.abs_diff(5_800) <= 1, "got {}", result.echo_duration_us);
        assert!((result.distance_cm - 1.0).abs() < 0.01);
        assert_eq!(m.last_result(), result);
        assert_eq!(m.interface.trigger_pulses, 1);
        assert_eq!(m.interface.last_pulse_us, 10);
    }

    #[test]
    fn test_echo_width_within_quantization_for_coarse_polling() {
        let mut mock = MockInterface::with_echo(300, 12_345);
        mock.poll_cost_us = 3;
        let mut m = meter(mock);
        let result = m.attempt_measurement();
        assert!(result.succeeded);
        assert!(result.echo_duration_us.abs_diff(12_345) <= 3, "got {}", result.echo_duration_us);
    }

    #[test]
    fn test_measurement_across_counter_wrap() {
        let mut mock = MockInterface::with_echo(200, 2_000);
        mock.cycle_offset = u32::MAX - 64 * 1_000;
        let mut m = meter(mock);
        let measurement = m.try_measure().unwrap();
        assert!(measurement.echo_duration_us.abs_diff(2_000) <= 1);
    }

    #[test]
    fn test_pins_armed_for_measurement() {
        let mut m = meter(MockInterface::with_echo(100, 1_000));
        m.attempt_measurement();
        assert_eq!(m.interface.config_of(TRIGGER_PINS[0]), Some(PinConfig::TRIGGER));
        assert_eq!(m.interface.config_of(ECHO_PINS[0]), Some(PinConfig::ECHO));
        assert!(!m.interface.trigger_level);
    }

    #[test]
    fn test_no_echo_times_out_within_deadline() {
        let mut m = meter(MockInterface::new());
        let start = m.interface.now();
        let result = m.attempt_measurement();
        let elapsed = m.interface.now() - start;
        assert!(!result.succeeded);
        assert!(elapsed >= 99_000, "returned too early: {} us", elapsed);
        assert!(elapsed <= 101_000, "returned too late: {} us", elapsed);
    }

    #[test]
    fn test_no_echo_reason() {
        let mut m = meter(MockInterface::new());
        assert_eq!(m.try_measure(), Err(MeterError::NoEcho));
    }

    #[test]
    fn test_echo_stuck_high_reason() {
        let mut mock = MockInterface::new();
        mock.echo_rise_after_us = Some(500);
        mock.echo_width_us = None;
        let mut m = meter(mock);
        let start = m.interface.now();
        assert_eq!(m.try_measure(), Err(MeterError::EchoStuckHigh));
        assert!(m.interface.now() - start <= 101_000);
        assert!(!m.last_result().succeeded);
    }

    #[test]
    fn test_stale_high_echo_is_settled_first() {
        let mut mock = MockInterface::with_echo(2_000, 1_160);
        mock.stale_high_until = Some(1_000);
        let mut m = meter(mock);
        let result = m.attempt_measurement();
        assert!(result.succeeded);
        assert!(result.echo_duration_us.abs_diff(1_160) <= 1);
    }

    #[test]
    fn test_stale_high_that_never_clears() {
        let mut mock = MockInterface::new();
        mock.stale_high_until = Some(u64::MAX);
        let mut m = meter(mock);
        assert_eq!(m.try_measure(), Err(MeterError::SettleTimeout));
    }

    #[test]
    fn test_pin_read_error_collapses_to_unavailable() {
        let mut mock = MockInterface::with_echo(100, 100);
        mock.fail_reads = true;
        let mut m = meter(mock);
        assert_eq!(m.try_measure(), Err(MeterError::Gpio(MockPinError)));
        assert_eq!(m.attempt_measurement(), MeasurementResult::unavailable());
    }

    #[test]
    fn test_result_reset_after_failed_attempt() {
        let mut m = meter(MockInterface::with_echo(100, 580));
        assert!(m.attempt_measurement().succeeded);
        m.interface.echo_rise_after_us = None;
        let result = m.attempt_measurement();
        assert_eq!(result, MeasurementResult::unavailable());
        assert_eq!(m.last_result(), MeasurementResult::unavailable());
    }

    #[test]
    fn test_unpowered_rail_skips_gpio() {
        let mut mock = MockInterface::with_echo(100, 580);
        mock.boost_can_start = false;
        let mut m = meter(mock);
        assert!(!m.power_state().rail_confirmed_on);
        assert_eq!(m.try_measure(), Err(MeterError::PowerUnavailable));
        assert!(!m.attempt_measurement().succeeded);
        assert_eq!(m.interface.configure_calls, 0);
        assert_eq!(m.interface.trigger_pulses, 0);
    }

    #[test]
    fn test_rail_retried_until_confirmed() {
        let mut mock = MockInterface::with_echo(100, 580);
        mock.boost_can_start = false;
        let mut m = meter(mock);
        assert!(!m.attempt_measurement().succeeded);
        m.interface.charging = true;
        assert!(m.attempt_measurement().succeeded);
        assert!(!m.power_state().boost_enabled_by_session);
    }

    // --- Configuration ---

    #[test]
    fn test_configure_parks_old_pins() {
        let mut m = meter(MockInterface::with_echo(100, 580));
        m.attempt_measurement();
        let (trigger, echo) = sel(2, 1);
        m.configure(trigger, echo).unwrap();
        assert_eq!(m.interface.config_of(TRIGGER_PINS[0]), Some(PinConfig::SAFE_DEFAULT));
        assert_eq!(m.interface.config_of(ECHO_PINS[0]), Some(PinConfig::SAFE_DEFAULT));

        let result = m.attempt_measurement();
        assert!(result.succeeded);
        assert_eq!(m.interface.config_of(TRIGGER_PINS[2]), Some(PinConfig::TRIGGER));
        assert_eq!(m.interface.config_of(ECHO_PINS[1]), Some(PinConfig::ECHO));
    }

    #[test]
    fn test_configure_keeps_old_pins_when_parking_fails() {
        let mut m = meter(MockInterface::with_echo(100, 580));
        assert!(m.attempt_measurement().succeeded);
        m.interface.fail_configure_for = Some(TRIGGER_PINS[0]);

        let (trigger, echo) = sel(2, 1);
        assert_eq!(m.configure(trigger, echo), Err(MeterError::Gpio(MockPinError)));
        assert_eq!(m.config().trigger, TriggerSelection::default());
        assert_eq!(m.config().echo, EchoSelection::default());

        assert_eq!(m.measure_with(trigger, echo), MeasurementResult::unavailable());
        assert_eq!(m.config().trigger, TriggerSelection::default());
        assert_eq!(m.interface.config_of(TRIGGER_PINS[2]), None);
    }

    #[test]
    fn test_measure_with_selection() {
        let mut m = meter(MockInterface::with_echo(100, 2_900));
        let (trigger, echo) = sel(1, 1);
        let result = m.measure_with(trigger, echo);
        assert!(result.succeeded);
        assert_eq!(m.config().trigger, trigger);
        assert_eq!(m.config().echo, echo);
    }

    #[test]
    fn test_ticker_paces_attempts() {
        let mut m = meter(MockInterface::with_echo(100, 580));
        let mut ticker = m.ticker();
        assert_eq!(ticker.period_ms(), 200);
        assert!(ticker.poll(&mut m).is_some());
        assert!(ticker.poll(&mut m).is_none());
        m.interface.advance(200_000);
        let result = ticker.poll(&mut m);
        assert!(result.map_or(false, |r| r.succeeded));
    }

    // --- Teardown ---

    #[test]
    fn test_teardown_restores_everything() {
        let mut m = meter(MockInterface::with_echo(100, 580));
        m.attempt_measurement();
        m.teardown();
        assert!(m.is_closed());
        assert!(m.interface.all_parked());
        assert_eq!(m.interface.config_of(TRIGGER_PINS[0]), Some(PinConfig::SAFE_DEFAULT));
        assert_eq!(m.interface.config_of(ECHO_PINS[0]), Some(PinConfig::SAFE_DEFAULT));
        assert!(!m.interface.boost_enabled);
        assert!(!m.interface.charge_suppressed);
        assert_eq!(m.power_state(), PowerState::default());
    }

    #[test]
    fn test_teardown_parks_echo_when_trigger_fails() {
        let mut m = meter(MockInterface::with_echo(100, 580));
        assert!(m.attempt_measurement().succeeded);
        m.interface.fail_configure_for = Some(TRIGGER_PINS[0]);
        m.teardown();
        assert_eq!(m.interface.config_of(ECHO_PINS[0]), Some(PinConfig::SAFE_DEFAULT));
        assert_eq!(m.interface.config_of(TRIGGER_PINS[0]), Some(PinConfig::TRIGGER));
        assert!(!m.interface.boost_enabled);
        assert!(!m.interface.charge_suppressed);
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let mut m = meter(MockInterface::with_echo(100, 580));
        m.teardown();
        let calls = m.interface.configure_calls;
        m.teardown();
        assert_eq!(m.interface.configure_calls, calls);
        assert_eq!(m.interface.boost_disable_calls, 1);
        assert!(m.interface.all_parked());
    }

    #[test]
    fn test_teardown_keeps_external_boost_on() {
        let mut mock = MockInterface::new();
        mock.boost_enabled = true;
        let mut m = meter(mock);
        m.teardown();
        assert!(m.interface.boost_enabled);
        assert_eq!(m.interface.boost_disable_calls, 0);
    }

    #[test]
    fn test_attempt_after_teardown() {
        let mut m = meter(MockInterface::with_echo(100, 580));
        m.teardown();
        let pulses = m.interface.trigger_pulses;
        assert_eq!(m.try_measure(), Err(MeterError::SessionClosed));
        assert!(!m.attempt_measurement().succeeded);
        assert_eq!(m.interface.trigger_pulses, pulses);
        assert!(!m.interface.boost_enabled);
    }

    #[test]
    fn test_drop_runs_teardown() {
        struct DropWatch<'a> {
            inner: MockInterface,
            dropped_parked: &'a Cell<bool>,
        }
        // Forwards to the mock; records whether pins were parked by the time boost goes off.
        impl SonicGpio for DropWatch<'_> {
            type Error = MockPinError;
            fn configure(&mut self, pin: GpioId, config: PinConfig) -> Result<(), MockPinError> {
                self.inner.configure(pin, config)
            }
            fn write(&mut self, pin: GpioId, high: bool) -> Result<(), MockPinError> {
                self.inner.write(pin, high)
            }
            fn read(&mut self, pin: GpioId) -> Result<bool, MockPinError> {
                self.inner.read(pin)
            }
        }
        impl SonicTimer for DropWatch<'_> {
            fn tick_ms(&self) -> u32 {
                self.inner.tick_ms()
            }
            fn delay_us(&mut self, us: u32) {
                self.inner.delay_us(us)
            }
        }
        impl CycleCounter for DropWatch<'_> {
            fn cycles(&self) -> u32 {
                self.inner.cycles()
            }
            fn cycles_per_microsecond(&self) -> u32 {
                self.inner.cycles_per_microsecond()
            }
        }
        impl PowerSupply for DropWatch<'_> {
            fn is_charging(&self) -> bool {
                self.inner.is_charging()
            }
            fn is_boost_enabled(&self) -> bool {
                self.inner.is_boost_enabled()
            }
            fn enable_boost(&mut self) -> bool {
                self.inner.enable_boost()
            }
            fn disable_boost(&mut self) {
                self.inner.disable_boost();
                self.dropped_parked.set(self.inner.all_parked());
            }
            fn suppress_charge(&mut self, suppress: bool) {
                self.inner.suppress_charge(suppress)
            }
        }

        let parked = Cell::new(false);
        {
            let watch = DropWatch { inner: MockInterface::with_echo(100, 580), dropped_parked: &parked };
            let mut m = SyncMeter::new(watch, MeterConfig::default()).unwrap();
            assert!(m.attempt_measurement().succeeded);
            assert!(!parked.get());
        }
        assert!(parked.get());
    }
}
