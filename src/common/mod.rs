// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod board;
pub mod clock;
pub mod config;
pub mod distance;
pub mod error;
pub mod gpio;
pub mod hal_traits;
pub mod pins;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

pub use board::{AlwaysPowered, Board};
pub use clock::{elapsed_us, elapsed_whole_us, ticks_to_us, CycleSnapshot};
pub use config::MeterConfig;
pub use distance::duration_to_cm;
pub use error::{ConfigError, MeterError};
pub use gpio::{PinConfig, PinMode, SlewRate};
pub use hal_traits::{CycleCounter, PowerSupply, SonicGpio, SonicInterface, SonicTimer};
pub use pins::{resolve_echo, resolve_trigger, EchoSelection, GpioId, GpioPort, TriggerSelection};
pub use types::{Measurement, MeasurementResult, PowerState};

// timing.rs constants are reached via common::timing::*
