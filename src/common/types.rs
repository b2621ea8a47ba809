// src/common/types.rs

use super::distance::duration_to_cm;
use arrayvec::ArrayString;
use core::fmt;

// --- Measurement record ---

/// One completed echo measurement.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Echo pulse width in microseconds.
    pub echo_duration_us: u32,
    /// Distance derived from `echo_duration_us`.
    pub distance_cm: f32,
}

impl Measurement {
    pub fn from_duration_us(echo_duration_us: u32) -> Self {
        Measurement {
            echo_duration_us,
            distance_cm: duration_to_cm(echo_duration_us),
        }
    }
}

/// What the UI reads between attempts.
///
/// `succeeded == false` means "distance not available"; the other two fields
/// are then zero and carry no meaning.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeasurementResult {
    pub succeeded: bool,
    pub echo_duration_us: u32,
    pub distance_cm: f32,
}

impl MeasurementResult {
    pub const fn unavailable() -> Self {
        MeasurementResult {
            succeeded: false,
            echo_duration_us: 0,
            distance_cm: 0.0,
        }
    }

    pub fn measurement(&self) -> Option<Measurement> {
        if self.succeeded {
            Some(Measurement {
                echo_duration_us: self.echo_duration_us,
                distance_cm: self.distance_cm,
            })
        } else {
            None
        }
    }

    /// Renders the status line into a fixed buffer for `no_std` displays.
    pub fn render(&self) -> ArrayString<32> {
        let mut line = ArrayString::new();
        // Implausibly large readings overflow the buffer.
        if fmt::write(&mut line, format_args!("{}", self)).is_err() {
            line.clear();
            line.push_str("Distance ?");
        }
        line
    }
}

impl From<Measurement> for MeasurementResult {
    fn from(m: Measurement) -> Self {
        MeasurementResult {
            succeeded: true,
            echo_duration_us: m.echo_duration_us,
            distance_cm: m.distance_cm,
        }
    }
}

impl fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.succeeded {
            write!(f, "Distance {:.2} cm", self.distance_cm)
        } else {
            write!(f, "Distance N/A")
        }
    }
}

// --- Session power bookkeeping ---

/// Rail state for one session.
///
/// `rail_confirmed_on` only ever goes from false to true within a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerState {
    pub rail_confirmed_on: bool,
    /// This session switched the boost converter on and must switch it off.
    pub boost_enabled_by_session: bool,
    /// This session is holding off battery charging.
    pub charge_suppressed: bool,
}
