// src/meter/sync_meter/power.rs

use super::SyncMeter;
use crate::common::hal_traits::{PowerSupply, SonicInterface};
use log::{debug, info, warn};

impl<IF> SyncMeter<IF>
where
    IF: SonicInterface,
{
    /// Makes sure the sensor's 5V rail is up, switching the boost converter on if needed.
    ///
    /// Once confirmed the answer is cached for the rest of the session and the
    /// hardware is not asked again. If the rail is later cut externally, the
    /// next attempt simply gets no echo.
    pub fn ensure_rail_on(&mut self) -> bool {
        if self.power.rail_confirmed_on {
            return true;
        }
        if self.closed {
            return false;
        }

        if self.interface.is_charging() || self.interface.is_boost_enabled() {
            debug!("5V rail already powered");
            self.power.rail_confirmed_on = true;
        } else if self.interface.enable_boost() {
            info!("Enabled boost supply for the sensor rail");
            self.power.boost_enabled_by_session = true;
            self.power.rail_confirmed_on = true;
        } else {
            warn!("Sensor rail could not be powered");
        }

        self.power.rail_confirmed_on
    }

    /// Holds off battery charging for the session so the boost load can't brown out.
    pub(super) fn suppress_charging(&mut self) {
        if !self.power.charge_suppressed {
            self.interface.suppress_charge(true);
            self.power.charge_suppressed = true;
        }
    }

    /// Undoes whatever this session changed on the power side.
    pub(super) fn release_power(&mut self) {
        if self.power.boost_enabled_by_session {
            self.interface.disable_boost();
            self.power.boost_enabled_by_session = false;
            debug!("Boost supply disabled");
        }
        if self.power.charge_suppressed {
            self.interface.suppress_charge(false);
            self.power.charge_suppressed = false;
        }
        self.power.rail_confirmed_on = false;
    }
}
