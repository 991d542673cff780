//! Engine and electric boost motor accessors.

use super::Reader;
use crate::resolve::VehicleQuery;

/// Combustion engine state.
#[derive(Clone)]
pub struct Engine {
    reader: Reader,
}

impl Engine {
    pub(crate) fn new(reader: Reader) -> Self {
        Self { reader }
    }

    /// Current gear: -1 reverse, 0 neutral, 1+ forward.
    pub fn gear(&self, veh: VehicleQuery) -> i64 {
        self.reader.tele(veh, |v| v.gear)
    }

    /// Number of forward gears.
    pub fn gear_max(&self, veh: VehicleQuery) -> i64 {
        self.reader.tele(veh, |v| v.max_gears)
    }

    /// Engine speed, rpm.
    pub fn rpm(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.engine_rpm)
    }

    /// Rev limit, rpm.
    pub fn rpm_max(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.engine_max_rpm)
    }

    /// Turbo boost pressure, Pascals.
    pub fn turbo(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.turbo_boost_pressure)
    }

    /// Oil temperature, Celsius.
    pub fn oil_temperature(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.engine_oil_temp)
    }

    /// Water temperature, Celsius.
    pub fn water_temperature(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.engine_water_temp)
    }
}

/// Electric boost motor state (hybrid-equipped vehicles).
#[derive(Clone)]
pub struct ElectricMotor {
    reader: Reader,
}

impl ElectricMotor {
    pub(crate) fn new(reader: Reader) -> Self {
        Self { reader }
    }

    /// Motor speed, rpm.
    pub fn rpm(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.electric_boost_motor_rpm)
    }

    /// Motor torque, N·m.
    pub fn torque(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.electric_boost_motor_torque)
    }

    /// Motor state: 0 unavailable, 1 inactive, 2 propulsion, 3 regeneration.
    pub fn state(&self, veh: VehicleQuery) -> i64 {
        self.reader.tele(veh, |v| v.electric_boost_motor_state)
    }

    /// Battery charge fraction, 0.0..=1.0.
    pub fn battery_charge(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.battery_charge_fraction)
    }

    /// Motor temperature, Celsius.
    pub fn motor_temperature(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.electric_boost_motor_temperature)
    }

    /// Motor cooling water temperature, Celsius.
    pub fn water_temperature(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.electric_boost_water_temperature)
    }
}
