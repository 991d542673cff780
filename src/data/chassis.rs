//! Per-wheel accessors: brakes, tyres, suspension, wheel geometry.
//!
//! All per-wheel values come back as `[f64; 4]` in front-left, front-right,
//! rear-left, rear-right order; tyre layer temperatures as `[[f64; 3]; 4]`
//! with layers left, centre, right of the contact patch. Arity is fixed at
//! compile time: it is a physical invariant, not a data-dependent length.

use super::Reader;
use crate::convert::kelvin_to_celsius;
use crate::pages::{TEMPERATURE_LAYERS, WHEEL_COUNT, WheelTelemetry};
use crate::raw::RawValue;
use crate::resolve::VehicleQuery;

/// Per-layer temperatures for all four wheels, Celsius.
pub type WheelLayerTemps = [[f64; TEMPERATURE_LAYERS]; WHEEL_COUNT];

/// Brake state.
#[derive(Clone)]
pub struct Brake {
    reader: Reader,
}

impl Brake {
    pub(crate) fn new(reader: Reader) -> Self {
        Self { reader }
    }

    /// Rear brake bias fraction, 0.0..=1.0.
    pub fn bias(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.rear_brake_bias)
    }

    /// Brake line pressure per wheel.
    pub fn pressure(&self, veh: VehicleQuery) -> [f64; WHEEL_COUNT] {
        self.reader.tele_wheels(veh, |w| w.brake_pressure)
    }

    /// Brake disc temperature per wheel, Celsius.
    ///
    /// Unavailable reads convert from the zero-Kelvin default, i.e. absolute
    /// zero, unmistakably "no data" rather than a plausible disc reading.
    pub fn temperature(&self, veh: VehicleQuery) -> [f64; WHEEL_COUNT] {
        self.reader.tele_wheels(veh, |w| w.brake_temp).map(kelvin_to_celsius)
    }
}

/// Tyre state.
#[derive(Clone)]
pub struct Tyre {
    reader: Reader,
}

impl Tyre {
    pub(crate) fn new(reader: Reader) -> Self {
        Self { reader }
    }

    /// Tyre compound indices as (front, rear).
    pub fn compound(&self, veh: VehicleQuery) -> (i64, i64) {
        (
            self.reader.tele(veh, |v| v.front_tire_compound_index),
            self.reader.tele(veh, |v| v.rear_tire_compound_index),
        )
    }

    /// Surface temperature per wheel and layer, Celsius.
    pub fn surface_temperature(&self, veh: VehicleQuery) -> WheelLayerTemps {
        self.layer_temps(veh, |w| &w.temperature)
    }

    /// Inner-layer temperature per wheel and layer, Celsius.
    pub fn inner_temperature(&self, veh: VehicleQuery) -> WheelLayerTemps {
        self.layer_temps(veh, |w| &w.tire_inner_layer_temperature)
    }

    /// Tyre pressure per wheel, kPa.
    pub fn pressure(&self, veh: VehicleQuery) -> [f64; WHEEL_COUNT] {
        self.reader.tele_wheels(veh, |w| w.pressure)
    }

    /// Tyre load per wheel, Newtons.
    pub fn load(&self, veh: VehicleQuery) -> [f64; WHEEL_COUNT] {
        self.reader.tele_wheels(veh, |w| w.tire_load)
    }

    /// Remaining tread fraction per wheel, 0.0..=1.0.
    pub fn wear(&self, veh: VehicleQuery) -> [f64; WHEEL_COUNT] {
        self.reader.tele_wheels(veh, |w| w.wear)
    }

    fn layer_temps(
        &self,
        veh: VehicleQuery,
        field: impl for<'w> Fn(&'w WheelTelemetry) -> &'w [f64; TEMPERATURE_LAYERS],
    ) -> WheelLayerTemps {
        match self.reader.tele_veh(veh) {
            Some(v) => std::array::from_fn(|wheel| {
                std::array::from_fn(|layer| {
                    kelvin_to_celsius(field(&v.wheels[wheel])[layer].sample().unwrap_or_default())
                })
            }),
            None => [[kelvin_to_celsius(0.0); TEMPERATURE_LAYERS]; WHEEL_COUNT],
        }
    }
}

/// Suspension state.
#[derive(Clone)]
pub struct Suspension {
    reader: Reader,
}

impl Suspension {
    pub(crate) fn new(reader: Reader) -> Self {
        Self { reader }
    }

    /// Ride height per wheel, metres.
    pub fn ride_height(&self, veh: VehicleQuery) -> [f64; WHEEL_COUNT] {
        self.reader.tele_wheels(veh, |w| w.ride_height)
    }

    /// Suspension deflection per wheel, metres.
    pub fn deflection(&self, veh: VehicleQuery) -> [f64; WHEEL_COUNT] {
        self.reader.tele_wheels(veh, |w| w.suspension_deflection)
    }

    /// Suspension force per wheel, Newtons.
    pub fn force(&self, veh: VehicleQuery) -> [f64; WHEEL_COUNT] {
        self.reader.tele_wheels(veh, |w| w.susp_force)
    }
}

/// Wheel geometry.
#[derive(Clone)]
pub struct Wheel {
    reader: Reader,
}

impl Wheel {
    pub(crate) fn new(reader: Reader) -> Self {
        Self { reader }
    }

    /// Camber per wheel, radians.
    pub fn camber(&self, veh: VehicleQuery) -> [f64; WHEEL_COUNT] {
        self.reader.tele_wheels(veh, |w| w.camber)
    }

    /// Toe per wheel, radians.
    pub fn toe(&self, veh: VehicleQuery) -> [f64; WHEEL_COUNT] {
        self.reader.tele_wheels(veh, |w| w.toe)
    }

    /// Rotation speed per wheel, rad/s.
    pub fn rotation(&self, veh: VehicleQuery) -> [f64; WHEEL_COUNT] {
        self.reader.tele_wheels(veh, |w| w.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{dataset, populated_snapshot};

    const PLAYER: VehicleQuery = VehicleQuery::LocalPlayer;

    #[test]
    fn brake_temperatures_convert_to_celsius() {
        let mut snapshot = populated_snapshot();
        for wheel in &mut snapshot.telemetry.vehicles[0].wheels {
            wheel.brake_temp = 573.15;
        }
        let data = dataset(snapshot);

        assert_eq!(data.brake.temperature(PLAYER), [300.0; 4]);
    }

    #[test]
    fn layer_temperatures_convert_each_entry() {
        let mut snapshot = populated_snapshot();
        snapshot.telemetry.vehicles[0].wheels[2].temperature = [353.15, 363.15, 373.15];
        let data = dataset(snapshot);

        let temps = data.tyre.surface_temperature(PLAYER);
        assert_eq!(temps[2], [80.0, 90.0, 100.0]);
    }

    #[test]
    fn nan_layer_reads_convert_from_zero_kelvin() {
        let mut snapshot = populated_snapshot();
        snapshot.telemetry.vehicles[0].wheels[0].temperature = [f64::NAN; 3];
        let data = dataset(snapshot);

        let temps = data.tyre.surface_temperature(PLAYER);
        assert_eq!(temps[0], [-273.15; 3]);
    }

    #[test]
    fn missing_vehicle_yields_fixed_arity_defaults() {
        let data = dataset(populated_snapshot());
        let missing = VehicleQuery::Slot(50);

        assert_eq!(data.tyre.pressure(missing), [0.0; 4]);
        assert_eq!(data.tyre.surface_temperature(missing), [[-273.15; 3]; 4]);
        assert_eq!(data.suspension.ride_height(missing), [0.0; 4]);
        assert_eq!(data.wheel.camber(missing), [0.0; 4]);
    }

    #[test]
    fn per_wheel_reads_keep_wheel_order() {
        let mut snapshot = populated_snapshot();
        for (i, wheel) in snapshot.telemetry.vehicles[0].wheels.iter_mut().enumerate() {
            wheel.wear = 1.0 - (i as f64) * 0.1;
        }
        let data = dataset(snapshot);

        assert_eq!(data.tyre.wear(PLAYER), [1.0, 0.9, 0.8, 0.7]);
    }

    #[test]
    fn compound_pairs_front_and_rear() {
        let mut snapshot = populated_snapshot();
        snapshot.telemetry.vehicles[0].front_tire_compound_index = 1;
        snapshot.telemetry.vehicles[0].rear_tire_compound_index = 2;
        let data = dataset(snapshot);

        assert_eq!(data.tyre.compound(PLAYER), (1, 2));
    }
}
