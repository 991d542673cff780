//! Driver input and cockpit switch accessors.

use super::Reader;
use crate::raw::RawValue;
use crate::resolve::VehicleQuery;

/// Driver control inputs.
///
/// "Filtered" values include driving-aid and smoothing effects; "raw" values
/// are the unfiltered device positions.
#[derive(Clone)]
pub struct Input {
    reader: Reader,
}

impl Input {
    pub(crate) fn new(reader: Reader) -> Self {
        Self { reader }
    }

    /// Throttle after filtering, 0.0..=1.0.
    pub fn throttle(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.filtered_throttle)
    }

    /// Raw throttle position, 0.0..=1.0.
    pub fn throttle_raw(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.unfiltered_throttle)
    }

    /// Brake after filtering, 0.0..=1.0.
    pub fn brake(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.filtered_brake)
    }

    /// Raw brake position, 0.0..=1.0.
    pub fn brake_raw(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.unfiltered_brake)
    }

    /// Clutch after filtering, 0.0..=1.0.
    pub fn clutch(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.filtered_clutch)
    }

    /// Raw clutch position, 0.0..=1.0.
    pub fn clutch_raw(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.unfiltered_clutch)
    }

    /// Steering after filtering, -1.0 (full left) ..= 1.0 (full right).
    pub fn steering(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.filtered_steering)
    }

    /// Raw steering position, -1.0..=1.0.
    pub fn steering_raw(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.unfiltered_steering)
    }

    /// Torque on the steering shaft, N·m.
    pub fn steering_shaft_torque(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.steering_shaft_torque)
    }

    /// Physical steering wheel rotation range, degrees.
    pub fn steering_range_physical(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.physical_steering_wheel_range)
    }

    /// Visual steering wheel rotation range, degrees.
    pub fn steering_range_visual(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.visual_steering_wheel_range)
    }

    /// Current steering force-feedback output, producer-native torque units.
    pub fn force_feedback(&self) -> f64 {
        self.reader.force_feedback().force_value.sample().unwrap_or_default()
    }
}

/// Cockpit switches.
///
/// Values are the producer's small state codes widened to `i64`; several of
/// these are tri-state or wider, so they are not collapsed to booleans.
#[derive(Clone)]
pub struct Switch {
    reader: Reader,
}

impl Switch {
    pub(crate) fn new(reader: Reader) -> Self {
        Self { reader }
    }

    /// Headlight state.
    pub fn headlights(&self, veh: VehicleQuery) -> i64 {
        self.reader.tele(veh, |v| v.headlights)
    }

    /// Ignition state: 0 off, 1 ignition, 2 ignition + starter.
    pub fn ignition_starter(&self, veh: VehicleQuery) -> i64 {
        self.reader.tele(veh, |v| v.ignition_starter)
    }

    /// Pit speed limiter state.
    pub fn speed_limiter(&self, veh: VehicleQuery) -> i64 {
        self.reader.tele(veh, |v| v.speed_limiter)
    }

    /// Rear flap (DRS) activation state.
    pub fn drs(&self, veh: VehicleQuery) -> i64 {
        self.reader.tele(veh, |v| v.rear_flap_activated)
    }

    /// Rear flap legality: 0 disallowed, 1 detected, 2 allowed, 3 active.
    pub fn drs_status(&self, veh: VehicleQuery) -> i64 {
        self.reader.tele(veh, |v| v.rear_flap_legal_status)
    }

    /// Auto-clutch driving aid state, session-scoped.
    pub fn auto_clutch(&self) -> i64 {
        self.reader.extended().physics.auto_clutch as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{dataset, populated_snapshot};

    const PLAYER: VehicleQuery = VehicleQuery::LocalPlayer;

    #[test]
    fn filtered_and_raw_inputs_are_distinct_fields() {
        let mut snapshot = populated_snapshot();
        snapshot.telemetry.vehicles[0].filtered_throttle = 0.8;
        snapshot.telemetry.vehicles[0].unfiltered_throttle = 1.0;
        let data = dataset(snapshot);

        assert_eq!(data.input.throttle(PLAYER), 0.8);
        assert_eq!(data.input.throttle_raw(PLAYER), 1.0);
    }

    #[test]
    fn steering_ranges_widen_from_f32() {
        let mut snapshot = populated_snapshot();
        snapshot.telemetry.vehicles[0].physical_steering_wheel_range = 540.0;
        snapshot.telemetry.vehicles[0].visual_steering_wheel_range = 360.0;
        let data = dataset(snapshot);

        assert_eq!(data.input.steering_range_physical(PLAYER), 540.0);
        assert_eq!(data.input.steering_range_visual(PLAYER), 360.0);
    }

    #[test]
    fn force_feedback_is_session_scoped() {
        let mut snapshot = populated_snapshot();
        snapshot.force_feedback.force_value = -2.4;
        let data = dataset(snapshot);

        assert_eq!(data.input.force_feedback(), -2.4);
    }

    #[test]
    fn switch_codes_pass_through() {
        let mut snapshot = populated_snapshot();
        snapshot.telemetry.vehicles[0].ignition_starter = 2;
        snapshot.telemetry.vehicles[0].rear_flap_legal_status = 3;
        snapshot.extended.physics.auto_clutch = 1;
        let data = dataset(snapshot);

        assert_eq!(data.switch.ignition_starter(PLAYER), 2);
        assert_eq!(data.switch.drs_status(PLAYER), 3);
        assert_eq!(data.switch.auto_clutch(), 1);
    }
}
