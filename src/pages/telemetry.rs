//! Telemetry region: per-vehicle physics state.
//!
//! Slots in this region follow the producer's internal physics/draw order,
//! which is NOT guaranteed to match scoring order or to stay stable between
//! refreshes. Cross-reference by the `id` field (see [`crate::resolve`]).

use super::{MAX_VEHICLES, TEMPERATURE_LAYERS, Vec3, WHEEL_COUNT, read_page};
use crate::Result;

/// Per-wheel physics state.
///
/// Wheel order is front-left, front-right, rear-left, rear-right.
/// Temperatures are published in Kelvin; pressures in kPa; forces in Newtons.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelTelemetry {
    pub suspension_deflection: f64,
    pub ride_height: f64,
    pub susp_force: f64,
    /// Brake disc temperature, Kelvin.
    pub brake_temp: f64,
    pub brake_pressure: f64,
    /// Wheel rotation speed, rad/s.
    pub rotation: f64,
    pub lateral_patch_vel: f64,
    pub longitudinal_patch_vel: f64,
    pub lateral_ground_vel: f64,
    pub longitudinal_ground_vel: f64,
    /// Camber angle, radians.
    pub camber: f64,
    pub lateral_force: f64,
    pub longitudinal_force: f64,
    pub tire_load: f64,
    pub grip_fract: f64,
    /// Tyre pressure, kPa.
    pub pressure: f64,
    /// Tyre surface temperature per layer, Kelvin.
    pub temperature: [f64; TEMPERATURE_LAYERS],
    /// Remaining tread fraction, 0.0..=1.0.
    pub wear: f64,
    pub terrain_name: [u8; 16],
    pub surface_type: u8,
    pub flat: u8,
    pub detached: u8,
    pub vertical_tire_deflection: f64,
    pub wheel_y_location: f64,
    /// Toe angle, radians.
    pub toe: f64,
    pub tire_carcass_temperature: f64,
    /// Tyre inner-layer temperature per layer, Kelvin.
    pub tire_inner_layer_temperature: [f64; TEMPERATURE_LAYERS],
}

/// One vehicle's physics-state slot.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleTelemetry {
    /// Stable vehicle identifier, shared with the scoring region.
    pub id: i32,
    pub delta_time: f64,
    /// Session clock at the last physics update, seconds.
    pub elapsed_time: f64,
    pub lap_number: i32,
    /// Session clock at the start of the current lap, seconds.
    pub lap_start_et: f64,
    pub vehicle_name: [u8; 64],
    pub track_name: [u8; 64],

    /// World position, producer coordinate convention.
    pub pos: Vec3,
    /// Velocity in the vehicle-local frame, m/s.
    pub local_vel: Vec3,
    /// Acceleration in the vehicle-local frame, m/s^2.
    pub local_accel: Vec3,
    /// Orientation matrix rows.
    pub ori: [Vec3; 3],
    pub local_rot: Vec3,
    pub local_rot_accel: Vec3,

    /// Current gear: -1 reverse, 0 neutral, 1+ forward.
    pub gear: i32,
    pub engine_rpm: f64,
    /// Engine water temperature, Celsius.
    pub engine_water_temp: f64,
    /// Engine oil temperature, Celsius.
    pub engine_oil_temp: f64,
    pub clutch_rpm: f64,

    pub unfiltered_throttle: f64,
    pub unfiltered_brake: f64,
    pub unfiltered_steering: f64,
    pub unfiltered_clutch: f64,
    pub filtered_throttle: f64,
    pub filtered_brake: f64,
    pub filtered_steering: f64,
    pub filtered_clutch: f64,

    pub steering_shaft_torque: f64,
    pub front_wing_height: f64,
    pub front_ride_height: f64,
    pub rear_ride_height: f64,
    pub drag: f64,
    pub front_downforce: f64,
    pub rear_downforce: f64,

    /// Remaining fuel, litres.
    pub fuel: f64,
    pub engine_max_rpm: f64,
    pub scheduled_stops: u8,
    pub overheating: u8,
    pub detached: u8,
    pub headlights: u8,
    pub dent_severity: [u8; 8],
    pub last_impact_et: f64,
    pub last_impact_magnitude: f64,
    pub last_impact_pos: Vec3,

    pub engine_torque: f64,
    /// Raw sector index in producer order; see [`crate::convert::sector_from_raw`].
    pub current_sector: i32,
    pub speed_limiter: u8,
    pub max_gears: u8,
    pub front_tire_compound_index: u8,
    pub rear_tire_compound_index: u8,
    /// Fuel tank capacity, litres.
    pub fuel_capacity: f64,
    pub front_flap_activated: u8,
    pub rear_flap_activated: u8,
    pub rear_flap_legal_status: u8,
    /// 0 off, 1 ignition, 2 ignition + starter.
    pub ignition_starter: u8,
    pub front_tire_compound_name: [u8; 18],
    pub rear_tire_compound_name: [u8; 18],
    pub speed_limiter_available: u8,
    pub anti_stall_activated: u8,
    pub visual_steering_wheel_range: f32,

    /// Rear brake bias fraction, 0.0..=1.0.
    pub rear_brake_bias: f64,
    pub turbo_boost_pressure: f64,
    pub physics_to_graphics_offset: [f32; 3],
    pub physical_steering_wheel_range: f32,

    pub battery_charge_fraction: f64,
    pub electric_boost_motor_torque: f64,
    pub electric_boost_motor_rpm: f64,
    pub electric_boost_motor_temperature: f64,
    pub electric_boost_water_temperature: f64,
    /// 0 unavailable, 1 inactive, 2 propulsion, 3 regeneration.
    pub electric_boost_motor_state: u8,

    pub wheels: [WheelTelemetry; WHEEL_COUNT],
}

/// The telemetry region as mapped by the producer.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TelemetryPage {
    pub version_update_begin: u32,
    pub version_update_end: u32,
    pub bytes_updated_hint: i32,
    /// Number of populated vehicle slots.
    pub num_vehicles: i32,
    pub vehicles: [VehicleTelemetry; MAX_VEHICLES],
}

impl TelemetryPage {
    /// Copy a telemetry page out of a raw mapped region.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        read_page(bytes)
    }

    /// Whether the producer was mid-write when this copy was taken.
    pub fn is_torn(&self) -> bool {
        self.version_update_begin != self.version_update_end
    }

    /// Populated vehicle slots, clamped to the mapped maximum.
    pub fn vehicle_count(&self) -> usize {
        self.num_vehicles.clamp(0, MAX_VEHICLES as i32) as usize
    }

    /// Bounds-checked slot access over the populated range.
    pub fn vehicle(&self, slot: usize) -> Option<&VehicleTelemetry> {
        self.vehicles.get(..self.vehicle_count())?.get(slot)
    }
}

// All-zero is the producer's "not yet written" state; every field is plain
// old data, so the zero bit pattern is a valid value.
impl Default for WheelTelemetry {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

impl Default for VehicleTelemetry {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

impl Default for TelemetryPage {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_access_is_bounds_checked() {
        let mut page = TelemetryPage::default();
        page.num_vehicles = 2;
        page.vehicles[0].id = 10;
        page.vehicles[1].id = 11;

        assert_eq!(page.vehicle(0).map(|v| v.id), Some(10));
        assert_eq!(page.vehicle(1).map(|v| v.id), Some(11));
        // Slot 2 exists in the mapped array but is not populated.
        assert!(page.vehicle(2).is_none());
        assert!(page.vehicle(MAX_VEHICLES + 5).is_none());
    }

    #[test]
    fn negative_vehicle_count_is_treated_as_empty() {
        let mut page = TelemetryPage::default();
        page.num_vehicles = -1;
        assert_eq!(page.vehicle_count(), 0);
        assert!(page.vehicle(0).is_none());
    }

    #[test]
    fn oversized_vehicle_count_is_clamped() {
        let mut page = TelemetryPage::default();
        page.num_vehicles = i32::MAX;
        assert_eq!(page.vehicle_count(), MAX_VEHICLES);
    }
}
